//! Geometry input types.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A fixed antenna position and its height above ground in meters.
///
/// Estimation input only; never mutated by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TowerGeometry {
    pub lat: f64,
    pub lng: f64,
    pub height: f64,
}

impl TowerGeometry {
    pub fn new(lat: f64, lng: f64, height: f64) -> Self {
        Self { lat, lng, height }
    }

    /// The tower's ground position.
    pub fn position(&self) -> Point {
        Point::new(self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_serialization() {
        let point = Point::new(40.7128, -74.0060);
        let json = serde_json::to_string(&point).unwrap();

        assert!(json.contains("\"lat\":40.7128"));
        assert!(json.contains("\"lng\":-74.006"));
    }

    #[test]
    fn test_tower_geometry_deserialization() {
        let json = r#"{"lat": 40.7128, "lng": -74.0060, "height": 150}"#;
        let tower: TowerGeometry = serde_json::from_str(json).unwrap();

        assert_eq!(tower.lat, 40.7128);
        assert_eq!(tower.lng, -74.0060);
        assert_eq!(tower.height, 150.0);
    }

    #[test]
    fn test_tower_position() {
        let tower = TowerGeometry::new(34.0522, -118.2437, 120.0);
        assert_eq!(tower.position(), Point::new(34.0522, -118.2437));
    }
}
