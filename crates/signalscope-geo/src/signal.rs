//! Signal-strength prediction from tower geometry.

use crate::distance::great_circle_distance_km;
use crate::types::{Point, TowerGeometry};

/// Received signal right at the mast, in dBm.
pub const BASE_SIGNAL_DBM: f64 = -40.0;

/// Cap on the antenna-height bonus, in dBm.
pub const MAX_HEIGHT_BONUS_DBM: f64 = 10.0;

/// Meters of antenna height per dBm of bonus.
pub const HEIGHT_BONUS_DIVISOR_M: f64 = 50.0;

/// Path loss per kilometer of great-circle distance, in dBm.
pub const DISTANCE_PENALTY_DBM_PER_KM: f64 = 8.0;

/// Weakest reportable signal.
pub const MIN_SIGNAL_DBM: i32 = -120;

/// Strongest reportable signal.
pub const MAX_SIGNAL_DBM: i32 = -50;

/// Predict the received signal strength at `point`, in whole dBm.
///
/// Baseline plus a capped height bonus, minus a penalty linear in
/// great-circle distance. The raw value is truncated toward zero and then
/// clamped to the reportable band. For a fixed tower the estimate is
/// non-increasing in distance until the band saturates.
pub fn estimate_signal_strength(tower: &TowerGeometry, point: Point) -> i32 {
    let distance = great_circle_distance_km(tower.position(), point);
    let height_bonus = (tower.height / HEIGHT_BONUS_DIVISOR_M).min(MAX_HEIGHT_BONUS_DBM);
    let signal = BASE_SIGNAL_DBM + height_bonus - distance * DISTANCE_PENALTY_DBM_PER_KM;

    (signal as i32).clamp(MIN_SIGNAL_DBM, MAX_SIGNAL_DBM)
}
