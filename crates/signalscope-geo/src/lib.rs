//! Pure geometry for the SignalScope coverage model.
//!
//! Great-circle distance on a spherical Earth, and the signal-strength
//! estimate derived from tower geometry. No I/O, no state; every function
//! is deterministic in its floating-point inputs.

mod distance;
mod signal;
mod types;

pub use distance::{great_circle_distance_km, EARTH_RADIUS_KM};
pub use signal::{
    estimate_signal_strength, BASE_SIGNAL_DBM, DISTANCE_PENALTY_DBM_PER_KM,
    HEIGHT_BONUS_DIVISOR_M, MAX_HEIGHT_BONUS_DBM, MAX_SIGNAL_DBM, MIN_SIGNAL_DBM,
};
pub use types::{Point, TowerGeometry};
