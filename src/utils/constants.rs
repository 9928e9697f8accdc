use std::f64::consts::PI;

pub const G: f64 = 9.81; // m/s^2
pub const SECONDS_IN_MINUTE: f64 = 60.0;

// 0.1 degrees, upper bound of the small-angle approximation
pub const SMALL_ANGLE_LIMIT: f64 = PI / 1800.0; // rad
