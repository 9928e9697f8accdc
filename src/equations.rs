//! Closed-form simple pendulum equations.
//!
//! Every function here is a pure mapping from SI scalars (metres, kilograms,
//! radians) to a single result. Inputs are not validated: a non-positive
//! `length` propagates as NaN or infinity. Use [`crate::Pendulum`] for a
//! validated front end.

use crate::utils::{G, SECONDS_IN_MINUTE, SMALL_ANGLE_LIMIT};
use std::f64::consts::PI;

/// Period [s] of a simple pendulum of `length` [m] under the small-angle approximation.
#[inline]
pub fn get_period(length: f64) -> f64 {
    2.0 * PI * (length / G).sqrt()
}

/// Maximum vertical height [m] of the bob for a maximum displacement `theta` [rad].
///
/// Measured as `length * cos(theta)`, i.e. relative to the pivot-to-bob
/// distance rather than the lowest point of the swing.
#[inline]
pub fn max_height(length: f64, theta: f64) -> f64 {
    length * theta.cos()
}

/// Maximum speed [m/s] of the bob, from energy conservation over [`max_height`].
#[inline]
pub fn max_speed(length: f64, theta: f64) -> f64 {
    (2.0 * G * max_height(length, theta)).sqrt()
}

/// Whether the small-angle approximation holds, i.e. `theta <= 0.1°`.
#[inline]
pub fn check_small_angle(theta: f64) -> bool {
    theta <= SMALL_ANGLE_LIMIT
}

/// Frequency of the pendulum in beats per minute [1/min].
#[inline]
pub fn bpm(length: f64) -> f64 {
    SECONDS_IN_MINUTE / get_period(length)
}

/// Total mechanical energy [J], taken as the kinetic energy at the lowest point.
#[inline]
pub fn calc_energy(mass: f64, theta: f64, length: f64) -> f64 {
    0.5 * mass * max_speed(length, theta).powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_period_one_metre() {
        assert_relative_eq!(get_period(1.0), 2.0064, epsilon = 1e-3);
    }

    #[test]
    fn test_period_monotonic() {
        let lengths = [0.01, 0.1, 0.5, 1.0, 2.0, 10.0, 100.0];
        for pair in lengths.windows(2) {
            assert!(get_period(pair[0]) > 0.0);
            assert!(get_period(pair[1]) > get_period(pair[0]));
        }
    }

    #[test]
    fn test_max_height() {
        assert_eq!(max_height(1.0, 0.0), 1.0);
        assert_relative_eq!(max_height(2.0, PI / 3.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_max_speed_uses_height() {
        for &(length, theta) in &[(1.0, 0.0), (1.0, 0.5), (3.2, 1.1), (0.25, 0.01)] {
            assert_eq!(
                max_speed(length, theta),
                (2.0 * 9.81 * max_height(length, theta)).sqrt()
            );
        }
    }

    #[test]
    fn test_max_speed_horizontal() {
        assert_relative_eq!(max_speed(1.0, PI / 2.0), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_small_angle_boundary() {
        assert!(check_small_angle(0.0));
        assert!(check_small_angle(PI / 1800.0));
        assert!(!check_small_angle(PI / 1800.0 + 1e-12));
        assert!(!check_small_angle(0.5));
    }

    #[test]
    fn test_bpm() {
        assert_eq!(bpm(1.0), 60.0 / get_period(1.0));
        assert_relative_eq!(bpm(1.0), 29.9, epsilon = 0.1);
    }

    #[test]
    fn test_energy() {
        assert_eq!(
            calc_energy(1.0, 0.5, 1.0),
            0.5 * 1.0 * max_speed(1.0, 0.5).powi(2)
        );
        // 0.5 * m * 2 * g * h collapses to m * g * h
        assert_relative_eq!(calc_energy(2.0, 0.0, 1.5), 2.0 * 9.81 * 1.5, epsilon = 1e-9);
    }

    #[test]
    fn test_non_positive_length_propagates() {
        assert!(get_period(-1.0).is_nan());
        assert!(max_speed(-1.0, 0.0).is_nan());
        assert_eq!(get_period(0.0), 0.0);
        assert!(bpm(0.0).is_infinite());
        assert!(calc_energy(1.0, 0.0, -1.0).is_nan());
    }
}
