use serde::Serialize;
use tracing::{debug, warn};

use crate::equations;
use crate::pendulum::PendulumProperties;
use crate::utils::{deg_to_rad, rad_to_deg, PendulumError};

/// A simple pendulum with validated parameters.
///
/// Length and mass must be finite and positive, theta must be finite. The
/// derived quantities are exactly those of the free functions in
/// [`crate::equations`] for the stored values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pendulum {
    length: f64,
    mass: f64,
    theta: f64,
}

impl Pendulum {
    pub fn new(length: f64, mass: f64, theta: f64) -> Result<Self, PendulumError> {
        if !length.is_finite() || length <= 0.0 {
            return Err(PendulumError::InvalidLength(length));
        }
        if !mass.is_finite() || mass <= 0.0 {
            return Err(PendulumError::InvalidMass(mass));
        }
        if !theta.is_finite() {
            return Err(PendulumError::InvalidAngle(theta));
        }

        Ok(Self {
            length,
            mass,
            theta,
        })
    }

    /// Build a pendulum from a displacement given in degrees.
    pub fn from_degrees(length: f64, mass: f64, theta_deg: f64) -> Result<Self, PendulumError> {
        Self::new(length, mass, deg_to_rad(theta_deg))
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }

    pub fn theta_degrees(&self) -> f64 {
        rad_to_deg(self.theta)
    }

    pub fn period(&self) -> f64 {
        equations::get_period(self.length)
    }

    /// Oscillation frequency in Hz
    pub fn frequency(&self) -> f64 {
        1.0 / self.period()
    }

    pub fn max_height(&self) -> f64 {
        equations::max_height(self.length, self.theta)
    }

    pub fn max_speed(&self) -> f64 {
        equations::max_speed(self.length, self.theta)
    }

    pub fn is_small_angle(&self) -> bool {
        equations::check_small_angle(self.theta)
    }

    pub fn bpm(&self) -> f64 {
        equations::bpm(self.length)
    }

    pub fn energy(&self) -> f64 {
        equations::calc_energy(self.mass, self.theta, self.length)
    }

    /// Evaluate every derived quantity at once.
    pub fn properties(&self) -> PendulumProperties {
        debug!(
            length = self.length,
            mass = self.mass,
            theta = self.theta,
            "Evaluating pendulum properties"
        );

        let small_angle = self.is_small_angle();
        if !small_angle {
            warn!(
                "Displacement of {:.4} deg exceeds the small-angle limit, period is approximate",
                self.theta_degrees()
            );
        }

        PendulumProperties {
            length: self.length,
            mass: self.mass,
            theta: self.theta,
            period: self.period(),
            frequency: self.frequency(),
            bpm: self.bpm(),
            max_height: self.max_height(),
            max_speed: self.max_speed(),
            energy: self.energy(),
            small_angle,
        }
    }
}
