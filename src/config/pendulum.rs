use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::pendulum::Pendulum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendulumConfig {
    /// Pivot-to-bob length [m]
    pub length: f64,
    /// Bob mass [kg]
    pub mass: f64,
    /// Maximum angular displacement, in `angle_unit`
    pub theta: f64,
    #[serde(default)]
    pub angle_unit: AngleUnit,
}

impl Default for PendulumConfig {
    fn default() -> Self {
        Self {
            length: 1.0,
            mass: 1.0,
            theta: 0.001,
            angle_unit: AngleUnit::Radians,
        }
    }
}

impl PendulumConfig {
    pub fn to_pendulum(&self) -> Result<Pendulum, ConfigError> {
        let pendulum = match self.angle_unit {
            AngleUnit::Radians => Pendulum::new(self.length, self.mass, self.theta)?,
            AngleUnit::Degrees => Pendulum::from_degrees(self.length, self.mass, self.theta)?,
        };
        Ok(pendulum)
    }
}
