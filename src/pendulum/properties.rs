use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of every derived quantity of a [`crate::Pendulum`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendulumProperties {
    /// Inputs
    pub length: f64,
    pub mass: f64,
    pub theta: f64,

    /// Oscillation. Derived fields can be NaN or infinite for inputs outside the
    /// formulas' domain and serialize those through [`crate::utils::non_finite`].
    #[serde(with = "crate::utils::non_finite")]
    pub period: f64,
    #[serde(with = "crate::utils::non_finite")]
    pub frequency: f64,
    #[serde(with = "crate::utils::non_finite")]
    pub bpm: f64,

    /// Swing extremes
    #[serde(with = "crate::utils::non_finite")]
    pub max_height: f64,
    #[serde(with = "crate::utils::non_finite")]
    pub max_speed: f64,
    #[serde(with = "crate::utils::non_finite")]
    pub energy: f64,

    pub small_angle: bool,
}

impl fmt::Display for PendulumProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "length:      {:.4} m", self.length)?;
        writeln!(f, "mass:        {:.4} kg", self.mass)?;
        writeln!(f, "theta:       {:.4} rad", self.theta)?;
        writeln!(f, "period:      {:.4} s", self.period)?;
        writeln!(f, "frequency:   {:.4} Hz", self.frequency)?;
        writeln!(f, "bpm:         {:.4} 1/min", self.bpm)?;
        writeln!(f, "max height:  {:.4} m", self.max_height)?;
        writeln!(f, "max speed:   {:.4} m/s", self.max_speed)?;
        writeln!(f, "energy:      {:.4} J", self.energy)?;
        write!(f, "small angle: {}", self.small_angle)
    }
}
