use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PendulumError {
    #[error("Invalid length: {0} m (must be finite and positive)")]
    InvalidLength(f64),

    #[error("Invalid mass: {0} kg (must be finite and positive)")]
    InvalidMass(f64),

    #[error("Invalid angle: {0} rad (must be finite)")]
    InvalidAngle(f64),
}
