mod loader;
mod pendulum;

pub use loader::ConfigError;
pub use pendulum::{AngleUnit, PendulumConfig};
