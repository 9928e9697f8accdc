pub mod config;
pub mod equations;
pub mod pendulum;
pub mod utils;

pub use config::{AngleUnit, ConfigError, PendulumConfig};
pub use equations::{bpm, calc_energy, check_small_angle, get_period, max_height, max_speed};
pub use pendulum::{Pendulum, PendulumProperties};
pub use utils::{PendulumError, G, SECONDS_IN_MINUTE, SMALL_ANGLE_LIMIT};
