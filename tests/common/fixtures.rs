use pendulum::{AngleUnit, Pendulum, PendulumConfig};

/// A one metre, one kilogram pendulum released at 0.5 rad
#[allow(dead_code)]
pub fn create_test_pendulum() -> Pendulum {
    Pendulum::new(1.0, 1.0, 0.5).unwrap()
}

/// Pendulum configurations for different test scenarios
pub mod pendulum_configs {
    use super::*;

    #[allow(dead_code)]
    pub fn clock_config() -> PendulumConfig {
        // Roughly a seconds pendulum
        PendulumConfig {
            length: 0.994,
            mass: 2.0,
            theta: 0.001,
            angle_unit: AngleUnit::Radians,
        }
    }

    pub fn wide_swing_config() -> PendulumConfig {
        PendulumConfig {
            length: 2.0,
            mass: 5.0,
            theta: 30.0,
            angle_unit: AngleUnit::Degrees,
        }
    }
}
