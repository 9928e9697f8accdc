use approx::assert_relative_eq;
use pendulum::{PendulumProperties, G, SECONDS_IN_MINUTE};

/// Assert that every derived quantity is a finite number
#[allow(dead_code)]
#[track_caller]
pub fn assert_properties_finite(props: &PendulumProperties) {
    assert!(props.period.is_finite(), "Period is not finite");
    assert!(props.frequency.is_finite(), "Frequency is not finite");
    assert!(props.bpm.is_finite(), "BPM is not finite");
    assert!(props.max_height.is_finite(), "Max height is not finite");
    assert!(props.max_speed.is_finite(), "Max speed is not finite");
    assert!(props.energy.is_finite(), "Energy is not finite");
}

/// Assert that the derived quantities agree with each other
#[track_caller]
pub fn assert_properties_consistent(props: &PendulumProperties) {
    assert!(props.period > 0.0, "Period must be positive");
    assert_eq!(props.bpm, SECONDS_IN_MINUTE / props.period);
    assert_eq!(props.max_speed, (2.0 * G * props.max_height).sqrt());
    assert_eq!(props.energy, 0.5 * props.mass * props.max_speed.powi(2));
    assert_relative_eq!(props.frequency, 1.0 / props.period);
}
