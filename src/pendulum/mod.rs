mod model;
mod properties;

pub use model::Pendulum;
pub use properties::PendulumProperties;
