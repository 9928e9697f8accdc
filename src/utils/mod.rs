pub mod constants;
pub mod errors;
pub mod math;
pub mod non_finite;

pub use constants::*;
pub use errors::*;
pub use math::*;
