mod assertions;
mod fixtures;

// Re-export
pub use assertions::{assert_properties_consistent, assert_properties_finite};

pub use fixtures::*;
