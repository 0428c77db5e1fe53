pub mod feature;
pub mod topology;

pub use feature::*;
pub use topology::*;
