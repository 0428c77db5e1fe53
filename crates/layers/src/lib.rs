pub mod arcs;
pub mod borders;
pub mod graticule;
pub mod layer;
pub mod markers;
pub mod symbology;

pub use layer::*;
pub use symbology::*;
