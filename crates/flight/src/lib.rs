pub mod arc;
pub mod impulse;
pub mod routes;

pub use arc::*;
pub use impulse::*;
pub use routes::*;
