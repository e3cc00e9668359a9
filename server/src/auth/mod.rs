//! Admin key checks.

mod middleware;

pub use middleware::*;
