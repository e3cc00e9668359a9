//! Request handlers for task and product operations.

mod products;
mod tasks;

pub use products::*;
pub use tasks::*;
