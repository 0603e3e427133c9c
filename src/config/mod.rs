//! Runtime settings from the environment (`.env` supported).

mod loader;
pub mod types;

pub use types::*;
