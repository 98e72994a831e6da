//! Shop configuration for the roster engine.
//!
//! Operating hours are deployment configuration, not code: they are loaded
//! from YAML at startup and passed into the validators as explicit values so
//! the same logic is testable against arbitrary windows.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{OperatingHours, ShopConfig, ShopInfo};
