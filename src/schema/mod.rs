//! Schema model - the configuration entity graph and its validation

pub mod config;
pub mod display;
pub mod introspect;
pub mod loader;
pub mod providers;
pub mod units;

pub use config::{Config, ConfigError};
pub use loader::load_config;
