//! epdconf: ESP32 e-paper weather display configuration compiler
//!
//! Validates a `config.yml` against the display's configuration schema
//! and generates the `defines.h` header the firmware build consumes.

pub mod cli;
pub mod compile;
pub mod schema;
pub mod yaml;
