//! YAML document boundary - error diagnostics

pub mod diagnostics;

pub use diagnostics::{DecodeError, InvariantError};
