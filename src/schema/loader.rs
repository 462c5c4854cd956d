//! Document loading and validation
//!
//! The single read-and-validate step: one file in, one validated
//! [`Config`] out. The file is read fully and closed before any
//! compilation happens, and nothing is written here.

use std::fs;
use std::path::Path;

use miette::{miette, Result};

use crate::schema::config::Config;
use crate::yaml::diagnostics::{DecodeError, InvariantError};

/// Read, decode, and validate one configuration document.
///
/// Fails fast: the first decode error or invariant violation aborts with
/// a span-annotated diagnostic naming the offending field.
pub fn load_config(path: &Path) -> Result<Config> {
    let source = fs::read_to_string(path)
        .map_err(|err| miette!("cannot read {}: {err}", path.display()))?;
    let filename = path.display().to_string();

    let config: Config = serde_yml::from_str(&source)
        .map_err(|err| DecodeError::from_serde(&err, &source, &filename))?;

    config
        .validate()
        .map_err(|err| InvariantError::new(&err, &source, &filename))?;

    Ok(config)
}
