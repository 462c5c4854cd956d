//! Config document diagnostics with source spans
//!
//! Wraps decoder and invariant failures into miette diagnostics so the
//! terminal report points at the offending line of `config.yml`.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::schema::config::ConfigError;

/// A document that failed to decode into the configuration tree.
///
/// Covers YAML syntax errors, type mismatches, enumeration values outside
/// their allowed set, and missing required fields.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(epdconf::config::decode))]
pub struct DecodeError {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    #[help]
    help: Option<String>,

    message: String,
}

impl DecodeError {
    pub fn from_serde(err: &serde_yml::Error, source: &str, filename: &str) -> Self {
        let message = err.to_string();
        let help = generate_help(&message);

        DecodeError {
            src: NamedSource::new(filename, source.to_string()),
            span: location_span(source, err.location()),
            help,
            message,
        }
    }
}

/// A record-level predicate that failed after every field decoded.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(epdconf::config::invariant))]
pub struct InvariantError {
    #[source_code]
    src: NamedSource<String>,

    #[label("declared here")]
    span: SourceSpan,

    #[help]
    help: Option<String>,

    message: String,
}

impl InvariantError {
    pub fn new(err: &ConfigError, source: &str, filename: &str) -> Self {
        let span = find_key_span(source, err.field()).unwrap_or_else(|| first_line_span(source));
        let help = invariant_help(err);

        InvariantError {
            src: NamedSource::new(filename, source.to_string()),
            span,
            help,
            message: err.to_string(),
        }
    }
}

/// Span covering the decoder's reported location, or the first line when
/// the decoder gives none.
fn location_span(source: &str, location: Option<serde_yml::Location>) -> SourceSpan {
    let Some(location) = location else {
        return first_line_span(source);
    };

    let line = location.line().saturating_sub(1);
    let column = location.column().saturating_sub(1);

    let mut offset = 0;
    for (i, line_content) in source.lines().enumerate() {
        if i == line {
            offset += column;
            break;
        }
        offset += line_content.len() + 1;
    }

    let rest = &source[offset.min(source.len())..];
    let len = rest.find('\n').unwrap_or(rest.len()).max(1);
    (offset, len).into()
}

/// Span of a `key:` occurrence at the start of a (possibly indented) line.
fn find_key_span(source: &str, key: &str) -> Option<SourceSpan> {
    let pattern = format!("{key}:");

    let mut offset = 0;
    for line in source.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with(&pattern) {
            let indent = line.len() - trimmed.len();
            return Some((offset + indent, key.len()).into());
        }
        offset += line.len() + 1;
    }

    None
}

fn first_line_span(source: &str) -> SourceSpan {
    let len = source.find('\n').unwrap_or(source.len()).max(1);
    (0, len).into()
}

/// Suggestions keyed off the decoder's message text.
fn generate_help(message: &str) -> Option<String> {
    let lower = message.to_lowercase();

    if lower.contains("unknown variant") {
        return Some(
            "Allowed values are listed above; they are case- and punctuation-sensitive."
                .to_string(),
        );
    }

    if lower.contains("missing field") {
        return Some("Add the missing key to config.yml.".to_string());
    }

    if lower.contains("tab") {
        return Some(
            "YAML requires spaces for indentation, not tabs. Replace tabs with spaces.".to_string(),
        );
    }

    if lower.contains("duplicate key") {
        return Some("Each key can only appear once. Remove or rename the duplicate key.".to_string());
    }

    if lower.contains("expected block end") {
        return Some("Check your indentation - it may be inconsistent.".to_string());
    }

    if lower.contains("mapping values are not allowed") {
        return Some("You may be missing a space after ':' or have incorrect indentation.".to_string());
    }

    None
}

fn invariant_help(err: &ConfigError) -> Option<String> {
    match err {
        ConfigError::MissingApiKey => {
            Some("Set owmApikey, or switch the provider to Open-Meteo.".to_string())
        }
        ConfigError::ScanWithBssid => {
            Some("Remove wifi.bssid, or set wifi.scan to false.".to_string())
        }
        ConfigError::SlotOutOfRange { .. } => {
            Some("Layout slots range from 0 (top) to 9 (bottom).".to_string())
        }
        _ => None,
    }
}
