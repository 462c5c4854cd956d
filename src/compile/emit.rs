//! Declaration emitter
//!
//! Walks the tagged emission tree into the generated header's line
//! sequence. The output is owned by the [`Header`] value returned to the
//! caller; nothing here touches the filesystem.

use chrono::{DateTime, Local};

use crate::compile::fonts::{FontLookupError, FontTable};
use crate::compile::name::{escape_c_string, upper_snake};
use crate::compile::tree::{self, Item};
use crate::schema::config::Config;

/// The compiled header, one entry per output line.
#[derive(Debug)]
pub struct Header {
    lines: Vec<String>,
}

impl Header {
    /// Full artifact text, newline terminated.
    pub fn text(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of emitted declarations.
    pub fn define_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| line.starts_with("#define"))
            .count()
    }
}

/// Compile a validated configuration against the default font table,
/// stamping the build version from the local clock.
pub fn compile_now(config: &Config) -> Result<Header, FontLookupError> {
    compile(config, &FontTable::default(), Local::now())
}

/// Compile a validated configuration into the header line sequence.
///
/// `built_at` is the clock reading stamped into `D_BUILD_VERSION`; tests
/// pin it to get byte-identical output.
pub fn compile(
    config: &Config,
    fonts: &FontTable,
    built_at: DateTime<Local>,
) -> Result<Header, FontLookupError> {
    let mut lines = vec![
        "// Auto-generated configuration header".to_string(),
        "// DO NOT EDIT - Generated from config.yml".to_string(),
        String::new(),
        "#pragma once".to_string(),
        String::new(),
        "// Build Information".to_string(),
        format!(
            "#define D_BUILD_VERSION \"{}\"",
            built_at.format("%Y.%m.%d %H:%M")
        ),
        String::new(),
        "// Configuration".to_string(),
    ];

    for (name, item) in tree::build(config) {
        emit_item(&mut lines, fonts, "", &name, &item)?;
    }

    Ok(Header { lines })
}

fn macro_key(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        upper_snake(name)
    } else {
        format!("{prefix}_{}", upper_snake(name))
    }
}

fn emit_item(
    lines: &mut Vec<String>,
    fonts: &FontTable,
    prefix: &str,
    name: &str,
    item: &Item,
) -> Result<(), FontLookupError> {
    let key = macro_key(prefix, name);
    match item {
        Item::Layout(entries) => {
            for (pos, slot) in entries {
                lines.push(format!("#define POS_{} {}", pos.literal(), slot));
            }
        }
        Item::Raw(token) => lines.push(format!("#define {key} {token}")),
        Item::Flag(symbol) => lines.push(format!("#define {key}_{symbol}")),
        Item::Font(font) => {
            let path = fonts.header_path(*font)?;
            lines.push(format!("#define FONT_HEADER \"{path}\""));
        }
        Item::Record(fields) => {
            lines.push(format!("// {name} configuration"));
            for (sub_name, sub_item) in fields {
                emit_item(lines, fonts, &key, sub_name, sub_item)?;
            }
            lines.push(String::new());
        }
        Item::Mapping(entries) => {
            lines.push(format!("// {name} sub-configuration"));
            for (sub_name, sub_item) in entries {
                emit_item(lines, fonts, &key, sub_name, sub_item)?;
            }
        }
        Item::Str(value) => {
            lines.push(format!("#define D_{key} \"{}\"", escape_c_string(value)));
        }
        Item::Bool(value) => {
            lines.push(format!("#define {key} {}", u8::from(*value)));
        }
        Item::Int(value) => lines.push(format!("#define {key} {value}")),
        Item::Float(value) => lines.push(format!("#define {key} {value}f")),
        Item::Null => lines.push(format!("#define D_{key} \"\"")),
    }
    Ok(())
}
