//! Configuration-to-header compiler
//!
//! Turns a validated configuration tree into the generated `defines.h`
//! line sequence: naming rules in [`name`], the font asset table in
//! [`fonts`], the tagged emission tree in [`tree`], and the walk itself
//! in [`emit`].

pub mod emit;
pub mod fonts;
pub mod name;
pub mod tree;

pub use emit::{compile, compile_now, Header};
pub use fonts::{FontLookupError, FontTable};
