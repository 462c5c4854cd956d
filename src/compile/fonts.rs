//! Font header lookup table
//!
//! Maps each typeface to the asset header the firmware includes. The
//! table is compiled in; a font that validates but has no entry here is a
//! fatal lookup failure, not something the compiler can recover from.

use thiserror::Error;

use crate::schema::display::Font;

/// A validated font with no matching asset header.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("no font header registered for '{0}'")]
pub struct FontLookupError(pub &'static str);

/// Font display-name to asset-header path table.
pub struct FontTable {
    entries: &'static [(Font, &'static str)],
}

const DEFAULT_FONTS: &[(Font, &str)] = &[
    (Font::FreeMono, "fonts/FreeMono.h"),
    (Font::FreeSans, "fonts/FreeSans.h"),
    (Font::FreeSerif, "fonts/FreeSerif.h"),
    (Font::Lato, "fonts/Lato_Regular.h"),
    (Font::Montserrat, "fonts/Montserrat_Regular.h"),
    (Font::OpenSans, "fonts/OpenSans_Regular.h"),
    (Font::Poppins, "fonts/Poppins_Regular.h"),
    (Font::Quicksand, "fonts/Quicksand_Regular.h"),
    (Font::Raleway, "fonts/Raleway_Regular.h"),
    (Font::Roboto, "fonts/Roboto_Regular.h"),
    (Font::RobotoMono, "fonts/RobotoMono_Regular.h"),
    (Font::RobotoSlab, "fonts/RobotoSlab_Regular.h"),
    (Font::Ubuntu, "fonts/Ubuntu_R.h"),
    (Font::UbuntuMono, "fonts/UbuntuMono_R.h"),
];

impl Default for FontTable {
    fn default() -> Self {
        FontTable {
            entries: DEFAULT_FONTS,
        }
    }
}

impl FontTable {
    /// Build a table over an explicit entry slice. Used by tests to
    /// exercise the lookup-failure path; production code uses `default()`.
    pub fn new(entries: &'static [(Font, &'static str)]) -> Self {
        FontTable { entries }
    }

    /// Asset header path for `font`.
    pub fn header_path(&self, font: Font) -> Result<&'static str, FontLookupError> {
        self.entries
            .iter()
            .find(|(f, _)| *f == font)
            .map(|(_, path)| *path)
            .ok_or(FontLookupError(font.literal()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_total() {
        let table = FontTable::default();
        for &font in Font::all() {
            let path = table.header_path(font).unwrap();
            assert!(path.starts_with("fonts/"));
            assert!(path.ends_with(".h"));
        }
    }

    #[test]
    fn test_known_paths() {
        let table = FontTable::default();
        assert_eq!(table.header_path(Font::FreeSans).unwrap(), "fonts/FreeSans.h");
        assert_eq!(
            table.header_path(Font::OpenSans).unwrap(),
            "fonts/OpenSans_Regular.h"
        );
        assert_eq!(
            table.header_path(Font::UbuntuMono).unwrap(),
            "fonts/UbuntuMono_R.h"
        );
    }

    #[test]
    fn test_missing_entry_is_an_error() {
        let table = FontTable::new(&[(Font::FreeMono, "fonts/FreeMono.h")]);
        assert_eq!(
            table.header_path(Font::Roboto),
            Err(FontLookupError("Roboto"))
        );
    }
}
