//! Display hardware and presentation enumerations

use serde::{Deserialize, Serialize};

/// E-Paper panel type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpdPanel {
    #[serde(rename = "GENERIC_BW_V2")]
    GenericBwV2,
    #[serde(rename = "GENERIC_3C_B")]
    Generic3cB,
    #[serde(rename = "DKE_3C_86BF")]
    Dke3c86bf,
    #[serde(rename = "GENERIC_7C_F")]
    Generic7cF,
    #[serde(rename = "GENERIC_BW_V1")]
    GenericBwV1,
}

impl Default for EpdPanel {
    fn default() -> Self {
        EpdPanel::GenericBwV2
    }
}

impl EpdPanel {
    pub fn all() -> &'static [EpdPanel] {
        &[
            EpdPanel::GenericBwV2,
            EpdPanel::Generic3cB,
            EpdPanel::Dke3c86bf,
            EpdPanel::Generic7cF,
            EpdPanel::GenericBwV1,
        ]
    }

    /// Document literal for this panel.
    pub fn literal(&self) -> &'static str {
        match self {
            EpdPanel::GenericBwV2 => "GENERIC_BW_V2",
            EpdPanel::Generic3cB => "GENERIC_3C_B",
            EpdPanel::Dke3c86bf => "DKE_3C_86BF",
            EpdPanel::Generic7cF => "GENERIC_7C_F",
            EpdPanel::GenericBwV1 => "GENERIC_BW_V1",
        }
    }

    /// Macro token used for the presence declaration.
    pub fn symbol(&self) -> &'static str {
        // Panel literals are already macro-shaped.
        self.literal()
    }

    /// Human-readable panel description, surfaced in the schema dump.
    pub fn description(&self) -> &'static str {
        match self {
            EpdPanel::GenericBwV2 => "7.5in e-Paper (v2) 800x480px Black/White",
            EpdPanel::Generic3cB => "7.5in e-Paper (B) 800x480px Red/Black/White",
            EpdPanel::Dke3c86bf => {
                "7.5in e-Paper (B) 800x480px Red/Black/White DEPG0750RWF86BF"
            }
            EpdPanel::Generic7cF => "7.3in ACeP e-Paper (F) 800x480px 7-Colors",
            EpdPanel::GenericBwV1 => "7.5in e-Paper (v1) 640x384px Black/White",
        }
    }
}

/// E-Paper driver board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpdDriver {
    #[serde(rename = "Good Display DESPI-C02")]
    DespiC02,
    #[serde(rename = "Waveshare")]
    Waveshare,
}

impl Default for EpdDriver {
    fn default() -> Self {
        EpdDriver::DespiC02
    }
}

impl EpdDriver {
    pub fn all() -> &'static [EpdDriver] {
        &[EpdDriver::DespiC02, EpdDriver::Waveshare]
    }

    pub fn literal(&self) -> &'static str {
        match self {
            EpdDriver::DespiC02 => "Good Display DESPI-C02",
            EpdDriver::Waveshare => "Waveshare",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            EpdDriver::DespiC02 => "DESPI_C02",
            EpdDriver::Waveshare => "WAVESHARE",
        }
    }
}

/// Accent color used on multi-color panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    Black,
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
}

impl Default for AccentColor {
    fn default() -> Self {
        AccentColor::Black
    }
}

impl AccentColor {
    pub fn all() -> &'static [AccentColor] {
        &[
            AccentColor::Black,
            AccentColor::Red,
            AccentColor::Green,
            AccentColor::Blue,
            AccentColor::Yellow,
            AccentColor::Orange,
        ]
    }

    pub fn literal(&self) -> &'static str {
        match self {
            AccentColor::Black => "black",
            AccentColor::Red => "red",
            AccentColor::Green => "green",
            AccentColor::Blue => "blue",
            AccentColor::Yellow => "yellow",
            AccentColor::Orange => "orange",
        }
    }

    /// GxEPD color constant emitted for this accent color.
    pub fn gx_constant(&self) -> &'static str {
        match self {
            AccentColor::Black => "GxEPD_BLACK",
            AccentColor::Red => "GxEPD_RED",
            AccentColor::Green => "GxEPD_GREEN",
            AccentColor::Blue => "GxEPD_BLUE",
            AccentColor::Yellow => "GxEPD_YELLOW",
            AccentColor::Orange => "GxEPD_ORANGE",
        }
    }
}

/// Display locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "de_DE")]
    DeDe,
    #[serde(rename = "en_GB")]
    EnGb,
    #[serde(rename = "en_US")]
    EnUs,
    #[serde(rename = "et_EE")]
    EtEe,
    #[serde(rename = "fi_FI")]
    FiFi,
    #[serde(rename = "fr_FR")]
    FrFr,
    #[serde(rename = "it_IT")]
    ItIt,
    #[serde(rename = "nl_BE")]
    NlBe,
    #[serde(rename = "pt_BR")]
    PtBr,
}

impl Locale {
    pub fn all() -> &'static [Locale] {
        &[
            Locale::DeDe,
            Locale::EnGb,
            Locale::EnUs,
            Locale::EtEe,
            Locale::FiFi,
            Locale::FrFr,
            Locale::ItIt,
            Locale::NlBe,
            Locale::PtBr,
        ]
    }

    /// Underlying locale tag, emitted unquoted.
    pub fn literal(&self) -> &'static str {
        match self {
            Locale::DeDe => "de_DE",
            Locale::EnGb => "en_GB",
            Locale::EnUs => "en_US",
            Locale::EtEe => "et_EE",
            Locale::FiFi => "fi_FI",
            Locale::FrFr => "fr_FR",
            Locale::ItIt => "it_IT",
            Locale::NlBe => "nl_BE",
            Locale::PtBr => "pt_BR",
        }
    }
}

/// Display typeface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Font {
    FreeMono,
    FreeSans,
    FreeSerif,
    Lato,
    Montserrat,
    #[serde(rename = "Open Sans")]
    OpenSans,
    Poppins,
    Quicksand,
    Raleway,
    Roboto,
    #[serde(rename = "Roboto Mono")]
    RobotoMono,
    #[serde(rename = "Roboto Slab")]
    RobotoSlab,
    Ubuntu,
    #[serde(rename = "Ubuntu Mono")]
    UbuntuMono,
}

impl Default for Font {
    fn default() -> Self {
        Font::FreeSans
    }
}

impl Font {
    pub fn all() -> &'static [Font] {
        &[
            Font::FreeMono,
            Font::FreeSans,
            Font::FreeSerif,
            Font::Lato,
            Font::Montserrat,
            Font::OpenSans,
            Font::Poppins,
            Font::Quicksand,
            Font::Raleway,
            Font::Roboto,
            Font::RobotoMono,
            Font::RobotoSlab,
            Font::Ubuntu,
            Font::UbuntuMono,
        ]
    }

    /// Family display name, the key into the font header table.
    pub fn literal(&self) -> &'static str {
        match self {
            Font::FreeMono => "FreeMono",
            Font::FreeSans => "FreeSans",
            Font::FreeSerif => "FreeSerif",
            Font::Lato => "Lato",
            Font::Montserrat => "Montserrat",
            Font::OpenSans => "Open Sans",
            Font::Poppins => "Poppins",
            Font::Quicksand => "Quicksand",
            Font::Raleway => "Raleway",
            Font::Roboto => "Roboto",
            Font::RobotoMono => "Roboto Mono",
            Font::RobotoSlab => "Roboto Slab",
            Font::Ubuntu => "Ubuntu",
            Font::UbuntuMono => "Ubuntu Mono",
        }
    }
}

impl std::fmt::Display for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.literal())
    }
}

/// How wind direction is labelled next to the wind speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindDirectionLabel {
    #[serde(rename = "hidden")]
    Hidden,
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "cardinal")]
    Cardinal,
    #[serde(rename = "intercardinal")]
    Intercardinal,
    #[serde(rename = "secondary intercardinal")]
    SecondaryIntercardinal,
    #[serde(rename = "tertiary intercardinal")]
    TertiaryIntercardinal,
}

impl Default for WindDirectionLabel {
    fn default() -> Self {
        WindDirectionLabel::Hidden
    }
}

impl WindDirectionLabel {
    pub fn all() -> &'static [WindDirectionLabel] {
        &[
            WindDirectionLabel::Hidden,
            WindDirectionLabel::Number,
            WindDirectionLabel::Cardinal,
            WindDirectionLabel::Intercardinal,
            WindDirectionLabel::SecondaryIntercardinal,
            WindDirectionLabel::TertiaryIntercardinal,
        ]
    }

    pub fn literal(&self) -> &'static str {
        match self {
            WindDirectionLabel::Hidden => "hidden",
            WindDirectionLabel::Number => "number",
            WindDirectionLabel::Cardinal => "cardinal",
            WindDirectionLabel::Intercardinal => "intercardinal",
            WindDirectionLabel::SecondaryIntercardinal => "secondary intercardinal",
            WindDirectionLabel::TertiaryIntercardinal => "tertiary intercardinal",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            WindDirectionLabel::Hidden => "WIND_HIDDEN",
            WindDirectionLabel::Number => "NUMBER",
            WindDirectionLabel::Cardinal => "CARDINAL",
            WindDirectionLabel::Intercardinal => "INTERCARDINAL",
            WindDirectionLabel::SecondaryIntercardinal => "SECONDARY_INTERCARDINAL",
            WindDirectionLabel::TertiaryIntercardinal => "TERTIARY_INTERCARDINAL",
        }
    }
}

/// Rounding applied to the wind direction arrow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindArrowPrecision {
    #[serde(rename = "hidden")]
    Hidden,
    #[serde(rename = "cardinal")]
    Cardinal,
    #[serde(rename = "intercardinal")]
    Intercardinal,
    #[serde(rename = "secondary intercardinal")]
    SecondaryIntercardinal,
    #[serde(rename = "tertiary intercardinal")]
    TertiaryIntercardinal,
    #[serde(rename = "360 deg")]
    Any360,
}

impl Default for WindArrowPrecision {
    fn default() -> Self {
        WindArrowPrecision::SecondaryIntercardinal
    }
}

impl WindArrowPrecision {
    pub fn all() -> &'static [WindArrowPrecision] {
        &[
            WindArrowPrecision::Hidden,
            WindArrowPrecision::Cardinal,
            WindArrowPrecision::Intercardinal,
            WindArrowPrecision::SecondaryIntercardinal,
            WindArrowPrecision::TertiaryIntercardinal,
            WindArrowPrecision::Any360,
        ]
    }

    pub fn literal(&self) -> &'static str {
        match self {
            WindArrowPrecision::Hidden => "hidden",
            WindArrowPrecision::Cardinal => "cardinal",
            WindArrowPrecision::Intercardinal => "intercardinal",
            WindArrowPrecision::SecondaryIntercardinal => "secondary intercardinal",
            WindArrowPrecision::TertiaryIntercardinal => "tertiary intercardinal",
            WindArrowPrecision::Any360 => "360 deg",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            WindArrowPrecision::Hidden => "WIND_HIDDEN",
            WindArrowPrecision::Cardinal => "CARDINAL",
            WindArrowPrecision::Intercardinal => "INTERCARDINAL",
            WindArrowPrecision::SecondaryIntercardinal => "SECONDARY_INTERCARDINAL",
            WindArrowPrecision::TertiaryIntercardinal => "TERTIARY_INTERCARDINAL",
            WindArrowPrecision::Any360 => "ANY_360",
        }
    }
}

/// Daily precipitation column behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayDailyPrecip {
    Disabled,
    Enabled,
    Smart,
}

impl Default for DisplayDailyPrecip {
    fn default() -> Self {
        DisplayDailyPrecip::Smart
    }
}

impl DisplayDailyPrecip {
    pub fn all() -> &'static [DisplayDailyPrecip] {
        &[
            DisplayDailyPrecip::Disabled,
            DisplayDailyPrecip::Enabled,
            DisplayDailyPrecip::Smart,
        ]
    }

    pub fn literal(&self) -> &'static str {
        match self {
            DisplayDailyPrecip::Disabled => "disabled",
            DisplayDailyPrecip::Enabled => "enabled",
            DisplayDailyPrecip::Smart => "smart",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            DisplayDailyPrecip::Disabled => "PRECIP_DISABLED",
            DisplayDailyPrecip::Enabled => "PRECIP_ENABLED",
            DisplayDailyPrecip::Smart => "PRECIP_SMART",
        }
    }
}

/// Slot names of the current-conditions panel on the left side of the
/// display. Serves as the key allow-set for the `leftPanelLayout` mapping;
/// the variant order here is the canonical slot order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PanelPosition {
    Sunrise,
    Sunset,
    Wind,
    Humidity,
    UvIndex,
    AirQuality,
    Pressure,
    Visibility,
    IndoorTemperature,
    IndoorHumidity,
}

impl PanelPosition {
    pub fn all() -> &'static [PanelPosition] {
        &[
            PanelPosition::Sunrise,
            PanelPosition::Sunset,
            PanelPosition::Wind,
            PanelPosition::Humidity,
            PanelPosition::UvIndex,
            PanelPosition::AirQuality,
            PanelPosition::Pressure,
            PanelPosition::Visibility,
            PanelPosition::IndoorTemperature,
            PanelPosition::IndoorHumidity,
        ]
    }

    /// Document key, also the macro suffix after the position prefix.
    pub fn literal(&self) -> &'static str {
        match self {
            PanelPosition::Sunrise => "SUNRISE",
            PanelPosition::Sunset => "SUNSET",
            PanelPosition::Wind => "WIND",
            PanelPosition::Humidity => "HUMIDITY",
            PanelPosition::UvIndex => "UV_INDEX",
            PanelPosition::AirQuality => "AIR_QUALITY",
            PanelPosition::Pressure => "PRESSURE",
            PanelPosition::Visibility => "VISIBILITY",
            PanelPosition::IndoorTemperature => "INDOOR_TEMPERATURE",
            PanelPosition::IndoorHumidity => "INDOOR_HUMIDITY",
        }
    }
}

impl std::fmt::Display for PanelPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.literal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_all_unique(values: &[&str]) {
        for (i, a) in values.iter().enumerate() {
            for b in &values[i + 1..] {
                assert_ne!(a, b, "duplicate value {a:?}");
            }
        }
    }

    #[test]
    fn test_panel_literals_unique() {
        let literals: Vec<&str> = EpdPanel::all().iter().map(|p| p.literal()).collect();
        assert_all_unique(&literals);
    }

    #[test]
    fn test_font_literals_unique() {
        let literals: Vec<&str> = Font::all().iter().map(|f| f.literal()).collect();
        assert_all_unique(&literals);
    }

    #[test]
    fn test_wind_symbols_unique() {
        let symbols: Vec<&str> = WindDirectionLabel::all()
            .iter()
            .map(|w| w.symbol())
            .collect();
        assert_all_unique(&symbols);
        let symbols: Vec<&str> = WindArrowPrecision::all()
            .iter()
            .map(|w| w.symbol())
            .collect();
        assert_all_unique(&symbols);
    }

    #[test]
    fn test_serde_names_match_literals() {
        for &panel in EpdPanel::all() {
            let yaml = serde_yml::to_string(&panel).unwrap();
            assert_eq!(yaml.trim_end(), panel.literal());
        }
        for &driver in EpdDriver::all() {
            let yaml = serde_yml::to_string(&driver).unwrap();
            assert_eq!(yaml.trim_end(), driver.literal());
        }
        for &font in Font::all() {
            let yaml = serde_yml::to_string(&font).unwrap();
            assert_eq!(yaml.trim_end(), font.literal());
        }
        for &locale in Locale::all() {
            let yaml = serde_yml::to_string(&locale).unwrap();
            assert_eq!(yaml.trim_end(), locale.literal());
        }
        for &pos in PanelPosition::all() {
            let yaml = serde_yml::to_string(&pos).unwrap();
            assert_eq!(yaml.trim_end(), pos.literal());
        }
    }

    #[test]
    fn test_defaults_match_published_config() {
        assert_eq!(EpdPanel::default(), EpdPanel::GenericBwV2);
        assert_eq!(EpdDriver::default(), EpdDriver::DespiC02);
        assert_eq!(AccentColor::default(), AccentColor::Black);
        assert_eq!(Font::default(), Font::FreeSans);
        assert_eq!(WindDirectionLabel::default(), WindDirectionLabel::Hidden);
        assert_eq!(
            WindArrowPrecision::default(),
            WindArrowPrecision::SecondaryIntercardinal
        );
        assert_eq!(DisplayDailyPrecip::default(), DisplayDailyPrecip::Smart);
    }

    #[test]
    fn test_panel_descriptions_present() {
        for &panel in EpdPanel::all() {
            assert!(!panel.description().is_empty());
        }
    }
}
