//! Measurement unit enumerations
//!
//! The temperature, speed, pressure, distance, and daily precipitation
//! units default from the `useImperialUnitsAsDefault` flag when not set
//! explicitly; each enum carries that association in `default_for`.

use serde::{Deserialize, Serialize};

/// Temperature units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitsTemp {
    Kelvin,
    Celsius,
    Fahrenheit,
}

impl UnitsTemp {
    pub fn all() -> &'static [UnitsTemp] {
        &[UnitsTemp::Kelvin, UnitsTemp::Celsius, UnitsTemp::Fahrenheit]
    }

    pub fn literal(&self) -> &'static str {
        match self {
            UnitsTemp::Kelvin => "Kelvin",
            UnitsTemp::Celsius => "Celsius",
            UnitsTemp::Fahrenheit => "Fahrenheit",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            UnitsTemp::Kelvin => "KELVIN",
            UnitsTemp::Celsius => "CELSIUS",
            UnitsTemp::Fahrenheit => "FAHRENHEIT",
        }
    }

    pub fn default_for(imperial: bool) -> Self {
        if imperial {
            UnitsTemp::Fahrenheit
        } else {
            UnitsTemp::Celsius
        }
    }
}

/// Wind speed units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitsSpeed {
    #[serde(rename = "m/s")]
    MetersPerSecond,
    #[serde(rename = "ft/s")]
    FeetPerSecond,
    #[serde(rename = "km/h")]
    KilometersPerHour,
    #[serde(rename = "mph")]
    MilesPerHour,
    #[serde(rename = "kt")]
    Knots,
    #[serde(rename = "Beaufort")]
    Beaufort,
}

impl UnitsSpeed {
    pub fn all() -> &'static [UnitsSpeed] {
        &[
            UnitsSpeed::MetersPerSecond,
            UnitsSpeed::FeetPerSecond,
            UnitsSpeed::KilometersPerHour,
            UnitsSpeed::MilesPerHour,
            UnitsSpeed::Knots,
            UnitsSpeed::Beaufort,
        ]
    }

    pub fn literal(&self) -> &'static str {
        match self {
            UnitsSpeed::MetersPerSecond => "m/s",
            UnitsSpeed::FeetPerSecond => "ft/s",
            UnitsSpeed::KilometersPerHour => "km/h",
            UnitsSpeed::MilesPerHour => "mph",
            UnitsSpeed::Knots => "kt",
            UnitsSpeed::Beaufort => "Beaufort",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            UnitsSpeed::MetersPerSecond => "METERSPERSECOND",
            UnitsSpeed::FeetPerSecond => "FEETPERSECOND",
            UnitsSpeed::KilometersPerHour => "KILOMETERSPERHOUR",
            UnitsSpeed::MilesPerHour => "MILESPERHOUR",
            UnitsSpeed::Knots => "KNOTS",
            UnitsSpeed::Beaufort => "BEAUFORT",
        }
    }

    pub fn default_for(imperial: bool) -> Self {
        if imperial {
            UnitsSpeed::MilesPerHour
        } else {
            UnitsSpeed::KilometersPerHour
        }
    }
}

/// Atmospheric pressure units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitsPres {
    #[serde(rename = "hPa")]
    Hectopascal,
    #[serde(rename = "Pa")]
    Pascal,
    #[serde(rename = "mmHg")]
    MillimetersOfMercury,
    #[serde(rename = "inHg")]
    InchesOfMercury,
    #[serde(rename = "mbar")]
    Millibar,
    #[serde(rename = "atm")]
    Atmosphere,
    #[serde(rename = "gsc")]
    GramsPerSquareCentimeter,
    #[serde(rename = "psi")]
    PoundsPerSquareInch,
}

impl UnitsPres {
    pub fn all() -> &'static [UnitsPres] {
        &[
            UnitsPres::Hectopascal,
            UnitsPres::Pascal,
            UnitsPres::MillimetersOfMercury,
            UnitsPres::InchesOfMercury,
            UnitsPres::Millibar,
            UnitsPres::Atmosphere,
            UnitsPres::GramsPerSquareCentimeter,
            UnitsPres::PoundsPerSquareInch,
        ]
    }

    pub fn literal(&self) -> &'static str {
        match self {
            UnitsPres::Hectopascal => "hPa",
            UnitsPres::Pascal => "Pa",
            UnitsPres::MillimetersOfMercury => "mmHg",
            UnitsPres::InchesOfMercury => "inHg",
            UnitsPres::Millibar => "mbar",
            UnitsPres::Atmosphere => "atm",
            UnitsPres::GramsPerSquareCentimeter => "gsc",
            UnitsPres::PoundsPerSquareInch => "psi",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            UnitsPres::Hectopascal => "HECTOPASCAL",
            UnitsPres::Pascal => "PASCAL",
            UnitsPres::MillimetersOfMercury => "MILLIMETERSOFMERCURY",
            UnitsPres::InchesOfMercury => "INCHESOFMERCURY",
            UnitsPres::Millibar => "MILLIBAR",
            UnitsPres::Atmosphere => "ATMOSPHERE",
            UnitsPres::GramsPerSquareCentimeter => "GRAMSPERSQUARECENTIMETER",
            UnitsPres::PoundsPerSquareInch => "POUNDSPERSQUAREINCH",
        }
    }

    pub fn default_for(imperial: bool) -> Self {
        if imperial {
            UnitsPres::InchesOfMercury
        } else {
            UnitsPres::Millibar
        }
    }
}

/// Distance units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitsDistance {
    #[serde(rename = "km")]
    Kilometers,
    #[serde(rename = "mile")]
    Miles,
}

impl UnitsDistance {
    pub fn all() -> &'static [UnitsDistance] {
        &[UnitsDistance::Kilometers, UnitsDistance::Miles]
    }

    pub fn literal(&self) -> &'static str {
        match self {
            UnitsDistance::Kilometers => "km",
            UnitsDistance::Miles => "mile",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            UnitsDistance::Kilometers => "KILOMETERS",
            UnitsDistance::Miles => "MILES",
        }
    }

    pub fn default_for(imperial: bool) -> Self {
        if imperial {
            UnitsDistance::Miles
        } else {
            UnitsDistance::Kilometers
        }
    }
}

/// Precipitation units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitsPrecip {
    #[serde(rename = "probability of precipitation")]
    Pop,
    #[serde(rename = "mm")]
    Millimeters,
    #[serde(rename = "cm")]
    Centimeters,
    #[serde(rename = "in")]
    Inches,
}

impl Default for UnitsPrecip {
    fn default() -> Self {
        UnitsPrecip::Pop
    }
}

impl UnitsPrecip {
    pub fn all() -> &'static [UnitsPrecip] {
        &[
            UnitsPrecip::Pop,
            UnitsPrecip::Millimeters,
            UnitsPrecip::Centimeters,
            UnitsPrecip::Inches,
        ]
    }

    pub fn literal(&self) -> &'static str {
        match self {
            UnitsPrecip::Pop => "probability of precipitation",
            UnitsPrecip::Millimeters => "mm",
            UnitsPrecip::Centimeters => "cm",
            UnitsPrecip::Inches => "in",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            UnitsPrecip::Pop => "POP",
            UnitsPrecip::Millimeters => "MILLIMETERS",
            UnitsPrecip::Centimeters => "CENTIMETERS",
            UnitsPrecip::Inches => "INCHES",
        }
    }

    /// Daily-column default; the hourly column always defaults to POP.
    pub fn default_for(imperial: bool) -> Self {
        if imperial {
            UnitsPrecip::Inches
        } else {
            UnitsPrecip::Millimeters
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imperial_defaults() {
        assert_eq!(UnitsTemp::default_for(true), UnitsTemp::Fahrenheit);
        assert_eq!(UnitsSpeed::default_for(true), UnitsSpeed::MilesPerHour);
        assert_eq!(UnitsPres::default_for(true), UnitsPres::InchesOfMercury);
        assert_eq!(UnitsDistance::default_for(true), UnitsDistance::Miles);
        assert_eq!(UnitsPrecip::default_for(true), UnitsPrecip::Inches);
    }

    #[test]
    fn test_metric_defaults() {
        assert_eq!(UnitsTemp::default_for(false), UnitsTemp::Celsius);
        assert_eq!(UnitsSpeed::default_for(false), UnitsSpeed::KilometersPerHour);
        assert_eq!(UnitsPres::default_for(false), UnitsPres::Millibar);
        assert_eq!(UnitsDistance::default_for(false), UnitsDistance::Kilometers);
        assert_eq!(UnitsPrecip::default_for(false), UnitsPrecip::Millimeters);
    }

    #[test]
    fn test_speed_literals_parse() {
        let parsed: UnitsSpeed = serde_yml::from_str("km/h").unwrap();
        assert_eq!(parsed, UnitsSpeed::KilometersPerHour);
        let parsed: UnitsSpeed = serde_yml::from_str("Beaufort").unwrap();
        assert_eq!(parsed, UnitsSpeed::Beaufort);
    }

    #[test]
    fn test_unknown_unit_rejected() {
        let result: Result<UnitsTemp, _> = serde_yml::from_str("Rankine");
        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Kelvin"));
        assert!(message.contains("Fahrenheit"));
    }
}
