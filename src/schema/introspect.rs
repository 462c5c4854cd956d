//! Schema introspection
//!
//! Exports the compiled-in entity graph as a JSON document for editors
//! and automation: every enumeration with its allowed literal values
//! (plus per-member descriptions where the schema documents them), and
//! the defaulted scalar surface. Pure function over static data, no I/O.

use serde_json::{json, Value};

use crate::schema::display::{
    AccentColor, DisplayDailyPrecip, EpdDriver, EpdPanel, Font, Locale,
    PanelPosition, WindArrowPrecision, WindDirectionLabel,
};
use crate::schema::providers::{AirQualityApi, WeatherApi};
use crate::schema::units::{
    UnitsDistance, UnitsPrecip, UnitsPres, UnitsSpeed, UnitsTemp,
};

fn plain_values(literals: Vec<&str>) -> Value {
    Value::Array(
        literals
            .into_iter()
            .map(|literal| json!({ "const": literal }))
            .collect(),
    )
}

fn enum_entry(description: &str, values: Value) -> Value {
    json!({ "description": description, "anyOf": values })
}

/// The introspection document for the full configuration schema.
pub fn schema_json() -> Value {
    let panels: Vec<Value> = EpdPanel::all()
        .iter()
        .map(|panel| {
            json!({ "const": panel.literal(), "description": panel.description() })
        })
        .collect();

    json!({
        "enums": {
            "epdPanel": enum_entry("E-Paper panel type", Value::Array(panels)),
            "epdDriver": enum_entry(
                "E-Paper driver board",
                plain_values(EpdDriver::all().iter().map(|v| v.literal()).collect()),
            ),
            "accentColor": enum_entry(
                "Accent color used on multi-color panels",
                plain_values(AccentColor::all().iter().map(|v| v.literal()).collect()),
            ),
            "locale": enum_entry(
                "Display locale",
                plain_values(Locale::all().iter().map(|v| v.literal()).collect()),
            ),
            "weatherAPI": enum_entry(
                "Weather data provider",
                plain_values(WeatherApi::all().iter().map(|v| v.literal()).collect()),
            ),
            "airQualityAPI": enum_entry(
                "Air quality data provider",
                plain_values(AirQualityApi::all().iter().map(|v| v.literal()).collect()),
            ),
            "unitsTemp": enum_entry(
                "Temperature units",
                plain_values(UnitsTemp::all().iter().map(|v| v.literal()).collect()),
            ),
            "unitsSpeed": enum_entry(
                "Wind speed units",
                plain_values(UnitsSpeed::all().iter().map(|v| v.literal()).collect()),
            ),
            "unitsPres": enum_entry(
                "Atmospheric pressure units",
                plain_values(UnitsPres::all().iter().map(|v| v.literal()).collect()),
            ),
            "unitsDistance": enum_entry(
                "Distance units",
                plain_values(UnitsDistance::all().iter().map(|v| v.literal()).collect()),
            ),
            "unitsHourlyPrecip": enum_entry(
                "Hourly precipitation units",
                plain_values(UnitsPrecip::all().iter().map(|v| v.literal()).collect()),
            ),
            "unitsDailyPrecip": enum_entry(
                "Daily precipitation units",
                plain_values(UnitsPrecip::all().iter().map(|v| v.literal()).collect()),
            ),
            "windDirectionLabel": enum_entry(
                "How wind direction is labelled",
                plain_values(WindDirectionLabel::all().iter().map(|v| v.literal()).collect()),
            ),
            "windArrowPrecision": enum_entry(
                "Rounding applied to the wind direction arrow",
                plain_values(WindArrowPrecision::all().iter().map(|v| v.literal()).collect()),
            ),
            "font": enum_entry(
                "Display typeface",
                plain_values(Font::all().iter().map(|v| v.literal()).collect()),
            ),
            "displayDailyPrecip": enum_entry(
                "Daily precipitation column behavior",
                plain_values(DisplayDailyPrecip::all().iter().map(|v| v.literal()).collect()),
            ),
            "leftPanelLayout": enum_entry(
                "Panel position keys, slots 0-9",
                plain_values(PanelPosition::all().iter().map(|v| v.literal()).collect()),
            ),
        },
        "defaults": {
            "epdPanel": EpdPanel::default().literal(),
            "epdDriver": EpdDriver::default().literal(),
            "accentColor": AccentColor::default().literal(),
            "weatherAPI": WeatherApi::default().literal(),
            "airQualityAPI": AirQualityApi::default().literal(),
            "useImperialUnitsAsDefault": false,
            "unitsHourlyPrecip": UnitsPrecip::default().literal(),
            "windDirectionLabel": WindDirectionLabel::default().literal(),
            "windArrowPrecision": WindArrowPrecision::default().literal(),
            "font": Font::default().literal(),
            "displayDailyPrecip": DisplayDailyPrecip::default().literal(),
            "displayHourlyIcons": true,
            "displayAlerts": true,
            "statusBarExtrasBatVoltage": false,
            "statusBarExtrasWifiRSSI": false,
            "batteryMonitoring": true,
            "debugLevel": 0,
            "owmOnecallVersion": "3.0",
            "timeFormat": "%H:%M",
            "hourFormat": "%H",
            "refreshTimeFormat": "%x %H:%M",
            "sleepDuration": 30,
            "bedTime": 0,
            "wakeTime": 6,
            "hourlyGraphMax": 24,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_enum_is_listed() {
        let doc = schema_json();
        let enums = doc["enums"].as_object().unwrap();
        assert_eq!(enums.len(), 17);
        for (name, entry) in enums {
            assert!(
                entry["anyOf"].as_array().map_or(false, |a| !a.is_empty()),
                "{name} has no values"
            );
            assert!(entry["description"].is_string());
        }
    }

    #[test]
    fn test_panel_members_carry_descriptions() {
        let doc = schema_json();
        let panels = doc["enums"]["epdPanel"]["anyOf"].as_array().unwrap();
        assert_eq!(panels.len(), 5);
        assert_eq!(panels[0]["const"], "GENERIC_BW_V2");
        assert!(panels[0]["description"]
            .as_str()
            .unwrap()
            .contains("800x480px"));
    }

    #[test]
    fn test_defaults_match_the_record() {
        let doc = schema_json();
        assert_eq!(doc["defaults"]["font"], "FreeSans");
        assert_eq!(doc["defaults"]["sleepDuration"], 30);
        assert_eq!(doc["defaults"]["weatherAPI"], "Open-Meteo");
    }
}
