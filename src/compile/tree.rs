//! Tagged emission tree
//!
//! The emitter never inspects [`crate::schema::config::Config`] directly.
//! The builders here turn the validated tree into `(field name, Item)`
//! pairs whose variant fixes the emission form, so the choice of form is
//! made per field at schema-definition time rather than by probing values
//! at emit time.

use crate::schema::config::{
    Config, HomeAssistantMqttConfig, PinsConfig, StaticIpConfig, WifiConfig,
};
use crate::schema::display::{Font, PanelPosition};

/// One value in the emission tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// Quoted, escaped string declaration (`D_` prefixed).
    Str(String),
    /// Bare numeric declaration.
    Int(i64),
    /// Flag declaration valued 1 or 0.
    Bool(bool),
    /// Numeric declaration with a single-precision suffix.
    Float(f64),
    /// Absent optional at the root: empty-string declaration.
    Null,
    /// Pre-rendered unquoted token (converters, the locale literal).
    Raw(String),
    /// Presence-only declaration suffixed with the member symbol.
    Flag(&'static str),
    /// Typeface resolved against the font table at emit time.
    Font(Font),
    /// The left panel layout block, emitted under the fixed `POS_` prefix.
    Layout(Vec<(PanelPosition, u8)>),
    /// Nested record: section comment, prefixed fields, blank separator.
    Record(Vec<(String, Item)>),
    /// Generic mapping: section comment, prefixed entries, no separator.
    Mapping(Vec<(String, Item)>),
}

impl Item {
    fn str(value: &str) -> Item {
        Item::Str(value.to_string())
    }

    fn opt_str(value: &Option<String>) -> Item {
        match value {
            Some(value) => Item::str(value),
            None => Item::Null,
        }
    }
}

fn field(name: &str, item: Item) -> (String, Item) {
    (name.to_string(), item)
}

/// Build the root emission tree in the document's canonical field order.
pub fn build(config: &Config) -> Vec<(String, Item)> {
    vec![
        field("epdPanel", Item::Flag(config.epd_panel.symbol())),
        field("epdDriver", Item::Flag(config.epd_driver.symbol())),
        field(
            "accentColor",
            Item::Raw(config.accent_color.gx_constant().to_string()),
        ),
        field("locale", Item::Raw(config.locale.literal().to_string())),
        field("weatherAPI", Item::Flag(config.weather_api.symbol())),
        field("airQualityAPI", Item::Flag(config.air_quality_api.symbol())),
        field(
            "useImperialUnitsAsDefault",
            Item::Bool(config.use_imperial_units_as_default),
        ),
        field("unitsTemp", Item::Flag(config.units_temp().symbol())),
        field("unitsSpeed", Item::Flag(config.units_speed().symbol())),
        field("unitsPres", Item::Flag(config.units_pres().symbol())),
        field("unitsDistance", Item::Flag(config.units_distance().symbol())),
        field(
            "unitsHourlyPrecip",
            Item::Flag(config.units_hourly_precip.symbol()),
        ),
        field(
            "unitsDailyPrecip",
            Item::Flag(config.units_daily_precip().symbol()),
        ),
        field(
            "windDirectionLabel",
            Item::Flag(config.wind_direction_label.symbol()),
        ),
        field(
            "windArrowPrecision",
            Item::Flag(config.wind_arrow_precision.symbol()),
        ),
        field("font", Item::Font(config.font)),
        field(
            "displayDailyPrecip",
            Item::Flag(config.display_daily_precip.symbol()),
        ),
        field("displayHourlyIcons", Item::Bool(config.display_hourly_icons)),
        field("displayAlerts", Item::Bool(config.display_alerts)),
        field(
            "statusBarExtrasBatVoltage",
            Item::Bool(config.status_bar_extras_bat_voltage),
        ),
        field(
            "statusBarExtrasWifiRSSI",
            Item::Bool(config.status_bar_extras_wifi_rssi),
        ),
        field("batteryMonitoring", Item::Bool(config.battery_monitoring)),
        field("debugLevel", Item::Int(config.debug_level)),
        field(
            "leftPanelLayout",
            Item::Layout(
                config
                    .left_panel_layout
                    .iter()
                    .map(|(&pos, &slot)| (pos, slot))
                    .collect(),
            ),
        ),
        field("pin", pins(&config.pin)),
        field("wifi", wifi(&config.wifi)),
        field(
            "staticIP",
            match &config.static_ip {
                Some(block) => static_ip(block),
                None => Item::Null,
            },
        ),
        field("owmApikey", Item::opt_str(&config.owm_apikey)),
        field("owmOnecallVersion", Item::str(&config.owm_onecall_version)),
        field("latitude", Item::str(&config.latitude)),
        field("longitude", Item::str(&config.longitude)),
        field("city", Item::str(&config.city)),
        field("timezone", Item::str(&config.timezone)),
        field("timeFormat", Item::str(&config.time_format)),
        field("hourFormat", Item::str(&config.hour_format)),
        field("dateFormat", Item::str(&config.date_format)),
        field("refreshTimeFormat", Item::str(&config.refresh_time_format)),
        field("sleepDuration", Item::Int(config.sleep_duration)),
        field("bedTime", Item::Int(config.bed_time)),
        field("wakeTime", Item::Int(config.wake_time)),
        field("hourlyGraphMax", Item::Int(config.hourly_graph_max)),
        field(
            "homeAssistantMqtt",
            match &config.home_assistant_mqtt {
                Some(block) => mqtt(block),
                None => Item::Null,
            },
        ),
    ]
}

fn pins(pin: &PinsConfig) -> Item {
    Item::Record(vec![
        field("batAdc", Item::Int(pin.bat_adc)),
        field("epdBusy", Item::Int(pin.epd_busy)),
        field("epdCS", Item::Int(pin.epd_cs)),
        field("epdRst", Item::Int(pin.epd_rst)),
        field("epdDC", Item::Int(pin.epd_dc)),
        field("epdSCK", Item::Int(pin.epd_sck)),
        field("epdMISO", Item::Int(pin.epd_miso)),
        field("epdMOSI", Item::Int(pin.epd_mosi)),
        field("epdPwr", Item::Int(pin.epd_pwr)),
    ])
}

fn wifi(wifi: &WifiConfig) -> Item {
    let mut fields = vec![
        field("ssid", Item::str(&wifi.ssid)),
        field("password", Item::str(&wifi.password)),
        field("timeout", Item::Int(wifi.timeout)),
        field("scan", Item::Bool(wifi.scan)),
    ];
    // Owner-supplied converter: the bssid is rendered as a byte-array
    // initializer, not a string. Absent bssid is skipped, not nulled.
    if let Some(initializer) = wifi.bssid_initializer() {
        fields.push(field("bssid", Item::Raw(initializer)));
    }
    Item::Record(fields)
}

fn static_ip(block: &StaticIpConfig) -> Item {
    let mut fields = vec![
        field("localIP", Item::str(&block.local_ip)),
        field("gateway", Item::str(&block.gateway)),
        field("subnet", Item::str(&block.subnet)),
    ];
    if let Some(dns) = &block.primary_dns {
        fields.push(field("primaryDNS", Item::str(dns)));
    }
    if let Some(dns) = &block.secondary_dns {
        fields.push(field("secondaryDNS", Item::str(dns)));
    }
    Item::Record(fields)
}

fn mqtt(block: &HomeAssistantMqttConfig) -> Item {
    Item::Record(vec![
        field("enabled", Item::Bool(block.enabled)),
        field("server", Item::str(&block.server)),
        field("port", Item::Int(i64::from(block.port))),
        field("username", Item::str(&block.username)),
        field("password", Item::str(&block.password)),
        field("clientId", Item::str(&block.client_id)),
        field("deviceName", Item::str(&block.device_name)),
        field("discoveryPrefix", Item::str(&block.discovery_prefix)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_config() -> Config {
        serde_yml::from_str(
            r#"
locale: en_GB
latitude: "40.7128"
longitude: "-74.0060"
city: New York
timezone: America/New_York
dateFormat: "%a, %B %e"
wifi:
  ssid: MyNetwork
  password: hunter22
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_root_field_order_is_canonical() {
        let tree = build(&minimal_config());
        let names: Vec<&str> = tree.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names[0], "epdPanel");
        assert_eq!(names[3], "locale");
        assert_eq!(names.last(), Some(&"homeAssistantMqtt"));
        assert_eq!(names.len(), 42);
    }

    #[test]
    fn test_enum_fields_become_flags() {
        let tree = build(&minimal_config());
        let item = |name: &str| {
            tree.iter()
                .find(|(n, _)| n == name)
                .map(|(_, item)| item.clone())
                .unwrap()
        };
        assert_eq!(item("epdPanel"), Item::Flag("GENERIC_BW_V2"));
        assert_eq!(item("weatherAPI"), Item::Flag("OPEN_METEO"));
        assert_eq!(item("unitsTemp"), Item::Flag("CELSIUS"));
        assert_eq!(item("accentColor"), Item::Raw("GxEPD_BLACK".to_string()));
        assert_eq!(item("locale"), Item::Raw("en_GB".to_string()));
    }

    #[test]
    fn test_absent_optionals_become_null() {
        let tree = build(&minimal_config());
        let absent = ["staticIP", "owmApikey", "homeAssistantMqtt"];
        for name in absent {
            let (_, item) = tree.iter().find(|(n, _)| n == name).unwrap();
            assert_eq!(*item, Item::Null, "{name} should be null");
        }
    }

    #[test]
    fn test_wifi_without_bssid_skips_the_field() {
        let tree = build(&minimal_config());
        let (_, wifi) = tree.iter().find(|(n, _)| n == "wifi").unwrap();
        let Item::Record(fields) = wifi else {
            panic!("wifi should be a record");
        };
        assert!(fields.iter().all(|(name, _)| name != "bssid"));
        assert_eq!(fields.len(), 4);
    }

    #[test]
    fn test_bssid_renders_as_raw_initializer() {
        let mut config = minimal_config();
        config.wifi.bssid = Some("aa:bb:cc:dd:ee:ff".to_string());
        let tree = build(&config);
        let (_, wifi) = tree.iter().find(|(n, _)| n == "wifi").unwrap();
        let Item::Record(fields) = wifi else {
            panic!("wifi should be a record");
        };
        let (_, bssid) = fields.iter().find(|(n, _)| n == "bssid").unwrap();
        assert_eq!(
            *bssid,
            Item::Raw("{0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF}".to_string())
        );
    }

    #[test]
    fn test_default_layout_covers_all_slots() {
        let tree = build(&minimal_config());
        let (_, layout) = tree.iter().find(|(n, _)| n == "leftPanelLayout").unwrap();
        let Item::Layout(entries) = layout else {
            panic!("leftPanelLayout should be a layout block");
        };
        assert_eq!(entries.len(), 10);
        assert_eq!(entries[0], (PanelPosition::Sunrise, 0));
        let mut slots: Vec<u8> = entries.iter().map(|(_, slot)| *slot).collect();
        slots.sort_unstable();
        assert_eq!(slots, (0..10).collect::<Vec<u8>>());
    }
}
