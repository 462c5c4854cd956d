//! Configuration records and cross-field validation
//!
//! The root [`Config`] mirrors `config.yml` one to one. Field types and
//! enumerations are enforced during decoding; the record-level predicates
//! in [`Config::validate`] run afterwards and fail on the first violation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schema::display::{
    AccentColor, DisplayDailyPrecip, EpdDriver, EpdPanel, Font, Locale,
    PanelPosition, WindArrowPrecision, WindDirectionLabel,
};
use crate::schema::providers::{AirQualityApi, WeatherApi};
use crate::schema::units::{
    UnitsDistance, UnitsPrecip, UnitsPres, UnitsSpeed, UnitsTemp,
};

/// A record-level validation failure.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("The API key is required on OpenWeatherMap")]
    MissingApiKey,

    #[error("wifi.scan and wifi.bssid are mutually exclusive")]
    ScanWithBssid,

    #[error("invalid BSSID '{0}': expected six colon-separated hex pairs, e.g. AA:BB:CC:DD:EE:FF")]
    InvalidBssid(String),

    #[error("staticIP.{field} '{value}' is not a dotted-quad IPv4 address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("staticIP.secondaryDNS requires staticIP.primaryDNS to be set")]
    SecondaryDnsWithoutPrimary,

    #[error("leftPanelLayout.{key} slot {slot} is outside 0-9")]
    SlotOutOfRange { key: PanelPosition, slot: u8 },
}

impl ConfigError {
    /// Document key the failure anchors to, for span lookup in reporting.
    pub fn field(&self) -> &'static str {
        match self {
            ConfigError::MissingApiKey => "owmApikey",
            ConfigError::ScanWithBssid | ConfigError::InvalidBssid(_) => "bssid",
            ConfigError::InvalidAddress { field, .. } => field,
            ConfigError::SecondaryDnsWithoutPrimary => "secondaryDNS",
            ConfigError::SlotOutOfRange { key, .. } => key.literal(),
        }
    }
}

/// ESP32 GPIO assignments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinsConfig {
    #[serde(default = "default_bat_adc")]
    pub bat_adc: i64,
    #[serde(default = "default_epd_busy")]
    pub epd_busy: i64,
    #[serde(rename = "epdCS", default = "default_epd_cs")]
    pub epd_cs: i64,
    #[serde(default = "default_epd_rst")]
    pub epd_rst: i64,
    #[serde(rename = "epdDC", default = "default_epd_dc")]
    pub epd_dc: i64,
    #[serde(rename = "epdSCK", default = "default_epd_sck")]
    pub epd_sck: i64,
    #[serde(rename = "epdMISO", default = "default_epd_miso")]
    pub epd_miso: i64,
    #[serde(rename = "epdMOSI", default = "default_epd_mosi")]
    pub epd_mosi: i64,
    #[serde(default = "default_epd_pwr")]
    pub epd_pwr: i64,
}

fn default_bat_adc() -> i64 {
    35
}

fn default_epd_busy() -> i64 {
    14
}

fn default_epd_cs() -> i64 {
    13
}

fn default_epd_rst() -> i64 {
    21
}

fn default_epd_dc() -> i64 {
    22
}

fn default_epd_sck() -> i64 {
    18
}

fn default_epd_miso() -> i64 {
    19
}

fn default_epd_mosi() -> i64 {
    23
}

fn default_epd_pwr() -> i64 {
    26
}

impl Default for PinsConfig {
    fn default() -> Self {
        PinsConfig {
            bat_adc: default_bat_adc(),
            epd_busy: default_epd_busy(),
            epd_cs: default_epd_cs(),
            epd_rst: default_epd_rst(),
            epd_dc: default_epd_dc(),
            epd_sck: default_epd_sck(),
            epd_miso: default_epd_miso(),
            epd_mosi: default_epd_mosi(),
            epd_pwr: default_epd_pwr(),
        }
    }
}

/// Network credentials and association behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WifiConfig {
    pub ssid: String,
    pub password: String,
    /// Association timeout in milliseconds.
    #[serde(default = "default_wifi_timeout")]
    pub timeout: i64,
    /// Scan for the strongest access point instead of pinning one.
    #[serde(default)]
    pub scan: bool,
    /// Pin a specific access point by hardware address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bssid: Option<String>,
}

fn default_wifi_timeout() -> i64 {
    10000
}

impl WifiConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(bssid) = &self.bssid {
            if self.scan {
                return Err(ConfigError::ScanWithBssid);
            }
            if !is_bssid(bssid) {
                return Err(ConfigError::InvalidBssid(bssid.clone()));
            }
        }
        Ok(())
    }

    /// Render the BSSID as a byte-array initializer:
    /// `aa:bb:cc:dd:ee:ff` -> `{0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF}`.
    pub fn bssid_initializer(&self) -> Option<String> {
        let bssid = self.bssid.as_deref()?;
        let bytes: Vec<String> = bssid
            .split(':')
            .map(|pair| format!("0x{}", pair.to_ascii_uppercase()))
            .collect();
        Some(format!("{{{}}}", bytes.join(", ")))
    }
}

fn is_bssid(value: &str) -> bool {
    let pairs: Vec<&str> = value.split(':').collect();
    pairs.len() == 6
        && pairs
            .iter()
            .all(|pair| pair.len() == 2 && pair.chars().all(|c| c.is_ascii_hexdigit()))
}

/// Static addressing used instead of DHCP when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticIpConfig {
    #[serde(rename = "localIP")]
    pub local_ip: String,
    pub gateway: String,
    pub subnet: String,
    #[serde(rename = "primaryDNS", default, skip_serializing_if = "Option::is_none")]
    pub primary_dns: Option<String>,
    #[serde(rename = "secondaryDNS", default, skip_serializing_if = "Option::is_none")]
    pub secondary_dns: Option<String>,
}

impl StaticIpConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("localIP", Some(self.local_ip.as_str())),
            ("gateway", Some(self.gateway.as_str())),
            ("subnet", Some(self.subnet.as_str())),
            ("primaryDNS", self.primary_dns.as_deref()),
            ("secondaryDNS", self.secondary_dns.as_deref()),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                if !is_dotted_quad(value) {
                    return Err(ConfigError::InvalidAddress {
                        field,
                        value: value.to_string(),
                    });
                }
            }
        }
        if self.secondary_dns.is_some() && self.primary_dns.is_none() {
            return Err(ConfigError::SecondaryDnsWithoutPrimary);
        }
        Ok(())
    }
}

fn is_dotted_quad(value: &str) -> bool {
    let octets: Vec<&str> = value.split('.').collect();
    octets.len() == 4
        && octets.iter().all(|octet| {
            !octet.is_empty()
                && octet.len() <= 3
                && octet.chars().all(|c| c.is_ascii_digit())
                && octet.parse::<u8>().is_ok()
        })
}

/// Home Assistant MQTT reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeAssistantMqttConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub server: String,
    #[serde(default = "default_mqtt_port")]
    pub port: u16,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_client_id")]
    pub client_id: String,
    #[serde(default = "default_device_name")]
    pub device_name: String,
    #[serde(default = "default_discovery_prefix")]
    pub discovery_prefix: String,
}

fn default_mqtt_port() -> u16 {
    1883
}

fn default_client_id() -> String {
    "esp32-weather-epd".to_string()
}

fn default_device_name() -> String {
    "Weather EPD".to_string()
}

fn default_discovery_prefix() -> String {
    "homeassistant".to_string()
}

/// The full configuration document.
///
/// Field order is the document's canonical order and drives the order of
/// the generated declarations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub epd_panel: EpdPanel,
    #[serde(default)]
    pub epd_driver: EpdDriver,
    #[serde(default)]
    pub accent_color: AccentColor,
    pub locale: Locale,
    #[serde(rename = "weatherAPI", default)]
    pub weather_api: WeatherApi,
    #[serde(rename = "airQualityAPI", default)]
    pub air_quality_api: AirQualityApi,
    #[serde(default)]
    pub use_imperial_units_as_default: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    units_temp: Option<UnitsTemp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    units_speed: Option<UnitsSpeed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    units_pres: Option<UnitsPres>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    units_distance: Option<UnitsDistance>,
    #[serde(default)]
    pub units_hourly_precip: UnitsPrecip,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    units_daily_precip: Option<UnitsPrecip>,
    #[serde(default)]
    pub wind_direction_label: WindDirectionLabel,
    #[serde(default)]
    pub wind_arrow_precision: WindArrowPrecision,
    #[serde(default)]
    pub font: Font,
    #[serde(default)]
    pub display_daily_precip: DisplayDailyPrecip,
    #[serde(default = "default_true")]
    pub display_hourly_icons: bool,
    #[serde(default = "default_true")]
    pub display_alerts: bool,
    #[serde(default)]
    pub status_bar_extras_bat_voltage: bool,
    #[serde(rename = "statusBarExtrasWifiRSSI", default)]
    pub status_bar_extras_wifi_rssi: bool,
    #[serde(default = "default_true")]
    pub battery_monitoring: bool,
    /// Firmware verbosity, 0 to 2. The range is documented but has never
    /// been enforced here; keep it that way.
    #[serde(default)]
    pub debug_level: i64,
    #[serde(default = "default_left_panel_layout")]
    pub left_panel_layout: BTreeMap<PanelPosition, u8>,
    #[serde(default)]
    pub pin: PinsConfig,
    pub wifi: WifiConfig,
    #[serde(rename = "staticIP", default, skip_serializing_if = "Option::is_none")]
    pub static_ip: Option<StaticIpConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owm_apikey: Option<String>,
    #[serde(default = "default_owm_onecall_version")]
    pub owm_onecall_version: String,
    pub latitude: String,
    pub longitude: String,
    pub city: String,
    pub timezone: String,
    #[serde(default = "default_time_format")]
    pub time_format: String,
    #[serde(default = "default_hour_format")]
    pub hour_format: String,
    pub date_format: String,
    #[serde(default = "default_refresh_time_format")]
    pub refresh_time_format: String,
    /// Minutes between refreshes.
    #[serde(default = "default_sleep_duration")]
    pub sleep_duration: i64,
    #[serde(default)]
    pub bed_time: i64,
    #[serde(default = "default_wake_time")]
    pub wake_time: i64,
    #[serde(default = "default_hourly_graph_max")]
    pub hourly_graph_max: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_assistant_mqtt: Option<HomeAssistantMqttConfig>,
}

fn default_true() -> bool {
    true
}

fn default_left_panel_layout() -> BTreeMap<PanelPosition, u8> {
    PanelPosition::all()
        .iter()
        .enumerate()
        .map(|(slot, &pos)| (pos, slot as u8))
        .collect()
}

fn default_owm_onecall_version() -> String {
    "3.0".to_string()
}

fn default_time_format() -> String {
    "%H:%M".to_string()
}

fn default_hour_format() -> String {
    "%H".to_string()
}

fn default_refresh_time_format() -> String {
    "%x %H:%M".to_string()
}

fn default_sleep_duration() -> i64 {
    30
}

fn default_wake_time() -> i64 {
    6
}

fn default_hourly_graph_max() -> i64 {
    24
}

impl Config {
    /// Temperature unit; defaults from the imperial flag when unset.
    pub fn units_temp(&self) -> UnitsTemp {
        self.units_temp
            .unwrap_or(UnitsTemp::default_for(self.use_imperial_units_as_default))
    }

    /// Wind speed unit; defaults from the imperial flag when unset.
    pub fn units_speed(&self) -> UnitsSpeed {
        self.units_speed
            .unwrap_or(UnitsSpeed::default_for(self.use_imperial_units_as_default))
    }

    /// Pressure unit; defaults from the imperial flag when unset.
    pub fn units_pres(&self) -> UnitsPres {
        self.units_pres
            .unwrap_or(UnitsPres::default_for(self.use_imperial_units_as_default))
    }

    /// Distance unit; defaults from the imperial flag when unset.
    pub fn units_distance(&self) -> UnitsDistance {
        self.units_distance
            .unwrap_or(UnitsDistance::default_for(self.use_imperial_units_as_default))
    }

    /// Daily precipitation unit; defaults from the imperial flag when unset.
    pub fn units_daily_precip(&self) -> UnitsPrecip {
        self.units_daily_precip
            .unwrap_or(UnitsPrecip::default_for(self.use_imperial_units_as_default))
    }

    /// Run every record-level predicate, stopping at the first failure.
    ///
    /// Nested records are checked before root-level predicates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.wifi.validate()?;
        if let Some(static_ip) = &self.static_ip {
            static_ip.validate()?;
        }
        if self.requires_owm_apikey()
            && self.owm_apikey.as_deref().map_or(true, str::is_empty)
        {
            return Err(ConfigError::MissingApiKey);
        }
        for (&key, &slot) in &self.left_panel_layout {
            if slot > 9 {
                return Err(ConfigError::SlotOutOfRange { key, slot });
            }
        }
        Ok(())
    }

    fn requires_owm_apikey(&self) -> bool {
        self.weather_api == WeatherApi::OpenWeatherMap
            || self.air_quality_api == AirQualityApi::OpenWeatherMap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_yaml() -> String {
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
"#
        .to_string()
    }

    fn parse(yaml: &str) -> Config {
        serde_yml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_minimal_config_defaults() {
        let cfg = parse(&minimal_yaml());
        assert!(cfg.validate().is_ok());

        assert_eq!(cfg.epd_panel, EpdPanel::GenericBwV2);
        assert_eq!(cfg.epd_driver, EpdDriver::DespiC02);
        assert_eq!(cfg.weather_api, WeatherApi::OpenMeteo);
        assert_eq!(cfg.units_hourly_precip, UnitsPrecip::Pop);
        assert_eq!(cfg.font, Font::FreeSans);
        assert!(cfg.display_hourly_icons);
        assert!(cfg.battery_monitoring);
        assert!(!cfg.status_bar_extras_wifi_rssi);
        assert_eq!(cfg.debug_level, 0);
        assert_eq!(cfg.pin.epd_cs, 13);
        assert_eq!(cfg.pin.bat_adc, 35);
        assert_eq!(cfg.wifi.timeout, 10000);
        assert_eq!(cfg.owm_onecall_version, "3.0");
        assert_eq!(cfg.sleep_duration, 30);
        assert_eq!(cfg.wake_time, 6);
        assert_eq!(cfg.left_panel_layout.len(), 10);
        assert_eq!(
            cfg.left_panel_layout.get(&PanelPosition::Sunrise),
            Some(&0)
        );
        assert!(cfg.static_ip.is_none());
        assert!(cfg.home_assistant_mqtt.is_none());
    }

    #[test]
    fn test_metric_units_by_default() {
        let cfg = parse(&minimal_yaml());
        assert_eq!(cfg.units_temp(), UnitsTemp::Celsius);
        assert_eq!(cfg.units_speed(), UnitsSpeed::KilometersPerHour);
        assert_eq!(cfg.units_pres(), UnitsPres::Millibar);
        assert_eq!(cfg.units_distance(), UnitsDistance::Kilometers);
        assert_eq!(cfg.units_daily_precip(), UnitsPrecip::Millimeters);
    }

    #[test]
    fn test_imperial_flag_drives_unit_defaults() {
        let yaml = format!("{}useImperialUnitsAsDefault: true\n", minimal_yaml());
        let cfg = parse(&yaml);
        assert_eq!(cfg.units_temp(), UnitsTemp::Fahrenheit);
        assert_eq!(cfg.units_speed(), UnitsSpeed::MilesPerHour);
        assert_eq!(cfg.units_pres(), UnitsPres::InchesOfMercury);
        assert_eq!(cfg.units_distance(), UnitsDistance::Miles);
        assert_eq!(cfg.units_daily_precip(), UnitsPrecip::Inches);
    }

    #[test]
    fn test_explicit_unit_overrides_flag() {
        let yaml = format!(
            "{}useImperialUnitsAsDefault: true\nunitsTemp: Kelvin\n",
            minimal_yaml()
        );
        let cfg = parse(&yaml);
        assert_eq!(cfg.units_temp(), UnitsTemp::Kelvin);
        // The other units still follow the flag.
        assert_eq!(cfg.units_speed(), UnitsSpeed::MilesPerHour);
    }

    #[test]
    fn test_missing_required_field() {
        let yaml = minimal_yaml().replace("locale: en_GB\n", "");
        let err = serde_yml::from_str::<Config>(&yaml).unwrap_err();
        assert!(err.to_string().contains("locale"));
    }

    #[test]
    fn test_missing_wifi_password() {
        let yaml = minimal_yaml().replace("  password: hunter22\n", "");
        let err = serde_yml::from_str::<Config>(&yaml).unwrap_err();
        assert!(err.to_string().contains("password"));
    }

    #[test]
    fn test_unknown_enum_value_lists_choices() {
        let yaml = format!("{}epdPanel: SOME_PANEL\n", minimal_yaml());
        let err = serde_yml::from_str::<Config>(&yaml).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("SOME_PANEL"));
        assert!(message.contains("GENERIC_BW_V2"));
    }

    #[test]
    fn test_owm_requires_apikey() {
        let yaml = format!("{}weatherAPI: OpenWeatherMap\n", minimal_yaml());
        let cfg = parse(&yaml);
        assert_eq!(cfg.validate(), Err(ConfigError::MissingApiKey));

        let yaml = format!(
            "{}weatherAPI: OpenWeatherMap\nowmApikey: abc123\n",
            minimal_yaml()
        );
        let cfg = parse(&yaml);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_air_quality_owm_requires_apikey() {
        let yaml = format!("{}airQualityAPI: OpenWeatherMap\n", minimal_yaml());
        let cfg = parse(&yaml);
        assert_eq!(cfg.validate(), Err(ConfigError::MissingApiKey));
    }

    #[test]
    fn test_empty_apikey_rejected() {
        let yaml = format!(
            "{}weatherAPI: OpenWeatherMap\nowmApikey: \"\"\n",
            minimal_yaml()
        );
        let cfg = parse(&yaml);
        assert_eq!(cfg.validate(), Err(ConfigError::MissingApiKey));
    }

    #[test]
    fn test_bssid_scan_conflict() {
        let yaml = minimal_yaml().replace(
            "  password: hunter22\n",
            "  password: hunter22\n  scan: true\n  bssid: AA:BB:CC:DD:EE:FF\n",
        );
        let cfg = parse(&yaml);
        assert_eq!(cfg.validate(), Err(ConfigError::ScanWithBssid));
    }

    #[test]
    fn test_bssid_malformed() {
        for bad in ["AA:BB:CC:DD:EE", "AABBCCDDEEFF", "GG:BB:CC:DD:EE:FF", "A:BB:CC:DD:EE:FF"] {
            let yaml = minimal_yaml().replace(
                "  password: hunter22\n",
                &format!("  password: hunter22\n  bssid: \"{bad}\"\n"),
            );
            let cfg = parse(&yaml);
            assert_eq!(
                cfg.validate(),
                Err(ConfigError::InvalidBssid(bad.to_string())),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_bssid_initializer() {
        let yaml = minimal_yaml().replace(
            "  password: hunter22\n",
            "  password: hunter22\n  bssid: \"aa:bb:cc:dd:ee:ff\"\n",
        );
        let cfg = parse(&yaml);
        assert!(cfg.validate().is_ok());
        assert_eq!(
            cfg.wifi.bssid_initializer().unwrap(),
            "{0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF}"
        );
    }

    #[test]
    fn test_static_ip_valid() {
        let yaml = format!(
            "{}staticIP:\n  localIP: 192.168.1.100\n  gateway: 192.168.1.1\n  subnet: 255.255.255.0\n  primaryDNS: 8.8.8.8\n  secondaryDNS: 8.8.4.4\n",
            minimal_yaml()
        );
        let cfg = parse(&yaml);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_static_ip_bad_quad() {
        let yaml = format!(
            "{}staticIP:\n  localIP: 192.168.1.300\n  gateway: 192.168.1.1\n  subnet: 255.255.255.0\n",
            minimal_yaml()
        );
        let cfg = parse(&yaml);
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidAddress {
                field: "localIP",
                value: "192.168.1.300".to_string()
            })
        );
    }

    #[test]
    fn test_secondary_dns_requires_primary() {
        let yaml = format!(
            "{}staticIP:\n  localIP: 192.168.1.100\n  gateway: 192.168.1.1\n  subnet: 255.255.255.0\n  secondaryDNS: 8.8.4.4\n",
            minimal_yaml()
        );
        let cfg = parse(&yaml);
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::SecondaryDnsWithoutPrimary)
        );
    }

    #[test]
    fn test_layout_unknown_key_rejected() {
        let yaml = format!("{}leftPanelLayout:\n  MOONRISE: 0\n", minimal_yaml());
        let err = serde_yml::from_str::<Config>(&yaml).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("MOONRISE"));
        assert!(message.contains("SUNRISE"));
    }

    #[test]
    fn test_layout_slot_out_of_range() {
        let yaml = format!(
            "{}leftPanelLayout:\n  SUNRISE: 10\n",
            minimal_yaml()
        );
        let cfg = parse(&yaml);
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::SlotOutOfRange {
                key: PanelPosition::Sunrise,
                slot: 10
            })
        );
    }

    #[test]
    fn test_layout_negative_slot_rejected() {
        let yaml = format!("{}leftPanelLayout:\n  SUNRISE: -1\n", minimal_yaml());
        assert!(serde_yml::from_str::<Config>(&yaml).is_err());
    }

    #[test]
    fn test_layout_partial_mapping_allowed() {
        let yaml = format!(
            "{}leftPanelLayout:\n  SUNRISE: 1\n  SUNSET: 0\n",
            minimal_yaml()
        );
        let cfg = parse(&yaml);
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.left_panel_layout.len(), 2);
    }

    #[test]
    fn test_debug_level_range_not_enforced() {
        let yaml = format!("{}debugLevel: 7\n", minimal_yaml());
        let cfg = parse(&yaml);
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.debug_level, 7);
    }

    #[test]
    fn test_mqtt_block_defaults() {
        let yaml = format!(
            "{}homeAssistantMqtt:\n  enabled: true\n  server: 192.168.1.2\n",
            minimal_yaml()
        );
        let cfg = parse(&yaml);
        let mqtt = cfg.home_assistant_mqtt.as_ref().unwrap();
        assert!(mqtt.enabled);
        assert_eq!(mqtt.port, 1883);
        assert_eq!(mqtt.client_id, "esp32-weather-epd");
        assert_eq!(mqtt.device_name, "Weather EPD");
        assert_eq!(mqtt.discovery_prefix, "homeassistant");
    }

    #[test]
    fn test_pin_partial_override() {
        let yaml = format!("{}pin:\n  epdBusy: 4\n", minimal_yaml());
        let cfg = parse(&yaml);
        assert_eq!(cfg.pin.epd_busy, 4);
        assert_eq!(cfg.pin.epd_mosi, 23);
    }

    #[test]
    fn test_config_roundtrip() {
        let cfg = parse(&minimal_yaml());
        let yaml = serde_yml::to_string(&cfg).unwrap();
        let parsed: Config = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(parsed.locale, Locale::EnGb);
        assert_eq!(parsed.city, "New York");
        assert_eq!(parsed.units_temp(), UnitsTemp::Celsius);
    }
}
