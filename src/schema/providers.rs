//! Weather and air quality data providers

use serde::{Deserialize, Serialize};

/// Weather data provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherApi {
    #[serde(rename = "OpenWeatherMap")]
    OpenWeatherMap,
    #[serde(rename = "Open-Meteo")]
    OpenMeteo,
}

impl Default for WeatherApi {
    fn default() -> Self {
        WeatherApi::OpenMeteo
    }
}

impl WeatherApi {
    pub fn all() -> &'static [WeatherApi] {
        &[WeatherApi::OpenWeatherMap, WeatherApi::OpenMeteo]
    }

    pub fn literal(&self) -> &'static str {
        match self {
            WeatherApi::OpenWeatherMap => "OpenWeatherMap",
            WeatherApi::OpenMeteo => "Open-Meteo",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            WeatherApi::OpenWeatherMap => "OPEN_WEATHER_MAP",
            WeatherApi::OpenMeteo => "OPEN_METEO",
        }
    }
}

/// Air quality data provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AirQualityApi {
    #[serde(rename = "OpenWeatherMap")]
    OpenWeatherMap,
    #[serde(rename = "Open-Meteo")]
    OpenMeteo,
}

impl Default for AirQualityApi {
    fn default() -> Self {
        AirQualityApi::OpenMeteo
    }
}

impl AirQualityApi {
    pub fn all() -> &'static [AirQualityApi] {
        &[AirQualityApi::OpenWeatherMap, AirQualityApi::OpenMeteo]
    }

    pub fn literal(&self) -> &'static str {
        match self {
            AirQualityApi::OpenWeatherMap => "OpenWeatherMap",
            AirQualityApi::OpenMeteo => "Open-Meteo",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            AirQualityApi::OpenWeatherMap => "OPEN_WEATHER_MAP",
            AirQualityApi::OpenMeteo => "OPEN_METEO",
        }
    }
}
