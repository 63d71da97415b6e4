pub mod openweather;

use crate::error::ClimaError;
use crate::location::Location;
use crate::model::{AirPollution, Coord, CurrentWeather, ForecastEntry, WeatherAlert};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
pub const DEFAULT_UNITS: &str = "metric";
pub const DEFAULT_LANG: &str = "pt_br";

/// Connection settings for the weather API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    /// "metric", "imperial" or "standard".
    pub units: String,
    /// Language of descriptions and alert texts.
    pub lang: String,
}

impl ClientConfig {
    /// Config with default endpoint, metric units and Brazilian Portuguese.
    pub fn new(api_key: impl Into<String>) -> Result<ClientConfig, ClimaError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ClimaError::MissingApiKey);
        }
        Ok(ClientConfig {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            units: DEFAULT_UNITS.to_string(),
            lang: DEFAULT_LANG.to_string(),
        })
    }
}

/// Trait for weather data backends.
pub trait WeatherSource: Send + Sync {
    /// Current conditions for a city.
    fn current_weather(&self, location: &Location) -> Result<CurrentWeather, ClimaError>;

    /// 5-day forecast in 3-hour steps.
    fn forecast(&self, location: &Location) -> Result<Vec<ForecastEntry>, ClimaError>;

    /// Latest air-pollution sample.
    fn air_pollution(&self, coord: Coord) -> Result<AirPollution, ClimaError>;

    /// Active weather alerts. Empty when there are none.
    fn alerts(&self, coord: Coord) -> Result<Vec<WeatherAlert>, ClimaError>;

    /// Current UV index.
    fn uv_index(&self, coord: Coord) -> Result<f64, ClimaError>;

    /// Name of this backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::new("abc123").unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.units, "metric");
        assert_eq!(config.lang, "pt_br");
    }

    #[test]
    fn test_blank_api_key_rejected() {
        assert!(matches!(
            ClientConfig::new("  "),
            Err(ClimaError::MissingApiKey)
        ));
    }
}
