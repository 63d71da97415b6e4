use crate::air::AirQualityReport;
use crate::forecast::ForecastRow;
use crate::location::Location;
use crate::model::{CurrentWeather, WeatherAlert};
use crate::scene::Scene;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// UV index values strictly above this are reported as extreme.
pub const UV_EXTREME_THRESHOLD: f64 = 11.0;

pub fn is_uv_extreme(uv_index: f64) -> bool {
    uv_index > UV_EXTREME_THRESHOLD
}

/// Everything shown on the health and weather dashboard for one city.
///
/// Only the current conditions are required. Sections whose request failed
/// are left empty (`None`) and logged, so one flaky endpoint does not hide
/// the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub location: Location,
    pub current: CurrentWeather,
    pub uv_index: Option<f64>,
    pub air_quality: Option<AirQualityReport>,
    pub forecast_date: NaiveDate,
    /// Forecast steps for `forecast_date`. `None` if the forecast could not
    /// be fetched, empty if the date is outside the forecast window.
    pub forecast: Option<Vec<ForecastRow>>,
    pub alerts: Vec<WeatherAlert>,
    pub scene: Option<Scene>,
}

impl Dashboard {
    pub fn uv_extreme(&self) -> bool {
        self.uv_index.is_some_and(is_uv_extreme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uv_threshold_is_strict() {
        assert!(!is_uv_extreme(11.0));
        assert!(is_uv_extreme(11.1));
        assert!(!is_uv_extreme(3.0));
    }
}
