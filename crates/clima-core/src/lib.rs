pub mod air;
pub mod dashboard;
pub mod error;
pub mod forecast;
pub mod location;
pub mod model;
pub mod scene;
pub mod source;

use air::{AirQualityReport, RecommendedLevels};
use chrono::NaiveDate;
use dashboard::Dashboard;
use error::ClimaError;
use forecast::ForecastRow;
use location::Location;
use model::{AirPollution, Coord, Readings};
use source::WeatherSource;

/// Main API entry point: gather and evaluate everything the dashboard shows.
///
/// Fails only if the current conditions cannot be fetched (e.g. unknown
/// city). The other sections degrade to empty with a logged warning.
pub fn build_dashboard(
    source: &dyn WeatherSource,
    location: &Location,
    date: NaiveDate,
    levels: &RecommendedLevels,
) -> Result<Dashboard, ClimaError> {
    tracing::info!(
        location = %location,
        backend = source.backend_name(),
        "building dashboard"
    );

    let current = source.current_weather(location)?;
    let coord = current.coord;

    let air_quality = match source.air_pollution(coord) {
        Ok(pollution) => Some(assess_pollution(&pollution, levels)),
        Err(e) => {
            tracing::warn!(%coord, error = %e, "air quality unavailable");
            None
        }
    };

    let uv_index = match source.uv_index(coord) {
        Ok(uv) => Some(uv),
        Err(e) => {
            tracing::warn!(%coord, error = %e, "UV index unavailable");
            None
        }
    };

    let forecast = match source.forecast(location) {
        Ok(entries) => Some(forecast::for_date(&entries, date)),
        Err(e) => {
            tracing::warn!(location = %location, error = %e, "forecast unavailable");
            None
        }
    };

    let alerts = source.alerts(coord).unwrap_or_else(|e| {
        tracing::warn!(%coord, error = %e, "weather alerts unavailable");
        Vec::new()
    });

    let scene = scene::classify(&current.description);

    Ok(Dashboard {
        location: location.clone(),
        current,
        uv_index,
        air_quality,
        forecast_date: date,
        forecast,
        alerts,
        scene,
    })
}

/// Fetch and evaluate air quality at a coordinate.
pub fn air_quality_at(
    source: &dyn WeatherSource,
    coord: Coord,
    levels: &RecommendedLevels,
) -> Result<AirQualityReport, ClimaError> {
    let pollution = source.air_pollution(coord)?;
    Ok(assess_pollution(&pollution, levels))
}

/// Evaluate saved air-quality JSON: either a bare `components` object or a
/// full air-pollution response (`{"list": [{"main": ..., "components": ...}]}`).
pub fn assess_json(
    json: &serde_json::Value,
    levels: &RecommendedLevels,
) -> Result<AirQualityReport, ClimaError> {
    let Some(sample) = json.get("list") else {
        let readings = Readings::from_components(json)?;
        return Ok(AirQualityReport {
            aqi: None,
            warnings: air::evaluate(&readings, levels),
            components: air::chart_rows(&readings),
        });
    };

    let first = sample.get(0).ok_or_else(|| {
        ClimaError::InvalidInput("air pollution response contains no samples".into())
    })?;
    let components = first.get("components").ok_or_else(|| {
        ClimaError::InvalidInput("air pollution sample has no 'components'".into())
    })?;
    let aqi = first
        .get("main")
        .and_then(|m| m.get("aqi"))
        .and_then(serde_json::Value::as_u64)
        .and_then(|a| u8::try_from(a).ok());

    let readings = Readings::from_components(components)?;
    Ok(AirQualityReport {
        aqi,
        warnings: air::evaluate(&readings, levels),
        components: air::chart_rows(&readings),
    })
}

/// Full forecast for a city, for the temperature trend view.
pub fn forecast_trend(
    source: &dyn WeatherSource,
    location: &Location,
) -> Result<Vec<ForecastRow>, ClimaError> {
    let entries = source.forecast(location)?;
    Ok(forecast::trend(&entries))
}

fn assess_pollution(pollution: &AirPollution, levels: &RecommendedLevels) -> AirQualityReport {
    let report = air::assess(pollution, levels);
    for warning in &report.warnings {
        tracing::info!(
            pollutant = %warning.pollutant,
            value = %warning.value,
            threshold = %warning.threshold,
            "pollutant above recommended level"
        );
    }
    report
}
