use clima_core::air::RecommendedLevels;
use clima_core::error::ClimaError;
use clima_core::model::Coord;
use clima_core::source::openweather::OpenWeatherClient;
use clima_core::source::ClientConfig;
use std::path::PathBuf;

use crate::output;

pub fn run(config: ClientConfig, lat: f64, lon: f64, output_format: &str) -> Result<(), ClimaError> {
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(ClimaError::InvalidInput(format!(
            "coordinate out of range: {lat}, {lon}"
        )));
    }

    let levels = RecommendedLevels::standard()?;
    let client = OpenWeatherClient::new(config)?;
    let report = clima_core::air_quality_at(&client, Coord { lat, lon }, &levels)?;

    match output_format {
        "json" => output::json::print(&report)?,
        _ => output::table::print_air_quality(&report),
    }

    Ok(())
}

pub fn evaluate(input_file: PathBuf, output_format: &str) -> Result<(), ClimaError> {
    let levels = RecommendedLevels::standard()?;
    tracing::debug!(path = %input_file.display(), "evaluating saved air quality data");
    let json_bytes = std::fs::read(&input_file)?;
    let json: serde_json::Value = serde_json::from_slice(&json_bytes)?;
    let report = clima_core::assess_json(&json, &levels)?;

    match output_format {
        "json" => output::json::print(&report)?,
        _ => output::table::print_air_quality(&report),
    }

    Ok(())
}
