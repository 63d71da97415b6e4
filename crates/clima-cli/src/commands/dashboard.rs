use chrono::{Local, NaiveDate};
use clima_core::air::RecommendedLevels;
use clima_core::error::ClimaError;
use clima_core::location::Location;
use clima_core::source::openweather::OpenWeatherClient;
use clima_core::source::ClientConfig;

use crate::output;

pub fn run(
    config: ClientConfig,
    city: &str,
    country: &str,
    date: Option<NaiveDate>,
    output_format: &str,
) -> Result<(), ClimaError> {
    let levels = RecommendedLevels::standard()?;
    let location = Location::new(city, country)?;
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let client = OpenWeatherClient::new(config)?;

    let dashboard = clima_core::build_dashboard(&client, &location, date, &levels)?;

    match output_format {
        "json" => output::json::print(&dashboard)?,
        _ => output::table::print_dashboard(&dashboard),
    }

    Ok(())
}
