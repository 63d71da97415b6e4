use clima_core::error::ClimaError;
use clima_core::location::Location;
use clima_core::source::openweather::OpenWeatherClient;
use clima_core::source::ClientConfig;

use crate::output;

pub fn run(
    config: ClientConfig,
    city: &str,
    country: &str,
    output_format: &str,
) -> Result<(), ClimaError> {
    let location = Location::new(city, country)?;
    let client = OpenWeatherClient::new(config)?;
    let rows = clima_core::forecast_trend(&client, &location)?;

    match output_format {
        "json" => output::json::print(&rows)?,
        _ => output::table::print_trend(&location, &rows),
    }

    Ok(())
}
