use clima_core::error::ClimaError;
use serde::Serialize;

pub fn print<T: Serialize>(result: &T) -> Result<(), ClimaError> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}
