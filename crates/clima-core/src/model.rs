use crate::error::ClimaError;
use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Concentration unit of a reading or threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "µg/m³")]
    #[default]
    MicrogramsPerCubicMetre,
    #[serde(rename = "ppm")]
    PartsPerMillion,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::MicrogramsPerCubicMetre => write!(f, "µg/m³"),
            Unit::PartsPerMillion => write!(f, "ppm"),
        }
    }
}

/// A single pollutant concentration as delivered upstream (µg/m³).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub pollutant: String,
    pub concentration: Decimal,
}

impl Reading {
    pub fn new(pollutant: impl Into<String>, concentration: Decimal) -> Self {
        Reading {
            pollutant: pollutant.into(),
            concentration,
        }
    }
}

/// Pollutant readings in the order the upstream source listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Readings {
    entries: Vec<Reading>,
}

impl Readings {
    /// Decode an OpenWeather `components` object (`{"co": 201.94, ...}`).
    ///
    /// Key order is kept. Anything that is not an object of numbers is
    /// rejected rather than coerced.
    pub fn from_components(components: &serde_json::Value) -> Result<Readings, ClimaError> {
        let object = components.as_object().ok_or_else(|| {
            ClimaError::InvalidInput(format!(
                "air quality components must be a JSON object, got {}",
                json_kind(components)
            ))
        })?;

        let mut entries = Vec::with_capacity(object.len());
        for (pollutant, value) in object {
            let serde_json::Value::Number(number) = value else {
                return Err(ClimaError::InvalidInput(format!(
                    "concentration for '{}' must be a number, got {}",
                    pollutant,
                    json_kind(value)
                )));
            };
            let concentration = parse_decimal(number).map_err(|reason| {
                ClimaError::InvalidInput(format!(
                    "concentration for '{}' is out of range: {}",
                    pollutant, reason
                ))
            })?;
            entries.push(Reading::new(pollutant.clone(), concentration));
        }

        Ok(Readings { entries })
    }

    pub fn get(&self, pollutant: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|r| r.pollutant == pollutant)
            .map(|r| r.concentration)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Reading> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Reading> for Readings {
    fn from_iter<I: IntoIterator<Item = Reading>>(iter: I) -> Self {
        Readings {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Readings {
    type Item = &'a Reading;
    type IntoIter = std::slice::Iter<'a, Reading>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Convert a JSON number exactly from its text form when `Decimal` can hold
/// it, otherwise round to 28 decimal places.
fn parse_decimal(number: &serde_json::Number) -> Result<Decimal, String> {
    let s = number.to_string();
    if let Ok(d) = Decimal::from_str(&s).or_else(|_| Decimal::from_scientific(&s)) {
        return Ok(d);
    }

    let f = number
        .as_f64()
        .ok_or_else(|| format!("'{}' is not representable", s))?;
    if f.abs() < MIN_DECIMAL_RESOLUTION {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_f64_retain(f)
        .map(|d| d.round_dp(Decimal::MAX_SCALE))
        .ok_or_else(|| format!("'{}' exceeds the decimal range", s))
}

// Smallest magnitude that survives rounding to 28 decimal places.
const MIN_DECIMAL_RESOLUTION: f64 = 0.5e-28;

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lon)
    }
}

/// Current conditions for a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// City name as reported by the API.
    pub name: String,
    pub coord: Coord,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub pressure_hpa: f64,
    pub wind_speed_ms: f64,
    /// Description in the configured display language (e.g., "nublado").
    pub description: String,
}

/// Latest air-pollution sample for a coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirPollution {
    /// OpenWeather air quality index, 1 (good) to 5 (very poor).
    pub aqi: u8,
    pub readings: Readings,
}

/// One 3-hour step of the 5-day forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub time: NaiveDateTime,
    pub temperature_c: f64,
    pub description: String,
}

/// A government weather alert for a coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherAlert {
    pub sender: Option<String>,
    pub event: String,
    pub description: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}
