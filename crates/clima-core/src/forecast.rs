use crate::model::ForecastEntry;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A forecast step prepared for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRow {
    pub time: NaiveDateTime,
    pub temperature_c: f64,
    /// Description with its first letter capitalized.
    pub description: String,
}

impl From<&ForecastEntry> for ForecastRow {
    fn from(entry: &ForecastEntry) -> Self {
        ForecastRow {
            time: entry.time,
            temperature_c: entry.temperature_c,
            description: capitalize(&entry.description),
        }
    }
}

/// Forecast steps falling on `date`. Empty if the date is outside the
/// forecast window.
pub fn for_date(entries: &[ForecastEntry], date: NaiveDate) -> Vec<ForecastRow> {
    entries
        .iter()
        .filter(|e| e.time.date() == date)
        .map(ForecastRow::from)
        .collect()
}

/// All forecast steps in order, for the temperature trend chart.
pub fn trend(entries: &[ForecastEntry]) -> Vec<ForecastRow> {
    entries.iter().map(ForecastRow::from).collect()
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
