use crate::model::Unit;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A pollutant whose concentration is above its recommended level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    /// Pollutant code (e.g., "pm2_5").
    pub pollutant: String,
    /// Observed value in `unit`, after any conversion.
    pub value: Decimal,
    /// The recommended level that was exceeded, in `unit`.
    pub threshold: Decimal,
    pub unit: Unit,
    /// Human-readable warning text.
    pub message: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// One bar of the air-quality components chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRow {
    pub component: String,
    /// Raw concentration in µg/m³, unconverted.
    pub concentration: Decimal,
}

/// Evaluated air quality for one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirQualityReport {
    /// OpenWeather air quality index (1-5), when the source provided one.
    pub aqi: Option<u8>,
    pub warnings: Vec<Warning>,
    pub components: Vec<ComponentRow>,
}
