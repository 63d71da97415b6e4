use crate::error::ClimaError;
use crate::model::Unit;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const RECOMMENDED_LEVELS_JSON: &str = include_str!("../../../../rules/recommended-levels.json");

/// Threshold table for air pollutants.
///
/// Built once (see [`RecommendedLevels::standard`]) and shared by reference;
/// nothing mutates it after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedLevels {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    pub levels: Vec<PollutantLevel>,
}

/// Recommended upper limit for a single pollutant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollutantLevel {
    /// Pollutant code as used by the API (e.g., "pm2_5").
    pub pollutant: String,
    /// Values strictly above this are flagged.
    pub threshold: Decimal,
    /// Unit the threshold is expressed in. Readings are converted to it
    /// before comparison.
    #[serde(default)]
    pub unit: Unit,
    #[serde(default)]
    pub note: Option<String>,
}

impl RecommendedLevels {
    /// The embedded table: pm2_5 25, pm10 50, no2 40, so2 20, o3 100 (µg/m³)
    /// and co 450 (ppm).
    pub fn standard() -> Result<RecommendedLevels, ClimaError> {
        parse_levels(RECOMMENDED_LEVELS_JSON)
    }

    pub fn get(&self, pollutant: &str) -> Option<&PollutantLevel> {
        self.levels.iter().find(|l| l.pollutant == pollutant)
    }
}

/// Parse and validate a levels table from JSON.
pub fn parse_levels(json: &str) -> Result<RecommendedLevels, ClimaError> {
    let levels: RecommendedLevels =
        serde_json::from_str(json).map_err(|e| ClimaError::LevelsInvalid(e.to_string()))?;
    validate_levels(&levels)?;
    Ok(levels)
}

pub fn validate_levels(levels: &RecommendedLevels) -> Result<(), ClimaError> {
    if levels.levels.is_empty() {
        return Err(ClimaError::LevelsInvalid("levels must not be empty".into()));
    }

    let mut seen = HashSet::new();
    for level in &levels.levels {
        if level.pollutant.is_empty() {
            return Err(ClimaError::LevelsInvalid(
                "pollutant code must not be empty".into(),
            ));
        }
        if !seen.insert(level.pollutant.as_str()) {
            return Err(ClimaError::LevelsInvalid(format!(
                "pollutant '{}' is listed more than once",
                level.pollutant
            )));
        }
        if level.threshold <= Decimal::ZERO {
            return Err(ClimaError::LevelsInvalid(format!(
                "pollutant '{}' has non-positive threshold {}",
                level.pollutant, level.threshold
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_standard_table() {
        let levels = RecommendedLevels::standard().unwrap();
        let pairs: Vec<(&str, Decimal, Unit)> = levels
            .levels
            .iter()
            .map(|l| (l.pollutant.as_str(), l.threshold, l.unit))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("pm2_5", dec!(25), Unit::MicrogramsPerCubicMetre),
                ("pm10", dec!(50), Unit::MicrogramsPerCubicMetre),
                ("no2", dec!(40), Unit::MicrogramsPerCubicMetre),
                ("so2", dec!(20), Unit::MicrogramsPerCubicMetre),
                ("o3", dec!(100), Unit::MicrogramsPerCubicMetre),
                ("co", dec!(450), Unit::PartsPerMillion),
            ]
        );
    }

    #[test]
    fn test_lookup_unknown_pollutant() {
        let levels = RecommendedLevels::standard().unwrap();
        assert!(levels.get("nh3").is_none());
        assert_eq!(levels.get("o3").map(|l| l.threshold), Some(dec!(100)));
    }

    #[test]
    fn test_duplicate_pollutant_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "levels": [
                { "pollutant": "o3", "threshold": "100" },
                { "pollutant": "o3", "threshold": "120" }
            ]
        }"#;
        assert!(matches!(
            parse_levels(json),
            Err(ClimaError::LevelsInvalid(ref m)) if m.contains("more than once")
        ));
    }

    #[test]
    fn test_empty_levels_rejected() {
        let json = r#"{ "name": "Bad", "version": "1.0", "levels": [] }"#;
        assert!(parse_levels(json).is_err());
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "levels": [ { "pollutant": "so2", "threshold": "0" } ]
        }"#;
        assert!(parse_levels(json).is_err());
    }

    #[test]
    fn test_unit_defaults_to_micrograms() {
        let json = r#"{
            "name": "Custom",
            "version": "1.0",
            "levels": [ { "pollutant": "so2", "threshold": "20" } ]
        }"#;
        let levels = parse_levels(json).unwrap();
        assert_eq!(levels.levels[0].unit, Unit::MicrogramsPerCubicMetre);
    }
}
