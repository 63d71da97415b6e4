use crate::air::levels::{PollutantLevel, RecommendedLevels};
use crate::air::outcome::{AirQualityReport, ComponentRow, Warning};
use crate::model::{AirPollution, Readings, Unit};
use rust_decimal::Decimal;

/// µg/m³ per ppm, as applied to carbon monoxide readings.
const MICROGRAMS_PER_PPM: Decimal = Decimal::ONE_THOUSAND;

/// Compare readings against the recommended levels.
///
/// Returns one warning per pollutant whose value, converted to the unit of
/// its level, is strictly above the threshold. Pollutants without a level
/// are skipped. Warnings follow the order of `readings`.
pub fn evaluate(readings: &Readings, levels: &RecommendedLevels) -> Vec<Warning> {
    readings
        .iter()
        .filter_map(|reading| {
            let level = levels.get(&reading.pollutant)?;
            let value = to_level_unit(reading.concentration, level.unit);
            (value > level.threshold).then(|| make_warning(&reading.pollutant, value, level))
        })
        .collect()
}

/// The full reading set as chart rows, raw values in input order.
pub fn chart_rows(readings: &Readings) -> Vec<ComponentRow> {
    readings
        .iter()
        .map(|r| ComponentRow {
            component: r.pollutant.clone(),
            concentration: r.concentration,
        })
        .collect()
}

/// Evaluate an air-pollution sample into a report.
pub fn assess(pollution: &AirPollution, levels: &RecommendedLevels) -> AirQualityReport {
    AirQualityReport {
        aqi: Some(pollution.aqi),
        warnings: evaluate(&pollution.readings, levels),
        components: chart_rows(&pollution.readings),
    }
}

/// Convert an upstream µg/m³ concentration to `unit`.
fn to_level_unit(concentration: Decimal, unit: Unit) -> Decimal {
    match unit {
        Unit::MicrogramsPerCubicMetre => concentration,
        Unit::PartsPerMillion => (concentration / MICROGRAMS_PER_PPM).normalize(),
    }
}

fn make_warning(pollutant: &str, value: Decimal, level: &PollutantLevel) -> Warning {
    let message = format!(
        "{} level is above the recommended limit: {} {} (recommended: {} {})",
        pollutant.to_uppercase(),
        value,
        level.unit,
        level.threshold,
        level.unit
    );
    Warning {
        pollutant: pollutant.to_string(),
        value,
        threshold: level.threshold,
        unit: level.unit,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Reading;
    use rust_decimal_macros::dec;

    fn levels() -> RecommendedLevels {
        RecommendedLevels::standard().unwrap()
    }

    fn readings(pairs: &[(&str, Decimal)]) -> Readings {
        pairs.iter().map(|(p, v)| Reading::new(*p, *v)).collect()
    }

    #[test]
    fn test_all_below_thresholds() {
        let input = readings(&[
            ("co", dec!(201.94)),
            ("no2", dec!(0.77)),
            ("o3", dec!(68.66)),
            ("so2", dec!(0.64)),
            ("pm2_5", dec!(0.5)),
            ("pm10", dec!(0.54)),
        ]);
        assert!(evaluate(&input, &levels()).is_empty());
    }

    #[test]
    fn test_co_converted_to_ppm_and_flagged() {
        let warnings = evaluate(&readings(&[("co", dec!(500000))]), &levels());
        assert_eq!(warnings.len(), 1);
        let w = &warnings[0];
        assert_eq!(w.pollutant, "co");
        assert_eq!(w.value, dec!(500.0));
        assert_eq!(w.threshold, dec!(450));
        assert_eq!(w.unit, Unit::PartsPerMillion);
        assert_eq!(
            w.message,
            "CO level is above the recommended limit: 500 ppm (recommended: 450 ppm)"
        );
    }

    #[test]
    fn test_co_below_threshold_after_conversion() {
        assert!(evaluate(&readings(&[("co", dec!(400000))]), &levels()).is_empty());
    }

    #[test]
    fn test_co_exactly_at_threshold_not_flagged() {
        assert!(evaluate(&readings(&[("co", dec!(450000))]), &levels()).is_empty());
    }

    #[test]
    fn test_pm2_5_compared_without_conversion() {
        let warnings = evaluate(&readings(&[("pm2_5", dec!(30))]), &levels());
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].value, dec!(30));
        assert_eq!(warnings[0].threshold, dec!(25));
        assert_eq!(warnings[0].unit, Unit::MicrogramsPerCubicMetre);
        assert!(warnings[0].message.contains("30 µg/m³"));
    }

    #[test]
    fn test_equal_to_threshold_not_flagged() {
        assert!(evaluate(&readings(&[("pm10", dec!(50))]), &levels()).is_empty());
    }

    #[test]
    fn test_unknown_pollutant_never_flagged() {
        let input = readings(&[("nh3", dec!(1000)), ("no", dec!(99999))]);
        assert!(evaluate(&input, &levels()).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(evaluate(&Readings::default(), &levels()).is_empty());
    }

    #[test]
    fn test_warning_order_follows_input() {
        let input = readings(&[
            ("so2", dec!(21)),
            ("nh3", dec!(500)),
            ("co", dec!(451000.5)),
            ("pm10", dec!(10)),
            ("pm2_5", dec!(26)),
        ]);
        let warnings = evaluate(&input, &levels());
        let codes: Vec<&str> = warnings.iter().map(|w| w.pollutant.as_str()).collect();
        assert_eq!(codes, vec!["so2", "co", "pm2_5"]);
        assert_eq!(warnings[1].value, dec!(451.0005));
    }

    #[test]
    fn test_each_exceedance_reported_once() {
        let input = readings(&[
            ("pm2_5", dec!(40)),
            ("pm10", dec!(60)),
            ("no2", dec!(41)),
            ("so2", dec!(25)),
            ("o3", dec!(150)),
            ("co", dec!(900000)),
        ]);
        let warnings = evaluate(&input, &levels());
        assert_eq!(warnings.len(), 6);
        for code in ["pm2_5", "pm10", "no2", "so2", "o3", "co"] {
            assert_eq!(warnings.iter().filter(|w| w.pollutant == code).count(), 1);
        }
    }

    #[test]
    fn test_chart_rows_keep_raw_values() {
        let input = readings(&[("co", dec!(500000)), ("nh3", dec!(2))]);
        let rows = chart_rows(&input);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].component, "co");
        assert_eq!(rows[0].concentration, dec!(500000));
        assert_eq!(rows[1].component, "nh3");
    }

    #[test]
    fn test_assess_carries_aqi() {
        let pollution = AirPollution {
            aqi: 4,
            readings: readings(&[("o3", dec!(180))]),
        };
        let report = assess(&pollution, &levels());
        assert_eq!(report.aqi, Some(4));
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.components.len(), 1);
    }
}
