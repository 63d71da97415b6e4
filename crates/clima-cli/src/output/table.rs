use chrono::{DateTime, Local, Utc};
use clima_core::air::{AirQualityReport, ComponentRow};
use clima_core::dashboard::Dashboard;
use clima_core::forecast::ForecastRow;
use clima_core::location::Location;
use rust_decimal::prelude::ToPrimitive;

const BAR_WIDTH: usize = 40;

pub fn print_dashboard(dash: &Dashboard) {
    println!("=== Health and weather dashboard ===\n");
    println!("Current conditions for {}\n", dash.location);

    let current = &dash.current;
    println!("  Temperature:   {} °C", current.temperature_c);
    println!("  Humidity:      {}%", current.humidity_pct);
    println!("  Pressure:      {} hPa", current.pressure_hpa);
    println!("  Wind speed:    {} m/s", current.wind_speed_ms);
    println!(
        "  Description:   {}",
        clima_core::forecast::capitalize(&current.description)
    );
    match dash.uv_index {
        Some(uv) => println!("  UV index:      {}", uv),
        None => println!("  UV index:      N/A"),
    }
    match dash.air_quality.as_ref().and_then(|a| a.aqi) {
        Some(aqi) => println!("  Air quality:   {} ({})", aqi, aqi_label(aqi)),
        None => println!("  Air quality:   N/A"),
    }
    println!();

    if dash.uv_extreme() {
        println!("  ! UV index is extremely high. Protect yourself from the sun.\n");
    }

    if let Some(ref air) = dash.air_quality {
        print_air_quality(air);
    }

    println!(
        "=== Forecast for {} ===\n",
        dash.forecast_date.format("%Y-%m-%d")
    );
    match dash.forecast {
        None => println!("  Could not fetch the weather forecast.\n"),
        Some(ref rows) if rows.is_empty() => {
            println!("  No forecast found for the selected date.\n")
        }
        Some(ref rows) => {
            for row in rows {
                println!(
                    "  {}  {:>6.1} °C  {}",
                    row.time.format("%Y-%m-%d %H:%M"),
                    row.temperature_c,
                    row.description
                );
            }
            println!();
        }
    }

    println!("=== Weather alerts ===\n");
    if dash.alerts.is_empty() {
        println!("  No weather alerts at the moment.\n");
    } else {
        for alert in &dash.alerts {
            match alert.sender {
                Some(ref sender) => println!("  {} ({})", alert.event, sender),
                None => println!("  {}", alert.event),
            }
            println!("    {}", alert.description);
            println!("    Start: {}", local_time(alert.start));
            println!("    End:   {}", local_time(alert.end));
            println!();
        }
    }

    if let Some(scene) = dash.scene {
        println!("Enjoy the weather: {} [{}]", scene, scene.image());
    }
}

pub fn print_air_quality(report: &AirQualityReport) {
    println!("=== Air quality components ===\n");

    if let Some(aqi) = report.aqi {
        println!("  Index: {} ({})\n", aqi, aqi_label(aqi));
    }

    if report.warnings.is_empty() {
        println!("  All pollutants within recommended levels.\n");
    } else {
        for w in &report.warnings {
            println!("  ! {}", w);
        }
        println!();
    }

    print_component_chart(&report.components);
}

fn print_component_chart(rows: &[ComponentRow]) {
    if rows.is_empty() {
        return;
    }

    let max_name = rows.iter().map(|r| r.component.len()).max().unwrap_or(6);
    let max_value = rows
        .iter()
        .filter_map(|r| r.concentration.to_f64())
        .fold(0.0_f64, f64::max);

    for row in rows {
        let value = row.concentration.to_f64().unwrap_or(0.0);
        println!(
            "  {:<width$}  {:<chart$}  {} µg/m³",
            row.component,
            bar(value, 0.0, max_value),
            row.concentration,
            width = max_name,
            chart = BAR_WIDTH
        );
    }
    println!();
}

pub fn print_trend(location: &Location, rows: &[ForecastRow]) {
    println!("=== Forecast trend for {} ===\n", location);

    if rows.is_empty() {
        println!("  No forecast data.");
        return;
    }

    let min = rows
        .iter()
        .map(|r| r.temperature_c)
        .fold(f64::INFINITY, f64::min);
    let max = rows
        .iter()
        .map(|r| r.temperature_c)
        .fold(f64::NEG_INFINITY, f64::max);

    for row in rows {
        println!(
            "  {}  {:>6.1} °C  {:<chart$}  {}",
            row.time.format("%d-%m-%Y %H:%M"),
            row.temperature_c,
            bar(row.temperature_c, min, max),
            row.description,
            chart = BAR_WIDTH
        );
    }
    println!();
    println!("  min {:.1} °C, max {:.1} °C", min, max);
}

/// Horizontal bar for `value` scaled between `min` and `max`. A zero span
/// gives an empty bar.
fn bar(value: f64, min: f64, max: f64) -> String {
    let span = max - min;
    if span <= 0.0 || !span.is_finite() {
        return String::new();
    }
    let filled = (((value - min) / span).clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(filled)
}

fn local_time(t: DateTime<Utc>) -> String {
    t.with_timezone(&Local).format("%d-%m-%Y %H:%M").to_string()
}

fn aqi_label(aqi: u8) -> &'static str {
    match aqi {
        1 => "good",
        2 => "fair",
        3 => "moderate",
        4 => "poor",
        5 => "very poor",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_all_zero_readings_empty() {
        assert_eq!(bar(0.0, 0.0, 0.0), "");
    }

    #[test]
    fn test_bar_zero_reading_empty() {
        assert_eq!(bar(0.0, 0.0, 80.0), "");
    }

    #[test]
    fn test_bar_scales_to_max() {
        assert_eq!(bar(80.0, 0.0, 80.0).len(), BAR_WIDTH);
        assert_eq!(bar(40.0, 0.0, 80.0).len(), BAR_WIDTH / 2);
    }

    #[test]
    fn test_bar_flat_trend_empty() {
        assert_eq!(bar(21.5, 21.5, 21.5), "");
    }
}
