use clima_core::air::RecommendedLevels;
use clima_core::error::ClimaError;
use clima_core::model::Unit;

pub fn list() -> Result<(), ClimaError> {
    let rs = RecommendedLevels::standard()?;

    println!("{} (version {})\n", rs.name, rs.version);
    if let Some(ref desc) = rs.description {
        println!("{}\n", desc);
    }

    let max_name_len = rs
        .levels
        .iter()
        .map(|l| l.pollutant.len())
        .max()
        .unwrap_or(10);

    println!(
        "  {:<width$}  {:>10}  Unit",
        "Pollutant",
        "Threshold",
        width = max_name_len + 2
    );
    println!("  {}", "-".repeat(max_name_len + 2 + 12 + 8));

    for level in &rs.levels {
        println!(
            "  {:<width$}  {:>10}  {}",
            level.pollutant,
            level.threshold,
            level.unit,
            width = max_name_len + 2
        );
    }

    println!();
    if rs.levels.iter().any(|l| l.unit == Unit::PartsPerMillion) {
        println!("Readings arrive in µg/m³. For ppm levels the reading is divided by");
        println!("1000 before comparison. A warning is raised only when the value is");
        println!("strictly above the level.\n");
    }

    Ok(())
}
