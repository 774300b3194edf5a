//! Basic example demonstrating download series correction
//!
//! Run with: cargo run --example basic -p correction

use correction::prelude::*;

fn main() -> Result<()> {
    println!("=== correction Basic Examples ===\n");

    // Weekly vite downloads with the August 2025 CI spike
    let series = vec![
        EvolutionPoint::weekly("2025-07-28", 33_000_000.0),
        EvolutionPoint::weekly("2025-08-04", 33_913_132.0),
        EvolutionPoint::weekly("2025-08-11", 91_000_000.0),
        EvolutionPoint::weekly("2025-08-18", 97_000_000.0),
        EvolutionPoint::weekly("2025-08-25", 94_000_000.0),
        EvolutionPoint::weekly("2025-09-01", 90_000_000.0),
        EvolutionPoint::weekly("2025-09-08", 38_665_727.0),
        EvolutionPoint::weekly("2025-09-15", 39_000_000.0),
    ];
    print_series("Raw", &series);

    // 1. Known-anomaly correction
    let table = AnomalyTable::builtin();
    let corrected = apply_blocklist_correction(&table, &series, "vite", Granularity::Weekly);
    print_series("1. Anomaly corrected", &corrected);

    // 2. Smoothing pipeline
    let settings = FilterSettings::new(1, 2.0);
    settings.validate()?;
    let smoothed = apply_data_correction(&corrected, &settings);
    print_series("2. Smoothed (averageWindow=1, smoothingTau=2)", &smoothed);

    println!("\n=== Examples Complete ===");
    Ok(())
}

fn print_series(title: &str, series: &[EvolutionPoint]) {
    println!("{title}");
    for point in series {
        println!("   {}  {:>14.1}", point.period.label(), point.value);
    }
    println!();
}
