//! Performance benchmarks for the correction crate

use std::time::Instant;

use correction::prelude::*;

fn generate_series(n: usize) -> Vec<EvolutionPoint> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            let value = 1_000_000.0 + t * 500.0 + 50_000.0 * (t * 0.1).sin();
            let day = format!("{:04}-{:02}-{:02}", 2000 + i / 336, i / 28 % 12 + 1, i % 28 + 1);
            EvolutionPoint::daily(&day, value)
        })
        .collect()
}

fn bench<F>(name: &str, iterations: u32, mut f: F)
where
    F: FnMut(),
{
    // Warmup
    for _ in 0..3 {
        f();
    }

    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    let elapsed = start.elapsed();
    println!(
        "{:<40} {:>10.3} us/iter",
        name,
        elapsed.as_secs_f64() * 1e6 / f64::from(iterations)
    );
}

fn main() {
    println!("=== correction Performance Benchmarks ===\n");

    for n in [365, 3_650] {
        let series = generate_series(n);
        let table = AnomalyTable::builtin();

        bench(&format!("moving_average (n={n}, h=3)"), 200, || {
            std::hint::black_box(moving_average(&series, 3));
        });
        bench(&format!("moving_average (n={n}, h=30)"), 50, || {
            std::hint::black_box(moving_average(&series, 30));
        });
        bench(&format!("smoothing (n={n}, tau=4)"), 200, || {
            std::hint::black_box(smoothing(&series, 4.0));
        });
        bench(&format!("apply_data_correction (n={n})"), 200, || {
            std::hint::black_box(apply_data_correction(&series, &FilterSettings::new(3, 4.0)));
        });
        bench(&format!("apply_blocklist_correction (n={n})"), 200, || {
            std::hint::black_box(apply_blocklist_correction(
                &table,
                &series,
                "vite",
                Granularity::Daily,
            ));
        });
        println!();
    }
}
