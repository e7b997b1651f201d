//! Weighted causal smoothing example.
//!
//! Run with: cargo run --example smoothing_demo

use chrono::{Duration, TimeZone, Utc};
use climate_signals::core::GriddedSeries;
use climate_signals::signals::bait_smoothing_weights;
use climate_signals::transform::smooth;

fn main() {
    println!("=== Weighted Causal Smoothing Example ===\n");

    // Sample temperature series with a sharp cold snap
    let values: Vec<f64> = vec![
        12.0, 13.5, 14.0, 12.5, 11.0, 4.0, 2.5, 3.0, 5.5, 8.0, 10.0, 11.5, 12.0, 12.5, 13.0,
        12.0, 11.0, 11.5, 12.5, 13.0,
    ];
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let steps: Vec<_> = (0..values.len())
        .map(|i| base + Duration::hours(6 * i as i64))
        .collect();
    let series = GriddedSeries::single_cell(steps, values.clone()).unwrap();

    println!("Original series ({} observations):", series.len());
    println!("{:?}\n", values);

    // 1. Short uniform window, both edge policies
    println!("--- Uniform window of 4 ---");
    let weights = [1.0, 1.0, 1.0, 1.0];
    let trailing = smooth(&series, &weights, false).unwrap();
    let renormed = smooth(&series, &weights, true).unwrap();

    println!(
        "\n{:>5} {:>8} {:>12} {:>14}",
        "Step", "Value", "Smoothed", "Keep-all-days"
    );
    println!("{:-<42}", "");
    for i in 0..series.len() {
        println!(
            "{:>5} {:>8.1} {:>12} {:>14}",
            i,
            values[i],
            fmt(trailing.primary_values()[i]),
            fmt(renormed.primary_values()[i]),
        );
    }
    println!("\nThe keep-all-days policy renormalizes the truncated start-of-series");
    println!("windows instead of marking them undefined.");

    // 2. The tiered decay window used by the BAIT index
    println!("\n--- Tiered decay window (smoothing = 0.5) ---");
    let weights = bait_smoothing_weights(0.5);
    println!("Weights, most recent first: {:?}", weights);

    let smoothed = smooth(&series, &weights, false).unwrap();
    println!(
        "\n{:>5} {:>8} {:>12}",
        "Step", "Value", "Smoothed"
    );
    println!("{:-<27}", "");
    for i in 0..series.len() {
        println!(
            "{:>5} {:>8.1} {:>12}",
            i,
            values[i],
            fmt(smoothed.primary_values()[i]),
        );
    }
    println!("\nEleven steps of warm-up: the twelve-step window has no defined value");
    println!("until it can be filled, and the cold snap lingers in the average for");
    println!("two days after it ends.");
}

fn fmt(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else {
        format!("{:.2}", v)
    }
}
