//! Quickstart example demonstrating basic usage of climate-signals.
//!
//! Run with: cargo run --example quickstart

use chrono::{Duration, TimeZone, Utc};
use climate_signals::core::{GriddedSeries, WeatherBundle};
use climate_signals::signals::{bait, cdd, hdd, wind_power_density, BaitParams, WindPowerParams};

fn main() {
    println!("=== climate-signals Quickstart ===\n");

    // 1. Create a synthetic week of 6-hourly weather data
    let n = 28;
    let steps: Vec<_> = (0..n)
        .map(|i| Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::hours(6 * i))
        .collect();

    let phase = |i: usize| 2.0 * std::f64::consts::PI * i as f64 / 4.0;

    // Diurnal temperature cycle around a mild winter day
    let temperature: Vec<f64> = (0..n as usize).map(|i| 8.0 + 5.0 * phase(i).sin()).collect();
    // Daytime solar radiation, zero at night
    let radiation: Vec<f64> = (0..n as usize)
        .map(|i| (450.0 * phase(i).sin()).max(0.0))
        .collect();
    // Gusty near-surface wind
    let wind_2m: Vec<f64> = (0..n as usize)
        .map(|i| 3.0 + 1.5 * (phase(i) * 0.7).cos().abs())
        .collect();
    // Specific humidity, roughly saturated-cold-air levels [kg/kg]
    let humidity: Vec<f64> = vec![0.006; n as usize];

    let series = |values: Vec<f64>| GriddedSeries::single_cell(steps.clone(), values).unwrap();
    let weather = WeatherBundle::new(
        series(humidity),
        series(radiation),
        series(temperature.clone()),
        series(wind_2m),
    )
    .unwrap();

    println!("Created weather bundle with {} steps", weather.temperature().len());

    // 2. Compute the BAIT "feels like" building temperature
    println!("\n--- BAIT index ---");
    let params = BaitParams::new(0.50, 0.012, -0.20, 0.05);
    let index = bait(&weather, &params).unwrap();

    println!(
        "\n{:>5} {:>10} {:>10}",
        "Step", "T [degC]", "BAIT [degC]"
    );
    println!("{:-<28}", "");
    for (i, (&t, &b)) in temperature
        .iter()
        .zip(index.primary_values())
        .enumerate()
    {
        let b = if b.is_nan() {
            "warm-up".to_string()
        } else {
            format!("{:.2}", b)
        };
        println!("{:>5} {:>10.2} {:>10}", i, t, b);
    }

    // 3. Degree days against the BAIT index
    println!("\n--- Degree days (threshold 14 degC) ---");
    let heating = hdd(&index, 14.0);
    let cooling = cdd(&index, 14.0);

    let sum_finite = |s: &GriddedSeries| -> f64 {
        s.primary_values().iter().filter(|v| !v.is_nan()).sum()
    };
    println!("Total HDD: {:.2} degC-steps", sum_finite(&heating));
    println!("Total CDD: {:.2} degC-steps", sum_finite(&cooling));

    // 4. Wind power density at an 80 m hub from a 100 m wind field
    println!("\n--- Wind power density ---");
    let wind_100m: Vec<f64> = (0..n as usize)
        .map(|i| 7.0 + 4.0 * (phase(i) * 0.5).sin())
        .collect();
    let wind = series(wind_100m).with_name("w100").with_units("m s**-1");

    let density = wind_power_density(&wind, &WindPowerParams::default().with_hub_height(80.0));
    println!(
        "{}",
        density.metadata().get("description").unwrap()
    );
    println!(
        "Mean power density: {:.1} W/m^2",
        sum_finite(&density) / density.len() as f64
    );

    println!("\nDone.");
}
