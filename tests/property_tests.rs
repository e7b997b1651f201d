//! Property-based tests for the derived-signal operations.
//!
//! These verify invariants that should hold for all valid inputs, using
//! randomly generated series data.

use chrono::{DateTime, Duration, TimeZone, Utc};
use climate_signals::constants::AIR_DENSITY;
use climate_signals::core::GriddedSeries;
use climate_signals::signals::{cdd, hdd, wind_power_density, WindPowerParams};
use climate_signals::transform::smooth;
use proptest::prelude::*;

fn make_series(values: &[f64]) -> GriddedSeries {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let steps: Vec<DateTime<Utc>> = (0..values.len())
        .map(|i| base + Duration::hours(i as i64))
        .collect();
    GriddedSeries::single_cell(steps, values.to_vec()).unwrap()
}

/// Strategy for finite series values in a physically plausible range.
fn values_strategy(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-50.0..50.0_f64, min_len..max_len)
}

/// Strategy for positive weight vectors.
fn weights_strategy(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.1..5.0_f64, 1..max_len)
}

proptest! {
    #[test]
    fn degree_days_are_non_negative_and_complementary(
        values in values_strategy(1, 60),
        threshold in -20.0..30.0_f64,
    ) {
        let temperature = make_series(&values);
        let heating = hdd(&temperature, threshold);
        let cooling = cdd(&temperature, threshold);

        for i in 0..values.len() {
            let h = heating.primary_values()[i];
            let c = cooling.primary_values()[i];

            prop_assert!(h >= 0.0);
            prop_assert!(c >= 0.0);
            prop_assert!((h - c - (threshold - values[i])).abs() < 1e-9);
        }
    }

    #[test]
    fn single_weight_smoothing_is_the_identity(
        values in values_strategy(1, 60),
        weight in 0.1..10.0_f64,
    ) {
        let series = make_series(&values);
        let smoothed = smooth(&series, &[weight], false).unwrap();

        for (smoothed_v, original_v) in smoothed.primary_values().iter().zip(&values) {
            prop_assert!((smoothed_v - original_v).abs() < 1e-9);
        }
    }

    #[test]
    fn smoothing_preserves_constant_series_when_keeping_all_days(
        level in -30.0..40.0_f64,
        n in 1usize..50,
        weights in weights_strategy(13),
    ) {
        // truncated-window renormalization means no warm-up distortion
        let series = make_series(&vec![level; n]);
        let smoothed = smooth(&series, &weights, true).unwrap();

        for &v in smoothed.primary_values() {
            prop_assert!((v - level).abs() < 1e-9);
        }
    }

    #[test]
    fn smoothing_warm_up_region_is_exactly_the_window_minus_one(
        values in values_strategy(1, 60),
        weights in weights_strategy(13),
    ) {
        let series = make_series(&values);
        let smoothed = smooth(&series, &weights, false).unwrap();
        let out = smoothed.primary_values();

        prop_assert_eq!(out.len(), values.len());
        for (t, &v) in out.iter().enumerate() {
            prop_assert_eq!(v.is_nan(), t + 1 < weights.len());
        }
    }

    #[test]
    fn smoothed_values_stay_within_the_input_range(
        values in values_strategy(12, 60),
        weights in weights_strategy(13),
    ) {
        // a normalized weighted average cannot escape the observed bounds
        let series = make_series(&values);
        let smoothed = smooth(&series, &weights, false).unwrap();

        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        for &v in smoothed.primary_values().iter().filter(|v| !v.is_nan()) {
            prop_assert!(v >= min - 1e-9);
            prop_assert!(v <= max + 1e-9);
        }
    }

    #[test]
    fn wind_power_density_is_bounded_by_the_rated_plateau(
        values in prop::collection::vec(0.0..40.0_f64, 1..60),
    ) {
        let wind = make_series(&values);
        let params = WindPowerParams::default();
        let density = wind_power_density(&wind, &params);

        let plateau = 0.5 * AIR_DENSITY * params.cap_speed.powi(3);
        for &v in density.primary_values() {
            prop_assert!(v >= 0.0);
            prop_assert!(v <= plateau + 1e-9);
        }
    }

    #[test]
    fn smoothing_does_not_mutate_its_input(
        values in values_strategy(1, 40),
        weights in weights_strategy(13),
    ) {
        let series = make_series(&values);
        let _ = smooth(&series, &weights, false).unwrap();

        prop_assert_eq!(series.primary_values(), values.as_slice());
    }
}
