//! Weighted causal smoothing along the time-step axis.

use crate::core::GriddedSeries;
use crate::error::{Result, SignalError};

/// Smooth a gridded series with a causal weighted rolling window.
///
/// Weights are given most-recent-first: `weights[0]` applies to the current
/// step, `weights[1]` to the previous step, and so on. Each cell is smoothed
/// independently along the time axis; auxiliary dimensions carry through
/// unchanged.
///
/// With `keep_all_days = false`, each output step is the weighted sum over
/// its window divided by the total weight sum. Steps with fewer than
/// `weights.len() - 1` predecessors are NaN (the window cannot be filled),
/// and a NaN input value makes the outputs of every window containing it
/// NaN.
///
/// With `keep_all_days = true`, the input must contain no missing values
/// (InvalidInput otherwise). Window positions before the first step count as
/// zero, and each of the early truncated steps is divided by the sum of only
/// the weights its window actually saw, so the start of the series is not
/// systematically under-weighted.
///
/// # Example
/// ```
/// use climate_signals::core::GriddedSeries;
/// use climate_signals::transform::smooth;
/// use chrono::{Duration, TimeZone, Utc};
///
/// let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let steps: Vec<_> = (0..5).map(|i| base + Duration::hours(i)).collect();
/// let series = GriddedSeries::single_cell(steps, vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
///
/// let smoothed = smooth(&series, &[1.0, 1.0, 1.0, 1.0], false).unwrap();
/// assert!(smoothed.primary_values()[2].is_nan());
/// assert_eq!(smoothed.primary_values()[3], 2.5);
/// ```
pub fn smooth(
    series: &GriddedSeries,
    weights: &[f64],
    keep_all_days: bool,
) -> Result<GriddedSeries> {
    if weights.is_empty() {
        return Err(SignalError::InvalidInput(
            "weight vector must not be empty".to_string(),
        ));
    }
    if keep_all_days && series.has_missing_values() {
        return Err(SignalError::InvalidInput(
            "input contains missing values with keep_all_days".to_string(),
        ));
    }

    let total_weight: f64 = weights.iter().sum();
    Ok(series.map_cells(|cell| smooth_slice(cell, weights, keep_all_days, total_weight)))
}

/// Smooth one cell slice. Weights are most-recent-first.
fn smooth_slice(values: &[f64], weights: &[f64], keep_all_days: bool, total_weight: f64) -> Vec<f64> {
    let window = weights.len();
    let mut out = Vec::with_capacity(values.len());

    for t in 0..values.len() {
        let available = (t + 1).min(window);

        if !keep_all_days && available < window {
            out.push(f64::NAN);
            continue;
        }

        let mut acc = 0.0;
        for k in 0..available {
            acc += weights[k] * values[t - k];
        }

        // Truncated windows renormalize by the weights they actually saw.
        let divisor = if available < window {
            weights[..available].iter().sum()
        } else {
            total_weight
        };
        out.push(acc / divisor);
    }

    out
}
