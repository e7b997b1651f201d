//! Heating and cooling degree days.

use crate::core::GriddedSeries;

/// Heating degree days: `max(threshold - T, 0)` elementwise.
///
/// NaN temperatures stay NaN.
pub fn hdd(temperature: &GriddedSeries, threshold: f64) -> GriddedSeries {
    temperature.map(move |t| {
        if t.is_nan() {
            f64::NAN
        } else {
            (threshold - t).max(0.0)
        }
    })
}

/// Cooling degree days: `max(T - threshold, 0)` elementwise.
///
/// NaN temperatures stay NaN.
pub fn cdd(temperature: &GriddedSeries, threshold: f64) -> GriddedSeries {
    temperature.map(move |t| {
        if t.is_nan() {
            f64::NAN
        } else {
            (t - threshold).max(0.0)
        }
    })
}
