//! Building-Adjusted Internal Temperature (BAIT) index.
//!
//! A "feels like" temperature for buildings: the raw air temperature
//! corrected for solar gains, wind chill and humidity discomfort, smoothed
//! over the preceding steps, and blended back toward the raw reading at
//! temperature extremes.

use crate::constants::{BLEND_LOWER, BLEND_UPPER, MAX_RAW_VAR, SETPOINT_T, WEIGHT_TIER_LEN};
use crate::core::{GriddedSeries, WeatherBundle};
use crate::error::Result;
use crate::transform::smooth;

/// Parameters of one BAIT invocation. No state is carried between calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaitParams {
    /// Decay factor of the smoothing window tiers.
    pub smoothing: f64,
    /// Response to radiation above/below the solar setpoint.
    pub solar_gains: f64,
    /// Response to wind above/below the wind setpoint.
    pub wind_chill: f64,
    /// Amplification of discomfort with humidity above/below its setpoint.
    pub humidity_discomfort: f64,
}

impl BaitParams {
    pub fn new(smoothing: f64, solar_gains: f64, wind_chill: f64, humidity_discomfort: f64) -> Self {
        Self {
            smoothing,
            solar_gains,
            wind_chill,
            humidity_discomfort,
        }
    }
}

/// Solar radiation setpoint \[W/m^2\] at temperature `t`.
pub fn setpoint_solar(t: f64) -> f64 {
    100.0 + 7.0 * t
}

/// Wind speed setpoint \[m/s\] at temperature `t`.
pub fn setpoint_wind(t: f64) -> f64 {
    4.5 - 0.025 * t
}

/// Humidity setpoint \[kg water per kg air\] at temperature `t`.
pub fn setpoint_humidity(t: f64) -> f64 {
    (1.1 + 0.06 * t).exp() / 1000.0
}

/// Smoothing weights for the BAIT window, most-recent-first: one tier of
/// full weight, one of `smoothing`, one of `smoothing^2`.
pub fn bait_smoothing_weights(smoothing: f64) -> Vec<f64> {
    let mut weights = Vec::with_capacity(3 * WEIGHT_TIER_LEN);
    for tier in 0..3 {
        weights.extend(std::iter::repeat(smoothing.powi(tier)).take(WEIGHT_TIER_LEN));
    }
    weights
}

/// Fraction of the raw temperature blended into the index at temperature `t`.
///
/// A sigmoid mapping the blend bounds onto -5 and +5, scaled so the blend
/// never exceeds `MAX_RAW_VAR`. Keeps the index within a bounded deviation
/// of the raw reading in extreme heat and cold.
pub fn blend_fraction(t: f64) -> f64 {
    let avg_blend = (BLEND_LOWER + BLEND_UPPER) / 2.0;
    let dif_blend = BLEND_UPPER - BLEND_LOWER;
    let x = (t - avg_blend) * 10.0 / dif_blend;
    MAX_RAW_VAR / (1.0 + (-x).exp())
}

/// Compute the BAIT index from an aligned weather bundle.
///
/// The output shares the bundle's time axis and grid layout, in degC. The
/// first eleven steps are NaN: the smoothing window needs twelve steps of
/// history to fill.
///
/// Humidity enters the discomfort term in the units it is supplied in; the
/// fixed setpoint constants were validated against reference output with no
/// unit conversion applied.
///
/// # Example
/// ```
/// use climate_signals::core::{GriddedSeries, WeatherBundle};
/// use climate_signals::signals::{bait, BaitParams};
/// use chrono::{Duration, TimeZone, Utc};
///
/// let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let steps: Vec<_> = (0..16).map(|i| base + Duration::hours(6 * i)).collect();
/// let constant = |v: f64| GriddedSeries::single_cell(steps.clone(), vec![v; 16]).unwrap();
///
/// let bundle = WeatherBundle::new(
///     constant(0.010),  // humidity
///     constant(0.0),    // radiation
///     constant(20.0),   // temperature
///     constant(0.0),    // wind speed at 2 m
/// ).unwrap();
///
/// let index = bait(&bundle, &BaitParams::new(0.5, 0.0, 0.0, 0.0)).unwrap();
/// assert!(index.primary_values()[0].is_nan());
/// assert!((index.primary_values()[15] - 20.0).abs() < 1e-9);
/// ```
pub fn bait(weather: &WeatherBundle, params: &BaitParams) -> Result<GriddedSeries> {
    let temperature = weather.temperature();

    // Sunny feels warmer, windy feels colder.
    let solar_term = weather
        .radiation_global_horizontal()
        .zip_map(temperature, |r, t| (r - setpoint_solar(t)) * params.solar_gains)?;
    let wind_term = weather
        .wind_speed_2m()
        .zip_map(temperature, |w, t| (w - setpoint_wind(t)) * params.wind_chill)?;
    let ninja = temperature
        .zip_map(&solar_term, |t, s| t + s)?
        .zip_map(&wind_term, |n, w| n + w)?;

    // Humid conditions make both hot and cold feel more extreme.
    let humidity_excess = weather
        .humidity()
        .zip_map(temperature, |h, t| h - setpoint_humidity(t))?;
    let ninja = ninja.zip_map(&humidity_excess, |n, excess| {
        let discomfort = n - SETPOINT_T;
        SETPOINT_T + discomfort + discomfort * excess * params.humidity_discomfort
    })?;

    // Smooth over the preceding two days of steps.
    let ninja = smooth(&ninja, &bait_smoothing_weights(params.smoothing), false)?;

    // Degrade gracefully toward the raw reading at the extremes.
    let index = temperature.zip_map(&ninja, |t, n| {
        let blend = blend_fraction(t);
        t * blend + n * (1.0 - blend)
    })?;

    Ok(index
        .with_name("BAIT")
        .with_units("degC")
        .with_metadata("long_name", "Building-Adjusted Internal Temperature"))
}
