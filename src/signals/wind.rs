//! Wind power density from a gridded wind-speed field.

use crate::constants::{
    AIR_DENSITY, DEFAULT_CAP_SPEED, DEFAULT_CUT_IN_SPEED, DEFAULT_CUT_OUT_SPEED,
    DEFAULT_HELLMANN_ALPHA, REFERENCE_HEIGHT_M,
};
use crate::core::GriddedSeries;

/// Turbine and extrapolation parameters for wind power density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindPowerParams {
    /// Hub height to extrapolate to \[m\]; None keeps the reference height.
    pub hub_height: Option<f64>,
    /// Hellmann exponent of the power-law height profile.
    pub alpha: f64,
    /// Rated speed above which output plateaus \[m/s\].
    pub cap_speed: f64,
    /// Speed below which the turbine is inactive \[m/s\].
    pub cut_in_speed: f64,
    /// Speed above which the turbine shuts down \[m/s\].
    pub cut_out_speed: f64,
}

impl Default for WindPowerParams {
    fn default() -> Self {
        Self {
            hub_height: None,
            alpha: DEFAULT_HELLMANN_ALPHA,
            cap_speed: DEFAULT_CAP_SPEED,
            cut_in_speed: DEFAULT_CUT_IN_SPEED,
            cut_out_speed: DEFAULT_CUT_OUT_SPEED,
        }
    }
}

impl WindPowerParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extrapolate to a hub height before applying the power curve.
    pub fn with_hub_height(mut self, hub_height: f64) -> Self {
        self.hub_height = Some(hub_height);
        self
    }
}

/// Estimate wind power density \[W/m^2\] from wind speed at the 100 m
/// reference height.
///
/// Speeds are extrapolated to the hub height via the power law when one is
/// given, zeroed outside the turbine's cut-in/cut-out range, capped at the
/// rated speed, and cubed into a power density. NaN wind speeds stay NaN.
///
/// # Example
/// ```
/// use climate_signals::core::GriddedSeries;
/// use climate_signals::signals::{wind_power_density, WindPowerParams};
/// use chrono::{Duration, TimeZone, Utc};
///
/// let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let steps: Vec<_> = (0..3).map(|i| base + Duration::hours(i)).collect();
/// let wind = GriddedSeries::single_cell(steps, vec![2.0, 12.0, 26.0]).unwrap();
///
/// let density = wind_power_density(&wind, &WindPowerParams::default());
/// assert_eq!(density.primary_values()[0], 0.0); // below cut-in
/// assert!((density.primary_values()[1] - 815.2375).abs() < 1e-9); // capped at 11 m/s
/// assert_eq!(density.primary_values()[2], 0.0); // beyond cut-out
/// ```
pub fn wind_power_density(wind: &GriddedSeries, params: &WindPowerParams) -> GriddedSeries {
    let height_factor = match params.hub_height {
        Some(h) if h != REFERENCE_HEIGHT_M => (h / REFERENCE_HEIGHT_M).powf(params.alpha),
        _ => 1.0,
    };

    let density = wind.map(|v| {
        let v = v * height_factor;
        let v = if v > params.cut_out_speed || v < params.cut_in_speed {
            0.0
        } else if v > params.cap_speed {
            params.cap_speed
        } else {
            v
        };
        0.5 * AIR_DENSITY * v.powi(3)
    });

    let description = match params.hub_height {
        Some(h) => format!(
            "wind power density at {} m derived from the {} m wind field via the power law",
            h, REFERENCE_HEIGHT_M
        ),
        None => format!(
            "wind power density at the {} m reference height",
            REFERENCE_HEIGHT_M
        ),
    };

    density
        .with_name("wind_power_density")
        .with_units("W m**-2")
        .with_metadata("long_name", "Wind power density")
        .with_metadata("description", description)
}
