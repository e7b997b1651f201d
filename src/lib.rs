//! # climate-signals
//!
//! Derived climate and energy signals from gridded time-series weather data.
//!
//! Provides a causal weighted smoother over the time-step axis, heating and
//! cooling degree days, the BAIT "feels like" building temperature index,
//! and a wind power density estimate from wind-speed fields.
//!
//! All operations are pure: they take labeled gridded series, act only along
//! the time-step axis, carry auxiliary dimensions through unchanged, and
//! return new series. Undefined output cells (e.g. insufficient smoothing
//! history) are NaN, not errors.

pub mod constants;
pub mod core;
pub mod error;
pub mod signals;
pub mod transform;

pub use error::{Result, SignalError};

pub mod prelude {
    pub use crate::core::{GriddedSeries, GriddedSeriesBuilder, WeatherBundle};
    pub use crate::error::{Result, SignalError};
    pub use crate::signals::{bait, cdd, hdd, wind_power_density, BaitParams, WindPowerParams};
    pub use crate::transform::smooth;
}
