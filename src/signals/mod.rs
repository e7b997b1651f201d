//! Derived climate and energy signal calculators.

pub mod bait;
pub mod degree_days;
pub mod wind;

pub use bait::{bait, bait_smoothing_weights, BaitParams};
pub use degree_days::{cdd, hdd};
pub use wind::{wind_power_density, WindPowerParams};
