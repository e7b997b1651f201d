//! Core data structures for gridded weather series.

mod bundle;
mod gridded;

pub use bundle::WeatherBundle;
pub use gridded::{GriddedSeries, GriddedSeriesBuilder};
