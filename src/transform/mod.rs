//! Axis-wise transforms for gridded series.

pub mod smooth;

pub use smooth::smooth;
