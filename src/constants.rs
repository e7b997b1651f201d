//! Fixed domain constants shared by the derived-signal formulas.
//!
//! These values were validated against reference output data; they are
//! collected here so the formulas stay auditable in one place.

/// Comfort setpoint around which discomfort is measured \[degC\].
pub const SETPOINT_T: f64 = 16.0;

/// Temperature at which raw readings start blending into the index \[degC\].
pub const BLEND_LOWER: f64 = 15.0;

/// Temperature at which the blend toward raw readings saturates \[degC\].
pub const BLEND_UPPER: f64 = 23.0;

/// Maximum fraction of the raw temperature blended into the index.
pub const MAX_RAW_VAR: f64 = 0.5;

/// Steps per decay tier in the BAIT smoothing window (three tiers cover the
/// current and previous two days of 6-hourly steps).
pub const WEIGHT_TIER_LEN: usize = 4;

/// Air density at sea level and 15 degC \[kg/m^3\].
pub const AIR_DENSITY: f64 = 1.225;

/// Height at which the supplied wind-speed field is valid \[m\].
pub const REFERENCE_HEIGHT_M: f64 = 100.0;

/// Hellmann exponent for neutral atmospheric conditions over open land.
pub const DEFAULT_HELLMANN_ALPHA: f64 = 1.0 / 7.0;

/// Rated speed above which turbine output plateaus \[m/s\].
pub const DEFAULT_CAP_SPEED: f64 = 11.0;

/// Speed below which the turbine is inactive \[m/s\].
pub const DEFAULT_CUT_IN_SPEED: f64 = 3.0;

/// Speed above which the turbine shuts down \[m/s\].
pub const DEFAULT_CUT_OUT_SPEED: f64 = 25.0;
