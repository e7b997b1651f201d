//! Aligned weather-field bundle consumed by the BAIT index.

use crate::core::GriddedSeries;
use crate::error::{Result, SignalError};

/// The four weather fields the BAIT index is computed from.
///
/// All members must share one time axis and grid layout; this is validated
/// once at construction so the signal calculators can assume alignment.
/// Units are the caller's responsibility: temperature in degC, wind speed in
/// m/s, radiation in W/m^2, humidity in the convention the fixed BAIT
/// constants were validated with.
#[derive(Debug, Clone)]
pub struct WeatherBundle {
    humidity: GriddedSeries,
    radiation_global_horizontal: GriddedSeries,
    temperature: GriddedSeries,
    wind_speed_2m: GriddedSeries,
}

impl WeatherBundle {
    pub fn new(
        humidity: GriddedSeries,
        radiation_global_horizontal: GriddedSeries,
        temperature: GriddedSeries,
        wind_speed_2m: GriddedSeries,
    ) -> Result<Self> {
        for member in [&humidity, &radiation_global_horizontal, &wind_speed_2m] {
            if member.len() != temperature.len() {
                return Err(SignalError::ShapeMismatch {
                    expected: temperature.len(),
                    got: member.len(),
                });
            }
            if member.cells() != temperature.cells()
                || member.grid_shape() != temperature.grid_shape()
            {
                return Err(SignalError::ShapeMismatch {
                    expected: temperature.cells(),
                    got: member.cells(),
                });
            }
            if !member.same_layout(&temperature) {
                return Err(SignalError::TimestampError(
                    "bundle members must share one time axis".to_string(),
                ));
            }
        }

        Ok(Self {
            humidity,
            radiation_global_horizontal,
            temperature,
            wind_speed_2m,
        })
    }

    pub fn humidity(&self) -> &GriddedSeries {
        &self.humidity
    }

    pub fn radiation_global_horizontal(&self) -> &GriddedSeries {
        &self.radiation_global_horizontal
    }

    pub fn temperature(&self) -> &GriddedSeries {
        &self.temperature
    }

    pub fn wind_speed_2m(&self) -> &GriddedSeries {
        &self.wind_speed_2m
    }
}
