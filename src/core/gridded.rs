//! GriddedSeries data structure for time-resolved gridded fields.

use crate::error::{Result, SignalError};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// A numeric field indexed by an ordered time-step axis and zero or more
/// auxiliary (e.g. spatial) dimensions.
///
/// Auxiliary dimensions are flattened into "cells": values are stored
/// column-major as `values[cell][step]`, one inner vector per cell, and
/// `grid_shape` records the original auxiliary-dimension extents (empty for
/// a plain single-cell series). All signal operations act only along the
/// time-step axis; cells are carried through unchanged.
///
/// Inputs are never mutated: every operation returns a new series.
#[derive(Debug, Clone)]
pub struct GriddedSeries {
    steps: Vec<DateTime<Utc>>,
    /// Values stored column-major: values[cell][step]
    values: Vec<Vec<f64>>,
    grid_shape: Vec<usize>,
    name: Option<String>,
    units: Option<String>,
    metadata: HashMap<String, String>,
}

/// Builder for constructing GriddedSeries.
#[derive(Debug, Clone, Default)]
pub struct GriddedSeriesBuilder {
    steps: Vec<DateTime<Utc>>,
    values: Vec<Vec<f64>>,
    grid_shape: Vec<usize>,
    name: Option<String>,
    units: Option<String>,
    metadata: HashMap<String, String>,
}

impl GriddedSeriesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(mut self, steps: Vec<DateTime<Utc>>) -> Self {
        self.steps = steps;
        self
    }

    /// Set single-cell values.
    pub fn values(mut self, values: Vec<f64>) -> Self {
        self.values = vec![values];
        self.grid_shape = vec![];
        self
    }

    /// Set gridded values with the auxiliary-dimension shape.
    pub fn gridded_values(mut self, values: Vec<Vec<f64>>, grid_shape: Vec<usize>) -> Self {
        self.values = values;
        self.grid_shape = grid_shape;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Result<GriddedSeries> {
        let mut series = GriddedSeries::new(self.steps, self.values, self.grid_shape)?;
        series.name = self.name;
        series.units = self.units;
        series.metadata = self.metadata;
        Ok(series)
    }
}

impl GriddedSeries {
    /// Create a new GriddedSeries.
    ///
    /// `grid_shape` describes the auxiliary dimensions; its product must
    /// equal the number of cell vectors (an empty shape means one cell).
    /// Every cell must have one value per time step, and steps must be
    /// strictly increasing.
    pub fn new(
        steps: Vec<DateTime<Utc>>,
        values: Vec<Vec<f64>>,
        grid_shape: Vec<usize>,
    ) -> Result<Self> {
        for i in 1..steps.len() {
            if steps[i] <= steps[i - 1] {
                return Err(SignalError::TimestampError(
                    "time steps must be strictly increasing".to_string(),
                ));
            }
        }

        let expected_cells: usize = if grid_shape.is_empty() {
            1
        } else {
            grid_shape.iter().product()
        };
        if values.len() != expected_cells {
            return Err(SignalError::ShapeMismatch {
                expected: expected_cells,
                got: values.len(),
            });
        }

        for cell in &values {
            if cell.len() != steps.len() {
                return Err(SignalError::ShapeMismatch {
                    expected: steps.len(),
                    got: cell.len(),
                });
            }
        }

        Ok(Self {
            steps,
            values,
            grid_shape,
            name: None,
            units: None,
            metadata: HashMap::new(),
        })
    }

    /// Create a series with a single cell (no auxiliary dimensions).
    pub fn single_cell(steps: Vec<DateTime<Utc>>, values: Vec<f64>) -> Result<Self> {
        Self::new(steps, vec![values], vec![])
    }

    /// Number of time steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the series has no time steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of cells (flattened auxiliary dimensions).
    pub fn cells(&self) -> usize {
        self.values.len()
    }

    /// Auxiliary-dimension extents (empty for a single-cell series).
    pub fn grid_shape(&self) -> &[usize] {
        &self.grid_shape
    }

    /// Time-step coordinates.
    pub fn steps(&self) -> &[DateTime<Utc>] {
        &self.steps
    }

    /// Values of one cell along the time axis.
    pub fn cell_values(&self, cell: usize) -> Result<&[f64]> {
        self.values
            .get(cell)
            .map(|v| v.as_slice())
            .ok_or(SignalError::IndexOutOfBounds {
                index: cell,
                size: self.values.len(),
            })
    }

    /// Values of the first cell (the whole field for single-cell series).
    pub fn primary_values(&self) -> &[f64] {
        self.values.first().map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// All values organized by cell.
    pub fn values_by_cell(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Short name of the quantity, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Unit string, if set.
    pub fn units(&self) -> Option<&str> {
        self.units.as_deref()
    }

    /// Free-form descriptive metadata.
    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    /// Set a metadata entry.
    pub fn set_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), value.into());
    }

    /// Return the series with a short name attached.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Return the series with a unit string attached.
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    /// Return the series with a metadata entry attached.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Check if any cell contains missing values (NaN or infinite).
    pub fn has_missing_values(&self) -> bool {
        self.values
            .iter()
            .any(|cell| cell.iter().any(|v| v.is_nan() || v.is_infinite()))
    }

    /// Whether two series share one time axis and grid layout.
    pub fn same_layout(&self, other: &GriddedSeries) -> bool {
        self.steps == other.steps && self.grid_shape == other.grid_shape
    }

    /// Apply an elementwise function, producing a new series.
    ///
    /// The time axis and grid layout carry over; name, units and metadata do
    /// not (the result is a different quantity).
    pub fn map<F>(&self, f: F) -> GriddedSeries
    where
        F: Fn(f64) -> f64,
    {
        let values = self
            .values
            .iter()
            .map(|cell| cell.iter().map(|&v| f(v)).collect())
            .collect();

        GriddedSeries {
            steps: self.steps.clone(),
            values,
            grid_shape: self.grid_shape.clone(),
            name: None,
            units: None,
            metadata: HashMap::new(),
        }
    }

    /// Combine two series elementwise, producing a new series.
    ///
    /// Fails with ShapeMismatch before touching any element if the step
    /// counts or grid layouts differ.
    pub fn zip_map<F>(&self, other: &GriddedSeries, f: F) -> Result<GriddedSeries>
    where
        F: Fn(f64, f64) -> f64,
    {
        if other.len() != self.len() {
            return Err(SignalError::ShapeMismatch {
                expected: self.len(),
                got: other.len(),
            });
        }
        if other.cells() != self.cells() || other.grid_shape != self.grid_shape {
            return Err(SignalError::ShapeMismatch {
                expected: self.cells(),
                got: other.cells(),
            });
        }

        let values = self
            .values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| a.iter().zip(b).map(|(&x, &y)| f(x, y)).collect())
            .collect();

        Ok(GriddedSeries {
            steps: self.steps.clone(),
            values,
            grid_shape: self.grid_shape.clone(),
            name: None,
            units: None,
            metadata: HashMap::new(),
        })
    }

    /// Apply a per-cell transform along the time axis.
    ///
    /// The transform must preserve the number of steps.
    pub(crate) fn map_cells<F>(&self, f: F) -> GriddedSeries
    where
        F: Fn(&[f64]) -> Vec<f64>,
    {
        let values = self.values.iter().map(|cell| f(cell)).collect();

        GriddedSeries {
            steps: self.steps.clone(),
            values,
            grid_shape: self.grid_shape.clone(),
            name: None,
            units: None,
            metadata: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{Duration, TimeZone};

    fn make_steps(n: usize) -> Vec<DateTime<Utc>> {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        (0..n).map(|i| base + Duration::hours(i as i64)).collect()
    }

    #[test]
    fn constructs_single_cell_series() {
        let steps = make_steps(5);
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];

        let series = GriddedSeries::single_cell(steps.clone(), values.clone()).unwrap();

        assert_eq!(series.len(), 5);
        assert!(!series.is_empty());
        assert_eq!(series.cells(), 1);
        assert!(series.grid_shape().is_empty());
        assert_eq!(series.primary_values(), &values);
        assert_eq!(series.steps(), &steps);
    }

    #[test]
    fn constructs_gridded_series() {
        let steps = make_steps(3);
        let values = vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
            vec![10.0, 11.0, 12.0],
        ];

        let series = GriddedSeries::new(steps, values, vec![2, 2]).unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(series.cells(), 4);
        assert_eq!(series.grid_shape(), &[2, 2]);
        assert_eq!(series.cell_values(2).unwrap(), &[7.0, 8.0, 9.0]);
    }

    #[test]
    fn rejects_grid_shape_cell_count_mismatch() {
        let steps = make_steps(3);
        let values = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];

        let result = GriddedSeries::new(steps, values, vec![3]);
        assert_eq!(
            result.unwrap_err(),
            SignalError::ShapeMismatch {
                expected: 3,
                got: 2
            }
        );
    }

    #[test]
    fn rejects_cell_step_count_mismatch() {
        let steps = make_steps(3);
        let values = vec![vec![1.0, 2.0]];

        let result = GriddedSeries::new(steps, values, vec![]);
        assert_eq!(
            result.unwrap_err(),
            SignalError::ShapeMismatch {
                expected: 3,
                got: 2
            }
        );
    }

    #[test]
    fn rejects_non_increasing_steps() {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let steps = vec![base, base + Duration::hours(2), base + Duration::hours(1)];
        let values = vec![1.0, 2.0, 3.0];

        let result = GriddedSeries::single_cell(steps, values);
        assert!(matches!(result, Err(SignalError::TimestampError(_))));

        let steps = vec![base, base + Duration::hours(1), base + Duration::hours(1)];
        let values = vec![1.0, 2.0, 3.0];

        let result = GriddedSeries::single_cell(steps, values);
        assert!(matches!(result, Err(SignalError::TimestampError(_))));
    }

    #[test]
    fn builder_sets_name_units_and_metadata() {
        let series = GriddedSeriesBuilder::new()
            .steps(make_steps(2))
            .values(vec![20.0, 21.0])
            .name("t2m")
            .units("degC")
            .metadata("source", "reanalysis")
            .build()
            .unwrap();

        assert_eq!(series.name(), Some("t2m"));
        assert_eq!(series.units(), Some("degC"));
        assert_eq!(
            series.metadata().get("source"),
            Some(&"reanalysis".to_string())
        );
    }

    #[test]
    fn map_transforms_every_cell() {
        let steps = make_steps(2);
        let values = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let series = GriddedSeries::new(steps, values, vec![2]).unwrap();

        let doubled = series.map(|v| v * 2.0);

        assert_eq!(doubled.cell_values(0).unwrap(), &[2.0, 4.0]);
        assert_eq!(doubled.cell_values(1).unwrap(), &[6.0, 8.0]);
        assert_eq!(doubled.grid_shape(), &[2]);
        assert!(doubled.name().is_none());
    }

    #[test]
    fn zip_map_combines_aligned_series() {
        let steps = make_steps(3);
        let a = GriddedSeries::single_cell(steps.clone(), vec![1.0, 2.0, 3.0]).unwrap();
        let b = GriddedSeries::single_cell(steps, vec![10.0, 20.0, 30.0]).unwrap();

        let sum = a.zip_map(&b, |x, y| x + y).unwrap();

        assert_relative_eq!(sum.primary_values()[0], 11.0, epsilon = 1e-12);
        assert_relative_eq!(sum.primary_values()[2], 33.0, epsilon = 1e-12);
    }

    #[test]
    fn zip_map_rejects_misaligned_series() {
        let a = GriddedSeries::single_cell(make_steps(3), vec![1.0, 2.0, 3.0]).unwrap();
        let b = GriddedSeries::single_cell(make_steps(2), vec![1.0, 2.0]).unwrap();

        let result = a.zip_map(&b, |x, y| x + y);
        assert_eq!(
            result.unwrap_err(),
            SignalError::ShapeMismatch {
                expected: 3,
                got: 2
            }
        );
    }

    #[test]
    fn detects_missing_values() {
        let series =
            GriddedSeries::single_cell(make_steps(3), vec![1.0, f64::NAN, 3.0]).unwrap();
        assert!(series.has_missing_values());

        let series =
            GriddedSeries::single_cell(make_steps(3), vec![1.0, 2.0, 3.0]).unwrap();
        assert!(!series.has_missing_values());
    }

    #[test]
    fn cell_access_out_of_bounds() {
        let series = GriddedSeries::single_cell(make_steps(2), vec![1.0, 2.0]).unwrap();

        assert!(series.cell_values(0).is_ok());
        assert_eq!(
            series.cell_values(1).unwrap_err(),
            SignalError::IndexOutOfBounds { index: 1, size: 1 }
        );
    }
}
