//! Reshaping wide tabular input into one [`PlotDataSet`] per series.
//!
//! Callers often hold chart data sample-major: one entry per x position, each entry
//! carrying the value of every series at that position. [`MultiPlotDataSet`] accepts
//! that layout directly and transposes it into series-major data sets, so nothing
//! has to be reshaped by hand before plotting.
//!
//! Three input layouts are understood, selected at compile time from the element
//! types of the two columns:
//!
//! | x column           | y column           | result                                    |
//! |--------------------|--------------------|-------------------------------------------|
//! | flat (`[X]`)       | flat (`[Y]`)       | one data set pairing x with y             |
//! | flat, N samples    | N rows of M values | M data sets sharing the x column          |
//! | N rows of M values | N rows of M values | M data sets, x and y both transposed      |
//!
//! Nested x with flat y has no defined layout and is rejected with
//! [`PlotDataError::UnsupportedShape`].
//!
//! # Examples
//!
//! ```rust
//! use plot_dataset::{Color, DataPoint, MultiPlotDataSet, PlottingType};
//!
//! let x = [1, 2, 3];
//! let y = [[10, 20], [11, 21], [12, 22]];
//!
//! let sets = MultiPlotDataSet::new(Color::BLUE, PlottingType::Line)
//!     .with_labels(["low"])
//!     .build(&x, &y)
//!     .unwrap();
//!
//! assert_eq!(sets.len(), 2);
//! assert_eq!(sets[1].point_at(2), DataPoint::new(3.0, 22.0));
//! assert_eq!(sets[0].label(), "low");
//! assert_eq!(sets[1].label(), "");
//! ```

use ndarray::Array2;

use crate::traits::{PlotEntry, narrow_column};
use crate::{Color, PlotDataError, PlotDataSet, PlotResult, PlottingType};

/// Shared settings applied to every data set produced from one wide table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPlotDataSet {
    color: Color,
    plotting_type: PlottingType,
    labels: Vec<String>,
}

impl MultiPlotDataSet {
    /// Creates a builder that tags every produced data set with `color` and `plotting_type`.
    pub const fn new(color: Color, plotting_type: PlottingType) -> Self {
        Self {
            color,
            plotting_type,
            labels: Vec::new(),
        }
    }

    /// Sets the labels, assigned to the produced data sets by position.
    ///
    /// Data sets past the end of the list get an empty label.
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// The color given to every data set.
    pub const fn color(&self) -> Color {
        self.color
    }

    /// The plotting type given to every data set.
    pub const fn plotting_type(&self) -> PlottingType {
        self.plotting_type
    }

    /// The configured labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The label for the data set at position `series`, empty when none was given.
    pub fn label_for(&self, series: usize) -> &str {
        self.labels.get(series).map_or("", String::as_str)
    }

    /// Builds one data set per series from the given columns.
    ///
    /// Neither input is modified. Output order follows the series index, 0 to M-1.
    ///
    /// # Errors
    /// - [`PlotDataError::EmptyData`] if y is nested and x holds no samples.
    /// - [`PlotDataError::DimensionMismatch`] if the sample counts of x and y differ
    ///   while y is nested, or if a row holds fewer values than the first y row.
    /// - [`PlotDataError::UnsupportedShape`] if x is nested and y is flat.
    ///
    /// # Panics
    /// With both columns flat the data set is built by [`PlotDataSet::from_columns`],
    /// which panics if the columns differ in length.
    pub fn build<X: PlotEntry, Y: PlotEntry>(
        &self,
        x_values: &[X],
        y_values: &[Y],
    ) -> PlotResult<Vec<PlotDataSet>> {
        match (X::NESTED, Y::NESTED) {
            (false, false) => {
                tracing::debug!(samples = x_values.len(), "building single data set");
                Ok(vec![self.single(x_values, y_values)])
            }
            (false, true) => self.shared_x(x_values, y_values),
            (true, true) => self.paired(x_values, y_values),
            (true, false) => {
                tracing::warn!("rejecting nested x with flat y");
                Err(PlotDataError::UnsupportedShape(
                    "nested X values require nested Y values".to_string(),
                ))
            }
        }
    }

    fn single<X: PlotEntry, Y: PlotEntry>(&self, x_values: &[X], y_values: &[Y]) -> PlotDataSet {
        PlotDataSet::from_columns(
            narrow_column(x_values),
            narrow_column(y_values),
            self.color,
            self.label_for(0),
            self.plotting_type,
        )
    }

    /// Several Y series sharing one X axis.
    fn shared_x<X: PlotEntry, Y: PlotEntry>(
        &self,
        x_values: &[X],
        y_values: &[Y],
    ) -> PlotResult<Vec<PlotDataSet>> {
        let samples = x_values.len();
        if samples == 0 {
            tracing::warn!("rejecting nested y with an empty x axis");
            return Err(PlotDataError::EmptyData(
                "Empty x value data for multiplot".to_string(),
            ));
        }
        if y_values.len() != samples {
            tracing::warn!(x = samples, y = y_values.len(), "sample count mismatch");
            return Err(PlotDataError::DimensionMismatch(format!(
                "Y has {} samples but the shared X axis has {samples}",
                y_values.len()
            )));
        }

        let series = y_values[0].width();
        tracing::debug!(samples, series, "building data sets over a shared x axis");

        let x_column = narrow_column(x_values);
        let y_table = transpose("Y", y_values, series)?;

        Ok(y_table
            .outer_iter()
            .enumerate()
            .map(|(s, y_column)| {
                PlotDataSet::from_columns(
                    x_column.clone(),
                    y_column.to_vec(),
                    self.color,
                    self.label_for(s),
                    self.plotting_type,
                )
            })
            .collect())
    }

    /// Several paired X/Y series.
    fn paired<X: PlotEntry, Y: PlotEntry>(
        &self,
        x_values: &[X],
        y_values: &[Y],
    ) -> PlotResult<Vec<PlotDataSet>> {
        let samples = y_values.len();
        if x_values.len() != samples {
            tracing::warn!(x = x_values.len(), y = samples, "outer dimension mismatch");
            return Err(PlotDataError::outer_mismatch(x_values.len(), samples));
        }
        if samples == 0 {
            tracing::warn!("rejecting empty nested input");
            return Err(PlotDataError::EmptyData(
                "Empty x and y value data for multiplot".to_string(),
            ));
        }

        let series = y_values[0].width();
        // A single x value per sample is shared by every series.
        let shared_x = x_values[0].width() == 1;
        tracing::debug!(samples, series, shared_x, "building paired data sets");

        let x_table = transpose("X", x_values, if shared_x { 1 } else { series })?;
        let y_table = transpose("Y", y_values, series)?;

        Ok(y_table
            .outer_iter()
            .enumerate()
            .map(|(s, y_column)| {
                let x_column = x_table.row(if shared_x { 0 } else { s });
                PlotDataSet::from_columns(
                    x_column.to_vec(),
                    y_column.to_vec(),
                    self.color,
                    self.label_for(s),
                    self.plotting_type,
                )
            })
            .collect())
    }
}

/// Turns N sample rows into an M x N series-major table.
///
/// Only the first `series` values of each row are read; shorter rows are an error.
fn transpose<E: PlotEntry>(axis: &str, rows: &[E], series: usize) -> PlotResult<Array2<f32>> {
    let mut by_sample = Array2::<f32>::zeros((rows.len(), series));
    for (n, (row, mut out)) in rows.iter().zip(by_sample.rows_mut()).enumerate() {
        if row.width() < series {
            return Err(PlotDataError::ragged_row(axis, n, row.width(), series));
        }
        for (s, value) in out.iter_mut().enumerate() {
            *value = row.value_at(s).unwrap_or(f32::NAN);
        }
    }
    Ok(by_sample.reversed_axes())
}

/// Builds one data set per series; see [`MultiPlotDataSet::build`].
///
/// `labels` are assigned by position and may be shorter than the number of series.
///
/// # Errors
/// See [`MultiPlotDataSet::build`].
///
/// # Panics
/// See [`MultiPlotDataSet::build`].
pub fn multi_plot_data_set<X: PlotEntry, Y: PlotEntry>(
    x_values: &[X],
    y_values: &[Y],
    color: Color,
    plotting_type: PlottingType,
    labels: &[&str],
) -> PlotResult<Vec<PlotDataSet>> {
    MultiPlotDataSet::new(color, plotting_type)
        .with_labels(labels.iter().copied())
        .build(x_values, y_values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DataPoint;

    fn points(set: &PlotDataSet) -> Vec<(f32, f32)> {
        set.points().map(Into::into).collect()
    }

    #[test]
    fn test_scalar_scalar_builds_one_set() {
        let sets = MultiPlotDataSet::new(Color::RED, PlottingType::Bars)
            .with_labels(["only", "ignored"])
            .build(&[1u8, 2, 3], &[4.0f64, 5.0, 6.0])
            .unwrap();

        assert_eq!(sets.len(), 1);
        assert_eq!(points(&sets[0]), vec![(1.0, 4.0), (2.0, 5.0), (3.0, 6.0)]);
        assert_eq!(sets[0].label(), "only");
        assert_eq!(sets[0].color(), Color::RED);
        assert_eq!(sets[0].plotting_type(), PlottingType::Bars);
    }

    #[test]
    fn test_scalar_scalar_narrows_mixed_types() {
        let builder = MultiPlotDataSet::default();
        let expected = vec![(1.0, 10.0), (2.0, 20.0)];
        assert_eq!(points(&builder.build(&[1i8, 2], &[10u64, 20]).unwrap()[0]), expected);
        assert_eq!(points(&builder.build(&[1usize, 2], &[10.0f64, 20.0]).unwrap()[0]), expected);
        assert_eq!(points(&builder.build(&[1.0f32, 2.0], &[10i16, 20]).unwrap()[0]), expected);
        assert_eq!(points(&builder.build(&[1u32, 2], &[10isize, 20]).unwrap()[0]), expected);
    }

    #[test]
    fn test_scalar_scalar_without_labels() {
        let sets = MultiPlotDataSet::default().build(&[0.0f32], &[1.0f32]).unwrap();
        assert_eq!(sets[0].label(), "");
    }

    #[test]
    #[should_panic(expected = "Incompatible data sizes")]
    fn test_scalar_scalar_length_mismatch_is_fatal() {
        let _ = MultiPlotDataSet::default().build(&[1.0f64, 2.0], &[1.0f64]);
    }

    #[test]
    fn test_shared_x_transposes_y() {
        let x = vec![1.0f64, 2.0, 3.0];
        let y = vec![vec![10.0f64, 20.0], vec![11.0, 21.0], vec![12.0, 22.0]];

        let sets = MultiPlotDataSet::new(Color::GREEN, PlottingType::Line)
            .build(&x, &y)
            .unwrap();

        assert_eq!(sets.len(), 2);
        assert_eq!(points(&sets[0]), vec![(1.0, 10.0), (2.0, 11.0), (3.0, 12.0)]);
        assert_eq!(points(&sets[1]), vec![(1.0, 20.0), (2.0, 21.0), (3.0, 22.0)]);
        for set in &sets {
            assert_eq!(set.color(), Color::GREEN);
            assert_eq!(set.plotting_type(), PlottingType::Line);
        }
    }

    #[test]
    fn test_shared_x_series_count_comes_from_first_row() {
        let x = [0, 1];
        let y = [vec![1, 2, 3], vec![4, 5, 6, 7]];
        let sets = MultiPlotDataSet::default().build(&x, &y).unwrap();
        assert_eq!(sets.len(), 3);
        assert_eq!(sets[2].point_at(1), DataPoint::new(1.0, 6.0));
    }

    #[test]
    fn test_shared_x_empty_axis_is_recoverable() {
        let x: [f64; 0] = [];
        let y = [[1.0f64, 2.0]];
        let err = MultiPlotDataSet::default().build(&x, &y).unwrap_err();
        assert!(matches!(err, PlotDataError::EmptyData(_)));
    }

    #[test]
    fn test_shared_x_sample_count_mismatch() {
        let err = MultiPlotDataSet::default()
            .build(&[1, 2, 3], &[[1, 2], [3, 4]])
            .unwrap_err();
        assert!(matches!(err, PlotDataError::DimensionMismatch(_)));
    }

    #[test]
    fn test_shared_x_ragged_row() {
        let y = [vec![1.0f32, 2.0], vec![3.0]];
        let err = MultiPlotDataSet::default().build(&[0.0f32, 1.0], &y).unwrap_err();
        assert_eq!(err, PlotDataError::ragged_row("Y", 1, 1, 2));
    }

    #[test]
    fn test_paired_transposes_both() {
        let x = [[1, 1], [2, 2], [3, 3]];
        let y = [[10, 20], [11, 21], [12, 22]];
        let sets = MultiPlotDataSet::default().build(&x, &y).unwrap();

        assert_eq!(sets.len(), 2);
        assert_eq!(points(&sets[0]), vec![(1.0, 10.0), (2.0, 11.0), (3.0, 12.0)]);
        assert_eq!(points(&sets[1]), vec![(1.0, 20.0), (2.0, 21.0), (3.0, 22.0)]);
    }

    #[test]
    fn test_paired_distinct_x_per_series() {
        let x = [[0.0f64, 100.0], [1.0, 101.0]];
        let y = [[5.0f64, 6.0], [7.0, 8.0]];
        let sets = MultiPlotDataSet::default().build(&x, &y).unwrap();
        assert_eq!(sets[1].x_values(), &[100.0, 101.0]);
        assert_eq!(sets[1].y_values(), &[6.0, 8.0]);
    }

    #[test]
    fn test_paired_single_width_x_is_shared() {
        let x = [[0], [1], [2]];
        let y = [[1, 2], [3, 4], [5, 6]];
        let sets = MultiPlotDataSet::default().build(&x, &y).unwrap();
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].x_values(), &[0.0, 1.0, 2.0]);
        assert_eq!(sets[1].x_values(), &[0.0, 1.0, 2.0]);
        assert_eq!(sets[1].y_values(), &[2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_paired_outer_mismatch_is_recoverable() {
        let x = [[1, 1], [2, 2]];
        let y = [[10, 20], [11, 21], [12, 22]];
        let err = MultiPlotDataSet::default().build(&x, &y).unwrap_err();
        assert_eq!(err, PlotDataError::outer_mismatch(2, 3));
        assert!(err.to_string().contains("set dimension of X must be one"));
    }

    #[test]
    fn test_paired_empty_input() {
        let x: Vec<Vec<f64>> = Vec::new();
        let y: Vec<Vec<f64>> = Vec::new();
        let err = MultiPlotDataSet::default().build(&x, &y).unwrap_err();
        assert!(matches!(err, PlotDataError::EmptyData(_)));
    }

    #[test]
    fn test_paired_narrow_x_row() {
        let x = [vec![1, 1], vec![2]];
        let y = [vec![1, 2], vec![3, 4]];
        let err = MultiPlotDataSet::default().build(&x, &y).unwrap_err();
        assert_eq!(err, PlotDataError::ragged_row("X", 1, 1, 2));
    }

    #[test]
    fn test_nested_x_flat_y_is_rejected() {
        let err = MultiPlotDataSet::default()
            .build(&[[1, 2]], &[3])
            .unwrap_err();
        assert!(matches!(err, PlotDataError::UnsupportedShape(_)));
    }

    #[test]
    fn test_labels_assigned_by_position() {
        let y = [[1, 2, 3], [4, 5, 6]];
        let sets = MultiPlotDataSet::default()
            .with_labels(["a", "b"])
            .build(&[0, 1], &y)
            .unwrap();
        let labels: Vec<&str> = sets.iter().map(PlotDataSet::label).collect();
        assert_eq!(labels, vec!["a", "b", ""]);
    }

    #[test]
    fn test_inputs_are_untouched() {
        let x = vec![1.0f64, 2.0];
        let y = vec![vec![3.0f64, 4.0], vec![5.0, 6.0]];
        let (x_before, y_before) = (x.clone(), y.clone());
        let _ = MultiPlotDataSet::default().build(&x, &y).unwrap();
        assert_eq!(x, x_before);
        assert_eq!(y, y_before);
    }

    #[test]
    fn test_free_function_matches_builder() {
        let x = [1.0f32, 2.0, 3.0];
        let y = [[1.0f32, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let from_fn =
            multi_plot_data_set(&x, &y, Color::CYAN, PlottingType::Points, &["first"]).unwrap();
        let from_builder = MultiPlotDataSet::new(Color::CYAN, PlottingType::Points)
            .with_labels(["first"])
            .build(&x, &y)
            .unwrap();
        assert_eq!(from_fn, from_builder);
    }
}
