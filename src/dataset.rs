//! The single-series plot data container.
//!
//! A [`PlotDataSet`] owns one ordered sequence of `(x, y)` pairs together with the
//! metadata a renderer needs to draw it: a [`Color`], a legend label and a
//! [`PlottingType`]. The x and y columns are stored separately and are always the
//! same length; no constructor or mutator can leave them out of step.
//!
//! # Examples
//!
//! ```rust
//! use plot_dataset::{Color, DataPoint, PlotDataSet, PlottingType};
//!
//! let mut data = PlotDataSet::new(&[0, 1, 2], &[0.5f64, 1.5, 2.5], Color::RED, "temp", PlottingType::Line);
//! data.push_back((3.0f32, 3.5f32));
//! data.pop_front(1);
//!
//! assert_eq!(data.len(), 3);
//! assert_eq!(data.point_at(0), DataPoint::new(1.0, 1.5));
//! ```

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

use crate::traits::PlotScalar;
use crate::{Color, PlotDataError, PlotResult};

/// How a renderer should draw the points of a data set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PlottingType {
    /// Individual markers
    #[default]
    Points,
    /// A polyline through the points in order
    Line,
    /// One bar per point
    Bars,
}

/// A single `(x, y)` coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct DataPoint {
    /// Horizontal coordinate
    pub x: f32,
    /// Vertical coordinate
    pub y: f32,
}

impl DataPoint {
    /// Creates a point from its coordinates.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for DataPoint {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<[f32; 2]> for DataPoint {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<DataPoint> for (f32, f32) {
    fn from(p: DataPoint) -> Self {
        (p.x, p.y)
    }
}

impl From<DataPoint> for [f32; 2] {
    fn from(p: DataPoint) -> Self {
        [p.x, p.y]
    }
}

/// One styled, ordered series of points.
///
/// Only `Serialize` is derived under the `serialization` feature; incoming data goes
/// through [`PlotTable`](crate::PlotTable) so the column-length invariant is checked.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize))]
pub struct PlotDataSet {
    x_values: Vec<f32>,
    y_values: Vec<f32>,
    color: Color,
    label: String,
    plotting_type: PlottingType,
}

impl PlotDataSet {
    /// Creates an empty data set with black color, no label and [`PlottingType::Points`].
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a data set with no points but the given metadata.
    pub fn with_metadata(color: Color, label: impl Into<String>, plotting_type: PlottingType) -> Self {
        Self {
            x_values: Vec::new(),
            y_values: Vec::new(),
            color,
            label: label.into(),
            plotting_type,
        }
    }

    /// Creates a data set from paired x and y columns.
    ///
    /// Values of any supported numeric type are narrowed to `f32` on entry.
    ///
    /// # Panics
    /// Panics with "Incompatible data sizes" if `x_values` and `y_values` differ in length.
    /// Mismatched columns would silently corrupt a chart, so this is treated as a caller bug.
    /// Use [`PlotDataSet::try_new`] to get an error instead.
    pub fn new<X: PlotScalar, Y: PlotScalar>(
        x_values: &[X],
        y_values: &[Y],
        color: Color,
        label: impl Into<String>,
        plotting_type: PlottingType,
    ) -> Self {
        Self::from_columns(
            x_values.iter().map(|v| v.to_plot_value()).collect(),
            y_values.iter().map(|v| v.to_plot_value()).collect(),
            color,
            label,
            plotting_type,
        )
    }

    /// Fallible variant of [`PlotDataSet::new`].
    ///
    /// # Errors
    /// Returns [`PlotDataError::DimensionMismatch`] if the columns differ in length.
    pub fn try_new<X: PlotScalar, Y: PlotScalar>(
        x_values: &[X],
        y_values: &[Y],
        color: Color,
        label: impl Into<String>,
        plotting_type: PlottingType,
    ) -> PlotResult<Self> {
        if x_values.len() != y_values.len() {
            return Err(PlotDataError::DimensionMismatch(format!(
                "Incompatible data sizes: {} x values, {} y values",
                x_values.len(),
                y_values.len()
            )));
        }
        Ok(Self::new(x_values, y_values, color, label, plotting_type))
    }

    /// Creates a data set from columns already in storage precision.
    ///
    /// # Panics
    /// Panics with "Incompatible data sizes" if the columns differ in length.
    pub fn from_columns(
        x_values: Vec<f32>,
        y_values: Vec<f32>,
        color: Color,
        label: impl Into<String>,
        plotting_type: PlottingType,
    ) -> Self {
        if x_values.len() != y_values.len() {
            tracing::error!(
                x_len = x_values.len(),
                y_len = y_values.len(),
                "incompatible data sizes"
            );
            panic!(
                "Incompatible data sizes: {} x values, {} y values",
                x_values.len(),
                y_values.len()
            );
        }

        Self {
            x_values,
            y_values,
            color,
            label: label.into(),
            plotting_type,
        }
    }

    /// Number of points. The x and y columns always have this length.
    pub fn len(&self) -> usize {
        self.x_values.len()
    }

    /// Returns `true` if the data set holds no points.
    pub fn is_empty(&self) -> bool {
        self.x_values.is_empty()
    }

    /// The x column.
    pub fn x_values(&self) -> &[f32] {
        &self.x_values
    }

    /// The y column.
    pub fn y_values(&self) -> &[f32] {
        &self.y_values
    }

    /// Returns the point at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn point_at(&self, index: usize) -> DataPoint {
        DataPoint::new(self.x_values[index], self.y_values[index])
    }

    /// Returns the point at `index`, or `None` if out of range.
    pub fn get_point(&self, index: usize) -> Option<DataPoint> {
        Some(DataPoint::new(
            *self.x_values.get(index)?,
            *self.y_values.get(index)?,
        ))
    }

    /// Overwrites the point at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn set_point_at(&mut self, index: usize, point: impl Into<DataPoint>) {
        let point = point.into();
        self.x_values[index] = point.x;
        self.y_values[index] = point.y;
    }

    /// Appends a point at the end.
    pub fn push_back(&mut self, point: impl Into<DataPoint>) {
        let point = point.into();
        self.x_values.push(point.x);
        self.y_values.push(point.y);
    }

    /// Removes the first `n` points, shifting the rest down.
    ///
    /// Removing more points than exist empties the data set.
    pub fn pop_front(&mut self, n: usize) {
        let n = n.min(self.len());
        self.x_values.drain(..n);
        self.y_values.drain(..n);
    }

    /// Iterates over the points in order.
    pub fn points(&self) -> impl ExactSizeIterator<Item = DataPoint> + '_ {
        self.x_values
            .iter()
            .zip(&self.y_values)
            .map(|(&x, &y)| DataPoint::new(x, y))
    }

    /// The color used to draw this data set.
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Sets the color.
    pub const fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// The legend label. May be empty.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Sets the legend label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// How this data set should be drawn.
    pub const fn plotting_type(&self) -> PlottingType {
        self.plotting_type
    }

    /// Sets how this data set should be drawn.
    pub const fn set_plotting_type(&mut self, plotting_type: PlottingType) {
        self.plotting_type = plotting_type;
    }
}
