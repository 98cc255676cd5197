//! Plot input whose shape is only known at run time.
//!
//! [`MultiPlotDataSet::build`] picks its layout from the element types of its
//! arguments. Data that arrives from a file, a network message or a scripting layer
//! has no such static type, so [`PlotTable`] records the shape as a value and
//! [`MultiPlotDataSet::build_tables`] dispatches on it. The four shape
//! combinations behave exactly as in the static path.

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

use crate::{MultiPlotDataSet, PlotDataSet, PlotResult};

/// One column of plot input, either flat or one row per sample.
///
/// With the `serialization` feature enabled the enum is untagged: a JSON array of
/// numbers is [`PlotTable::Flat`], an array of arrays is [`PlotTable::Nested`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(untagged))]
pub enum PlotTable {
    /// One value per sample
    Flat(Vec<f64>),
    /// One row per sample, one value per series in each row
    Nested(Vec<Vec<f64>>),
}

impl PlotTable {
    /// Returns `true` for [`PlotTable::Nested`].
    pub const fn is_nested(&self) -> bool {
        matches!(self, PlotTable::Nested(_))
    }

    /// Number of samples, i.e. the length of the top-level sequence.
    pub fn outer_len(&self) -> usize {
        match self {
            PlotTable::Flat(values) => values.len(),
            PlotTable::Nested(rows) => rows.len(),
        }
    }
}

impl From<Vec<f64>> for PlotTable {
    fn from(values: Vec<f64>) -> Self {
        PlotTable::Flat(values)
    }
}

impl From<Vec<Vec<f64>>> for PlotTable {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        PlotTable::Nested(rows)
    }
}

impl MultiPlotDataSet {
    /// Builds one data set per series from runtime-shaped columns.
    ///
    /// # Errors
    /// Same as [`MultiPlotDataSet::build`].
    ///
    /// # Panics
    /// Same as [`MultiPlotDataSet::build`]: two flat columns of different length panic.
    pub fn build_tables(&self, x: &PlotTable, y: &PlotTable) -> PlotResult<Vec<PlotDataSet>> {
        tracing::debug!(
            x_nested = x.is_nested(),
            y_nested = y.is_nested(),
            "dispatching on runtime table shape"
        );
        match (x, y) {
            (PlotTable::Flat(x), PlotTable::Flat(y)) => self.build(x, y),
            (PlotTable::Flat(x), PlotTable::Nested(y)) => self.build(x, y),
            (PlotTable::Nested(x), PlotTable::Nested(y)) => self.build(x, y),
            (PlotTable::Nested(x), PlotTable::Flat(y)) => self.build(x, y),
        }
    }
}
