//! Error types and result utilities for plot data operations.

use thiserror::Error;

/// Convenience type alias for results that may contain PlotDataError
pub type PlotResult<T> = Result<T, PlotDataError>;

/// Error types that can occur while shaping plot data.
///
/// Only data-shape problems are reported through this type. A length mismatch
/// inside a single [`PlotDataSet`](crate::PlotDataSet) constructed with
/// [`PlotDataSet::new`](crate::PlotDataSet::new) is a caller bug and panics instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlotDataError {
    /// Error that occurs when an axis that must hold samples is empty.
    ///
    /// This happens when nested Y data is paired with an empty X axis.
    #[error("Empty data error: {0}")]
    EmptyData(String),

    /// Error that occurs when the dimensions of X and Y don't line up.
    ///
    /// This covers mismatching outer (sample) counts as well as ragged inner rows.
    #[error("Dimension mismatch error: {0}")]
    DimensionMismatch(String),

    /// Error that occurs when the combination of input shapes has no defined layout.
    #[error("Unsupported shape error: {0}")]
    UnsupportedShape(String),

    /// Error that occurs when invalid parameters are provided to an operation.
    #[error("Invalid parameter error: {0}")]
    InvalidParameter(String),
}

impl PlotDataError {
    /// Builds the error reported when nested X and nested Y disagree on their sample count.
    pub fn outer_mismatch(x_outer: usize, y_outer: usize) -> Self {
        PlotDataError::DimensionMismatch(format!(
            "Mismatching dataset sizes for multiplot, set dimension of X must be one, \
             or match set dimension of Y (X has {x_outer}, Y has {y_outer})"
        ))
    }

    /// Builds the error reported when a nested row holds fewer values than the series count.
    pub fn ragged_row(axis: &str, row: usize, len: usize, expected: usize) -> Self {
        PlotDataError::DimensionMismatch(format!(
            "{axis} row {row} has {len} values, expected at least {expected}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outer_mismatch_message_names_constraint() {
        let err = PlotDataError::outer_mismatch(2, 3);
        let msg = err.to_string();
        assert!(msg.starts_with("Dimension mismatch error:"));
        assert!(msg.contains("set dimension of X must be one"));
        assert!(msg.contains("match set dimension of Y"));
        assert!(msg.contains("X has 2, Y has 3"));
    }

    #[test]
    fn test_ragged_row_message() {
        let err = PlotDataError::ragged_row("Y", 4, 1, 2);
        assert_eq!(
            err.to_string(),
            "Dimension mismatch error: Y row 4 has 1 values, expected at least 2"
        );
    }
}
