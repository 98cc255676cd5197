//! Numeric ingestion and input-shape classification.
//!
//! Plot coordinates are stored as `f32`. Anything a caller hands in, whether integer
//! or float, is narrowed at the boundary through [`PlotScalar`], so the rest of the
//! crate only ever sees one precision.
//!
//! [`PlotEntry`] describes a single element of an input column. Scalars are flat
//! entries; vectors, arrays and slices of scalars are nested entries holding one
//! value per series. The multi-series builder dispatches on the pair
//! `(X::NESTED, Y::NESTED)`, which is known at compile time.

use num_traits::ToPrimitive;

/// A numeric value that can be stored as a plot coordinate.
pub trait PlotScalar: Copy + ToPrimitive {
    /// Narrows the value to the storage precision.
    ///
    /// Finite values outside the `f32` range become infinities, NaN stays NaN.
    #[inline]
    fn to_plot_value(self) -> f32 {
        self.to_f32().unwrap_or(f32::NAN)
    }
}

/// One element of an input column, either a single value or a per-series row.
pub trait PlotEntry {
    /// `true` when the entry carries one value per series.
    const NESTED: bool;

    /// Number of values held by this entry. Always 1 for scalars.
    fn width(&self) -> usize;

    /// The value at `index` narrowed to `f32`, or `None` when the entry is too short.
    fn value_at(&self, index: usize) -> Option<f32>;
}

macro_rules! impl_plot_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl PlotScalar for $t {}

            impl PlotEntry for $t {
                const NESTED: bool = false;

                #[inline(always)]
                fn width(&self) -> usize {
                    1
                }

                #[inline(always)]
                fn value_at(&self, index: usize) -> Option<f32> {
                    (index == 0).then(|| self.to_plot_value())
                }
            }
        )*
    };
}

impl_plot_scalar!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

macro_rules! impl_plot_row {
    ($($row:ty),* $(,)?) => {
        $(
            impl<T: PlotScalar> PlotEntry for $row {
                const NESTED: bool = true;

                #[inline]
                fn width(&self) -> usize {
                    self.len()
                }

                #[inline]
                fn value_at(&self, index: usize) -> Option<f32> {
                    self.get(index).map(|v| v.to_plot_value())
                }
            }
        )*
    };
}

impl_plot_row!(Vec<T>, &[T]);

impl<T: PlotScalar, const K: usize> PlotEntry for [T; K] {
    const NESTED: bool = true;

    #[inline]
    fn width(&self) -> usize {
        K
    }

    #[inline]
    fn value_at(&self, index: usize) -> Option<f32> {
        self.get(index).map(|v| v.to_plot_value())
    }
}

/// Narrows a flat column to storage precision.
///
/// Only valid for flat entries, which always hold exactly one value.
pub(crate) fn narrow_column<E: PlotEntry>(values: &[E]) -> Vec<f32> {
    debug_assert!(!E::NESTED, "narrow_column called on a nested column");
    values.iter().filter_map(|v| v.value_at(0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx_eq::assert_approx_eq;

    #[test]
    fn test_scalar_narrowing() {
        assert_eq!(3i32.to_plot_value(), 3.0);
        assert_eq!(250u8.to_plot_value(), 250.0);
        assert_eq!(usize::MAX.to_plot_value(), usize::MAX as f32);
        assert_approx_eq!(0.1f64.to_plot_value() as f64, 0.1, 1e-7);
        assert!(f64::NAN.to_plot_value().is_nan());
        assert_eq!(f64::MAX.to_plot_value(), f32::INFINITY);
    }

    #[test]
    fn test_shape_flags() {
        assert!(!<f64 as PlotEntry>::NESTED);
        assert!(!<u16 as PlotEntry>::NESTED);
        assert!(<Vec<f64> as PlotEntry>::NESTED);
        assert!(<[i32; 3] as PlotEntry>::NESTED);
        assert!(<&[f32] as PlotEntry>::NESTED);
    }

    #[test]
    fn test_entry_access() {
        assert_eq!(7i64.width(), 1);
        assert_eq!(7i64.value_at(0), Some(7.0));
        assert_eq!(7i64.value_at(1), None);

        let row = vec![1.5f64, 2.5];
        assert_eq!(row.width(), 2);
        assert_eq!(row.value_at(1), Some(2.5));
        assert_eq!(row.value_at(2), None);

        let arr = [4u32, 5, 6];
        assert_eq!(arr.width(), 3);
        assert_eq!(arr.value_at(2), Some(6.0));
    }

    #[test]
    fn test_narrow_column() {
        assert_eq!(narrow_column(&[1i16, -2, 3]), vec![1.0, -2.0, 3.0]);
        assert!(narrow_column::<f64>(&[]).is_empty());
    }
}
