// Correctness and logic
#![warn(clippy::unit_cmp)] // Detects comparing unit types
#![warn(clippy::match_same_arms)]
// Duplicate match arms

// Performance-focused
#![warn(clippy::inefficient_to_string)] // `format!("{}", x)` vs `x.to_string()`
#![warn(clippy::map_clone)] // Cloning inside `map()` unnecessarily
#![warn(clippy::unnecessary_to_owned)] // Detects redundant `.to_owned()` or `.clone()`
#![warn(clippy::needless_collect)] // Avoids `.collect().iter()` chains

// Style and idiomatic Rust
#![warn(clippy::redundant_clone)] // Detects unnecessary `.clone()`
#![warn(clippy::needless_return)] // Avoids `return` at the end of functions
#![warn(clippy::manual_map)] // Use `.map()` instead of manual `match`
#![warn(clippy::unwrap_used)] // Avoids using `unwrap()`

// Maintainability
#![warn(clippy::missing_panics_doc)] // Docs for functions that might panic
#![warn(clippy::missing_const_for_fn)] // Suggests making eligible functions `const`
#![deny(missing_docs)] // Documentation is a must for release

//! # PlotDataset
//!
//! Data containers for a graphing library: paired `(x, y)` series with the color,
//! label and plotting style a renderer needs, plus a builder that reshapes wide
//! tabular input into one container per series.
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! plot_dataset = "0.1.0"
//! ```
//!
//! ## Features
//!
//! - `serialization`: `serde` support for colors, points, plotting types and
//!   [`PlotTable`] input; data sets can be serialized but not deserialized.
//!
//! ## Error Handling
//!
//! Shape problems in multi-series input are reported as [`PlotDataError`]:
//!
//! ```rust
//! use plot_dataset::{MultiPlotDataSet, PlotDataError};
//!
//! let x: [f64; 0] = [];
//! let y = [[1.0f64, 2.0]];
//!
//! match MultiPlotDataSet::default().build(&x, &y) {
//!     Ok(sets) => println!("{} series", sets.len()),
//!     Err(PlotDataError::EmptyData(msg)) => eprintln!("nothing to plot: {msg}"),
//!     Err(other) => eprintln!("bad input: {other}"),
//! }
//! ```
//!
//! Building a single data set from columns of different length is a caller bug and
//! panics; see [`PlotDataSet::new`].
//!
//! ## Quick Start
//!
//! ### A single series
//!
//! ```rust
//! use plot_dataset::{Color, PlotDataSet, PlottingType};
//!
//! let mut temps = PlotDataSet::with_metadata(Color::RED, "temperature", PlottingType::Line);
//! for (t, value) in [(0.0f32, 21.5f32), (1.0, 21.7), (2.0, 22.1)] {
//!     temps.push_back((t, value));
//! }
//! // Keep a rolling window
//! temps.pop_front(1);
//! assert_eq!(temps.len(), 2);
//! ```
//!
//! ### Several series sharing one x axis
//!
//! ```rust
//! use plot_dataset::{Color, PlottingType, multi_plot_data_set};
//!
//! let x = [1, 2, 3];
//! let y = [[10, 20], [11, 21], [12, 22]];
//!
//! let sets = multi_plot_data_set(&x, &y, Color::BLUE, PlottingType::Points, &["a", "b"]).unwrap();
//! assert_eq!(sets.len(), 2);
//! assert_eq!(sets[0].y_values(), &[10.0, 11.0, 12.0]);
//! assert_eq!(sets[1].y_values(), &[20.0, 21.0, 22.0]);
//! ```
//!
//! ## License
//!
//! MIT License

mod color;
mod dataset;
mod error;
mod multi;
mod table;
/// Numeric ingestion and input-shape traits.
pub mod traits;

pub use crate::color::Color;
pub use crate::dataset::{DataPoint, PlotDataSet, PlottingType};
pub use crate::error::{PlotDataError, PlotResult};
pub use crate::multi::{MultiPlotDataSet, multi_plot_data_set};
pub use crate::table::PlotTable;
pub use crate::traits::{PlotEntry, PlotScalar};
