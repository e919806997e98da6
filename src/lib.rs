//! nd_summary: seven-statistic summary tables for n-dimensional arrays
//!
//! Computes the minimum, 25th percentile, mean, standard deviation, median,
//! 75th percentile and maximum of a numeric array and renders them as an aligned text
//! table. The statistics can be taken over the whole array or along one axis, in which
//! case the table has one row per remaining position.
//!
//! ## Key Features
//!
//! - **Axis-aware reduction**: Flattened summaries or one row per index along an axis
//! - **Fixed-width rendering**: Columns line up regardless of sign or magnitude
//! - **Pluggable arrays**: Any type implementing [`Reducible`] can supply its own statistics
//! - **JSON input**: Nested lists coerce into dense `ndarray` arrays
//!
//! ## Module Organization
//!
//! - [`statistics`]: Statistical operations and axis-aware reduction
//! - [`table`]: Fixed-width text rendering
//! - [`summary`](mod@summary): The `summary` entry point and the [`Reducible`] hook
//! - [`data_source`]: Coercion of JSON input into arrays
//! - [`errors`]: Centralized error handling
//!
//! ## Usage Examples
//!
//! ```rust
//! use ndarray::array;
//! use nd_summary::prelude::*;
//!
//! let a = array![[0.0, 1.0, 2.0], [3.0, 4.0, 5.0]];
//!
//! // One row over all six elements
//! let text = summary(&a, None).unwrap();
//! assert_eq!(text.lines().count(), 2);
//!
//! // One row per column
//! let text = summary(&a, Some(0)).unwrap();
//! assert_eq!(text.lines().count(), 4);
//! ```

// Core modules
pub mod data_source;
pub mod errors;
pub mod statistics;
pub mod summary;
pub mod table;

// Direct re-exports for the public API
pub use errors::*;
pub use summary::{summary, summary_dispatcher, Reducible};
pub use table::LINE_SEPARATOR;

// High-level convenience API
pub mod prelude {
    //! Commonly used imports for convenience
    pub use crate::errors::{Result, SummaryError};
    pub use crate::statistics::{
        ReductionMode, RowLabel, StatOperation, StatisticSet, StatisticalReduction, SummaryTable,
    };
    pub use crate::summary::{summary, Reducible};
}
