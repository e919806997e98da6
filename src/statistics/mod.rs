//! Statistical computations and axis-aware reductions
//!
//! This module computes the seven summary statistics (min, 25th percentile, mean,
//! standard deviation, median, 75th percentile, max) over whole arrays or along an axis.
//!
//! # Organization
//!
//! This module is organized into submodules:
//! - [`operations`]: The statistics themselves and the per-axis reduction trait
//! - [`reduction`]: Flattened vs. per-axis reduction into summary rows

pub mod operations;
pub mod reduction;

// Re-export the main types and functions for convenience
pub use operations::{percentile_of_sorted, StatOperation, StatisticSet, StatisticalReduction};
pub use reduction::{reduce, ReductionMode, RowLabel, SummaryRow, SummaryTable};
