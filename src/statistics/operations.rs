//! Core statistical operations and traits
//!
//! This module defines the seven summary statistics, the per-unit [`StatisticSet`] they
//! fill in, and the [`StatisticalReduction`] trait that evaluates one statistic either
//! over a whole array or along a single axis.

use crate::errors::{Result, SummaryError};
use ndarray::{ArrayBase, ArrayD, Axis, Data, RemoveAxis};

/// Supported statistical operations, in table column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatOperation {
    /// Smallest value
    Min,
    /// 25th percentile
    P25,
    /// Arithmetic mean
    Mean,
    /// Population standard deviation (divides by N)
    Stdev,
    /// 50th percentile
    Median,
    /// 75th percentile
    P75,
    /// Largest value
    Max,
}

impl StatOperation {
    /// All operations in the order they appear in a summary row
    pub const ALL: [StatOperation; 7] = [
        Self::Min,
        Self::P25,
        Self::Mean,
        Self::Stdev,
        Self::Median,
        Self::P75,
        Self::Max,
    ];

    /// Get the string representation of the operation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Min => "minimum",
            Self::P25 => "percentile",
            Self::Mean => "mean",
            Self::Stdev => "std",
            Self::Median => "median",
            Self::P75 => "percentile",
            Self::Max => "maximum",
        }
    }

    /// Column header used by the summary table
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::P25 => "25perc",
            Self::Mean => "mean",
            Self::Stdev => "stdev",
            Self::Median => "median",
            Self::P75 => "75perc",
            Self::Max => "max",
        }
    }

    /// Position of the operation within [`StatOperation::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Min => 0,
            Self::P25 => 1,
            Self::Mean => 2,
            Self::Stdev => 3,
            Self::Median => 4,
            Self::P75 => 5,
            Self::Max => 6,
        }
    }

    /// Evaluate the operation over a set of values
    ///
    /// Any NaN in `values` makes the result NaN.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::EmptyReduction`] if `values` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use nd_summary::statistics::StatOperation;
    ///
    /// let values = [1.0, 2.0, 3.0, 4.0];
    /// assert_eq!(StatOperation::Median.compute(&values).unwrap(), 2.5);
    /// assert_eq!(StatOperation::P25.compute(&values).unwrap(), 1.75);
    /// ```
    pub fn compute(self, values: &[f64]) -> Result<f64> {
        if values.is_empty() {
            return Err(SummaryError::EmptyReduction { operation: self });
        }
        Ok(self.evaluate(values))
    }

    /// Caller guarantees `values` is non-empty
    fn evaluate(self, values: &[f64]) -> f64 {
        match self {
            Self::Min => values.iter().copied().fold(f64::INFINITY, nan_min),
            Self::Max => values.iter().copied().fold(f64::NEG_INFINITY, nan_max),
            Self::Mean => mean(values),
            Self::Stdev => population_std(values),
            Self::P25 => percentile(values, 25.0),
            Self::Median => percentile(values, 50.0),
            Self::P75 => percentile(values, 75.0),
        }
    }
}

fn nan_min(acc: f64, x: f64) -> f64 {
    if acc.is_nan() || x.is_nan() {
        f64::NAN
    } else {
        acc.min(x)
    }
}

fn nan_max(acc: f64, x: f64) -> f64 {
    if acc.is_nan() || x.is_nan() {
        f64::NAN
    } else {
        acc.max(x)
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

#[allow(clippy::cast_precision_loss)]
fn population_std(values: &[f64]) -> f64 {
    let mean = mean(values);
    let variance = values.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

fn percentile(values: &[f64], q: f64) -> f64 {
    sorted_without_nan(values).map_or(f64::NAN, |sorted| interpolate_sorted(&sorted, q))
}

/// Ascending copy of `values`, or `None` if any value is NaN
fn sorted_without_nan(values: &[f64]) -> Option<Vec<f64>> {
    if values.iter().any(|x| x.is_nan()) {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Some(sorted)
}

/// Computes the `q`-th percentile (0 to 100) of ascending data.
///
/// Interpolates linearly between the two closest ranks: the target rank is
/// `(n - 1) * q / 100`, and the fractional part weights the upper neighbour.
///
/// # Errors
///
/// Returns an error if:
/// - `sorted` is empty
/// - `q` is NaN or outside `0..=100`
///
/// # Examples
///
/// ```
/// use nd_summary::statistics::percentile_of_sorted;
///
/// let sorted = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(percentile_of_sorted(&sorted, 25.0).unwrap(), 1.25);
/// assert_eq!(percentile_of_sorted(&sorted, 100.0).unwrap(), 5.0);
/// assert!(percentile_of_sorted(&sorted, -50.0).is_err());
/// ```
pub fn percentile_of_sorted(sorted: &[f64], q: f64) -> Result<f64> {
    if !(0.0..=100.0).contains(&q) {
        return Err(SummaryError::InvalidPercentile { q });
    }
    if sorted.is_empty() {
        return Err(SummaryError::EmptyReduction {
            operation: StatOperation::P25,
        });
    }
    Ok(interpolate_sorted(sorted, q))
}

/// Caller guarantees `sorted` is non-empty and `q` lies in `0..=100`
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn interpolate_sorted(sorted: &[f64], q: f64) -> f64 {
    let last = sorted.len() - 1;
    let rank = last as f64 * q / 100.0;
    let lower = (rank.floor() as usize).min(last);
    let upper = (lower + 1).min(last);
    let fraction = rank - lower as f64;
    if fraction == 0.0 {
        sorted[lower]
    } else {
        sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
    }
}

/// The seven summary statistics for one reduction unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatisticSet {
    pub min: f64,
    pub p25: f64,
    pub mean: f64,
    pub stdev: f64,
    pub median: f64,
    pub p75: f64,
    pub max: f64,
}

impl StatisticSet {
    /// Build a set by evaluating `f` once per operation
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(StatOperation) -> f64,
    {
        Self {
            min: f(StatOperation::Min),
            p25: f(StatOperation::P25),
            mean: f(StatOperation::Mean),
            stdev: f(StatOperation::Stdev),
            median: f(StatOperation::Median),
            p75: f(StatOperation::P75),
            max: f(StatOperation::Max),
        }
    }

    /// Compute every statistic over `values`
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::EmptyReduction`] if `values` is empty.
    pub fn from_values(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(SummaryError::EmptyReduction {
                operation: StatOperation::Min,
            });
        }
        // Sort once for all three order statistics
        let sorted = sorted_without_nan(values);
        let quantile =
            |q: f64| sorted.as_deref().map_or(f64::NAN, |sorted| interpolate_sorted(sorted, q));

        Ok(Self {
            min: StatOperation::Min.evaluate(values),
            p25: quantile(25.0),
            mean: StatOperation::Mean.evaluate(values),
            stdev: StatOperation::Stdev.evaluate(values),
            median: quantile(50.0),
            p75: quantile(75.0),
            max: StatOperation::Max.evaluate(values),
        })
    }

    #[must_use]
    pub const fn get(&self, operation: StatOperation) -> f64 {
        match operation {
            StatOperation::Min => self.min,
            StatOperation::P25 => self.p25,
            StatOperation::Mean => self.mean,
            StatOperation::Stdev => self.stdev,
            StatOperation::Median => self.median,
            StatOperation::P75 => self.p75,
            StatOperation::Max => self.max,
        }
    }

    /// Values in column order
    #[must_use]
    pub const fn to_array(&self) -> [f64; 7] {
        [
            self.min, self.p25, self.mean, self.stdev, self.median, self.p75, self.max,
        ]
    }
}

/// Trait for arrays that can evaluate a statistic over all elements or along an axis
pub trait StatisticalReduction {
    /// Evaluate `operation` over every element, as if the array were flattened
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::EmptyReduction`] if the array has no elements.
    fn reduce_all(&self, operation: StatOperation) -> Result<f64>;

    /// Evaluate `operation` along `axis`, removing that axis from the result
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The axis is out of bounds for the array
    /// - The array has no elements
    fn reduce_along_axis(&self, axis: usize, operation: StatOperation) -> Result<ArrayD<f64>>;
}

impl<S, D> StatisticalReduction for ArrayBase<S, D>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
{
    fn reduce_all(&self, operation: StatOperation) -> Result<f64> {
        let values: Vec<f64> = self.iter().copied().collect();
        operation.compute(&values)
    }

    fn reduce_along_axis(&self, axis: usize, operation: StatOperation) -> Result<ArrayD<f64>> {
        if axis >= self.ndim() {
            return Err(SummaryError::InvalidAxis {
                axis: isize::try_from(axis).unwrap_or(isize::MAX),
                ndim: self.ndim(),
            });
        }
        if self.is_empty() {
            return Err(SummaryError::EmptyReduction { operation });
        }

        let result = self.map_axis(Axis(axis), |lane| {
            let values: Vec<f64> = lane.iter().copied().collect();
            operation.evaluate(&values)
        });
        Ok(result.into_dyn())
    }
}
