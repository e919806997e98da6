//! Axis-aware reduction into summary rows
//!
//! A [`ReductionMode`] decides the shape of the result: a flattened reduction yields
//! one unlabelled row, while reducing along an axis yields one indexed row per
//! retained position.

use super::operations::{StatOperation, StatisticSet, StatisticalReduction};
use crate::errors::{Result, SummaryError};
use ndarray::{ArrayBase, Data, RemoveAxis};

/// How a summary collapses its input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReductionMode {
    /// Reduce over every element, producing a single row
    Flattened,
    /// Reduce the given axis, producing one row per remaining position
    AlongAxis(usize),
}

impl ReductionMode {
    /// Resolve an optional, possibly negative, axis against an array of `ndim` dimensions
    ///
    /// Negative axes count back from the last dimension, so `-1` names the last axis.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::InvalidAxis`] if the axis falls outside `-ndim..ndim`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nd_summary::statistics::ReductionMode;
    ///
    /// assert_eq!(ReductionMode::resolve(None, 2).unwrap(), ReductionMode::Flattened);
    /// assert_eq!(ReductionMode::resolve(Some(-1), 2).unwrap(), ReductionMode::AlongAxis(1));
    /// assert!(ReductionMode::resolve(Some(5), 2).is_err());
    /// ```
    pub fn resolve(axis: Option<isize>, ndim: usize) -> Result<Self> {
        let Some(axis) = axis else {
            return Ok(Self::Flattened);
        };

        let resolved = if axis < 0 {
            ndim.checked_sub(axis.unsigned_abs())
        } else {
            Some(axis.unsigned_abs()).filter(|&a| a < ndim)
        };

        resolved
            .map(Self::AlongAxis)
            .ok_or(SummaryError::InvalidAxis { axis, ndim })
    }
}

/// Label shown in the leading column of a summary row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLabel {
    Blank,
    Index(usize),
}

/// One line of a summary table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryRow {
    pub label: RowLabel,
    pub stats: StatisticSet,
}

/// Ordered summary rows plus the mode that produced them
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTable {
    pub mode: ReductionMode,
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    #[must_use]
    pub fn new(mode: ReductionMode, rows: Vec<SummaryRow>) -> Self {
        Self { mode, rows }
    }

    /// Number of data rows, excluding the header
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Reduce a dense array into a [`SummaryTable`]
///
/// With [`ReductionMode::Flattened`] every statistic is taken over all elements and a
/// single blank-labelled row is produced. With [`ReductionMode::AlongAxis`] each of the
/// seven statistics is reduced along the axis separately, and the seven resulting
/// arrays are zipped element-wise, in row-major order of the retained axes, into rows
/// labelled `0..R`.
///
/// # Errors
///
/// Returns an error if:
/// - The array has no elements
/// - The axis is out of bounds for the array
///
/// # Examples
///
/// ```
/// use ndarray::array;
/// use nd_summary::statistics::{reduce, ReductionMode, RowLabel};
///
/// let a = array![[0.0, 1.0, 2.0], [3.0, 4.0, 5.0]];
/// let table = reduce(&a, ReductionMode::AlongAxis(1)).unwrap();
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.rows[1].label, RowLabel::Index(1));
/// assert_eq!(table.rows[1].stats.max, 5.0);
/// ```
pub fn reduce<S, D>(a: &ArrayBase<S, D>, mode: ReductionMode) -> Result<SummaryTable>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
{
    let rows = match mode {
        ReductionMode::Flattened => {
            let values: Vec<f64> = a.iter().copied().collect();
            vec![SummaryRow {
                label: RowLabel::Blank,
                stats: StatisticSet::from_values(&values)?,
            }]
        }
        ReductionMode::AlongAxis(axis) => {
            let columns = StatOperation::ALL
                .iter()
                .map(|&operation| {
                    a.reduce_along_axis(axis, operation)
                        .map(|reduced| reduced.iter().copied().collect::<Vec<f64>>())
                })
                .collect::<Result<Vec<_>>>()?;

            let row_count = columns.first().map_or(0, Vec::len);
            (0..row_count)
                .map(|i| SummaryRow {
                    label: RowLabel::Index(i),
                    stats: StatisticSet::from_fn(|operation| columns[operation.index()][i]),
                })
                .collect()
        }
    };

    Ok(SummaryTable::new(mode, rows))
}
