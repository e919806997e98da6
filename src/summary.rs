//! The `summary` entry point and its override hook
//!
//! Any array type can take part by implementing [`Reducible`]. The default
//! [`Reducible::summarize`] coerces to a dense `f64` array and runs the standard
//! reducer; a type with its own storage can override it and supply the table directly.

use crate::data_source::array_from_json;
use crate::errors::Result;
use crate::statistics::{reduce, ReductionMode, SummaryTable};
use ndarray::{ArrayBase, ArrayD, Data, Dimension, IxDyn};
use serde_json::Value as JsonValue;

/// Capability interface for arrays that can be summarized
pub trait Reducible {
    /// Convert into the dense representation used by the default reducer
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::Coercion`](crate::SummaryError::Coercion) if the value
    /// does not describe a numeric array.
    fn to_dense(&self) -> Result<ArrayD<f64>>;

    /// Compute the summary table, optionally reducing along `axis`
    ///
    /// # Errors
    ///
    /// Returns an error if coercion fails, the axis is out of bounds, or there are no
    /// elements to reduce.
    fn summarize(&self, axis: Option<isize>) -> Result<SummaryTable> {
        let dense = self.to_dense()?;
        let mode = ReductionMode::resolve(axis, dense.ndim())?;
        reduce(&dense, mode)
    }
}

impl<S, D> Reducible for ArrayBase<S, D>
where
    S: Data,
    S::Elem: Copy + Into<f64>,
    D: Dimension,
{
    fn to_dense(&self) -> Result<ArrayD<f64>> {
        Ok(self.mapv(Into::<f64>::into).into_dyn())
    }
}

impl<T> Reducible for [T]
where
    T: Copy + Into<f64>,
{
    fn to_dense(&self) -> Result<ArrayD<f64>> {
        let data: Vec<f64> = self.iter().map(|&x| x.into()).collect();
        Ok(ArrayD::from_shape_vec(IxDyn(&[data.len()]), data)?)
    }
}

impl<T> Reducible for Vec<T>
where
    T: Copy + Into<f64>,
{
    fn to_dense(&self) -> Result<ArrayD<f64>> {
        self.as_slice().to_dense()
    }
}

impl Reducible for JsonValue {
    fn to_dense(&self) -> Result<ArrayD<f64>> {
        array_from_json(self)
    }
}

/// Summarize `a` as an aligned text table
///
/// Without an axis, one row covers every element. With an axis, that axis is reduced
/// and one row is emitted per remaining position, labelled by its index.
///
/// # Errors
///
/// Errors from coercion or reduction propagate unchanged:
/// - [`SummaryError::Coercion`](crate::SummaryError::Coercion) if `a` is not a numeric array
/// - [`SummaryError::InvalidAxis`](crate::SummaryError::InvalidAxis) if `axis` is out of range
/// - [`SummaryError::EmptyReduction`](crate::SummaryError::EmptyReduction) if `a` has no elements
///
/// # Examples
///
/// ```
/// use ndarray::array;
/// use nd_summary::summary;
///
/// let a = array![[0.0, 1.0, 2.0], [3.0, 4.0, 5.0]];
/// let text = summary(&a, Some(1)).unwrap();
/// assert_eq!(text.lines().count(), 3);
/// assert!(text.lines().nth(2).unwrap().starts_with("1   "));
/// ```
pub fn summary<A>(a: &A, axis: Option<isize>) -> Result<String>
where
    A: Reducible + ?Sized,
{
    Ok(a.summarize(axis)?.render())
}

/// Arguments an override mechanism inspects when deciding who handles a `summary` call
///
/// Only the array takes part in dispatch; the axis is ignored.
pub fn summary_dispatcher<A>(a: &A, _axis: Option<isize>) -> (&A,)
where
    A: ?Sized,
{
    (a,)
}
