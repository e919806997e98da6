//! Centralized error handling for nd_summary
//!
//! Every failure a summary can hit surfaces as a [`SummaryError`]. The reducer and
//! renderer never wrap or translate these; they reach the caller exactly as raised.

use crate::statistics::StatOperation;
use std::fmt;

/// Main error type for nd_summary operations
#[derive(Debug)]
pub enum SummaryError {
    /// A statistic was requested over zero elements
    EmptyReduction { operation: StatOperation },

    /// Axis does not index a dimension of the array
    InvalidAxis { axis: isize, ndim: usize },

    /// Percentile level outside 0..=100
    InvalidPercentile { q: f64 },

    /// Input could not be converted into a numeric array
    Coercion { message: String },

    /// Array shape or dimension error
    ArrayError(ndarray::ShapeError),

    /// Malformed JSON input
    Json(serde_json::Error),

    /// I/O operation errors
    IoError(std::io::Error),
}

impl fmt::Display for SummaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryError::EmptyReduction { operation } => write!(
                f,
                "zero-size array to reduction operation {} which has no identity",
                operation.as_str()
            ),
            SummaryError::InvalidAxis { axis, ndim } => write!(
                f,
                "axis {} is out of bounds for array of dimension {}",
                axis, ndim
            ),
            SummaryError::InvalidPercentile { q } => {
                write!(f, "Percentiles must be in the range [0, 100], got {}", q)
            }
            SummaryError::Coercion { message } => {
                write!(f, "Cannot convert input to a numeric array: {}", message)
            }
            SummaryError::ArrayError(e) => write!(f, "Array error: {}", e),
            SummaryError::Json(e) => write!(f, "JSON error: {}", e),
            SummaryError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for SummaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SummaryError::ArrayError(e) => Some(e),
            SummaryError::Json(e) => Some(e),
            SummaryError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ndarray::ShapeError> for SummaryError {
    fn from(error: ndarray::ShapeError) -> Self {
        SummaryError::ArrayError(error)
    }
}

impl From<serde_json::Error> for SummaryError {
    fn from(error: serde_json::Error) -> Self {
        SummaryError::Json(error)
    }
}

impl From<std::io::Error> for SummaryError {
    fn from(error: std::io::Error) -> Self {
        SummaryError::IoError(error)
    }
}

/// Result type alias for nd_summary operations
pub type Result<T> = std::result::Result<T, SummaryError>;
