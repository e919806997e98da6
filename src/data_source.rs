//! Coercion of array-like input into dense arrays
//!
//! Nested JSON lists are the interchange format: the nesting depth gives the number of
//! dimensions and every level must be rectangular.

use crate::errors::{Result, SummaryError};
use ndarray::{ArrayD, IxDyn};
use serde_json::Value as JsonValue;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Convert a JSON number or nested list of numbers into an n-dimensional array
///
/// # Errors
///
/// Returns [`SummaryError::Coercion`] for ragged nesting, non-numeric leaves, or
/// top-level values that are neither numbers nor lists.
///
/// # Examples
///
/// ```
/// use nd_summary::data_source::array_from_json;
/// use serde_json::json;
///
/// let array = array_from_json(&json!([[0, 1, 2], [3, 4, 5]])).unwrap();
/// assert_eq!(array.shape(), &[2, 3]);
/// assert!(array_from_json(&json!([[0, 1], [2]])).is_err());
/// ```
pub fn array_from_json(value: &JsonValue) -> Result<ArrayD<f64>> {
    let shape = infer_shape(value);
    // The shape only describes the first element at each level; it is not trusted
    // until flatten_into has checked every level against it.
    let mut data = Vec::new();
    flatten_into(value, &shape, &mut data)?;
    Ok(ArrayD::from_shape_vec(IxDyn(&shape), data)?)
}

/// Shape implied by following the first element at each nesting level
fn infer_shape(value: &JsonValue) -> Vec<usize> {
    let mut shape = Vec::new();
    let mut current = value;
    while let JsonValue::Array(items) = current {
        shape.push(items.len());
        match items.first() {
            Some(first) => current = first,
            None => break,
        }
    }
    shape
}

fn flatten_into(value: &JsonValue, shape: &[usize], data: &mut Vec<f64>) -> Result<()> {
    match (value, shape.split_first()) {
        (JsonValue::Array(items), Some((&len, rest))) => {
            if items.len() != len {
                return Err(SummaryError::Coercion {
                    message: format!(
                        "inhomogeneous shape: expected {} elements, found {}",
                        len,
                        items.len()
                    ),
                });
            }
            items
                .iter()
                .try_for_each(|item| flatten_into(item, rest, data))
        }
        (JsonValue::Array(_), None) => Err(SummaryError::Coercion {
            message: "inhomogeneous shape: list found where a number was expected".to_string(),
        }),
        (JsonValue::Number(n), None) => {
            let x = n.as_f64().ok_or_else(|| SummaryError::Coercion {
                message: format!("number {} is not representable as f64", n),
            })?;
            data.push(x);
            Ok(())
        }
        (JsonValue::Number(_), Some(_)) => Err(SummaryError::Coercion {
            message: "inhomogeneous shape: number found where a list was expected".to_string(),
        }),
        (other, _) => Err(SummaryError::Coercion {
            message: format!("unsupported element {}", other),
        }),
    }
}

/// Parse JSON text from `reader` and coerce it into an array
///
/// # Errors
///
/// Returns an error if reading fails, the text is not valid JSON, or the value cannot
/// be coerced.
pub fn read_json_array<R: Read>(reader: R) -> Result<ArrayD<f64>> {
    let value: JsonValue = serde_json::from_reader(reader)?;
    array_from_json(&value)
}

/// Load a JSON array from a file
///
/// # Errors
///
/// Returns an error if the file cannot be opened or its contents cannot be coerced.
pub fn load_json_array<P: AsRef<Path>>(path: P) -> Result<ArrayD<f64>> {
    let file = File::open(path)?;
    read_json_array(BufReader::new(file))
}
