//! End-to-end tests for `summary`, the `Reducible` hook, JSON loading and the CLI binary

use ndarray::{array, Array1, Array2, ArrayD, IxDyn};
use nd_summary::{
    data_source::{array_from_json, load_json_array, read_json_array},
    errors::{Result, SummaryError},
    statistics::{ReductionMode, RowLabel, StatisticSet, SummaryRow, SummaryTable},
    summary, summary_dispatcher, Reducible, LINE_SEPARATOR,
};
use serde_json::json;
use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::tempdir;

fn lines(text: &str) -> Vec<&str> {
    text.split(LINE_SEPARATOR).collect()
}

/// Parse the seven numeric fields of a data line
fn row_values(line: &str) -> Vec<f64> {
    let fields: Vec<&str> = line[4..].split_whitespace().collect();
    assert_eq!(fields.len(), 7, "malformed row: {line:?}");
    fields
        .iter()
        .map(|field| field.parse().expect("numeric field"))
        .collect()
}

#[test]
fn test_one_dimensional_summary() -> Result<()> {
    let a = Array1::from(vec![3.0, -1.5, 8.25, 0.0, 2.0]);
    let text = summary(&a, None)?;
    let lines = lines(&text);

    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("min"));
    assert!(lines[0].ends_with("max"));
    assert!(lines[1].starts_with("    "));
    assert_eq!(lines[1].len(), 81);

    Ok(())
}

#[test]
fn test_flattened_summary_of_matrix() -> Result<()> {
    let a = array![[0.0, 1.0, 2.0], [3.0, 4.0, 5.0]];
    let text = summary(&a, None)?;

    let expected = [
        concat!(
            "    ",
            "        min",
            "     25perc",
            "       mean",
            "      stdev",
            "     median",
            "     75perc",
            "        max",
        ),
        concat!(
            "    ",
            "   0.000000",
            "   1.250000",
            "   2.500000",
            "   1.707825",
            "   2.500000",
            "   3.750000",
            "   5.000000",
        ),
    ]
    .join(LINE_SEPARATOR);
    assert_eq!(text, expected);

    Ok(())
}

#[test]
fn test_summary_along_axis_one() -> Result<()> {
    let a = array![[0.0, 1.0, 2.0], [3.0, 4.0, 5.0]];
    let text = summary(&a, Some(1))?;
    let lines = lines(&text);

    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[1],
        concat!(
            "0   ",
            "   0.000000",
            "   0.500000",
            "   1.000000",
            "   0.816497",
            "   1.000000",
            "   1.500000",
            "   2.000000",
        )
    );
    assert_eq!(
        lines[2],
        concat!(
            "1   ",
            "   3.000000",
            "   3.500000",
            "   4.000000",
            "   0.816497",
            "   4.000000",
            "   4.500000",
            "   5.000000",
        )
    );

    Ok(())
}

#[test]
fn test_row_count_follows_retained_axis() -> Result<()> {
    let (rows, cols) = (5, 3);
    let data: Vec<f64> = (0..rows * cols).map(|i| f64::from(i as u32) * 0.5).collect();
    let a = Array2::from_shape_vec((rows, cols), data)?;

    let by_row = summary(&a, Some(1))?;
    let by_row = lines(&by_row);
    assert_eq!(by_row.len(), rows + 1);
    for (i, line) in by_row[1..].iter().enumerate() {
        assert_eq!(line[..4].trim(), i.to_string());
    }

    let by_column = summary(&a, Some(0))?;
    let by_column = lines(&by_column);
    assert_eq!(by_column.len(), cols + 1);
    for (i, line) in by_column[1..].iter().enumerate() {
        assert_eq!(line[..4].trim(), i.to_string());
    }

    Ok(())
}

#[test]
fn test_negative_axis_matches_positive() -> Result<()> {
    let a = array![[1.0, 9.0, 4.0], [7.0, 2.0, 6.0]];
    assert_eq!(summary(&a, Some(-1))?, summary(&a, Some(1))?);
    assert_eq!(summary(&a, Some(-2))?, summary(&a, Some(0))?);
    Ok(())
}

#[test]
fn test_summary_is_repeatable() -> Result<()> {
    let a = array![[0.3, -7.1, 2.2, 9.9], [4.4, 4.4, -0.5, 1.0]];
    assert_eq!(summary(&a, None)?, summary(&a, None)?);
    assert_eq!(summary(&a, Some(0))?, summary(&a, Some(0))?);
    Ok(())
}

#[test]
fn test_order_statistics_are_monotone() -> Result<()> {
    let data: Vec<f64> = (0..60)
        .map(|i| (f64::from(i) * 1.7).sin() * 100.0 + f64::from(i % 7))
        .collect();
    let a = ArrayD::from_shape_vec(IxDyn(&[4, 15]), data)?;

    for axis in [None, Some(0), Some(1)] {
        let text = summary(&a, axis)?;
        for line in &lines(&text)[1..] {
            let v = row_values(line);
            let (min, p25, median, p75, max) = (v[0], v[1], v[4], v[5], v[6]);
            assert!(min <= p25, "{line}");
            assert!(p25 <= median, "{line}");
            assert!(median <= p75, "{line}");
            assert!(p75 <= max, "{line}");
        }
    }

    Ok(())
}

#[test]
fn test_invalid_axis_is_reported() {
    let a = array![[0.0, 1.0], [2.0, 3.0]];
    match summary(&a, Some(5)) {
        Err(SummaryError::InvalidAxis { axis, ndim }) => {
            assert_eq!(axis, 5);
            assert_eq!(ndim, 2);
        }
        other => panic!("Expected InvalidAxis error, got {:?}", other),
    }
    assert!(summary(&a, Some(-3)).is_err());
}

#[test]
fn test_empty_array_is_reported() {
    let a = Array2::<f64>::zeros((3, 0));
    for axis in [None, Some(0), Some(1)] {
        match summary(&a, axis) {
            Err(SummaryError::EmptyReduction { .. }) => {}
            other => panic!("Expected EmptyReduction error, got {:?}", other),
        }
    }

    let empty: Vec<f64> = Vec::new();
    assert!(matches!(
        summary(&empty, None),
        Err(SummaryError::EmptyReduction { .. })
    ));
}

#[test]
fn test_non_finite_values_render_in_place() -> Result<()> {
    let text = summary(&vec![1.0, f64::NAN, 3.0], None)?;
    let data_line = lines(&text)[1];
    assert_eq!(data_line.matches("       nan").count(), 7);
    assert_eq!(data_line.len(), 81);
    Ok(())
}

#[test]
fn test_large_magnitudes_widen_fields() -> Result<()> {
    let text = summary(&vec![1e12, -1e12], None)?;
    let data_line = lines(&text)[1];
    assert!(data_line.contains("1000000000000.000000"));
    assert!(data_line.contains("-1000000000000.000000"));
    assert!(data_line.len() > 81);
    Ok(())
}

#[test]
fn test_other_element_types() -> Result<()> {
    let ints = vec![4_i32, 1, 3, 2];
    let floats = vec![4.0_f32, 1.0, 3.0, 2.0];
    let doubles = vec![4.0_f64, 1.0, 3.0, 2.0];

    let expected = summary(&doubles, None)?;
    assert_eq!(summary(&ints, None)?, expected);
    assert_eq!(summary(&floats, None)?, expected);
    assert_eq!(summary(ints.as_slice(), None)?, expected);
    assert_eq!(summary(&array![[4_u8, 1], [3, 2]], None)?, expected);

    Ok(())
}

#[test]
fn test_summary_of_array_views() -> Result<()> {
    let a = array![[0.0, 1.0, 2.0], [3.0, 4.0, 5.0]];
    assert_eq!(summary(&a.view(), Some(1))?, summary(&a, Some(1))?);
    assert_eq!(summary(&a.t(), Some(0))?, summary(&a, Some(1))?);
    Ok(())
}

/// Array type that supplies its own statistics instead of the dense path
struct Precomputed;

impl Reducible for Precomputed {
    fn to_dense(&self) -> Result<ArrayD<f64>> {
        Err(SummaryError::Coercion {
            message: "precomputed summaries have no dense form".to_string(),
        })
    }

    fn summarize(&self, _axis: Option<isize>) -> Result<SummaryTable> {
        let stats = StatisticSet::from_fn(|op| op.index() as f64 * 10.0);
        Ok(SummaryTable::new(
            ReductionMode::Flattened,
            vec![SummaryRow {
                label: RowLabel::Blank,
                stats,
            }],
        ))
    }
}

#[test]
fn test_reducible_override_replaces_computation() -> Result<()> {
    let text = summary(&Precomputed, Some(42))?;
    let lines = lines(&text);
    assert_eq!(lines.len(), 2);
    assert_eq!(
        row_values(lines[1]),
        vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0]
    );

    // The default path would have tried to coerce and failed
    assert!(Precomputed.to_dense().is_err());
    Ok(())
}

#[test]
fn test_dispatcher_returns_only_the_array() {
    let a = vec![1.0, 2.0];
    let (key,) = summary_dispatcher(&a, Some(0));
    assert!(std::ptr::eq(key, &a));
}

#[test]
fn test_json_coercion() -> Result<()> {
    let matrix = array_from_json(&json!([[0, 1, 2], [3, 4, 5]]))?;
    assert_eq!(matrix.shape(), &[2, 3]);
    assert_eq!(matrix[[1, 2]], 5.0);

    let scalar = array_from_json(&json!(2.5))?;
    assert_eq!(scalar.ndim(), 0);
    assert_eq!(scalar.len(), 1);

    let empty = array_from_json(&json!([[], []]))?;
    assert_eq!(empty.shape(), &[2, 0]);

    for bad in [
        json!([[0, 1], [2]]),
        json!([1, [2]]),
        json!([[1, 2], 3]),
        json!(["a", "b"]),
        json!({"data": [1, 2]}),
        json!(null),
    ] {
        match array_from_json(&bad) {
            Err(SummaryError::Coercion { .. }) => {}
            other => panic!("Expected Coercion error for {}, got {:?}", bad, other),
        }
    }

    Ok(())
}

#[test]
fn test_deeply_nested_ragged_json_is_rejected() {
    // Each level holds the next level first, followed by numbers: the first-element
    // shape is 10^20 elements, far beyond what could ever be allocated.
    let mut value = json!(1);
    for _ in 0..20 {
        let mut items = vec![value];
        items.extend(std::iter::repeat(json!(1)).take(9));
        value = serde_json::Value::Array(items);
    }

    match array_from_json(&value) {
        Err(SummaryError::Coercion { .. }) => {}
        other => panic!("Expected Coercion error, got {:?}", other),
    }
    assert!(matches!(
        summary(&value, None),
        Err(SummaryError::Coercion { .. })
    ));
}

#[test]
fn test_summary_of_json_value() -> Result<()> {
    let value = json!([[0, 1, 2], [3, 4, 5]]);
    let a = array![[0.0, 1.0, 2.0], [3.0, 4.0, 5.0]];
    assert_eq!(summary(&value, None)?, summary(&a, None)?);
    assert_eq!(summary(&value, Some(0))?, summary(&a, Some(0))?);

    assert!(matches!(
        summary(&json!([[1], [2, 3]]), None),
        Err(SummaryError::Coercion { .. })
    ));
    assert!(matches!(
        summary(&json!([]), None),
        Err(SummaryError::EmptyReduction { .. })
    ));

    Ok(())
}

#[test]
fn test_json_loading() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("matrix.json");
    fs::write(&file_path, "[[1.5, 2.5], [3.5, 4.5], [5.5, 6.5]]")?;

    let loaded = load_json_array(&file_path)?;
    assert_eq!(loaded.shape(), &[3, 2]);
    assert_eq!(loaded[[2, 0]], 5.5);

    let from_reader = read_json_array("[1, 2, 3]".as_bytes())?;
    assert_eq!(from_reader.shape(), &[3]);

    assert!(matches!(
        read_json_array("[1, 2".as_bytes()),
        Err(SummaryError::Json(_))
    ));
    assert!(matches!(
        load_json_array(temp_dir.path().join("missing.json")),
        Err(SummaryError::IoError(_))
    ));

    Ok(())
}

#[test]
fn test_cli_prints_summary() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("input.json");
    fs::write(&file_path, "[[0, 1, 2], [3, 4, 5]]")?;

    let output = Command::new(env!("CARGO_BIN_EXE_nd_summary"))
        .arg("--file")
        .arg(&file_path)
        .args(["--axis", "-1"])
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = summary(&array![[0.0, 1.0, 2.0], [3.0, 4.0, 5.0]], Some(1))?;
    assert_eq!(stdout.trim_end(), expected);

    Ok(())
}

#[test]
fn test_cli_reports_errors() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("input.json");
    fs::write(&file_path, "[1, 2, 3]")?;

    let output = Command::new(env!("CARGO_BIN_EXE_nd_summary"))
        .arg("--file")
        .arg(&file_path)
        .args(["--axis", "5"])
        .output()?;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("InvalidAxis"), "{stderr}");

    Ok(())
}

#[test]
fn test_cli_reads_stdin_verbosely() -> Result<()> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_nd_summary"))
        .arg("--verbose")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(b"[4, 1, 3, 2]")?;
    let output = child.wait_with_output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Loaded array from standard input"));
    assert!(stdout.contains("Shape: [4] (4 elements)"));
    assert!(stdout.contains("Reducing over all elements"));
    assert!(stdout.trim_end().ends_with(&summary(&vec![4.0, 1.0, 3.0, 2.0], None)?));

    Ok(())
}
