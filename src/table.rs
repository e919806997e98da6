//! Fixed-width text rendering of summary tables
//!
//! Every line is a 4-character label field followed by seven 10-character value
//! fields, each preceded by a single space. Values use fixed-point notation with six
//! decimals. A value too wide for its field widens the field instead of being cut.

use crate::statistics::{RowLabel, StatOperation, SummaryRow, SummaryTable};
use std::fmt;

/// Line separator of the host platform
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
/// Line separator of the host platform
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

const LABEL_WIDTH: usize = 4;
const FIELD_WIDTH: usize = 10;
const PRECISION: usize = 6;

/// The header line shared by every summary
///
/// # Examples
///
/// ```
/// let header = nd_summary::table::header_line();
/// assert!(header.starts_with("     "));
/// assert!(header.ends_with("max"));
/// ```
#[must_use]
pub fn header_line() -> String {
    let mut line = format!("{:LABEL_WIDTH$}", "");
    for operation in StatOperation::ALL {
        line.push_str(&format!(" {:>FIELD_WIDTH$}", operation.label()));
    }
    line
}

/// Render one data row
#[must_use]
pub fn format_row(row: &SummaryRow) -> String {
    let mut line = match row.label {
        RowLabel::Blank => format!("{:LABEL_WIDTH$}", ""),
        RowLabel::Index(i) => format!("{:<LABEL_WIDTH$}", i),
    };
    for value in row.stats.to_array() {
        line.push(' ');
        line.push_str(&format_value(value));
    }
    line
}

/// Right-justified fixed-point rendering of one statistic
///
/// Non-finite values print as `nan`, `inf` and `-inf`.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        format!("{:>FIELD_WIDTH$}", "nan")
    } else if value.is_infinite() {
        let text = if value > 0.0 { "inf" } else { "-inf" };
        format!("{:>FIELD_WIDTH$}", text)
    } else {
        format!("{:>FIELD_WIDTH$.PRECISION$}", value)
    }
}

impl SummaryTable {
    /// Render the header and every row, joined by [`LINE_SEPARATOR`]
    ///
    /// No separator follows the last line.
    #[must_use]
    pub fn render(&self) -> String {
        std::iter::once(header_line())
            .chain(self.rows.iter().map(format_row))
            .collect::<Vec<_>>()
            .join(LINE_SEPARATOR)
    }
}

impl fmt::Display for SummaryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
