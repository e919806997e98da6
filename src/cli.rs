//! Defines command-line interface options using `clap` for the nd_summary application.

use clap::Parser;
use std::path::PathBuf;

/// Print a table of summary statistics for a JSON array
#[derive(Parser, Debug)]
#[command(
    version = "1.1.0",
    name = "nd_summary",
    about = "Summary statistics (min, quartiles, mean, stdev, max) for n-dimensional arrays"
)]
pub struct Args {
    /// Path to a JSON file holding a (nested) list of numbers. Reads stdin if not set.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Axis to reduce; one row is printed per remaining position. Negative values count from the end.
    #[arg(short, long, allow_negative_numbers = true)]
    pub axis: Option<isize>,

    /// Enable verbose output.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
