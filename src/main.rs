//! Entry point for the nd_summary application.
//! Handles CLI parsing, loads the input array and prints its summary table.

use clap::Parser;
use nd_summary::data_source::{load_json_array, read_json_array};
use nd_summary::statistics::ReductionMode;
use nd_summary::summary;
use std::io;

mod cli;

use cli::Args;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args = Args::parse();

    let array = match &args.file {
        Some(path) => {
            let array = load_json_array(path)?;
            if args.verbose {
                println!("Loaded array from {}", path.display());
            }
            array
        }
        None => {
            let array = read_json_array(io::stdin().lock())?;
            if args.verbose {
                println!("Loaded array from standard input");
            }
            array
        }
    };

    if args.verbose {
        println!("Shape: {:?} ({} elements)", array.shape(), array.len());
        match ReductionMode::resolve(args.axis, array.ndim())? {
            ReductionMode::Flattened => println!("Reducing over all elements"),
            ReductionMode::AlongAxis(axis) => println!("Reducing along axis {}", axis),
        }
    }

    println!("{}", summary(&array, args.axis)?);

    Ok(())
}
