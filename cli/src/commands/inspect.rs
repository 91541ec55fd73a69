//! The `inspect` command - show a vector's storage.

use intvec::VectorOptions;

use crate::cli::InspectArgs;
use crate::common::input::load_vector;
use crate::common::{CliError, CliResult};

/// Run the inspect command.
pub fn run(args: InspectArgs, options: VectorOptions) -> CliResult<()> {
    let (mut v, name) = load_vector(&args.input, options)?;
    if args.trim {
        v.trim_to_size().map_err(|e| CliError::in_input(e, &name))?;
    }

    println!("Vector Debug Info:");
    println!("  Length  : {}", v.len());
    println!("  Capacity: {}", v.capacity());
    println!("  Values  : {v}");
    Ok(())
}
