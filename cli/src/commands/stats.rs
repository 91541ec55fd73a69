//! The `stats` command - summary statistics of a list of integers.

use intvec::{IntVector, Result, VectorOptions};

use crate::cli::StatsArgs;
use crate::common::input::load_vector;
use crate::common::{CliError, CliResult};

/// Summary of a non-empty vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub len: usize,
    pub sum: i32,
    pub product: i32,
    pub min: i32,
    pub max: i32,
    pub average: f64,
    pub range: i32,
}

impl Stats {
    /// Fails with an `Empty` error when `v` has no elements.
    pub fn of(v: &IntVector) -> Result<Self> {
        Ok(Stats {
            len: v.len(),
            sum: v.sum(),
            product: v.product(),
            min: v.min()?,
            max: v.max()?,
            average: v.average()?,
            range: v.range()?,
        })
    }
}

/// Run the stats command.
pub fn run(args: StatsArgs, options: VectorOptions) -> CliResult<()> {
    let (v, name) = load_vector(&args.input, options)?;
    let stats = Stats::of(&v).map_err(|e| CliError::in_input(e, &name))?;

    println!("length:  {}", stats.len);
    println!("sum:     {}", stats.sum);
    println!("product: {}", stats.product);
    println!("min:     {}", stats.min);
    println!("max:     {}", stats.max);
    println!("average: {}", stats.average);
    println!("range:   {}", stats.range);
    Ok(())
}
