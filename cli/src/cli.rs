//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use intvec::{DEFAULT_CAPACITY, GROW_FACTOR};

/// IntVec - a growable vector of integers, driven from the shell
#[derive(Parser, Debug)]
#[command(name = "intvec", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Capacity allocated by a fresh vector
    #[arg(long, global = true, value_name = "N", default_value_t = DEFAULT_CAPACITY)]
    pub default_capacity: usize,

    /// Factor by which a full vector multiplies its capacity
    #[arg(long, global = true, value_name = "N", default_value_t = GROW_FACTOR)]
    pub grow_factor: usize,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build 0..9 and walk through the basic operations
    Demo,

    /// Print summary statistics of a list of integers
    Stats(StatsArgs),

    /// Apply a pipeline of transformations and print the result
    Transform(TransformArgs),

    /// Look up a value
    Search(SearchArgs),

    /// Show length, capacity, and elements
    Inspect(InspectArgs),
}

/// Arguments for the `stats` command.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// File of integers separated by whitespace or commas ("-" for stdin)
    #[arg(default_value = "-")]
    pub input: String,
}

/// Arguments for the `transform` command.
///
/// Steps run in declaration order, whatever order the flags are given in.
#[derive(Args, Debug)]
pub struct TransformArgs {
    /// File of integers separated by whitespace or commas ("-" for stdin)
    #[arg(default_value = "-")]
    pub input: String,

    /// Remove elements matching a predicate, in place
    #[arg(long, value_name = "PREDICATE")]
    pub remove_if: Option<String>,

    /// Keep only elements matching a predicate
    #[arg(long, value_name = "PREDICATE")]
    pub filter: Option<String>,

    /// Apply a function to every element
    #[arg(long, value_name = "FUNCTION")]
    pub map: Option<String>,

    /// Reverse the order of the elements
    #[arg(long)]
    pub reverse: bool,

    /// Drop the first N elements
    #[arg(long, value_name = "N")]
    pub skip: Option<usize>,

    /// Keep at most N elements
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

/// Arguments for the `search` command.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Value to look for
    #[arg(allow_negative_numbers = true)]
    pub value: i32,

    /// File of integers separated by whitespace or commas ("-" for stdin)
    #[arg(default_value = "-")]
    pub input: String,

    /// Input is sorted ascending; also run a binary search
    #[arg(long)]
    pub sorted: bool,
}

/// Arguments for the `inspect` command.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// File of integers separated by whitespace or commas ("-" for stdin)
    #[arg(default_value = "-")]
    pub input: String,

    /// Shrink the capacity to the length before printing
    #[arg(long)]
    pub trim: bool,
}
