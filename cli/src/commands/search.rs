//! The `search` command - look up a value.

use intvec::VectorOptions;

use crate::cli::SearchArgs;
use crate::common::CliResult;
use crate::common::input::load_vector;

fn show(index: Option<usize>) -> String {
    index.map_or_else(|| "none".to_string(), |i| i.to_string())
}

/// Run the search command.
pub fn run(args: SearchArgs, options: VectorOptions) -> CliResult<()> {
    let (v, _name) = load_vector(&args.input, options)?;
    let value = args.value;

    println!("index_of:      {}", show(v.index_of(value)));
    println!("last_index_of: {}", show(v.last_index_of(value)));
    println!("count:         {}", v.count(value));
    println!("contains:      {}", v.contains(value));

    if args.sorted {
        if !v.as_slice().is_sorted() {
            tracing::warn!("input is not sorted; binary search result is unreliable");
        }
        println!("binary_search: {}", show(v.binary_search(value)));
    }
    Ok(())
}
