//! The `demo` command - build 0..9 and walk through the basics.

use std::io::Write;

use intvec::functional::{is_even, print_element, square};
use intvec::{IntVector, VectorOptions};

use crate::common::CliResult;

/// Run the demo command.
pub fn run(options: VectorOptions) -> CliResult<()> {
    let mut v = IntVector::with_options(options)?;
    for i in 0..10 {
        v.add(i)?;
    }

    println!("Vector contents: {v}");
    println!("All even? {}", if v.all(is_even) { "Yes" } else { "No" });
    println!("Evens: {}", v.filter(is_even)?);
    println!("Sum: {}", v.sum());

    print!("Squares: ");
    v.map(square)?.foreach(print_element);
    println!();
    std::io::stdout().flush().ok();

    v.destroy();
    Ok(())
}
