//! The `transform` command - run a pipeline over a list of integers.

use intvec::functional::{self, Function, Predicate};
use intvec::{IntVector, Result, VectorOptions};

use crate::cli::TransformArgs;
use crate::common::input::load_vector;
use crate::common::{CliError, CliResult};

/// Resolved pipeline. Each step is optional and they run in field order.
#[derive(Debug, Default)]
pub struct Pipeline {
    pub remove_if: Option<Predicate>,
    pub filter: Option<Predicate>,
    pub map: Option<Function>,
    pub reverse: bool,
    pub skip: Option<usize>,
    pub limit: Option<usize>,
}

impl Pipeline {
    /// Resolves predicate and function names from the command line.
    pub fn from_args(args: &TransformArgs) -> CliResult<Self> {
        Ok(Pipeline {
            remove_if: args.remove_if.as_deref().map(predicate).transpose()?,
            filter: args.filter.as_deref().map(predicate).transpose()?,
            map: args.map.as_deref().map(function).transpose()?,
            reverse: args.reverse,
            skip: args.skip,
            limit: args.limit,
        })
    }

    pub fn apply(&self, mut v: IntVector) -> Result<IntVector> {
        if let Some(predicate) = self.remove_if {
            let removed = v.remove_if(predicate);
            tracing::debug!(removed, "remove_if step");
        }
        if let Some(predicate) = self.filter {
            v = v.filter(predicate)?;
        }
        if let Some(f) = self.map {
            v = v.map(f)?;
        }
        if self.reverse {
            v.reverse();
        }
        if let Some(n) = self.skip {
            v = v.skip(n)?;
        }
        if let Some(n) = self.limit {
            v = v.limit(n)?;
        }
        Ok(v)
    }
}

fn predicate(name: &str) -> CliResult<Predicate> {
    functional::predicate_by_name(name).ok_or_else(|| CliError::UnknownName {
        what: "predicate",
        given: name.to_string(),
        expected: functional::predicate_names().collect::<Vec<_>>().join(", "),
    })
}

fn function(name: &str) -> CliResult<Function> {
    functional::function_by_name(name).ok_or_else(|| CliError::UnknownName {
        what: "function",
        given: name.to_string(),
        expected: functional::function_names().collect::<Vec<_>>().join(", "),
    })
}

/// Run the transform command.
pub fn run(args: TransformArgs, options: VectorOptions) -> CliResult<()> {
    // Resolve names before touching the input so typos fail fast.
    let pipeline = Pipeline::from_args(&args)?;
    let (v, name) = load_vector(&args.input, options)?;
    let result = pipeline
        .apply(v)
        .map_err(|e| CliError::in_input(e, &name))?;
    println!("{result}");
    Ok(())
}
