//! IntVec CLI - a growable vector of integers, driven from the shell.

use clap::Parser;
use intvec::VectorOptions;
use intvec_cli::cli::{Cli, Command};
use intvec_cli::{commands, common};

fn main() {
    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap();

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();
    let options = VectorOptions {
        default_capacity: cli.default_capacity,
        grow_factor: cli.grow_factor,
    };

    let result = match cli.command {
        Command::Demo => commands::demo::run(options),
        Command::Stats(args) => commands::stats::run(args, options),
        Command::Transform(args) => commands::transform::run(args, options),
        Command::Search(args) => commands::search::run(args, options),
        Command::Inspect(args) => commands::inspect::run(args, options),
    };

    if let Err(e) = result {
        common::error::render_and_exit(e, cli.no_color);
    }
}
