//! Error handling utilities for the CLI.

use std::io::Write;

use intvec::{RenderConfig, VectorError, render_error_to};
use nu_ansi_term::Color;
use thiserror::Error;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{name}:{line}: invalid integer '{token}'")]
    Parse {
        name: String,
        line: usize,
        token: String,
    },

    #[error("unknown {what} '{given}' (expected one of: {expected})")]
    UnknownName {
        what: &'static str,
        given: String,
        expected: String,
    },

    #[error("{error}")]
    Vector {
        error: VectorError,
        input: Option<String>,
    },
}

impl CliError {
    /// A vector error raised while working on the named input.
    pub fn in_input(error: VectorError, input: &str) -> Self {
        CliError::Vector {
            error,
            input: Some(input.to_string()),
        }
    }
}

impl From<VectorError> for CliError {
    fn from(error: VectorError) -> Self {
        CliError::Vector { error, input: None }
    }
}

/// Render an error to a writer.
///
/// Vector errors get the full report; everything else is a one-line
/// `error: ...` message.
pub fn render_to(error: &CliError, writer: &mut dyn Write, no_color: bool) -> std::io::Result<()> {
    match error {
        CliError::Vector { error, input } => {
            let config = RenderConfig {
                color: !no_color,
                filename: input.as_deref(),
            };
            render_error_to(error, writer, &config)
        }
        other => {
            let label = if no_color {
                "error".to_string()
            } else {
                Color::Red.bold().paint("error").to_string()
            };
            writeln!(writer, "{label}: {other}")
        }
    }
}

/// Render an error to stderr and exit with code 1.
pub fn render_and_exit(error: CliError, no_color: bool) -> ! {
    render_to(&error, &mut std::io::stderr(), no_color).ok();
    std::process::exit(1);
}
