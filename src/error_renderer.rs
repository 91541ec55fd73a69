//! Error rendering for terminals
//!
//! Turns a [`VectorError`] into a short report: a headline carrying the
//! error kind, an optional location line naming the input, and a hint.
//!
//! ```text
//! error[empty]: cannot take the minimum of an empty vector
//!   --> numbers.txt
//!   = hint: provide at least one integer
//! ```

use crate::{ErrorKind, VectorError};
use nu_ansi_term::{Color, Style};
use std::io::Write;

/// Configuration for error rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig<'a> {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The input to name in the report, if any.
    pub filename: Option<&'a str>,
}

impl Default for RenderConfig<'_> {
    fn default() -> Self {
        RenderConfig::default()
    }
}

impl RenderConfig<'_> {
    const fn default() -> Self {
        Self {
            color: true,
            filename: None,
        }
    }
}

/// Render an error to stderr using the default config.
///
/// # Example
/// ```no_run
/// use intvec::{IntVector, render_error};
///
/// if let Err(e) = IntVector::new().min() {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &VectorError) {
    render_error_to(error, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render an error to a writer with the given configuration.
///
/// # Example
/// ```
/// use intvec::{IntVector, RenderConfig, render_error_to};
///
/// let err = IntVector::new().get(0).unwrap_err();
/// let mut buf = Vec::new();
/// let config = RenderConfig { color: false, ..Default::default() };
/// render_error_to(&err, &mut buf, &config).unwrap();
/// assert!(String::from_utf8_lossy(&buf).starts_with("error[index]"));
/// ```
pub fn render_error_to(
    error: &VectorError,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    let paint = |style: Style, text: &str| {
        if config.color {
            style.paint(text).to_string()
        } else {
            text.to_string()
        }
    };

    let headline = format!("error[{}]", kind_label(error.kind()));
    writeln!(
        writer,
        "{}{} {}",
        paint(Color::Red.bold(), &headline),
        paint(Style::new().bold(), ":"),
        paint(Style::new().bold(), &error.to_string()),
    )?;

    let gutter = paint(Color::Blue.bold(), "  -->");
    if let Some(filename) = config.filename {
        writeln!(writer, "{gutter} {filename}")?;
    }

    let equals = paint(Color::Blue.bold(), "  =");
    writeln!(writer, "{equals} {}: {}", paint(Style::new().bold(), "hint"), hint(error))
}

/// Lower-case label used in the headline.
pub fn kind_label(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Index => "index",
        ErrorKind::Empty => "empty",
        ErrorKind::Allocation => "allocation",
        ErrorKind::Options => "options",
    }
}

fn hint(error: &VectorError) -> String {
    match error {
        VectorError::Index { len: 0, .. } | VectorError::Range { len: 0, .. } => {
            "the vector is empty".to_string()
        }
        VectorError::Index { len, .. } => format!("valid indices are 0 through {}", len - 1),
        VectorError::Range { len, .. } => {
            format!("keep both bounds within the {len} elements and start no later than end")
        }
        VectorError::Empty { .. } => "provide at least one integer".to_string(),
        VectorError::Allocation(_) => "request a smaller capacity".to_string(),
        VectorError::InvalidOptions(_) => {
            "default capacity must be at least 1 and grow factor at least 2".to_string()
        }
    }
}
