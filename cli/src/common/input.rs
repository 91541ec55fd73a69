//! File input utilities.

use std::io::Read;

use intvec::{IntVector, VectorOptions};

use super::error::{CliError, CliResult};

/// Read input from a file path or stdin if path is "-".
///
/// Returns the content and a display name for error messages.
pub fn read_input(path: &str) -> CliResult<(String, String)> {
    if is_stdin(path) {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|source| CliError::Io {
                name: "<stdin>".to_string(),
                source,
            })?;
        Ok((content, "<stdin>".to_string()))
    } else {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            name: path.to_string(),
            source,
        })?;
        Ok((content, path.to_string()))
    }
}

/// Check if the path represents stdin.
pub fn is_stdin(path: &str) -> bool {
    path == "-"
}

/// Parse integers separated by whitespace and/or commas.
///
/// A `#` starts a comment running to the end of the line.
pub fn parse_ints(content: &str, name: &str) -> CliResult<Vec<i32>> {
    let mut values = Vec::new();
    for (i, line) in content.lines().enumerate() {
        let line = line.split('#').next().unwrap_or_default();
        for token in line.split(|c: char| c == ',' || c.is_whitespace()) {
            if token.is_empty() {
                continue;
            }
            let value = token.parse::<i32>().map_err(|_| CliError::Parse {
                name: name.to_string(),
                line: i + 1,
                token: token.to_string(),
            })?;
            values.push(value);
        }
    }
    Ok(values)
}

/// Read, parse, and load an input into a vector built with `options`.
///
/// Elements are appended one at a time, so the resulting capacity follows
/// the configured growth. Returns the vector and the input's display name.
pub fn load_vector(path: &str, options: VectorOptions) -> CliResult<(IntVector, String)> {
    let (content, name) = read_input(path)?;
    let values = parse_ints(&content, &name)?;
    tracing::debug!(input = %name, count = values.len(), "parsed input");

    let mut vector = IntVector::with_options(options)?;
    for value in values {
        vector.add(value).map_err(|e| CliError::in_input(e, &name))?;
    }
    Ok((vector, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_separators() {
        let values = parse_ints("1, 2,3\n  -4\t5\n\n", "t").unwrap();
        assert_eq!(values, [1, 2, 3, -4, 5]);
    }

    #[test]
    fn test_parse_comments_and_blank_input() {
        assert_eq!(parse_ints("7 # seven\n# nothing\n", "t").unwrap(), [7]);
        assert!(parse_ints("", "t").unwrap().is_empty());
        assert!(parse_ints(" , ,\n", "t").unwrap().is_empty());
    }

    #[test]
    fn test_parse_reports_line_and_token() {
        let err = parse_ints("1 2\n3 four\n", "nums").unwrap_err();
        assert_eq!(err.to_string(), "nums:2: invalid integer 'four'");
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(parse_ints("2147483648", "t").is_err());
        assert_eq!(parse_ints("-2147483648", "t").unwrap(), [i32::MIN]);
    }

    #[test]
    fn test_is_stdin() {
        assert!(is_stdin("-"));
        assert!(!is_stdin("numbers.txt"));
    }
}
