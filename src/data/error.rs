use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while turning a trace file into samples.
///
/// Line numbers are 1-based positions in the input, counting every line.
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("Failed to read trace file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: TRACE record has no '{field}' field")]
    MissingField { line: usize, field: &'static str },

    #[error("Line {line}: '{field}' is not a number: {token:?}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        token: String,
        #[source]
        source: ParseFloatError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_line_and_field() {
        let err = TraceError::MissingField {
            line: 12,
            field: "counter",
        };
        assert_eq!(err.to_string(), "Line 12: TRACE record has no 'counter' field");

        let source = "x1".parse::<f64>().unwrap_err();
        let err = TraceError::InvalidNumber {
            line: 3,
            field: "output",
            token: "x1".to_string(),
            source,
        };
        assert_eq!(err.to_string(), "Line 3: 'output' is not a number: \"x1\"");
    }
}
