// error.rs - Error types for streakmatch.
//
// Every failure the benchmark can hit is fatal to the run. The variants
// exist so the binary can name the failing path and pick an exit code.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Error type for pattern generation, benchmarking and report I/O.
#[derive(Error, Debug)]
pub enum BenchError {
    /// A precondition on the benchmark parameters was violated.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The text corpus (or a results file) could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// An output file could not be created or written.
    #[error("failed to write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    /// Writing to a record sink without a known path failed.
    #[error("failed to write results: {0}")]
    Sink(#[from] io::Error),

    /// The TOML configuration file could not be parsed.
    #[error("invalid configuration in '{}': {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// A results CSV line could not be parsed back into a record.
    #[error("{}:{line}: malformed record: {reason}", path.display())]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

impl BenchError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        BenchError::InvalidInput(message.into())
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        BenchError::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        BenchError::Write {
            path: path.into(),
            source,
        }
    }

    /// Returns the process exit code the binary reports for this error.
    ///
    /// Usage and input problems map to `2`, I/O failures to `1`.
    pub fn exit_code(&self) -> u8 {
        match self {
            BenchError::InvalidInput(_)
            | BenchError::Config { .. }
            | BenchError::MalformedRecord { .. } => 2,
            BenchError::Read { .. } | BenchError::Write { .. } | BenchError::Sink(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_display() {
        let err = BenchError::invalid("trial count must be at least 1");
        assert_eq!(
            err.to_string(),
            "invalid input: trial count must be at least 1"
        );
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn read_error_names_path() {
        let err = BenchError::read(
            "input/missing.txt",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("input/missing.txt"));
        assert!(msg.contains("no such file"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn sink_error_from_io() {
        let err: BenchError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, BenchError::Sink(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn malformed_record_display() {
        let err = BenchError::MalformedRecord {
            path: PathBuf::from("out/naive_exon1.csv"),
            line: 7,
            reason: "expected 5 fields, found 4".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "out/naive_exon1.csv:7: malformed record: expected 5 fields, found 4"
        );
    }

    #[test]
    fn error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(BenchError::invalid("empty pattern"));
        assert_eq!(err.to_string(), "invalid input: empty pattern");
    }
}
