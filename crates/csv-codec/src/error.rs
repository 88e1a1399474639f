//! Error types for the CSV codec.

use thiserror::Error;

/// Errors that can occur while decoding or encoding CSV text.
#[derive(Error, Debug)]
pub enum CodecError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Tokenizer error (invalid UTF-8 and similar).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A single-row parse was given more than one record.
    #[error("expected a single CSV record but found another starting on line {line}")]
    MultipleRecords { line: u64 },
}
