//! Error types for the grid editor.

use csv_codec::CodecError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    /// Cell coordinates outside the grid.
    #[error("cell ({row}, {column}) is outside the grid")]
    OutOfBounds { row: usize, column: usize },

    /// Save was requested before any file was loaded or chosen.
    #[error("No file path specified. Use 'Save As...' first.")]
    NoFilePath,

    /// Reading the CSV file failed.
    #[error("Error loading CSV file '{}': {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: CodecError,
    },

    /// Writing the CSV file failed.
    #[error("Error saving CSV file '{}': {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: CodecError,
    },
}
