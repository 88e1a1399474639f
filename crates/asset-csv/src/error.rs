//! Error types for import/export.

use crate::status::StatusLevel;
use csv_codec::CodecError;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons an export or import stops before finishing.
#[derive(Error, Debug)]
pub enum AssetCsvError {
    /// No record type selected.
    #[error("Please assign a record type before exporting or importing.")]
    TypeNotAssigned,

    /// Selected record type is not declared in the schema set.
    #[error("Record type '{0}' is not declared in the schema.")]
    UnknownRecordType(String),

    /// Nothing of the selected type under the export folder.
    #[error("No assets of type '{asset_type}' found in '{folder}'.")]
    NoAssetsFound { asset_type: String, folder: String },

    /// Assets were found but none could be loaded.
    #[error("Could not load any assets from folder: '{folder}'.")]
    NoAssetsLoaded { folder: String },

    /// CSV has no data rows.
    #[error("CSV file is empty or contains only a header.")]
    EmptyCsv,

    /// Reading the CSV file failed.
    #[error("Failed to read CSV file at '{}'. Error: {source}", path.display())]
    ReadCsv {
        path: PathBuf,
        #[source]
        source: CodecError,
    },

    /// Writing the CSV file failed.
    #[error("Failed to write file at '{}'. Error: {source}", path.display())]
    WriteCsv {
        path: PathBuf,
        #[source]
        source: CodecError,
    },

    /// The asset store failed.
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl AssetCsvError {
    /// How the failure is presented to the user.
    pub fn level(&self) -> StatusLevel {
        match self {
            AssetCsvError::NoAssetsFound { .. }
            | AssetCsvError::NoAssetsLoaded { .. }
            | AssetCsvError::EmptyCsv => StatusLevel::Warning,
            _ => StatusLevel::Error,
        }
    }
}
