//! csv-utility library
//!
//! Command-line front end for the CSV grid editor and the record asset
//! import/export tool.
//!
//! # CLI Usage
//!
//! ```bash
//! # Show a CSV file as a numbered grid
//! csv-utility grid show data.csv
//!
//! # Edit a cell and write the result to another file
//! csv-utility grid set data.csv 2 1 "Sword, long" --output edited.csv
//!
//! # Export every Item asset under Assets/ScriptableObjects
//! csv-utility export --schema records.yaml --type Item --project-root my-project
//!
//! # Import the CSV back as new assets without prompting
//! csv-utility import --schema records.yaml --type Item --yes
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use asset_csv::Config;
use clap::Parser;
use record_core::SchemaSet;

pub mod assets;
pub mod console;
pub mod grid;

pub use console::ConsoleDialogs;

/// Where the project lives and which record type to work on.
#[derive(Parser, Clone, Debug)]
pub struct ProjectOpts {
    /// Project root; asset paths are relative to it
    #[arg(long, default_value = ".", env = "CSV_UTILITY_PROJECT_ROOT")]
    pub project_root: PathBuf,

    /// YAML file declaring the record types
    #[arg(long, value_name = "PATH", env = "CSV_UTILITY_SCHEMA")]
    pub schema: PathBuf,

    /// Record type to process
    #[arg(long = "type", value_name = "NAME")]
    pub record_type: Option<String>,
}

/// Folders and file used by export and import.
#[derive(Parser, Clone, Debug)]
pub struct FolderOpts {
    /// Folder searched for assets to export
    #[arg(long, default_value = "Assets/ScriptableObjects")]
    pub export_folder: String,

    /// Folder where imported assets are created
    #[arg(long, default_value = "Assets/ImportedScriptableObjects")]
    pub import_folder: String,

    /// CSV file, relative to the project root unless absolute
    #[arg(long, default_value = "Assets/data.csv")]
    pub csv: PathBuf,
}

impl FolderOpts {
    pub fn to_config(&self) -> Config {
        Config {
            export_source_folder: self.export_folder.clone(),
            import_destination_folder: self.import_folder.clone(),
            csv_file_path: self.csv.clone(),
        }
    }
}

impl Default for FolderOpts {
    fn default() -> Self {
        let config = Config::default();
        Self {
            export_folder: config.export_source_folder,
            import_folder: config.import_destination_folder,
            csv: config.csv_file_path,
        }
    }
}

/// Load the record schemas declared in `path`.
pub fn load_schemas(path: &Path) -> anyhow::Result<SchemaSet> {
    SchemaSet::from_file(path)
        .with_context(|| format!("Failed to load record schemas from {path:?}"))
}
