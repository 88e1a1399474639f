//! Record asset ⇄ CSV import/export.
//!
//! Export writes one header row of field names followed by one row per
//! asset of the selected record type. Import reads such a file back and
//! creates a new asset per well-formed row.
//!
//! The table-level conversion in [`mapping`] works on any [`record_core::Record`];
//! [`export`] and [`import`] drive it against an [`editor_host::AssetStore`];
//! [`AssetCsvTool`] adds the status reporting and confirmation prompt of the
//! editor tool.

mod config;
mod error;
pub mod export;
pub mod import;
pub mod mapping;
mod status;
mod tool;

pub use config::Config;
pub use error::AssetCsvError;
pub use export::{count_assets, export, ExportReport};
pub use import::{import, ImportReport};
pub use mapping::{FieldError, ImportedRow, SkippedRow, TableImport};
pub use status::{Status, StatusLevel};
pub use tool::AssetCsvTool;
