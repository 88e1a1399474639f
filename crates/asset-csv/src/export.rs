//! Export every asset of a record type to a CSV file.

use std::path::PathBuf;
use std::sync::Arc;

use csv_codec::write_table_file;
use editor_host::{AssetIndex, AssetStore};
use record_core::{DynamicRecord, RecordSchema};
use tracing::{debug, info, warn};

use crate::mapping::records_to_table;
use crate::{AssetCsvError, Config};

/// Result of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// Number of records written (header excluded)
    pub exported: usize,
    /// Asset paths that were found but could not be loaded
    pub unreadable: Vec<String>,
    /// File that was written
    pub csv_path: PathBuf,
}

/// Number of assets of the schema's type under the export folder.
///
/// Returns 0 when no type is selected or the lookup fails.
pub fn count_assets<I: AssetIndex + ?Sized>(
    index: &I,
    schema: Option<&RecordSchema>,
    config: &Config,
) -> usize {
    let Some(schema) = schema else {
        return 0;
    };
    if config.export_source_folder.is_empty() {
        return 0;
    }
    match index.find_assets(&schema.name, &config.export_source_folder) {
        Ok(paths) => paths.len(),
        Err(e) => {
            debug!("Asset lookup failed: {e:#}");
            0
        }
    }
}

/// Export all assets of `schema`'s type under the configured folder to the
/// configured CSV file. A relative CSV path is taken relative to the store's
/// project root.
pub fn export<S: AssetStore + ?Sized>(
    store: &S,
    schema: Option<&RecordSchema>,
    config: &Config,
) -> Result<ExportReport, AssetCsvError> {
    let schema = schema.ok_or(AssetCsvError::TypeNotAssigned)?;
    let folder = &config.export_source_folder;
    let csv_path = config.csv_path_in(store.project_root());

    let paths = store.find_assets(&schema.name, folder)?;
    if paths.is_empty() {
        return Err(AssetCsvError::NoAssetsFound {
            asset_type: schema.name.clone(),
            folder: folder.clone(),
        });
    }
    info!("Exporting {} '{}' assets from '{folder}'", paths.len(), schema.name);

    let shared = Arc::new(schema.clone());
    let mut records = Vec::with_capacity(paths.len());
    let mut unreadable = Vec::new();

    for path in paths {
        let loaded = match store.load_asset(&path) {
            Ok(Some(asset)) if asset.asset_type == schema.name => {
                DynamicRecord::from_json_fields(shared.clone(), &asset.fields)
                    .map_err(|e| e.to_string())
            }
            Ok(Some(asset)) => Err(format!("asset has type '{}'", asset.asset_type)),
            Ok(None) => Err("asset could not be read".to_string()),
            Err(e) => Err(format!("{e:#}")),
        };

        match loaded {
            Ok(record) => records.push(record),
            Err(reason) => {
                warn!("Skipping asset '{path}': {reason}");
                unreadable.push(path);
            }
        }
    }

    if records.is_empty() {
        return Err(AssetCsvError::NoAssetsLoaded {
            folder: folder.clone(),
        });
    }

    let table = records_to_table(schema, &records);

    if let Some(parent) = csv_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| AssetCsvError::WriteCsv {
            path: csv_path.clone(),
            source: e.into(),
        })?;
    }
    write_table_file(&csv_path, &table).map_err(|source| AssetCsvError::WriteCsv {
        path: csv_path.clone(),
        source,
    })?;

    Ok(ExportReport {
        exported: records.len(),
        unreadable,
        csv_path,
    })
}
