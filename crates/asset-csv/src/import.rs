//! Import CSV rows as new assets.

use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

use csv_codec::{read_numbered_rows, CodecError};
use editor_host::{join_asset_path, AssetStore, StoredAsset, ASSET_EXTENSION};
use record_core::{DynamicRecord, RecordSchema};
use tracing::{debug, info};

use crate::mapping::{asset_name_for, records_from_rows, FieldError, SkippedRow};
use crate::{AssetCsvError, Config};

/// Result of a successful import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Paths of the assets created, in row order
    pub created: Vec<String>,
    /// Rows skipped for having the wrong number of cells
    pub skipped: Vec<SkippedRow>,
    /// Cells that could not be assigned
    pub field_errors: Vec<FieldError>,
}

impl ImportReport {
    pub fn created_count(&self) -> usize {
        self.created.len()
    }
}

/// Create one asset of `schema`'s type per well-formed data row of the
/// configured CSV file, resolved against the store's project root when
/// relative.
///
/// The record type is checked before anything is touched. Rows with the
/// wrong number of cells are skipped, and cells that fail to convert are
/// logged without dropping their row.
pub fn import<S: AssetStore + ?Sized>(
    store: &mut S,
    schema: Option<&RecordSchema>,
    config: &Config,
) -> Result<ImportReport, AssetCsvError> {
    let schema = schema.ok_or(AssetCsvError::TypeNotAssigned)?;
    let destination = &config.import_destination_folder;
    let csv_path = config.csv_path_in(store.project_root());

    let rows = File::open(&csv_path)
        .map_err(CodecError::from)
        .and_then(|file| read_numbered_rows(BufReader::new(file)))
        .map_err(|source| AssetCsvError::ReadCsv {
            path: csv_path.clone(),
            source,
        })?;

    if rows.len() < 2 {
        return Err(AssetCsvError::EmptyCsv);
    }

    store.ensure_folder(destination)?;
    info!(
        "Importing {} rows from '{}' as '{}'",
        rows.len() - 1,
        csv_path.display(),
        schema.name
    );

    let shared = Arc::new(schema.clone());
    let table_import = {
        let asset_type_at = |path: &str| match store.load_asset(path) {
            Ok(asset) => asset.map(|asset| asset.asset_type),
            Err(e) => {
                debug!("Could not resolve asset '{path}': {e:#}");
                None
            }
        };
        records_from_rows(&shared, &rows, || DynamicRecord::new(shared.clone()), &asset_type_at)
    };

    let headers = &rows[0].fields;
    let mut created = Vec::with_capacity(table_import.records.len());

    for row in table_import.records {
        let name = asset_name_for(headers, &row.cells)
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let requested = join_asset_path(destination, &format!("{name}.{ASSET_EXTENSION}"));
        let asset_path = store.generate_unique_asset_path(&requested);

        store.create_asset(
            &asset_path,
            StoredAsset::new(schema.name.clone(), row.record.to_json_fields()),
        )?;
        debug!("Row {} -> {asset_path}", row.line);
        created.push(asset_path);
    }

    store.save_assets()?;

    Ok(ImportReport {
        created,
        skipped: table_import.skipped,
        field_errors: table_import.field_errors,
    })
}
