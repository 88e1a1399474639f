//! Conversion between records and CSV tables.
//!
//! The first row of a table is the header: one cell per field name. Every
//! following row holds one record. Columns are matched to fields by name, so
//! the column order of an imported file does not have to follow the schema.

use csv_codec::{NumberedRow, Row, Table};
use csv_types::{csv_string_to_field_value, field_values_to_csv_row};
use record_core::{FieldType, FieldValue, Record, RecordSchema};
use tracing::{debug, error, warn};

/// Header cells that name an imported asset, in order of preference.
pub const NAME_COLUMNS: [&str; 2] = ["name", "id"];

/// A data row that produced a record.
#[derive(Debug, Clone)]
pub struct ImportedRow<R> {
    /// Line the row starts on
    pub line: u64,
    /// The raw cells of the row
    pub cells: Row,
    /// The record built from the row
    pub record: R,
}

/// A data row skipped because its width differs from the header's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: u64,
    pub expected: usize,
    pub found: usize,
}

/// A cell that could not be assigned to its field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub line: u64,
    pub field: String,
    pub value: String,
    pub message: String,
}

/// Outcome of turning a table into records.
#[derive(Debug, Clone)]
pub struct TableImport<R> {
    pub records: Vec<ImportedRow<R>>,
    pub skipped: Vec<SkippedRow>,
    pub field_errors: Vec<FieldError>,
}

impl<R> Default for TableImport<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            skipped: Vec::new(),
            field_errors: Vec::new(),
        }
    }
}

/// Header row: the schema's field names in order.
pub fn header_row(schema: &RecordSchema) -> Row {
    schema.field_names().into_iter().map(str::to_string).collect()
}

/// One row of cells for a record, in schema order.
pub fn record_to_row<R: Record>(schema: &RecordSchema, record: &R) -> Row {
    let values: Vec<FieldValue> = schema
        .fields
        .iter()
        .map(|field| record.get_field(&field.name).unwrap_or(FieldValue::Null))
        .collect();
    field_values_to_csv_row(&values)
}

/// Header followed by one row per record.
pub fn records_to_table<R: Record>(schema: &RecordSchema, records: &[R]) -> Table {
    let mut table = Vec::with_capacity(records.len() + 1);
    table.push(header_row(schema));
    table.extend(records.iter().map(|r| record_to_row(schema, r)));
    table
}

/// Whether a row is nothing but whitespace.
fn is_blank(cells: &[String]) -> bool {
    matches!(cells, [only] if only.trim().is_empty())
}

/// Build records from a table whose first row is the header.
///
/// Rows whose width differs from the header's are skipped with a warning.
/// A cell that fails to convert is logged and its field keeps the value the
/// new record was created with; the record is still produced. Asset
/// references are resolved with `asset_type_at`, which returns the record
/// type of the asset stored at a path (None when there is no asset there).
/// A reference is left null when nothing resolves or when the asset is not
/// of the type the field declares.
pub fn records_from_rows<R, F>(
    schema: &RecordSchema,
    rows: &[NumberedRow],
    mut create: F,
    asset_type_at: &dyn Fn(&str) -> Option<String>,
) -> TableImport<R>
where
    R: Record,
    F: FnMut() -> R,
{
    let mut outcome = TableImport::default();
    let Some((header, data)) = rows.split_first() else {
        return outcome;
    };
    let headers = &header.fields;

    for column in headers {
        if schema.get_field(column).is_none() {
            debug!("Column '{column}' has no matching field on '{}'", schema.name);
        }
    }

    for row in data {
        if is_blank(&row.fields) {
            continue;
        }

        if row.fields.len() != headers.len() {
            warn!(
                "Skipping row {}: Mismatched column count. Expected {}, got {}.",
                row.line,
                headers.len(),
                row.fields.len()
            );
            outcome.skipped.push(SkippedRow {
                line: row.line,
                expected: headers.len(),
                found: row.fields.len(),
            });
            continue;
        }

        let mut record = create();

        for (column, value) in headers.iter().zip(&row.fields) {
            let Some(field_type) = schema.get_field_type(column) else {
                continue;
            };

            let converted = csv_string_to_field_value(value, field_type)
                .map_err(|e| e.to_string())
                .and_then(|converted| {
                    if let (FieldValue::AssetRef(path), FieldType::AssetRef { asset_type }) =
                        (&converted, field_type)
                    {
                        check_asset_ref(path, asset_type.as_deref(), asset_type_at)?;
                    }
                    Ok(converted)
                })
                .and_then(|converted| {
                    record
                        .set_field(column, converted)
                        .map_err(|e| e.to_string())
                });

            if let Err(message) = converted {
                error!(
                    "Failed to set field '{}' on row {}. Value: '{}'. Error: {}",
                    column, row.line, value, message
                );
                outcome.field_errors.push(FieldError {
                    line: row.line,
                    field: column.clone(),
                    value: value.clone(),
                    message,
                });
            }
        }

        outcome.records.push(ImportedRow {
            line: row.line,
            cells: row.fields.clone(),
            record,
        });
    }

    outcome
}

fn check_asset_ref(
    path: &str,
    expected: Option<&str>,
    asset_type_at: &dyn Fn(&str) -> Option<String>,
) -> Result<(), String> {
    match (asset_type_at(path), expected) {
        (None, _) => Err(format!("Asset not found at '{path}'")),
        (Some(found), Some(expected)) if found != expected => Err(format!(
            "Asset at '{path}' is a '{found}', expected '{expected}'"
        )),
        _ => Ok(()),
    }
}

/// Name for an asset created from a row: the first non-empty `name` or
/// `id` cell, made safe for use as a file name.
pub fn asset_name_for(headers: &[String], cells: &[String]) -> Option<String> {
    NAME_COLUMNS.iter().find_map(|column| {
        let idx = headers.iter().position(|h| h == column)?;
        let name = sanitize_asset_name(cells.get(idx)?);
        (!name.is_empty()).then_some(name)
    })
}

fn sanitize_asset_name(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect::<String>()
        .trim_matches('.')
        .to_string()
}
