//! The import/export tool: selected record type, folders and status line.

use editor_host::{AssetStore, Dialogs};
use record_core::{RecordSchema, SchemaSet};

use crate::{count_assets, export, import, AssetCsvError, Config, Status};

/// Import/export tool bound to an asset store.
///
/// Every action updates [`AssetCsvTool::status`], which is also logged.
pub struct AssetCsvTool<S: AssetStore> {
    store: S,
    schemas: SchemaSet,
    record_type: Option<String>,
    config: Config,
    status: Status,
    objects_found: usize,
}

impl<S: AssetStore> AssetCsvTool<S> {
    pub fn new(store: S, schemas: SchemaSet, config: Config) -> Self {
        Self {
            store,
            schemas,
            record_type: None,
            config,
            status: Status::default(),
            objects_found: 0,
        }
    }

    /// Select the record type to process (None clears the selection).
    pub fn set_record_type(&mut self, record_type: Option<String>) {
        self.record_type = record_type;
        self.update_found_count();
    }

    pub fn record_type(&self) -> Option<&str> {
        self.record_type.as_deref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Change folders or file; call [`Self::update_found_count`] afterwards
    /// to refresh the count.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Assets found by the last count refresh.
    pub fn objects_found(&self) -> usize {
        self.objects_found
    }

    fn schema(&self) -> Result<&RecordSchema, AssetCsvError> {
        let name = self
            .record_type
            .as_deref()
            .ok_or(AssetCsvError::TypeNotAssigned)?;
        self.schemas.require(name).map_err(|e| {
            tracing::debug!("{e}");
            AssetCsvError::UnknownRecordType(name.to_string())
        })
    }

    /// Recount the assets of the selected type in the export folder.
    pub fn update_found_count(&mut self) -> usize {
        self.objects_found = count_assets(&self.store, self.schema().ok(), &self.config);
        self.objects_found
    }

    /// Export the selected type to the configured CSV file.
    pub fn export(&mut self) -> &Status {
        let outcome = self
            .schema()
            .and_then(|schema| export(&self.store, Some(schema), &self.config));

        self.status = match outcome {
            Ok(report) => Status::info(format!(
                "Successfully exported {} objects to '{}'.",
                report.exported,
                report.csv_path.display()
            )),
            Err(e) => Status::from(&e),
        };
        &self.status
    }

    /// Ask for confirmation, then import the configured CSV file.
    ///
    /// Returns None if the user declined; the status is left unchanged.
    pub fn import(&mut self, dialogs: &mut dyn Dialogs) -> Option<&Status> {
        let confirmed = dialogs.confirm(
            "Confirm Import",
            "This will create new assets in the destination folder based on the CSV data. \
             Are you sure you want to continue?",
            "Yes, Import",
            "Cancel",
        );
        if !confirmed {
            return None;
        }

        let outcome = match self.schema() {
            Ok(schema) => {
                let schema = schema.clone();
                import(&mut self.store, Some(&schema), &self.config)
            }
            Err(e) => Err(e),
        };

        self.status = match outcome {
            Ok(report) => Status::info(format!(
                "Successfully imported and created {} objects in '{}'.",
                report.created_count(),
                self.config.import_destination_folder
            )),
            Err(e) => Status::from(&e),
        };
        self.update_found_count();
        Some(&self.status)
    }
}
