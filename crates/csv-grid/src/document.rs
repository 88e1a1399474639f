//! A grid bound to a CSV file, with the editor's file actions.

use std::path::{Path, PathBuf};

use csv_codec::{read_table_file, write_table_file, Row};
use editor_host::Dialogs;
use tracing::{error, info};

use crate::{Grid, GridError};

/// Extension offered by the open/save pickers.
pub const CSV_EXTENSION: &str = "csv";

/// File name suggested by "Save CSV As...".
pub const DEFAULT_FILE_NAME: &str = "data.csv";

/// The editor's state: the grid being edited and the file it belongs to.
#[derive(Debug, Default)]
pub struct GridDocument {
    grid: Grid,
    file_path: Option<PathBuf>,
}

impl GridDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// File the grid was loaded from or last saved to.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Replace the grid with the contents of `path`.
    ///
    /// On failure the current grid and file path are left untouched.
    pub fn load_from(&mut self, path: &Path) -> Result<(), GridError> {
        let table = read_table_file(path).map_err(|source| GridError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Loaded {} rows from {}", table.len(), path.display());
        self.grid = Grid::from_table(table);
        self.file_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Write the grid back to the file it came from.
    pub fn save(&self) -> Result<PathBuf, GridError> {
        let path = self.file_path.clone().ok_or(GridError::NoFilePath)?;
        self.write_to(&path)?;
        Ok(path)
    }

    /// Write the grid to `path` and make it the document's file.
    pub fn save_as(&mut self, path: &Path) -> Result<(), GridError> {
        self.file_path = Some(path.to_path_buf());
        self.write_to(path)
    }

    fn write_to(&self, path: &Path) -> Result<(), GridError> {
        write_table_file(path, self.grid.rows()).map_err(|source| GridError::Save {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Saved {} rows to {}", self.grid.row_count(), path.display());
        Ok(())
    }

    /// "Load CSV": pick a file and load it. Returns true if a file was loaded.
    pub fn open(&mut self, dialogs: &mut dyn Dialogs) -> bool {
        let Some(path) = dialogs.open_file_path("Open CSV File", CSV_EXTENSION) else {
            return false;
        };

        match self.load_from(&path) {
            Ok(()) => true,
            Err(e) => {
                error!("{e}");
                dialogs.message(
                    "Error",
                    "Could not load the CSV file. Check the console for more details.",
                );
                false
            }
        }
    }

    /// "Save CSV": save to the current file. Returns true on success.
    pub fn save_with(&mut self, dialogs: &mut dyn Dialogs) -> bool {
        match self.save() {
            Ok(path) => {
                report_saved(dialogs, &path);
                true
            }
            Err(GridError::NoFilePath) => {
                dialogs.message("Save Error", &GridError::NoFilePath.to_string());
                false
            }
            Err(e) => {
                report_save_failure(dialogs, &e);
                false
            }
        }
    }

    /// "Save CSV As...": pick a destination and save there. Returns true on
    /// success; cancelling the picker changes nothing.
    pub fn save_as_with(&mut self, dialogs: &mut dyn Dialogs) -> bool {
        let Some(path) = dialogs.save_file_path("Save CSV As...", DEFAULT_FILE_NAME, CSV_EXTENSION)
        else {
            return false;
        };

        match self.save_as(&path) {
            Ok(()) => {
                report_saved(dialogs, &path);
                true
            }
            Err(e) => {
                report_save_failure(dialogs, &e);
                false
            }
        }
    }

    /// Row delete button: ask first, then remove the row.
    pub fn remove_row_confirmed(&mut self, dialogs: &mut dyn Dialogs, index: usize) -> Option<Row> {
        if index >= self.grid.row_count() {
            return None;
        }
        if !dialogs.confirm(
            "Confirm Delete",
            "Are you sure you want to delete this row?",
            "Yes",
            "No",
        ) {
            return None;
        }
        self.grid.remove_row(index)
    }
}

fn report_saved(dialogs: &mut dyn Dialogs, path: &Path) {
    dialogs.message(
        "Save Successful",
        &format!("The data was saved to:\n{}", path.display()),
    );
}

fn report_save_failure(dialogs: &mut dyn Dialogs, e: &GridError) {
    error!("{e}");
    dialogs.message(
        "Error",
        "Could not save the CSV file. Check the console for more details.",
    );
}
