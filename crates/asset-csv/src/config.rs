//! Import/export configuration.

use std::path::{Path, PathBuf};

/// Folders and file used by export and import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Folder searched (recursively) for assets to export
    pub export_source_folder: String,

    /// Folder where imported assets are created
    pub import_destination_folder: String,

    /// CSV file written by export and read by import, relative to the
    /// project root unless absolute
    pub csv_file_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_source_folder: "Assets/ScriptableObjects".to_string(),
            import_destination_folder: "Assets/ImportedScriptableObjects".to_string(),
            csv_file_path: PathBuf::from("Assets/data.csv"),
        }
    }
}

impl Config {
    /// The CSV path, with relative paths taken relative to `project_root`.
    pub fn csv_path_in(&self, project_root: &Path) -> PathBuf {
        if self.csv_file_path.is_absolute() {
            self.csv_file_path.clone()
        } else {
            project_root.join(&self.csv_file_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.export_source_folder, "Assets/ScriptableObjects");
        assert_eq!(config.import_destination_folder, "Assets/ImportedScriptableObjects");
        assert_eq!(config.csv_file_path, PathBuf::from("Assets/data.csv"));
    }

    #[test]
    fn test_csv_path_in() {
        let config = Config::default();
        assert_eq!(
            config.csv_path_in(Path::new("/project")),
            PathBuf::from("/project/Assets/data.csv")
        );

        let absolute = Config {
            csv_file_path: PathBuf::from("/tmp/out.csv"),
            ..Config::default()
        };
        assert_eq!(absolute.csv_path_in(Path::new("/project")), PathBuf::from("/tmp/out.csv"));
    }
}
