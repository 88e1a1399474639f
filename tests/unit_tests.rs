use std::path::{Path, PathBuf};

use clap::Parser;
use csv_utility::{load_schemas, FolderOpts, ProjectOpts};

#[test]
fn test_project_opts_parsing() {
    let opts = ProjectOpts::try_parse_from([
        "csv-utility",
        "--project-root",
        "/tmp/project",
        "--schema",
        "records.yaml",
        "--type",
        "Item",
    ])
    .unwrap();

    assert_eq!(opts.project_root, PathBuf::from("/tmp/project"));
    assert_eq!(opts.schema, PathBuf::from("records.yaml"));
    assert_eq!(opts.record_type, Some("Item".to_string()));
}

#[test]
fn test_project_opts_require_schema() {
    if std::env::var_os("CSV_UTILITY_SCHEMA").is_none() {
        assert!(ProjectOpts::try_parse_from(["csv-utility"]).is_err());
    }
}

#[test]
fn test_folder_opts_defaults() {
    let opts = FolderOpts::try_parse_from(["csv-utility"]).unwrap();
    assert_eq!(opts.export_folder, "Assets/ScriptableObjects");
    assert_eq!(opts.import_folder, "Assets/ImportedScriptableObjects");
    assert_eq!(opts.csv, PathBuf::from("Assets/data.csv"));

    let config = opts.to_config();
    assert_eq!(config.csv_file_path, PathBuf::from("Assets/data.csv"));
    assert_eq!(config.export_source_folder, "Assets/ScriptableObjects");
    assert_eq!(
        config.csv_path_in(Path::new("/tmp/project")),
        PathBuf::from("/tmp/project/Assets/data.csv")
    );
}

#[test]
fn test_folder_opts_absolute_csv() {
    let opts = FolderOpts {
        csv: PathBuf::from("/data/items.csv"),
        ..FolderOpts::default()
    };
    let config = opts.to_config();
    assert_eq!(
        config.csv_path_in(Path::new("/tmp/project")),
        PathBuf::from("/data/items.csv")
    );
}

#[test]
fn test_load_schemas_reports_path() {
    let temp = tempfile::TempDir::new().unwrap();
    let missing = temp.path().join("missing.yaml");
    let err = load_schemas(&missing).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to load record schemas"));

    let schema = temp.path().join("records.yaml");
    std::fs::write(
        &schema,
        "records:\n  - name: Item\n    fields:\n      - name: name\n        type: text\n",
    )
    .unwrap();
    let schemas = load_schemas(&schema).unwrap();
    assert_eq!(schemas.record_names(), vec!["Item"]);
}
