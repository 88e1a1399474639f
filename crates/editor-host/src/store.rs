//! Asset storage traits and types
//!
//! Asset paths are `/`-separated and relative to the project root, for
//! example `Assets/Items/Sword.asset`.

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// File extension of record assets.
pub const ASSET_EXTENSION: &str = "asset";

/// Asset data as persisted by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredAsset {
    /// Record type name this asset is an instance of
    pub asset_type: String,
    /// Field values keyed by field name
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl StoredAsset {
    pub fn new(asset_type: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            asset_type: asset_type.into(),
            fields,
        }
    }
}

/// Lookup of assets by type.
pub trait AssetIndex {
    /// Paths of every asset of `asset_type` under `folder` (recursively),
    /// sorted.
    fn find_assets(&self, asset_type: &str, folder: &str) -> Result<Vec<String>>;
}

/// Trait for asset storage operations.
///
/// Created assets are staged and only persisted by [`AssetStore::save_assets`],
/// but they are visible to lookups as soon as they are created.
pub trait AssetStore: AssetIndex {
    /// Directory asset paths are relative to.
    fn project_root(&self) -> &Path;

    /// Read an asset. Returns None if nothing is stored at `path` or the
    /// file there is not a record asset.
    fn load_asset(&self, path: &str) -> Result<Option<StoredAsset>>;

    /// Whether any asset (of any kind) exists at `path`.
    fn asset_exists(&self, path: &str) -> bool;

    /// `path` if it is free, otherwise the first free `Name N.ext` variant.
    fn generate_unique_asset_path(&self, path: &str) -> String;

    /// Stage a new asset at `path`.
    fn create_asset(&mut self, path: &str, asset: StoredAsset) -> Result<()>;

    /// Persist every staged asset. Returns how many were written.
    fn save_assets(&mut self) -> Result<usize>;

    /// Create a folder (and its parents) if it does not exist yet.
    fn ensure_folder(&mut self, folder: &str) -> Result<()>;
}

/// Join a folder and a file name into an asset path.
pub fn join_asset_path(folder: &str, file_name: &str) -> String {
    let folder = folder.trim_end_matches('/');
    if folder.is_empty() {
        file_name.to_string()
    } else {
        format!("{folder}/{file_name}")
    }
}

/// Split `dir/Name.ext` into (`dir/Name`, `.ext`).
pub(crate) fn split_extension(path: &str) -> (&str, &str) {
    let file_start = path.rfind('/').map(|i| i + 1).unwrap_or(0);
    match path[file_start..].rfind('.') {
        Some(dot) if dot > 0 => path.split_at(file_start + dot),
        _ => (path, ""),
    }
}
