//! Filesystem-based asset storage implementation.

use anyhow::{bail, Context, Result};
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use crate::store::{join_asset_path, split_extension, AssetIndex, AssetStore, StoredAsset, ASSET_EXTENSION};

/// Filesystem implementation of the asset traits.
///
/// Stores each asset as a pretty-printed JSON file under a project root.
pub struct FilesystemAssetStore {
    root: PathBuf,
    pending: BTreeMap<String, StoredAsset>,
}

impl FilesystemAssetStore {
    /// Create a store rooted at the given project directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            pending: BTreeMap::new(),
        }
    }

    /// Number of created but not yet saved assets.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Map an asset path onto the filesystem, refusing anything that would
    /// escape the project root.
    pub fn resolve(&self, asset_path: &str) -> Result<PathBuf> {
        let relative = Path::new(asset_path);
        for component in relative.components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                _ => bail!("Asset path must stay inside the project: {asset_path}"),
            }
        }
        Ok(self.root.join(relative))
    }

    fn read_asset_file(path: &Path) -> Result<Option<StoredAsset>> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read asset: {}", path.display()))?;
        match serde_json::from_str(&content) {
            Ok(asset) => Ok(Some(asset)),
            Err(e) => {
                tracing::warn!("Ignoring unreadable asset {}: {e}", path.display());
                Ok(None)
            }
        }
    }

    fn collect_assets(dir: &Path, prefix: &str, out: &mut Vec<(String, PathBuf)>) -> Result<()> {
        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

        for entry in entries {
            let entry = entry?;
            let entry_path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();
            let asset_path = join_asset_path(prefix, &name);

            let file_type = entry
                .file_type()
                .with_context(|| format!("Failed to get metadata for: {}", entry_path.display()))?;

            if file_type.is_dir() {
                Self::collect_assets(&entry_path, &asset_path, out)?;
            } else if entry_path.extension().and_then(|e| e.to_str()) == Some(ASSET_EXTENSION) {
                out.push((asset_path, entry_path));
            }
        }
        Ok(())
    }
}

impl AssetIndex for FilesystemAssetStore {
    fn find_assets(&self, asset_type: &str, folder: &str) -> Result<Vec<String>> {
        let folder = folder.trim_end_matches('/');
        let dir = self.resolve(folder)?;
        let mut results = Vec::new();

        if dir.is_dir() {
            let mut files = Vec::new();
            Self::collect_assets(&dir, folder, &mut files)?;
            for (asset_path, file_path) in files {
                if self.pending.contains_key(&asset_path) {
                    continue;
                }
                if let Some(asset) = Self::read_asset_file(&file_path)? {
                    if asset.asset_type == asset_type {
                        results.push(asset_path);
                    }
                }
            }
        } else {
            tracing::debug!("Asset folder does not exist: {}", dir.display());
        }

        let folder_prefix = format!("{folder}/");
        results.extend(
            self.pending
                .iter()
                .filter(|(path, asset)| {
                    (folder.is_empty() || path.starts_with(&folder_prefix))
                        && asset.asset_type == asset_type
                })
                .map(|(path, _)| path.clone()),
        );

        results.sort();
        tracing::debug!(
            "Found {} assets of type '{}' in '{}'",
            results.len(),
            asset_type,
            folder
        );
        Ok(results)
    }
}

impl AssetStore for FilesystemAssetStore {
    fn project_root(&self) -> &Path {
        &self.root
    }

    fn load_asset(&self, path: &str) -> Result<Option<StoredAsset>> {
        if let Some(asset) = self.pending.get(path) {
            return Ok(Some(asset.clone()));
        }
        let file_path = self.resolve(path)?;
        if !file_path.is_file() {
            return Ok(None);
        }
        Self::read_asset_file(&file_path)
    }

    fn asset_exists(&self, path: &str) -> bool {
        self.pending.contains_key(path)
            || self.resolve(path).map(|p| p.exists()).unwrap_or(false)
    }

    fn generate_unique_asset_path(&self, path: &str) -> String {
        if !self.asset_exists(path) {
            return path.to_string();
        }
        let (stem, extension) = split_extension(path);
        (1..)
            .map(|n| format!("{stem} {n}{extension}"))
            .find(|candidate| !self.asset_exists(candidate))
            .unwrap_or_else(|| path.to_string())
    }

    fn create_asset(&mut self, path: &str, asset: StoredAsset) -> Result<()> {
        self.resolve(path)?;
        if self.pending.insert(path.to_string(), asset).is_some() {
            tracing::warn!("Replacing unsaved asset at {path}");
        }
        Ok(())
    }

    fn save_assets(&mut self) -> Result<usize> {
        let pending = std::mem::take(&mut self.pending);
        let count = pending.len();

        for (asset_path, asset) in pending {
            let file_path = self.resolve(&asset_path)?;
            if let Some(parent) = file_path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create folder: {}", parent.display()))?;
            }
            std::fs::write(&file_path, serde_json::to_string_pretty(&asset)?)
                .with_context(|| format!("Failed to write asset: {}", file_path.display()))?;
            tracing::debug!("Saved asset {asset_path}");
        }

        if count > 0 {
            tracing::info!("Saved {count} assets under {}", self.root.display());
        }
        Ok(count)
    }

    fn ensure_folder(&mut self, folder: &str) -> Result<()> {
        let dir = self.resolve(folder)?;
        if !dir.exists() {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create folder: {}", dir.display()))?;
            tracing::info!("Created folder {}", dir.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};
    use tempfile::TempDir;

    fn asset(asset_type: &str, damage: i64) -> StoredAsset {
        let mut fields = Map::new();
        fields.insert("damage".to_string(), json!(damage));
        StoredAsset::new(asset_type, fields)
    }

    fn write_asset(root: &Path, asset_path: &str, asset: &StoredAsset) {
        let path = root.join(asset_path);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, serde_json::to_string(asset).unwrap()).unwrap();
    }

    #[test]
    fn test_find_assets_by_type_recursive() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write_asset(root, "Assets/Items/Sword.asset", &asset("Item", 10));
        write_asset(root, "Assets/Items/Weapons/Axe.asset", &asset("Item", 12));
        write_asset(root, "Assets/Items/Goblin.asset", &asset("Enemy", 1));
        write_asset(root, "Assets/Other/Bow.asset", &asset("Item", 4));
        std::fs::write(root.join("Assets/Items/notes.txt"), "not an asset").unwrap();
        std::fs::write(root.join("Assets/Items/Broken.asset"), "{ nope").unwrap();

        let store = FilesystemAssetStore::new(root);
        let found = store.find_assets("Item", "Assets/Items").unwrap();

        assert_eq!(
            found,
            vec!["Assets/Items/Sword.asset", "Assets/Items/Weapons/Axe.asset"]
        );
    }

    #[test]
    fn test_find_assets_missing_folder() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilesystemAssetStore::new(temp_dir.path());
        assert!(store.find_assets("Item", "Assets/Nowhere").unwrap().is_empty());
    }

    #[test]
    fn test_create_is_staged_until_save() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FilesystemAssetStore::new(temp_dir.path());

        store.create_asset("Assets/New/Potion.asset", asset("Item", 0)).unwrap();
        assert!(store.asset_exists("Assets/New/Potion.asset"));
        assert!(!temp_dir.path().join("Assets/New/Potion.asset").exists());
        assert_eq!(store.find_assets("Item", "Assets/New").unwrap().len(), 1);

        assert_eq!(store.save_assets().unwrap(), 1);
        assert_eq!(store.pending_count(), 0);
        assert!(temp_dir.path().join("Assets/New/Potion.asset").is_file());

        let loaded = store.load_asset("Assets/New/Potion.asset").unwrap().unwrap();
        assert_eq!(loaded, asset("Item", 0));
    }

    #[test]
    fn test_load_missing_asset() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilesystemAssetStore::new(temp_dir.path());
        assert!(store.load_asset("Assets/Missing.asset").unwrap().is_none());
    }

    #[test]
    fn test_generate_unique_asset_path() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write_asset(root, "Assets/Items/Sword.asset", &asset("Item", 1));
        let mut store = FilesystemAssetStore::new(root);

        assert_eq!(
            store.generate_unique_asset_path("Assets/Items/Shield.asset"),
            "Assets/Items/Shield.asset"
        );
        assert_eq!(
            store.generate_unique_asset_path("Assets/Items/Sword.asset"),
            "Assets/Items/Sword 1.asset"
        );

        store.create_asset("Assets/Items/Sword 1.asset", asset("Item", 2)).unwrap();
        assert_eq!(
            store.generate_unique_asset_path("Assets/Items/Sword.asset"),
            "Assets/Items/Sword 2.asset"
        );
    }

    #[test]
    fn test_rejects_paths_outside_root() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FilesystemAssetStore::new(temp_dir.path());

        assert!(store.resolve("../outside.asset").is_err());
        assert!(store.resolve("/etc/passwd").is_err());
        assert!(store.create_asset("Assets/../../x.asset", asset("Item", 0)).is_err());
        assert!(!store.asset_exists("../outside.asset"));
    }

    #[test]
    fn test_ensure_folder() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FilesystemAssetStore::new(temp_dir.path());

        store.ensure_folder("Assets/Imported/Items").unwrap();
        assert!(temp_dir.path().join("Assets/Imported/Items").is_dir());
        store.ensure_folder("Assets/Imported/Items").unwrap();
    }

    #[test]
    fn test_load_asset_only_reads_record_assets() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write_asset(root, "Assets/Items/Sword.asset", &asset("Item", 10));
        std::fs::write(root.join("Assets/data.csv"), "name\nSword\n").unwrap();

        let store = FilesystemAssetStore::new(root);
        assert_eq!(store.project_root(), root);

        let sword = store.load_asset("Assets/Items/Sword.asset").unwrap().unwrap();
        assert_eq!(sword.asset_type, "Item");
        assert!(store.load_asset("Assets/Items").unwrap().is_none());
        assert!(store.load_asset("Assets/data.csv").unwrap().is_none());
        assert!(store.load_asset("Assets/Items/Missing.asset").unwrap().is_none());
    }
}
