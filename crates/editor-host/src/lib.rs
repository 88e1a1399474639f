//! Host editor capabilities for csv-utility.
//!
//! The grid editor and the asset import/export never talk to an editor
//! directly. They receive these capabilities instead:
//!
//! - [`AssetIndex`] - find assets of a type under a folder
//! - [`AssetStore`] - load, create and save assets
//! - [`Dialogs`] - file pickers, confirmations and user messages
//!
//! [`FilesystemAssetStore`] keeps assets as JSON files under a project root,
//! and [`PresetDialogs`] answers every dialog from preset values.

pub mod dialog;
pub mod filesystem;
pub mod store;

pub use dialog::{Dialogs, PresetDialogs};
pub use filesystem::FilesystemAssetStore;
pub use store::{join_asset_path, AssetIndex, AssetStore, StoredAsset, ASSET_EXTENSION};
