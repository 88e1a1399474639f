//! CSV grid editor model.
//!
//! [`Grid`] is the editable table itself. [`GridDocument`] pairs a grid with
//! the file it was loaded from and implements the editor's load, save and
//! save-as actions on top of the host's [`editor_host::Dialogs`].

mod document;
mod error;
mod grid;

pub use document::{GridDocument, CSV_EXTENSION, DEFAULT_FILE_NAME};
pub use error::GridError;
pub use grid::Grid;
