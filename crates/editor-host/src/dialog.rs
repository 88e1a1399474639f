//! User-facing dialogs.

use std::collections::VecDeque;
use std::path::PathBuf;

/// File pickers, confirmations and notifications offered by the host.
///
/// Pickers return `None` when the user cancels.
pub trait Dialogs {
    /// Ask for an existing file to open.
    fn open_file_path(&mut self, title: &str, extension: &str) -> Option<PathBuf>;

    /// Ask for a file to save to.
    fn save_file_path(&mut self, title: &str, default_name: &str, extension: &str)
        -> Option<PathBuf>;

    /// Yes/no question. Returns true for `ok`.
    fn confirm(&mut self, title: &str, message: &str, ok: &str, cancel: &str) -> bool;

    /// Show a message the user has to acknowledge.
    fn message(&mut self, title: &str, message: &str);
}

/// Dialogs answered from preset values, for scripted runs and tests.
///
/// Each picker call consumes the next queued path; an empty queue means the
/// user cancelled. Every confirmation gets `confirm_answer`. Messages are
/// recorded and logged.
#[derive(Debug, Default)]
pub struct PresetDialogs {
    pub open_paths: VecDeque<PathBuf>,
    pub save_paths: VecDeque<PathBuf>,
    pub confirm_answer: bool,
    pub messages: Vec<(String, String)>,
    pub confirmations: Vec<String>,
}

impl PresetDialogs {
    /// Dialogs that confirm everything and have no paths queued.
    pub fn accepting() -> Self {
        Self {
            confirm_answer: true,
            ..Self::default()
        }
    }

    pub fn with_open_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.open_paths.push_back(path.into());
        self
    }

    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_paths.push_back(path.into());
        self
    }

    /// Titles of the messages shown so far.
    pub fn message_titles(&self) -> Vec<&str> {
        self.messages.iter().map(|(title, _)| title.as_str()).collect()
    }
}

impl Dialogs for PresetDialogs {
    fn open_file_path(&mut self, title: &str, _extension: &str) -> Option<PathBuf> {
        let path = self.open_paths.pop_front();
        tracing::debug!("{title}: {path:?}");
        path
    }

    fn save_file_path(
        &mut self,
        title: &str,
        _default_name: &str,
        _extension: &str,
    ) -> Option<PathBuf> {
        let path = self.save_paths.pop_front();
        tracing::debug!("{title}: {path:?}");
        path
    }

    fn confirm(&mut self, title: &str, message: &str, _ok: &str, _cancel: &str) -> bool {
        tracing::debug!("{title}: {message} -> {}", self.confirm_answer);
        self.confirmations.push(message.to_string());
        self.confirm_answer
    }

    fn message(&mut self, title: &str, message: &str) {
        tracing::info!("{title}: {message}");
        self.messages.push((title.to_string(), message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_consumed_in_order() {
        let mut dialogs = PresetDialogs::default()
            .with_open_path("a.csv")
            .with_open_path("b.csv");

        assert_eq!(dialogs.open_file_path("Open", "csv"), Some(PathBuf::from("a.csv")));
        assert_eq!(dialogs.open_file_path("Open", "csv"), Some(PathBuf::from("b.csv")));
        assert_eq!(dialogs.open_file_path("Open", "csv"), None);
        assert_eq!(dialogs.save_file_path("Save", "data.csv", "csv"), None);
    }

    #[test]
    fn test_confirm_and_messages_are_recorded() {
        let mut dialogs = PresetDialogs::accepting();
        assert!(dialogs.confirm("Confirm", "Sure?", "Yes", "No"));
        dialogs.message("Error", "Could not load");

        assert_eq!(dialogs.confirmations, vec!["Sure?"]);
        assert_eq!(dialogs.message_titles(), vec!["Error"]);

        let mut declining = PresetDialogs::default();
        assert!(!declining.confirm("Confirm", "Sure?", "Yes", "No"));
    }
}
