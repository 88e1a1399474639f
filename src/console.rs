//! Dialogs answered on the terminal.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use editor_host::Dialogs;

/// Prompts on `output` and reads answers from `input`.
///
/// With `assume_yes` every confirmation is accepted without asking.
pub struct ConsoleDialogs<R, W> {
    input: R,
    output: W,
    assume_yes: bool,
}

impl ConsoleDialogs<io::StdinLock<'static>, io::Stderr> {
    /// Dialogs on stdin/stderr, so stdout stays free for command output.
    pub fn stdio(assume_yes: bool) -> Self {
        Self::new(io::stdin().lock(), io::stderr(), assume_yes)
    }
}

impl<R: BufRead, W: Write> ConsoleDialogs<R, W> {
    pub fn new(input: R, output: W, assume_yes: bool) -> Self {
        Self {
            input,
            output,
            assume_yes,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, prompt: &str) -> Option<String> {
        if let Err(e) = write!(self.output, "{prompt}").and_then(|_| self.output.flush()) {
            tracing::warn!("Failed to write prompt: {e}");
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                tracing::warn!("Failed to read answer: {e}");
                None
            }
        }
    }

    fn ask_path(&mut self, prompt: &str) -> Option<PathBuf> {
        self.ask(prompt)
            .filter(|answer| !answer.is_empty())
            .map(PathBuf::from)
    }
}

impl<R: BufRead, W: Write> Dialogs for ConsoleDialogs<R, W> {
    fn open_file_path(&mut self, title: &str, extension: &str) -> Option<PathBuf> {
        self.ask_path(&format!("{title} (*.{extension}, empty to cancel): "))
    }

    fn save_file_path(
        &mut self,
        title: &str,
        default_name: &str,
        extension: &str,
    ) -> Option<PathBuf> {
        let answer = self.ask(&format!("{title} (*.{extension}) [{default_name}]: "))?;
        if answer.is_empty() {
            Some(PathBuf::from(default_name))
        } else {
            Some(PathBuf::from(answer))
        }
    }

    fn confirm(&mut self, title: &str, message: &str, ok: &str, cancel: &str) -> bool {
        if self.assume_yes {
            tracing::debug!("{title}: {message} -> assumed yes");
            return true;
        }
        let answer = self.ask(&format!("{title}\n{message}\n[{ok} = y / {cancel} = N]: "));
        matches!(
            answer.as_deref().map(str::to_ascii_lowercase).as_deref(),
            Some("y" | "yes")
        )
    }

    fn message(&mut self, title: &str, message: &str) {
        if let Err(e) = writeln!(self.output, "{title}: {message}") {
            tracing::warn!("Failed to write message: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn dialogs(input: &str, assume_yes: bool) -> ConsoleDialogs<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleDialogs::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), assume_yes)
    }

    #[test]
    fn test_confirm_reads_answer() {
        let mut d = dialogs("y\nno\n", false);
        assert!(d.confirm("Confirm Delete", "Sure?", "Yes", "No"));
        assert!(!d.confirm("Confirm Delete", "Sure?", "Yes", "No"));
        // End of input declines
        assert!(!d.confirm("Confirm Delete", "Sure?", "Yes", "No"));

        let prompts = String::from_utf8(d.into_output()).unwrap();
        assert!(prompts.contains("Confirm Delete\nSure?\n[Yes = y / No = N]: "));
    }

    #[test]
    fn test_assume_yes_skips_prompt() {
        let mut d = dialogs("", true);
        assert!(d.confirm("Confirm Import", "Sure?", "Yes, Import", "Cancel"));
        assert!(d.into_output().is_empty());
    }

    #[test]
    fn test_file_pickers() {
        let mut d = dialogs("data.csv\n\n\n", false);
        assert_eq!(d.open_file_path("Open CSV File", "csv"), Some(PathBuf::from("data.csv")));
        assert_eq!(d.open_file_path("Open CSV File", "csv"), None);
        assert_eq!(
            d.save_file_path("Save CSV As", "data.csv", "csv"),
            Some(PathBuf::from("data.csv"))
        );
        assert_eq!(d.save_file_path("Save CSV As", "data.csv", "csv"), None);
    }

    #[test]
    fn test_message_is_printed() {
        let mut d = dialogs("", false);
        d.message("Error", "Failed to load CSV file");
        assert_eq!(String::from_utf8(d.into_output()).unwrap(), "Error: Failed to load CSV file\n");
    }
}
