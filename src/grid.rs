//! `grid` subcommands: edit a CSV file as a grid.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Subcommand;
use csv_codec::serialize_row;
use csv_grid::GridDocument;
use editor_host::Dialogs;

#[derive(Subcommand, Clone, Debug)]
pub enum GridCommand {
    /// Print every row with its index
    Show {
        /// CSV file to show
        file: PathBuf,
    },

    /// Append an empty row as wide as the first row
    AddRow {
        file: PathBuf,

        #[command(flatten)]
        save: SaveOpts,
    },

    /// Append an empty column to every row
    AddColumn {
        file: PathBuf,

        #[command(flatten)]
        save: SaveOpts,
    },

    /// Delete a row after confirmation
    RemoveRow {
        file: PathBuf,

        /// Index of the row to delete (0 is the first row)
        index: usize,

        /// Delete without asking
        #[arg(long, short = 'y')]
        yes: bool,

        #[command(flatten)]
        save: SaveOpts,
    },

    /// Replace the contents of one cell
    Set {
        file: PathBuf,

        /// Row index (0-based)
        row: usize,

        /// Column index (0-based)
        column: usize,

        /// New cell contents
        value: String,

        #[command(flatten)]
        save: SaveOpts,
    },
}

/// Where an edited grid is written.
#[derive(clap::Args, Clone, Debug, Default)]
pub struct SaveOpts {
    /// Write the result here instead of overwriting the input file
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl GridCommand {
    /// Whether confirmations should be accepted without asking.
    pub fn assume_yes(&self) -> bool {
        matches!(self, GridCommand::RemoveRow { yes: true, .. })
    }
}

/// Run a grid command. Rows are printed to `out`; prompts go through
/// `dialogs`.
pub fn run(command: GridCommand, dialogs: &mut dyn Dialogs, out: &mut dyn Write) -> anyhow::Result<()> {
    match command {
        GridCommand::Show { file } => {
            let doc = load(&file)?;
            for (index, row) in doc.grid().rows().iter().enumerate() {
                writeln!(out, "{index}: {}", serialize_row(row))?;
            }
            tracing::info!(
                "{} rows, {} columns",
                doc.grid().row_count(),
                doc.grid().column_count()
            );
        }
        GridCommand::AddRow { file, save } => {
            let mut doc = load(&file)?;
            doc.grid_mut().append_row();
            write(&mut doc, &save, out)?;
        }
        GridCommand::AddColumn { file, save } => {
            let mut doc = load(&file)?;
            doc.grid_mut().append_column();
            write(&mut doc, &save, out)?;
        }
        GridCommand::RemoveRow {
            file, index, save, ..
        } => {
            let mut doc = load(&file)?;
            if index >= doc.grid().row_count() {
                anyhow::bail!(
                    "Row {index} does not exist ({} has {} rows)",
                    file.display(),
                    doc.grid().row_count()
                );
            }
            match doc.remove_row_confirmed(dialogs, index) {
                Some(removed) => {
                    tracing::info!("Removed row {index}: {}", serialize_row(&removed));
                    write(&mut doc, &save, out)?;
                }
                None => writeln!(out, "Cancelled, nothing was changed.")?,
            }
        }
        GridCommand::Set {
            file,
            row,
            column,
            value,
            save,
        } => {
            let mut doc = load(&file)?;
            let previous = doc.grid_mut().set_cell(row, column, value)?;
            tracing::debug!("Cell ({row}, {column}) was '{previous}'");
            write(&mut doc, &save, out)?;
        }
    }
    Ok(())
}

fn load(file: &Path) -> anyhow::Result<GridDocument> {
    let mut doc = GridDocument::new();
    doc.load_from(file)
        .with_context(|| format!("Could not load the CSV file {}", file.display()))?;
    Ok(doc)
}

fn write(doc: &mut GridDocument, save: &SaveOpts, out: &mut dyn Write) -> anyhow::Result<()> {
    let path = match &save.output {
        Some(path) => {
            doc.save_as(path)?;
            path.clone()
        }
        None => doc.save()?,
    };
    writeln!(out, "The data was saved to: {}", path.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use editor_host::PresetDialogs;
    use std::fs;
    use tempfile::TempDir;

    fn fixture(content: &str) -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.csv");
        fs::write(&path, content).unwrap();
        (temp, path)
    }

    fn run_with(command: GridCommand, dialogs: &mut PresetDialogs) -> anyhow::Result<String> {
        let mut out = Vec::new();
        run(command, dialogs, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_show() {
        let (_temp, file) = fixture("name,note\nSword,\"sharp, long\"\n");
        let out = run_with(GridCommand::Show { file }, &mut PresetDialogs::default()).unwrap();
        assert_eq!(out, "0: name,note\n1: Sword,\"sharp, long\"\n");
    }

    #[test]
    fn test_add_column_in_place() {
        let (_temp, file) = fixture("a,b\n1,2\n");
        let command = GridCommand::AddColumn {
            file: file.clone(),
            save: SaveOpts::default(),
        };
        run_with(command, &mut PresetDialogs::default()).unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "a,b,\n1,2,\n");
    }

    #[test]
    fn test_set_writes_to_output() {
        let (temp, file) = fixture("a,b\n1,2\n");
        let output = temp.path().join("out.csv");
        let command = GridCommand::Set {
            file: file.clone(),
            row: 1,
            column: 0,
            value: "x\"y".to_string(),
            save: SaveOpts {
                output: Some(output.clone()),
            },
        };
        run_with(command, &mut PresetDialogs::default()).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "a,b\n\"x\"\"y\",2\n");
        assert_eq!(fs::read_to_string(&file).unwrap(), "a,b\n1,2\n");
    }

    #[test]
    fn test_set_out_of_range() {
        let (_temp, file) = fixture("a,b\n");
        let command = GridCommand::Set {
            file,
            row: 3,
            column: 0,
            value: "x".to_string(),
            save: SaveOpts::default(),
        };
        assert!(run_with(command, &mut PresetDialogs::default()).is_err());
    }

    #[test]
    fn test_remove_row_respects_confirmation() {
        let (_temp, file) = fixture("a\nb\nc\n");
        let command = GridCommand::RemoveRow {
            file: file.clone(),
            index: 1,
            yes: false,
            save: SaveOpts::default(),
        };

        let out = run_with(command.clone(), &mut PresetDialogs::default()).unwrap();
        assert_eq!(out, "Cancelled, nothing was changed.\n");
        assert_eq!(fs::read_to_string(&file).unwrap(), "a\nb\nc\n");

        run_with(command, &mut PresetDialogs::accepting()).unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "a\nc\n");
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        let command = GridCommand::AddRow {
            file: temp.path().join("missing.csv"),
            save: SaveOpts::default(),
        };
        let err = run_with(command, &mut PresetDialogs::default()).unwrap_err();
        assert!(format!("{err:#}").contains("Could not load the CSV file"));
    }

    #[test]
    fn test_assume_yes() {
        let command = GridCommand::RemoveRow {
            file: PathBuf::from("data.csv"),
            index: 0,
            yes: true,
            save: SaveOpts::default(),
        };
        assert!(command.assume_yes());
    }
}
