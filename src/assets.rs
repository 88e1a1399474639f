//! `count`, `export` and `import`: record assets to and from CSV.

use std::io::Write;

use asset_csv::{AssetCsvTool, Status, StatusLevel};
use clap::Args;
use editor_host::{Dialogs, FilesystemAssetStore};

use crate::{load_schemas, FolderOpts, ProjectOpts};

#[derive(Args, Clone, Debug)]
pub struct AssetArgs {
    #[command(flatten)]
    pub project: ProjectOpts,

    #[command(flatten)]
    pub folders: FolderOpts,
}

/// Open the project's asset store with the requested record type selected.
pub fn open_tool(args: &AssetArgs) -> anyhow::Result<AssetCsvTool<FilesystemAssetStore>> {
    let schemas = load_schemas(&args.project.schema)?;
    let store = FilesystemAssetStore::new(&args.project.project_root);
    let config = args.folders.to_config();
    tracing::debug!("Using {config:?}");

    let mut tool = AssetCsvTool::new(store, schemas, config);
    tool.set_record_type(args.project.record_type.clone());
    Ok(tool)
}

/// Print how many assets an export would include.
pub fn count(tool: &AssetCsvTool<FilesystemAssetStore>, out: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(out, "{} Objects Found", tool.objects_found())?;
    Ok(())
}

pub fn export(tool: &mut AssetCsvTool<FilesystemAssetStore>, out: &mut dyn Write) -> anyhow::Result<()> {
    let status = tool.export().clone();
    report(&status, out)
}

pub fn import(
    tool: &mut AssetCsvTool<FilesystemAssetStore>,
    dialogs: &mut dyn Dialogs,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match tool.import(dialogs).cloned() {
        Some(status) => report(&status, out),
        None => {
            writeln!(out, "Import cancelled.")?;
            Ok(())
        }
    }
}

/// Print a status; an error status fails the command.
fn report(status: &Status, out: &mut dyn Write) -> anyhow::Result<()> {
    match status.level {
        StatusLevel::Error => anyhow::bail!("{}", status.message),
        StatusLevel::Warning => writeln!(out, "Warning: {}", status.message)?,
        StatusLevel::Info => writeln!(out, "{}", status.message)?,
    }
    Ok(())
}
