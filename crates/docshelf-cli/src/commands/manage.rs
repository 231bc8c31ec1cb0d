//! Commands that change the library.

use std::path::PathBuf;

use clap::Args;

use docshelf_core::error::AppError;
use docshelf_core::result::AppResult;
use docshelf_core::types::DocumentId;
use docshelf_entity::document::{ProcessingStatus, UploadDescriptor};
use docshelf_service::HierarchyStore;

use super::browse::human_size;
use crate::output::{self, OutputFormat};

/// Arguments for `mkdir`
#[derive(Debug, Args)]
pub struct MkdirArgs {
    /// Folder name
    pub name: String,
    /// Parent folder ID (omit for the root level)
    #[arg(short, long)]
    pub parent: Option<String>,
}

/// Arguments for `upload`
#[derive(Debug, Args)]
pub struct UploadArgs {
    /// Local file to register (only its name and size are read)
    pub path: PathBuf,
    /// Parent folder ID (omit for the root level)
    #[arg(short, long)]
    pub parent: Option<String>,
    /// Media type (defaults to the file extension)
    #[arg(long)]
    pub media_type: Option<String>,
}

/// Arguments for `rename`
#[derive(Debug, Args)]
pub struct RenameArgs {
    /// Document ID
    pub id: String,
    /// New name
    pub name: String,
}

/// Arguments for `mv`
#[derive(Debug, Args)]
pub struct MoveArgs {
    /// Document ID
    pub id: String,
    /// Target folder ID (omit to move to the root level)
    #[arg(short, long)]
    pub to: Option<String>,
}

/// Arguments for `rm`
#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Document ID
    pub id: String,
    /// Skip confirmation
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for `status`
#[derive(Debug, Args)]
pub struct StatusArgs {
    /// File ID
    pub id: String,
    /// New status (processing, completed, failed)
    pub status: ProcessingStatus,
    /// Progress percentage
    #[arg(short, long)]
    pub progress: Option<u8>,
}

fn parent_arg(parent: Option<&str>) -> Option<DocumentId> {
    parent.map(DocumentId::from)
}

/// `mkdir`
pub async fn mkdir(
    store: &HierarchyStore,
    args: &MkdirArgs,
    format: OutputFormat,
) -> AppResult<()> {
    let folder = store
        .create_folder(&args.name, parent_arg(args.parent.as_deref()))
        .await?;
    output::print_done(
        &folder,
        &format!("Folder '{}' created (id: {})", folder.name, folder.id),
        format,
    );
    Ok(())
}

/// `upload`
pub async fn upload(
    store: &HierarchyStore,
    args: &UploadArgs,
    format: OutputFormat,
) -> AppResult<()> {
    let metadata = tokio::fs::metadata(&args.path).await.map_err(|e| {
        AppError::validation(format!("Cannot read '{}': {e}", args.path.display()))
    })?;
    if !metadata.is_file() {
        return Err(AppError::validation(format!(
            "'{}' is not a regular file",
            args.path.display()
        )));
    }
    let name = args
        .path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| AppError::validation("File name is not valid UTF-8"))?;

    let mut descriptor = UploadDescriptor::new(name, metadata.len());
    if let Some(media_type) = &args.media_type {
        descriptor = descriptor.with_media_type(media_type);
    }

    let file = store
        .create_file(descriptor, parent_arg(args.parent.as_deref()))
        .await?;
    output::print_done(
        &file,
        &format!(
            "Uploaded '{}' ({}, id: {})",
            file.name,
            human_size(metadata.len()),
            file.id
        ),
        format,
    );
    Ok(())
}

/// `rename`
pub async fn rename(
    store: &HierarchyStore,
    args: &RenameArgs,
    format: OutputFormat,
) -> AppResult<()> {
    let record = store
        .rename(&DocumentId::from(args.id.as_str()), &args.name)
        .await?;
    output::print_done(&record, &format!("Renamed to '{}'", record.name), format);
    Ok(())
}

/// `mv`
pub async fn mv(store: &HierarchyStore, args: &MoveArgs, format: OutputFormat) -> AppResult<()> {
    let record = store
        .move_to(&DocumentId::from(args.id.as_str()), parent_arg(args.to.as_deref()))
        .await?;
    let destination = match &record.parent_id {
        Some(parent) => format!("folder {parent}"),
        None => "the root level".to_string(),
    };
    output::print_done(
        &record,
        &format!("Moved '{}' to {destination}", record.name),
        format,
    );
    Ok(())
}

/// `rm`
pub async fn rm(store: &HierarchyStore, args: &RemoveArgs, format: OutputFormat) -> AppResult<()> {
    let id = DocumentId::from(args.id.as_str());
    let record = store.get(&id).await?;

    if !args.yes {
        let prompt = if record.is_folder() {
            let inside = store.snapshot().await.descendants_of(&id).len();
            format!(
                "Delete folder '{}' and the {inside} item(s) inside it?",
                record.name
            )
        } else {
            format!("Delete file '{}'?", record.name)
        };
        let confirm = dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

        if !confirm {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let deleted = store.delete(&id).await?;
    output::print_done(&deleted, &format!("Deleted '{}'", deleted.name), format);
    Ok(())
}

/// `status`
pub async fn status(
    store: &HierarchyStore,
    args: &StatusArgs,
    format: OutputFormat,
) -> AppResult<()> {
    let record = store
        .update_status(&DocumentId::from(args.id.as_str()), args.status, args.progress)
        .await?;
    output::print_done(
        &record,
        &format!("'{}' is now {}", record.name, args.status),
        format,
    );
    Ok(())
}
