//! Read-only browsing commands.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use docshelf_core::result::AppResult;
use docshelf_core::types::DocumentId;
use docshelf_entity::document::{DocumentRecord, FolderNode};
use docshelf_service::HierarchyStore;

use crate::output::{self, OutputFormat};

/// Arguments for `ls`
#[derive(Debug, Args)]
pub struct LsArgs {
    /// Folder to list (omit for the root level)
    #[arg(short, long)]
    pub parent: Option<String>,
}

/// A single document argument
#[derive(Debug, Args)]
pub struct TargetArgs {
    /// Document ID
    pub id: String,
}

/// Document display row
#[derive(Debug, Serialize, Tabled)]
struct DocumentRow {
    /// Document ID
    id: String,
    /// Name
    name: String,
    /// Type
    #[tabled(rename = "type")]
    kind: String,
    /// Size
    size: String,
    /// Status
    status: String,
    /// Last updated
    updated: String,
}

impl From<&DocumentRecord> for DocumentRow {
    fn from(record: &DocumentRecord) -> Self {
        Self {
            id: record.id.to_string(),
            name: record.name.clone(),
            kind: record.kind.to_string(),
            size: record.size.map(human_size).unwrap_or_default(),
            status: record
                .status
                .map(|status| status.to_string())
                .unwrap_or_default(),
            updated: record.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Format a byte count with a binary unit.
pub(crate) fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

fn print_records(records: &[DocumentRecord], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            let rows: Vec<DocumentRow> = records.iter().map(DocumentRow::from).collect();
            output::print_list(&rows, format);
        }
        OutputFormat::Json => output::print_json(&records),
    }
}

/// `ls`
pub async fn ls(store: &HierarchyStore, args: &LsArgs, format: OutputFormat) -> AppResult<()> {
    let parent = args.parent.as_deref().map(DocumentId::from);
    if let Some(parent) = parent.as_ref() {
        store.get(parent).await?;
    }
    print_records(&store.list(parent.as_ref()).await, format);
    Ok(())
}

/// `folders`
pub async fn folders(store: &HierarchyStore, format: OutputFormat) -> AppResult<()> {
    let snapshot = store.snapshot().await;
    let folders: Vec<DocumentRecord> = snapshot.folders_only().into_iter().cloned().collect();
    print_records(&folders, format);
    Ok(())
}

/// `files`
pub async fn files(store: &HierarchyStore, format: OutputFormat) -> AppResult<()> {
    let snapshot = store.snapshot().await;
    let files: Vec<DocumentRecord> = snapshot.files_only().into_iter().cloned().collect();
    print_records(&files, format);
    Ok(())
}

/// `tree`
pub async fn tree(store: &HierarchyStore, format: OutputFormat) -> AppResult<()> {
    let tree = store.snapshot().await.tree();
    match format {
        OutputFormat::Table => {
            println!("/");
            for node in &tree.roots {
                print_node(node);
            }
            println!();
            println!(
                "{} folders, {} files at the root",
                tree.total_folders, tree.root_file_count
            );
        }
        OutputFormat::Json => output::print_json(&tree),
    }
    Ok(())
}

fn print_node(node: &FolderNode) {
    let indent = "  ".repeat(node.depth + 1);
    let files = match node.file_count {
        0 => String::new(),
        1 => " (1 file)".to_string(),
        n => format!(" ({n} files)"),
    };
    println!("{indent}├── {}/{files}", node.name);
    for child in &node.children {
        print_node(child);
    }
}

/// `path`
pub async fn path(
    store: &HierarchyStore,
    args: &TargetArgs,
    format: OutputFormat,
) -> AppResult<()> {
    let id = DocumentId::from(args.id.as_str());
    let record = store.get(&id).await?;
    let snapshot = store.snapshot().await;
    let crumbs: Vec<DocumentRecord> = snapshot.breadcrumbs(&id).into_iter().cloned().collect();

    match format {
        OutputFormat::Table => {
            let mut names: Vec<&str> = crumbs.iter().map(|r| r.name.as_str()).collect();
            names.push(&record.name);
            println!("/{}", names.join("/"));
        }
        OutputFormat::Json => output::print_json(&crumbs),
    }
    Ok(())
}

/// `show`
pub async fn show(
    store: &HierarchyStore,
    args: &TargetArgs,
    format: OutputFormat,
) -> AppResult<()> {
    let id = DocumentId::from(args.id.as_str());
    let record = store.get(&id).await?;
    let location = store.snapshot().await.ancestors_of(&id);

    let mut fields = vec![
        ("id", record.id.to_string()),
        ("name", record.name.clone()),
        ("type", record.kind.to_string()),
        ("location", format!("/{}", location.join("/"))),
    ];
    if let Some(size) = record.size {
        fields.push(("size", human_size(size)));
    }
    if let Some(media_type) = &record.media_type {
        fields.push(("media type", media_type.clone()));
    }
    if let Some(status) = record.status {
        fields.push(("status", status.to_string()));
    }
    if let Some(progress) = record.progress {
        fields.push(("progress", format!("{progress}%")));
    }
    fields.push(("created", record.created_at.to_rfc3339()));
    fields.push(("updated", record.updated_at.to_rfc3339()));

    output::print_item(&record, &fields, format);
    Ok(())
}
