//! Memo CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use docshelf_core::result::AppResult;
use docshelf_core::types::{DocumentId, MemoId};
use docshelf_service::{HierarchyStore, MemoService};

use crate::output::{self, OutputFormat};

/// Arguments for memo commands
#[derive(Debug, Args)]
pub struct MemoArgs {
    /// Memo subcommand
    #[command(subcommand)]
    pub command: MemoCommand,
}

/// Memo subcommands
#[derive(Debug, Subcommand)]
pub enum MemoCommand {
    /// List memos
    List,
    /// Generate a summary of a file
    Create {
        /// Source file ID
        file_id: String,
    },
    /// Print a memo
    Show {
        /// Memo ID
        id: String,
    },
    /// Delete a memo
    Rm {
        /// Memo ID
        id: String,
    },
}

/// Memo display row
#[derive(Debug, Serialize, Tabled)]
struct MemoRow {
    /// Memo ID
    id: String,
    /// Title
    title: String,
    /// Source file
    source: String,
    /// Created at
    created: String,
}

/// Execute memo commands
pub async fn execute(
    store: &HierarchyStore,
    memos: &MemoService,
    args: &MemoArgs,
    format: OutputFormat,
) -> AppResult<()> {
    match &args.command {
        MemoCommand::List => {
            let all = memos.list().await;
            match format {
                OutputFormat::Table => {
                    let rows: Vec<MemoRow> = all
                        .iter()
                        .map(|m| MemoRow {
                            id: m.id.to_string(),
                            title: m.title.clone(),
                            source: m.source_file_name.clone(),
                            created: m.created_at.format("%Y-%m-%d %H:%M").to_string(),
                        })
                        .collect();
                    output::print_list(&rows, format);
                }
                OutputFormat::Json => output::print_json(&all),
            }
        }
        MemoCommand::Create { file_id } => {
            let file = store.get(&DocumentId::from(file_id.as_str())).await?;
            let memo = memos.create(&file).await?;
            output::print_done(
                &memo,
                &format!("Memo '{}' created (id: {})", memo.title, memo.id),
                format,
            );
        }
        MemoCommand::Show { id } => {
            let memo = memos.get(&MemoId::from(id.as_str())).await?;
            match format {
                OutputFormat::Table => println!("{}", memo.content),
                OutputFormat::Json => output::print_json(&memo),
            }
        }
        MemoCommand::Rm { id } => {
            let memo = memos.delete(&MemoId::from(id.as_str())).await?;
            output::print_done(&memo, &format!("Memo '{}' deleted", memo.title), format);
        }
    }

    Ok(())
}
