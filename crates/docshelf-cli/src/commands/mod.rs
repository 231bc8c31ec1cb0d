//! CLI command definitions and dispatch.

pub mod browse;
pub mod manage;
pub mod memo;

use clap::{Parser, Subcommand};

use docshelf_core::config::AppConfig;
use docshelf_core::result::AppResult;
use docshelf_persistence::{SlotManager, seed};
use docshelf_service::{HierarchyStore, MemoService};

use crate::output::OutputFormat;

/// docshelf: a study library of files and folders
#[derive(Debug, Parser)]
#[command(name = "docshelf", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/docshelf.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the children of a folder (roots by default)
    Ls(browse::LsArgs),
    /// List every folder
    Folders,
    /// List every file
    Files,
    /// Show the folder tree
    Tree,
    /// Show the location of a document
    Path(browse::TargetArgs),
    /// Show one document
    Show(browse::TargetArgs),
    /// Create a folder
    Mkdir(manage::MkdirArgs),
    /// Register a local file in the library
    Upload(manage::UploadArgs),
    /// Rename a document
    Rename(manage::RenameArgs),
    /// Move a document to another folder
    Mv(manage::MoveArgs),
    /// Delete a document (folders recursively)
    Rm(manage::RemoveArgs),
    /// Update the processing status of a file
    Status(manage::StatusArgs),
    /// Study summaries
    Memo(memo::MemoArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let slots = SlotManager::new(&config.persistence);
        let store = open_store(config, &slots).await?;
        let format = self.format;

        match &self.command {
            Commands::Ls(args) => browse::ls(&store, args, format).await,
            Commands::Folders => browse::folders(&store, format).await,
            Commands::Files => browse::files(&store, format).await,
            Commands::Tree => browse::tree(&store, format).await,
            Commands::Path(args) => browse::path(&store, args, format).await,
            Commands::Show(args) => browse::show(&store, args, format).await,
            Commands::Mkdir(args) => manage::mkdir(&store, args, format).await,
            Commands::Upload(args) => manage::upload(&store, args, format).await,
            Commands::Rename(args) => manage::rename(&store, args, format).await,
            Commands::Mv(args) => manage::mv(&store, args, format).await,
            Commands::Rm(args) => manage::rm(&store, args, format).await,
            Commands::Status(args) => manage::status(&store, args, format).await,
            Commands::Memo(args) => {
                let memos = MemoService::load(slots.memos()).await?;
                memo::execute(&store, &memos, args, format).await
            }
        }
    }
}

/// Open the document store, seeding the sample library on first use when
/// configured to.
pub async fn open_store(config: &AppConfig, slots: &SlotManager) -> AppResult<HierarchyStore> {
    let persistence = slots.documents();
    if config.persistence.seed_samples {
        HierarchyStore::load_or_seed(persistence, seed::sample_documents()).await
    } else {
        HierarchyStore::load(persistence).await
    }
}
