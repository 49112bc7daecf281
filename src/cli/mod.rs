//! CLI module for Politigraph.
//!
//! Subcommands:
//! - `ops`: Print every operation family built from sample entities
//! - `list`: Run a list query against the configured endpoint
//! - `exec`: Run a raw operation document

mod exec;
mod list;
mod ops;

use clap::{Parser, Subcommand};

/// Politigraph - political-process knowledge graph client
#[derive(Parser)]
#[command(name = "politigraph")]
#[command(about = "Typed GraphQL client for a political-process knowledge graph")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print every operation family built from sample entities, without executing
    Ops,

    /// List an entity collection with an explicit field projection
    List {
        /// Entity type name (e.g. Bill)
        entity: String,

        /// Comma-separated fields to project
        #[arg(long, default_value = "id")]
        fields: String,
    },

    /// Execute a raw operation document (reads stdin when omitted)
    Exec {
        /// The operation document
        operation: Option<String>,
    },
}

impl App {
    /// Run the CLI application.
    pub async fn run(self) -> color_eyre::Result<()> {
        match &self.command {
            Command::Ops => self.run_ops(),
            Command::List { entity, fields } => self.run_list(entity, fields).await,
            Command::Exec { operation } => self.run_exec(operation.as_deref()).await,
        }
    }
}
