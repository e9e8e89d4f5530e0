//! CLI argument parsing for folio.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Browse a portfolio of PDF and image projects", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging (logs to /tmp/folio-tui.log)
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Catalog file to load instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive TUI mode (default)
    Tui,

    /// List projects, optionally filtered by category
    List {
        /// Category id to filter by
        #[arg(short, long)]
        category: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List categories with project counts
    Categories {
        #[arg(long)]
        json: bool,
    },

    /// Show a project and what its modal would display
    Show {
        /// Project id
        id: String,
        /// Document URL to select (multi-pdf projects)
        #[arg(long)]
        document: Option<String>,
        #[arg(long)]
        json: bool,
    },

    /// Open a project's document or image with the external viewer
    Open {
        /// Project id
        id: String,
        /// Document URL to select (multi-pdf projects)
        #[arg(long)]
        document: Option<String>,
    },
}
