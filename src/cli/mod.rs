pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::store::DuplicatePolicy;

#[derive(Parser)]
#[command(name = "lectern")]
#[command(about = "Fetch a JSON post feed, chart aggregates, build reading reports", long_about = None)]
pub struct Cli {
    /// Database file (defaults to the platform data directory)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Override the configured duplicate-id policy for ingestion
    #[arg(long, global = true, value_enum)]
    pub on_duplicate: Option<DuplicatePolicy>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download the post feed and store it
    Fetch,
    /// Delete all stored posts
    Clear,
    /// Print stored posts ordered by id
    List,
    /// Print posts-per-user and average-body-length tables
    Stats,
    /// Analyze a plain-text book file: metadata and a first-chapter
    /// word-count histogram
    Chapter {
        /// Path to the book text file
        path: PathBuf,
    },
    /// Build an HTML reading report from a book page
    Report {
        /// URL of the book's HTML page
        url: String,

        /// Report author (falls back to [report].author in config)
        #[arg(short, long)]
        author: Option<String>,

        /// Output file
        #[arg(short, long, default_value = "report.html")]
        out: PathBuf,

        /// Open the generated report in the default browser
        #[arg(long)]
        open: bool,
    },
    /// Launch the TUI
    Tui,
}
