//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level argument surface.
#[derive(Parser)]
#[command(name = "wordscan")]
#[command(about = "Interactive incremental substring search over a word list")]
#[command(version)]
pub struct Cli {
    /// Subcommand; the interactive loop when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive search loop (the default)
    Repl {
        /// Word file to index (bundled list if not specified)
        #[arg(short, long)]
        dict: Option<PathBuf>,

        /// Display limit for match lists
        #[arg(short, long, default_value = "30")]
        limit: usize,
    },

    /// Resolve a single query and exit
    Query {
        /// Query term
        term: String,

        /// Word file to index (bundled list if not specified)
        #[arg(short, long)]
        dict: Option<PathBuf>,

        /// Display limit for match lists (unbounded if not specified)
        #[arg(short, long)]
        limit: Option<usize>,
    },
}
