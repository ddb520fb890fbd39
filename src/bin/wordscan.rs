//! wordscan - interactive incremental substring search
//!
//! Starts the index build in the background and drops into the interactive
//! loop (or resolves a one-shot query).

use clap::Parser;
use colored::Colorize;
use std::process;

use wordscan::cli::{commands, Cli, Commands};
use wordscan::index::builder::IndexBuilder;
use wordscan::repl::{self, ReplConfig};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Query { term, dict, limit }) => commands::query(term, dict, limit),
        Some(Commands::Repl { dict, limit }) => run_repl(dict, Some(limit)),
        None => run_repl(None, None),
    };

    if let Err(e) = result {
        eprintln!("{}: {e:#}", "Error".red().bold());
        process::exit(1);
    }
}

fn run_repl(dict: Option<std::path::PathBuf>, limit: Option<usize>) -> anyhow::Result<()> {
    // Index construction starts now, off the interactive path; the REPL
    // renders a placeholder until the handoff completes.
    let task = IndexBuilder::new(commands::word_source(dict)).spawn();

    print_banner();

    let mut config = ReplConfig::default();
    if let Some(limit) = limit {
        config.limit = Some(limit);
    }
    repl::run(task, config)
}

fn print_banner() {
    println!("{}", "wordscan".bright_cyan().bold());
    println!("{}", "Type letters to search the word list; /help for commands.".dimmed());
    println!();
}
