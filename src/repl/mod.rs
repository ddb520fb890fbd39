//! Interactive substring-search loop.
//!
//! Each entered line is a query (or a slash command); every query is fully
//! re-resolved against the published index. The loop renders a loading
//! placeholder until the background build publishes, and never touches the
//! index before that.

pub mod command;
pub mod helper;

pub use command::Command;
pub use helper::WordscanHelper;

use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor};

use crate::index::builder::{BuildProgress, IndexTask};
use crate::index::SearchIndex;
use crate::session::{highlight_span, SessionState};

/// REPL configuration
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Prompt string
    pub prompt: String,
    /// History file path
    pub history_file: Option<PathBuf>,
    /// Display limit for match lists (`None` = unbounded)
    pub limit: Option<usize>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "wordscan> ".to_string(),
            history_file: Some(
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".wordscan_history"),
            ),
            limit: Some(30),
        }
    }
}

/// Run the interactive loop, waiting on the background build first.
pub fn run(task: IndexTask, config: ReplConfig) -> Result<()> {
    let index = wait_for_index(task)?;

    let rustyline_config = Config::builder()
        .auto_add_history(true)
        .history_ignore_dups(true)?
        .history_ignore_space(true)
        .build();
    let mut editor: Editor<WordscanHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(rustyline_config)?;
    editor.set_helper(Some(WordscanHelper::new()));

    if let Some(history_path) = &config.history_file {
        if history_path.exists() {
            let _ = editor.load_history(history_path);
        }
    }

    let mut session = SessionState::new();
    let mut limit = config.limit;

    loop {
        match editor.readline(&config.prompt) {
            Ok(line) => match Command::parse(&line) {
                Ok(Command::Search { term }) => {
                    session.set_query(term);
                    show_matches(&session, &index, limit);
                }
                Ok(Command::Limit { limit: new_limit }) => {
                    if let Some(new_limit) = new_limit {
                        limit = new_limit;
                    }
                    match limit {
                        Some(n) => println!("display limit: {n}"),
                        None => println!("display limit: off"),
                    }
                }
                Ok(Command::Stats) => show_stats(&index),
                Ok(Command::Help) => show_help(),
                Ok(Command::Exit) => break,
                Err(message) => eprintln!("{}: {message}", "Error".red().bold()),
            },
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    if let Some(history_path) = &config.history_file {
        let _ = editor.save_history(history_path);
    }
    Ok(())
}

/// Poll the build, rendering a loading placeholder until publication.
fn wait_for_index(mut task: IndexTask) -> Result<Arc<SearchIndex>> {
    let started = Instant::now();
    let mut announced = false;
    loop {
        match task.try_ready()? {
            BuildProgress::Ready(index) => {
                println!(
                    "  Indexed {} word(s), {} bucket(s) in {:.0?}",
                    index.store().len().to_string().green().bold(),
                    index.index().bucket_count().to_string().green(),
                    started.elapsed()
                );
                println!();
                return Ok(index);
            }
            BuildProgress::Building => {
                if !announced {
                    println!("  {}", "Building index...".dimmed());
                    announced = true;
                }
                thread::sleep(Duration::from_millis(10));
            }
        }
    }
}

fn show_matches(session: &SessionState, index: &SearchIndex, limit: Option<usize>) {
    if session.query().is_empty() {
        println!("Current word: {}", "---".dimmed());
        return;
    }

    let matches = session.matches(index);
    if matches.is_empty() {
        println!("{}", "no matches".dimmed());
        return;
    }

    let shown = limit.unwrap_or(matches.len()).min(matches.len());
    for (row, &id) in matches[..shown].iter().enumerate() {
        let word = index.store().word(id);
        println!("{:>4}. {}", row + 1, emphasized(word, session.query()));
    }
    if shown < matches.len() {
        println!(
            "{}",
            format!("showing {shown} of {} matches", matches.len()).dimmed()
        );
    }
}

/// Render `word` with the first occurrence of `query` emphasized.
fn emphasized(word: &str, query: &str) -> String {
    match highlight_span(word, query) {
        Some(span) => format!(
            "{}{}{}",
            &word[..span.start],
            word[span.clone()].cyan().bold(),
            &word[span.end..]
        ),
        None => word.to_string(),
    }
}

fn show_stats(index: &SearchIndex) {
    println!("words:   {}", index.store().len());
    println!("buckets: {}", index.index().bucket_count());
    println!("entries: {}", index.index().entry_count());
}

fn show_help() {
    println!("Type letters to search; matching words are listed with the");
    println!("typed substring highlighted.");
    println!();
    println!("  /limit [n|off]   show or set the display limit");
    println!("  /stats           index statistics");
    println!("  /help            this help");
    println!("  /exit, /quit     leave");
}
