//! One-shot CLI command execution

use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::dictionary::WordSource;
use crate::index::builder::IndexBuilder;
use crate::session::highlight_span;

/// Pick the word source for an optional `--dict` path.
pub fn word_source(dict: Option<PathBuf>) -> WordSource {
    match dict {
        Some(path) => WordSource::File(path),
        None => WordSource::Bundled,
    }
}

/// Resolve `term` against the dictionary once and print the matches.
pub fn query(term: String, dict: Option<PathBuf>, limit: Option<usize>) -> Result<()> {
    let index = IndexBuilder::new(word_source(dict))
        .spawn()
        .wait()
        .context("failed to build the index")?;

    let matches = index.search(&term);
    if matches.is_empty() {
        println!("{}", "no matches".dimmed());
        return Ok(());
    }

    let shown = limit.unwrap_or(matches.len()).min(matches.len());
    for (row, &id) in matches[..shown].iter().enumerate() {
        let word = index.store().word(id);
        let line = match highlight_span(word, &term) {
            Some(span) => format!(
                "{}{}{}",
                &word[..span.start],
                word[span.clone()].cyan().bold(),
                &word[span.end..]
            ),
            None => word.to_string(),
        };
        println!("{:>4}. {line}", row + 1);
    }
    if shown < matches.len() {
        println!(
            "{}",
            format!("showing {shown} of {} matches", matches.len()).dimmed()
        );
    }
    Ok(())
}
