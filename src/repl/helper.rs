//! Rustyline helper integration
//!
//! Provides command completion, history hinting, and light highlighting for
//! the interactive loop.

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hinter, HistoryHinter};
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};
use std::borrow::Cow;

const COMMANDS: &[&str] = &["/limit", "/stats", "/help", "/exit", "/quit"];

/// REPL helper
pub struct WordscanHelper {
    hinter: HistoryHinter,
}

impl WordscanHelper {
    /// Create a new helper instance
    pub fn new() -> Self {
        Self {
            hinter: HistoryHinter::new(),
        }
    }
}

impl Default for WordscanHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl Helper for WordscanHelper {}

impl Completer for WordscanHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let line = &line[..pos];
        // Only slash commands complete; a bare line is a query over the
        // dictionary and completion would defeat the incremental search.
        if !line.starts_with('/') || line.contains(char::is_whitespace) {
            return Ok((0, vec![]));
        }

        let candidates = COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: format!("{cmd} "),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for WordscanHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<Self::Hint> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Highlighter for WordscanHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Cow::Owned(line.cyan().to_string())
        } else {
            Cow::Borrowed(line)
        }
    }

    fn highlight_char(&self, line: &str, _pos: usize, _forced: bool) -> bool {
        line.starts_with('/')
    }
}

impl Validator for WordscanHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        // Always accept input; bad commands are reported by the loop.
        Ok(ValidationResult::Valid(None))
    }
}
