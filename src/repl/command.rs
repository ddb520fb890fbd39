//! REPL command parsing.
//!
//! A bare line is a query; lines starting with `/` are commands. Keeping
//! the two syntactically apart means any dictionary word can be searched
//! for without quoting.

/// A parsed REPL input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Search for a substring: any line not starting with `/`.
    Search {
        /// The query text
        term: String,
    },
    /// Show or set the display limit: `/limit [n|off]`.
    Limit {
        /// New limit; `None` leaves it unchanged (show), `Some(None)` is unbounded.
        limit: Option<Option<usize>>,
    },
    /// Show index statistics: `/stats`.
    Stats,
    /// Show help: `/help`.
    Help,
    /// Leave the REPL: `/exit` or `/quit`.
    Exit,
}

impl Command {
    /// Parse one input line. Empty lines parse to an empty search (the
    /// loop treats it as "no search performed").
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let Some(rest) = line.strip_prefix('/') else {
            return Ok(Self::Search {
                term: line.to_string(),
            });
        };

        let mut parts = rest.split_whitespace();
        let name = parts.next().unwrap_or("");
        let arg = parts.next();
        if parts.next().is_some() {
            return Err(format!("too many arguments for /{name}"));
        }

        match name {
            "limit" => match arg {
                None => Ok(Self::Limit { limit: None }),
                Some("off") => Ok(Self::Limit { limit: Some(None) }),
                Some(n) => n
                    .parse::<usize>()
                    .map(|n| Self::Limit {
                        limit: Some(Some(n)),
                    })
                    .map_err(|_| format!("not a limit: {n}")),
            },
            "stats" => Self::no_arg(arg, Self::Stats, "stats"),
            "help" | "?" => Self::no_arg(arg, Self::Help, "help"),
            "exit" | "quit" => Self::no_arg(arg, Self::Exit, "exit"),
            other => Err(format!("unknown command: /{other} (try /help)")),
        }
    }

    fn no_arg(arg: Option<&str>, command: Self, name: &str) -> Result<Self, String> {
        match arg {
            None => Ok(command),
            Some(_) => Err(format!("/{name} takes no argument")),
        }
    }
}
