//! # wordscan
//!
//! Interactive incremental substring search over a static word list.
//!
//! A trigram-bucketed index is built once over the dictionary (in the
//! background, off the interactive path) and published through a one-shot
//! handoff. Every query expands into a set of window keys, collects the
//! candidate words registered under those buckets, and verifies each
//! candidate by an exact substring test.
//!
//! ## Example
//!
//! ```rust,ignore
//! use wordscan::prelude::*;
//!
//! let task = IndexBuilder::new(WordSource::Bundled).spawn();
//! let index = task.wait()?;
//!
//! for id in index.search("cat") {
//!     println!("Match: {}", index.store().word(id));
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alphabet;
pub mod cli;
pub mod dictionary;
pub mod error;
pub mod index;
pub mod query;
pub mod repl;
pub mod session;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::alphabet::{Letter, WindowKey, ALPHABET_SIZE};
    pub use crate::dictionary::{DictionaryStore, WordId, WordSource};
    pub use crate::error::WordscanError;
    pub use crate::index::builder::{BuildPhase, BuildProgress, IndexBuilder, IndexTask};
    pub use crate::index::{SearchIndex, TrigramIndex};
    pub use crate::query::{search, MatchList};
    pub use crate::session::{SessionState, ViewportState};
}
