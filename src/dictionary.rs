//! Dictionary storage: the ordered, immutable word list.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::WordscanError;

/// Word list embedded in the binary, used when no `--dict` path is given.
const BUNDLED_WORDS: &str = include_str!("../data/words.txt");

/// Identifier of a word: its position in the [`DictionaryStore`] sequence.
///
/// Identifiers are assigned at load time and stable for the lifetime of the
/// process; no word is ever removed or renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordId(u32);

impl WordId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Position of the word in the store.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Where the dictionary words come from.
#[derive(Debug, Clone)]
pub enum WordSource {
    /// The word list bundled into the binary.
    Bundled,
    /// A whitespace-delimited word file on disk.
    File(PathBuf),
    /// An in-memory term list (tests and embedding callers).
    Terms(Vec<String>),
}

impl WordSource {
    /// Load the source into a [`DictionaryStore`].
    ///
    /// Failure to open or read a file source is fatal at startup; there is
    /// no rejection path at the token level, any whitespace-delimited token
    /// is accepted as a word.
    pub fn load(&self) -> Result<DictionaryStore, WordscanError> {
        match self {
            Self::Bundled => Ok(DictionaryStore::from_text(BUNDLED_WORDS)),
            Self::File(path) => DictionaryStore::load_file(path),
            Self::Terms(terms) => Ok(DictionaryStore::from_terms(terms.iter().cloned())),
        }
    }
}

/// The ordered sequence of dictionary words.
///
/// Insertion order is file order and duplicates are kept; a word's
/// identifier is its position. Built exactly once, before the first query,
/// and immutable thereafter.
#[derive(Debug, Default)]
pub struct DictionaryStore {
    words: Vec<String>,
}

impl DictionaryStore {
    /// Build a store from an iterator of terms, in order.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: terms.into_iter().map(Into::into).collect(),
        }
    }

    /// Tokenize a text blob into whitespace-delimited words.
    pub fn from_text(text: &str) -> Self {
        Self::from_terms(text.split_whitespace())
    }

    /// Read a word file from disk.
    pub fn load_file(path: &Path) -> Result<Self, WordscanError> {
        let text = fs::read_to_string(path).map_err(|source| WordscanError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(&text))
    }

    /// Text of the word with the given identifier.
    ///
    /// Identifiers handed out by this store (directly or through the index
    /// built over it) are always in range.
    pub fn word(&self, id: WordId) -> &str {
        &self.words[id.index()]
    }

    /// Iterate over `(identifier, word)` pairs in store order.
    pub fn iter(&self) -> impl Iterator<Item = (WordId, &str)> {
        self.words
            .iter()
            .enumerate()
            .map(|(i, word)| (WordId::new(i), word.as_str()))
    }

    /// Number of words in the store.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the store holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_tokenizes_whitespace() {
        let store = DictionaryStore::from_text("cat  cats\nscatter\tdog\n");
        assert_eq!(store.len(), 4);
        assert_eq!(store.word(WordId::new(0)), "cat");
        assert_eq!(store.word(WordId::new(3)), "dog");
    }

    #[test]
    fn test_duplicates_are_kept() {
        let store = DictionaryStore::from_text("cat cat cat");
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_ids_follow_insertion_order() {
        let store = DictionaryStore::from_terms(["b", "a", "c"]);
        let ids: Vec<usize> = store.iter().map(|(id, _)| id.index()).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(store.word(WordId::new(1)), "a");
    }

    #[test]
    fn test_bundled_source_loads() {
        let store = WordSource::Bundled.load().unwrap();
        assert!(!store.is_empty());
    }

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let err = WordSource::File("/nonexistent/words.txt".into())
            .load()
            .unwrap_err();
        assert!(matches!(err, WordscanError::SourceUnavailable { .. }));
    }
}
