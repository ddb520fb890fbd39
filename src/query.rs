//! Substring query evaluation.
//!
//! A query fixes as many window-key positions as it has characters; the
//! remaining positions expand over the whole alphabet (wildcard expansion).
//! Queries of three or more characters touch exactly one bucket; shorter
//! queries fan out, up to 26² + 26 + 1 buckets for a single character.
//! Every candidate pulled from a bucket is re-verified by an exact substring
//! test, because under wildcard expansion a word can sit in a visited bucket
//! for reasons unrelated to the query.

use rustc_hash::FxHashSet;

use crate::alphabet::{Letter, WindowKey};
use crate::dictionary::{DictionaryStore, WordId};
use crate::index::TrigramIndex;

/// Identifiers of matching words, in bucket-traversal order, deduplicated
/// by identifier.
///
/// The order is deterministic for a given index construction; it is neither
/// dictionary order nor relevance order. The list is unbounded; windowing
/// to a visible row count is solely the viewport's job.
pub type MatchList = Vec<WordId>;

/// Find every word in `store` containing `query` as an exact substring.
///
/// Pure function of its inputs: repeated calls return the same list. An
/// empty query performs no search and returns an empty list (callers
/// special-case it before ever reaching the index). A query containing a
/// character outside the `a..=z` alphabet can never be formed into a window
/// key and also resolves to an empty list.
pub fn search(query: &str, store: &DictionaryStore, index: &TrigramIndex) -> MatchList {
    let letters: Option<Vec<Letter>> = query.chars().map(Letter::from_char).collect();
    let letters = match letters {
        Some(letters) if !letters.is_empty() => letters,
        _ => return MatchList::new(),
    };

    let mut matches = MatchList::new();
    let mut seen: FxHashSet<WordId> = FxHashSet::default();
    let mut visit = |key: WindowKey| {
        for &id in index.bucket(key) {
            // Mandatory verification: the index is a necessary-but-not-
            // sufficient filter.
            if store.word(id).contains(query) && seen.insert(id) {
                matches.push(id);
            }
        }
    };

    match letters[..] {
        [q0] => {
            visit(WindowKey::Uni(q0));
            for x in Letter::all() {
                visit(WindowKey::Bi(q0, x));
            }
            for x in Letter::all() {
                for y in Letter::all() {
                    visit(WindowKey::Tri(q0, x, y));
                }
            }
        }
        [q0, q1] => {
            visit(WindowKey::Bi(q0, q1));
            for x in Letter::all() {
                visit(WindowKey::Tri(q0, q1, x));
            }
        }
        [q0, q1, q2, ..] => {
            // Any occurrence of a three-letter-or-longer query starts a
            // full trigram window, so one bucket suffices.
            visit(WindowKey::Tri(q0, q1, q2));
        }
        [] => unreachable!("empty query returns early"),
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (DictionaryStore, TrigramIndex) {
        let store = DictionaryStore::from_terms(["cat", "cats", "scatter", "dog"]);
        let index = TrigramIndex::build(&store);
        (store, index)
    }

    fn texts(store: &DictionaryStore, matches: &[WordId]) -> Vec<String> {
        matches.iter().map(|&id| store.word(id).to_string()).collect()
    }

    #[test]
    fn test_three_letter_query() {
        let (store, index) = fixture();
        let matches = search("cat", &store, &index);
        let mut found = texts(&store, &matches);
        found.sort();
        assert_eq!(found, vec!["cat", "cats", "scatter"]);
    }

    #[test]
    fn test_single_letter_query_expands_wildcards() {
        let (store, index) = fixture();
        let matches = search("s", &store, &index);
        let mut found = texts(&store, &matches);
        found.sort();
        assert_eq!(found, vec!["cats", "scatter"]);
    }

    #[test]
    fn test_two_letter_query() {
        let (store, index) = fixture();
        let matches = search("at", &store, &index);
        let mut found = texts(&store, &matches);
        found.sort();
        assert_eq!(found, vec!["cat", "cats", "scatter"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let (store, index) = fixture();
        assert!(search("catss", &store, &index).is_empty());
    }

    #[test]
    fn test_empty_query_is_no_search() {
        let (store, index) = fixture();
        assert!(search("", &store, &index).is_empty());
    }

    #[test]
    fn test_out_of_alphabet_query_is_empty() {
        let (store, index) = fixture();
        assert!(search("Cat", &store, &index).is_empty());
        assert!(search("c-t", &store, &index).is_empty());
    }

    #[test]
    fn test_matches_are_deduplicated() {
        // "cococo" sits in several buckets the wildcard expansion visits
        // for "c"; it must still appear once.
        let store = DictionaryStore::from_terms(["cococo"]);
        let index = TrigramIndex::build(&store);
        let matches = search("c", &store, &index);
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_search_is_idempotent() {
        let (store, index) = fixture();
        let first = search("cat", &store, &index);
        let second = search("cat", &store, &index);
        assert_eq!(first, second);
    }

    #[test]
    fn test_longer_query_uses_prefix_window_only() {
        // Six-letter query still resolves through the (q0,q1,q2) bucket and
        // the containment check does the rest.
        let store = DictionaryStore::from_terms(["scatter", "scatters", "cat"]);
        let index = TrigramIndex::build(&store);
        let matches = search("catter", &store, &index);
        let mut found = texts(&store, &matches);
        found.sort();
        assert_eq!(found, vec!["scatter", "scatters"]);
    }
}
