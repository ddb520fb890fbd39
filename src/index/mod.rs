//! Trigram-bucketed index over the dictionary.
//!
//! Every window of up to three consecutive alphabet letters in every word is
//! registered under its [`WindowKey`] bucket. The index narrows a query to a
//! candidate set; it never answers containment by itself (the query path
//! re-verifies every candidate with an exact substring test).

pub mod builder;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::alphabet::WindowKey;
use crate::dictionary::{DictionaryStore, WordId};
use crate::query::{self, MatchList};

/// Identifiers registered under one window key, in registration order.
///
/// Most buckets stay small; SmallVec keeps them off the heap.
type Bucket = SmallVec<[WordId; 4]>;

/// Mapping from window keys to the words containing that window.
///
/// Built once from a [`DictionaryStore`], immutable after construction.
/// Registration is append-only per bucket; a word appears once per matching
/// window position, with immediately-repeated identifiers collapsed to bound
/// bucket growth (full per-key dedup is not guaranteed and the query path
/// must not rely on it).
#[derive(Debug, Default)]
pub struct TrigramIndex {
    buckets: FxHashMap<WindowKey, Bucket>,
}

impl TrigramIndex {
    /// Build the index over every word in the store.
    ///
    /// Construction over an already-validated in-memory dictionary cannot
    /// fail and performs no I/O.
    pub fn build(store: &DictionaryStore) -> Self {
        let mut buckets: FxHashMap<WindowKey, Bucket> = FxHashMap::default();
        for (id, word) in store.iter() {
            let bytes = word.as_bytes();
            for j in 0..bytes.len() {
                if let Some(key) = WindowKey::at(bytes, j) {
                    push_adjacent_unique(buckets.entry(key).or_default(), id);
                }
            }
        }
        Self { buckets }
    }

    /// Identifiers registered under `key`, empty when no word contains it.
    pub fn bucket(&self, key: WindowKey) -> &[WordId] {
        self.buckets.get(&key).map(|b| b.as_slice()).unwrap_or(&[])
    }

    /// Number of distinct window keys with at least one registration.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total registrations across all buckets.
    pub fn entry_count(&self) -> usize {
        self.buckets.values().map(|b| b.len()).sum()
    }
}

/// Append `id` unless it equals the bucket's current tail.
///
/// A word like `"aaaa"` produces the same window at consecutive offsets;
/// collapsing those adjacent repeats bounds bucket growth. Non-adjacent
/// repeats may survive; the query path deduplicates by identifier.
fn push_adjacent_unique(bucket: &mut Bucket, id: WordId) {
    if bucket.last() != Some(&id) {
        bucket.push(id);
    }
}

/// A fully built, immutable `(store, index)` pair.
///
/// This is the value published by the background build exactly once; after
/// publication it is freely shared read-only with no further
/// synchronization.
#[derive(Debug)]
pub struct SearchIndex {
    store: DictionaryStore,
    index: TrigramIndex,
}

impl SearchIndex {
    /// Build the index over `store` and pair the two up.
    pub fn build(store: DictionaryStore) -> Self {
        let index = TrigramIndex::build(&store);
        Self { store, index }
    }

    /// The dictionary the index was built over.
    pub fn store(&self) -> &DictionaryStore {
        &self.store
    }

    /// The trigram index itself.
    pub fn index(&self) -> &TrigramIndex {
        &self.index
    }

    /// Find every word containing `query` as a substring.
    ///
    /// See [`crate::query::search`].
    pub fn search(&self, query: &str) -> MatchList {
        query::search(query, &self.store, &self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Letter;

    fn key3(a: char, b: char, c: char) -> WindowKey {
        WindowKey::Tri(
            Letter::from_char(a).unwrap(),
            Letter::from_char(b).unwrap(),
            Letter::from_char(c).unwrap(),
        )
    }

    #[test]
    fn test_every_window_is_registered() {
        let store = DictionaryStore::from_terms(["cats"]);
        let index = TrigramIndex::build(&store);

        assert_eq!(index.bucket(key3('c', 'a', 't')).len(), 1);
        assert_eq!(index.bucket(key3('a', 't', 's')).len(), 1);
        assert_eq!(
            index
                .bucket(WindowKey::Bi(
                    Letter::from_char('t').unwrap(),
                    Letter::from_char('s').unwrap()
                ))
                .len(),
            1
        );
        assert_eq!(
            index
                .bucket(WindowKey::Uni(Letter::from_char('s').unwrap()))
                .len(),
            1
        );
    }

    #[test]
    fn test_adjacent_repeats_collapse() {
        let store = DictionaryStore::from_terms(["aaaa"]);
        let index = TrigramIndex::build(&store);
        // Offsets 0 and 1 both yield (a,a,a); only one registration survives.
        assert_eq!(index.bucket(key3('a', 'a', 'a')).len(), 1);
    }

    #[test]
    fn test_distinct_words_share_a_bucket() {
        let store = DictionaryStore::from_terms(["cat", "scatter"]);
        let index = TrigramIndex::build(&store);
        let bucket = index.bucket(key3('c', 'a', 't'));
        assert_eq!(bucket.len(), 2);
        assert_eq!(bucket[0].index(), 0);
        assert_eq!(bucket[1].index(), 1);
    }

    #[test]
    fn test_truncated_window_does_not_collide_with_trigram() {
        // "xab" ends in the bigram (a,b); "aba" contains the trigram
        // (a,b,a). With distinct key variants the bigram bucket holds only
        // the word that actually ends there.
        let store = DictionaryStore::from_terms(["xab", "aba"]);
        let index = TrigramIndex::build(&store);
        let bi = index.bucket(WindowKey::Bi(
            Letter::from_char('a').unwrap(),
            Letter::from_char('b').unwrap(),
        ));
        assert_eq!(bi.len(), 1);
        assert_eq!(bi[0].index(), 0);
    }

    #[test]
    fn test_empty_bucket_for_absent_window() {
        let store = DictionaryStore::from_terms(["cat"]);
        let index = TrigramIndex::build(&store);
        assert!(index.bucket(key3('d', 'o', 'g')).is_empty());
    }
}
