//! Property tests for substring completeness and verification soundness.

use proptest::prelude::*;

use wordscan::prelude::*;

proptest! {
    /// Every substring of every word finds that word.
    #[test]
    fn search_includes_every_word_containing_the_query(
        words in prop::collection::vec("[a-z]{1,12}", 1..20)
    ) {
        let store = DictionaryStore::from_terms(words.iter().cloned());
        let index = TrigramIndex::build(&store);

        for (id, word) in store.iter() {
            for start in 0..word.len() {
                for end in (start + 1)..=word.len() {
                    let query = &word[start..end];
                    prop_assert!(
                        search(query, &store, &index).contains(&id),
                        "word {:?} not found for its own substring {:?}",
                        word,
                        query
                    );
                }
            }
        }
    }

    /// No false positive survives verification.
    #[test]
    fn every_match_contains_the_query(
        words in prop::collection::vec("[a-z]{1,12}", 1..20),
        query in "[a-z]{1,6}"
    ) {
        let store = DictionaryStore::from_terms(words.iter().cloned());
        let index = TrigramIndex::build(&store);

        for id in search(&query, &store, &index) {
            prop_assert!(store.word(id).contains(&query));
        }
    }

    /// Search is a pure function of its inputs, and never repeats an id.
    #[test]
    fn search_is_deterministic_and_deduplicated(
        words in prop::collection::vec("[a-z]{1,12}", 1..20),
        query in "[a-z]{1,6}"
    ) {
        let store = DictionaryStore::from_terms(words.iter().cloned());
        let index = TrigramIndex::build(&store);

        let first = search(&query, &store, &index);
        prop_assert_eq!(&first, &search(&query, &store, &index));

        let mut ids = first.clone();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), first.len());
    }

    /// The match set equals the brute-force scan, exactly.
    #[test]
    fn search_agrees_with_linear_scan(
        words in prop::collection::vec("[a-z]{1,12}", 1..30),
        query in "[a-z]{1,4}"
    ) {
        let store = DictionaryStore::from_terms(words.iter().cloned());
        let index = TrigramIndex::build(&store);

        let mut via_index = search(&query, &store, &index);
        via_index.sort();
        let mut via_scan: Vec<WordId> = store
            .iter()
            .filter(|(_, word)| word.contains(&query))
            .map(|(id, _)| id)
            .collect();
        via_scan.sort();

        prop_assert_eq!(via_index, via_scan);
    }
}
