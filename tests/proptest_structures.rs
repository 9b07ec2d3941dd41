//! Property tests for the clue catalog and the suspect index

use detective_quest::data::{ClueCatalog, SuspectIndex, TABLE_SIZE};
use proptest::prelude::*;
use std::collections::HashMap;

proptest! {
    #[test]
    fn catalog_in_order_is_sorted_and_duplicate_free(
        clues in prop::collection::vec("[ -~]{0,24}", 0..40)
    ) {
        let mut catalog = ClueCatalog::new();
        for clue in &clues {
            catalog.insert(clue);
        }

        let sorted = catalog.sorted_clues();
        // Strictly ascending: sorted and free of duplicates in one check.
        prop_assert!(sorted.windows(2).all(|w| w[0] < w[1]));

        let mut expected = clues.clone();
        expected.sort();
        expected.dedup();
        prop_assert_eq!(sorted, expected);
        prop_assert_eq!(catalog.len(), catalog.sorted_clues().len());
    }
}

proptest! {
    #[test]
    fn bucket_is_always_in_range(key in "\\PC{0,32}") {
        prop_assert!(SuspectIndex::bucket_for(&key) < TABLE_SIZE);
    }
}

proptest! {
    #[test]
    fn lookup_returns_the_most_recent_insertion(
        pairs in prop::collection::vec(("[a-zA-Z ]{1,16}", "[A-Z][a-z]{1,8}"), 1..20)
    ) {
        let mut index = SuspectIndex::new();
        for (clue, suspect) in &pairs {
            index.insert(clue, suspect);
        }

        // Later insertions shadow earlier ones under the same clue.
        let mut last: HashMap<&str, &str> = HashMap::new();
        for (clue, suspect) in &pairs {
            last.insert(clue.as_str(), suspect.as_str());
        }
        for (clue, suspect) in &last {
            prop_assert_eq!(index.suspect_for(clue), *suspect);
        }
        prop_assert_eq!(index.entry_count(), pairs.len());
    }
}
