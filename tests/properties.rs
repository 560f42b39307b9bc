//! Algebraic properties of the pure engine functions.

use proptest::prelude::*;

use rust_proof_clean::{
    CleanupRule, WordIndex, apply_rules, distance_is_one, distance_is_two, word_counts,
};

proptest! {
    #[test]
    fn empty_rule_set_is_identity(text in "\\PC{0,200}") {
        prop_assert_eq!(apply_rules(&text, &[]), text);
    }

    #[test]
    fn multiwhite_is_idempotent(text in "[a-z \\n]{0,200}") {
        let once = apply_rules(&text, &[CleanupRule::MultiWhite]);
        let twice = apply_rules(&once, &[CleanupRule::MultiWhite]);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn distance_one_is_irreflexive(word in "\\PC{1,12}") {
        prop_assert!(!distance_is_one(&word, &word));
    }

    #[test]
    fn distance_predicates_are_symmetric(a in "\\PC{0,8}", b in "\\PC{0,8}") {
        prop_assert_eq!(distance_is_one(&a, &b), distance_is_one(&b, &a));
        prop_assert_eq!(distance_is_two(&a, &b), distance_is_two(&b, &a));
    }

    #[test]
    fn per_page_counts_sum_to_the_merged_index(
        pages in proptest::collection::vec("[A-Za-z ,.'\\n-]{0,80}", 1..5)
    ) {
        let mut merged = WordIndex::default();
        for page in &pages {
            merged.merge(&word_counts(page));
        }
        for (word, count) in merged.iter() {
            let sum: u32 = pages.iter().map(|page| word_counts(page).count(word)).sum();
            prop_assert_eq!(count, sum);
        }
    }

    #[test]
    fn tokens_are_never_empty(text in "\\PC{0,200}") {
        let index = word_counts(&text);
        for (word, count) in index.iter() {
            prop_assert!(!word.is_empty());
            prop_assert!(count > 0);
        }
    }
}
