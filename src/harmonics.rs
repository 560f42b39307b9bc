//! Near-miss vocabulary lookup for OCR misreading review.
//!
//! An OCR misreading of a frequent word usually lands within an edit or
//! two of it: `tbe` for `the`, `arid` for `and`. Listing the vocabulary
//! around a target word, counts attached, lets a proofreader spot and fix
//! those variants. The engine only lists; replacing anything is the
//! caller's decision.

use crate::distance::{distance_is_one, distance_is_two};
use crate::wordcount::WordIndex;

/// Which edit distance to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarmonicOrder {
    One,
    Two,
}

/// All vocabulary words at the requested edit distance from `word`, paired
/// with their occurrence counts. The target word itself is never listed
/// (the order-two check would otherwise always include it). Results are
/// ordered by count, most frequent first, ties alphabetically, so review
/// lists stay stable.
pub fn harmonics(word: &str, index: &WordIndex, order: HarmonicOrder) -> Vec<(String, u32)> {
    let predicate: fn(&str, &str) -> bool = match order {
        HarmonicOrder::One => distance_is_one,
        HarmonicOrder::Two => distance_is_two,
    };
    let mut hits: Vec<(String, u32)> = index
        .iter()
        .filter(|&(candidate, _)| candidate != word && predicate(candidate, word))
        .map(|(candidate, count)| (candidate.to_string(), count))
        .collect();
    hits.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> WordIndex {
        [
            ("the", 120),
            ("tbe", 3),
            ("tlie", 1),
            ("then", 7),
            ("they", 9),
            ("there", 4),
            ("cat", 2),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn order_one_lists_single_edit_variants() {
        let hits = harmonics("the", &index(), HarmonicOrder::One);
        assert_eq!(
            hits,
            vec![
                ("they".to_string(), 9),
                ("then".to_string(), 7),
                ("tbe".to_string(), 3),
            ]
        );
    }

    #[test]
    fn order_two_lists_wider_variants_without_the_target() {
        let hits = harmonics("the", &index(), HarmonicOrder::Two);
        // `there` is two insertions away. `tbe` passes the loose
        // equal-length order-two check as well. `tlie` needs an insertion
        // plus a substitution — a length difference of one, which the
        // restricted model never reports as distance two. The target
        // itself must not appear.
        assert!(hits.iter().any(|(word, _)| word == "there"));
        assert!(hits.iter().any(|(word, _)| word == "tbe"));
        assert!(!hits.iter().any(|(word, _)| word == "tlie"));
        assert!(!hits.iter().any(|(word, _)| word == "the"));
    }

    #[test]
    fn unrelated_words_are_excluded() {
        let hits = harmonics("the", &index(), HarmonicOrder::One);
        assert!(!hits.iter().any(|(word, _)| word == "cat"));
    }

    #[test]
    fn ordering_is_count_then_alphabetical() {
        let index: WordIndex = [("bat", 2), ("cap", 2), ("can", 5)].into_iter().collect();
        let hits = harmonics("cat", &index, HarmonicOrder::One);
        assert_eq!(
            hits,
            vec![
                ("can".to_string(), 5),
                ("bat".to_string(), 2),
                ("cap".to_string(), 2),
            ]
        );
    }
}
