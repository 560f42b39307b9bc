//! End-of-line hyphen resolution.
//!
//! OCR output splits words across line breaks with a trailing hyphen. Each
//! split is a candidate for rejoining; the corpus itself is the first
//! arbiter (which form actually occurs more often in the document), a
//! spelling dictionary the second, and a configured fallback policy the
//! last resort. Ties and unknowns never fail — they fall through.

use lazy_static::lazy_static;
use regex::Regex;

use crate::wordcount::WordIndex;

lazy_static! {
    // A word, a hyphen, a line break, then the continuation word together
    // with any attached punctuation and trailing whitespace. The
    // continuation must be at least two characters long to qualify.
    static ref EOL_HYPHEN: Regex = Regex::new(r"\w+-\n\w\S+[\s^\r\n]*").unwrap();
    // The bare word pair inside a candidate span.
    static ref EOL_HYPHEN_WORD: Regex = Regex::new(r"\w+-\n\w+").unwrap();
    // Page-boundary hyphens marked `-*` by the upstream page splitter.
    static ref STAR_HYPHEN: Regex = Regex::new(r"\w+-\*\w+").unwrap();
}

/// What to do with a candidate when neither corpus counts nor the
/// dictionary decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HyphenFallback {
    /// Leave the split in place.
    #[default]
    DoNothing,
    /// Join onto one line, hyphen kept.
    KeepHyphen,
    /// Join onto one line, hyphen removed.
    RemoveHyphen,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HyphenOptions {
    /// Compare both forms against the document's own word counts first.
    pub use_text: bool,
    /// Ask the dictionary when the counts do not decide.
    pub use_dictionary: bool,
    pub fallback: HyphenFallback,
}

/// Validity oracle for candidate word forms, injected by the caller.
/// See [`SpellingDictionary`](crate::dictionary::SpellingDictionary) for
/// the Hunspell-backed implementation.
pub trait HyphenDictionary {
    fn is_word(&self, word: &str) -> bool;
}

/// External relative-frequency source for two competing word forms, e.g. a
/// corpus-statistics service. Injected by the caller; the engine ships no
/// network implementation.
pub trait WordProbe {
    /// Relative frequencies of `first` and `second`, in that order.
    fn relative_frequencies(&self, first: &str, second: &str) -> (f64, f64);
}

/// How a candidate was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HyphenDecision {
    /// Joined onto one line, hyphen removed.
    Joined,
    /// Joined onto one line, hyphen kept.
    KeptHyphen,
    /// Left exactly as matched.
    Untouched,
}

/// One end-of-line hyphen split, with the decision that was applied to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HyphenCandidate {
    /// The full matched span, line break and trailing whitespace included.
    pub matched: String,
    /// Both words on one line, hyphen kept.
    pub hyphenated: String,
    /// Both words on one line, hyphen removed.
    pub joined: String,
    pub decision: HyphenDecision,
}

/// Scan `text` for end-of-line hyphen splits, decide each one, and return
/// the rewritten text together with the candidate list.
///
/// Candidates are processed in match order and each replacement targets
/// the first remaining literal occurrence of its span — not the span's own
/// offset. With repeated identical spans a later candidate can therefore
/// land on an earlier position; see the module tests.
pub fn resolve_eol_hyphens(
    text: &str,
    index: Option<&WordIndex>,
    dictionary: Option<&dyn HyphenDictionary>,
    options: &HyphenOptions,
) -> (String, Vec<HyphenCandidate>) {
    let spans: Vec<String> = EOL_HYPHEN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();

    let mut out = text.to_string();
    let mut candidates = Vec::with_capacity(spans.len());
    for matched in spans {
        let Some(word_pair) = EOL_HYPHEN_WORD.find(&matched) else {
            continue;
        };
        let word_pair = word_pair.as_str();
        // The two competing word forms.
        let hyphenated = word_pair.replace('\n', "");
        let joined = word_pair.replace("-\n", "");
        // Full replacement spans, trailing whitespace normalized to one
        // line feed.
        let hyphenated_span = format!("{}\n", matched.replace('\n', "").trim_end());
        let joined_span = format!("{}\n", matched.replace("-\n", "").trim_end());

        let mut decision = HyphenDecision::Untouched;
        if options.use_text {
            if let Some(index) = index {
                let hyphenated_count = index.count(&hyphenated);
                let joined_count = index.count(&joined);
                if joined_count > hyphenated_count {
                    decision = HyphenDecision::Joined;
                } else if hyphenated_count > joined_count {
                    decision = HyphenDecision::KeptHyphen;
                }
                // Tied counts decide nothing; fall through.
            }
        }
        if decision == HyphenDecision::Untouched && options.use_dictionary {
            if let Some(dictionary) = dictionary {
                let joined_known = dictionary.is_word(&joined);
                let hyphenated_known = dictionary.is_word(&hyphenated);
                if joined_known && !hyphenated_known {
                    decision = HyphenDecision::Joined;
                } else if hyphenated_known && !joined_known {
                    decision = HyphenDecision::KeptHyphen;
                }
            }
        }
        if decision == HyphenDecision::Untouched {
            decision = match options.fallback {
                HyphenFallback::DoNothing => HyphenDecision::Untouched,
                HyphenFallback::KeepHyphen => HyphenDecision::KeptHyphen,
                HyphenFallback::RemoveHyphen => HyphenDecision::Joined,
            };
        }

        match decision {
            HyphenDecision::Joined => out = out.replacen(&matched, &joined_span, 1),
            HyphenDecision::KeptHyphen => out = out.replacen(&matched, &hyphenated_span, 1),
            HyphenDecision::Untouched => {}
        }
        candidates.push(HyphenCandidate {
            matched,
            hyphenated,
            joined,
            decision,
        });
    }
    (out, candidates)
}

/// One `-*` page-boundary hyphen, surfaced with both candidate forms and
/// their corpus counts for human review. No replacement happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarHyphenCandidate {
    pub matched: String,
    pub joined: String,
    pub hyphenated: String,
    pub joined_count: u32,
    pub hyphenated_count: u32,
}

/// Ask an external frequency source which of a starred candidate's forms
/// is better attested. Returns the preferred form and how many times more
/// frequent it is.
pub fn probe_star_hyphen(
    candidate: &StarHyphenCandidate,
    probe: &dyn WordProbe,
) -> (String, f64) {
    let (joined_freq, hyphenated_freq) =
        probe.relative_frequencies(&candidate.joined, &candidate.hyphenated);
    if joined_freq > hyphenated_freq {
        (candidate.joined.clone(), joined_freq / hyphenated_freq)
    } else {
        (candidate.hyphenated.clone(), hyphenated_freq / joined_freq)
    }
}

pub fn star_hyphen_candidates(text: &str, index: &WordIndex) -> Vec<StarHyphenCandidate> {
    STAR_HYPHEN
        .find_iter(text)
        .map(|m| {
            let matched = m.as_str().to_string();
            let joined = matched.replace("-*", "");
            let hyphenated = matched.replace("-*", "-");
            StarHyphenCandidate {
                joined_count: index.count(&joined),
                hyphenated_count: index.count(&hyphenated),
                matched,
                joined,
                hyphenated,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordcount::word_counts;

    fn text_options() -> HyphenOptions {
        HyphenOptions {
            use_text: true,
            ..Default::default()
        }
    }

    struct FakeDictionary(Vec<&'static str>);

    impl HyphenDictionary for FakeDictionary {
        fn is_word(&self, word: &str) -> bool {
            self.0.iter().any(|known| *known == word)
        }
    }

    #[test]
    fn corpus_majority_joins() {
        let index: WordIndex = [("helloworld", 5), ("hello-world", 0)].into_iter().collect();
        let (out, candidates) =
            resolve_eol_hyphens("hello-\nworld", Some(&index), None, &text_options());
        assert_eq!(out, "helloworld\n");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].decision, HyphenDecision::Joined);
        assert_eq!(candidates[0].joined, "helloworld");
        assert_eq!(candidates[0].hyphenated, "hello-world");
    }

    #[test]
    fn corpus_majority_keeps_hyphen() {
        let index: WordIndex = [("well-known", 3), ("wellknown", 1)].into_iter().collect();
        let (out, candidates) =
            resolve_eol_hyphens("a well-\nknown fact", Some(&index), None, &text_options());
        assert_eq!(out, "a well-known\nfact");
        assert_eq!(candidates[0].decision, HyphenDecision::KeptHyphen);
    }

    #[test]
    fn tied_counts_fall_through_to_fallback() {
        let index = WordIndex::default();
        let untouched = resolve_eol_hyphens("some-\nthing", Some(&index), None, &text_options());
        assert_eq!(untouched.0, "some-\nthing");
        assert_eq!(untouched.1[0].decision, HyphenDecision::Untouched);

        let joined = resolve_eol_hyphens(
            "some-\nthing",
            Some(&index),
            None,
            &HyphenOptions {
                use_text: true,
                fallback: HyphenFallback::RemoveHyphen,
                ..Default::default()
            },
        );
        assert_eq!(joined.0, "something\n");

        let kept = resolve_eol_hyphens(
            "some-\nthing",
            Some(&index),
            None,
            &HyphenOptions {
                use_text: true,
                fallback: HyphenFallback::KeepHyphen,
                ..Default::default()
            },
        );
        assert_eq!(kept.0, "some-thing\n");
    }

    #[test]
    fn dictionary_breaks_ties() {
        let dictionary = FakeDictionary(vec!["something"]);
        let options = HyphenOptions {
            use_text: true,
            use_dictionary: true,
            ..Default::default()
        };
        let (out, candidates) = resolve_eol_hyphens(
            "some-\nthing",
            Some(&WordIndex::default()),
            Some(&dictionary),
            &options,
        );
        assert_eq!(out, "something\n");
        assert_eq!(candidates[0].decision, HyphenDecision::Joined);
    }

    #[test]
    fn corpus_counts_outrank_the_dictionary() {
        let index: WordIndex = [("some-thing", 4)].into_iter().collect();
        let dictionary = FakeDictionary(vec!["something"]);
        let options = HyphenOptions {
            use_text: true,
            use_dictionary: true,
            ..Default::default()
        };
        let (out, _) =
            resolve_eol_hyphens("some-\nthing", Some(&index), Some(&dictionary), &options);
        assert_eq!(out, "some-thing\n");
    }

    #[test]
    fn continuation_punctuation_stays_with_the_word() {
        let index: WordIndex = [("turning", 2)].into_iter().collect();
        let (out, _) = resolve_eol_hyphens(
            "turn-\ning, and more",
            Some(&index),
            None,
            &text_options(),
        );
        assert_eq!(out, "turning,\nand more");
    }

    #[test]
    fn replacement_is_first_literal_occurrence() {
        // Both candidates carry the same span text; each replacement lands
        // on the leftmost remaining occurrence rather than the candidate's
        // own offset. Inherited behavior, kept as-is.
        let options = HyphenOptions {
            use_text: false,
            fallback: HyphenFallback::RemoveHyphen,
            ..Default::default()
        };
        let (out, candidates) =
            resolve_eol_hyphens("over-\nlap\nover-\nlap\n", None, None, &options);
        assert_eq!(candidates.len(), 2);
        assert_eq!(out, "overlap\noverlap\n");
    }

    #[test]
    fn short_continuations_are_not_candidates() {
        // The continuation needs two characters to count as a word split.
        let (out, candidates) =
            resolve_eol_hyphens("x-\ny rest", Some(&WordIndex::default()), None, &text_options());
        assert_eq!(out, "x-\ny rest");
        assert!(candidates.is_empty());
    }

    #[test]
    fn frequency_probe_picks_the_attested_form() {
        struct FixedProbe;
        impl WordProbe for FixedProbe {
            fn relative_frequencies(&self, _first: &str, _second: &str) -> (f64, f64) {
                (0.0008, 0.0002)
            }
        }
        let candidate = StarHyphenCandidate {
            matched: "cam-*bridge".to_string(),
            joined: "cambridge".to_string(),
            hyphenated: "cam-bridge".to_string(),
            joined_count: 0,
            hyphenated_count: 0,
        };
        let (form, factor) = probe_star_hyphen(&candidate, &FixedProbe);
        assert_eq!(form, "cambridge");
        assert!((factor - 4.0).abs() < 1e-9);
    }

    #[test]
    fn star_hyphen_review_lists_both_forms() {
        let text = "the cam-*bridge scholars cambridge cambridge cam-bridge";
        let index = word_counts(text);
        let candidates = star_hyphen_candidates(text, &index);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].joined, "cambridge");
        assert_eq!(candidates[0].hyphenated, "cam-bridge");
        assert_eq!(candidates[0].joined_count, 2);
        assert_eq!(candidates[0].hyphenated_count, 1);
    }
}
