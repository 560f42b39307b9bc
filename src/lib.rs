//! Text-normalization and word-analysis engine for OCR proofreading.
//!
//! Cleans the raw text of digitized books, one file per scanned page: an
//! ordered regex cleanup catalog, running header/footer stripping,
//! blank-page labeling, end-of-line hyphen resolution against the
//! document's own word counts, word and character tallies, and a near-miss
//! word matcher ("harmonics") for spotting OCR misreadings. A GUI front
//! end owns presentation and selection; this crate owns every text
//! decision and the page files on disk.
//!
//! Everything runs single-threaded and blocking. Cross-page operations
//! persist page by page in document order — a failure mid-run leaves the
//! earlier pages transformed, and the [`BatchReport`] says what was
//! skipped.

pub mod dictionary;
pub mod distance;
pub mod document;
pub mod error;
pub mod greek;
pub mod harmonics;
pub mod hyphen;
pub mod rules;
pub mod strip;
pub mod wordcount;

pub use dictionary::SpellingDictionary;
pub use distance::{distance_is_one, distance_is_two};
pub use document::{BatchReport, Document, Page, PageFailure, Scope};
pub use error::{CleanError, Result};
pub use harmonics::{HarmonicOrder, harmonics};
pub use hyphen::{
    HyphenCandidate, HyphenDecision, HyphenDictionary, HyphenFallback, HyphenOptions,
    StarHyphenCandidate, WordProbe, probe_star_hyphen, resolve_eol_hyphens,
    star_hyphen_candidates,
};
pub use rules::{CleanupRule, Preset, apply_rules, rules_from_names, suggest_preset};
pub use strip::PageEdge;
pub use wordcount::{CharCount, WordIndex, char_counts, char_name, char_table, word_counts};
