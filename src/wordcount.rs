//! Word and character tallies over page text.
//!
//! The tokenizer feeds every frequency-based decision in the engine (hyphen
//! resolution, harmonics review), so its exact behavior matters: proofing
//! markup is stripped, long dash and star runs separate words, and counts
//! keep case and diacritics untouched.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Stripping order matters: the page-separator line has to go before the
    // dash-run collapse eats its own dashes.
    static ref FILE_MARKER: Regex = Regex::new(r"-----File: .+\.\w+-+").unwrap();
    static ref DASH_RUN: Regex = Regex::new(r"--+").unwrap();
    static ref STAR_RUN: Regex = Regex::new(r"\*\*+").unwrap();
    static ref INLINE_TAGS: Regex = Regex::new(r"</?[ibf]>").unwrap();
    static ref SMALLCAP_TAGS: Regex = Regex::new(r"</?sc>").unwrap();
    static ref BREAK_TAG: Regex = Regex::new(r"<tb>").unwrap();
    static ref NON_WORD: Regex = Regex::new(r"[^\w,.'’\-*]").unwrap();
    static ref UNDERSCORE: Regex = Regex::new(r"_").unwrap();
}

/// Word frequencies for a page or a whole document. Lookup of an absent
/// word yields 0, which is what the hyphen decision rule relies on.
#[derive(Debug, Default, Clone)]
pub struct WordIndex {
    counts: HashMap<String, u32>,
}

impl WordIndex {
    pub fn count(&self, word: &str) -> u32 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// Fold another index into this one. A document-wide index is the merge
    /// of its per-page indexes, which keeps counts additive across pages.
    pub fn merge(&mut self, other: &WordIndex) {
        for (word, count) in other.counts.iter() {
            *self.counts.entry(word.clone()).or_insert(0) += count;
        }
    }
}

impl FromIterator<(String, u32)> for WordIndex {
    fn from_iter<T: IntoIterator<Item = (String, u32)>>(iter: T) -> Self {
        WordIndex {
            counts: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, u32)> for WordIndex {
    fn from_iter<T: IntoIterator<Item = (&'a str, u32)>>(iter: T) -> Self {
        iter.into_iter()
            .map(|(word, count)| (word.to_string(), count))
            .collect()
    }
}

/// Tokenize `text` and count each word, case preserved.
pub fn word_counts(text: &str) -> WordIndex {
    let text = FILE_MARKER.replace_all(text, " ");
    let text = DASH_RUN.replace_all(&text, " ");
    let text = STAR_RUN.replace_all(&text, " ");
    let text = INLINE_TAGS.replace_all(&text, "");
    let text = SMALLCAP_TAGS.replace_all(&text, "");
    let text = BREAK_TAG.replace_all(&text, "");
    let text = NON_WORD.replace_all(&text, " ");
    let text = UNDERSCORE.replace_all(&text, " ");

    let mut counts: HashMap<String, u32> = HashMap::new();
    for token in text.split_whitespace() {
        // Quotes, periods and commas strip from both ends; dashes and
        // stars from the left only, so `spe-` style word stubs survive.
        let token = token.trim_matches(&['\'', '.', ','][..]);
        let token = token.trim_start_matches(&['-', '*'][..]);
        if token.is_empty() {
            continue;
        }
        *counts.entry(token.to_string()).or_insert(0) += 1;
    }
    WordIndex { counts }
}

/// Count every raw character of `text`, line feeds and form feeds included.
pub fn char_counts(text: &str) -> HashMap<char, u32> {
    let mut counts = HashMap::new();
    for ch in text.chars() {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

/// Unicode name of a counted character. The two control characters that
/// genuinely occur in page text get their usual aliases; anything else
/// without an assigned name falls back to a placeholder instead of
/// aborting a listing.
pub fn char_name(ch: char) -> String {
    match ch {
        '\n' => "LINE FEED".to_string(),
        '\u{c}' => "FORM FEED".to_string(),
        _ => unicode_names2::name(ch)
            .map(|name| name.to_string())
            .unwrap_or_else(|| "?".to_string()),
    }
}

/// One row of a character-count listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharCount {
    pub ch: char,
    pub name: String,
    pub count: u32,
}

/// Rows for a character-count listing, ordered by code point.
pub fn char_table(counts: &HashMap<char, u32>) -> Vec<CharCount> {
    let mut rows: Vec<CharCount> = counts
        .iter()
        .map(|(&ch, &count)| CharCount {
            ch,
            name: char_name(ch),
            count,
        })
        .collect();
    rows.sort_by_key(|row| row.ch);
    rows
}
