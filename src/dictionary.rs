//! Hunspell dictionary lookups backing the hyphen resolver.
//!
//! Dictionaries load once per language from a directory of `.aff`/`.dic`
//! pairs. A word is accepted when any loaded language knows it, checked
//! exact first and lowercased second so sentence-initial capitals still
//! validate.

use std::fs;
use std::path::Path;

use tracing::warn;
use zspell::Dictionary;

use crate::hyphen::HyphenDictionary;

pub struct SpellingDictionary {
    languages: Vec<(String, Dictionary)>,
}

impl SpellingDictionary {
    /// Load `<lang>.aff` + `<lang>.dic` for each requested language tag
    /// (e.g. `en_US`, `nl_NL`). Missing or unparsable dictionaries are
    /// skipped with a warning; the result may hold no languages at all,
    /// in which case every lookup is negative.
    pub fn load(dict_dir: &Path, languages: &[&str]) -> Self {
        let mut loaded = Vec::new();
        for lang in languages {
            if let Some(dict) = load_language(dict_dir, lang) {
                loaded.push((lang.to_string(), dict));
            }
        }
        Self { languages: loaded }
    }

    /// Build a single-language dictionary from in-memory Hunspell sources.
    pub fn from_sources(lang: &str, affix: &str, wordlist: &str) -> Option<Self> {
        match zspell::builder()
            .config_str(affix)
            .dict_str(wordlist)
            .build()
        {
            Ok(dict) => Some(Self {
                languages: vec![(lang.to_string(), dict)],
            }),
            Err(err) => {
                warn!(lang, %err, "failed to build dictionary");
                None
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        !self.languages.is_empty()
    }

    /// The language tags that recognize `word`.
    pub fn languages_for(&self, word: &str) -> Vec<&str> {
        let lower = word.to_lowercase();
        self.languages
            .iter()
            .filter(|(_, dict)| dict.check_word(word) || dict.check_word(&lower))
            .map(|(lang, _)| lang.as_str())
            .collect()
    }

    fn check(&self, word: &str) -> bool {
        if self.languages.iter().any(|(_, dict)| dict.check_word(word)) {
            return true;
        }
        let lower = word.to_lowercase();
        lower != word && self.languages.iter().any(|(_, dict)| dict.check_word(&lower))
    }
}

impl HyphenDictionary for SpellingDictionary {
    fn is_word(&self, word: &str) -> bool {
        self.check(word)
    }
}

fn load_language(dict_dir: &Path, lang: &str) -> Option<Dictionary> {
    let aff_path = dict_dir.join(format!("{lang}.aff"));
    let dic_path = dict_dir.join(format!("{lang}.dic"));

    if !aff_path.exists() || !dic_path.exists() {
        warn!(lang, "dictionary files not found");
        return None;
    }

    let affix = match fs::read_to_string(&aff_path) {
        Ok(content) => content,
        Err(err) => {
            warn!(lang, %err, "failed to read affix file");
            return None;
        }
    };
    let wordlist = match fs::read_to_string(&dic_path) {
        Ok(content) => content,
        Err(err) => {
            warn!(lang, %err, "failed to read word list");
            return None;
        }
    };

    match zspell::builder()
        .config_str(&affix)
        .dict_str(&wordlist)
        .build()
    {
        Ok(dict) => Some(dict),
        Err(err) => {
            warn!(lang, %err, "failed to build dictionary");
            None
        }
    }
}
