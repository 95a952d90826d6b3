//! Stopword filtering
//!
//! Stopwords come from the `stop-words` crate for the configured language,
//! optionally extended with a caller-supplied list. The filter is an owned
//! value built once per summarizer, never a process-wide table.

use crate::types::SummarizerConfig;
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A filter for removing stopwords from normalized terms
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Create a stopword filter for the given language
    ///
    /// Unknown languages fall back to English.
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: Self::built_in_list(language).into_iter().collect(),
        }
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a stopword filter from a custom list
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        let mut filter = Self::empty();
        filter.extend(words);
        filter
    }

    /// Build the filter described by a summarizer config
    pub fn from_config(config: &SummarizerConfig) -> Self {
        let mut filter = if config.use_builtin_stopwords {
            Self::new(&config.language)
        } else {
            Self::empty()
        };
        filter.extend(&config.stopwords);
        filter
    }

    /// Add stopwords to the filter
    pub fn extend<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Check if a word is a stopword
    ///
    /// The normalizer hands in case-folded words; other callers may not.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
            || (word.chars().any(char::is_uppercase)
                && self.stopwords.contains(&word.to_lowercase()))
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    /// The built-in stopword list for a language
    pub fn built_in_list(language: &str) -> Vec<String> {
        let lang = match language.to_lowercase().as_str() {
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            _ => LANGUAGE::English,
        };

        get(lang).iter().map(|s| s.to_lowercase()).collect()
    }
}
