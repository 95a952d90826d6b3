//! Term normalization
//!
//! Turns a sentence into the ordered list of terms used for TF-IDF:
//! Unicode word segmentation, case folding, stripping of non-alphanumeric
//! characters, stopword removal and stemming.

use super::stopwords::StopwordFilter;
use crate::types::{StemmingRule, SummarizerConfig};
use rust_stemmers::{Algorithm, Stemmer};
use unicode_segmentation::UnicodeSegmentation;

/// Sentence → normalized terms
pub struct TermNormalizer {
    stopwords: StopwordFilter,
    stemmer: Option<Stemmer>,
}

impl std::fmt::Debug for TermNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TermNormalizer")
            .field("stopwords", &self.stopwords.len())
            .field("stemming", &self.stemmer.is_some())
            .finish()
    }
}

impl Default for TermNormalizer {
    fn default() -> Self {
        Self::from_config(&SummarizerConfig::default())
    }
}

impl TermNormalizer {
    /// Create a normalizer from an explicit stopword filter and stemming rule
    pub fn new(stopwords: StopwordFilter, stemming: StemmingRule, language: &str) -> Self {
        let stemmer = match stemming {
            StemmingRule::None => None,
            StemmingRule::Snowball => Some(Stemmer::create(snowball_algorithm(language))),
        };
        Self { stopwords, stemmer }
    }

    /// Build the normalizer described by a summarizer config
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self::new(
            StopwordFilter::from_config(config),
            config.stemming,
            &config.language,
        )
    }

    /// Normalize one sentence into terms, in order of appearance
    ///
    /// A sentence made only of stopwords yields an empty list.
    pub fn normalize(&self, sentence: &str) -> Vec<String> {
        sentence
            .unicode_words()
            .filter_map(|word| self.normalize_word(word))
            .collect()
    }

    /// Normalize every sentence of a document
    pub fn normalize_all<S: AsRef<str>>(&self, sentences: &[S]) -> Vec<Vec<String>> {
        sentences.iter().map(|s| self.normalize(s.as_ref())).collect()
    }

    fn normalize_word(&self, word: &str) -> Option<String> {
        let folded = word.to_lowercase();
        if self.stopwords.is_stopword(&folded) {
            return None;
        }

        let stripped: String = folded.chars().filter(|c| c.is_alphanumeric()).collect();
        if stripped.is_empty() || self.stopwords.is_stopword(&stripped) {
            return None;
        }

        Some(match &self.stemmer {
            Some(stemmer) => stemmer.stem(&stripped).into_owned(),
            None => stripped,
        })
    }
}

/// Map a language code to its Snowball algorithm (English by default)
fn snowball_algorithm(language: &str) -> Algorithm {
    match language.to_lowercase().as_str() {
        "de" | "german" => Algorithm::German,
        "fr" | "french" => Algorithm::French,
        "es" | "spanish" => Algorithm::Spanish,
        "it" | "italian" => Algorithm::Italian,
        "pt" | "portuguese" => Algorithm::Portuguese,
        "nl" | "dutch" => Algorithm::Dutch,
        "ru" | "russian" => Algorithm::Russian,
        "sv" | "swedish" => Algorithm::Swedish,
        "no" | "norwegian" => Algorithm::Norwegian,
        "da" | "danish" => Algorithm::Danish,
        "fi" | "finnish" => Algorithm::Finnish,
        "hu" | "hungarian" => Algorithm::Hungarian,
        "tr" | "turkish" => Algorithm::Turkish,
        "ar" | "arabic" => Algorithm::Arabic,
        _ => Algorithm::English,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopwords_and_stemming() {
        let normalizer = TermNormalizer::default();
        assert_eq!(normalizer.normalize("Cats are mammals."), vec!["cat", "mammal"]);
        assert_eq!(normalizer.normalize("Dogs are mammals."), vec!["dog", "mammal"]);
    }

    #[test]
    fn test_case_folding_without_stemming() {
        let normalizer = TermNormalizer::new(StopwordFilter::empty(), StemmingRule::None, "en");
        assert_eq!(
            normalizer.normalize("The Stock MARKET rose"),
            vec!["the", "stock", "market", "rose"]
        );
    }

    #[test]
    fn test_non_alphanumeric_stripped() {
        let normalizer = TermNormalizer::new(StopwordFilter::empty(), StemmingRule::None, "en");
        assert_eq!(
            normalizer.normalize("Warm-blooded animals, (mostly) O'Neil's pets; 42 of them!"),
            vec!["warm", "blooded", "animals", "mostly", "oneils", "pets", "42", "of", "them"]
        );
    }

    #[test]
    fn test_stopword_only_sentence_is_empty() {
        let normalizer = TermNormalizer::default();
        assert!(normalizer.normalize("It is what it is.").is_empty());
        assert!(normalizer.normalize("!!!").is_empty());
    }

    #[test]
    fn test_custom_stopwords_from_config() {
        let config = SummarizerConfig::default()
            .with_stemming(StemmingRule::None)
            .with_stopwords(["market"]);
        let normalizer = TermNormalizer::from_config(&config);
        assert_eq!(normalizer.normalize("The market collapsed."), vec!["collapsed"]);
    }

    #[test]
    fn test_normalize_all_keeps_alignment() {
        let normalizer = TermNormalizer::default();
        let terms = normalizer.normalize_all(&["Cats purr.", "It is.", "Dogs bark."]);
        assert_eq!(terms.len(), 3);
        assert!(terms[1].is_empty());
        assert_eq!(terms[2], vec!["dog", "bark"]);
    }

    #[test]
    fn test_deterministic() {
        let normalizer = TermNormalizer::default();
        let text = "Running runners ran quickly through the running water.";
        assert_eq!(normalizer.normalize(text), normalizer.normalize(text));
    }
}
