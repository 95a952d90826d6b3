//! Core types for rapid_lexrank
//!
//! This module defines the document model (sentences and documents) and the
//! summarizer configuration shared by every pipeline stage.

use crate::errors::{Result, SummarizerError};
use serde::{Deserialize, Serialize};

/// Number of summary sentences used when a caller does not ask for a
/// specific count
pub const DEFAULT_SENTENCE_COUNT: usize = 3;

// ============================================================================
// Sentence & Document
// ============================================================================

/// A sentence from the input text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence text, trimmed
    pub text: String,
    /// Start byte offset in original text
    pub start: usize,
    /// End byte offset in original text (exclusive)
    pub end: usize,
    /// Sentence index within the document
    pub index: usize,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }
}

/// A segmented document: the ordered sentences of one article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Source article identifier
    pub id: String,
    sentences: Vec<Sentence>,
}

impl Document {
    /// Build a document from already segmented sentences
    ///
    /// Sentence indices are reassigned so they stay dense in `[0, N)`.
    pub fn new(id: impl Into<String>, sentences: Vec<Sentence>) -> Self {
        let sentences = sentences
            .into_iter()
            .enumerate()
            .map(|(index, sentence)| Sentence { index, ..sentence })
            .collect();
        Self {
            id: id.into(),
            sentences,
        }
    }

    /// The sentences in document order
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Get a sentence by position
    pub fn sentence(&self, index: usize) -> Option<&Sentence> {
        self.sentences.get(index)
    }

    /// Number of sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Check if the document has no sentences
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

// ============================================================================
// Weighting & normalization modes
// ============================================================================

/// How term frequency is computed inside a sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TfMode {
    /// Raw occurrence count
    Raw,
    /// Occurrence count divided by the sentence's term count
    #[default]
    LengthNormalized,
}

/// How inverse document frequency is computed over the document's sentences
///
/// `Standard` is the textbook LexRank formula. `Smoothed` is the default
/// because the standard form zeroes any term found in half or more of a
/// short article's sentences, which can leave the graph without edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdfMode {
    /// `ln(N / (1 + df))`, clamped at zero (the reference LexRank formula)
    Standard,
    /// `ln((1 + N) / (1 + df)) + 1`
    #[default]
    Smoothed,
}

impl IdfMode {
    /// Compute the IDF of a term found in `df` of `n` sentences
    pub fn idf(self, n: usize, df: usize) -> f64 {
        let n = n as f64;
        let df = df as f64;
        match self {
            IdfMode::Standard => (n / (1.0 + df)).ln().max(0.0),
            IdfMode::Smoothed => ((1.0 + n) / (1.0 + df)).ln() + 1.0,
        }
    }
}

/// Stemming applied to each surviving term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StemmingRule {
    /// Keep terms as they are after case folding
    None,
    /// Snowball stemmer for the configured language
    #[default]
    Snowball,
}

// ============================================================================
// Configuration
// ============================================================================

fn default_abbreviations() -> Vec<String> {
    [
        "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "e.g", "i.e", "u.s", "u.k",
        "u.n", "inc", "ltd", "corp", "gen", "gov", "sen", "rep", "jan", "feb", "mar", "apr",
        "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Configuration for LexRank summarization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Language code for stopwords and stemming (e.g., "en", "de", "fr")
    pub language: String,
    /// Whether to load the built-in stopword list for `language`
    pub use_builtin_stopwords: bool,
    /// Additional stopwords (extends the built-in list when enabled)
    pub stopwords: Vec<String>,
    /// Stemming rule applied after stopword removal
    pub stemming: StemmingRule,
    /// Words that end with a period without ending the sentence
    /// (lowercase, without the trailing period)
    pub abbreviations: Vec<String>,
    /// Treat line breaks as sentence boundaries
    pub split_on_newlines: bool,
    /// Keep a single capital letter plus period ("J.") inside the sentence
    /// when the next word continues a name
    pub guard_initials: bool,
    /// Minimum cosine similarity for an edge in the similarity graph
    pub similarity_threshold: f64,
    /// Damping factor for power iteration (typically 0.85)
    pub damping: f64,
    /// Maximum iterations for power iteration
    pub max_iterations: usize,
    /// Convergence threshold on the L1 change between iterates
    pub convergence_epsilon: f64,
    /// Term frequency mode
    pub tf_mode: TfMode,
    /// Inverse document frequency mode
    pub idf_mode: IdfMode,
    /// Optional wall-clock budget for ranking a single document
    pub rank_deadline_ms: Option<u64>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            use_builtin_stopwords: true,
            stopwords: Vec::new(),
            stemming: StemmingRule::Snowball,
            abbreviations: default_abbreviations(),
            split_on_newlines: true,
            guard_initials: true,
            similarity_threshold: 0.1,
            damping: 0.85,
            max_iterations: 100,
            convergence_epsilon: 1e-4,
            tf_mode: TfMode::LengthNormalized,
            idf_mode: IdfMode::Smoothed,
            rank_deadline_ms: None,
        }
    }
}

impl SummarizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON; omitted fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(SummarizerError::invalid_config(format!(
                "damping must be between 0 and 1, got {}",
                self.damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(SummarizerError::invalid_config("max_iterations must be > 0"));
        }

        if !(self.convergence_epsilon > 0.0 && self.convergence_epsilon.is_finite()) {
            return Err(SummarizerError::invalid_config(
                "convergence_epsilon must be a positive number",
            ));
        }

        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(SummarizerError::invalid_config(format!(
                "similarity_threshold must be between 0 and 1, got {}",
                self.similarity_threshold
            )));
        }

        if self.rank_deadline_ms == Some(0) {
            return Err(SummarizerError::invalid_config(
                "rank_deadline_ms must be > 0 when set",
            ));
        }

        Ok(())
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: add stopwords on top of the built-in list
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Builder method: enable or disable the built-in stopword list
    pub fn with_builtin_stopwords(mut self, enabled: bool) -> Self {
        self.use_builtin_stopwords = enabled;
        self
    }

    /// Builder method: set stemming rule
    pub fn with_stemming(mut self, stemming: StemmingRule) -> Self {
        self.stemming = stemming;
        self
    }

    /// Builder method: replace the abbreviation list
    pub fn with_abbreviations<I, S>(mut self, abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.abbreviations = abbreviations.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method: set whether line breaks end sentences
    pub fn with_split_on_newlines(mut self, split: bool) -> Self {
        self.split_on_newlines = split;
        self
    }

    /// Builder method: set whether initials may sit before a period
    pub fn with_guard_initials(mut self, guard: bool) -> Self {
        self.guard_initials = guard;
        self
    }

    /// Builder method: set similarity threshold
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set convergence epsilon
    pub fn with_convergence_epsilon(mut self, epsilon: f64) -> Self {
        self.convergence_epsilon = epsilon;
        self
    }

    /// Builder method: set term frequency mode
    pub fn with_tf_mode(mut self, mode: TfMode) -> Self {
        self.tf_mode = mode;
        self
    }

    /// Builder method: set inverse document frequency mode
    pub fn with_idf_mode(mut self, mode: IdfMode) -> Self {
        self.idf_mode = mode;
        self
    }

    /// Builder method: set the per-document ranking deadline
    pub fn with_rank_deadline_ms(mut self, millis: u64) -> Self {
        self.rank_deadline_ms = Some(millis);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_reindexes_sentences() {
        let doc = Document::new(
            "a1",
            vec![Sentence::new("First.", 0, 6, 7), Sentence::new("Second.", 7, 14, 3)],
        );

        assert_eq!(doc.id, "a1");
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.sentences()[0].index, 0);
        assert_eq!(doc.sentences()[1].index, 1);
        assert_eq!(doc.sentence(1).map(|s| s.text.as_str()), Some("Second."));
        assert!(doc.sentence(2).is_none());
    }

    #[test]
    fn test_idf_modes() {
        // Standard: ln(4 / 2)
        assert!((IdfMode::Standard.idf(4, 1) - 2.0_f64.ln()).abs() < 1e-12);
        // Standard never goes negative for ubiquitous terms
        assert_eq!(IdfMode::Standard.idf(4, 4), 0.0);
        // Smoothed stays positive even when every sentence has the term
        assert!(IdfMode::Smoothed.idf(4, 4) > 0.0);
        assert!(IdfMode::Smoothed.idf(4, 1) > IdfMode::Smoothed.idf(4, 3));
    }

    #[test]
    fn test_config_validation() {
        let config = SummarizerConfig::default();
        assert!(config.validate().is_ok());

        let bad_config = SummarizerConfig::default().with_damping(1.5);
        assert!(bad_config.validate().is_err());

        let bad_config = SummarizerConfig::default().with_max_iterations(0);
        assert!(bad_config.validate().is_err());

        let bad_config = SummarizerConfig::default().with_convergence_epsilon(0.0);
        assert!(bad_config.validate().is_err());

        let bad_config = SummarizerConfig::default().with_similarity_threshold(-0.1);
        assert!(bad_config.validate().is_err());

        let bad_config = SummarizerConfig::default().with_rank_deadline_ms(0);
        assert!(bad_config.validate().is_err());
    }

    #[test]
    fn test_config_from_json_fills_defaults() {
        let cfg = SummarizerConfig::from_json(r#"{"damping": 0.5, "tf_mode": "raw"}"#).unwrap();
        assert_eq!(cfg.damping, 0.5);
        assert_eq!(cfg.tf_mode, TfMode::Raw);
        assert_eq!(cfg.max_iterations, 100);
        assert_eq!(cfg.idf_mode, IdfMode::Smoothed);
        assert!(cfg.abbreviations.iter().any(|a| a == "mr"));
        assert!(cfg.guard_initials);

        let cfg = SummarizerConfig::from_json(r#"{"guard_initials": false}"#).unwrap();
        assert!(!cfg.guard_initials);
    }

    #[test]
    fn test_config_from_json_rejects_invalid() {
        let err = SummarizerConfig::from_json(r#"{"damping": 2.0}"#).unwrap_err();
        assert!(matches!(err, SummarizerError::InvalidConfig(_)));

        let err = SummarizerConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, SummarizerError::ConfigParse(_)));
    }

    #[test]
    fn test_config_serde_roundtrip_enum_names() {
        let cfg = SummarizerConfig::default()
            .with_stemming(StemmingRule::None)
            .with_idf_mode(IdfMode::Standard);
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains(r#""stemming":"none""#));
        assert!(json.contains(r#""idf_mode":"standard""#));

        let back: SummarizerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn test_builder_stopwords_extend() {
        let cfg = SummarizerConfig::default()
            .with_stopwords(["alpha"])
            .with_stopwords(vec!["beta".to_string()]);
        assert_eq!(cfg.stopwords, vec!["alpha", "beta"]);
    }
}
