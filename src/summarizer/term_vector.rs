//! TF-IDF term vectors for sentences
//!
//! Builds sparse weighted vectors over a document's own sentence set, the
//! "collection" for IDF purposes being the sentences of one article.

use crate::types::{IdfMode, SummarizerConfig, TfMode};
use rustc_hash::FxHashMap;

/// A sparse TF-IDF vector for one sentence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    /// Non-zero dimensions: term -> weight
    weights: FxHashMap<String, f64>,
    /// L2 norm of the vector
    norm: f64,
}

impl TermVector {
    /// Create a new empty vector
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a map of weights, dropping non-positive entries
    pub fn from_weights(mut weights: FxHashMap<String, f64>) -> Self {
        weights.retain(|_, w| *w > 0.0);
        let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
        Self { weights, norm }
    }

    /// Weight of a term (zero when absent)
    pub fn weight(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    /// L2 norm
    pub fn norm(&self) -> f64 {
        self.norm
    }

    /// Number of non-zero dimensions
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Check if the vector is empty
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterate over (term, weight) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.weights.iter().map(|(t, &w)| (t.as_str(), w))
    }

    /// Dot product with another vector
    pub fn dot(&self, other: &TermVector) -> f64 {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .weights
            .iter()
            .filter_map(|(term, w)| large.weights.get(term).map(|o| w * o))
            .sum()
    }

    /// Cosine similarity in `[0, 1]`; zero when either vector is empty
    pub fn cosine_similarity(&self, other: &TermVector) -> f64 {
        if self.is_empty() || other.is_empty() {
            return 0.0;
        }
        (self.dot(other) / (self.norm * other.norm)).clamp(0.0, 1.0)
    }
}

/// Builds one [`TermVector`] per sentence from normalized term lists
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfVectorizer {
    tf_mode: TfMode,
    idf_mode: IdfMode,
}

impl TfIdfVectorizer {
    /// Create a vectorizer with explicit modes
    pub fn new(tf_mode: TfMode, idf_mode: IdfMode) -> Self {
        Self { tf_mode, idf_mode }
    }

    /// Build the vectorizer described by a summarizer config
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self::new(config.tf_mode, config.idf_mode)
    }

    /// Document frequency of every term across the sentence set
    pub fn document_frequencies<'a>(&self, term_lists: &'a [Vec<String>]) -> FxHashMap<&'a str, usize> {
        let mut df: FxHashMap<&str, usize> = FxHashMap::default();
        for terms in term_lists {
            let mut seen: Vec<&str> = terms.iter().map(String::as_str).collect();
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *df.entry(term).or_insert(0) += 1;
            }
        }
        df
    }

    /// Vectorize a document; output is aligned with `term_lists`
    ///
    /// `N` for IDF is the number of sentences, including zero-term ones.
    pub fn vectorize(&self, term_lists: &[Vec<String>]) -> Vec<TermVector> {
        let n = term_lists.len();
        let df = self.document_frequencies(term_lists);

        term_lists
            .iter()
            .map(|terms| {
                if terms.is_empty() {
                    return TermVector::new();
                }

                let mut counts: FxHashMap<String, f64> = FxHashMap::default();
                for term in terms {
                    *counts.entry(term.clone()).or_insert(0.0) += 1.0;
                }

                let length = terms.len() as f64;
                for (term, weight) in counts.iter_mut() {
                    let tf = match self.tf_mode {
                        TfMode::Raw => *weight,
                        TfMode::LengthNormalized => *weight / length,
                    };
                    let doc_freq = df.get(term.as_str()).copied().unwrap_or(0);
                    *weight = tf * self.idf_mode.idf(n, doc_freq);
                }

                TermVector::from_weights(counts)
            })
            .collect()
    }
}
