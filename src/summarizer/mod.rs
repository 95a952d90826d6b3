//! Summarization components
//!
//! Provides TF-IDF sentence vectors, top-K sentence selection and the
//! [`Summary`] type returned to callers.

pub mod selector;
pub mod term_vector;

use crate::pagerank::{ConvergenceStatus, RankVector};
use serde::{Deserialize, Serialize};

/// A sentence chosen for the summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarySentence {
    /// Position in the source document
    pub index: usize,
    /// Original sentence text
    pub text: String,
    /// LexRank score; `None` when the document was returned unsummarized
    pub score: Option<f64>,
}

/// How the ranking that produced a summary went
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingInfo {
    pub status: ConvergenceStatus,
    pub iterations: usize,
    /// Final L1 change between the last two iterates
    pub delta: f64,
    /// Sentences that took part in ranking
    pub ranked_sentences: usize,
}

impl From<&RankVector> for RankingInfo {
    fn from(ranks: &RankVector) -> Self {
        Self {
            status: ranks.status,
            iterations: ranks.iterations,
            delta: ranks.delta,
            ranked_sentences: ranks.len(),
        }
    }
}

/// An extractive summary: document sentences in original order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Selected sentences, ascending by position
    pub sentences: Vec<SummarySentence>,
    /// Sentence count of the source document
    pub total_sentences: usize,
    /// Ranking diagnostics; `None` when no ranking was needed
    pub ranking: Option<RankingInfo>,
}

impl Summary {
    /// Summary text: selected sentences joined by a single space
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Positions of the selected sentences
    pub fn indices(&self) -> Vec<usize> {
        self.sentences.iter().map(|s| s.index).collect()
    }

    /// Whether every document sentence was returned
    pub fn is_full_document(&self) -> bool {
        self.sentences.len() == self.total_sentences
    }

    /// Whether ranking ran and converged
    pub fn converged(&self) -> bool {
        self.ranking.is_some_and(|r| r.status.is_converged())
    }
}
