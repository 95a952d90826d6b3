//! Centrality ranking
//!
//! This module provides the power-iteration ranker that turns the sentence
//! similarity graph into LexRank scores.

pub mod power_iteration;

use serde::{Deserialize, Serialize};

/// Scores closer than this are treated as tied
pub const SCORE_EPSILON: f64 = 1e-10;

/// How power iteration stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConvergenceStatus {
    /// The L1 change fell below epsilon
    Converged,
    /// `max_iterations` ran out first; scores are the last iterate
    ExhaustedIterations,
    /// The per-document deadline ran out first; scores are the last iterate
    DeadlineExceeded,
}

impl ConvergenceStatus {
    /// Returns `true` when iteration reached the convergence threshold
    pub fn is_converged(self) -> bool {
        matches!(self, ConvergenceStatus::Converged)
    }
}

/// Result of ranking: one score per graph node
///
/// Scores sum to 1 whether or not iteration converged.
#[derive(Debug, Clone, PartialEq)]
pub struct RankVector {
    /// Scores for each node (indexed by node ID)
    pub scores: Vec<f64>,
    /// Sentence position for each node
    pub sentence_indices: Vec<usize>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final L1 change between the last two iterates
    pub delta: f64,
    /// How iteration stopped
    pub status: ConvergenceStatus,
}

impl RankVector {
    /// Create a new rank vector
    pub fn new(
        scores: Vec<f64>,
        sentence_indices: Vec<usize>,
        iterations: usize,
        delta: f64,
        status: ConvergenceStatus,
    ) -> Self {
        Self {
            scores,
            sentence_indices,
            iterations,
            delta,
            status,
        }
    }

    /// Whether the ranker converged
    pub fn converged(&self) -> bool {
        self.status.is_converged()
    }

    /// Number of ranked sentences
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check if nothing was ranked
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Iterate over (sentence position, score) pairs in document order
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.sentence_indices
            .iter()
            .copied()
            .zip(self.scores.iter().copied())
    }

    /// Score of the sentence at `sentence_index` (zero when it was not ranked)
    pub fn score_for_sentence(&self, sentence_index: usize) -> f64 {
        self.sentence_indices
            .binary_search(&sentence_index)
            .map_or(0.0, |node| self.scores[node])
    }

    /// Sum of all scores
    pub fn total(&self) -> f64 {
        self.scores.iter().sum()
    }

    /// Get the top N sentences as (sentence position, score), best first
    ///
    /// Scores within [`SCORE_EPSILON`] of each other are tied and the earlier
    /// position wins.
    pub fn top_n(&self, n: usize) -> Vec<(usize, f64)> {
        let mut remaining: Vec<(usize, f64)> = self.iter().collect();
        let mut top = Vec::with_capacity(n.min(remaining.len()));

        while top.len() < n && !remaining.is_empty() {
            let mut best = 0;
            for candidate in 1..remaining.len() {
                if outranks(remaining[candidate], remaining[best]) {
                    best = candidate;
                }
            }
            top.push(remaining.remove(best));
        }

        top
    }
}

/// Whether `a` ranks strictly ahead of `b`
fn outranks(a: (usize, f64), b: (usize, f64)) -> bool {
    if (a.1 - b.1).abs() <= SCORE_EPSILON {
        a.0 < b.0
    } else {
        a.1 > b.1
    }
}
