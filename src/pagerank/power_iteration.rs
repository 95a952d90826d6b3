//! Power iteration over the similarity graph
//!
//! Implements weighted PageRank with uniform redistribution of dangling
//! node mass, renormalizing every iterate so scores always sum to 1.

use super::{ConvergenceStatus, RankVector};
use crate::errors::{Result, SummarizerError};
use crate::graph::csr::SimilarityGraph;
use crate::types::SummarizerConfig;
use std::time::{Duration, Instant};

/// Power-iteration centrality ranker
#[derive(Debug, Clone)]
pub struct PowerIterationRanker {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold on the L1 change
    pub epsilon: f64,
    /// Optional wall-clock budget
    pub deadline: Option<Duration>,
}

impl Default for PowerIterationRanker {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            epsilon: 1e-4,
            deadline: None,
        }
    }
}

impl PowerIterationRanker {
    /// Create a new ranker with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the ranker described by a summarizer config
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self {
            damping: config.damping,
            max_iterations: config.max_iterations,
            epsilon: config.convergence_epsilon,
            deadline: config.rank_deadline_ms.map(Duration::from_millis),
        }
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set a wall-clock budget for one run
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Rank every node of the graph
    ///
    /// Returns the last iterate even if convergence wasn't achieved; the
    /// status records why iteration stopped. Fails only on an empty graph.
    pub fn run(&self, graph: &SimilarityGraph) -> Result<RankVector> {
        let n = graph.num_nodes;
        if n == 0 {
            return Err(SummarizerError::DegenerateGraph);
        }

        let started = Instant::now();
        let n_f = n as f64;
        let mut scores = vec![1.0 / n_f; n];
        let mut new_scores = vec![0.0; n];

        let dangling_nodes = graph.dangling_nodes();
        let teleport = (1.0 - self.damping) / n_f;
        let mut iterations = 0;
        let mut delta = f64::INFINITY;
        let mut status = ConvergenceStatus::ExhaustedIterations;

        while iterations < self.max_iterations {
            iterations += 1;

            let dangling_mass: f64 = dangling_nodes.iter().map(|&d| scores[d as usize]).sum();
            new_scores.fill(teleport + self.damping * dangling_mass / n_f);

            // Push each node's score to its neighbors, split by edge weight
            for (node, &node_score) in scores.iter().enumerate() {
                let total_weight = graph.node_total_weight(node as u32);
                if total_weight > 0.0 {
                    for (neighbor, weight) in graph.neighbors(node as u32) {
                        new_scores[neighbor as usize] +=
                            self.damping * node_score * weight / total_weight;
                    }
                }
            }

            normalize(&mut new_scores);

            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);

            if delta < self.epsilon {
                status = ConvergenceStatus::Converged;
                break;
            }
            if self.deadline.is_some_and(|limit| started.elapsed() >= limit) {
                status = ConvergenceStatus::DeadlineExceeded;
                break;
            }
        }

        if !status.is_converged() {
            tracing::warn!(
                iterations,
                delta,
                ?status,
                "power iteration stopped before convergence"
            );
        }

        Ok(RankVector::new(
            scores,
            graph.sentence_indices.clone(),
            iterations,
            delta,
            status,
        ))
    }
}

/// Scale scores to sum to 1
fn normalize(scores: &mut [f64]) {
    let sum: f64 = scores.iter().sum();
    if sum > 0.0 {
        for score in scores.iter_mut() {
            *score /= sum;
        }
    }
}
