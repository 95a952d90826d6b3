//! Similarity graph builder
//!
//! This module provides a mutable graph builder that uses FxHashMap
//! adjacency for O(1) edge lookups during construction. Nodes are the
//! sentences that carry a non-empty term vector.

use crate::summarizer::term_vector::TermVector;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Below this many nodes, pairwise similarity is computed sequentially
const PARALLEL_MIN_NODES: usize = 128;

/// A node in the graph builder
#[derive(Debug, Clone)]
pub struct BuilderNode {
    /// Position of the sentence this node stands for
    pub sentence_index: usize,
    /// Adjacency list: target node ID -> edge weight
    pub edges: FxHashMap<u32, f64>,
}

impl BuilderNode {
    /// Create a new node
    pub fn new(sentence_index: usize) -> Self {
        Self {
            sentence_index,
            edges: FxHashMap::default(),
        }
    }
}

/// A mutable, undirected graph builder
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<BuilderNode>,
}

impl GraphBuilder {
    /// Create a new empty graph builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph builder with pre-allocated capacity
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Add a node for the sentence at `sentence_index`, returning its ID
    pub fn add_node(&mut self, sentence_index: usize) -> u32 {
        let id = self.nodes.len() as u32;
        self.nodes.push(BuilderNode::new(sentence_index));
        id
    }

    /// Set the weight of the undirected edge between two nodes
    pub fn set_edge(&mut self, from: u32, to: u32, weight: f64) {
        if from == to {
            return; // No self-loops
        }

        if let Some(node) = self.nodes.get_mut(from as usize) {
            node.edges.insert(to, weight);
        }
        if let Some(node) = self.nodes.get_mut(to as usize) {
            node.edges.insert(from, weight);
        }
    }

    /// Build the similarity graph for a document's term vectors
    ///
    /// Every sentence with a non-empty vector becomes a node, even when it
    /// ends up with no edges. An edge is kept when the cosine similarity is
    /// positive and at least `threshold`.
    pub fn from_vectors(vectors: &[TermVector], threshold: f64) -> Self {
        let members: Vec<(usize, &TermVector)> = vectors
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.is_empty())
            .collect();

        let mut builder = Self::with_capacity(members.len());
        for &(sentence_index, _) in &members {
            builder.add_node(sentence_index);
        }

        let row_edges = |a: usize| -> Vec<(u32, u32, f64)> {
            ((a + 1)..members.len())
                .filter_map(|b| {
                    let sim = members[a].1.cosine_similarity(members[b].1);
                    (sim > 0.0 && sim >= threshold).then_some((a as u32, b as u32, sim))
                })
                .collect()
        };

        // Rows come back in order either way, so both paths build the same graph
        let rows: Vec<Vec<(u32, u32, f64)>> = if members.len() < PARALLEL_MIN_NODES {
            (0..members.len()).map(row_edges).collect()
        } else {
            (0..members.len()).into_par_iter().map(row_edges).collect()
        };

        for (a, b, weight) in rows.into_iter().flatten() {
            builder.set_edge(a, b, weight);
        }

        builder
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of edges (counting each undirected edge once)
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }

    /// Get a node by ID
    pub fn get_node(&self, id: u32) -> Option<&BuilderNode> {
        self.nodes.get(id as usize)
    }

    /// Iterate over all nodes
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
