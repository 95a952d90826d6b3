//! Compressed Sparse Row (CSR) similarity graph
//!
//! CSR is optimized for iteration over neighbors, which is exactly what
//! the ranker needs during power iteration.

use super::builder::GraphBuilder;

/// The sentence similarity graph in Compressed Sparse Row format
///
/// Each undirected edge is stored once per endpoint, so `weight(i, j)`
/// and `weight(j, i)` always agree.
#[derive(Debug, Clone)]
pub struct SimilarityGraph {
    /// Number of nodes
    pub num_nodes: usize,
    /// Row pointers: node i's edges are at indices row_ptr[i]..row_ptr[i+1]
    pub row_ptr: Vec<usize>,
    /// Column indices (target nodes) for each edge
    pub col_idx: Vec<u32>,
    /// Edge weights (cosine similarities)
    pub weights: Vec<f64>,
    /// Sum of incident edge weights for each node
    pub total_weight: Vec<f64>,
    /// Sentence position for each node, ascending
    pub sentence_indices: Vec<usize>,
}

impl SimilarityGraph {
    /// Convert a GraphBuilder into CSR format
    pub fn from_builder(builder: &GraphBuilder) -> Self {
        let num_nodes = builder.node_count();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::new();
        let mut weights = Vec::new();
        let mut total_weight = Vec::with_capacity(num_nodes);
        let mut sentence_indices = Vec::with_capacity(num_nodes);

        row_ptr.push(0);

        for (_, node) in builder.nodes() {
            sentence_indices.push(node.sentence_index);

            // Collect and sort edges for deterministic iteration
            let mut edges: Vec<_> = node.edges.iter().map(|(&k, &v)| (k, v)).collect();
            edges.sort_by_key(|(k, _)| *k);

            total_weight.push(edges.iter().map(|(_, w)| w).sum());

            for (target, weight) in edges {
                col_idx.push(target);
                weights.push(weight);
            }

            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            weights,
            total_weight,
            sentence_indices,
        }
    }

    /// Iterate over neighbors of a node
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    /// Weight of the edge between two nodes, if present
    pub fn weight(&self, from: u32, to: u32) -> Option<f64> {
        let start = self.row_ptr[from as usize];
        let end = self.row_ptr[from as usize + 1];
        self.col_idx[start..end]
            .binary_search(&to)
            .ok()
            .map(|i| self.weights[start + i])
    }

    /// Get the number of neighbors of a node
    pub fn degree(&self, node: u32) -> usize {
        self.row_ptr[node as usize + 1] - self.row_ptr[node as usize]
    }

    /// Get the sum of incident edge weights of a node
    pub fn node_total_weight(&self, node: u32) -> f64 {
        self.total_weight[node as usize]
    }

    /// Sentence position of a node
    pub fn sentence_index(&self, node: u32) -> usize {
        self.sentence_indices[node as usize]
    }

    /// Node standing for the sentence at `sentence_index`, if it was ranked
    pub fn node_for_sentence(&self, sentence_index: usize) -> Option<u32> {
        self.sentence_indices
            .binary_search(&sentence_index)
            .ok()
            .map(|i| i as u32)
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Number of undirected edges
    pub fn num_edges(&self) -> usize {
        self.col_idx.len() / 2
    }

    /// Find dangling nodes (nodes with no incident edges)
    pub fn dangling_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.degree(n) == 0)
            .collect()
    }

    /// Check that every edge is stored with the same weight in both directions
    pub fn is_symmetric(&self) -> bool {
        (0..self.num_nodes as u32).all(|node| {
            self.neighbors(node)
                .all(|(other, w)| other != node && self.weight(other, node) == Some(w))
        })
    }
}

impl Default for SimilarityGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            weights: Vec::new(),
            total_weight: Vec::new(),
            sentence_indices: Vec::new(),
        }
    }
}
