//! Graph construction and representation
//!
//! This module provides the sentence similarity graph: a mutable builder
//! used while comparing sentence vectors, and the CSR form the ranker reads.

pub mod builder;
pub mod csr;
