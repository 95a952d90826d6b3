//! Natural Language Processing components
//!
//! This module provides sentence segmentation, term normalization and
//! stopword filtering.

pub mod normalizer;
pub mod segmenter;
pub mod stopwords;
