//! # rapid_lexrank
//!
//! Graph-based extractive summarization with LexRank.
//!
//! Article text is split into sentences, each sentence becomes a TF-IDF
//! vector, and sentences are ranked by their centrality in the cosine
//! similarity graph. The top sentences come back in document order.
//!
//! ## Features
//!
//! - **Deterministic**: the same text and config always give the same summary
//! - **Unicode-aware**: word segmentation and case folding per Unicode rules
//! - **Bounded**: power iteration stops at a fixed iteration count or deadline
//! - **Batch-ready**: parallel summarization of article batches with rayon
//!
//! ```
//! use rapid_lexrank::{summarize, SummarizerConfig};
//!
//! let text = "Cats are mammals. Dogs are mammals. \
//!             The stock market rose today. Mammals are warm-blooded.";
//! let summary = summarize(text, 2, &SummarizerConfig::default()).unwrap();
//! assert_eq!(summary.len(), 2);
//! ```

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod pipeline;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, SummarizerError};
pub use types::{
    Document, IdfMode, Sentence, StemmingRule, SummarizerConfig, TfMode, DEFAULT_SENTENCE_COUNT,
};

// Re-export main functionality
pub use graph::{builder::GraphBuilder, csr::SimilarityGraph};
pub use nlp::{normalizer::TermNormalizer, segmenter::SentenceSegmenter, stopwords::StopwordFilter};
pub use pagerank::{power_iteration::PowerIterationRanker, ConvergenceStatus, RankVector};
pub use pipeline::batch::{Article, BatchReport, BatchSummarizer, DocumentOutcome};
pub use pipeline::observer::{NoopObserver, PipelineObserver, StageRecorder, StageReport};
pub use pipeline::runner::LexRankSummarizer;
pub use summarizer::selector::SentenceSelector;
pub use summarizer::term_vector::{TermVector, TfIdfVectorizer};
pub use summarizer::{RankingInfo, Summary, SummarySentence};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Summarize `document_text` down to at most `sentence_count` sentences
///
/// Builds a [`LexRankSummarizer`] for this one call; reuse one directly when
/// summarizing many documents with the same config.
pub fn summarize(
    document_text: &str,
    sentence_count: usize,
    config: &SummarizerConfig,
) -> Result<Summary> {
    LexRankSummarizer::new(config.clone())?.summarize(document_text, sentence_count)
}
