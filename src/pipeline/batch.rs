//! Batch summarization of ingested articles
//!
//! Articles are summarized in parallel with rayon, either on the global
//! pool or on a dedicated one sized by `max_threads`. Outcomes come back in
//! input order and one article failing never stops the others.

use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::runner::LexRankSummarizer;
use crate::errors::{Result, SummarizerError};
use crate::summarizer::Summary;
use crate::types::{SummarizerConfig, DEFAULT_SENTENCE_COUNT};

/// An article as handed over by ingestion
///
/// Only `id` and `content` are read by the summarizer; the rest is carried
/// for the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub author: Option<String>,
    pub url: Option<String>,
    pub date_published: Option<String>,
    pub source: Option<String>,
    pub content: String,
}

impl Article {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    /// Parse a JSON array of articles
    pub fn list_from_json(json: &str) -> Result<Vec<Article>> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Result for one article
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentOutcome {
    pub id: String,
    pub result: Result<Summary>,
}

impl DocumentOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes for a whole batch, in input order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchReport {
    pub outcomes: Vec<DocumentOutcome>,
}

impl BatchReport {
    /// Ids and summaries of the articles that succeeded
    pub fn successes(&self) -> impl Iterator<Item = (&str, &Summary)> + '_ {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(|s| (o.id.as_str(), s)))
    }

    /// Ids and errors of the articles that failed
    pub fn failures(&self) -> impl Iterator<Item = (&str, &SummarizerError)> + '_ {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.id.as_str(), e)))
    }

    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.outcomes.len() - self.success_count()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Build an optional dedicated rayon thread pool.
fn build_thread_pool(max_threads: Option<usize>) -> Result<Option<Arc<rayon::ThreadPool>>> {
    match max_threads {
        None => Ok(None),
        Some(0) => Err(SummarizerError::invalid_config(
            "max_threads must be >= 1 (use None for the global pool)",
        )),
        Some(n) => {
            let pool = rayon::ThreadPoolBuilder::new().num_threads(n).build()?;
            Ok(Some(Arc::new(pool)))
        }
    }
}

/// Run a closure in the given pool, or on the global pool if `None`.
fn run_in_pool<R: Send>(pool: &Option<Arc<rayon::ThreadPool>>, f: impl FnOnce() -> R + Send) -> R {
    match pool {
        Some(p) => p.install(f),
        None => f(),
    }
}

/// Summarizes many articles with one shared [`LexRankSummarizer`]
#[derive(Debug)]
pub struct BatchSummarizer {
    summarizer: LexRankSummarizer,
    sentence_count: usize,
    thread_pool: Option<Arc<rayon::ThreadPool>>,
}

impl BatchSummarizer {
    /// Create a batch summarizer on the global rayon pool
    pub fn new(config: SummarizerConfig) -> Result<Self> {
        Self::with_max_threads(config, None)
    }

    /// Create a batch summarizer, on a dedicated pool when `max_threads` is set
    pub fn with_max_threads(config: SummarizerConfig, max_threads: Option<usize>) -> Result<Self> {
        Ok(Self {
            summarizer: LexRankSummarizer::new(config)?,
            sentence_count: DEFAULT_SENTENCE_COUNT,
            thread_pool: build_thread_pool(max_threads)?,
        })
    }

    /// Set the number of sentences per summary
    pub fn with_sentence_count(mut self, sentence_count: usize) -> Self {
        self.sentence_count = sentence_count;
        self
    }

    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    pub fn summarizer(&self) -> &LexRankSummarizer {
        &self.summarizer
    }

    /// Summarize every article; one outcome per article, in input order
    pub fn summarize_batch(&self, articles: &[Article]) -> BatchReport {
        let outcomes: Vec<DocumentOutcome> = run_in_pool(&self.thread_pool, || {
            articles
                .par_iter()
                .map(|article| self.summarize_article(article))
                .collect()
        });

        let report = BatchReport { outcomes };
        tracing::info!(
            articles = report.len(),
            succeeded = report.success_count(),
            failed = report.failure_count(),
            "batch summarization finished"
        );
        report
    }

    fn summarize_article(&self, article: &Article) -> DocumentOutcome {
        let result = self
            .summarizer
            .summarize(&article.content, self.sentence_count);
        if let Err(err) = &result {
            tracing::warn!(article_id = %article.id, error = %err, "article not summarized");
        }
        DocumentOutcome {
            id: article.id.clone(),
            result,
        }
    }
}
