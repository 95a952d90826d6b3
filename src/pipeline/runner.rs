//! Pipeline runner: orchestrates stage execution for one document.
//!
//! [`LexRankSummarizer`] holds the prepared stages. Calling
//! [`LexRankSummarizer::summarize_with_observer`] executes them in order,
//! threading each stage's output into the next and notifying a
//! [`PipelineObserver`] at every boundary.
//!
//! Stages:
//! 1. Segment text into sentences
//! 2. Normalize sentences into terms
//! 3. Vectorize terms with TF-IDF
//! 4. Build the similarity graph
//! 5. Rank by power iteration
//! 6. Select the top sentences in document order

use crate::errors::{Result, SummarizerError};
use crate::graph::builder::GraphBuilder;
use crate::graph::csr::SimilarityGraph;
use crate::nlp::normalizer::TermNormalizer;
use crate::nlp::segmenter::SentenceSegmenter;
use crate::pagerank::power_iteration::PowerIterationRanker;
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageReportBuilder, STAGE_GRAPH,
    STAGE_NORMALIZE, STAGE_RANK, STAGE_SEGMENT, STAGE_SELECT, STAGE_VECTORIZE,
};
use crate::summarizer::selector::SentenceSelector;
use crate::summarizer::term_vector::TfIdfVectorizer;
use crate::summarizer::{RankingInfo, Summary, SummarySentence};
use crate::types::{Document, SummarizerConfig};

/// Enter a tracing span for a pipeline stage, held until the end of the
/// enclosing block.
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::debug_span!("pipeline_stage", stage = $name).entered();
    };
}

/// LexRank extractive summarizer
///
/// Built once from a validated config and shared by reference; it holds no
/// per-document state.
#[derive(Debug)]
pub struct LexRankSummarizer {
    config: SummarizerConfig,
    segmenter: SentenceSegmenter,
    normalizer: TermNormalizer,
    vectorizer: TfIdfVectorizer,
    ranker: PowerIterationRanker,
    selector: SentenceSelector,
}

impl LexRankSummarizer {
    /// Validate `config` and prepare every stage
    pub fn new(config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            segmenter: SentenceSegmenter::from_config(&config),
            normalizer: TermNormalizer::from_config(&config),
            vectorizer: TfIdfVectorizer::from_config(&config),
            ranker: PowerIterationRanker::from_config(&config),
            selector: SentenceSelector::new(),
            config,
        })
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize `text` down to at most `sentence_count` sentences
    pub fn summarize(&self, text: &str, sentence_count: usize) -> Result<Summary> {
        self.summarize_with_observer(text, sentence_count, &mut NoopObserver)
    }

    /// Summarize and also return the segmented document, tagged with `id`
    pub fn summarize_document(
        &self,
        id: &str,
        text: &str,
        sentence_count: usize,
    ) -> Result<(Document, Summary)> {
        self.run(id, text, sentence_count, &mut NoopObserver)
    }

    /// Summarize while reporting every stage to `observer`
    pub fn summarize_with_observer(
        &self,
        text: &str,
        sentence_count: usize,
        observer: &mut impl PipelineObserver,
    ) -> Result<Summary> {
        self.run("", text, sentence_count, observer)
            .map(|(_, summary)| summary)
    }

    fn run(
        &self,
        id: &str,
        text: &str,
        sentence_count: usize,
        observer: &mut impl PipelineObserver,
    ) -> Result<(Document, Summary)> {
        if sentence_count == 0 {
            return Err(SummarizerError::invalid_config(
                "sentence_count must be at least 1",
            ));
        }

        // Stage 1: Segment
        let document = {
            trace_stage!(STAGE_SEGMENT);
            observer.on_stage_start(STAGE_SEGMENT);
            let clock = StageClock::start();
            let sentences = self.segmenter.segment(text)?;
            observer.on_stage_end(STAGE_SEGMENT, &StageReport::new(clock.elapsed()));
            observer.on_sentences(&sentences);
            Document::new(id, sentences)
        };

        // Nothing to rank when the whole document fits
        if sentence_count >= document.len() {
            let summary = Summary {
                sentences: document
                    .sentences()
                    .iter()
                    .map(|s| SummarySentence {
                        index: s.index,
                        text: s.text.clone(),
                        score: None,
                    })
                    .collect(),
                total_sentences: document.len(),
                ranking: None,
            };
            return Ok((document, summary));
        }

        // Stage 2: Normalize
        let term_lists = {
            trace_stage!(STAGE_NORMALIZE);
            observer.on_stage_start(STAGE_NORMALIZE);
            let clock = StageClock::start();
            let term_lists: Vec<Vec<String>> = document
                .sentences()
                .iter()
                .map(|s| self.normalizer.normalize(&s.text))
                .collect();
            observer.on_stage_end(STAGE_NORMALIZE, &StageReport::new(clock.elapsed()));
            term_lists
        };

        // Stage 3: Vectorize
        let vectors = {
            trace_stage!(STAGE_VECTORIZE);
            observer.on_stage_start(STAGE_VECTORIZE);
            let clock = StageClock::start();
            let vectors = self.vectorizer.vectorize(&term_lists);
            observer.on_stage_end(STAGE_VECTORIZE, &StageReport::new(clock.elapsed()));
            observer.on_vectors(&vectors);
            vectors
        };

        // Stage 4: Build graph
        let graph = {
            trace_stage!(STAGE_GRAPH);
            observer.on_stage_start(STAGE_GRAPH);
            let clock = StageClock::start();
            let builder = GraphBuilder::from_vectors(&vectors, self.config.similarity_threshold);
            let graph = SimilarityGraph::from_builder(&builder);
            let report = StageReportBuilder::new(clock.elapsed())
                .nodes(graph.num_nodes)
                .edges(graph.num_edges())
                .build();
            observer.on_stage_end(STAGE_GRAPH, &report);
            observer.on_graph(&graph);
            graph
        };

        // Stage 5: Rank
        let ranks = {
            trace_stage!(STAGE_RANK);
            observer.on_stage_start(STAGE_RANK);
            let clock = StageClock::start();
            let ranks = self.ranker.run(&graph)?;
            let report = StageReportBuilder::new(clock.elapsed())
                .iterations(ranks.iterations)
                .converged(ranks.converged())
                .residual(ranks.delta)
                .build();
            observer.on_stage_end(STAGE_RANK, &report);
            observer.on_rank(&ranks);
            ranks
        };

        // Stage 6: Select
        let summary = {
            trace_stage!(STAGE_SELECT);
            observer.on_stage_start(STAGE_SELECT);
            let clock = StageClock::start();
            let fallback: Vec<usize> = vectors
                .iter()
                .enumerate()
                .filter(|(_, v)| v.is_empty())
                .map(|(i, _)| i)
                .collect();
            let selected = self.selector.select(&ranks, sentence_count, &fallback);
            let sentences = selected
                .into_iter()
                .filter_map(|s| {
                    document.sentence(s.index).map(|sentence| SummarySentence {
                        index: s.index,
                        text: sentence.text.clone(),
                        score: Some(s.score),
                    })
                })
                .collect();
            observer.on_stage_end(STAGE_SELECT, &StageReport::new(clock.elapsed()));
            Summary {
                sentences,
                total_sentences: document.len(),
                ranking: Some(RankingInfo::from(&ranks)),
            }
        };

        Ok((document, summary))
    }
}
