//! Pipeline observer: hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages, capturing intermediate
//! artifacts, and emitting structured telemetry.

use std::time::{Duration, Instant};

use crate::graph::csr::SimilarityGraph;
use crate::pagerank::RankVector;
use crate::summarizer::term_vector::TermVector;
use crate::types::Sentence;

pub const STAGE_SEGMENT: &str = "segment";
pub const STAGE_NORMALIZE: &str = "normalize";
pub const STAGE_VECTORIZE: &str = "vectorize";
pub const STAGE_GRAPH: &str = "graph";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_SELECT: &str = "select";

/// All stage names in execution order
pub const STAGES: [&str; 6] = [
    STAGE_SEGMENT,
    STAGE_NORMALIZE,
    STAGE_VECTORIZE,
    STAGE_GRAPH,
    STAGE_RANK,
    STAGE_SELECT,
];

/// Wall-clock timer for a single stage
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// What happened in one stage
///
/// Optional fields are only filled by the stages they describe: graph
/// sizes by [`STAGE_GRAPH`], iteration data by [`STAGE_RANK`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageReport {
    pub elapsed: Duration,
    pub nodes: Option<usize>,
    pub edges: Option<usize>,
    pub iterations: Option<usize>,
    pub converged: Option<bool>,
    pub residual: Option<f64>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Self::default()
        }
    }
}

/// Fluent builder for reports carrying stage-specific detail
#[derive(Debug, Clone)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn nodes(mut self, nodes: usize) -> Self {
        self.report.nodes = Some(nodes);
        self
    }

    pub fn edges(mut self, edges: usize) -> Self {
        self.report.edges = Some(edges);
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.report.iterations = Some(iterations);
        self
    }

    pub fn converged(mut self, converged: bool) -> Self {
        self.report.converged = Some(converged);
        self
    }

    pub fn residual(mut self, residual: f64) -> Self {
        self.report.residual = Some(residual);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Receives callbacks as a document moves through the pipeline
///
/// Every method has an empty default, so implementors override only the
/// hooks they care about.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    fn on_sentences(&mut self, _sentences: &[Sentence]) {}

    fn on_vectors(&mut self, _vectors: &[TermVector]) {}

    fn on_graph(&mut self, _graph: &SimilarityGraph) {}

    fn on_rank(&mut self, _ranks: &RankVector) {}
}

/// Observer that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that keeps every stage report, in order
#[derive(Debug, Clone, Default)]
pub struct StageRecorder {
    pub reports: Vec<(&'static str, StageReport)>,
}

impl StageRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report for a stage, if it ran
    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.reports
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, report)| report)
    }

    /// Names of the stages that ran
    pub fn stages(&self) -> Vec<&'static str> {
        self.reports.iter().map(|(name, _)| *name).collect()
    }

    /// Total time spent across recorded stages
    pub fn total_elapsed(&self) -> Duration {
        self.reports.iter().map(|(_, report)| report.elapsed).sum()
    }
}

impl PipelineObserver for StageRecorder {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}
