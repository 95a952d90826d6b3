//! Summarization pipeline
//!
//! Wires the stages together for a single document ([`runner`]) and for
//! batches of ingested articles ([`batch`]), with [`observer`] hooks at
//! every stage boundary.

pub mod batch;
pub mod observer;
pub mod runner;
