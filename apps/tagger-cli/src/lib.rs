//! Batch tagging runner
//!
//! Reads documents as JSON lines, runs the configured taggers over each one,
//! and writes one attribute record per document as JSON lines.

pub mod config;
pub mod runner;

pub use config::RunConfig;
pub use runner::{DocumentError, RunSummary, Runner};
