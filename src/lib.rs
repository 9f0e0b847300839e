//! Correlates a precomputed birth chart with a genotype profile through three
//! methods (essential dignity, biological pathways, polygenic scores), combines
//! them by confidence-weighted meta-analysis and validates the score pairs with
//! parametric, bootstrap and permutation tests.

pub mod chart;
pub mod config;
pub mod correlation;
pub mod error;
pub mod genetics;
pub mod input;
pub mod logging;
pub mod meta;
pub mod pipeline;
pub mod report;
pub mod scoring;
pub mod stats;
pub mod tables;

pub use config::AnalysisProfile;
pub use error::{AnalysisError, Result};
pub use input::AnalysisInput;
pub use pipeline::{AnalysisReport, run_analysis};
