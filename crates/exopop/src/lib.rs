//! Occurrence-rate analysis of a transit survey, end to end.
//!
//! [`run_analysis`] takes a stellar sample and its detections through the
//! whole chain: completeness map, likelihood maximization, posterior sampling
//! and the summary of the rate parameters and Γ⊕.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod synthetic;

#[cfg(test)]
mod synthetic_test;

pub use config::AnalysisConfig;
pub use error::{AnalysisError, ConfigError};
pub use pipeline::{run_analysis, run_catalog_analysis, AnalysisReport, CredibleInterval};
pub use synthetic::{SyntheticSurvey, SyntheticSurveyBuilder};
