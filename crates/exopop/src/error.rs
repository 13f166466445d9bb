use thiserror::Error;

use catalog::CatalogError;
use completeness::GridError;
use inference::{LikelihoodError, OptimizeError, SamplerError};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("stellar sample is empty")]
    EmptySample,

    #[error("no detections in the sample")]
    NoDetections,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Likelihood(#[from] LikelihoodError),

    #[error(transparent)]
    Optimize(#[from] OptimizeError),

    #[error(transparent)]
    Sampler(#[from] SamplerError),
}
