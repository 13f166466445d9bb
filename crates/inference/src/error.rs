use thiserror::Error;

/// Structural misuse of the ensemble sampler.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplerError {
    #[error("parameter space must have at least one dimension")]
    EmptyParameters,
    #[error("need at least {min} walkers for this dimension, got {walkers}")]
    TooFewWalkers { walkers: usize, min: usize },
    #[error("walker count must be even, got {0}")]
    OddWalkerCount(usize),
    #[error("expected {expected} parameters, got {found}")]
    DimensionMismatch { expected: usize, found: usize },
}

/// Invalid optimizer input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptimizeError {
    #[error("initial guess is empty")]
    EmptyInitialGuess,
    #[error("expected {expected} bounds, got {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("bounds for parameter {index} are empty or not finite")]
    InvalidBounds { index: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LikelihoodError {
    #[error("radius draws cover {found} detections, likelihood has {expected}")]
    DrawMismatch { expected: usize, found: usize },
}
