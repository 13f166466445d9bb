//! Population inference for transit surveys.
//!
//! Detections are modelled as draws from an inhomogeneous Poisson process
//! whose rate is the occurrence density times the survey completeness. This
//! crate evaluates that likelihood, finds its maximum inside a box and samples
//! the posterior with an affine-invariant ensemble sampler.

pub mod detection;
pub mod error;
pub mod likelihood;
pub mod optimize;
pub mod posterior;
pub mod radius_draws;
pub mod sampler;

#[cfg(test)]
mod optimize_test;
#[cfg(test)]
mod radius_draws_test;
#[cfg(test)]
pub(crate) mod test_survey;

pub use detection::Detection;
pub use error::{LikelihoodError, OptimizeError, SamplerError};
pub use likelihood::{Posterior, PopulationLikelihood, PriorBounds, NON_FINITE_PENALTY};
pub use optimize::{maximize_likelihood, minimize_bounded, OptimizeOptions, OptimizeResult};
pub use posterior::{percentiles, sample_posterior, PosteriorSamples};
pub use radius_draws::RadiusDraws;
pub use sampler::{Chain, EnsembleSampler, LogDensity, PosteriorSampler};
