//! Poisson-process likelihood of a detected planet sample.
//!
//! ln L(θ) = Σ_i ln Γ_θ(P_i, R_i) − ∫ Γ_θ(P, R) Q(P, R) dP dR
//!
//! where Q is the catalog-summed completeness. The integral is evaluated on the
//! completeness grid by averaging the integrand at the two diagonal corners
//! (i, j) and (i+1, j+1) of every cell and weighting by the cell area.

use ndarray::{s, Array2};
use serde::{Deserialize, Serialize};

use completeness::CompletenessMap;
use occurrence::{OccurrenceModel, PopulationParams};

use crate::detection::Detection;
use crate::error::LikelihoodError;
use crate::radius_draws::RadiusDraws;
use crate::sampler::LogDensity;

/// Objective value reported to the optimizer where the likelihood is not finite
pub const NON_FINITE_PENALTY: f64 = 1e15;

/// Open interval per parameter, ordered (ln_rate, β, α).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorBounds {
    pub ln_rate: (f64, f64),
    pub period_index: (f64, f64),
    pub radius_index: (f64, f64),
}

impl Default for PriorBounds {
    fn default() -> Self {
        Self {
            ln_rate: (-5.0, 5.0),
            period_index: (-5.0, 5.0),
            radius_index: (-5.0, 5.0),
        }
    }
}

impl PriorBounds {
    pub fn as_array(&self) -> [(f64, f64); 3] {
        [self.ln_rate, self.period_index, self.radius_index]
    }

    /// Whether every parameter lies strictly inside its interval.
    pub fn contains(&self, params: &PopulationParams) -> bool {
        params
            .to_array()
            .iter()
            .zip(self.as_array())
            .all(|(&v, (lo, hi))| lo < v && v < hi)
    }
}

/// Likelihood of a fixed detection sample given a fixed completeness map.
#[derive(Debug, Clone)]
pub struct PopulationLikelihood {
    model: OccurrenceModel,
    map: CompletenessMap,
    detections: Vec<Detection>,
    volumes: Array2<f64>,
    radius_draws: Option<RadiusDraws>,
}

impl PopulationLikelihood {
    pub fn new(model: OccurrenceModel, map: CompletenessMap, detections: Vec<Detection>) -> Self {
        let volumes = map.grid().cell_volumes();
        Self {
            model,
            map,
            detections,
            volumes,
            radius_draws: None,
        }
    }

    /// Marginalize each detection's radius over `draws` instead of using its
    /// point estimate.
    pub fn with_radius_draws(mut self, draws: RadiusDraws) -> Result<Self, LikelihoodError> {
        if draws.detection_count() != self.detections.len() {
            return Err(LikelihoodError::DrawMismatch {
                expected: self.detections.len(),
                found: draws.detection_count(),
            });
        }
        self.radius_draws = Some(draws);
        Ok(self)
    }

    pub fn model(&self) -> &OccurrenceModel {
        &self.model
    }

    pub fn map(&self) -> &CompletenessMap {
        &self.map
    }

    pub fn detections(&self) -> &[Detection] {
        &self.detections
    }

    pub fn radius_draws(&self) -> Option<&RadiusDraws> {
        self.radius_draws.as_ref()
    }

    /// Poisson log-likelihood, or `-inf` where it is not finite.
    pub fn log_likelihood(&self, params: &PopulationParams) -> f64 {
        let ll = self.detection_term(params) - self.expected_detections(params);
        if ll.is_finite() {
            ll
        } else {
            f64::NEG_INFINITY
        }
    }

    /// [`log_likelihood`](Self::log_likelihood) under a flat prior on `bounds`.
    pub fn log_posterior(&self, params: &PopulationParams, bounds: &PriorBounds) -> f64 {
        if !bounds.contains(params) {
            return f64::NEG_INFINITY;
        }
        self.log_likelihood(params)
    }

    /// Objective for minimizers: `-ln L`, or [`NON_FINITE_PENALTY`].
    pub fn negative_log_likelihood(&self, params: &PopulationParams) -> f64 {
        let ll = self.log_likelihood(params);
        if ll.is_finite() {
            -ll
        } else {
            NON_FINITE_PENALTY
        }
    }

    /// Expected number of detections, ∫ Γ Q dP dR over the grid.
    pub fn expected_detections(&self, params: &PopulationParams) -> f64 {
        let grid = self.map.grid();
        let density = self
            .model
            .density_grid(params, grid.periods(), grid.radii());
        let g = density * self.map.values();

        let lower = g.slice(s![..-1, ..-1]);
        let upper = g.slice(s![1.., 1..]);
        ((&lower + &upper) * 0.5 * &self.volumes).sum()
    }

    fn detection_term(&self, params: &PopulationParams) -> f64 {
        match &self.radius_draws {
            None => self
                .detections
                .iter()
                .map(|d| self.model.density(params, d.period, d.radius).ln())
                .sum(),
            Some(draws) => self
                .detections
                .iter()
                .zip(draws.rows())
                .map(|(d, radii)| {
                    let total: f64 = radii
                        .iter()
                        .filter(|&&r| self.model.contains(d.period, r))
                        .map(|&r| self.model.density(params, d.period, r))
                        .sum();
                    (total / radii.len() as f64).ln()
                })
                .sum(),
        }
    }
}

/// Log-posterior of a likelihood under flat prior bounds, as a sampler target.
#[derive(Debug, Clone, Copy)]
pub struct Posterior<'a> {
    pub likelihood: &'a PopulationLikelihood,
    pub bounds: &'a PriorBounds,
}

impl<'a> Posterior<'a> {
    pub fn new(likelihood: &'a PopulationLikelihood, bounds: &'a PriorBounds) -> Self {
        Self { likelihood, bounds }
    }
}

impl LogDensity for Posterior<'_> {
    fn log_density(&self, theta: &[f64]) -> f64 {
        match PopulationParams::from_slice(theta) {
            Some(params) => self.likelihood.log_posterior(&params, self.bounds),
            None => f64::NEG_INFINITY,
        }
    }
}
