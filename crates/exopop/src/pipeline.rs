use std::fmt;
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use serde::Serialize;

use catalog::{restrict_to_sample, select_candidates, select_stars, KoiRecord, StellarRecord};
use completeness::{build_completeness_map, CompletenessMap, PeriodRadiusGrid, Star};
use inference::{
    maximize_likelihood, percentiles, sample_posterior, Detection, OptimizeResult,
    PopulationLikelihood, Posterior, PosteriorSamples, RadiusDraws,
};
use occurrence::PopulationParams;

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;

const PARAMETER_NAMES: [&str; 3] = ["ln_rate", "period_index", "radius_index"];

/// 16th, 50th and 84th percentiles of a posterior quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CredibleInterval {
    pub lower: f64,
    pub median: f64,
    pub upper: f64,
}

impl CredibleInterval {
    pub fn from_samples(values: &[f64]) -> Self {
        let q = percentiles(values, &[16.0, 50.0, 84.0]);
        Self {
            lower: q[0],
            median: q[1],
            upper: q[2],
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.lower..=self.upper).contains(&value)
    }
}

/// Everything an analysis run produces.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub map: CompletenessMap,
    pub detection_count: usize,
    pub optimum: OptimizeResult,
    pub samples: PosteriorSamples,

    /// Γ⊕ evaluated on every posterior draw
    pub gamma_earth: Vec<f64>,

    /// Intervals for (ln_rate, β, α)
    pub parameters: [CredibleInterval; 3],
    pub gamma_earth_interval: CredibleInterval,
}

impl AnalysisReport {
    /// Human-readable summary of the run.
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (n_periods, n_radii) = self.map.grid().shape();
        writeln!(
            f,
            "Stars: {}  Detections: {}  Grid: {}x{}",
            self.map.star_count(),
            self.detection_count,
            n_periods,
            n_radii
        )?;
        writeln!(
            f,
            "Maximum likelihood: {:?} (-ln L = {:.3}, converged: {})",
            self.optimum.x, self.optimum.fun, self.optimum.converged
        )?;
        writeln!(
            f,
            "Posterior: {} draws, acceptance fraction {:.3}",
            self.samples.len(),
            self.samples.acceptance_fraction()
        )?;
        for (name, interval) in PARAMETER_NAMES.iter().zip(&self.parameters) {
            writeln!(f, "  {name:<13}{interval}")?;
        }
        writeln!(f, "  {:<13}{}", "gamma_earth", self.gamma_earth_interval)
    }
}

impl fmt::Display for CredibleInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.4} +{:.4} -{:.4}",
            self.median,
            self.upper - self.median,
            self.median - self.lower
        )
    }
}

/// Infer the occurrence rate of `detections` around `stars`.
pub fn run_analysis(
    config: &AnalysisConfig,
    stars: &[Star],
    detections: Vec<Detection>,
) -> Result<AnalysisReport, AnalysisError> {
    if stars.is_empty() {
        return Err(AnalysisError::EmptySample);
    }
    if detections.is_empty() {
        return Err(AnalysisError::NoDetections);
    }
    config.validate()?;

    let grid = PeriodRadiusGrid::linspace(
        config.period_range,
        config.period_nodes,
        config.radius_range,
        config.radius_nodes,
    )?;
    let started = Instant::now();
    let map = build_completeness_map(stars, &grid, config.eccentricity);
    log::info!("Completeness map ready in {:.2?}", started.elapsed());

    let detection_count = detections.len();
    let mut likelihood = PopulationLikelihood::new(config.model(), map, detections);
    if let Some(per_detection) = config.radius_draws {
        let mut rng = ChaChaRng::seed_from_u64(config.seed.wrapping_add(1));
        let draws = RadiusDraws::sample(likelihood.detections(), per_detection, &mut rng);
        log::debug!("Marginalizing over {per_detection} radius draws per detection");
        likelihood = likelihood.with_radius_draws(draws)?;
    }

    let optimum = maximize_likelihood(
        &likelihood,
        &config.initial,
        &config.bounds,
        &config.optimizer,
    )?;
    let start = match optimum.params() {
        Some(params) if config.bounds.contains(&params) => params,
        _ => {
            log::warn!("Optimum lies on the prior boundary; sampling from the initial point");
            config.initial
        }
    };

    let posterior = Posterior::new(&likelihood, &config.bounds);
    let samples = sample_posterior(
        &posterior,
        &start.to_array(),
        config.walkers,
        config.burn_in,
        config.production,
        config.seed,
    )?;

    let model = config.model();
    let gamma_earth = samples.map_rows(|theta| {
        PopulationParams::from_slice(theta)
            .map(|params| model.gamma_earth(&params))
            .unwrap_or(f64::NAN)
    });

    let parameters =
        [0, 1, 2].map(|i| CredibleInterval::from_samples(&samples.column(i).to_vec()));
    let gamma_earth_interval = CredibleInterval::from_samples(&gamma_earth);
    log::info!("Gamma_earth = {gamma_earth_interval}");

    let map = likelihood.map().clone();
    Ok(AnalysisReport {
        map,
        detection_count,
        optimum,
        samples,
        gamma_earth,
        parameters,
        gamma_earth_interval,
    })
}

/// Apply the configured catalog cuts, then [`run_analysis`].
pub fn run_catalog_analysis(
    config: &AnalysisConfig,
    stellar: &[StellarRecord],
    kois: &[KoiRecord],
) -> Result<AnalysisReport, AnalysisError> {
    let stars = select_stars(stellar, &config.stars);
    let candidates = select_candidates(kois, &config.candidates);
    let detections = restrict_to_sample(candidates, &stars);
    run_analysis(config, &stars, detections)
}
