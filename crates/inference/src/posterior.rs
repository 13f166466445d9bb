use ndarray::{Array2, ArrayView1};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use rand_distr::{Distribution, StandardNormal};

use crate::error::SamplerError;
use crate::sampler::{check_ensemble, EnsembleSampler, LogDensity, PosteriorSampler};

/// Scale of the Gaussian ball walkers start in around the initial point
const INITIAL_SPREAD: f64 = 1e-5;

/// Retained posterior draws, one row per draw and one column per parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct PosteriorSamples {
    samples: Array2<f64>,
    acceptance_fraction: f64,
}

impl PosteriorSamples {
    pub fn new(samples: Array2<f64>, acceptance_fraction: f64) -> Self {
        Self {
            samples,
            acceptance_fraction,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.nrows() == 0
    }

    pub fn ndim(&self) -> usize {
        self.samples.ncols()
    }

    pub fn column(&self, index: usize) -> ArrayView1<'_, f64> {
        self.samples.column(index)
    }

    /// Percentiles `qs` (0–100) of one parameter.
    pub fn percentiles(&self, column: usize, qs: &[f64]) -> Vec<f64> {
        let values: Vec<f64> = self.samples.column(column).to_vec();
        percentiles(&values, qs)
    }

    /// Evaluate a derived quantity on every draw.
    pub fn map_rows<F>(&self, f: F) -> Vec<f64>
    where
        F: Fn(&[f64]) -> f64,
    {
        self.samples
            .rows()
            .into_iter()
            .map(|row| f(&row.to_vec()))
            .collect()
    }

    /// Mean acceptance fraction of the production run.
    pub fn acceptance_fraction(&self) -> f64 {
        self.acceptance_fraction
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.samples
    }
}

/// Percentiles `qs` (0–100) of `values` with linear interpolation between
/// order statistics. NaNs are ignored; an empty input gives NaN.
///
/// # Example
/// ```
/// use inference::percentiles;
///
/// let values = [4.0, 1.0, 3.0, 2.0, 5.0];
/// assert_eq!(percentiles(&values, &[0.0, 50.0, 100.0]), vec![1.0, 3.0, 5.0]);
/// ```
pub fn percentiles(values: &[f64], qs: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    sorted.sort_by(f64::total_cmp);

    qs.iter()
        .map(|&q| {
            if sorted.is_empty() {
                return f64::NAN;
            }
            let rank = q.clamp(0.0, 100.0) / 100.0 * (sorted.len() - 1) as f64;
            let lo = rank.floor() as usize;
            let hi = rank.ceil() as usize;
            let frac = rank - lo as f64;
            sorted[lo] + frac * (sorted[hi] - sorted[lo])
        })
        .collect()
}

/// Sample a posterior with an [`EnsembleSampler`].
///
/// Walkers start in a tight Gaussian ball around `initial`. The first
/// `burn_in` steps are discarded and the following `production` steps are
/// returned, flattened over walkers.
pub fn sample_posterior(
    target: &dyn LogDensity,
    initial: &[f64],
    n_walkers: usize,
    burn_in: usize,
    production: usize,
    seed: u64,
) -> Result<PosteriorSamples, SamplerError> {
    let ndim = initial.len();
    check_ensemble(n_walkers, ndim)?;

    let mut rng = ChaChaRng::seed_from_u64(seed);
    let walkers = Array2::from_shape_fn((n_walkers, ndim), |(_, d)| {
        let noise: f64 = StandardNormal.sample(&mut rng);
        initial[d] + INITIAL_SPREAD * noise
    });

    let mut sampler = EnsembleSampler::from_rng(rng);

    log::info!(
        "Sampling posterior: {} walkers, {} burn-in + {} production steps",
        n_walkers,
        burn_in,
        production
    );
    let burn = sampler.sample(target, walkers, burn_in)?;
    log::debug!(
        "Burn-in finished, acceptance fraction {:.3}",
        burn.acceptance_fraction()
    );

    let chain = sampler.sample(target, burn.final_positions, production)?;
    let acceptance = chain.acceptance_fraction();
    log::info!(
        "Sampler finished: {} draws, acceptance fraction {:.3}",
        chain.samples.nrows(),
        acceptance
    );

    Ok(PosteriorSamples::new(chain.samples, acceptance))
}
