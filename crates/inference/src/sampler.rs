//! Affine-invariant ensemble sampling.
//!
//! [`EnsembleSampler`] implements the Goodman & Weare (2010) stretch move with
//! the split-ensemble update: walkers are divided into two halves and each
//! half is advanced using positions from the other, so the proposals of one
//! half never depend on each other.

use std::ops::Range;

use ndarray::{s, Array2, ArrayView1};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use crate::error::SamplerError;

/// Log of an unnormalized probability density over parameter vectors.
pub trait LogDensity {
    fn log_density(&self, theta: &[f64]) -> f64;
}

impl<F> LogDensity for F
where
    F: Fn(&[f64]) -> f64,
{
    fn log_density(&self, theta: &[f64]) -> f64 {
        self(theta)
    }
}

/// Something that can advance an ensemble of walkers through a target.
pub trait PosteriorSampler {
    /// Run `steps` iterations from `walkers` (one row per walker).
    fn sample(
        &mut self,
        target: &dyn LogDensity,
        walkers: Array2<f64>,
        steps: usize,
    ) -> Result<Chain, SamplerError>;
}

/// Output of one sampler run.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    /// Walker positions after every step, step-major: row `s * n_walkers + k`
    /// is walker `k` after step `s`.
    pub samples: Array2<f64>,

    /// Log density of every row of `samples`
    pub log_prob: Vec<f64>,

    /// Walker positions after the last step
    pub final_positions: Array2<f64>,

    pub accepted: usize,
    pub proposed: usize,
}

impl Chain {
    /// Fraction of proposals that were accepted.
    pub fn acceptance_fraction(&self) -> f64 {
        if self.proposed == 0 {
            0.0
        } else {
            self.accepted as f64 / self.proposed as f64
        }
    }
}

#[derive(Debug, Clone)]
pub struct EnsembleSampler {
    rng: ChaChaRng,
    stretch: f64,
}

impl EnsembleSampler {
    /// Stretch-move scale used unless overridden
    pub const DEFAULT_STRETCH: f64 = 2.0;

    pub fn new(seed: u64) -> Self {
        Self::from_rng(ChaChaRng::seed_from_u64(seed))
    }

    pub fn from_rng(rng: ChaChaRng) -> Self {
        Self {
            rng,
            stretch: Self::DEFAULT_STRETCH,
        }
    }

    /// Override the stretch-move scale `a`; must be at least 1.
    pub fn with_stretch(mut self, stretch: f64) -> Self {
        self.stretch = stretch;
        self
    }

    /// Draw z from g(z) ∝ 1/√z on [1/a, a].
    fn stretch_factor(&mut self) -> f64 {
        let a = self.stretch;
        let u: f64 = self.rng.random();
        ((a - 1.0) * u + 1.0).powi(2) / a
    }

    /// Advance walkers `active` using the positions of walkers `complement`.
    fn update_half(
        &mut self,
        target: &dyn LogDensity,
        positions: &mut Array2<f64>,
        log_prob: &mut [f64],
        active: Range<usize>,
        complement: Range<usize>,
    ) -> usize {
        let ndim = positions.ncols();
        let mut accepted = 0;

        let mut proposal = vec![0.0; ndim];
        for k in active {
            let j = self.rng.random_range(complement.clone());
            let z = self.stretch_factor();

            let current: ArrayView1<f64> = positions.row(k);
            let partner: ArrayView1<f64> = positions.row(j);
            for (d, value) in proposal.iter_mut().enumerate() {
                *value = partner[d] + z * (current[d] - partner[d]);
            }

            let lp = target.log_density(&proposal);
            let log_q = (ndim as f64 - 1.0) * z.ln() + lp - log_prob[k];
            let u: f64 = self.rng.random();
            if u.ln() < log_q {
                for (d, &value) in proposal.iter().enumerate() {
                    positions[[k, d]] = value;
                }
                log_prob[k] = lp;
                accepted += 1;
            }
        }
        accepted
    }
}

impl PosteriorSampler for EnsembleSampler {
    fn sample(
        &mut self,
        target: &dyn LogDensity,
        walkers: Array2<f64>,
        steps: usize,
    ) -> Result<Chain, SamplerError> {
        let (n_walkers, ndim) = walkers.dim();
        check_ensemble(n_walkers, ndim)?;

        let mut positions = walkers;
        let mut log_prob: Vec<f64> = positions
            .rows()
            .into_iter()
            .map(|row| target.log_density(&row.to_vec()))
            .collect();
        if log_prob.iter().any(|lp| !lp.is_finite()) {
            log::warn!("Some walkers start where the log density is not finite");
        }

        let half = n_walkers / 2;
        let mut samples = Array2::zeros((steps * n_walkers, ndim));
        let mut chain_log_prob = Vec::with_capacity(steps * n_walkers);
        let mut accepted = 0;

        for step in 0..steps {
            accepted +=
                self.update_half(target, &mut positions, &mut log_prob, 0..half, half..n_walkers);
            accepted +=
                self.update_half(target, &mut positions, &mut log_prob, half..n_walkers, 0..half);

            let offset = step * n_walkers;
            samples
                .slice_mut(s![offset..offset + n_walkers, ..])
                .assign(&positions);
            chain_log_prob.extend_from_slice(&log_prob);
        }

        Ok(Chain {
            samples,
            log_prob: chain_log_prob,
            final_positions: positions,
            accepted,
            proposed: steps * n_walkers,
        })
    }
}

/// Validate an ensemble of `n_walkers` walkers in `ndim` dimensions.
pub(crate) fn check_ensemble(n_walkers: usize, ndim: usize) -> Result<(), SamplerError> {
    if ndim == 0 {
        return Err(SamplerError::EmptyParameters);
    }
    if n_walkers < 2 * ndim {
        return Err(SamplerError::TooFewWalkers {
            walkers: n_walkers,
            min: 2 * ndim,
        });
    }
    if n_walkers % 2 != 0 {
        return Err(SamplerError::OddWalkerCount(n_walkers));
    }
    Ok(())
}
