//! Bounded Nelder–Mead minimization.
//!
//! Every vertex the simplex proposes is projected into the bounding box
//! before it is evaluated, so the objective is never called outside it.

use serde::{Deserialize, Serialize};

use occurrence::PopulationParams;

use crate::error::OptimizeError;
use crate::likelihood::{PopulationLikelihood, PriorBounds};

/// Threshold below which a coordinate is treated as zero when sizing the
/// initial simplex
const ZERO_THRESHOLD: f64 = 1e-10;

/// Initial simplex step for coordinates at zero
const ZERO_STEP: f64 = 0.00025;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizeOptions {
    pub max_iter: usize,

    /// Converged once the spread of objective values across the simplex
    /// falls below this
    pub f_tol: f64,

    /// and the simplex diameter falls below this
    pub x_tol: f64,

    /// Initial simplex step relative to each coordinate's magnitude
    pub initial_step: f64,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            max_iter: 5000,
            f_tol: 1e-9,
            x_tol: 1e-7,
            initial_step: 0.05,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeResult {
    /// Best point found
    pub x: Vec<f64>,

    /// Objective at `x`
    pub fun: f64,

    pub iterations: usize,

    /// Objective evaluations
    pub evaluations: usize,

    pub converged: bool,
}

impl OptimizeResult {
    /// `x` read as population parameters.
    pub fn params(&self) -> Option<PopulationParams> {
        PopulationParams::from_slice(&self.x)
    }
}

/// Maximize the likelihood inside `bounds` by minimizing its negative.
///
/// Running out of iterations is not an error: the best point reached is
/// returned with `converged == false`.
pub fn maximize_likelihood(
    likelihood: &PopulationLikelihood,
    initial: &PopulationParams,
    bounds: &PriorBounds,
    options: &OptimizeOptions,
) -> Result<OptimizeResult, OptimizeError> {
    let objective = |theta: &[f64]| match PopulationParams::from_slice(theta) {
        Some(params) => likelihood.negative_log_likelihood(&params),
        None => f64::INFINITY,
    };

    let result = minimize_bounded(objective, &initial.to_array(), &bounds.as_array(), options)?;
    if result.converged {
        log::info!(
            "Likelihood maximized after {} iterations: -ln L = {:.4} at {:?}",
            result.iterations,
            result.fun,
            result.x
        );
    } else {
        log::warn!(
            "Optimizer stopped after {} iterations without converging; best -ln L = {:.4}",
            result.iterations,
            result.fun
        );
    }
    Ok(result)
}

/// Minimize `f` over the closed box `bounds` with a projected Nelder–Mead
/// simplex.
///
/// # Example
/// ```
/// use inference::{minimize_bounded, OptimizeOptions};
///
/// let f = |x: &[f64]| (x[0] - 1.0).powi(2) + (x[1] + 0.5).powi(2);
/// let bounds = [(-2.0, 2.0), (-2.0, 2.0)];
/// let result = minimize_bounded(f, &[0.0, 0.0], &bounds, &OptimizeOptions::default()).unwrap();
/// assert!(result.converged);
/// assert!((result.x[0] - 1.0).abs() < 1e-3);
/// assert!((result.x[1] + 0.5).abs() < 1e-3);
/// ```
pub fn minimize_bounded<F>(
    f: F,
    x0: &[f64],
    bounds: &[(f64, f64)],
    options: &OptimizeOptions,
) -> Result<OptimizeResult, OptimizeError>
where
    F: Fn(&[f64]) -> f64,
{
    let n = x0.len();
    if n == 0 {
        return Err(OptimizeError::EmptyInitialGuess);
    }
    if bounds.len() != n {
        return Err(OptimizeError::DimensionMismatch {
            expected: n,
            found: bounds.len(),
        });
    }
    for (index, &(lo, hi)) in bounds.iter().enumerate() {
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            return Err(OptimizeError::InvalidBounds { index });
        }
    }

    let alpha = 1.0; // reflection
    let gamma = 2.0; // expansion
    let rho = 0.5; // contraction
    let sigma = 0.5; // shrink

    let mut start = x0.to_vec();
    project(&mut start, bounds);

    let mut simplex: Vec<Vec<f64>> = Vec::with_capacity(n + 1);
    simplex.push(start.clone());
    for i in 0..n {
        let delta = if start[i].abs() < ZERO_THRESHOLD {
            ZERO_STEP
        } else {
            options.initial_step * start[i].abs()
        };
        let mut vertex = start.clone();
        // Step inward when the start sits on the upper bound
        vertex[i] = if start[i] + delta <= bounds[i].1 {
            start[i] + delta
        } else {
            start[i] - delta
        };
        project(&mut vertex, bounds);
        simplex.push(vertex);
    }

    let mut values: Vec<f64> = simplex.iter().map(|v| f(v)).collect();
    let mut evaluations = n + 1;

    for iteration in 0..options.max_iter {
        let mut order: Vec<usize> = (0..=n).collect();
        order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
        simplex = order.iter().map(|&i| simplex[i].clone()).collect();
        values = order.iter().map(|&i| values[i]).collect();

        let f_range = (values[n] - values[0]).abs();
        let diameter = simplex[1..]
            .iter()
            .map(|v| distance(v, &simplex[0]))
            .fold(0.0_f64, f64::max);
        if f_range < options.f_tol && diameter < options.x_tol {
            return Ok(OptimizeResult {
                x: simplex[0].clone(),
                fun: values[0],
                iterations: iteration + 1,
                evaluations,
                converged: true,
            });
        }

        let mut centroid = vec![0.0; n];
        for vertex in &simplex[..n] {
            for (c, v) in centroid.iter_mut().zip(vertex) {
                *c += v / n as f64;
            }
        }

        let reflected = towards(&centroid, &simplex[n], -alpha, bounds);
        let f_reflected = f(&reflected);
        evaluations += 1;

        if f_reflected < values[0] {
            let expanded = towards(&centroid, &reflected, gamma, bounds);
            let f_expanded = f(&expanded);
            evaluations += 1;
            if f_expanded < f_reflected {
                simplex[n] = expanded;
                values[n] = f_expanded;
            } else {
                simplex[n] = reflected;
                values[n] = f_reflected;
            }
            continue;
        }

        if f_reflected < values[n - 1] {
            simplex[n] = reflected;
            values[n] = f_reflected;
            continue;
        }

        let (contracted, f_contracted) = if f_reflected < values[n] {
            let point = towards(&centroid, &reflected, rho, bounds);
            let value = f(&point);
            (point, value)
        } else {
            let point = towards(&centroid, &simplex[n], rho, bounds);
            let value = f(&point);
            (point, value)
        };
        evaluations += 1;

        if f_contracted < values[n].min(f_reflected) {
            simplex[n] = contracted;
            values[n] = f_contracted;
            continue;
        }

        let best = simplex[0].clone();
        for i in 1..=n {
            simplex[i] = towards(&best, &simplex[i], sigma, bounds);
            values[i] = f(&simplex[i]);
            evaluations += 1;
        }
    }

    let best = (0..=n)
        .min_by(|&a, &b| values[a].total_cmp(&values[b]))
        .unwrap_or(0);
    Ok(OptimizeResult {
        x: simplex[best].clone(),
        fun: values[best],
        iterations: options.max_iter,
        evaluations,
        converged: false,
    })
}

/// `origin + scale · (target − origin)`, projected into the box.
fn towards(origin: &[f64], target: &[f64], scale: f64, bounds: &[(f64, f64)]) -> Vec<f64> {
    let mut point: Vec<f64> = origin
        .iter()
        .zip(target)
        .map(|(o, t)| o + scale * (t - o))
        .collect();
    project(&mut point, bounds);
    point
}

fn project(point: &mut [f64], bounds: &[(f64, f64)]) {
    for (x, &(lo, hi)) in point.iter_mut().zip(bounds) {
        *x = x.clamp(lo, hi);
    }
}

fn distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}
