//! Catalog-summed completeness on a period–radius grid.
//!
//! Building the map is the expensive step of an occurrence-rate analysis: every
//! star is evaluated at every grid node. Stars are split into fixed chunks that
//! are evaluated in parallel, each into its own accumulator, and the chunk
//! results are added in chunk order so repeated builds are bit-identical.

use std::time::Instant;

use ndarray::Array2;
use rayon::prelude::*;

use crate::detection::DetectionModel;
use crate::error::GridError;
use crate::grid::PeriodRadiusGrid;
use crate::star::Star;

/// Stars evaluated sequentially by one parallel task
const STARS_PER_CHUNK: usize = 64;

/// Detection probability summed over a stellar sample, sampled at grid nodes.
///
/// Values grow with the number of stars; [`mean`](Self::mean) gives the
/// per-star average completeness.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletenessMap {
    grid: PeriodRadiusGrid,
    values: Array2<f64>,
    star_count: usize,
}

impl CompletenessMap {
    /// An all-zero map for an empty sample.
    pub fn empty(grid: PeriodRadiusGrid) -> Self {
        let values = Array2::zeros(grid.shape());
        Self {
            grid,
            values,
            star_count: 0,
        }
    }

    /// Wrap precomputed node values, e.g. a map cached from an earlier run.
    pub fn from_values(
        grid: PeriodRadiusGrid,
        values: Array2<f64>,
        star_count: usize,
    ) -> Result<Self, GridError> {
        if values.dim() != grid.shape() {
            return Err(GridError::ShapeMismatch {
                expected: grid.shape(),
                found: values.dim(),
            });
        }
        Ok(Self {
            grid,
            values,
            star_count,
        })
    }

    pub fn grid(&self) -> &PeriodRadiusGrid {
        &self.grid
    }

    /// Summed completeness, indexed `[period_node, radius_node]`.
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Number of stars summed into the map.
    pub fn star_count(&self) -> usize {
        self.star_count
    }

    /// Per-star mean completeness, in [0, 1].
    pub fn mean(&self) -> Array2<f64> {
        if self.star_count == 0 {
            return Array2::zeros(self.values.raw_dim());
        }
        &self.values / self.star_count as f64
    }

    /// Combine maps built from disjoint stellar samples on the same grid.
    pub fn merge(&self, other: &CompletenessMap) -> Result<CompletenessMap, GridError> {
        if self.grid != other.grid {
            return Err(GridError::Mismatch);
        }
        Ok(CompletenessMap {
            grid: self.grid.clone(),
            values: &self.values + &other.values,
            star_count: self.star_count + other.star_count,
        })
    }
}

/// Sum the detection probability (including the geometric term) of every star
/// at every grid node, using the default [`DetectionModel`].
///
/// # Arguments
/// * `stars` - Stellar sample
/// * `grid` - Period (days) and radius (Earth radii) nodes
/// * `eccentricity` - Eccentricity assumed for every planet
pub fn build_completeness_map(
    stars: &[Star],
    grid: &PeriodRadiusGrid,
    eccentricity: f64,
) -> CompletenessMap {
    build_completeness_map_with(&DetectionModel::default(), stars, grid, eccentricity)
}

/// [`build_completeness_map`] with an explicit detection-efficiency calibration.
pub fn build_completeness_map_with(
    model: &DetectionModel,
    stars: &[Star],
    grid: &PeriodRadiusGrid,
    eccentricity: f64,
) -> CompletenessMap {
    let (n_periods, n_radii) = grid.shape();
    log::info!(
        "Building completeness map: {} stars on a {}x{} grid",
        stars.len(),
        n_periods,
        n_radii
    );
    let started = Instant::now();

    let partials: Vec<Array2<f64>> = stars
        .par_chunks(STARS_PER_CHUNK)
        .map(|chunk| {
            let mut acc = Array2::zeros(grid.shape());
            for star in chunk {
                accumulate_star(model, star, grid, eccentricity, &mut acc);
            }
            acc
        })
        .collect();

    let mut values: Array2<f64> = Array2::zeros(grid.shape());
    for partial in &partials {
        values += partial;
    }

    log::debug!(
        "Completeness map built in {:.2?} ({} chunks)",
        started.elapsed(),
        partials.len()
    );

    CompletenessMap {
        grid: grid.clone(),
        values,
        star_count: stars.len(),
    }
}

/// Completeness of a single star on the grid.
pub fn star_completeness(
    star: &Star,
    grid: &PeriodRadiusGrid,
    eccentricity: f64,
) -> Array2<f64> {
    let mut acc = Array2::zeros(grid.shape());
    accumulate_star(&DetectionModel::default(), star, grid, eccentricity, &mut acc);
    acc
}

fn accumulate_star(
    model: &DetectionModel,
    star: &Star,
    grid: &PeriodRadiusGrid,
    eccentricity: f64,
    acc: &mut Array2<f64>,
) {
    if !star.is_valid() {
        return;
    }

    for (i, &period) in grid.periods().iter().enumerate() {
        let Some(terms) = model.period_terms(star, period, eccentricity) else {
            continue;
        };
        // Below three transits or inside the star, every radius is undetectable
        if terms.window == 0.0 || terms.geometric == 0.0 {
            continue;
        }
        for (j, &radius) in grid.radii().iter().enumerate() {
            acc[[i, j]] += model.probability_at(&terms, star.radius, radius, true);
        }
    }
}
