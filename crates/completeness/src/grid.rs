use ndarray::Array2;
use serde::Serialize;

use crate::error::GridError;

/// Nodes of a rectangular period–radius grid.
///
/// Nodes double as cell boundaries: `n` period nodes and `m` radius nodes
/// bound `(n−1) × (m−1)` cells. Periods are in days, radii in Earth radii.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodRadiusGrid {
    periods: Vec<f64>,
    radii: Vec<f64>,
}

impl PeriodRadiusGrid {
    /// Build a grid from explicit node positions.
    pub fn new(periods: Vec<f64>, radii: Vec<f64>) -> Result<Self, GridError> {
        check_axis("period", &periods)?;
        check_axis("radius", &radii)?;
        Ok(Self { periods, radii })
    }

    /// Uniformly spaced nodes covering both ranges, endpoints included.
    ///
    /// # Example
    /// ```
    /// use completeness::PeriodRadiusGrid;
    ///
    /// let grid = PeriodRadiusGrid::linspace((50.0, 300.0), 57, (0.75, 2.5), 61).unwrap();
    /// assert_eq!(grid.shape(), (57, 61));
    /// assert_eq!(grid.periods()[56], 300.0);
    /// ```
    pub fn linspace(
        period_range: (f64, f64),
        period_nodes: usize,
        radius_range: (f64, f64),
        radius_nodes: usize,
    ) -> Result<Self, GridError> {
        Self::new(
            linspace(period_range, period_nodes),
            linspace(radius_range, radius_nodes),
        )
    }

    pub fn periods(&self) -> &[f64] {
        &self.periods
    }

    pub fn radii(&self) -> &[f64] {
        &self.radii
    }

    /// Number of (period, radius) nodes.
    pub fn shape(&self) -> (usize, usize) {
        (self.periods.len(), self.radii.len())
    }

    /// Number of (period, radius) cells.
    pub fn cell_shape(&self) -> (usize, usize) {
        (self.periods.len() - 1, self.radii.len() - 1)
    }

    pub fn period_range(&self) -> (f64, f64) {
        (self.periods[0], self.periods[self.periods.len() - 1])
    }

    pub fn radius_range(&self) -> (f64, f64) {
        (self.radii[0], self.radii[self.radii.len() - 1])
    }

    /// Area ΔP · ΔR of every cell, in day · Earth radius.
    pub fn cell_volumes(&self) -> Array2<f64> {
        let dp: Vec<f64> = self.periods.windows(2).map(|w| w[1] - w[0]).collect();
        let dr: Vec<f64> = self.radii.windows(2).map(|w| w[1] - w[0]).collect();
        Array2::from_shape_fn(self.cell_shape(), |(i, j)| dp[i] * dr[j])
    }
}

fn linspace((lo, hi): (f64, f64), n: usize) -> Vec<f64> {
    if n < 2 {
        return vec![lo; n];
    }
    let step = (hi - lo) / (n - 1) as f64;
    (0..n)
        .map(|i| if i == n - 1 { hi } else { lo + step * i as f64 })
        .collect()
}

fn check_axis(axis: &'static str, nodes: &[f64]) -> Result<(), GridError> {
    if nodes.len() < 2 {
        return Err(GridError::TooFewNodes {
            axis,
            count: nodes.len(),
        });
    }
    let valid = nodes.iter().all(|v| v.is_finite() && *v > 0.0)
        && nodes.windows(2).all(|w| w[1] > w[0]);
    if valid {
        Ok(())
    } else {
        Err(GridError::InvalidNodes { axis })
    }
}
