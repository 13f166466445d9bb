//! Piecewise-linear lookup tables.
//!
//! Per-star noise (CDPP) and detection-threshold (MES) curves are tabulated at
//! a handful of transit durations. Lookups between the tabulated durations are
//! linear; lookups outside them return the nearest endpoint.

use serde::{Deserialize, Serialize};

use crate::error::CurveError;

/// An ordered set of (x, y) pairs with strictly increasing, finite `x`.
///
/// # Examples
///
/// ```
/// use completeness::InterpolationTable;
///
/// let cdpp = InterpolationTable::new(vec![(3.0, 60.0), (6.0, 45.0), (12.0, 30.0)]).unwrap();
/// assert_eq!(cdpp.interpolate(4.5), 52.5);
///
/// // Clamped outside the tabulated range
/// assert_eq!(cdpp.interpolate(1.0), 60.0);
/// assert_eq!(cdpp.interpolate(20.0), 30.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(f64, f64)>", into = "Vec<(f64, f64)>")]
pub struct InterpolationTable {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl InterpolationTable {
    /// Build a table from (x, y) pairs that are already sorted by `x`.
    pub fn new(points: Vec<(f64, f64)>) -> Result<Self, CurveError> {
        if points.len() < 2 {
            return Err(CurveError::InsufficientData(points.len()));
        }

        for (i, &(x, y)) in points.iter().enumerate() {
            if !x.is_finite() || !y.is_finite() {
                return Err(CurveError::NonFinite(i));
            }
            if i > 0 && x <= points[i - 1].0 {
                return Err(CurveError::UnsortedData(i));
            }
        }

        let (xs, ys) = points.into_iter().unzip();
        Ok(Self { xs, ys })
    }

    /// A table whose value is `y` everywhere on `[x_min, x_max]`.
    pub fn constant(x_min: f64, x_max: f64, y: f64) -> Result<Self, CurveError> {
        Self::new(vec![(x_min, y), (x_max, y)])
    }

    /// Linear interpolation at `x`, clamped to the first and last values.
    ///
    /// A NaN `x` yields NaN.
    pub fn interpolate(&self, x: f64) -> f64 {
        let last = self.xs.len() - 1;
        if x <= self.xs[0] {
            return self.ys[0];
        }
        if x >= self.xs[last] {
            return self.ys[last];
        }
        if x.is_nan() {
            return f64::NAN;
        }

        // First index with xs[idx] > x; bounded to 1..=last by the checks above
        let idx = self.xs.partition_point(|&probe| probe <= x);
        let (x1, x2) = (self.xs[idx - 1], self.xs[idx]);
        let (y1, y2) = (self.ys[idx - 1], self.ys[idx]);

        let t = (x - x1) / (x2 - x1);
        y1 + t * (y2 - y1)
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false; tables hold at least two points.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Iterate the (x, y) pairs in order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}

impl TryFrom<Vec<(f64, f64)>> for InterpolationTable {
    type Error = CurveError;

    fn try_from(points: Vec<(f64, f64)>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<InterpolationTable> for Vec<(f64, f64)> {
    fn from(table: InterpolationTable) -> Self {
        table.xs.into_iter().zip(table.ys).collect()
    }
}
