use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::params::PopulationParams;
use crate::power_law::PowerLaw;

/// Orbital period (days) at which the Earth-analog rate is quoted
pub const EARTH_ANALOG_PERIOD: f64 = 365.25;

/// Planet radius (Earth radii) at which the Earth-analog rate is quoted
pub const EARTH_ANALOG_RADIUS: f64 = 1.0;

/// Separable power-law occurrence model over a bounded period–radius box.
///
/// Both power laws are normalized over the box, so `exp(ln_rate)` is the
/// expected number of planets per star anywhere inside it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OccurrenceModel {
    /// Period domain in days
    pub period_range: (f64, f64),

    /// Radius domain in Earth radii
    pub radius_range: (f64, f64),
}

impl Default for OccurrenceModel {
    fn default() -> Self {
        Self {
            period_range: (50.0, 300.0),
            radius_range: (0.75, 2.5),
        }
    }
}

impl OccurrenceModel {
    pub fn new(period_range: (f64, f64), radius_range: (f64, f64)) -> Self {
        Self {
            period_range,
            radius_range,
        }
    }

    pub fn period_law(&self, params: &PopulationParams) -> PowerLaw {
        PowerLaw::new(params.period_index, self.period_range.0, self.period_range.1)
    }

    pub fn radius_law(&self, params: &PopulationParams) -> PowerLaw {
        PowerLaw::new(params.radius_index, self.radius_range.0, self.radius_range.1)
    }

    /// Expected planets per star per day per Earth radius at (P, R).
    ///
    /// The value is not truncated outside the domain; callers that need
    /// a zero there should check [`contains`](Self::contains).
    pub fn density(&self, params: &PopulationParams, period: f64, radius: f64) -> f64 {
        params.rate()
            * self.period_law(params).density(period)
            * self.radius_law(params).density(radius)
    }

    pub fn contains(&self, period: f64, radius: f64) -> bool {
        let (p_lo, p_hi) = self.period_range;
        let (r_lo, r_hi) = self.radius_range;
        (p_lo..=p_hi).contains(&period) && (r_lo..=r_hi).contains(&radius)
    }

    /// Expected number of planets per star inside a sub-box of the domain.
    ///
    /// # Example
    /// ```
    /// use occurrence::{OccurrenceModel, PopulationParams};
    ///
    /// let model = OccurrenceModel::default();
    /// let params = PopulationParams::new(0.0, -0.5, -1.5);
    /// let total = model.integrated_rate(&params, model.period_range, model.radius_range);
    /// assert!((total - 1.0).abs() < 1e-12);
    /// ```
    pub fn integrated_rate(
        &self,
        params: &PopulationParams,
        period_range: (f64, f64),
        radius_range: (f64, f64),
    ) -> f64 {
        let (p_lo, p_hi) = period_range;
        let (r_lo, r_hi) = radius_range;
        params.rate()
            * self.period_law(params).integral(p_lo, p_hi)
            * self.radius_law(params).integral(r_lo, r_hi)
    }

    /// Γ⊕: the rate density per natural-log period per natural-log radius at
    /// one year and one Earth radius, P · R · Γ(P, R).
    pub fn gamma_earth(&self, params: &PopulationParams) -> f64 {
        EARTH_ANALOG_PERIOD
            * EARTH_ANALOG_RADIUS
            * self.density(params, EARTH_ANALOG_PERIOD, EARTH_ANALOG_RADIUS)
    }

    /// Density sampled on the outer product of `periods` and `radii`,
    /// indexed `[period, radius]`.
    pub fn density_grid(
        &self,
        params: &PopulationParams,
        periods: &[f64],
        radii: &[f64],
    ) -> Array2<f64> {
        let rate = params.rate();
        let period_law = self.period_law(params);
        let radius_law = self.radius_law(params);

        let p: Vec<f64> = periods.iter().map(|&x| period_law.density(x)).collect();
        let r: Vec<f64> = radii.iter().map(|&x| radius_law.density(x)).collect();
        Array2::from_shape_fn((p.len(), r.len()), |(i, j)| rate * p[i] * r[j])
    }
}

/// Occurrence density Γ(P, R) of `params` under `model`.
pub fn occurrence_density(
    params: &PopulationParams,
    model: &OccurrenceModel,
    period: f64,
    radius: f64,
) -> f64 {
    model.density(params, period, radius)
}
