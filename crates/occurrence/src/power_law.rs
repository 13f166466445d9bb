use serde::{Deserialize, Serialize};

/// A power law x^n normalized to unit integral over `[lo, hi]`.
///
/// # Examples
///
/// ```
/// use occurrence::PowerLaw;
///
/// let flat = PowerLaw::new(0.0, 50.0, 300.0);
/// assert!((flat.density(120.0) - 1.0 / 250.0).abs() < 1e-15);
/// assert!((flat.integral(50.0, 300.0) - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerLaw {
    /// Exponent n
    pub index: f64,
    pub lo: f64,
    pub hi: f64,
}

impl PowerLaw {
    pub fn new(index: f64, lo: f64, hi: f64) -> Self {
        Self { index, lo, hi }
    }

    /// Normalized density x^n (n+1) / (hi^(n+1) − lo^(n+1)).
    ///
    /// The normalization is not special-cased for n = −1, where both the
    /// numerator factor and the denominator vanish and the result is NaN.
    /// Callers treat a NaN density as an impossible parameter value.
    pub fn density(&self, x: f64) -> f64 {
        let n1 = self.index + 1.0;
        x.powf(self.index) * n1 / (self.hi.powf(n1) - self.lo.powf(n1))
    }

    /// Probability mass between `a` and `b` (a ≤ b) under the normalized law.
    ///
    /// Shares the n = −1 singularity of [`density`](Self::density).
    pub fn integral(&self, a: f64, b: f64) -> f64 {
        let n1 = self.index + 1.0;
        (b.powf(n1) - a.powf(n1)) / (self.hi.powf(n1) - self.lo.powf(n1))
    }

    /// Inverse of the cumulative distribution: the `x` below which a
    /// fraction `u` of the mass lies.
    pub fn quantile(&self, u: f64) -> f64 {
        let n1 = self.index + 1.0;
        let lo = self.lo.powf(n1);
        let hi = self.hi.powf(n1);
        (lo + u * (hi - lo)).powf(1.0 / n1)
    }

    pub fn contains(&self, x: f64) -> bool {
        (self.lo..=self.hi).contains(&x)
    }
}
