use serde::{Deserialize, Serialize};

/// A detected planet candidate.
///
/// Radius uncertainties are positive magnitudes of the upper and lower
/// one-sigma errors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Orbital period (days)
    pub period: f64,

    /// Planet radius (Earth radii)
    pub radius: f64,

    #[serde(default)]
    pub radius_err_upper: Option<f64>,
    #[serde(default)]
    pub radius_err_lower: Option<f64>,

    /// Host star's Kepler input catalog identifier
    #[serde(default)]
    pub kepid: Option<u64>,
}

impl Detection {
    pub fn new(period: f64, radius: f64) -> Self {
        Self {
            period,
            radius,
            radius_err_upper: None,
            radius_err_lower: None,
            kepid: None,
        }
    }

    pub fn with_radius_errors(mut self, upper: f64, lower: f64) -> Self {
        self.radius_err_upper = Some(upper);
        self.radius_err_lower = Some(lower);
        self
    }

    pub fn with_kepid(mut self, kepid: u64) -> Self {
        self.kepid = Some(kepid);
        self
    }
}
