use serde::{Deserialize, Serialize};

/// Parameters of the separable power-law occurrence model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopulationParams {
    /// Natural log of the expected number of planets per star in the domain
    pub ln_rate: f64,

    /// Period power-law exponent β
    pub period_index: f64,

    /// Radius power-law exponent α
    pub radius_index: f64,
}

impl PopulationParams {
    pub const DIM: usize = 3;

    pub fn new(ln_rate: f64, period_index: f64, radius_index: f64) -> Self {
        Self {
            ln_rate,
            period_index,
            radius_index,
        }
    }

    /// Starting point of the published analysis: 0.75 planets per star,
    /// β = −0.53218, α = −1.5.
    pub fn reference() -> Self {
        Self::new(0.75_f64.ln(), -0.53218, -1.5)
    }

    /// Expected number of planets per star over the whole model domain.
    pub fn rate(&self) -> f64 {
        self.ln_rate.exp()
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.ln_rate, self.period_index, self.radius_index]
    }

    /// Read parameters from a slice ordered (ln_rate, β, α).
    ///
    /// Returns `None` unless the slice has exactly three entries.
    pub fn from_slice(theta: &[f64]) -> Option<Self> {
        match theta {
            &[ln_rate, period_index, radius_index] => {
                Some(Self::new(ln_rate, period_index, radius_index))
            }
            _ => None,
        }
    }
}

impl From<[f64; 3]> for PopulationParams {
    fn from(theta: [f64; 3]) -> Self {
        Self::new(theta[0], theta[1], theta[2])
    }
}

impl From<PopulationParams> for [f64; 3] {
    fn from(params: PopulationParams) -> Self {
        params.to_array()
    }
}
