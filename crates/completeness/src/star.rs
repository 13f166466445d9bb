use serde::{Deserialize, Serialize};
use units::{Length, Mass, Time};

use crate::error::StarError;
use crate::interpolation::InterpolationTable;

/// A target star together with its noise characterization.
///
/// The two tables are indexed by transit duration in hours:
/// - `cdpp`: combined differential photometric precision (ppm)
/// - `mes_threshold`: the pipeline's multiple-event-statistic threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    /// Kepler input catalog identifier
    pub id: u64,

    /// Effective temperature (K)
    pub effective_temperature: f64,

    /// Surface gravity, log10(g / cm s⁻²)
    pub log_g: f64,

    pub radius: Length,
    pub mass: Mass,

    /// Time between first and last observation
    pub dataspan: Time,

    /// Fraction of `dataspan` with valid data
    pub duty_cycle: f64,

    pub cdpp: InterpolationTable,
    pub mes_threshold: InterpolationTable,
}

impl Star {
    /// Check that the parameters the completeness model depends on are physical.
    pub fn validate(&self) -> Result<(), StarError> {
        let id = self.id;
        if !self.radius.is_physical() {
            return Err(StarError::InvalidRadius {
                id,
                value: self.radius.to_solar_radii(),
            });
        }
        if !self.mass.is_physical() {
            return Err(StarError::InvalidMass {
                id,
                value: self.mass.to_solar_masses(),
            });
        }
        let span = self.dataspan.to_days();
        if !(span.is_finite() && span > 0.0) {
            return Err(StarError::InvalidDataSpan { id, value: span });
        }
        if !(0.0..=1.0).contains(&self.duty_cycle) {
            return Err(StarError::InvalidDutyCycle {
                id,
                value: self.duty_cycle,
            });
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
