use serde::{Deserialize, Serialize};

use catalog::{CandidateSelection, StellarSelection};
use inference::{OptimizeOptions, PriorBounds};
use occurrence::{OccurrenceModel, PopulationParams};

use crate::error::ConfigError;

/// Settings for one analysis run.
///
/// Every field has a default reproducing the published analysis, so a JSON
/// file only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Period domain (days) of the model and the completeness grid
    pub period_range: (f64, f64),

    /// Radius domain (Earth radii) of the model and the completeness grid
    pub radius_range: (f64, f64),

    pub period_nodes: usize,
    pub radius_nodes: usize,

    /// Eccentricity assumed for every planet when building the map
    pub eccentricity: f64,

    pub bounds: PriorBounds,
    pub initial: PopulationParams,
    pub optimizer: OptimizeOptions,

    pub walkers: usize,
    pub burn_in: usize,
    pub production: usize,
    pub seed: u64,

    /// Radius draws per detection; `None` uses point radii
    pub radius_draws: Option<usize>,

    pub stars: StellarSelection,
    pub candidates: CandidateSelection,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        let model = OccurrenceModel::default();
        Self {
            period_range: model.period_range,
            radius_range: model.radius_range,
            period_nodes: 57,
            radius_nodes: 61,
            eccentricity: 0.0,
            bounds: PriorBounds::default(),
            initial: PopulationParams::reference(),
            optimizer: OptimizeOptions::default(),
            walkers: 16,
            burn_in: 1000,
            production: 4000,
            seed: 1234,
            radius_draws: None,
            stars: StellarSelection::default(),
            candidates: CandidateSelection::default(),
        }
    }
}

impl AnalysisConfig {
    /// Parse a JSON configuration and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn model(&self) -> OccurrenceModel {
        OccurrenceModel::new(self.period_range, self.radius_range)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("period_range", self.period_range)?;
        check_range("radius_range", self.radius_range)?;
        // Candidate cuts must stay inside the model domain
        check_within(
            "candidates.period_range",
            self.candidates.period_range,
            self.period_range,
        )?;
        check_within(
            "candidates.radius_range",
            self.candidates.radius_range,
            self.radius_range,
        )?;
        if self.production == 0 {
            return Err(ConfigError::Invalid {
                field: "production",
                reason: "at least one production step is required".to_string(),
            });
        }
        if self.radius_draws == Some(0) {
            return Err(ConfigError::Invalid {
                field: "radius_draws",
                reason: "use null instead of zero draws".to_string(),
            });
        }
        if !self.bounds.contains(&self.initial) {
            return Err(ConfigError::Invalid {
                field: "initial",
                reason: format!("{:?} lies outside the prior bounds", self.initial),
            });
        }
        Ok(())
    }
}

fn check_range(field: &'static str, (lo, hi): (f64, f64)) -> Result<(), ConfigError> {
    if lo.is_finite() && hi.is_finite() && 0.0 < lo && lo < hi {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("expected 0 < lo < hi, got ({lo}, {hi})"),
        })
    }
}

fn check_within(
    field: &'static str,
    (lo, hi): (f64, f64),
    (domain_lo, domain_hi): (f64, f64),
) -> Result<(), ConfigError> {
    if domain_lo <= lo && lo <= hi && hi <= domain_hi {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!(
                "({lo}, {hi}) must lie inside the model domain ({domain_lo}, {domain_hi})"
            ),
        })
    }
}
