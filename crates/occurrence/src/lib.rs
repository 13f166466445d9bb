//! Planet occurrence-rate model.
//!
//! The occurrence rate Γ(P, R) is the expected number of planets per star per
//! unit period per unit radius. It is modelled as a product of independent
//! power laws, each normalized over a bounded domain, times an overall rate:
//!
//! Γ(P, R) = exp(ln_rate) · p_P(P; β) · p_R(R; α)

pub mod model;
pub mod params;
pub mod power_law;

#[cfg(test)]
mod model_test;

pub use model::{occurrence_density, OccurrenceModel, EARTH_ANALOG_PERIOD, EARTH_ANALOG_RADIUS};
pub use params::PopulationParams;
pub use power_law::PowerLaw;
