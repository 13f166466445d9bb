use serde::{Deserialize, Serialize};

/// A physical mass quantity using f64 precision.
///
/// Solar masses are the base unit; host-star masses in stellar catalogs are
/// tabulated this way.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let host = Mass::from_solar_masses(0.9);
/// assert!(host.is_physical());
/// assert!(host < Mass::from_solar_masses(1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: solar masses

impl Mass {
    /// Creates a new `Mass` from a value in solar masses.
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value)
    }

    /// Returns the mass in solar masses.
    pub fn to_solar_masses(&self) -> f64 {
        self.0
    }

    /// True for a finite, strictly positive mass.
    pub fn is_physical(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}
