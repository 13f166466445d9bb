use serde::{Deserialize, Serialize};
use std::ops::Div;

/// Earth radius in solar radii, as used by the Kepler pipeline for radius ratios.
pub const EARTH_RADIUS_SOLAR_RADII: f64 = 0.009171;

/// Solar radius in AU: 1 R☉ = 0.00465047 AU
pub const SOLAR_RADIUS_AU: f64 = 1.0 / 215.032;
/// AU to solar radii
pub const AU_TO_SOLAR_RADIUS: f64 = 1.0 / SOLAR_RADIUS_AU;

/// A physical length quantity using f64 precision.
///
/// The `Length` struct represents length values with solar radii as the base unit.
/// Stellar radii and scaled orbital distances are both natural in this unit, and
/// planet radii convert through the Kepler Earth/Sun radius ratio.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let sun = Length::from_solar_radii(1.0);
/// let earth = Length::from_earth_radii(1.0);
///
/// let ratio = earth / sun;
/// assert!((ratio - 0.009171).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: solar radii

impl Length {
    /// Creates a new `Length` from a value in solar radii.
    pub fn from_solar_radii(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in Earth radii.
    pub fn from_earth_radii(value: f64) -> Self {
        Self(value * EARTH_RADIUS_SOLAR_RADII)
    }

    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self(value * AU_TO_SOLAR_RADIUS)
    }

    /// Returns the length in solar radii.
    pub fn to_solar_radii(&self) -> f64 {
        self.0
    }

    /// Converts the length to Earth radii.
    pub fn to_earth_radii(&self) -> f64 {
        self.0 / EARTH_RADIUS_SOLAR_RADII
    }

    /// Converts the length to astronomical units.
    pub fn to_au(&self) -> f64 {
        self.0 * SOLAR_RADIUS_AU
    }

    /// True for a finite, strictly positive length.
    pub fn is_physical(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}
