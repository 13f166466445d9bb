use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

pub const DAYS_PER_YEAR: f64 = 365.25;
pub const HOURS_PER_DAY: f64 = 24.0;

/// A physical time quantity using f64 precision.
///
/// Days are the base unit. Orbital periods and observing baselines are quoted
/// in days; transit durations are usually quoted in hours.
///
/// # Examples
///
/// ```rust
/// use units::Time;
///
/// let baseline = Time::from_years(4.0);
/// let period = Time::from_days(365.25);
///
/// let expected_transits = baseline / period;
/// assert!((expected_transits - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: days

impl Time {
    /// Creates a new `Time` from a value in days.
    pub fn from_days(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Time` from a value in hours.
    pub fn from_hours(value: f64) -> Self {
        Self(value / HOURS_PER_DAY)
    }

    /// Creates a new `Time` from a value in Julian years.
    pub fn from_years(value: f64) -> Self {
        Self(value * DAYS_PER_YEAR)
    }

    /// Returns the time in days.
    pub fn to_days(&self) -> f64 {
        self.0
    }

    /// Converts the time to hours.
    pub fn to_hours(&self) -> f64 {
        self.0 * HOURS_PER_DAY
    }

    /// Converts the time to Julian years.
    pub fn to_years(&self) -> f64 {
        self.0 / DAYS_PER_YEAR
    }
}

impl Mul<f64> for Time {
    type Output = Time;

    fn mul(self, rhs: f64) -> Time {
        Time(self.0 * rhs)
    }
}

/// Division of Time by Time returns a dimensionless ratio
impl Div for Time {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}
