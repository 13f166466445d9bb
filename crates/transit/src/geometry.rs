//! Transit duration, orbital scale and depth.
//!
//! The constants reproduce the Kepler DR24 completeness calculation exactly,
//! including two conventions that differ from the published paper text (see
//! [`transit_duration`] and [`transit_depth`]).

use std::f64::consts::PI;

use units::{Length, Mass, Time};

/// G/(4π²) with periods in days, masses in solar masses and lengths in solar
/// radii, so that a³ = K · P² · M.
pub const KEPLER_CONSTANT: f64 = 2945.4625385377644 / (4.0 * PI * PI);

/// Limb-darkening constant term of the depth approximation
pub const LIMB_DARKENING_C: f64 = 1.0874;

/// Limb-darkening linear term of the depth approximation
pub const LIMB_DARKENING_S: f64 = 1.0187;

/// Fraction of the maximum depth recovered by the detection pipeline
const DEPTH_EFFICIENCY: f64 = 0.84;

/// Transit duration for a planet with the given period and scaled orbit.
///
/// τ = ¼ · P · √(1 − e²) / (a/R★)
///
/// The result carries the same unit as `period`.
///
/// The coefficient is 0.25 on a period in any unit. Reading the published
/// formula with the period in hours would give 1/6 instead; the Kepler
/// completeness numbers are computed with 0.25.
///
/// # Arguments
/// * `period` - Orbital period
/// * `aor` - Semi-major axis in units of the stellar radius
/// * `eccentricity` - Orbital eccentricity (0 ≤ e < 1)
///
/// # Example
/// ```
/// use transit::transit_duration;
/// use units::Time;
///
/// let tau = transit_duration(Time::from_days(365.25), 215.0, 0.0);
/// assert!((tau.to_hours() - 10.19).abs() < 0.01);
/// ```
pub fn transit_duration(period: Time, aor: f64, eccentricity: f64) -> Time {
    period * (0.25 * (1.0 - eccentricity * eccentricity).sqrt() / aor)
}

/// Semi-major axis from Kepler's third law.
///
/// a = (K · P² · M)^(1/3), returned in solar radii. Divide by the stellar
/// radius to get the dimensionless `aor`.
///
/// # Arguments
/// * `period_days` - Orbital period in days
/// * `stellar_mass` - Host star mass
///
/// # Example
/// ```
/// use transit::scaled_semi_major_axis;
/// use units::Mass;
///
/// // One year around the Sun is one AU, about 215 solar radii
/// let a = scaled_semi_major_axis(365.25, Mass::from_solar_masses(1.0));
/// assert!((a.to_au() - 1.0).abs() < 0.01);
/// ```
pub fn scaled_semi_major_axis(period_days: f64, stellar_mass: Mass) -> Length {
    let cubed = KEPLER_CONSTANT * period_days * period_days * stellar_mass.to_solar_masses();
    Length::from_solar_radii(cubed.cbrt())
}

/// Planet-to-star radius ratio k = R_p / R★.
pub fn radius_ratio(planet_radius: Length, stellar_radius: Length) -> f64 {
    planet_radius / stellar_radius
}

/// Fractional transit depth for radius ratio `k`.
///
/// δ = 0.84 · k² · (c − s·k)
///
/// The paper prints `c + s·k`; the Kepler completeness numbers use `c − s·k`.
pub fn transit_depth(k: f64) -> f64 {
    DEPTH_EFFICIENCY * k * k * (LIMB_DARKENING_C - LIMB_DARKENING_S * k)
}
