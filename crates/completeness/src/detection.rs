//! Per-star detection probability.
//!
//! The probability that a transiting planet is recovered is the product of
//! three terms:
//!
//! 1. **Detection efficiency** `pdet`: the pipeline's recovery rate as a
//!    function of the expected multiple event statistic (MES), calibrated by
//!    injection–recovery tests as a Gamma CDF.
//! 2. **Window function** `pwin`: the probability that at least three transits
//!    land in the observed data, given the star's duty cycle.
//! 3. **Geometric probability** `pgeom`: the chance that the orbit is aligned
//!    so that the planet transits at all.
//!
//! Invalid inputs (non-physical stars, non-positive periods, anything that
//! produces a non-finite intermediate) evaluate to zero probability.

use statrs::distribution::{ContinuousCDF, Gamma};
use units::{Length, Time};

use transit::{radius_ratio, scaled_semi_major_axis, transit_depth, transit_duration};

use crate::star::Star;

/// Calibration of the MES → detection-efficiency relation.
///
/// The default is the Kepler DR24 calibration: a Gamma CDF with shape 4.65
/// and scale 0.98 evaluated at `MES − 4.1 − (MES_threshold − 7.1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionModel {
    /// Gamma shape parameter
    pub gamma_shape: f64,

    /// Gamma scale parameter (location is fixed at 0)
    pub gamma_scale: f64,

    /// Offset subtracted from the expected MES
    pub mes_offset: f64,

    /// Nominal threshold that the per-star threshold is measured against
    pub reference_threshold: f64,
}

impl Default for DetectionModel {
    fn default() -> Self {
        Self {
            gamma_shape: 4.65,
            gamma_scale: 0.98,
            mes_offset: 4.1,
            reference_threshold: 7.1,
        }
    }
}

/// Quantities that depend on the star and period but not on planet radius.
///
/// The completeness grid evaluates many radii per period, so these are
/// computed once per grid row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodTerms {
    /// Semi-major axis in stellar radii
    pub aor: f64,

    /// Transit duration
    pub duration: Time,

    /// Noise at the transit duration (ppm)
    pub cdpp_ppm: f64,

    /// MES threshold at the transit duration
    pub mes_threshold: f64,

    /// Expected number of observed transits, dataspan × duty cycle / period
    pub n_transits: f64,

    /// Window function
    pub window: f64,

    /// Geometric transit probability
    pub geometric: f64,
}

impl DetectionModel {
    /// Pipeline detection efficiency at offset MES `x`.
    pub fn efficiency(&self, x: f64) -> f64 {
        if !x.is_finite() || x <= 0.0 {
            return 0.0;
        }
        match Gamma::new(self.gamma_shape, 1.0 / self.gamma_scale) {
            Ok(gamma) => gamma.cdf(x),
            Err(_) => 0.0,
        }
    }

    /// Offset MES fed to [`efficiency`](Self::efficiency).
    pub fn mes_excess(&self, mes: f64, mes_threshold: f64) -> f64 {
        mes - self.mes_offset - (mes_threshold - self.reference_threshold)
    }

    /// Evaluate all radius-independent terms for one star and period.
    ///
    /// Returns `None` when the star or period is not physical.
    pub fn period_terms(
        &self,
        star: &Star,
        period_days: f64,
        eccentricity: f64,
    ) -> Option<PeriodTerms> {
        if !star.is_valid() || !(period_days.is_finite() && period_days > 0.0) {
            return None;
        }

        let aor = scaled_semi_major_axis(period_days, star.mass) / star.radius;
        let duration = transit_duration(Time::from_days(period_days), aor, eccentricity);
        let hours = duration.to_hours();

        Some(PeriodTerms {
            aor,
            duration,
            cdpp_ppm: star.cdpp.interpolate(hours),
            mes_threshold: star.mes_threshold.interpolate(hours),
            n_transits: star.dataspan.to_days() * star.duty_cycle / period_days,
            window: window_function(star, period_days),
            geometric: geometric_probability(aor, eccentricity),
        })
    }

    /// Expected MES of a planet whose period terms are already known.
    pub fn expected_mes(
        &self,
        terms: &PeriodTerms,
        star_radius: Length,
        planet_radius_earth: f64,
    ) -> f64 {
        let k = radius_ratio(Length::from_earth_radii(planet_radius_earth), star_radius);
        let snr = transit_depth(k) * 1e6 / terms.cdpp_ppm;
        snr * terms.n_transits.sqrt()
    }

    /// Detection efficiency `pdet` for precomputed period terms.
    pub fn efficiency_at(
        &self,
        terms: &PeriodTerms,
        star_radius: Length,
        planet_radius_earth: f64,
    ) -> f64 {
        let mes = self.expected_mes(terms, star_radius, planet_radius_earth);
        self.efficiency(self.mes_excess(mes, terms.mes_threshold))
    }

    /// Full detection probability for precomputed period terms.
    pub fn probability_at(
        &self,
        terms: &PeriodTerms,
        star_radius: Length,
        planet_radius_earth: f64,
        include_geometric: bool,
    ) -> f64 {
        let pdet = self.efficiency_at(terms, star_radius, planet_radius_earth);
        let pgeom = if include_geometric { terms.geometric } else { 1.0 };
        mask(pdet * terms.window * pgeom)
    }

    /// Probability that a planet with the given period (days), radius (Earth
    /// radii) and eccentricity around `star` was detected.
    pub fn probability(
        &self,
        star: &Star,
        period_days: f64,
        planet_radius_earth: f64,
        eccentricity: f64,
        include_geometric: bool,
    ) -> f64 {
        match self.period_terms(star, period_days, eccentricity) {
            Some(terms) => {
                self.probability_at(&terms, star.radius, planet_radius_earth, include_geometric)
            }
            None => 0.0,
        }
    }
}

/// Detection probability under the default [`DetectionModel`].
///
/// # Example
/// ```
/// use completeness::{detection_probability, InterpolationTable, Star};
/// use units::{Length, Mass, Time};
///
/// let star = Star {
///     id: 1,
///     effective_temperature: 5778.0,
///     log_g: 4.44,
///     radius: Length::from_solar_radii(1.0),
///     mass: Mass::from_solar_masses(1.0),
///     dataspan: Time::from_days(1460.0),
///     duty_cycle: 0.84,
///     cdpp: InterpolationTable::constant(1.5, 15.0, 30.0).unwrap(),
///     mes_threshold: InterpolationTable::constant(1.5, 15.0, 7.1).unwrap(),
/// };
///
/// let p = detection_probability(&star, 100.0, 2.0, 0.0, false);
/// assert!(p > 0.0 && p <= 1.0);
/// ```
pub fn detection_probability(
    star: &Star,
    period_days: f64,
    planet_radius_earth: f64,
    eccentricity: f64,
    include_geometric: bool,
) -> f64 {
    DetectionModel::default().probability(
        star,
        period_days,
        planet_radius_earth,
        eccentricity,
        include_geometric,
    )
}

/// Pipeline detection efficiency `pdet` under the default calibration.
///
/// # Arguments
/// * `star` - Host star
/// * `aor` - Semi-major axis in stellar radii
/// * `period_days` - Orbital period in days
/// * `planet_radius_earth` - Planet radius in Earth radii
/// * `eccentricity` - Orbital eccentricity
pub fn detection_efficiency(
    star: &Star,
    aor: f64,
    period_days: f64,
    planet_radius_earth: f64,
    eccentricity: f64,
) -> f64 {
    let model = DetectionModel::default();
    let duration = transit_duration(Time::from_days(period_days), aor, eccentricity);
    let hours = duration.to_hours();
    let terms = PeriodTerms {
        aor,
        duration,
        cdpp_ppm: star.cdpp.interpolate(hours),
        mes_threshold: star.mes_threshold.interpolate(hours),
        n_transits: star.dataspan.to_days() * star.duty_cycle / period_days,
        window: 1.0,
        geometric: 1.0,
    };
    mask(model.efficiency_at(&terms, star.radius, planet_radius_earth))
}

/// Probability that at least three transits fall in the observed data.
///
/// With `M = dataspan / period` expected transits and duty cycle `f`, this is
/// one minus the binomial probability of observing zero, one or two of them:
///
/// pwin = 1 − (1−f)^M − M f (1−f)^(M−1) − ½ M (M−1) f² (1−f)^(M−2)
///
/// Zero when `M < 2` or the expression goes negative.
pub fn window_function(star: &Star, period_days: f64) -> f64 {
    let m = star.dataspan.to_days() / period_days;
    let f = star.duty_cycle;
    let omf = 1.0 - f;

    let pw = 1.0
        - omf.powf(m)
        - m * f * omf.powf(m - 1.0)
        - 0.5 * m * (m - 1.0) * f * f * omf.powf(m - 2.0);
    if m >= 2.0 && pw >= 0.0 {
        pw
    } else {
        0.0
    }
}

/// Geometric transit probability 1 / (aor (1 − e²)).
///
/// Exactly zero for `aor ≤ 1`, where the planet would orbit inside the star.
pub fn geometric_probability(aor: f64, eccentricity: f64) -> f64 {
    if aor > 1.0 {
        1.0 / (aor * (1.0 - eccentricity * eccentricity))
    } else {
        0.0
    }
}

fn mask(p: f64) -> f64 {
    if p.is_finite() {
        p
    } else {
        0.0
    }
}
