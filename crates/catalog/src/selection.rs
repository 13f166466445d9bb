use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use units::{Length, Mass, Time, DAYS_PER_YEAR};

use completeness::Star;
use inference::Detection;

use crate::columns::{table_from_columns, CDPP_PREFIX, MES_THRESHOLD_PREFIX};
use crate::error::CatalogError;
use crate::records::{KoiRecord, StellarRecord};

/// Cuts defining the stellar sample.
///
/// Defaults select the Sun-like dwarfs with long, well-sampled light curves
/// used in the published analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StellarSelection {
    /// Effective temperature range (K), inclusive
    pub teff_range: (f64, f64),

    /// Largest stellar radius (solar radii)
    pub max_radius: f64,

    /// Data span must exceed this many years
    pub min_dataspan_years: f64,

    /// Duty cycle must exceed this
    pub min_duty_cycle: f64,

    /// Column the noise cut is applied to
    pub cdpp_column: String,

    /// Largest CDPP (ppm) in `cdpp_column`
    pub max_cdpp: f64,

    pub min_logg: Option<f64>,
}

impl Default for StellarSelection {
    fn default() -> Self {
        Self {
            teff_range: (4200.0, 6100.0),
            max_radius: 1.15,
            min_dataspan_years: 2.0,
            min_duty_cycle: 0.6,
            cdpp_column: "rrmscdpp07p5".to_string(),
            max_cdpp: 1000.0,
            min_logg: None,
        }
    }
}

impl StellarSelection {
    pub fn accepts(&self, record: &StellarRecord) -> bool {
        let (teff_lo, teff_hi) = self.teff_range;
        let cdpp_ok = record
            .cdpp
            .get(&self.cdpp_column)
            .is_some_and(|&cdpp| cdpp <= self.max_cdpp);
        let logg_ok = self.min_logg.map_or(true, |min| record.logg >= min);

        (teff_lo..=teff_hi).contains(&record.teff)
            && record.radius <= self.max_radius
            && record.dataspan > self.min_dataspan_years * DAYS_PER_YEAR
            && record.dutycycle > self.min_duty_cycle
            && cdpp_ok
            && record.mass.is_some_and(f64::is_finite)
            && logg_ok
    }
}

/// Cuts defining the planet candidate sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateSelection {
    /// Required pipeline disposition; `None` keeps every disposition
    pub disposition: Option<String>,

    /// Period range (days), inclusive
    pub period_range: (f64, f64),

    /// Radius range (Earth radii), inclusive
    pub radius_range: (f64, f64),
}

impl Default for CandidateSelection {
    fn default() -> Self {
        Self {
            disposition: Some("CANDIDATE".to_string()),
            period_range: (50.0, 300.0),
            radius_range: (0.75, 2.5),
        }
    }
}

impl CandidateSelection {
    pub fn accepts(&self, record: &KoiRecord) -> bool {
        let disposition_ok = self
            .disposition
            .as_deref()
            .map_or(true, |d| record.koi_pdisposition == d);
        let (p_lo, p_hi) = self.period_range;
        let (r_lo, r_hi) = self.radius_range;

        disposition_ok
            && (p_lo..=p_hi).contains(&record.koi_period)
            && (r_lo..=r_hi).contains(&record.koi_prad)
    }
}

/// Convert one stellar record into a [`Star`].
pub fn to_star(record: &StellarRecord) -> Result<Star, CatalogError> {
    let kepid = record.kepid;
    let mass = record
        .mass
        .filter(|m| m.is_finite())
        .ok_or(CatalogError::MissingMass { kepid })?;

    Ok(Star {
        id: kepid,
        effective_temperature: record.teff,
        log_g: record.logg,
        radius: Length::from_solar_radii(record.radius),
        mass: Mass::from_solar_masses(mass),
        dataspan: Time::from_days(record.dataspan),
        duty_cycle: record.dutycycle,
        cdpp: table_from_columns(kepid, &record.cdpp, CDPP_PREFIX)?,
        mes_threshold: table_from_columns(kepid, &record.mesthres, MES_THRESHOLD_PREFIX)?,
    })
}

/// Apply the stellar cuts and convert the survivors.
///
/// Records that pass the cuts but cannot be converted are skipped with a
/// warning.
pub fn select_stars(records: &[StellarRecord], selection: &StellarSelection) -> Vec<Star> {
    let mut skipped = 0;
    let stars: Vec<Star> = records
        .iter()
        .filter(|record| selection.accepts(record))
        .filter_map(|record| match to_star(record) {
            Ok(star) => Some(star),
            Err(err) => {
                log::warn!("Skipping stellar record: {err}");
                skipped += 1;
                None
            }
        })
        .collect();

    log::info!(
        "Selected {} of {} stars ({} skipped)",
        stars.len(),
        records.len(),
        skipped
    );
    stars
}

/// Apply the candidate cuts and convert the survivors.
pub fn select_candidates(records: &[KoiRecord], selection: &CandidateSelection) -> Vec<Detection> {
    let detections: Vec<Detection> = records
        .iter()
        .filter(|record| {
            record.koi_period.is_finite()
                && record.koi_prad.is_finite()
                && selection.accepts(record)
        })
        .map(|record| Detection {
            period: record.koi_period,
            radius: record.koi_prad,
            radius_err_upper: record.koi_prad_err1.map(f64::abs),
            radius_err_lower: record.koi_prad_err2.map(f64::abs),
            kepid: Some(record.kepid),
        })
        .collect();

    log::info!(
        "Selected {} of {} candidates",
        detections.len(),
        records.len()
    );
    detections
}

/// Keep only detections whose host star is in `stars`.
pub fn restrict_to_sample(detections: Vec<Detection>, stars: &[Star]) -> Vec<Detection> {
    let hosts: HashSet<u64> = stars.iter().map(|star| star.id).collect();
    let total = detections.len();
    let kept: Vec<Detection> = detections
        .into_iter()
        .filter(|d| d.kepid.is_some_and(|id| hosts.contains(&id)))
        .collect();

    log::info!(
        "{} of {} candidates orbit stars in the sample",
        kept.len(),
        total
    );
    kept
}
