use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One row of the stellar properties table.
///
/// Noise and threshold columns keep their catalog names as keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StellarRecord {
    pub kepid: u64,

    /// Effective temperature (K)
    pub teff: f64,

    pub logg: f64,

    /// Stellar radius (solar radii)
    pub radius: f64,

    /// Stellar mass (solar masses), absent for some targets
    #[serde(default)]
    pub mass: Option<f64>,

    /// Days between first and last observation
    pub dataspan: f64,

    pub dutycycle: f64,

    #[serde(default)]
    pub cdpp: BTreeMap<String, f64>,

    #[serde(default)]
    pub mesthres: BTreeMap<String, f64>,
}

/// One row of the KOI table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KoiRecord {
    pub kepid: u64,

    /// Pipeline disposition, e.g. `CANDIDATE` or `FALSE POSITIVE`
    pub koi_pdisposition: String,

    /// Orbital period (days)
    pub koi_period: f64,

    /// Planet radius (Earth radii)
    pub koi_prad: f64,

    /// Upper radius uncertainty
    #[serde(default)]
    pub koi_prad_err1: Option<f64>,

    /// Lower radius uncertainty, stored as a negative number
    #[serde(default)]
    pub koi_prad_err2: Option<f64>,
}
