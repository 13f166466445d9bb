use ndarray::{Array2, ArrayView1};
use rand::Rng;
use rand_chacha::ChaChaRng;
use rand_distr::StandardNormal;

use crate::detection::Detection;

/// Posterior radius samples for every detection, one row per detection.
///
/// Each draw picks a side with probability ½ and moves a half-normal
/// distance along it: `R + |N|·σ⁺` above or `R − |N|·σ⁻` below. Detections
/// without both uncertainties repeat their point radius.
#[derive(Debug, Clone, PartialEq)]
pub struct RadiusDraws {
    samples: Array2<f64>,
}

impl RadiusDraws {
    /// Draw `per_detection` radii for every detection (at least one).
    pub fn sample(detections: &[Detection], per_detection: usize, rng: &mut ChaChaRng) -> Self {
        let k = per_detection.max(1);
        let mut samples = Array2::zeros((detections.len(), k));

        for (mut row, detection) in samples.rows_mut().into_iter().zip(detections) {
            match (detection.radius_err_upper, detection.radius_err_lower) {
                (Some(upper), Some(lower)) => {
                    for value in row.iter_mut() {
                        let step: f64 = rng.sample::<f64, _>(StandardNormal).abs();
                        *value = if rng.random::<f64>() < 0.5 {
                            detection.radius + step * upper.abs()
                        } else {
                            detection.radius - step * lower.abs()
                        };
                    }
                }
                _ => row.fill(detection.radius),
            }
        }

        Self { samples }
    }

    pub fn detection_count(&self) -> usize {
        self.samples.nrows()
    }

    pub fn draws_per_detection(&self) -> usize {
        self.samples.ncols()
    }

    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, f64>> {
        self.samples.rows().into_iter()
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.samples
    }
}
