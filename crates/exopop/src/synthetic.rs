//! Seeded synthetic surveys with a known occurrence rate.
//!
//! Stars are drawn from a Sun-like population with randomized noise. Each star
//! hosts a Poisson number of planets drawn from the true population, and each
//! planet is kept as a detection with its detection probability (including the
//! geometric transit probability).

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use rand_distr::{Distribution, Poisson};
use units::{Length, Mass, Time};

use completeness::{detection_probability, CurveError, InterpolationTable, Star};
use inference::Detection;
use occurrence::{OccurrenceModel, PopulationParams};

/// Durations (hours) at which the synthetic noise curves are tabulated
const DURATIONS: [f64; 14] = [
    1.5, 2.0, 2.5, 3.0, 3.5, 4.5, 5.0, 6.0, 7.5, 9.0, 10.5, 12.0, 12.5, 15.0,
];

/// A generated stellar sample and the planets detected around it.
#[derive(Debug, Clone)]
pub struct SyntheticSurvey {
    pub stars: Vec<Star>,
    pub detections: Vec<Detection>,

    /// Planets injected before detection
    pub injected: usize,

    pub truth: PopulationParams,
}

#[derive(Debug, Clone)]
pub struct SyntheticSurveyBuilder {
    star_count: usize,
    truth: PopulationParams,
    model: OccurrenceModel,
    radius_error: f64,
    seed: u64,
}

impl Default for SyntheticSurveyBuilder {
    fn default() -> Self {
        Self {
            star_count: 2000,
            truth: PopulationParams::new(5.0_f64.ln(), -0.6, -1.4),
            model: OccurrenceModel::default(),
            radius_error: 0.1,
            seed: 42,
        }
    }
}

impl SyntheticSurveyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stars(mut self, star_count: usize) -> Self {
        self.star_count = star_count;
        self
    }

    pub fn truth(mut self, truth: PopulationParams) -> Self {
        self.truth = truth;
        self
    }

    pub fn model(mut self, model: OccurrenceModel) -> Self {
        self.model = model;
        self
    }

    /// Fractional one-sigma radius uncertainty reported for detections
    pub fn radius_error(mut self, fraction: f64) -> Self {
        self.radius_error = fraction;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(&self) -> Result<SyntheticSurvey, CurveError> {
        let mut rng = ChaChaRng::seed_from_u64(self.seed);
        let period_law = self.model.period_law(&self.truth);
        let radius_law = self.model.radius_law(&self.truth);
        let planets_per_star = match Poisson::new(self.truth.rate()) {
            Ok(poisson) => Some(poisson),
            Err(err) => {
                log::warn!("Cannot draw planet counts ({err}); injecting no planets");
                None
            }
        };

        let mut stars = Vec::with_capacity(self.star_count);
        let mut detections = Vec::new();
        let mut injected = 0;

        for i in 0..self.star_count {
            let star = random_star(&mut rng, 1_000_000 + i as u64)?;

            let count = planets_per_star
                .as_ref()
                .map_or(0, |poisson| poisson.sample(&mut rng) as usize);
            for _ in 0..count {
                let period = period_law.quantile(rng.random());
                let radius = radius_law.quantile(rng.random());
                injected += 1;

                let p = detection_probability(&star, period, radius, 0.0, true);
                if rng.random::<f64>() < p {
                    let sigma = self.radius_error * radius;
                    detections.push(
                        Detection::new(period, radius)
                            .with_radius_errors(sigma, sigma)
                            .with_kepid(star.id),
                    );
                }
            }
            stars.push(star);
        }

        log::info!(
            "Synthetic survey: {} stars, {} planets injected, {} detected",
            stars.len(),
            injected,
            detections.len()
        );

        Ok(SyntheticSurvey {
            stars,
            detections,
            injected,
            truth: self.truth,
        })
    }
}

fn random_star(rng: &mut ChaChaRng, id: u64) -> Result<Star, CurveError> {
    let cdpp_3h: f64 = rng.random_range(20.0..120.0);
    let threshold: f64 = rng.random_range(7.1..8.0);

    let cdpp = InterpolationTable::new(
        DURATIONS
            .iter()
            .map(|&d| (d, cdpp_3h * (3.0 / d).sqrt()))
            .collect(),
    )?;
    let mes_threshold =
        InterpolationTable::new(DURATIONS.iter().map(|&d| (d, threshold)).collect())?;

    Ok(Star {
        id,
        effective_temperature: rng.random_range(4200.0..6100.0),
        log_g: rng.random_range(4.1..4.6),
        radius: Length::from_solar_radii(rng.random_range(0.7..1.15)),
        mass: Mass::from_solar_masses(rng.random_range(0.7..1.2)),
        dataspan: Time::from_days(rng.random_range(1100.0..1460.0)),
        duty_cycle: rng.random_range(0.6..0.9),
        cdpp,
        mes_threshold,
    })
}
