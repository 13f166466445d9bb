use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use units::{Length, Mass, Time};

use crate::interpolation::InterpolationTable;
use crate::star::Star;

/// Durations (hours) at which Kepler tabulates CDPP and MES thresholds
pub const KEPLER_DURATIONS: [f64; 14] = [
    1.5, 2.0, 2.5, 3.0, 3.5, 4.5, 5.0, 6.0, 7.5, 9.0, 10.5, 12.0, 12.5, 15.0,
];

/// Sun-like star with flat 30 ppm noise and a flat 7.1 MES threshold over a
/// four-year baseline.
pub fn quiet_sun() -> Star {
    Star {
        id: 1,
        effective_temperature: 5778.0,
        log_g: 4.44,
        radius: Length::from_solar_radii(1.0),
        mass: Mass::from_solar_masses(1.0),
        dataspan: Time::from_days(1460.0),
        duty_cycle: 0.84,
        cdpp: flat_table(30.0),
        mes_threshold: flat_table(7.1),
    }
}

pub fn flat_table(value: f64) -> InterpolationTable {
    InterpolationTable::new(KEPLER_DURATIONS.iter().map(|&d| (d, value)).collect()).unwrap()
}

/// Randomized G/K dwarf sample with noise falling as 1/√duration.
pub fn random_stars(n: usize, seed: u64) -> Vec<Star> {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let cdpp_3h: f64 = rng.random_range(25.0..150.0);
            let threshold: f64 = rng.random_range(7.1..9.0);
            let cdpp = InterpolationTable::new(
                KEPLER_DURATIONS
                    .iter()
                    .map(|&d| (d, cdpp_3h * (3.0 / d).sqrt()))
                    .collect(),
            )
            .unwrap();
            Star {
                id: i as u64 + 100,
                effective_temperature: rng.random_range(4200.0..6100.0),
                log_g: rng.random_range(4.1..4.6),
                radius: Length::from_solar_radii(rng.random_range(0.7..1.15)),
                mass: Mass::from_solar_masses(rng.random_range(0.7..1.2)),
                dataspan: Time::from_days(rng.random_range(800.0..1460.0)),
                duty_cycle: rng.random_range(0.6..0.9),
                cdpp,
                mes_threshold: flat_table(threshold),
            }
        })
        .collect()
}
