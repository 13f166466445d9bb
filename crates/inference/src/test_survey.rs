use ndarray::Array2;
use units::{Length, Mass, Time};

use completeness::{
    build_completeness_map, CompletenessMap, InterpolationTable, PeriodRadiusGrid, Star,
};

use crate::detection::Detection;

const DURATIONS: [f64; 6] = [1.5, 3.0, 6.0, 9.0, 12.0, 15.0];

fn table(value: impl Fn(f64) -> f64) -> InterpolationTable {
    InterpolationTable::new(DURATIONS.iter().map(|&d| (d, value(d))).collect()).unwrap()
}

/// A few Sun-like stars with mildly different noise levels.
pub fn stars() -> Vec<Star> {
    (0..8)
        .map(|i| {
            let cdpp_3h = 20.0 + 5.0 * i as f64;
            Star {
                id: 1000 + i,
                effective_temperature: 5600.0,
                log_g: 4.4,
                radius: Length::from_solar_radii(0.9 + 0.02 * i as f64),
                mass: Mass::from_solar_masses(1.0),
                dataspan: Time::from_days(1460.0),
                duty_cycle: 0.85,
                cdpp: table(|d| cdpp_3h * (3.0 / d).sqrt()),
                mes_threshold: table(|_| 7.1),
            }
        })
        .collect()
}

pub fn grid() -> PeriodRadiusGrid {
    PeriodRadiusGrid::linspace((50.0, 300.0), 21, (0.75, 2.5), 15).unwrap()
}

pub fn map() -> CompletenessMap {
    build_completeness_map(&stars(), &grid(), 0.0)
}

/// Map with the same completeness at every node.
pub fn uniform_map(value: f64) -> CompletenessMap {
    let grid = grid();
    let values = Array2::from_elem(grid.shape(), value);
    CompletenessMap::from_values(grid, values, 1).unwrap()
}

pub fn detections() -> Vec<Detection> {
    vec![
        Detection::new(62.0, 2.3).with_radius_errors(0.2, 0.15),
        Detection::new(75.5, 1.9),
        Detection::new(88.1, 2.1).with_radius_errors(0.3, 0.3),
        Detection::new(104.0, 1.4),
        Detection::new(131.7, 2.4),
        Detection::new(162.3, 1.7).with_radius_errors(0.1, 0.2),
        Detection::new(214.9, 2.2),
        Detection::new(288.0, 1.1),
    ]
}
