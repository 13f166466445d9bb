use approx::assert_relative_eq;

use crate::model::{occurrence_density, OccurrenceModel};
use crate::params::PopulationParams;

#[test]
fn density_integrates_to_rate() {
    let model = OccurrenceModel::default();
    let params = PopulationParams::new(0.3_f64.ln(), -0.8, -1.2);

    let (n, m) = (800, 400);
    let dp = (300.0 - 50.0) / n as f64;
    let dr = (2.5 - 0.75) / m as f64;
    let mut total = 0.0;
    for i in 0..n {
        let period = 50.0 + (i as f64 + 0.5) * dp;
        for j in 0..m {
            let radius = 0.75 + (j as f64 + 0.5) * dr;
            total += model.density(&params, period, radius) * dp * dr;
        }
    }
    assert_relative_eq!(total, 0.3, max_relative = 1e-4);
}

#[test]
fn integrated_rate_splits_over_sub_boxes() {
    let model = OccurrenceModel::default();
    let params = PopulationParams::reference();

    let full = model.integrated_rate(&params, (50.0, 300.0), (0.75, 2.5));
    assert_relative_eq!(full, 0.75, max_relative = 1e-12);

    let lower = model.integrated_rate(&params, (50.0, 300.0), (0.75, 1.25));
    let upper = model.integrated_rate(&params, (50.0, 300.0), (1.25, 2.5));
    assert_relative_eq!(lower + upper, full, max_relative = 1e-12);
    // A falling radius distribution puts more planets in the smaller bin
    assert!(lower / 0.5 > upper / 1.25);
}

#[test]
fn gamma_earth_scales_the_density() {
    let model = OccurrenceModel::default();
    let params = PopulationParams::reference();
    let density = occurrence_density(&params, &model, 365.25, 1.0);
    assert_relative_eq!(model.gamma_earth(&params), 365.25 * density, max_relative = 1e-12);
}

#[test]
fn gamma_earth_for_flat_distributions() {
    // Flat in P and R: Γ = rate / (250 · 1.75)
    let model = OccurrenceModel::default();
    let params = PopulationParams::new(0.0, 0.0, 0.0);
    assert_relative_eq!(
        model.gamma_earth(&params),
        365.25 / (250.0 * 1.75),
        max_relative = 1e-12
    );
}

#[test]
fn density_grid_matches_pointwise_density() {
    let model = OccurrenceModel::default();
    let params = PopulationParams::reference();
    let periods = [50.0, 100.0, 200.0, 300.0];
    let radii = [0.75, 1.0, 2.5];

    let grid = model.density_grid(&params, &periods, &radii);
    assert_eq!(grid.dim(), (4, 3));
    for (i, &p) in periods.iter().enumerate() {
        for (j, &r) in radii.iter().enumerate() {
            assert_relative_eq!(grid[[i, j]], model.density(&params, p, r), max_relative = 1e-12);
        }
    }
}

#[test]
fn contains_checks_both_axes() {
    let model = OccurrenceModel::default();
    assert!(model.contains(50.0, 0.75));
    assert!(model.contains(300.0, 2.5));
    assert!(!model.contains(40.0, 1.0));
    assert!(!model.contains(100.0, 3.0));
}

#[test]
fn params_convert_from_slices() {
    let params = PopulationParams::reference();
    let theta = params.to_array();
    assert_eq!(PopulationParams::from_slice(&theta), Some(params));
    assert_eq!(PopulationParams::from(theta), params);
    assert_eq!(PopulationParams::from_slice(&theta[..2]), None);
    assert_relative_eq!(params.rate(), 0.75, max_relative = 1e-12);
}

#[test]
fn period_index_of_minus_one_gives_nan_density() {
    let model = OccurrenceModel::default();
    let params = PopulationParams::new(0.0, -1.0, -1.5);
    assert!(model.density(&params, 100.0, 1.0).is_nan());
}
