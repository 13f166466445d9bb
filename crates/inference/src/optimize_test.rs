use approx::assert_relative_eq;
use occurrence::{OccurrenceModel, PopulationParams};

use crate::error::OptimizeError;
use crate::likelihood::{PopulationLikelihood, PriorBounds};
use crate::optimize::{maximize_likelihood, minimize_bounded, OptimizeOptions};
use crate::test_survey;

fn rosenbrock(x: &[f64]) -> f64 {
    (1.0 - x[0]).powi(2) + 100.0 * (x[1] - x[0] * x[0]).powi(2)
}

#[test]
fn finds_interior_minimum() {
    let bounds = [(-5.0, 5.0), (-5.0, 5.0)];
    let result =
        minimize_bounded(rosenbrock, &[-1.2, 1.0], &bounds, &OptimizeOptions::default()).unwrap();

    assert!(result.converged);
    assert_relative_eq!(result.x[0], 1.0, epsilon = 1e-3);
    assert_relative_eq!(result.x[1], 1.0, epsilon = 1e-3);
    assert!(result.fun < 1e-6);
    assert!(result.evaluations > result.iterations);
}

#[test]
fn minimum_outside_the_box_lands_on_the_boundary() {
    let f = |x: &[f64]| (x[0] - 3.0).powi(2) + (x[1] + 0.5).powi(2);
    let bounds = [(-2.0, 2.0), (-2.0, 2.0)];
    let result = minimize_bounded(f, &[0.5, 0.5], &bounds, &OptimizeOptions::default()).unwrap();

    assert_relative_eq!(result.x[0], 2.0, epsilon = 1e-3);
    assert_relative_eq!(result.x[1], -0.5, epsilon = 1e-3);
}

#[test]
fn objective_is_only_evaluated_inside_the_box() {
    let bounds = [(0.0, 1.0), (-1.0, 0.0)];
    let f = |x: &[f64]| {
        assert!((0.0..=1.0).contains(&x[0]) && (-1.0..=0.0).contains(&x[1]));
        (x[0] + 1.0).powi(2) + (x[1] - 1.0).powi(2)
    };
    // Start outside the box on purpose
    let result = minimize_bounded(f, &[3.0, -4.0], &bounds, &OptimizeOptions::default()).unwrap();
    assert_relative_eq!(result.x[0], 0.0, epsilon = 1e-3);
    assert_relative_eq!(result.x[1], 0.0, epsilon = 1e-3);
}

#[test]
fn running_out_of_iterations_is_not_an_error() {
    let options = OptimizeOptions {
        max_iter: 3,
        ..OptimizeOptions::default()
    };
    let bounds = [(-5.0, 5.0), (-5.0, 5.0)];
    let result = minimize_bounded(rosenbrock, &[-1.2, 1.0], &bounds, &options).unwrap();
    assert!(!result.converged);
    assert_eq!(result.iterations, 3);
    assert!(result.fun <= rosenbrock(&[-1.2, 1.0]));
}

#[test]
fn invalid_inputs_are_rejected() {
    let options = OptimizeOptions::default();
    assert_eq!(
        minimize_bounded(rosenbrock, &[], &[], &options),
        Err(OptimizeError::EmptyInitialGuess)
    );
    assert_eq!(
        minimize_bounded(rosenbrock, &[0.0, 0.0], &[(-1.0, 1.0)], &options),
        Err(OptimizeError::DimensionMismatch {
            expected: 2,
            found: 1
        })
    );
    assert_eq!(
        minimize_bounded(rosenbrock, &[0.0, 0.0], &[(-1.0, 1.0), (1.0, 1.0)], &options),
        Err(OptimizeError::InvalidBounds { index: 1 })
    );
}

#[test]
fn maximizes_the_survey_likelihood() {
    let _ = env_logger::builder().is_test(true).try_init();

    let likelihood = PopulationLikelihood::new(
        OccurrenceModel::default(),
        test_survey::map(),
        test_survey::detections(),
    );
    let initial = PopulationParams::reference();
    let result = maximize_likelihood(
        &likelihood,
        &initial,
        &PriorBounds::default(),
        &OptimizeOptions::default(),
    )
    .unwrap();

    let best = result.params().unwrap();
    assert!(result.fun <= likelihood.negative_log_likelihood(&initial));
    assert_relative_eq!(result.fun, likelihood.negative_log_likelihood(&best));

    // At the maximum in ln_rate the expected number of detections equals the
    // observed number
    let n = likelihood.detections().len() as f64;
    if result.converged && PriorBounds::default().contains(&best) {
        assert_relative_eq!(likelihood.expected_detections(&best), n, max_relative = 1e-3);
    }
}
