use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::detection::Detection;
use crate::radius_draws::RadiusDraws;

#[test]
fn draws_have_one_row_per_detection() {
    let detections = vec![
        Detection::new(80.0, 1.5).with_radius_errors(0.2, 0.1),
        Detection::new(120.0, 2.0),
    ];
    let mut rng = ChaChaRng::seed_from_u64(5);
    let draws = RadiusDraws::sample(&detections, 32, &mut rng);

    assert_eq!(draws.detection_count(), 2);
    assert_eq!(draws.draws_per_detection(), 32);
    let rows: Vec<_> = draws.rows().collect();
    assert!(rows[1].iter().all(|&r| r == 2.0));
    assert!(rows[0].iter().any(|&r| r != 1.5));
}

#[test]
fn draws_split_evenly_around_the_point_estimate() {
    let detections = vec![Detection::new(80.0, 1.5).with_radius_errors(0.3, 0.1)];
    let mut rng = ChaChaRng::seed_from_u64(23);
    let draws = RadiusDraws::sample(&detections, 20_000, &mut rng);
    let radii = draws.as_array();

    let above: Vec<f64> = radii.iter().copied().filter(|&r| r > 1.5).collect();
    let below: Vec<f64> = radii.iter().copied().filter(|&r| r < 1.5).collect();
    let fraction_above = above.len() as f64 / 20_000.0;
    assert!((fraction_above - 0.5).abs() < 0.02);

    // Mean of a half-normal with scale σ is σ·√(2/π)
    let mean_above = above.iter().map(|r| r - 1.5).sum::<f64>() / above.len() as f64;
    let mean_below = below.iter().map(|r| 1.5 - r).sum::<f64>() / below.len() as f64;
    let half_normal = (2.0 / std::f64::consts::PI).sqrt();
    assert_relative_eq!(mean_above, 0.3 * half_normal, max_relative = 0.05);
    assert_relative_eq!(mean_below, 0.1 * half_normal, max_relative = 0.05);
}

#[test]
fn draws_are_reproducible_for_a_seed() {
    let detections = vec![Detection::new(80.0, 1.5).with_radius_errors(0.2, 0.2)];
    let first = RadiusDraws::sample(&detections, 10, &mut ChaChaRng::seed_from_u64(9));
    let second = RadiusDraws::sample(&detections, 10, &mut ChaChaRng::seed_from_u64(9));
    let third = RadiusDraws::sample(&detections, 10, &mut ChaChaRng::seed_from_u64(10));
    assert_eq!(first, second);
    assert_ne!(first, third);
}

#[test]
fn at_least_one_draw_is_taken() {
    let detections = vec![Detection::new(80.0, 1.5)];
    let draws = RadiusDraws::sample(&detections, 0, &mut ChaChaRng::seed_from_u64(1));
    assert_eq!(draws.draws_per_detection(), 1);
}
