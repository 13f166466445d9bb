use approx::assert_relative_eq;
use units::Mass;

use crate::detection::detection_probability;
use crate::error::GridError;
use crate::grid::PeriodRadiusGrid;
use crate::map::{build_completeness_map, star_completeness, CompletenessMap};
use crate::test_stars::{quiet_sun, random_stars};

fn small_grid() -> PeriodRadiusGrid {
    PeriodRadiusGrid::linspace((50.0, 300.0), 12, (0.75, 2.5), 9).unwrap()
}

#[test]
fn map_is_the_sum_of_per_star_probabilities() {
    let stars = random_stars(5, 3);
    let grid = small_grid();
    let map = build_completeness_map(&stars, &grid, 0.0);

    for (i, &period) in grid.periods().iter().enumerate() {
        for (j, &radius) in grid.radii().iter().enumerate() {
            let expected: f64 = stars
                .iter()
                .map(|star| detection_probability(star, period, radius, 0.0, true))
                .sum();
            assert_relative_eq!(map.values()[[i, j]], expected, max_relative = 1e-12);
        }
    }
    assert_eq!(map.star_count(), 5);
}

#[test]
fn map_is_linear_in_the_stellar_sample() {
    let grid = small_grid();
    let first = random_stars(150, 21);
    let second = random_stars(90, 22);
    let union: Vec<_> = first.iter().chain(second.iter()).cloned().collect();

    let map_first = build_completeness_map(&first, &grid, 0.0);
    let map_second = build_completeness_map(&second, &grid, 0.0);
    let map_union = build_completeness_map(&union, &grid, 0.0);
    let merged = map_first.merge(&map_second).unwrap();

    assert_eq!(merged.star_count(), map_union.star_count());
    for (a, b) in merged.values().iter().zip(map_union.values().iter()) {
        assert_relative_eq!(*a, *b, max_relative = 1e-10, epsilon = 1e-14);
    }
}

#[test]
fn repeated_builds_are_bit_identical() {
    let grid = small_grid();
    let stars = random_stars(300, 5);
    let first = build_completeness_map(&stars, &grid, 0.0);
    let second = build_completeness_map(&stars, &grid, 0.0);
    assert_eq!(first, second);
}

#[test]
fn mean_completeness_is_a_probability() {
    let grid = small_grid();
    let stars = random_stars(40, 9);
    let map = build_completeness_map(&stars, &grid, 0.0);
    let mean = map.mean();

    assert!(mean.iter().all(|&v| (0.0..=1.0).contains(&v)));
    assert!(map.values().iter().all(|&v| v >= 0.0));
    assert!(mean.iter().any(|&v| v > 0.0));
}

#[test]
fn completeness_grows_with_radius_and_falls_with_period() {
    let grid = small_grid();
    let map = build_completeness_map(&[quiet_sun()], &grid, 0.0);
    let values = map.values();
    let (n_periods, n_radii) = grid.shape();

    assert!(values[[0, n_radii - 1]] >= values[[0, 0]]);
    assert!(values[[0, n_radii - 1]] > values[[n_periods - 1, n_radii - 1]]);
}

#[test]
fn invalid_stars_contribute_nothing() {
    let grid = small_grid();
    let mut broken = quiet_sun();
    broken.mass = Mass::from_solar_masses(f64::NAN);

    let with_broken = build_completeness_map(&[quiet_sun(), broken], &grid, 0.0);
    let clean = build_completeness_map(&[quiet_sun()], &grid, 0.0);
    assert_eq!(with_broken.values(), clean.values());
    assert_eq!(with_broken.star_count(), 2);
}

#[test]
fn single_star_map_matches_star_completeness() {
    let grid = small_grid();
    let star = quiet_sun();
    let map = build_completeness_map(std::slice::from_ref(&star), &grid, 0.0);
    assert_eq!(map.values(), &star_completeness(&star, &grid, 0.0));
}

#[test]
fn empty_sample_gives_zero_map() {
    let grid = small_grid();
    let map = build_completeness_map(&[], &grid, 0.0);
    assert_eq!(map, CompletenessMap::empty(grid));
    assert!(map.mean().iter().all(|&v| v == 0.0));
}

#[test]
fn merging_maps_on_different_grids_fails() {
    let a = CompletenessMap::empty(small_grid());
    let other = PeriodRadiusGrid::linspace((10.0, 100.0), 4, (1.0, 2.0), 4).unwrap();
    let b = CompletenessMap::empty(other);
    assert_eq!(a.merge(&b), Err(GridError::Mismatch));
}

#[test]
fn precomputed_values_must_match_the_grid() {
    let grid = small_grid();
    let built = build_completeness_map(&[quiet_sun()], &grid, 0.0);
    let restored =
        CompletenessMap::from_values(grid.clone(), built.values().clone(), 1).unwrap();
    assert_eq!(restored, built);

    let wrong = ndarray::Array2::zeros((3, 3));
    assert_eq!(
        CompletenessMap::from_values(grid, wrong, 1),
        Err(GridError::ShapeMismatch {
            expected: (12, 9),
            found: (3, 3),
        })
    );
}
