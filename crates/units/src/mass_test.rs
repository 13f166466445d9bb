use crate::mass::Mass;

#[test]
fn solar_masses_round_trip() {
    assert_eq!(Mass::from_solar_masses(0.83).to_solar_masses(), 0.83);
}

#[test]
fn physical_masses_are_finite_and_positive() {
    assert!(Mass::from_solar_masses(0.8).is_physical());
    assert!(!Mass::from_solar_masses(0.0).is_physical());
    assert!(!Mass::from_solar_masses(-0.2).is_physical());
    assert!(!Mass::from_solar_masses(f64::INFINITY).is_physical());
    assert!(!Mass::from_solar_masses(f64::NAN).is_physical());
}
