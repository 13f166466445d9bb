use units::{Length, Mass, Time};

use crate::error::StarError;
use crate::test_stars::quiet_sun;

#[test]
fn quiet_sun_is_valid() {
    assert!(quiet_sun().validate().is_ok());
}

#[test]
fn rejects_non_physical_radius_and_mass() {
    let mut star = quiet_sun();
    star.radius = Length::from_solar_radii(0.0);
    assert_eq!(
        star.validate(),
        Err(StarError::InvalidRadius { id: 1, value: 0.0 })
    );

    let mut star = quiet_sun();
    star.mass = Mass::from_solar_masses(-0.5);
    assert_eq!(
        star.validate(),
        Err(StarError::InvalidMass { id: 1, value: -0.5 })
    );

    let mut star = quiet_sun();
    star.mass = Mass::from_solar_masses(f64::NAN);
    assert!(!star.is_valid());
}

#[test]
fn rejects_bad_coverage() {
    let mut star = quiet_sun();
    star.dataspan = Time::from_days(0.0);
    assert!(matches!(
        star.validate(),
        Err(StarError::InvalidDataSpan { .. })
    ));

    let mut star = quiet_sun();
    star.duty_cycle = 1.2;
    assert!(matches!(
        star.validate(),
        Err(StarError::InvalidDutyCycle { .. })
    ));
}
