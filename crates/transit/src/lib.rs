//! Transit geometry for circular and eccentric orbits.
//!
//! Small, pure functions that turn an orbital period and host-star properties
//! into the observables a transit search cares about: how long a transit
//! lasts, how far the planet orbits in units of the stellar radius, and how
//! deep the transit is.

pub mod geometry;


pub use geometry::{
    radius_ratio, scaled_semi_major_axis, transit_depth, transit_duration, KEPLER_CONSTANT,
    LIMB_DARKENING_C, LIMB_DARKENING_S,
};
