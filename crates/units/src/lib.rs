pub mod length;
pub mod mass;
pub mod time;

#[cfg(test)]
mod mass_test;

pub use length::{Length, EARTH_RADIUS_SOLAR_RADII};
pub use mass::Mass;
pub use time::{Time, DAYS_PER_YEAR, HOURS_PER_DAY};
