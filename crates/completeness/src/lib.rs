//! Detection completeness for a transit survey.
//!
//! Two layers:
//!
//! - **Per-star model** ([`DetectionModel`], [`detection_probability`]): the
//!   probability that a planet of a given period and radius around one star
//!   would have been detected, combining the pipeline's MES-based efficiency,
//!   the window function and the geometric transit probability.
//! - **Catalog aggregate** ([`build_completeness_map`]): that probability summed
//!   over every star in a sample on a period–radius grid.

pub mod detection;
pub mod error;
pub mod grid;
pub mod interpolation;
pub mod map;
pub mod star;

#[cfg(test)]
mod map_test;
#[cfg(test)]
mod star_test;
#[cfg(test)]
pub(crate) mod test_stars;

pub use detection::{
    detection_efficiency, detection_probability, geometric_probability, window_function,
    DetectionModel, PeriodTerms,
};
pub use error::{CurveError, GridError, StarError};
pub use grid::PeriodRadiusGrid;
pub use interpolation::InterpolationTable;
pub use map::{
    build_completeness_map, build_completeness_map_with, star_completeness, CompletenessMap,
};
pub use star::Star;
