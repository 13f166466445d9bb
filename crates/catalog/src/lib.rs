//! Catalog records and sample selection.
//!
//! Records mirror the columns of the Kepler stellar and KOI tables and can be
//! deserialized from any serde format. Selection turns them into the
//! [`Star`](completeness::Star) and [`Detection`](inference::Detection) inputs
//! of the analysis.

pub mod columns;
pub mod error;
pub mod records;
pub mod selection;

#[cfg(test)]
mod columns_test;

pub use columns::{duration_from_column, table_from_columns, CDPP_PREFIX, MES_THRESHOLD_PREFIX};
pub use error::CatalogError;
pub use records::{KoiRecord, StellarRecord};
pub use selection::{
    restrict_to_sample, select_candidates, select_stars, to_star, CandidateSelection,
    StellarSelection,
};
