use completeness::CurveError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("cannot read a transit duration from column {0:?}")]
    ColumnName(String),

    #[error("star {kepid}: no finite {prefix}* columns")]
    MissingColumns { kepid: u64, prefix: &'static str },

    #[error("star {kepid}: {source}")]
    Curve {
        kepid: u64,
        #[source]
        source: CurveError,
    },

    #[error("star {kepid}: missing stellar mass")]
    MissingMass { kepid: u64 },
}
