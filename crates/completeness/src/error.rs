use thiserror::Error;

/// Errors building an interpolation table.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    #[error("interpolation table needs at least 2 points, got {0}")]
    InsufficientData(usize),
    #[error("non-finite value at table index {0}")]
    NonFinite(usize),
    #[error("abscissae must be strictly increasing (index {0})")]
    UnsortedData(usize),
}

/// Errors building or combining period–radius grids.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("{axis} axis needs at least 2 nodes, got {count}")]
    TooFewNodes { axis: &'static str, count: usize },
    #[error("{axis} axis nodes must be finite, positive and strictly increasing")]
    InvalidNodes { axis: &'static str },
    #[error("completeness maps were built on different grids")]
    Mismatch,
    #[error("values have shape {found:?}, grid has {expected:?} nodes")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
}

/// Physically invalid stellar parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StarError {
    #[error("star {id}: radius must be positive and finite, got {value}")]
    InvalidRadius { id: u64, value: f64 },
    #[error("star {id}: mass must be positive and finite, got {value}")]
    InvalidMass { id: u64, value: f64 },
    #[error("star {id}: data span must be positive and finite, got {value} days")]
    InvalidDataSpan { id: u64, value: f64 },
    #[error("star {id}: duty cycle must lie in [0, 1], got {value}")]
    InvalidDutyCycle { id: u64, value: f64 },
}
