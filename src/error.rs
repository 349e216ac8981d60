use thiserror::Error;

/// Top-level error type for the errband crate.
#[derive(Debug, Error)]
pub enum ErrbandError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors related to curve geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("curve needs at least 2 points, got {0}")]
    TooFewPoints(usize),

    #[error("non-finite coordinate at index {index}: ({x}, {y})")]
    NonFinitePoint { index: usize, x: f64, y: f64 },

    #[error("sample {index} coincides with the next sample")]
    CoincidentPoints { index: usize },

    #[error("degenerate tangent at index {index} (length {length})")]
    DegenerateTangent { index: usize, length: f64 },
}

/// Errors related to band construction.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("length mismatch: {what} has {actual} entries, expected {expected}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors raised while handing paths to a renderer.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid style: {0}")]
    InvalidStyle(String),

    #[error("failed to write output: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Convenience type alias for results using [`ErrbandError`].
pub type Result<T> = std::result::Result<T, ErrbandError>;
