//! Error types for polytri operations.

use thiserror::Error;

/// Errors that can occur during geometric operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// The input was rejected before any computation started.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// The operation is undefined for the given geometry, e.g. inverse
    /// interpolation along a segment with no horizontal extent.
    #[error("degenerate geometry: operation is undefined for this input")]
    DegenerateGeometry,
}

/// Reasons an input was rejected up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// A polygon needs at least three vertices.
    #[error("polygon has {count} vertices, at least 3 are required")]
    TooFewVertices {
        /// Number of vertices supplied.
        count: usize,
    },

    /// Interleaved coordinate arrays must hold `x, y` pairs.
    #[error("coordinate array has odd length {len}")]
    OddCoordinateCount {
        /// Length of the supplied array.
        len: usize,
    },

    /// A vertex has a NaN or infinite coordinate.
    #[error("vertex {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Index of the offending vertex.
        index: usize,
    },
}
