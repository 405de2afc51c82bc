//! Error types for mesh deformation.

use mesh_types::MeshError;
use thiserror::Error;

/// Errors that can occur during mesh deformation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MorphError {
    /// The input mesh violates an index invariant.
    #[error("invalid input mesh: {0}")]
    InvalidMesh(#[from] MeshError),

    /// The emboss pattern has no pixels.
    #[error("emboss pattern is empty ({width}x{height})")]
    EmptyPattern {
        /// Pattern width.
        width: usize,
        /// Pattern height.
        height: usize,
    },

    /// The emboss ratio is negative or not finite.
    #[error("invalid emboss ratio {0} (must be finite and non-negative)")]
    InvalidRatio(f64),
}

/// Result type for deformation operations.
pub type MorphResult<T> = Result<T, MorphError>;
