//! Error types for texture-space operations.

use mesh_types::MeshError;
use thiserror::Error;

/// Result type for texture-space operations.
pub type UvResult<T> = Result<T, UvError>;

/// Errors that can occur during texture-space operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UvError {
    /// The input mesh violates an index invariant.
    #[error("invalid input mesh: {0}")]
    InvalidMesh(#[from] MeshError),

    /// The mask image has no pixels.
    #[error("mask image is empty ({width}x{height})")]
    EmptyMask {
        /// Mask width.
        width: usize,
        /// Mask height.
        height: usize,
    },

    /// The texture image has no pixels.
    #[error("texture image is empty ({width}x{height})")]
    EmptyTexture {
        /// Texture width.
        width: usize,
        /// Texture height.
        height: usize,
    },

    /// The requested output image has no pixels.
    #[error("invalid output size {width}x{height}")]
    InvalidSize {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
}
