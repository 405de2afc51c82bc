//! Error types for merge operations.

use mesh_types::MeshError;
use thiserror::Error;

/// Result type for merge operations.
pub type MergeResult<T> = Result<T, MergeError>;

/// Errors that can occur while merging meshes.
#[derive(Debug, Error)]
pub enum MergeError {
    /// An input mesh violates an index invariant.
    #[error("invalid input mesh: {0}")]
    InvalidMesh(#[from] MeshError),

    /// Surface merging needs identical vertex lists.
    #[error("vertex count mismatch: first mesh has {first}, second has {second}")]
    VertexCountMismatch {
        /// Vertex count of the first mesh.
        first: usize,
        /// Vertex count of the second mesh.
        second: usize,
    },

    /// Surfaces sharing a name disagree on having UVs.
    #[error("surfaces named '{name}' mix facets with and without uvs")]
    InconsistentUvs {
        /// The shared surface name.
        name: String,
    },
}
