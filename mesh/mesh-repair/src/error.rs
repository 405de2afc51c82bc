//! Error types for mesh normalizers.

use mesh_types::MeshError;
use thiserror::Error;

/// Result type for normalizer operations.
pub type RepairResult<T> = Result<T, RepairError>;

/// Errors that can occur while normalizing a mesh.
#[derive(Debug, Error)]
pub enum RepairError {
    /// The input mesh violates an index invariant.
    #[error("invalid input mesh: {0}")]
    InvalidMesh(#[from] MeshError),

    /// Unify tolerance is negative or not finite.
    #[error("invalid unify tolerance {0} (must be finite and >= 0)")]
    InvalidTolerance(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RepairError::from(MeshError::PartialUvs { surface: 3 });
        let msg = err.to_string();
        assert!(msg.starts_with("invalid input mesh"));
        assert!(msg.contains("surface 3"));

        let err = RepairError::InvalidTolerance(-1.0);
        assert!(err.to_string().contains("-1"));
    }
}
