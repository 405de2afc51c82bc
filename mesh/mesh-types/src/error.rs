//! Error types for mesh invariant checks.

use thiserror::Error;

/// Result type for mesh validation.
pub type MeshResult<T> = Result<T, MeshError>;

/// A violated [`Mesh`](crate::Mesh) invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MeshError {
    /// A facet references a vertex that does not exist.
    #[error("surface {surface}: facet references vertex {index} (mesh has {vert_count} vertices)")]
    InvalidVertexIndex {
        /// Index of the offending surface.
        surface: usize,
        /// The invalid vertex index.
        index: u32,
        /// Number of vertices in the mesh.
        vert_count: usize,
    },

    /// A UV facet references a UV that does not exist.
    #[error("surface {surface}: facet references uv {index} (mesh has {uv_count} uvs)")]
    InvalidUvIndex {
        /// Index of the offending surface.
        surface: usize,
        /// The invalid UV index.
        index: u32,
        /// Number of UVs in the mesh.
        uv_count: usize,
    },

    /// Some but not all facets of a surface carry UV indices.
    #[error("surface {surface} has partial uv coverage")]
    PartialUvs {
        /// Index of the offending surface.
        surface: usize,
    },

    /// A marked vertex references a vertex that does not exist.
    #[error("marked vertex '{label}' references vertex {index} (mesh has {vert_count} vertices)")]
    InvalidMarkedVert {
        /// Label of the marked vertex.
        label: String,
        /// The invalid vertex index.
        index: u32,
        /// Number of vertices in the mesh.
        vert_count: usize,
    },

    /// A surface point references a facet that does not exist.
    #[error("surface {surface}: point '{label}' references tri {index} (surface has {tri_count})")]
    InvalidSurfPoint {
        /// Index of the offending surface.
        surface: usize,
        /// Label of the surface point.
        label: String,
        /// The invalid tri-equivalent index.
        index: u32,
        /// Number of tri-equivalents in the surface.
        tri_count: usize,
    },

    /// A morph delta references a vertex that does not exist.
    #[error("morph '{morph}' has a delta for vertex {index} (mesh has {vert_count} vertices)")]
    InvalidMorphDelta {
        /// Name of the morph.
        morph: String,
        /// The invalid vertex index.
        index: u32,
        /// Number of vertices in the mesh.
        vert_count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_mentions_indices() {
        let err = MeshError::InvalidVertexIndex {
            surface: 2,
            index: 17,
            vert_count: 8,
        };
        let msg = err.to_string();
        assert!(msg.contains("surface 2"));
        assert!(msg.contains("17"));
        assert!(msg.contains('8'));

        let err = MeshError::InvalidMorphDelta {
            morph: "blink".into(),
            index: 3,
            vert_count: 2,
        };
        assert!(err.to_string().contains("blink"));
    }
}
