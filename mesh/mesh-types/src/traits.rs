//! Traits for mesh types.

use crate::Aabb;

/// Element counts of a mesh.
pub trait MeshTopology {
    /// Number of vertices.
    fn vert_count(&self) -> usize;

    /// Number of UV coordinates.
    fn uv_count(&self) -> usize;

    /// Number of facets (tris plus quads) over all surfaces.
    fn facet_count(&self) -> usize;

    /// Whether the mesh has no vertices or no facets.
    fn is_empty(&self) -> bool {
        self.vert_count() == 0 || self.facet_count() == 0
    }
}

/// Trait for types that can compute a bounding box.
pub trait MeshBounds {
    /// Compute the axis-aligned bounding box.
    ///
    /// Returns an empty AABB if the mesh has no vertices.
    fn bounds(&self) -> Aabb;
}
