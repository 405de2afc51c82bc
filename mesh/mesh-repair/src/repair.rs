//! Full normalization pipeline.

use mesh_types::{Mesh, MeshTopology};
use tracing::info;

use crate::dedup::remove_duplicate_facets;
use crate::error::RepairResult;
use crate::params::UnifyParams;
use crate::unify::{unify_identical_uvs, unify_identical_verts};
use crate::unused::remove_unused_verts;

/// Run every normalizer in order.
///
/// This performs:
/// 1. Unify identical vertices
/// 2. Unify identical UVs
/// 3. Remove duplicate facets
/// 4. Remove unused vertices and UVs
///
/// # Errors
///
/// Returns an error if the input violates an index invariant or the
/// tolerance is invalid.
///
/// # Example
///
/// ```
/// use mesh_types::{Mesh, Point3, Surface};
/// use mesh_repair::{normalize_mesh, UnifyParams};
///
/// let mut surf = Surface::new("");
/// surf.tris.push([0, 1, 2]);
/// surf.tris.push([3, 1, 2]); // Same as the first once 3 unifies with 0
/// let verts = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
///     Point3::new(0.0, 0.0, 0.0),
/// ];
/// let mesh = Mesh::from_surface(verts, surf);
///
/// let (out, summary) = normalize_mesh(&mesh, &UnifyParams::default())?;
/// assert_eq!(summary.verts_unified, 1);
/// assert_eq!(summary.duplicates_removed, 1);
/// assert_eq!(out.verts.len(), 3);
/// # Ok::<(), mesh_repair::RepairError>(())
/// ```
pub fn normalize_mesh(
    mesh: &Mesh,
    params: &UnifyParams,
) -> RepairResult<(Mesh, NormalizeSummary)> {
    let initial_verts = mesh.vert_count();
    let initial_uvs = mesh.uv_count();
    let initial_facets = mesh.facet_count();

    let unified = unify_identical_verts(mesh, params)?;
    let verts_unified = initial_verts - unified.vert_count();

    let unified = unify_identical_uvs(&unified, params)?;
    let uvs_unified = initial_uvs - unified.uv_count();

    let deduped = remove_duplicate_facets(&unified)?;
    let duplicates_removed = initial_facets - deduped.facet_count();

    let out = remove_unused_verts(&deduped)?;

    let summary = NormalizeSummary {
        initial_verts,
        initial_facets,
        final_verts: out.vert_count(),
        final_facets: out.facet_count(),
        verts_unified,
        uvs_unified,
        duplicates_removed,
        unused_removed: deduped.vert_count() - out.vert_count(),
    };
    info!("{}", summary);
    Ok((out, summary))
}

/// Counts recorded by [`normalize_mesh`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeSummary {
    /// Number of vertices before normalization.
    pub initial_verts: usize,
    /// Number of facets before normalization.
    pub initial_facets: usize,
    /// Number of vertices after normalization.
    pub final_verts: usize,
    /// Number of facets after normalization.
    pub final_facets: usize,
    /// Number of vertices merged into an identical one.
    pub verts_unified: usize,
    /// Number of UVs merged into an identical one.
    pub uvs_unified: usize,
    /// Number of duplicate facets removed.
    pub duplicates_removed: usize,
    /// Number of unreferenced vertices removed.
    pub unused_removed: usize,
}

impl NormalizeSummary {
    /// Check if anything changed.
    #[must_use]
    pub fn had_changes(&self) -> bool {
        self.verts_unified > 0
            || self.uvs_unified > 0
            || self.duplicates_removed > 0
            || self.unused_removed > 0
    }
}

impl std::fmt::Display for NormalizeSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Normalize: {} verts ({} unified, {} unused), {} uvs unified, {} facets ({} duplicate)",
            self.final_verts,
            self.verts_unified,
            self.unused_removed,
            self.uvs_unified,
            self.final_facets,
            self.duplicates_removed
        )
    }
}
