//! Unreferenced vertex and UV removal.

use mesh_types::{Mesh, MarkedVert};
use tracing::debug;

use crate::error::RepairResult;
use crate::remap::Compaction;

/// Remove vertices and UVs that nothing references.
///
/// A vertex is kept if any facet of any surface or any marked vertex
/// references it; a UV is kept if any UV facet references it. Survivors keep
/// their relative order. Facets, marked vertices and morph deltas are
/// remapped; deltas on removed vertices are dropped.
///
/// # Errors
///
/// Returns [`RepairError::InvalidMesh`](crate::RepairError::InvalidMesh) if
/// the input violates an index invariant.
///
/// # Example
///
/// ```
/// use mesh_types::{Mesh, Point3, Surface};
/// use mesh_repair::remove_unused_verts;
///
/// let mut surf = Surface::new("");
/// surf.tris.push([0, 2, 3]);
/// let verts = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(100.0, 100.0, 100.0), // Unreferenced
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// let mesh = Mesh::from_surface(verts, surf);
///
/// let out = remove_unused_verts(&mesh)?;
/// assert_eq!(out.verts.len(), 3);
/// assert_eq!(out.surfaces[0].tris.vert_inds, vec![[0, 1, 2]]);
/// # Ok::<(), mesh_repair::RepairError>(())
/// ```
pub fn remove_unused_verts(mesh: &Mesh) -> RepairResult<Mesh> {
    mesh.validate()?;

    let mut vert_used = vec![false; mesh.verts.len()];
    let mut uv_used = vec![false; mesh.uvs.len()];
    for surf in &mesh.surfaces {
        let vert_refs = surf
            .tris
            .vert_inds
            .iter()
            .flatten()
            .chain(surf.quads.vert_inds.iter().flatten());
        for &i in vert_refs {
            vert_used[i as usize] = true;
        }
        let uv_refs = surf
            .tris
            .uv_inds
            .iter()
            .flatten()
            .chain(surf.quads.uv_inds.iter().flatten());
        for &i in uv_refs {
            uv_used[i as usize] = true;
        }
    }
    for mv in &mesh.marked_verts {
        vert_used[mv.vert as usize] = true;
    }

    let verts_map = Compaction::from_keep(&vert_used);
    let uvs_map = Compaction::from_keep(&uv_used);
    if verts_map.is_identity() && uvs_map.is_identity() {
        return Ok(mesh.clone());
    }

    let vert_dense = verts_map.dense();
    let uv_dense = uvs_map.dense();
    let out = Mesh {
        name: mesh.name.clone(),
        verts: verts_map.apply(&mesh.verts),
        uvs: uvs_map.apply(&mesh.uvs),
        surfaces: mesh
            .surfaces
            .iter()
            .map(|s| s.remapped(&vert_dense, &uv_dense))
            .collect(),
        marked_verts: mesh
            .marked_verts
            .iter()
            .map(|mv| MarkedVert::new(vert_dense[mv.vert as usize], mv.label.clone()))
            .collect(),
        morphs: mesh
            .morphs
            .iter()
            .map(|m| m.remapped(&verts_map.sparse))
            .collect(),
        material: mesh.material,
    };

    debug!(
        "Removed {} unused vertices and {} unused uvs",
        mesh.verts.len() - out.verts.len(),
        mesh.uvs.len() - out.uvs.len()
    );
    Ok(out)
}
