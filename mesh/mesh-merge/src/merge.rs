//! Mesh and surface merging.

use mesh_types::{Mesh, MeshTopology};
use tracing::debug;

use crate::error::{MergeError, MergeResult};

/// Merge the surfaces of two meshes that share one vertex list.
///
/// The result keeps the first mesh's vertices, name, marked vertices, morphs
/// and material. UV lists are concatenated and the second mesh's surfaces are
/// appended with their UV indices shifted past the first mesh's UVs.
///
/// # Errors
///
/// Returns an error if either input is invalid or the vertex counts differ.
///
/// # Example
///
/// ```
/// use mesh_merge::merge_mesh_surfaces;
/// use mesh_types::{Mesh, Point3, Surface};
///
/// let verts = vec![Point3::origin(); 4];
/// let mut front = Surface::new("front");
/// front.tris.push([0, 1, 2]);
/// let mut back = Surface::new("back");
/// back.tris.push([2, 1, 3]);
///
/// let m0 = Mesh::from_surface(verts.clone(), front);
/// let m1 = Mesh::from_surface(verts, back);
/// let merged = merge_mesh_surfaces(&m0, &m1)?;
/// assert_eq!(merged.verts.len(), 4);
/// assert_eq!(merged.surfaces.len(), 2);
/// # Ok::<(), mesh_merge::MergeError>(())
/// ```
#[allow(clippy::cast_possible_truncation)]
// Truncation: UV counts are bounded by u32 indices
pub fn merge_mesh_surfaces(m0: &Mesh, m1: &Mesh) -> MergeResult<Mesh> {
    m0.validate()?;
    m1.validate()?;
    if m0.verts.len() != m1.verts.len() {
        return Err(MergeError::VertexCountMismatch {
            first: m0.verts.len(),
            second: m1.verts.len(),
        });
    }

    let uv_offset = m0.uvs.len() as u32;
    let mut merged = m0.clone();
    merged.uvs.extend_from_slice(&m1.uvs);
    merged
        .surfaces
        .extend(m1.surfaces.iter().map(|s| s.offset(0, uv_offset)));

    debug!(
        "Merged {} surfaces onto {} sharing {} vertices",
        m1.surfaces.len(),
        m0.surfaces.len(),
        m0.verts.len()
    );
    Ok(merged)
}

/// Merge two independent meshes.
///
/// Vertex and UV lists are concatenated and the second mesh's surfaces are
/// appended with shifted indices; surface names from both are kept. Marked
/// vertices, name and material come from the first mesh only. Morphs are
/// combined by name: a morph of the second mesh extends the first mesh's
/// same-name morph, or is appended if there is none.
///
/// # Errors
///
/// Returns an error if either input is invalid.
///
/// # Example
///
/// ```
/// use mesh_build::{cube, tetrahedron};
/// use mesh_merge::merge_meshes;
///
/// let merged = merge_meshes(&cube(false), &tetrahedron(false))?;
/// assert_eq!(merged.verts.len(), 12);
/// assert_eq!(merged.surfaces[1].tris.vert_inds[0], [8, 9, 10]);
/// # Ok::<(), mesh_merge::MergeError>(())
/// ```
pub fn merge_meshes(m0: &Mesh, m1: &Mesh) -> MergeResult<Mesh> {
    m0.validate()?;
    m1.validate()?;
    let mut merged = m0.clone();
    append_mesh(&mut merged, m1);
    Ok(merged)
}

/// Merge any number of meshes, left to right.
///
/// Equivalent to folding [`merge_meshes`] over the list. An empty list gives
/// the empty mesh.
///
/// # Errors
///
/// Returns an error if any input is invalid.
pub fn merge_all(meshes: &[Mesh]) -> MergeResult<Mesh> {
    for mesh in meshes {
        mesh.validate()?;
    }
    let Some((first, rest)) = meshes.split_first() else {
        return Ok(Mesh::default());
    };

    let mut merged = first.clone();
    for mesh in rest {
        append_mesh(&mut merged, mesh);
    }
    debug!(
        "Merged {} meshes: {} vertices, {} facets",
        meshes.len(),
        merged.vert_count(),
        merged.facet_count()
    );
    Ok(merged)
}

#[allow(clippy::cast_possible_truncation)]
// Truncation: vertex and UV counts are bounded by u32 indices
fn append_mesh(acc: &mut Mesh, other: &Mesh) {
    let vert_offset = acc.verts.len() as u32;
    let uv_offset = acc.uvs.len() as u32;

    acc.verts.extend_from_slice(&other.verts);
    acc.uvs.extend_from_slice(&other.uvs);
    acc.surfaces.extend(
        other
            .surfaces
            .iter()
            .map(|s| s.offset(vert_offset, uv_offset)),
    );

    for morph in &other.morphs {
        let shifted = morph.offset(vert_offset);
        match acc.morphs.iter_mut().find(|m| m.name == morph.name) {
            Some(existing) => existing.deltas.extend(shifted.deltas),
            None => acc.morphs.push(shifted),
        }
    }
}
