//! Collapsing surfaces that share a name.

use hashbrown::HashMap;
use mesh_types::{Mesh, Surface};
use tracing::debug;

use crate::error::{MergeError, MergeResult};

/// Merge all surfaces with the same name into one.
///
/// Each merged surface takes the position of the first surface with its
/// name; later surfaces are appended to it in order, and surface points are
/// re-indexed into the combined facet lists. Vertices and UVs are untouched.
///
/// # Errors
///
/// Returns [`MergeError::InconsistentUvs`] if two non-empty surfaces with the
/// same name disagree on having UVs, or [`MergeError::InvalidMesh`] for an
/// invalid input.
///
/// # Example
///
/// ```
/// use mesh_merge::merge_same_name_surfaces;
/// use mesh_types::{Mesh, Point3, Surface};
///
/// let mut a = Surface::new("skin");
/// a.tris.push([0, 1, 2]);
/// let mut b = Surface::new("skin");
/// b.tris.push([2, 1, 3]);
/// let mesh = Mesh {
///     verts: vec![Point3::origin(); 4],
///     surfaces: vec![a, b],
///     ..Mesh::default()
/// };
///
/// let merged = merge_same_name_surfaces(&mesh)?;
/// assert_eq!(merged.surfaces.len(), 1);
/// assert_eq!(merged.surfaces[0].tris.len(), 2);
/// # Ok::<(), mesh_merge::MergeError>(())
/// ```
pub fn merge_same_name_surfaces(mesh: &Mesh) -> MergeResult<Mesh> {
    mesh.validate()?;

    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut merged: Vec<Surface> = Vec::new();

    for surf in &mesh.surfaces {
        let Some(&slot) = slots.get(surf.name.as_str()) else {
            slots.insert(surf.name.as_str(), merged.len());
            merged.push(surf.clone());
            continue;
        };
        let acc = &mut merged[slot];
        let mismatch =
            (acc.has_uvs() && surf.lacks_uvs()) || (acc.lacks_uvs() && surf.has_uvs());
        if mismatch {
            return Err(MergeError::InconsistentUvs {
                name: surf.name.clone(),
            });
        }
        acc.append(surf);
    }

    debug!(
        "Merged {} surfaces into {} by name",
        mesh.surfaces.len(),
        merged.len()
    );
    Ok(mesh.with_surfaces(merged))
}
