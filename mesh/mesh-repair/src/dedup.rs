//! Duplicate facet removal.

use hashbrown::HashSet;
use mesh_types::{Mesh, MeshTopology};
use tracing::debug;

use crate::error::RepairResult;

/// Remove repeated facets from every surface.
///
/// Two facets of the same kind (tri or quad) in the same surface are
/// duplicates when their vertex indices match up to cyclic rotation. Reversed
/// winding is a different facet. The first occurrence is kept; UV indices
/// and surface points follow their facet, and surface points on removed
/// facets are dropped.
///
/// # Errors
///
/// Returns [`RepairError::InvalidMesh`](crate::RepairError::InvalidMesh) if
/// the input violates an index invariant.
///
/// # Example
///
/// ```
/// use mesh_types::{Mesh, MeshTopology, Point3, Surface};
/// use mesh_repair::remove_duplicate_facets;
///
/// let mut surf = Surface::new("");
/// surf.tris.push([0, 1, 2]);
/// surf.tris.push([1, 2, 0]); // Rotation of the first
/// surf.tris.push([0, 2, 1]); // Reversed winding, kept
/// let mesh = Mesh::from_surface(vec![Point3::origin(); 3], surf);
///
/// let out = remove_duplicate_facets(&mesh)?;
/// assert_eq!(out.facet_count(), 2);
/// # Ok::<(), mesh_repair::RepairError>(())
/// ```
pub fn remove_duplicate_facets(mesh: &Mesh) -> RepairResult<Mesh> {
    mesh.validate()?;

    let surfaces: Vec<_> = mesh
        .surfaces
        .iter()
        .map(|surf| {
            let keep: Vec<bool> = first_occurrences(&surf.tris.vert_inds)
                .into_iter()
                .chain(first_occurrences(&surf.quads.vert_inds))
                .collect();
            if keep.iter().all(|&k| k) {
                surf.clone()
            } else {
                surf.filtered(&keep)
            }
        })
        .collect();

    let out = mesh.with_surfaces(surfaces);
    debug!(
        "Removed {} duplicate facets",
        mesh.facet_count() - out.facet_count()
    );
    Ok(out)
}

/// Flag the first facet of every rotation class.
fn first_occurrences<const N: usize>(facets: &[[u32; N]]) -> Vec<bool> {
    let mut seen: HashSet<[u32; N]> = HashSet::with_capacity(facets.len());
    facets
        .iter()
        .map(|&f| seen.insert(canonical_rotation(f)))
        .collect()
}

/// Lexicographically smallest cyclic rotation of a facet.
fn canonical_rotation<const N: usize>(face: [u32; N]) -> [u32; N] {
    let rotate = |r: usize| -> [u32; N] { std::array::from_fn(|i| face[(i + r) % N]) };
    (0..N).map(rotate).min().unwrap_or(face)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_types::{Point2, Point3, SurfPoint, Surface, Vector3};

    fn verts(n: u32) -> Vec<Point3<f64>> {
        (0..n).map(|i| Point3::new(f64::from(i), 0.0, 0.0)).collect()
    }

    #[test]
    fn canonical_rotation_is_cyclic_only() {
        assert_eq!(canonical_rotation([2, 0, 1]), [0, 1, 2]);
        assert_eq!(canonical_rotation([1, 2, 0]), [0, 1, 2]);
        assert_eq!(canonical_rotation([0, 2, 1]), [0, 2, 1]);
        assert_eq!(canonical_rotation([3, 4, 1, 2]), [1, 2, 3, 4]);
        // Repeated minimum picks the smallest full rotation.
        assert_eq!(canonical_rotation([0, 2, 0, 1]), [0, 1, 0, 2]);
        assert_eq!(canonical_rotation([0, 1, 0, 2]), [0, 1, 0, 2]);
    }

    #[test]
    fn remove_duplicate_rotated() {
        let mut surf = Surface::new("s");
        surf.tris.push([0, 1, 2]);
        surf.tris.push([2, 0, 1]);
        surf.quads.push([0, 1, 2, 3]);
        surf.quads.push([2, 3, 0, 1]);
        surf.quads.push([3, 2, 1, 0]);
        let mesh = Mesh::from_surface(verts(4), surf);

        let out = remove_duplicate_facets(&mesh).unwrap();
        assert_eq!(out.surfaces[0].tris.vert_inds, vec![[0, 1, 2]]);
        assert_eq!(
            out.surfaces[0].quads.vert_inds,
            vec![[0, 1, 2, 3], [3, 2, 1, 0]]
        );
    }

    #[test]
    fn remove_duplicate_keeps_uvs_and_points_in_step() {
        let mut surf = Surface::new("s");
        surf.tris.push_with_uvs([0, 1, 2], [0, 1, 2]);
        surf.tris.push_with_uvs([1, 2, 0], [3, 3, 3]);
        surf.tris.push_with_uvs([1, 3, 2], [1, 2, 3]);
        surf.surf_points.push(SurfPoint::new(1, Vector3::x(), "gone"));
        surf.surf_points.push(SurfPoint::new(2, Vector3::y(), "kept"));
        let mut mesh = Mesh::from_surface(verts(4), surf);
        mesh.uvs = vec![Point2::origin(); 4];

        let out = remove_duplicate_facets(&mesh).unwrap();
        let s = &out.surfaces[0];
        assert_eq!(s.tris.uv_inds, vec![[0, 1, 2], [1, 2, 3]]);
        assert_eq!(s.surf_points.len(), 1);
        assert_eq!(s.surf_points[0].label, "kept");
        assert_eq!(s.surf_points[0].tri_equiv, 1);
        assert!(out.validate().is_ok());
    }

    #[test]
    fn duplicates_across_surfaces_are_kept() {
        let mut a = Surface::new("a");
        a.tris.push([0, 1, 2]);
        let b = a.clone();
        let mut mesh = Mesh::from_surface(verts(3), a);
        mesh.surfaces.push(b);
        let out = remove_duplicate_facets(&mesh).unwrap();
        assert_eq!(out.facet_count(), 2);
    }

    #[test]
    fn rejects_invalid_mesh() {
        let mut surf = Surface::new("s");
        surf.tris.push([0, 1, 5]);
        let mesh = Mesh::from_surface(verts(3), surf);
        assert!(remove_duplicate_facets(&mesh).is_err());
    }
}
