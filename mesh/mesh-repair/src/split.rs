//! Splitting surfaces into UV islands.

use hashbrown::HashMap;
use mesh_types::{Mesh, Surface};
use tracing::debug;

use crate::error::RepairResult;
use crate::union_find::UnionFind;

/// Split every UV-bearing surface into its UV islands.
///
/// Two facets belong to the same island when a chain of facets sharing at
/// least one UV index connects them; shared vertex indices do not count.
/// Islands are ordered by their first facet (tris first, then quads) and
/// named `<name><k>` for `k = 0, 1, ...`. Surface points follow their facet.
/// Surfaces without UVs pass through unchanged.
///
/// # Errors
///
/// Returns [`RepairError::InvalidMesh`](crate::RepairError::InvalidMesh) if
/// the input violates an index invariant.
///
/// # Example
///
/// ```
/// use mesh_types::{Mesh, Point2, Point3, Surface};
/// use mesh_repair::split_surfs_by_uvs;
///
/// // Two triangles sharing vertices 1 and 2 but not their UVs.
/// let mut surf = Surface::new("shirt");
/// surf.tris.push_with_uvs([0, 1, 2], [0, 1, 2]);
/// surf.tris.push_with_uvs([1, 3, 2], [3, 4, 5]);
/// let mut mesh = Mesh::from_surface(vec![Point3::origin(); 4], surf);
/// mesh.uvs = vec![Point2::origin(); 6];
///
/// let out = split_surfs_by_uvs(&mesh)?;
/// let names: Vec<_> = out.surfaces.iter().map(|s| s.name.as_str()).collect();
/// assert_eq!(names, ["shirt0", "shirt1"]);
/// # Ok::<(), mesh_repair::RepairError>(())
/// ```
pub fn split_surfs_by_uvs(mesh: &Mesh) -> RepairResult<Mesh> {
    mesh.validate()?;

    let mut surfaces = Vec::with_capacity(mesh.surfaces.len());
    for surf in &mesh.surfaces {
        if !surf.has_uvs() {
            surfaces.push(surf.clone());
            continue;
        }
        let islands = uv_islands(surf, mesh.uvs.len());
        debug!(
            "Surface '{}': {} facets in {} uv islands",
            surf.name,
            surf.facet_count(),
            islands.len()
        );
        surfaces.extend(islands.iter().enumerate().map(|(k, keep)| {
            let mut island = surf.filtered(keep);
            island.name = format!("{}{k}", surf.name);
            island
        }));
    }

    Ok(mesh.with_surfaces(surfaces))
}

/// One facet mask per island, in order of each island's first facet.
fn uv_islands(surf: &Surface, uv_count: usize) -> Vec<Vec<bool>> {
    let mut uf = UnionFind::new(uv_count);
    let facets: Vec<&[u32]> = surf
        .tris
        .uv_inds
        .iter()
        .map(<[u32; 3]>::as_slice)
        .chain(surf.quads.uv_inds.iter().map(<[u32; 4]>::as_slice))
        .collect();

    for f in &facets {
        for w in f.windows(2) {
            uf.union(w[0] as usize, w[1] as usize);
        }
    }

    let mut island_of_root: HashMap<usize, usize> = HashMap::new();
    let mut islands: Vec<Vec<bool>> = Vec::new();
    for (facet, f) in facets.iter().enumerate() {
        let root = uf.find(f[0] as usize);
        let k = *island_of_root.entry(root).or_insert_with(|| {
            islands.push(vec![false; facets.len()]);
            islands.len() - 1
        });
        islands[k][facet] = true;
    }
    islands
}
