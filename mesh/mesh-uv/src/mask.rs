//! Facet selection by a texture-space mask.

use mesh_types::{Image, Mesh, MeshTopology, Point2, Surface};
use tracing::debug;

use crate::error::{UvError, UvResult};

/// Keep only the facets whose UV corners all land on `true` mask pixels.
///
/// Each UV is looked up with nearest-pixel sampling. Facets of surfaces
/// without UVs are dropped.
///
/// The output keeps vertices, morphs, surface names, mesh name and
/// material, but carries no UVs, surface points or marked vertices. Callers
/// needing those must re-derive them from the result.
///
/// # Errors
///
/// Returns [`UvError::EmptyMask`] for a mask with no pixels, or
/// [`UvError::InvalidMesh`] for an invalid input.
///
/// # Example
///
/// ```
/// use mesh_types::{Image, Mesh, MeshTopology, Point2, Point3, Surface};
/// use mesh_uv::mask_from_uvs;
///
/// let mut surf = Surface::new("");
/// surf.tris.push_with_uvs([0, 1, 2], [0, 1, 2]);
/// surf.tris.push_with_uvs([0, 2, 3], [0, 2, 3]);
/// let mesh = Mesh {
///     verts: vec![Point3::origin(); 4],
///     uvs: vec![
///         Point2::new(0.1, 0.1),
///         Point2::new(0.4, 0.1),
///         Point2::new(0.4, 0.4),
///         Point2::new(0.9, 0.9),
///     ],
///     surfaces: vec![surf],
///     ..Mesh::default()
/// };
///
/// // Only the bottom-left quadrant is selected.
/// let mask = Image::from_fn(2, 2, |col, row| col == 0 && row == 1);
/// let masked = mask_from_uvs(&mesh, &mask)?;
/// assert_eq!(masked.facet_count(), 1);
/// assert!(masked.uvs.is_empty());
/// # Ok::<(), mesh_uv::UvError>(())
/// ```
pub fn mask_from_uvs(mesh: &Mesh, mask: &Image<bool>) -> UvResult<Mesh> {
    if mask.is_empty() {
        return Err(UvError::EmptyMask {
            width: mask.width(),
            height: mask.height(),
        });
    }
    mesh.validate()?;

    let selected = |uv: u32| -> bool {
        mesh.uvs
            .get(uv as usize)
            .and_then(|p: &Point2<f64>| mask.sample_nearest(p))
            .unwrap_or(false)
    };

    let surfaces: Vec<Surface> = mesh
        .surfaces
        .iter()
        .map(|surf| {
            let keep: Vec<bool> = if surf.has_uvs() {
                let tris = surf.tris.uv_inds.iter().map(|f| f.iter().all(|&i| selected(i)));
                let quads = surf.quads.uv_inds.iter().map(|f| f.iter().all(|&i| selected(i)));
                tris.chain(quads).collect()
            } else {
                vec![false; surf.facet_count()]
            };
            let mut kept = surf.filtered(&keep).without_uvs();
            kept.surf_points.clear();
            kept
        })
        .collect();

    let masked = Mesh {
        name: mesh.name.clone(),
        verts: mesh.verts.clone(),
        uvs: Vec::new(),
        surfaces,
        marked_verts: Vec::new(),
        morphs: mesh.morphs.clone(),
        material: mesh.material,
    };
    debug!(
        "UV mask kept {} of {} facets",
        masked.facet_count(),
        mesh.facet_count()
    );
    Ok(masked)
}
