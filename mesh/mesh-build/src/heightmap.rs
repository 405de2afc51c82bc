//! Height-field surfaces from depth images.

#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]

use mesh_types::{Aabb, Image, Mesh, Point2, Point3, Quads, Surface, Tris};
use tracing::debug;

use crate::error::{BuildError, BuildResult};

/// Create a 2.5D surface from a depth image.
///
/// One vertex per pixel: column to X, row to Y, pixel value to Z. Each axis
/// is then rescaled independently so the tight bounding box of the vertices
/// becomes `[0, 1]` on that axis (an axis with zero extent maps to `0`).
///
/// Every 2×2 pixel neighbourhood becomes one quad
/// `[(c, r), (c+1, r), (c+1, r+1), (c, r+1)]`, giving `(W-1)·(H-1)` quads.
/// Each vertex gets a UV with the same index, stretching the pixel-centre
/// grid over `[0, 1]²`: `u = c / (W-1)`, `v = 1 - r / (H-1)`.
///
/// # Errors
///
/// Returns [`BuildError::EmptyImage`] if the image has no pixels.
///
/// # Examples
///
/// ```
/// use mesh_build::mesh_from_image;
/// use mesh_types::{Image, MeshTopology};
///
/// let depth = Image::from_fn(3, 2, |c, r| (c + r) as f64);
/// let mesh = mesh_from_image(&depth)?;
/// assert_eq!(mesh.vert_count(), 6);
/// assert_eq!(mesh.facet_count(), 2);
/// assert_eq!(mesh.uv_count(), 6);
/// # Ok::<(), mesh_build::BuildError>(())
/// ```
pub fn mesh_from_image(img: &Image<f64>) -> BuildResult<Mesh> {
    if img.is_empty() {
        return Err(BuildError::EmptyImage {
            width: img.width(),
            height: img.height(),
        });
    }
    let (w, h) = (img.width(), img.height());

    let raw: Vec<Point3<f64>> = img
        .data()
        .iter()
        .enumerate()
        .map(|(i, &z)| Point3::new((i % w) as f64, (i / w) as f64, z))
        .collect();
    let bounds = Aabb::from_points(raw.iter());
    let verts = raw.iter().map(|p| bounds.to_unit(p)).collect();

    let axis = |i: usize, n: usize| if n > 1 { i as f64 / (n - 1) as f64 } else { 0.0 };
    let uvs = (0..h)
        .flat_map(|r| (0..w).map(move |c| (c, r)))
        .map(|(c, r)| {
            let v = if h > 1 { 1.0 - axis(r, h) } else { 0.0 };
            Point2::new(axis(c, w), v)
        })
        .collect();

    let idx = |c: usize, r: usize| (r * w + c) as u32;
    let mut quads = Quads::new();
    for r in 0..h.saturating_sub(1) {
        for c in 0..w.saturating_sub(1) {
            let q = [idx(c, r), idx(c + 1, r), idx(c + 1, r + 1), idx(c, r + 1)];
            quads.push_with_uvs(q, q);
        }
    }

    debug!("Depth image {}x{} -> {} quads", w, h, quads.len());

    Ok(Mesh {
        verts,
        uvs,
        surfaces: vec![Surface::from_facets("", Tris::new(), quads)],
        ..Mesh::default()
    })
}
