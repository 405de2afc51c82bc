//! Rasterizing UV facets into texture space.

#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]

use mesh_types::{Image, Mesh, Point2, Rgba8, barycentric_2d};
use tracing::debug;

use crate::error::{UvError, UvResult};
use crate::params::UvImageParams;

/// Barycentric slack for pixel centres on a shared edge.
const EDGE_EPSILON: f64 = 1e-9;

/// Paint the texture (or a flat colour) through the mesh's UV layout.
///
/// Every UV facet of every surface is rasterized, quads as two triangles. A
/// pixel is covered when its centre lies inside or on the edge of a UV
/// triangle. Covered pixels take the texture's colour at that pixel, or
/// `params.fill` without a texture; all others are `params.background`.
///
/// The output has the texture's dimensions, or `params.size` square without
/// one.
///
/// # Errors
///
/// Returns an error for an empty texture, a zero `params.size` without a
/// texture, or an invalid mesh.
///
/// # Example
///
/// ```
/// use mesh_types::{Mesh, Point2, Point3, Rgba8, Surface};
/// use mesh_uv::{UvImageParams, uv_image};
///
/// let mut surf = Surface::new("");
/// surf.tris.push_with_uvs([0, 1, 2], [0, 1, 2]);
/// let mesh = Mesh {
///     verts: vec![Point3::origin(); 3],
///     uvs: vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)],
///     surfaces: vec![surf],
///     ..Mesh::default()
/// };
///
/// let img = uv_image(&mesh, None, &UvImageParams::default().with_size(8))?;
/// // Bottom-left is inside the triangle, top-right is not.
/// assert_eq!(img.get(0, 7), Some(&Rgba8::WHITE));
/// assert_eq!(img.get(7, 0), Some(&Rgba8::BLACK));
/// # Ok::<(), mesh_uv::UvError>(())
/// ```
pub fn uv_image(
    mesh: &Mesh,
    texture: Option<&Image<Rgba8>>,
    params: &UvImageParams,
) -> UvResult<Image<Rgba8>> {
    let (width, height) = match texture {
        Some(tex) if tex.is_empty() => {
            return Err(UvError::EmptyTexture {
                width: tex.width(),
                height: tex.height(),
            });
        }
        Some(tex) => (tex.width(), tex.height()),
        None => (params.size, params.size),
    };
    if width == 0 || height == 0 {
        return Err(UvError::InvalidSize { width, height });
    }
    mesh.validate()?;

    let mut out = Image::new(width, height, params.background);
    let covered = rasterize(mesh, &mut out, |col, row| {
        texture
            .and_then(|tex| tex.get(col, row).copied())
            .unwrap_or(params.fill)
    });
    debug!("UV image {}x{}: {} pixel writes", width, height, covered);
    Ok(out)
}

/// Boolean coverage of the mesh's UV layout at the given resolution.
///
/// Uses the same coverage rule as [`uv_image`], so the result can be fed
/// straight back into [`mask_from_uvs`](crate::mask_from_uvs).
///
/// # Errors
///
/// Returns an error for a zero dimension or an invalid mesh.
pub fn uv_mask(mesh: &Mesh, width: usize, height: usize) -> UvResult<Image<bool>> {
    if width == 0 || height == 0 {
        return Err(UvError::InvalidSize { width, height });
    }
    mesh.validate()?;

    let mut out = Image::new(width, height, false);
    rasterize(mesh, &mut out, |_, _| true);
    Ok(out)
}

/// Write `paint(col, row)` into every pixel covered by a UV triangle.
/// Returns the number of pixel writes.
fn rasterize<T>(mesh: &Mesh, out: &mut Image<T>, paint: impl Fn(usize, usize) -> T) -> usize {
    let (w, h) = (out.width(), out.height());
    let mut writes = 0;

    for surf in &mesh.surfaces {
        for [a, b, c] in surf.uv_tris() {
            let (Some(a), Some(b), Some(c)) = (
                mesh.uvs.get(a as usize),
                mesh.uvs.get(b as usize),
                mesh.uvs.get(c as usize),
            ) else {
                continue;
            };
            let [pa, pb, pc] = [a, b, c].map(|uv| out.uv_to_pixel(uv));
            if ![pa, pb, pc].iter().all(|p| p.x.is_finite() && p.y.is_finite()) {
                continue;
            }

            // Pixel centres sit at half-integers; find the centres inside the
            // triangle's bounding box.
            let min_x = pa.x.min(pb.x).min(pc.x);
            let max_x = pa.x.max(pb.x).max(pc.x);
            let min_y = pa.y.min(pb.y).min(pc.y);
            let max_y = pa.y.max(pb.y).max(pc.y);
            let Some((c0, c1)) = centre_range(min_x, max_x, w) else {
                continue;
            };
            let Some((r0, r1)) = centre_range(min_y, max_y, h) else {
                continue;
            };

            for row in r0..=r1 {
                for col in c0..=c1 {
                    let centre = Point2::new(col as f64 + 0.5, row as f64 + 0.5);
                    let inside = barycentric_2d(&centre, &pa, &pb, &pc)
                        .is_some_and(|bary| bary.iter().all(|&x| x >= -EDGE_EPSILON));
                    if inside && out.set(col, row, paint(col, row)) {
                        writes += 1;
                    }
                }
            }
        }
    }
    writes
}

/// Inclusive range of pixel indices whose centres lie in `[lo, hi]`,
/// clipped to `0..n`.
fn centre_range(lo: f64, hi: f64, n: usize) -> Option<(usize, usize)> {
    let first = (lo - 0.5).ceil().max(0.0);
    let last = (hi - 0.5).floor().min(n as f64 - 1.0);
    (first <= last).then(|| (first as usize, last as usize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_types::{Point3, Surface};

    fn uv_quad(uvs: [Point2<f64>; 4]) -> Mesh {
        let mut surf = Surface::new("q");
        surf.quads.push_with_uvs([0, 1, 2, 3], [0, 1, 2, 3]);
        Mesh {
            verts: vec![Point3::origin(); 4],
            uvs: uvs.to_vec(),
            surfaces: vec![surf],
            ..Mesh::default()
        }
    }

    fn full_square() -> Mesh {
        uv_quad([
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ])
    }

    #[test]
    fn full_square_covers_everything() {
        let params = UvImageParams::default().with_size(16);
        let img = uv_image(&full_square(), None, &params).unwrap();
        assert_eq!(img.width(), 16);
        assert!(img.data().iter().all(|&px| px == params.fill));
    }

    #[test]
    fn texture_colours_and_dimensions() {
        let tex = Image::from_fn(6, 3, |c, r| Rgba8::new(c as u8, r as u8, 0, 255));
        let half = uv_quad([
            Point2::new(0.0, 0.0),
            Point2::new(0.5, 0.0),
            Point2::new(0.5, 1.0),
            Point2::new(0.0, 1.0),
        ]);
        let params = UvImageParams::default().with_background(Rgba8::TRANSPARENT);
        let img = uv_image(&half, Some(&tex), &params).unwrap();
        assert_eq!((img.width(), img.height()), (6, 3));
        for row in 0..3 {
            for col in 0..6 {
                let expected = if col < 3 {
                    *tex.get(col, row).unwrap()
                } else {
                    Rgba8::TRANSPARENT
                };
                assert_eq!(img.get(col, row), Some(&expected), "pixel ({col}, {row})");
            }
        }
    }

    #[test]
    fn mask_matches_image_coverage() {
        let tri = {
            let mut m = full_square();
            m.surfaces[0] = Surface::new("t");
            m.surfaces[0].tris.push_with_uvs([0, 1, 2], [0, 1, 3]);
            m
        };
        let params = UvImageParams::default().with_size(10);
        let img = uv_image(&tri, None, &params).unwrap();
        let mask = uv_mask(&tri, 10, 10).unwrap();
        let covered = mask.data().iter().filter(|&&b| b).count();
        assert!(covered > 0 && covered < 100);
        for (px, &m) in img.data().iter().zip(mask.data()) {
            assert_eq!(*px == params.fill, m);
        }
    }

    #[test]
    fn out_of_range_uvs_are_clipped() {
        let big = uv_quad([
            Point2::new(-1.0, -1.0),
            Point2::new(2.0, -1.0),
            Point2::new(2.0, 2.0),
            Point2::new(-1.0, 2.0),
        ]);
        let mask = uv_mask(&big, 5, 5).unwrap();
        assert!(mask.data().iter().all(|&b| b));
    }

    #[test]
    fn degenerate_and_non_uv_facets_cover_nothing() {
        let mut line = uv_quad([Point2::new(0.5, 0.5); 4]);
        line.surfaces.push(Surface::from_facets(
            "plain",
            mesh_types::Tris::from_verts(vec![[0, 1, 2]]),
            mesh_types::Quads::new(),
        ));
        let mask = uv_mask(&line, 8, 8).unwrap();
        assert!(mask.data().iter().all(|&b| !b));
    }

    #[test]
    fn size_errors() {
        let params = UvImageParams::default().with_size(0);
        assert!(matches!(
            uv_image(&full_square(), None, &params),
            Err(UvError::InvalidSize { width: 0, height: 0 })
        ));
        let empty = Image::new(0, 0, Rgba8::BLACK);
        assert!(matches!(
            uv_image(&full_square(), Some(&empty), &UvImageParams::default()),
            Err(UvError::EmptyTexture { .. })
        ));
        assert!(uv_mask(&full_square(), 3, 0).is_err());
    }
}
