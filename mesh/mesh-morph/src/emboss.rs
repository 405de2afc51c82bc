//! Displacing vertices along their normals by a UV-mapped pattern.

use mesh_types::{Image, Mesh, MeshBounds, Point2, Point3, Rgba8, Vector3};
use rayon::prelude::*;
use tracing::debug;

use crate::error::{MorphError, MorphResult};
use crate::normals::vertex_normals;
use crate::params::{EmbossParams, PatternSampling};

/// Above this many samples the per-element work runs on the rayon pool.
const PARALLEL_THRESHOLD: usize = 1000;

/// Vertex positions of the mesh embossed by a greyscale pattern.
///
/// Each vertex samples the pattern (mean of RGB) at its UV coordinates; a
/// vertex referenced with several UVs takes the largest sample. Intensity
/// `0..=255` maps linearly to a displacement of `0..=ratio × max_extent`,
/// where `max_extent` is the largest side of the mesh's bounding box, and
/// the vertex moves that far along its area-weighted normal.
///
/// Vertices never referenced with a UV, or with a zero normal, stay put.
///
/// # Errors
///
/// Returns [`MorphError::EmptyPattern`] for a pattern with no pixels,
/// [`MorphError::InvalidRatio`] for a negative or non-finite ratio, or
/// [`MorphError::InvalidMesh`] for an invalid input.
///
/// # Example
///
/// ```
/// use mesh_build::mesh_from_image;
/// use mesh_morph::{EmbossParams, emboss};
/// use mesh_types::{Image, Rgba8};
///
/// // Flat 3x3 grid; its normals point along +Z.
/// let flat = mesh_from_image(&Image::new(3, 3, 0.0))?;
/// let white = Image::new(4, 4, Rgba8::WHITE);
/// let verts = emboss(&flat, &white, &EmbossParams::default().with_ratio(0.1))?;
/// for (before, after) in flat.verts.iter().zip(&verts) {
///     assert!(((before - after).norm() - 0.1).abs() < 1e-12);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn emboss(
    mesh: &Mesh,
    pattern: &Image<Rgba8>,
    params: &EmbossParams,
) -> MorphResult<Vec<Point3<f64>>> {
    if pattern.is_empty() {
        return Err(MorphError::EmptyPattern {
            width: pattern.width(),
            height: pattern.height(),
        });
    }
    params.validate()?;
    mesh.validate()?;
    if mesh.verts.is_empty() {
        return Ok(Vec::new());
    }

    // Intensity of every UV, then the largest per vertex.
    let sample = |uv: &Point2<f64>| {
        let px = match params.sampling {
            PatternSampling::Nearest => pattern.sample_nearest(uv),
            PatternSampling::Bilinear => pattern.sample_bilinear(uv),
        };
        px.map_or(0.0, |px| px.luminance() / 255.0)
    };
    let uv_levels: Vec<f64> = if mesh.uvs.len() > PARALLEL_THRESHOLD {
        mesh.uvs.par_iter().map(sample).collect()
    } else {
        mesh.uvs.iter().map(sample).collect()
    };

    let mut levels: Vec<Option<f64>> = vec![None; mesh.verts.len()];
    for surf in &mesh.surfaces {
        let tris = surf.tris.vert_inds.iter().zip(&surf.tris.uv_inds);
        let corners = tris
            .flat_map(|(v, t)| v.iter().zip(t.iter()))
            .chain(
                surf.quads
                    .vert_inds
                    .iter()
                    .zip(&surf.quads.uv_inds)
                    .flat_map(|(v, t)| v.iter().zip(t.iter())),
            );
        for (&vert, &uv) in corners {
            let level = uv_levels[uv as usize];
            let slot = &mut levels[vert as usize];
            *slot = Some(slot.map_or(level, |prev: f64| prev.max(level)));
        }
    }

    let height = params.ratio * mesh.bounds().max_extent();
    let normals = vertex_normals(mesh);
    let displace = |((p, n), level): ((&Point3<f64>, &Vector3<f64>), &Option<f64>)| match level {
        Some(level) => p + *n * (*level * height),
        None => *p,
    };
    let verts: Vec<Point3<f64>> = if mesh.verts.len() > PARALLEL_THRESHOLD {
        mesh.verts
            .par_iter()
            .zip(normals.par_iter())
            .zip(levels.par_iter())
            .map(displace)
            .collect()
    } else {
        mesh.verts
            .iter()
            .zip(normals.iter())
            .zip(levels.iter())
            .map(displace)
            .collect()
    };

    debug!(
        "Embossed {} of {} vertices, max height {:.6}",
        levels.iter().filter(|l| l.is_some()).count(),
        mesh.verts.len(),
        height
    );
    Ok(verts)
}
