//! Spheres by repeated midpoint subdivision of a tetrahedron.

// Algorithm uses many indexing operations
#![allow(clippy::cast_possible_truncation)]

use hashbrown::HashMap;
use mesh_types::{Mesh, Point3, Quads, Surface, Tris};
use tracing::debug;

use crate::error::{BuildError, BuildResult};
use crate::solids::tetrahedron;

/// Highest accepted subdivision count (`4 · 4^12` triangles).
pub const MAX_SPHERE_SUBDIVISIONS: u32 = 12;

/// Create a sphere centred at the origin.
///
/// The seed is a tetrahedron with its vertices pushed out to `radius`. Each
/// subdivision splits every edge at its midpoint (shared edges share the
/// midpoint), pushes the new vertex out to `radius` and replaces every
/// triangle with four. Vertex count after `n` passes is `V + E` of the
/// previous pass: 4, 10, 34, 130, ...
///
/// # Errors
///
/// Returns an error if:
/// - `radius` is not positive and finite
/// - `subdivisions` exceeds [`MAX_SPHERE_SUBDIVISIONS`]
///
/// # Examples
///
/// ```
/// use mesh_build::create_sphere;
///
/// let sphere = create_sphere(2.0, 2)?;
/// assert_eq!(sphere.verts.len(), 34);
/// assert_eq!(sphere.surfaces[0].tris.len(), 64);
/// for v in &sphere.verts {
///     assert!((v.coords.norm() - 2.0).abs() < 1e-9);
/// }
/// # Ok::<(), mesh_build::BuildError>(())
/// ```
pub fn create_sphere(radius: f64, subdivisions: u32) -> BuildResult<Mesh> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(BuildError::InvalidRadius(radius));
    }
    if subdivisions > MAX_SPHERE_SUBDIVISIONS {
        return Err(BuildError::TooManySubdivisions {
            requested: subdivisions,
            max: MAX_SPHERE_SUBDIVISIONS,
        });
    }

    let seed = tetrahedron(false);
    let mut verts: Vec<Point3<f64>> = seed
        .verts
        .iter()
        .map(|p| project_to_sphere(p, radius))
        .collect();
    let mut tris = seed
        .surfaces
        .first()
        .map(|s| s.tris.vert_inds.clone())
        .unwrap_or_default();

    for i in 0..subdivisions {
        (verts, tris) = subdivide_on_sphere(&verts, &tris, radius);
        debug!(
            "Sphere pass {}: {} tris, {} vertices",
            i + 1,
            tris.len(),
            verts.len()
        );
    }

    Ok(Mesh::from_surface(
        verts,
        Surface::from_facets("", Tris::from_verts(tris), Quads::new()),
    ))
}

/// One midpoint pass with every new vertex pushed out to `radius`.
fn subdivide_on_sphere(
    verts: &[Point3<f64>],
    tris: &[[u32; 3]],
    radius: f64,
) -> (Vec<Point3<f64>>, Vec<[u32; 3]>) {
    let mut new_verts = verts.to_vec();
    let mut new_tris = Vec::with_capacity(tris.len() * 4);

    // Map from edge (sorted vertex indices) to new midpoint vertex index
    let mut edge_midpoints: HashMap<(u32, u32), u32> = HashMap::new();

    for &[v0, v1, v2] in tris {
        let mut midpoint = |a: u32, b: u32| {
            get_or_create_midpoint(a, b, verts, &mut new_verts, &mut edge_midpoints, radius)
        };
        let m01 = midpoint(v0, v1);
        let m12 = midpoint(v1, v2);
        let m20 = midpoint(v2, v0);

        // Corner triangles
        new_tris.push([v0, m01, m20]);
        new_tris.push([v1, m12, m01]);
        new_tris.push([v2, m20, m12]);
        // Center triangle
        new_tris.push([m01, m12, m20]);
    }

    (new_verts, new_tris)
}

/// Get or create the projected midpoint vertex for an edge.
fn get_or_create_midpoint(
    v0: u32,
    v1: u32,
    original_verts: &[Point3<f64>],
    new_verts: &mut Vec<Point3<f64>>,
    edge_midpoints: &mut HashMap<(u32, u32), u32>,
    radius: f64,
) -> u32 {
    let edge = normalize_edge(v0, v1);

    if let Some(&midpoint_idx) = edge_midpoints.get(&edge) {
        return midpoint_idx;
    }

    let p0 = original_verts[v0 as usize];
    let p1 = original_verts[v1 as usize];
    let midpoint = project_to_sphere(&Point3::from((p0.coords + p1.coords) * 0.5), radius);

    let new_idx = new_verts.len() as u32;
    new_verts.push(midpoint);
    edge_midpoints.insert(edge, new_idx);

    new_idx
}

fn project_to_sphere(p: &Point3<f64>, radius: f64) -> Point3<f64> {
    Point3::from(p.coords.normalize() * radius)
}

/// Normalize edge so smaller vertex index comes first.
const fn normalize_edge(v0: u32, v1: u32) -> (u32, u32) {
    if v0 <= v1 { (v0, v1) } else { (v1, v0) }
}
