//! Hand-specified polyhedra.
//!
//! All solids are centred on the origin (the pyramid and tent sit on the
//! `z = 0` plane) with counter-clockwise winding viewed from outside. Each
//! returns a mesh with a single unnamed surface and no UVs.

use std::f64::consts::TAU;

use mesh_types::{Mesh, Point3, Quads, Surface, Tris};
use tracing::debug;

use crate::error::{BuildError, BuildResult};

/// Axis-aligned cube spanning `[-1, 1]³`, built from 6 quads.
///
/// Vertex `i` has coordinate bits `x = i & 1`, `y = i & 2`, `z = i & 4`.
/// With `open` the `+Z` quad is omitted.
///
/// # Examples
///
/// ```
/// use mesh_build::cube;
/// use mesh_types::MeshTopology;
///
/// assert_eq!(cube(false).facet_count(), 6);
/// assert_eq!(cube(true).facet_count(), 5);
/// ```
#[must_use]
pub fn cube(open: bool) -> Mesh {
    let verts = (0..8u32)
        .map(|i| {
            let c = |bit: u32| if i & bit == 0 { -1.0 } else { 1.0 };
            Point3::new(c(1), c(2), c(4))
        })
        .collect();
    let mut quads = vec![
        [0, 4, 6, 2], // -X
        [1, 3, 7, 5], // +X
        [0, 1, 5, 4], // -Y
        [2, 6, 7, 3], // +Y
        [0, 2, 3, 1], // -Z
        [4, 5, 7, 6], // +Z
    ];
    if open {
        quads.pop();
    }
    solid(verts, Vec::new(), quads)
}

/// Regular tetrahedron on alternating corners of the `[-1, 1]³` cube.
///
/// With `open` the last triangle is omitted.
#[must_use]
pub fn tetrahedron(open: bool) -> Mesh {
    let verts = vec![
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(1.0, -1.0, -1.0),
        Point3::new(-1.0, 1.0, -1.0),
        Point3::new(-1.0, -1.0, 1.0),
    ];
    let mut tris = vec![[0, 1, 2], [0, 3, 1], [0, 2, 3], [1, 3, 2]];
    if open {
        tris.pop();
    }
    solid(verts, tris, Vec::new())
}

/// Regular octahedron with its 6 vertices on the unit axes.
///
/// With `open` the last triangle is omitted.
#[must_use]
pub fn octahedron(open: bool) -> Mesh {
    let verts = vec![
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(-1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, -1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(0.0, 0.0, -1.0),
    ];
    let mut tris = vec![
        [0, 2, 4],
        [2, 1, 4],
        [1, 3, 4],
        [3, 0, 4],
        [2, 0, 5],
        [1, 2, 5],
        [3, 1, 5],
        [0, 3, 5],
    ];
    if open {
        tris.pop();
    }
    solid(verts, tris, Vec::new())
}

/// Square pyramid: base `[-1, 1]²` at `z = 0`, apex at `(0, 0, 1)`.
///
/// Four side triangles and one base quad. With `open` the base is omitted.
#[must_use]
pub fn pyramid(open: bool) -> Mesh {
    let verts = vec![
        Point3::new(-1.0, -1.0, 0.0),
        Point3::new(1.0, -1.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(-1.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
    ];
    let tris = vec![[0, 1, 4], [1, 2, 4], [2, 3, 4], [3, 0, 4]];
    let quads = if open { Vec::new() } else { vec![[0, 3, 2, 1]] };
    solid(verts, tris, quads)
}

/// An `nn`-sided tent: `nn` base vertices evenly spaced on the unit circle
/// at `z = 0` and an apex at `(0, 0, 1)`, joined by a fan of `nn` triangles.
///
/// Base vertex `k` sits at angle `2πk / nn`; the apex is the last vertex.
/// The base is left open.
///
/// # Errors
///
/// Returns [`BuildError::TooFewSides`] if `nn < 3`.
///
/// # Examples
///
/// ```
/// use mesh_build::n_tent;
/// use mesh_types::MeshTopology;
///
/// let tent = n_tent(6)?;
/// assert_eq!(tent.vert_count(), 7);
/// assert_eq!(tent.facet_count(), 6);
/// # Ok::<(), mesh_build::BuildError>(())
/// ```
pub fn n_tent(nn: u32) -> BuildResult<Mesh> {
    if nn < 3 {
        return Err(BuildError::TooFewSides(nn));
    }
    let step = TAU / f64::from(nn);
    let mut verts: Vec<Point3<f64>> = (0..nn)
        .map(|k| {
            let (s, c) = (step * f64::from(k)).sin_cos();
            Point3::new(c, s, 0.0)
        })
        .collect();
    verts.push(Point3::new(0.0, 0.0, 1.0));

    let tris = (0..nn).map(|k| [k, (k + 1) % nn, nn]).collect();
    debug!("Built {}-sided tent", nn);
    Ok(solid(verts, tris, Vec::new()))
}

fn solid(verts: Vec<Point3<f64>>, tris: Vec<[u32; 3]>, quads: Vec<[u32; 4]>) -> Mesh {
    Mesh::from_surface(
        verts,
        Surface::from_facets("", Tris::from_verts(tris), Quads::from_verts(quads)),
    )
}
