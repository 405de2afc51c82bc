//! Vertex and UV unification.

// Spatial hashing uses many index conversions
#![allow(clippy::cast_possible_truncation)]

use hashbrown::HashMap;
use mesh_types::{MarkedVert, Mesh};
use tracing::debug;

use crate::error::{RepairError, RepairResult};
use crate::params::UnifyParams;
use crate::remap::{Compaction, identity};

/// Merge vertices with identical coordinates.
///
/// Each group of identical vertices collapses onto its lowest original
/// index. The output vertex list holds the survivors in original order and
/// every facet, marked vertex and morph delta is remapped. Facets that become
/// degenerate are kept; a morph keeps only its first delta per surviving
/// vertex.
///
/// # Errors
///
/// Returns an error if the input violates an index invariant or the
/// tolerance is invalid.
///
/// # Example
///
/// ```
/// use mesh_types::{Mesh, Point3, Surface};
/// use mesh_repair::{unify_identical_verts, UnifyParams};
///
/// let mut surf = Surface::new("");
/// surf.tris.push([0, 1, 2]);
/// surf.tris.push([3, 2, 1]);
/// let verts = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
///     Point3::new(0.0, 0.0, 0.0), // Same as vertex 0
/// ];
/// let mesh = Mesh::from_surface(verts, surf);
///
/// let out = unify_identical_verts(&mesh, &UnifyParams::default())?;
/// assert_eq!(out.verts.len(), 3);
/// assert_eq!(out.surfaces[0].tris.vert_inds[1], [0, 2, 1]);
/// # Ok::<(), mesh_repair::RepairError>(())
/// ```
pub fn unify_identical_verts(mesh: &Mesh, params: &UnifyParams) -> RepairResult<Mesh> {
    check_inputs(mesh, params)?;

    let coords: Vec<[f64; 3]> = mesh.verts.iter().map(|p| [p.x, p.y, p.z]).collect();
    let map = Compaction::from_representatives(&representatives(&coords, params.tolerance));
    if map.is_identity() {
        return Ok(mesh.clone());
    }

    let dense = map.dense();
    let uv_map = identity(mesh.uvs.len());
    let out = Mesh {
        name: mesh.name.clone(),
        verts: map.apply(&mesh.verts),
        uvs: mesh.uvs.clone(),
        surfaces: mesh
            .surfaces
            .iter()
            .map(|s| s.remapped(&dense, &uv_map))
            .collect(),
        marked_verts: mesh
            .marked_verts
            .iter()
            .map(|mv| MarkedVert::new(dense[mv.vert as usize], mv.label.clone()))
            .collect(),
        morphs: mesh.morphs.iter().map(|m| m.remapped(&map.sparse)).collect(),
        material: mesh.material,
    };

    debug!(
        "Unified {} vertices ({} -> {})",
        mesh.verts.len() - out.verts.len(),
        mesh.verts.len(),
        out.verts.len()
    );
    Ok(out)
}

/// Merge UVs with identical coordinates.
///
/// Same policy as [`unify_identical_verts`], applied to the UV list and the
/// UV indices of every facet.
///
/// # Errors
///
/// Returns an error if the input violates an index invariant or the
/// tolerance is invalid.
pub fn unify_identical_uvs(mesh: &Mesh, params: &UnifyParams) -> RepairResult<Mesh> {
    check_inputs(mesh, params)?;

    let coords: Vec<[f64; 2]> = mesh.uvs.iter().map(|p| [p.x, p.y]).collect();
    let map = Compaction::from_representatives(&representatives(&coords, params.tolerance));
    if map.is_identity() {
        return Ok(mesh.clone());
    }

    let dense = map.dense();
    let vert_map = identity(mesh.verts.len());
    let surfaces = mesh
        .surfaces
        .iter()
        .map(|s| s.remapped(&vert_map, &dense))
        .collect();
    let mut out = mesh.with_surfaces(surfaces);
    out.uvs = map.apply(&mesh.uvs);

    debug!(
        "Unified {} uvs ({} -> {})",
        mesh.uvs.len() - out.uvs.len(),
        mesh.uvs.len(),
        out.uvs.len()
    );
    Ok(out)
}

fn check_inputs(mesh: &Mesh, params: &UnifyParams) -> RepairResult<()> {
    if !params.is_valid() {
        return Err(RepairError::InvalidTolerance(params.tolerance));
    }
    mesh.validate()?;
    Ok(())
}

/// Representative (lowest equivalent index) of every point.
fn representatives<const D: usize>(points: &[[f64; D]], tolerance: f64) -> Vec<u32> {
    if tolerance == 0.0 {
        exact_representatives(points)
    } else {
        near_representatives(points, tolerance)
    }
}

/// Exact grouping. `-0.0` equals `0.0`; points with a NaN coordinate are
/// never merged.
fn exact_representatives<const D: usize>(points: &[[f64; D]]) -> Vec<u32> {
    let mut first: HashMap<[u64; D], u32> = HashMap::with_capacity(points.len());
    points
        .iter()
        .enumerate()
        .map(|(idx, p)| {
            let idx = idx as u32;
            if p.iter().any(|c| c.is_nan()) {
                return idx;
            }
            // Adding 0.0 maps -0.0 to +0.0.
            let key = p.map(|c| (c + 0.0).to_bits());
            *first.entry(key).or_insert(idx)
        })
        .collect()
}

/// Tolerance grouping on a spatial hash.
///
/// Points are visited in index order; each unclaimed point claims every later
/// unclaimed point within `tolerance`.
fn near_representatives<const D: usize>(points: &[[f64; D]], tolerance: f64) -> Vec<u32> {
    let cell_size = tolerance * 2.0;

    // Build spatial hash
    let mut spatial_hash: HashMap<[i64; D], Vec<u32>> = HashMap::new();
    for (idx, p) in points.iter().enumerate() {
        spatial_hash
            .entry(pos_to_cell(p, cell_size))
            .or_default()
            .push(idx as u32);
    }

    let neighbour_offsets: Vec<[i64; D]> = (0..3usize.pow(D as u32))
        .map(|mut code| {
            std::array::from_fn(|_| {
                let off = (code % 3) as i64 - 1;
                code /= 3;
                off
            })
        })
        .collect();

    let mut rep: Vec<u32> = (0..points.len() as u32).collect();
    for (idx, p) in points.iter().enumerate() {
        let idx = idx as u32;
        if rep[idx as usize] != idx || p.iter().any(|c| !c.is_finite()) {
            continue;
        }
        let cell = pos_to_cell(p, cell_size);
        for off in &neighbour_offsets {
            // Saturated cells fold onto themselves; the distance check still decides.
            let neighbour: [i64; D] = std::array::from_fn(|k| cell[k].saturating_add(off[k]));
            let Some(candidates) = spatial_hash.get(&neighbour) else {
                continue;
            };
            for &other in candidates {
                if other <= idx || rep[other as usize] != other {
                    continue;
                }
                if distance_sq(p, &points[other as usize]) <= tolerance * tolerance {
                    rep[other as usize] = idx;
                }
            }
        }
    }
    rep
}

/// Convert position to spatial hash cell.
fn pos_to_cell<const D: usize>(pos: &[f64; D], cell_size: f64) -> [i64; D] {
    pos.map(|c| (c / cell_size).floor() as i64)
}

fn distance_sq<const D: usize>(a: &[f64; D], b: &[f64; D]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_types::{Morph, Point2, Point3, Surface, Vector3, VertexDelta};

    #[test]
    fn exact_groups_signed_zero() {
        let pts = [[0.0, 1.0], [-0.0, 1.0], [0.0, 1.0 + 1e-12], [f64::NAN, 0.0], [f64::NAN, 0.0]];
        assert_eq!(exact_representatives(&pts), vec![0, 0, 2, 3, 4]);
    }

    #[test]
    fn near_groups_within_tolerance() {
        let pts = [[0.0, 0.0, 0.0], [5.0, 0.0, 0.0], [0.0005, 0.0, 0.0], [5.0, 0.0009, 0.0]];
        assert_eq!(near_representatives(&pts, 1e-3), vec![0, 1, 0, 1]);
        assert_eq!(near_representatives(&pts, 1e-4), vec![0, 1, 2, 3]);
    }

    #[test]
    fn near_grouping_is_not_chained() {
        // 0-1 and 1-2 are close, 0-2 is not: 1 joins 0, 2 stays alone.
        let pts = [[0.0], [0.8], [1.6]];
        assert_eq!(near_representatives(&pts, 1.0), vec![0, 0, 2]);
    }

    #[test]
    fn near_grouping_far_from_origin() {
        // Cell coordinates saturate at the i64 range.
        let pts = [[1e8, 0.0, 0.0], [1e8, 0.0, 0.0], [-1e8, 1.0, 0.0], [1e8 + 1.0, 0.0, 0.0]];
        assert_eq!(near_representatives(&pts, 1e-12), vec![0, 0, 2, 3]);
    }

    fn seam_mesh() -> Mesh {
        // Two triangles sharing an edge through duplicated vertices 3, 4.
        let mut surf = Surface::new("s");
        surf.tris.push_with_uvs([0, 1, 2], [0, 1, 2]);
        surf.tris.push_with_uvs([3, 5, 4], [3, 5, 4]);
        let verts = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ];
        let mut mesh = Mesh::from_surface(verts, surf);
        mesh.uvs = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
        ];
        mesh.marked_verts.push(MarkedVert::new(4, "corner"));
        mesh.morphs.push(Morph::new(
            "m",
            vec![
                VertexDelta::new(1, Vector3::x()),
                VertexDelta::new(3, Vector3::y()),
                VertexDelta::new(5, Vector3::z()),
            ],
        ));
        mesh
    }

    #[test]
    fn unify_verts_remaps_all_references() {
        let out = unify_identical_verts(&seam_mesh(), &UnifyParams::default()).unwrap();
        assert_eq!(out.verts.len(), 4);
        assert_eq!(out.surfaces[0].tris.vert_inds, vec![[0, 1, 2], [1, 3, 2]]);
        // UVs are untouched.
        assert_eq!(out.uvs.len(), 6);
        assert_eq!(out.surfaces[0].tris.uv_inds[1], [3, 5, 4]);
        assert_eq!(out.marked_verts[0].vert, 2);
        assert_eq!(
            out.morphs[0].deltas,
            vec![
                VertexDelta::new(1, Vector3::x()),
                VertexDelta::new(3, Vector3::z()),
            ]
        );
        assert!(out.validate().is_ok());
    }

    #[test]
    fn unify_uvs_leaves_verts() {
        let out = unify_identical_uvs(&seam_mesh(), &UnifyParams::default()).unwrap();
        assert_eq!(out.uvs.len(), 4);
        assert_eq!(out.verts.len(), 6);
        assert_eq!(out.surfaces[0].tris.uv_inds, vec![[0, 1, 2], [1, 3, 2]]);
        assert_eq!(out.surfaces[0].tris.vert_inds[1], [3, 5, 4]);
        assert!(out.validate().is_ok());
    }

    #[test]
    fn unify_is_idempotent() {
        let params = UnifyParams::default();
        let once = unify_identical_verts(&seam_mesh(), &params).unwrap();
        let twice = unify_identical_verts(&once, &params).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn unify_near_tolerance_large_coordinates() {
        let mut surf = Surface::new("");
        surf.tris.push([0, 1, 2]);
        surf.tris.push([3, 1, 2]);
        let verts = vec![
            Point3::new(1e8, 0.0, 0.0),
            Point3::new(1e8, 1.0, 0.0),
            Point3::new(1e8, 0.0, 1.0),
            Point3::new(1e8, 0.0, 0.0),
        ];
        let mesh = Mesh::from_surface(verts, surf);
        let params = UnifyParams::default().with_tolerance(1e-12);
        let out = unify_identical_verts(&mesh, &params).unwrap();
        assert_eq!(out.verts.len(), 3);
        assert_eq!(out.surfaces[0].tris.vert_inds[1], [0, 1, 2]);
    }

    #[test]
    fn unify_rejects_bad_tolerance() {
        let params = UnifyParams::default().with_tolerance(-1.0);
        assert!(matches!(
            unify_identical_verts(&seam_mesh(), &params),
            Err(RepairError::InvalidTolerance(_))
        ));
    }
}
