//! Property-based tests for mesh normalizers.
//!
//! These tests use proptest to generate random meshes and verify invariants.
//!
//! Run with: cargo test -p mesh-repair -- proptest

use mesh_repair::{
    UnifyParams, normalize_mesh, remove_duplicate_facets, remove_unused_verts,
    split_surfs_by_uvs, unify_identical_uvs, unify_identical_verts,
};
use mesh_types::{
    MarkedVert, Mesh, MeshTopology, Morph, Point2, Point3, Quads, SurfPoint, Surface, Tris,
    Vector3, VertexDelta,
};
use proptest::prelude::*;

// =============================================================================
// Strategies for generating random meshes
// =============================================================================

/// Vertex positions on a coarse integer grid so exact duplicates are common.
fn arb_position() -> impl Strategy<Value = Point3<f64>> {
    prop::array::uniform3(-2i32..=2).prop_map(|[x, y, z]| {
        Point3::new(f64::from(x), f64::from(y), f64::from(z))
    })
}

fn arb_uv() -> impl Strategy<Value = Point2<f64>> {
    prop::array::uniform2(0i32..=3).prop_map(|[u, v]| Point2::new(f64::from(u) / 3.0, f64::from(v) / 3.0))
}

/// One surface over `n` vertices and `m` UVs (UVs only when `m > 0`).
fn arb_surface(n: u32, m: u32) -> impl Strategy<Value = Surface> {
    let tri_count = 0usize..12;
    let quad_count = 0usize..6;
    (tri_count, quad_count).prop_flat_map(move |(nt, nq)| {
        let tris = prop::collection::vec(prop::array::uniform3(0..n), nt);
        let quads = prop::collection::vec(prop::array::uniform4(0..n), nq);
        let tri_uvs = prop::collection::vec(prop::array::uniform3(0..m.max(1)), nt);
        let quad_uvs = prop::collection::vec(prop::array::uniform4(0..m.max(1)), nq);
        let points = prop::collection::vec(0..(nt + 2 * nq).max(1) as u32, 0..3);
        (tris, quads, tri_uvs, quad_uvs, points).prop_map(move |(t, q, tu, qu, pts)| {
            let with_uvs = m > 0;
            let mut surf = Surface::from_facets(
                "s",
                Tris::from_parts(t, if with_uvs { tu } else { Vec::new() }),
                Quads::from_parts(q, if with_uvs { qu } else { Vec::new() }),
            );
            let tri_equivs = surf.tri_equiv_count() as u32;
            surf.surf_points = pts
                .into_iter()
                .filter(|&p| p < tri_equivs)
                .map(|p| SurfPoint::new(p, Vector3::repeat(1.0 / 3.0), format!("p{p}")))
                .collect();
            surf
        })
    })
}

/// A valid mesh with surfaces, UVs, marked vertices and one morph.
fn arb_mesh() -> impl Strategy<Value = Mesh> {
    (3usize..24, 0usize..16).prop_flat_map(|(nv, nuv)| {
        let n = nv as u32;
        let m = nuv as u32;
        (
            prop::collection::vec(arb_position(), nv),
            prop::collection::vec(arb_uv(), nuv),
            prop::collection::vec(arb_surface(n, m), 1..3),
            prop::collection::vec(0..n, 0..3),
            prop::collection::vec((0..n, -1.0..1.0f64), 0..8),
        )
            .prop_map(|(verts, uvs, surfaces, marked, deltas)| Mesh {
                name: "random".into(),
                verts,
                uvs,
                surfaces,
                marked_verts: marked
                    .into_iter()
                    .map(|v| MarkedVert::new(v, format!("mv{v}")))
                    .collect(),
                morphs: vec![Morph::new(
                    "m",
                    deltas
                        .into_iter()
                        .map(|(v, d)| VertexDelta::new(v, Vector3::new(d, 0.0, 0.0)))
                        .collect(),
                )],
                ..Mesh::default()
            })
    })
}

// =============================================================================
// Property Tests: Invariant preservation
// =============================================================================

proptest! {
    /// The generator itself produces valid meshes.
    #[test]
    fn proptest_generator_is_valid(mesh in arb_mesh()) {
        prop_assert!(mesh.validate().is_ok());
    }

    /// Every normalizer output passes validation.
    #[test]
    fn proptest_outputs_are_valid(mesh in arb_mesh()) {
        let params = UnifyParams::default();
        prop_assert!(remove_duplicate_facets(&mesh).unwrap().validate().is_ok());
        prop_assert!(remove_unused_verts(&mesh).unwrap().validate().is_ok());
        prop_assert!(unify_identical_verts(&mesh, &params).unwrap().validate().is_ok());
        prop_assert!(unify_identical_uvs(&mesh, &params).unwrap().validate().is_ok());
        prop_assert!(split_surfs_by_uvs(&mesh).unwrap().validate().is_ok());
        prop_assert!(normalize_mesh(&mesh, &params).unwrap().0.validate().is_ok());
    }
}

// =============================================================================
// Property Tests: Idempotence
// =============================================================================

proptest! {
    #[test]
    fn proptest_dedup_idempotent(mesh in arb_mesh()) {
        let once = remove_duplicate_facets(&mesh).unwrap();
        let twice = remove_duplicate_facets(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn proptest_unused_idempotent(mesh in arb_mesh()) {
        let once = remove_unused_verts(&mesh).unwrap();
        let twice = remove_unused_verts(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn proptest_unify_idempotent(mesh in arb_mesh()) {
        let params = UnifyParams::default();
        let once = unify_identical_verts(&mesh, &params).unwrap();
        let twice = unify_identical_verts(&once, &params).unwrap();
        prop_assert_eq!(once, twice);
    }
}

// =============================================================================
// Property Tests: Counts and geometry
// =============================================================================

proptest! {
    /// Unification leaves no two vertices with the same position and keeps
    /// every facet's corner positions.
    #[test]
    fn proptest_unify_preserves_positions(mesh in arb_mesh()) {
        let out = unify_identical_verts(&mesh, &UnifyParams::default()).unwrap();
        for (i, a) in out.verts.iter().enumerate() {
            for b in &out.verts[i + 1..] {
                prop_assert_ne!(a, b);
            }
        }
        prop_assert_eq!(out.facet_count(), mesh.facet_count());
        for (s_in, s_out) in mesh.surfaces.iter().zip(&out.surfaces) {
            for (f_in, f_out) in s_in.vert_tris().zip(s_out.vert_tris()) {
                for k in 0..3 {
                    prop_assert_eq!(mesh.verts[f_in[k] as usize], out.verts[f_out[k] as usize]);
                }
            }
        }
    }

    /// Splitting never changes the facet count or the vertex list.
    #[test]
    fn proptest_split_preserves_facets(mesh in arb_mesh()) {
        let out = split_surfs_by_uvs(&mesh).unwrap();
        prop_assert_eq!(out.facet_count(), mesh.facet_count());
        prop_assert_eq!(&out.verts, &mesh.verts);
        let points_in: usize = mesh.surfaces.iter().map(|s| s.surf_points.len()).sum();
        let points_out: usize = out.surfaces.iter().map(|s| s.surf_points.len()).sum();
        prop_assert_eq!(points_in, points_out);
    }

    /// Unused removal never drops a marked vertex or a referenced vertex.
    #[test]
    fn proptest_unused_keeps_references(mesh in arb_mesh()) {
        let out = remove_unused_verts(&mesh).unwrap();
        prop_assert_eq!(out.marked_verts.len(), mesh.marked_verts.len());
        for (a, b) in mesh.marked_verts.iter().zip(&out.marked_verts) {
            prop_assert_eq!(mesh.verts[a.vert as usize], out.verts[b.vert as usize]);
        }
        prop_assert!(out.vert_count() <= mesh.vert_count());
    }

    /// A tolerance never merges less than exact comparison.
    #[test]
    fn proptest_tolerance_merges_at_least_exact(mesh in arb_mesh()) {
        let exact = unify_identical_verts(&mesh, &UnifyParams::exact()).unwrap();
        let loose = unify_identical_verts(&mesh, &UnifyParams::exact().with_tolerance(0.5)).unwrap();
        prop_assert!(loose.vert_count() <= exact.vert_count());
    }
}

// =============================================================================
// Cube mesh invariants
// =============================================================================

#[test]
fn cube_is_already_normal() {
    let cube = mesh_build::cube(false);
    let (out, summary) = normalize_mesh(&cube, &UnifyParams::default()).unwrap();
    assert!(!summary.had_changes());
    assert_eq!(out, cube);
}

#[test]
fn merged_cube_copies_collapse() {
    let cube = mesh_build::cube(false);
    let mut doubled = cube.clone();
    doubled.verts.extend(cube.verts.iter().copied());
    let mut copy = cube.surfaces[0].clone();
    copy.quads = copy.quads.offset(8, 0);
    doubled.surfaces.push(copy);

    let (out, summary) = normalize_mesh(&doubled, &UnifyParams::default()).unwrap();
    assert_eq!(summary.verts_unified, 8);
    // Facets live in separate surfaces, so neither copy is a duplicate.
    assert_eq!(summary.duplicates_removed, 0);
    assert_eq!(out.vert_count(), 8);
    assert_eq!(out.surfaces[1].quads.vert_inds, out.surfaces[0].quads.vert_inds);
}
