//! Property-based tests for mesh deformation.
//!
//! Run with: cargo test -p mesh-morph -- proptest

use mesh_build::{create_sphere, mesh_from_image};
use mesh_morph::{EmbossParams, MorphWeight, apply_expression, emboss};
use mesh_types::{Image, MeshBounds, Morph, Rgba8, Vector3};
use proptest::prelude::*;

proptest! {
    /// Applying an expression matches summing each morph's weighted deltas.
    #[test]
    fn proptest_expression_is_linear(
        wa in -2.0..2.0f64,
        wb in -2.0..2.0f64,
        da in prop::collection::vec(-1.0..1.0f64, 10),
        db in prop::collection::vec(-1.0..1.0f64, 10),
    ) {
        let mut mesh = create_sphere(1.0, 1).unwrap();
        let dense = |d: &[f64]| d.iter().map(|&x| Vector3::new(x, -x, 0.5 * x)).collect::<Vec<_>>();
        mesh.morphs.push(Morph::dense("a", &dense(&da)));
        mesh.morphs.push(Morph::dense("b", &dense(&db)));

        let verts = apply_expression(
            &mesh,
            &[MorphWeight::new("a", wa), MorphWeight::new("b", wb), MorphWeight::new("a", 9.0)],
        );
        for (i, v) in verts.iter().enumerate() {
            let expected = mesh.verts[i]
                + mesh.morphs[0].deltas[i].delta * wa
                + mesh.morphs[1].deltas[i].delta * wb;
            prop_assert!((v - expected).norm() < 1e-12);
        }
    }

    /// No vertex moves further than `ratio × max_extent`.
    #[test]
    fn proptest_emboss_bound(
        ratio in 0.0..0.5f64,
        n in 2usize..12,
        grey in prop::collection::vec(any::<u8>(), 16),
    ) {
        let mesh = mesh_from_image(&Image::from_fn(n, n, |c, r| ((c * 7 + r * 3) % 5) as f64)).unwrap();
        let pattern = Image::from_fn(4, 4, |c, r| Rgba8::grey(grey[r * 4 + c]));
        let verts = emboss(&mesh, &pattern, &EmbossParams::default().with_ratio(ratio)).unwrap();
        let bound = ratio * mesh.bounds().max_extent();
        for (a, b) in mesh.verts.iter().zip(&verts) {
            prop_assert!((a - b).norm() <= bound + 1e-12);
        }
    }
}
