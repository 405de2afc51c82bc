//! Weighted morph blending.

use hashbrown::HashSet;
use mesh_types::{Mesh, Point3};
use tracing::trace;

use crate::params::MorphWeight;

/// Vertex positions of the mesh with an expression applied.
///
/// For each entry whose morph exists on the mesh, `weight × delta` is added
/// to the base positions, in entry order. Entries naming an unknown morph
/// are skipped. A morph is applied at most once per call: when the
/// expression names it more than once, the first entry's weight is used.
///
/// Topology, UVs and morphs are untouched; only the new positions are
/// returned.
///
/// # Example
///
/// ```
/// use mesh_morph::{MorphWeight, apply_expression};
/// use mesh_types::{Mesh, Morph, Point3, Vector3};
///
/// let mesh = Mesh {
///     verts: vec![Point3::origin()],
///     morphs: vec![Morph::dense("raise", &[Vector3::y()])],
///     ..Mesh::default()
/// };
/// let verts = apply_expression(&mesh, &[MorphWeight::new("raise", 0.5)]);
/// assert_eq!(verts, vec![Point3::new(0.0, 0.5, 0.0)]);
/// ```
#[must_use]
pub fn apply_expression(mesh: &Mesh, expression: &[MorphWeight]) -> Vec<Point3<f64>> {
    let mut verts = mesh.verts.clone();
    let mut applied: HashSet<&str> = HashSet::with_capacity(expression.len());

    for entry in expression {
        if !applied.insert(entry.name.as_str()) {
            trace!("Morph '{}' already applied, ignoring repeat", entry.name);
            continue;
        }
        match mesh.morph(&entry.name) {
            Some(morph) => morph.accumulate(&mut verts, entry.weight),
            None => trace!("Mesh '{}' has no morph '{}'", mesh.name, entry.name),
        }
    }
    verts
}

/// Vertex positions with a single morph applied at `weight`.
///
/// Returns `None` if the mesh has no morph with that name.
#[must_use]
pub fn apply_morph(mesh: &Mesh, name: &str, weight: f64) -> Option<Vec<Point3<f64>>> {
    let morph = mesh.morph(name)?;
    let mut verts = mesh.verts.clone();
    morph.accumulate(&mut verts, weight);
    Some(verts)
}
