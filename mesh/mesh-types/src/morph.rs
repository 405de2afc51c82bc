//! Blend-shape morph targets.

use hashbrown::HashSet;
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Offset of one vertex from its base position.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VertexDelta {
    /// Index into the owning mesh's vertex list.
    pub vert: u32,
    /// Offset applied at full weight.
    pub delta: Vector3<f64>,
}

impl VertexDelta {
    /// Create a vertex delta.
    #[inline]
    #[must_use]
    pub const fn new(vert: u32, delta: Vector3<f64>) -> Self {
        Self { vert, delta }
    }
}

/// A named set of vertex deltas (blend shape).
///
/// Deltas are sparse: vertices without an entry do not move.
///
/// # Example
///
/// ```
/// use mesh_types::{Morph, Point3, Vector3};
///
/// let morph = Morph::dense("open", &[Vector3::new(0.0, 1.0, 0.0)]);
/// let mut verts = vec![Point3::origin()];
/// morph.accumulate(&mut verts, 0.5);
/// assert_eq!(verts[0], Point3::new(0.0, 0.5, 0.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Morph {
    /// Morph name, matched by expressions.
    pub name: String,
    /// Sparse per-vertex deltas.
    pub deltas: Vec<VertexDelta>,
}

impl Morph {
    /// Create a morph from sparse deltas.
    #[must_use]
    pub fn new(name: impl Into<String>, deltas: Vec<VertexDelta>) -> Self {
        Self {
            name: name.into(),
            deltas,
        }
    }

    /// Create a morph with one delta per vertex, in vertex order.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: vertex indices are u32 throughout the mesh model
    pub fn dense(name: impl Into<String>, deltas: &[Vector3<f64>]) -> Self {
        Self {
            name: name.into(),
            deltas: deltas
                .iter()
                .enumerate()
                .map(|(i, d)| VertexDelta::new(i as u32, *d))
                .collect(),
        }
    }

    /// Number of deltas.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    /// Whether the morph moves nothing.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    /// Add `weight × delta` to every referenced vertex, in delta order.
    ///
    /// Deltas referencing vertices outside `verts` are ignored.
    pub fn accumulate(&self, verts: &mut [Point3<f64>], weight: f64) {
        for d in &self.deltas {
            if let Some(v) = verts.get_mut(d.vert as usize) {
                *v += d.delta * weight;
            }
        }
    }

    /// Copy with every vertex index shifted by `vert_offset`.
    #[must_use]
    pub fn offset(&self, vert_offset: u32) -> Self {
        Self {
            name: self.name.clone(),
            deltas: self
                .deltas
                .iter()
                .map(|d| VertexDelta::new(d.vert + vert_offset, d.delta))
                .collect(),
        }
    }

    /// Copy with vertex indices passed through `map`.
    ///
    /// Deltas whose vertex maps to `None` are dropped; when several deltas
    /// land on the same new vertex only the first is kept.
    #[must_use]
    pub fn remapped(&self, map: &[Option<u32>]) -> Self {
        let mut seen = HashSet::with_capacity(self.deltas.len());
        let deltas = self
            .deltas
            .iter()
            .filter_map(|d| {
                let vert = map.get(d.vert as usize).copied().flatten()?;
                seen.insert(vert).then_some(VertexDelta::new(vert, d.delta))
            })
            .collect();
        Self {
            name: self.name.clone(),
            deltas,
        }
    }
}
