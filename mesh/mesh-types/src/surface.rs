//! Named surfaces and surface points.

use nalgebra::{Point3, Vector3};

use crate::{Quads, Triangle, Tris};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A labelled barycentric point bound to one triangle of a surface.
///
/// `tri_equiv` indexes the surface's tri-equivalent space: all tris first,
/// then two fan triangles per quad (see [`Surface::tri_equiv_verts`]).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SurfPoint {
    /// Tri-equivalent index within the owning surface.
    pub tri_equiv: u32,
    /// Barycentric weights for the triangle's three corners.
    pub weights: Vector3<f64>,
    /// Landmark name.
    pub label: String,
}

impl SurfPoint {
    /// Create a surface point.
    #[must_use]
    pub fn new(tri_equiv: u32, weights: Vector3<f64>, label: impl Into<String>) -> Self {
        Self {
            tri_equiv,
            weights,
            label: label.into(),
        }
    }
}

/// An independently textured group of facets.
///
/// Facet order is tris first, then quads; a "facet index" counts through
/// both lists in that order.
///
/// # Example
///
/// ```
/// use mesh_types::Surface;
///
/// let mut surf = Surface::new("lips");
/// surf.tris.push([0, 1, 2]);
/// surf.quads.push([2, 1, 3, 4]);
///
/// assert_eq!(surf.facet_count(), 2);
/// assert_eq!(surf.tri_equiv_count(), 3);
/// assert_eq!(surf.tri_equiv_verts(2), Some([2, 3, 4]));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Surface {
    /// Surface name; may be empty.
    pub name: String,
    /// Triangle facets.
    pub tris: Tris,
    /// Quad facets.
    pub quads: Quads,
    /// Landmarks anchored on this surface's facets.
    pub surf_points: Vec<SurfPoint>,
}

impl Surface {
    /// Create an empty surface with a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create a surface from its facet lists.
    #[must_use]
    pub fn from_facets(name: impl Into<String>, tris: Tris, quads: Quads) -> Self {
        Self {
            name: name.into(),
            tris,
            quads,
            surf_points: Vec::new(),
        }
    }

    /// Number of facets (tris plus quads).
    #[inline]
    #[must_use]
    pub fn facet_count(&self) -> usize {
        self.tris.len() + self.quads.len()
    }

    /// Number of tri-equivalents (tris plus two per quad).
    #[inline]
    #[must_use]
    pub fn tri_equiv_count(&self) -> usize {
        self.tris.tri_equiv_count() + self.quads.tri_equiv_count()
    }

    /// Whether the surface has no facets.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tris.is_empty() && self.quads.is_empty()
    }

    /// Whether any facet carries UV indices.
    #[inline]
    #[must_use]
    pub fn has_uvs(&self) -> bool {
        self.tris.has_uvs() || self.quads.has_uvs()
    }

    /// Whether UV coverage is all-or-nothing across the whole surface.
    #[must_use]
    pub fn uvs_consistent(&self) -> bool {
        if !self.tris.uvs_consistent() || !self.quads.uvs_consistent() {
            return false;
        }
        let has = self.has_uvs();
        (self.tris.is_empty() || self.tris.has_uvs() == has)
            && (self.quads.is_empty() || self.quads.has_uvs() == has)
    }

    /// Whether the surface has facets but no UVs for them.
    #[inline]
    #[must_use]
    pub fn lacks_uvs(&self) -> bool {
        !self.is_empty() && !self.has_uvs()
    }

    /// Vertex indices of the given tri-equivalent.
    #[must_use]
    pub fn tri_equiv_verts(&self, tri_equiv: usize) -> Option<[u32; 3]> {
        self.tri_equiv_lookup(tri_equiv, &self.tris.vert_inds, &self.quads.vert_inds)
    }

    /// UV indices of the given tri-equivalent, if the surface has UVs.
    #[must_use]
    pub fn tri_equiv_uvs(&self, tri_equiv: usize) -> Option<[u32; 3]> {
        self.tri_equiv_lookup(tri_equiv, &self.tris.uv_inds, &self.quads.uv_inds)
    }

    fn tri_equiv_lookup(
        &self,
        tri_equiv: usize,
        tris: &[[u32; 3]],
        quads: &[[u32; 4]],
    ) -> Option<[u32; 3]> {
        let num_tris = self.tris.len();
        if tri_equiv < num_tris {
            return tris.get(tri_equiv).copied();
        }
        let rel = tri_equiv - num_tris;
        let quad = quads.get(rel / 2)?;
        Some(Quads::fan_corners(rel % 2).map(|c| quad[c]))
    }

    /// Facet index owning the given tri-equivalent.
    #[must_use]
    pub fn facet_of_tri_equiv(&self, tri_equiv: usize) -> usize {
        let num_tris = self.tris.len();
        if tri_equiv < num_tris {
            tri_equiv
        } else {
            num_tris + (tri_equiv - num_tris) / 2
        }
    }

    /// Iterate over every tri-equivalent as vertex index triples.
    pub fn vert_tris(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.tris.vert_tris().chain(self.quads.vert_tris())
    }

    /// Iterate over every tri-equivalent as UV index triples.
    ///
    /// Yields nothing for a surface without UVs.
    pub fn uv_tris(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.tris.uv_tris().chain(self.quads.uv_tris())
    }

    /// Position of a surface point on the given vertex list.
    ///
    /// Returns `None` if the point's triangle does not exist.
    #[must_use]
    pub fn surf_point_pos(&self, point: &SurfPoint, verts: &[Point3<f64>]) -> Option<Point3<f64>> {
        let [a, b, c] = self.tri_equiv_verts(point.tri_equiv as usize)?;
        let tri = Triangle::new(
            *verts.get(a as usize)?,
            *verts.get(b as usize)?,
            *verts.get(c as usize)?,
        );
        Some(tri.point_at(&point.weights))
    }

    /// Copy keeping only the flagged facets.
    ///
    /// `keep` has one flag per facet index (tris then quads). Surface points
    /// on dropped facets are dropped; the rest are re-indexed.
    #[must_use]
    pub fn filtered(&self, keep: &[bool]) -> Self {
        let num_tris = self.tris.len();
        let (keep_tris, keep_quads) = keep.split_at(num_tris.min(keep.len()));

        let mut new_tri_equiv = vec![None; self.tri_equiv_count()];
        let mut next = 0u32;
        for (t, _) in keep_tris.iter().enumerate().filter(|&(_, &k)| k) {
            new_tri_equiv[t] = Some(next);
            next += 1;
        }
        for (q, _) in keep_quads
            .iter()
            .take(self.quads.len())
            .enumerate()
            .filter(|&(_, &k)| k)
        {
            new_tri_equiv[num_tris + 2 * q] = Some(next);
            new_tri_equiv[num_tris + 2 * q + 1] = Some(next + 1);
            next += 2;
        }

        let surf_points = self
            .surf_points
            .iter()
            .filter_map(|sp| {
                let tri_equiv = new_tri_equiv.get(sp.tri_equiv as usize).copied().flatten()?;
                Some(SurfPoint {
                    tri_equiv,
                    ..sp.clone()
                })
            })
            .collect();

        Self {
            name: self.name.clone(),
            tris: self.tris.filtered(keep_tris),
            quads: self.quads.filtered(keep_quads),
            surf_points,
        }
    }

    /// Copy with vertex and UV indices shifted by the given offsets.
    #[must_use]
    pub fn offset(&self, vert_offset: u32, uv_offset: u32) -> Self {
        Self {
            name: self.name.clone(),
            tris: self.tris.offset(vert_offset, uv_offset),
            quads: self.quads.offset(vert_offset, uv_offset),
            surf_points: self.surf_points.clone(),
        }
    }

    /// Copy with vertex and UV indices passed through the given maps.
    #[must_use]
    pub fn remapped(&self, vert_map: &[u32], uv_map: &[u32]) -> Self {
        Self {
            name: self.name.clone(),
            tris: self.tris.remapped(vert_map, uv_map),
            quads: self.quads.remapped(vert_map, uv_map),
            surf_points: self.surf_points.clone(),
        }
    }

    /// Copy with all UV indices removed.
    #[must_use]
    pub fn without_uvs(&self) -> Self {
        Self {
            name: self.name.clone(),
            tris: Tris::from_verts(self.tris.vert_inds.clone()),
            quads: Quads::from_verts(self.quads.vert_inds.clone()),
            surf_points: self.surf_points.clone(),
        }
    }

    /// Append another surface's facets and surface points to this one.
    ///
    /// Surface points of both surfaces are re-indexed into the combined
    /// tri-equivalent space. The caller is responsible for UV compatibility.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: tri-equivalent counts are bounded by u32 facet indices
    pub fn append(&mut self, other: &Self) {
        let self_tris = self.tris.len() as u32;
        let other_tris = other.tris.len() as u32;
        let self_quads = self.quads.len() as u32;

        // Own quads shift past the other surface's tris.
        for sp in &mut self.surf_points {
            if sp.tri_equiv >= self_tris {
                sp.tri_equiv += other_tris;
            }
        }
        self.surf_points
            .extend(other.surf_points.iter().map(|sp| {
                let tri_equiv = if sp.tri_equiv < other_tris {
                    self_tris + sp.tri_equiv
                } else {
                    self_tris + other_tris + 2 * self_quads + (sp.tri_equiv - other_tris)
                };
                SurfPoint {
                    tri_equiv,
                    ..sp.clone()
                }
            }));

        self.tris.extend_from(&other.tris);
        self.quads.extend_from(&other.quads);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri_quad_surface() -> Surface {
        let mut surf = Surface::new("s");
        surf.tris.push([0, 1, 2]);
        surf.tris.push([1, 3, 2]);
        surf.quads.push([4, 5, 6, 7]);
        surf.surf_points.push(SurfPoint::new(1, Vector3::x(), "on_tri"));
        surf.surf_points.push(SurfPoint::new(3, Vector3::y(), "on_quad"));
        surf
    }

    #[test]
    fn tri_equiv_indexing() {
        let surf = tri_quad_surface();
        assert_eq!(surf.tri_equiv_count(), 4);
        assert_eq!(surf.tri_equiv_verts(0), Some([0, 1, 2]));
        assert_eq!(surf.tri_equiv_verts(2), Some([4, 5, 6]));
        assert_eq!(surf.tri_equiv_verts(3), Some([4, 6, 7]));
        assert_eq!(surf.tri_equiv_verts(4), None);
        assert_eq!(surf.facet_of_tri_equiv(3), 2);
    }

    #[test]
    fn filtered_reindexes_surf_points() {
        let surf = tri_quad_surface();
        let kept = surf.filtered(&[false, true, true]);
        assert_eq!(kept.tris.vert_inds, vec![[1, 3, 2]]);
        assert_eq!(kept.quads.len(), 1);
        assert_eq!(kept.surf_points.len(), 2);
        assert_eq!(kept.surf_points[0].tri_equiv, 0);
        assert_eq!(kept.surf_points[1].tri_equiv, 2);

        let dropped = surf.filtered(&[true, false, false]);
        assert!(dropped.surf_points.is_empty());
    }

    #[test]
    fn append_reindexes_both_sides() {
        let mut a = tri_quad_surface();
        let b = tri_quad_surface();
        a.append(&b);

        assert_eq!(a.tris.len(), 4);
        assert_eq!(a.quads.len(), 2);
        let labels: Vec<_> = a
            .surf_points
            .iter()
            .map(|sp| (sp.label.as_str(), sp.tri_equiv))
            .collect();
        // a: tri 1 stays, quad tri-equiv 3 -> 3 + 2
        // b: tri 1 -> 2 + 1, quad tri-equiv 3 -> 2 + 2 + 2 + 1
        assert_eq!(
            labels,
            vec![("on_tri", 1), ("on_quad", 5), ("on_tri", 3), ("on_quad", 7)]
        );
        for sp in &a.surf_points {
            assert!((sp.tri_equiv as usize) < a.tri_equiv_count());
        }
        // The quad point still lands on the same vertices.
        assert_eq!(a.tri_equiv_verts(5), Some([4, 6, 7]));
        assert_eq!(a.tri_equiv_verts(7), Some([4, 6, 7]));
    }

    #[test]
    fn uv_consistency_across_lists() {
        let mut surf = Surface::new("s");
        surf.tris.push_with_uvs([0, 1, 2], [0, 1, 2]);
        assert!(surf.uvs_consistent());
        surf.quads.push([0, 1, 2, 3]);
        assert!(!surf.uvs_consistent());
    }

    #[test]
    fn surf_point_position() {
        let surf = tri_quad_surface();
        let verts: Vec<_> = (0..8u32).map(|i| Point3::new(f64::from(i), 0.0, 0.0)).collect();
        let pos = surf.surf_point_pos(&surf.surf_points[1], &verts);
        // weights (0,1,0) on tri [4,6,7] -> vertex 6
        assert_eq!(pos, Some(Point3::new(6.0, 0.0, 0.0)));
    }
}
