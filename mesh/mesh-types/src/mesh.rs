//! The surface mesh model.

use nalgebra::{Point2, Point3};

use crate::{Aabb, MeshBounds, MeshError, MeshResult, MeshTopology, Morph, Surface, Triangle};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A labelled vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MarkedVert {
    /// Vertex index.
    pub vert: u32,
    /// Landmark name.
    pub label: String,
}

impl MarkedVert {
    /// Create a marked vertex.
    #[must_use]
    pub fn new(vert: u32, label: impl Into<String>) -> Self {
        Self {
            vert,
            label: label.into(),
        }
    }
}

/// Mesh-level rendering hints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Material {
    /// Whether the surface should be rendered with specular highlights.
    pub shiny: bool,
}

/// A surface mesh with UVs, named surfaces, landmarks and morph targets.
///
/// Vertex and UV indices are independent: a vertex on a texture seam is
/// referenced by facets with different UV indices.
///
/// # Memory Layout
///
/// - `verts`: `Vec<Point3<f64>>` - Vertex positions; index is identity
/// - `uvs`: `Vec<Point2<f64>>` - Texture coordinates
/// - `surfaces`: `Vec<Surface>` - Facets grouped by texture
///
/// # Example
///
/// ```
/// use mesh_types::{Mesh, Point3, Surface, MeshTopology};
///
/// let mut surf = Surface::new("");
/// surf.quads.push([0, 1, 2, 3]);
/// let mesh = Mesh {
///     verts: vec![
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(1.0, 1.0, 0.0),
///         Point3::new(0.0, 1.0, 0.0),
///     ],
///     surfaces: vec![surf],
///     ..Mesh::default()
/// };
///
/// assert_eq!(mesh.vert_count(), 4);
/// assert_eq!(mesh.tri_equiv_count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mesh {
    /// Mesh name; may be empty.
    pub name: String,
    /// Vertex positions.
    pub verts: Vec<Point3<f64>>,
    /// Texture coordinates.
    pub uvs: Vec<Point2<f64>>,
    /// Named facet groups.
    pub surfaces: Vec<Surface>,
    /// Labelled vertices.
    pub marked_verts: Vec<MarkedVert>,
    /// Blend shapes.
    pub morphs: Vec<Morph>,
    /// Rendering hints.
    pub material: Material,
}

impl Mesh {
    /// Create an empty mesh.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh with a single surface.
    #[must_use]
    pub fn from_surface(verts: Vec<Point3<f64>>, surface: Surface) -> Self {
        Self {
            verts,
            surfaces: vec![surface],
            ..Self::default()
        }
    }

    /// Copy of this mesh with its surfaces replaced.
    #[must_use]
    pub fn with_surfaces(&self, surfaces: Vec<Surface>) -> Self {
        Self {
            name: self.name.clone(),
            verts: self.verts.clone(),
            uvs: self.uvs.clone(),
            surfaces,
            marked_verts: self.marked_verts.clone(),
            morphs: self.morphs.clone(),
            material: self.material,
        }
    }

    /// Total number of tri-equivalents over all surfaces.
    #[must_use]
    pub fn tri_equiv_count(&self) -> usize {
        self.surfaces.iter().map(Surface::tri_equiv_count).sum()
    }

    /// Look up a morph by name (first match).
    #[must_use]
    pub fn morph(&self, name: &str) -> Option<&Morph> {
        self.morphs.iter().find(|m| m.name == name)
    }

    /// Look up a surface by name (first match).
    #[must_use]
    pub fn surface(&self, name: &str) -> Option<&Surface> {
        self.surfaces.iter().find(|s| s.name == name)
    }

    /// Iterate over every tri-equivalent of every surface with resolved
    /// positions. Triangles with out-of-range indices are skipped.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.surfaces.iter().flat_map(Surface::vert_tris).filter_map(|[a, b, c]| {
            Some(Triangle::new(
                *self.verts.get(a as usize)?,
                *self.verts.get(b as usize)?,
                *self.verts.get(c as usize)?,
            ))
        })
    }

    /// Positions of every surface point, labelled, over all surfaces.
    #[must_use]
    pub fn surf_point_positions(&self) -> Vec<(String, Point3<f64>)> {
        self.surfaces
            .iter()
            .flat_map(|s| {
                s.surf_points.iter().filter_map(|sp| {
                    s.surf_point_pos(sp, &self.verts)
                        .map(|p| (sp.label.clone(), p))
                })
            })
            .collect()
    }

    /// Check every index invariant of the mesh.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant found, scanning surfaces in
    /// order, then marked vertices, then morphs.
    pub fn validate(&self) -> MeshResult<()> {
        let vert_count = self.verts.len();
        let uv_count = self.uvs.len();

        for (surface, surf) in self.surfaces.iter().enumerate() {
            if !surf.uvs_consistent() {
                return Err(MeshError::PartialUvs { surface });
            }
            let bad_vert = surf
                .tris
                .vert_inds
                .iter()
                .flatten()
                .chain(surf.quads.vert_inds.iter().flatten())
                .find(|&&i| i as usize >= vert_count);
            if let Some(&index) = bad_vert {
                return Err(MeshError::InvalidVertexIndex {
                    surface,
                    index,
                    vert_count,
                });
            }
            let bad_uv = surf
                .tris
                .uv_inds
                .iter()
                .flatten()
                .chain(surf.quads.uv_inds.iter().flatten())
                .find(|&&i| i as usize >= uv_count);
            if let Some(&index) = bad_uv {
                return Err(MeshError::InvalidUvIndex {
                    surface,
                    index,
                    uv_count,
                });
            }
            let tri_count = surf.tri_equiv_count();
            if let Some(sp) = surf
                .surf_points
                .iter()
                .find(|sp| sp.tri_equiv as usize >= tri_count)
            {
                return Err(MeshError::InvalidSurfPoint {
                    surface,
                    label: sp.label.clone(),
                    index: sp.tri_equiv,
                    tri_count,
                });
            }
        }

        if let Some(mv) = self
            .marked_verts
            .iter()
            .find(|mv| mv.vert as usize >= vert_count)
        {
            return Err(MeshError::InvalidMarkedVert {
                label: mv.label.clone(),
                index: mv.vert,
                vert_count,
            });
        }

        for morph in &self.morphs {
            if let Some(d) = morph.deltas.iter().find(|d| d.vert as usize >= vert_count) {
                return Err(MeshError::InvalidMorphDelta {
                    morph: morph.name.clone(),
                    index: d.vert,
                    vert_count,
                });
            }
        }

        Ok(())
    }
}

impl MeshTopology for Mesh {
    fn vert_count(&self) -> usize {
        self.verts.len()
    }

    fn uv_count(&self) -> usize {
        self.uvs.len()
    }

    fn facet_count(&self) -> usize {
        self.surfaces.iter().map(Surface::facet_count).sum()
    }
}

impl MeshBounds for Mesh {
    fn bounds(&self) -> Aabb {
        Aabb::from_points(self.verts.iter())
    }
}
