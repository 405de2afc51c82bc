//! Core mesh types for facetforge.
//!
//! This crate provides the foundational value types shared by every other
//! crate in the workspace:
//!
//! - [`Mesh`] - Vertex list, UV list, named [`Surface`]s, marked vertices and morphs
//! - [`Facets`] - Triangle ([`Tris`]) or quad ([`Quads`]) index lists with optional UV indices
//! - [`SurfPoint`] / [`MarkedVert`] - Labelled anchors that operators keep consistent
//! - [`Morph`] - Named sparse vertex deltas (blend shapes)
//! - [`Triangle`] / [`Aabb`] - Geometric helpers
//! - [`Image`] - Row-major sampled grid used for depth maps, masks and textures
//!
//! # Value semantics
//!
//! Every type here is a plain owned value. Operators in the sibling crates take
//! a `&Mesh` and return a new `Mesh` (or a new vertex list); nothing is shared
//! or mutated behind the caller's back.
//!
//! # Coordinate conventions
//!
//! - Right-handed, `f64` coordinates, unit-agnostic.
//! - Facet winding is **counter-clockwise when viewed from outside**.
//! - UV `(0, 0)` is the bottom-left of an image, `(1, 1)` the top-right.
//!   Image row 0 is the top row. See [`Image::uv_to_pixel`].
//!
//! # Example
//!
//! ```
//! use mesh_types::{Mesh, Point3, Surface, MeshTopology};
//!
//! let mut surf = Surface::new("skin");
//! surf.tris.push([0, 1, 2]);
//!
//! let mesh = Mesh {
//!     verts: vec![
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(1.0, 0.0, 0.0),
//!         Point3::new(0.0, 1.0, 0.0),
//!     ],
//!     surfaces: vec![surf],
//!     ..Mesh::default()
//! };
//!
//! assert_eq!(mesh.facet_count(), 1);
//! assert!(mesh.validate().is_ok());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod error;
mod facets;
mod image;
mod mesh;
mod morph;
mod surface;
mod traits;
mod triangle;

pub use bounds::Aabb;
pub use error::{MeshError, MeshResult};
pub use facets::{Facets, Quads, Tris};
pub use image::{Blend, Image, Rgba8};
pub use mesh::{MarkedVert, Material, Mesh};
pub use morph::{Morph, VertexDelta};
pub use surface::{SurfPoint, Surface};
pub use traits::{MeshBounds, MeshTopology};
pub use triangle::{Triangle, barycentric_2d};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector2, Vector3};
