//! Vertex deformation for surface meshes.
//!
//! Both operators here return a new vertex list and leave topology, UVs and
//! morph targets alone, so the result can be dropped into a copy of the
//! input mesh:
//!
//! - **Expressions**: [`apply_expression`] blends named morph targets with
//!   per-morph weights
//! - **Embossing**: [`emboss`] pushes vertices along their normals by the
//!   intensity of a UV-mapped pattern
//!
//! # Expressions
//!
//! ```
//! use mesh_build::cube;
//! use mesh_morph::{MorphWeight, apply_expression};
//! use mesh_types::{Morph, Vector3};
//!
//! let mut mesh = cube(false);
//! mesh.morphs.push(Morph::dense("stretch", &[Vector3::new(0.0, 0.0, 1.0); 8]));
//!
//! mesh.verts = apply_expression(&mesh, &[MorphWeight::new("stretch", 0.25)]);
//! assert!((mesh.verts[0].z - (-0.75)).abs() < 1e-12);
//! ```
//!
//! # Embossing
//!
//! ```
//! use mesh_build::mesh_from_image;
//! use mesh_morph::{EmbossParams, emboss};
//! use mesh_types::{Image, Rgba8};
//!
//! let surface = mesh_from_image(&Image::from_fn(16, 16, |c, r| ((c + r) % 3) as f64))?;
//! let pattern = Image::from_fn(8, 8, |c, _| Rgba8::grey((c * 32) as u8));
//! let verts = emboss(&surface, &pattern, &EmbossParams::default())?;
//! assert_eq!(verts.len(), surface.verts.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Embossing samples the pattern and displaces vertices on the rayon pool
//! for large meshes; the result does not depend on which path runs. Morph
//! blending is always serial so the summation order is fixed.

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod emboss;
mod error;
mod expression;
mod normals;
mod params;

pub use emboss::emboss;
pub use error::{MorphError, MorphResult};
pub use expression::{apply_expression, apply_morph};
pub use normals::vertex_normals;
pub use params::{DEFAULT_EMBOSS_RATIO, EmbossParams, MorphWeight, PatternSampling};
