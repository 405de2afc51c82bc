//! Procedural mesh constructors.
//!
//! This crate builds meshes from scratch:
//!
//! - **Solids**: [`cube`], [`tetrahedron`], [`octahedron`], [`pyramid`], each
//!   optionally open (one facet omitted)
//! - **Tents**: [`n_tent`] fans `n` triangles from an apex to a circle
//! - **Spheres**: [`create_sphere`] subdivides a tetrahedron, pushing every new
//!   vertex out to the radius
//! - **Height fields**: [`mesh_from_image`] turns a depth image into a quad grid
//!   with UVs
//!
//! All constructors are deterministic and produce counter-clockwise winding
//! viewed from outside.
//!
//! # Examples
//!
//! ```
//! use mesh_build::{create_sphere, cube};
//! use mesh_types::MeshTopology;
//!
//! let box_mesh = cube(false);
//! assert_eq!(box_mesh.vert_count(), 8);
//!
//! let ball = create_sphere(1.0, 1)?;
//! assert_eq!(ball.vert_count(), 10);
//! assert_eq!(ball.facet_count(), 16);
//! # Ok::<(), mesh_build::BuildError>(())
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod heightmap;
mod solids;
mod sphere;

pub use error::{BuildError, BuildResult};
pub use heightmap::mesh_from_image;
pub use solids::{cube, n_tent, octahedron, pyramid, tetrahedron};
pub use sphere::{MAX_SPHERE_SUBDIVISIONS, create_sphere};
