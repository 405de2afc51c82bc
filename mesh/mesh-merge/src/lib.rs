//! Merging meshes and surfaces.
//!
//! - [`merge_mesh_surfaces`] stacks the surfaces of two meshes that share one
//!   vertex list (for example, alternate texturings of the same shape)
//! - [`merge_meshes`] and [`merge_all`] concatenate independent meshes,
//!   shifting every index of the later meshes past the earlier ones
//! - [`merge_same_name_surfaces`] collapses surfaces sharing a name
//!
//! Merges never weld anything; run the normalizers in `mesh-repair`
//! afterwards to collapse coincident vertices.
//!
//! # Example
//!
//! ```
//! use mesh_build::{cube, octahedron, pyramid};
//! use mesh_merge::merge_all;
//! use mesh_types::MeshTopology;
//!
//! let scene = merge_all(&[cube(false), octahedron(false), pyramid(true)])?;
//! assert_eq!(scene.vert_count(), 8 + 6 + 5);
//! assert_eq!(scene.surfaces.len(), 3);
//! # Ok::<(), mesh_merge::MergeError>(())
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod merge;
mod same_name;

pub use error::{MergeError, MergeResult};
pub use merge::{merge_all, merge_mesh_surfaces, merge_meshes};
pub use same_name::merge_same_name_surfaces;
