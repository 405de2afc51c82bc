//! Topology normalizers for surface meshes.
//!
//! This crate provides:
//! - Duplicate facet removal (cyclic rotations within a surface)
//! - Unused vertex and UV removal
//! - Identical vertex and UV unification, exact or within a tolerance
//! - Splitting surfaces into UV islands
//! - A full normalization pipeline with a change summary
//!
//! Every operation takes a `&Mesh`, checks its index invariants and returns
//! a new mesh. Marked vertices, surface points and morph deltas are remapped
//! or dropped together with the elements they reference.
//!
//! # Example
//!
//! ```
//! use mesh_types::{Mesh, Point3, Surface};
//! use mesh_repair::{normalize_mesh, UnifyParams};
//!
//! let mut surf = Surface::new("");
//! surf.tris.push([0, 1, 2]);
//! let mesh = Mesh::from_surface(
//!     vec![
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(1.0, 0.0, 0.0),
//!         Point3::new(0.0, 1.0, 0.0),
//!     ],
//!     surf,
//! );
//!
//! let (out, summary) = normalize_mesh(&mesh, &UnifyParams::default())?;
//! println!("{summary}");
//! assert_eq!(out, mesh);
//! # Ok::<(), mesh_repair::RepairError>(())
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod dedup;
mod error;
mod params;
mod remap;
mod repair;
mod split;
mod unify;
mod union_find;
mod unused;

pub use dedup::remove_duplicate_facets;
pub use error::{RepairError, RepairResult};
pub use params::UnifyParams;
pub use repair::{NormalizeSummary, normalize_mesh};
pub use split::split_surfs_by_uvs;
pub use unify::{unify_identical_uvs, unify_identical_verts};
pub use unused::remove_unused_verts;
