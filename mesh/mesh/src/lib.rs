//! Surface mesh toolkit.
//!
//! This umbrella crate re-exports the mesh-* crates behind one dependency.
//! Every operator is a pure function over owned values: it takes a `&Mesh`
//! and returns a new mesh or vertex list.
//!
//! # Quick Start
//!
//! ```
//! use facetforge::prelude::*;
//!
//! // Build a few solids and place them in one mesh
//! let scene = merge_all(&[cube(false), create_sphere(0.5, 2)?, n_tent(6)?])?;
//!
//! // Weld coincident vertices and drop duplicates
//! let (clean, summary) = normalize_mesh(&scene, &UnifyParams::default())?;
//! assert!(clean.validate().is_ok());
//! println!("{summary}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Module Organization
//!
//! ## Foundation
//! - [`types`] - `Mesh`, `Surface`, `Morph`, `Image` and geometric helpers
//!
//! ## Construction
//! - [`build`] - Cube, tetrahedron, octahedron, pyramid, tents, spheres and
//!   depth-image surfaces
//!
//! ## Normalization
//! - [`repair`] - Duplicate facets, unused and identical vertices and UVs,
//!   UV island splitting
//!
//! ## Merging
//! - [`merge`] - Surface merges, mesh merges and same-name surface merges
//!
//! ## Texture Space
//! - [`uv`] - Masking facets by UV and rasterizing UV layouts
//!
//! ## Deformation
//! - [`morph`] - Morph expressions, vertex normals and embossing
//!
//! # Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` for every value type in [`types`]

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

// =============================================================================
// Re-exports
// =============================================================================

/// Mesh model: vertices, UVs, named surfaces, morphs and images.
pub use mesh_types as types;

/// Procedural constructors.
pub use mesh_build as build;

/// Topology normalizers.
pub use mesh_repair as repair;

/// Mesh and surface merging.
pub use mesh_merge as merge;

/// UV masking and rasterization.
pub use mesh_uv as uv;

/// Morph expressions and embossing.
pub use mesh_morph as morph;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for mesh processing.
///
/// # Usage
///
/// ```
/// use facetforge::prelude::*;
///
/// let tetra = tetrahedron(false);
/// assert_eq!(tetra.vert_count(), 4);
/// ```
pub mod prelude {
    // Core types
    pub use mesh_types::{
        Aabb, Image, Mesh, MeshBounds, MeshTopology, Morph, Point2, Point3, Rgba8, Surface,
        Vector3,
    };

    // Construction
    pub use mesh_build::{
        create_sphere, cube, mesh_from_image, n_tent, octahedron, pyramid, tetrahedron,
    };

    // Normalization
    pub use mesh_repair::{
        UnifyParams, normalize_mesh, remove_duplicate_facets, remove_unused_verts,
        split_surfs_by_uvs, unify_identical_uvs, unify_identical_verts,
    };

    // Merging
    pub use mesh_merge::{merge_all, merge_mesh_surfaces, merge_meshes};

    // Texture space
    pub use mesh_uv::{UvImageParams, mask_from_uvs, uv_image};

    // Deformation
    pub use mesh_morph::{EmbossParams, MorphWeight, apply_expression, emboss};
}

// =============================================================================
// Tests
// =============================================================================
