//! Texture-space operators.
//!
//! UVs map onto images with `u` running left to right over columns and `v`
//! running bottom to top over rows, so row 0 is the top of the image. A UV
//! lands at pixel-space position `(u·W, (1−v)·H)` and pixel centres sit at
//! half-integers. All operators here share that convention with
//! [`mesh_types::Image`].
//!
//! - [`mask_from_uvs`] keeps facets whose UVs all fall on a boolean mask
//! - [`uv_image`] paints a texture (or flat colour) through the UV layout
//! - [`uv_mask`] gives the boolean coverage of the UV layout
//!
//! # Example
//!
//! ```
//! use mesh_build::mesh_from_image;
//! use mesh_types::{Image, MeshTopology};
//! use mesh_uv::{mask_from_uvs, uv_mask};
//!
//! let terrain = mesh_from_image(&Image::from_fn(9, 9, |c, r| (c * r) as f64))?;
//! let coverage = uv_mask(&terrain, 32, 32)?;
//! let same = mask_from_uvs(&terrain, &coverage)?;
//! assert_eq!(same.facet_count(), terrain.facet_count());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod mask;
mod params;
mod raster;

pub use error::{UvError, UvResult};
pub use mask::mask_from_uvs;
pub use params::{DEFAULT_UV_IMAGE_SIZE, UvImageParams};
pub use raster::{uv_image, uv_mask};
