//! Parameters for UV rasterization.

use mesh_types::Rgba8;

/// Default side length of a generated UV image without a texture.
pub const DEFAULT_UV_IMAGE_SIZE: usize = 512;

/// Parameters for [`uv_image`](crate::uv_image).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UvImageParams {
    /// Side length of the output when no texture is given.
    pub size: usize,
    /// Colour of covered pixels when no texture is given.
    pub fill: Rgba8,
    /// Colour of pixels no facet covers.
    pub background: Rgba8,
}

impl Default for UvImageParams {
    fn default() -> Self {
        Self {
            size: DEFAULT_UV_IMAGE_SIZE,
            fill: Rgba8::WHITE,
            background: Rgba8::BLACK,
        }
    }
}

impl UvImageParams {
    /// Set the output side length used without a texture.
    #[must_use]
    pub const fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the colour of covered pixels.
    #[must_use]
    pub const fn with_fill(mut self, fill: Rgba8) -> Self {
        self.fill = fill;
        self
    }

    /// Set the colour of uncovered pixels.
    #[must_use]
    pub const fn with_background(mut self, background: Rgba8) -> Self {
        self.background = background;
        self
    }
}
