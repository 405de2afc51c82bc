//! Sampled 2D grids: depth maps, masks and textures.

use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Create a colour from its channels.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque grey with all colour channels set to `v`.
    #[inline]
    #[must_use]
    pub const fn grey(v: u8) -> Self {
        Self::new(v, v, v, 255)
    }

    /// Mean of the colour channels, in `0.0..=255.0`. Alpha is ignored.
    #[inline]
    #[must_use]
    pub fn luminance(&self) -> f64 {
        (f64::from(self.r) + f64::from(self.g) + f64::from(self.b)) / 3.0
    }
}

/// Pixel types that can be linearly interpolated for bilinear sampling.
pub trait Blend: Sized {
    /// Interpolate from `a` (at `t = 0`) to `b` (at `t = 1`).
    #[must_use]
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Blend for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        (b - a).mul_add(t, *a)
    }
}

impl Blend for f32 {
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: interpolation of two f32 values stays in f32 range
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        f64::lerp(&f64::from(*a), &f64::from(*b), t) as f32
    }
}

impl Blend for Rgba8 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    // Truncation: rounded and clamped to 0..=255 first
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        let ch = |x: u8, y: u8| {
            f64::lerp(&f64::from(x), &f64::from(y), t)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Self::new(ch(a.r, b.r), ch(a.g, b.g), ch(a.b, b.b), ch(a.a, b.a))
    }
}

/// A row-major grid of pixels. Row 0 is the top row.
///
/// UV coordinates map onto the image with `u` running left to right and
/// `v` running bottom to top, so `(0, 0)` is the bottom-left corner and
/// `(1, 1)` the top-right. See [`Image::uv_to_pixel`].
///
/// # Example
///
/// ```
/// use mesh_types::{Image, Point2};
///
/// let mut img = Image::new(2, 2, 0.0_f64);
/// img.set(0, 1, 1.0); // bottom-left
/// assert_eq!(img.sample_nearest(&Point2::new(0.1, 0.1)), Some(1.0));
/// assert_eq!(img.sample_nearest(&Point2::new(0.9, 0.9)), Some(0.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Image<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T> Image<T> {
    /// Wrap row-major pixel data.
    ///
    /// Returns `None` if `data.len() != width * height`.
    #[must_use]
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Option<Self> {
        (width.checked_mul(height)? == data.len()).then_some(Self {
            width,
            height,
            data,
        })
    }

    /// Build an image by evaluating `f(col, row)` for every pixel.
    #[must_use]
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                data.push(f(col, row));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Width in pixels.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether the image has no pixels.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Row-major pixel data.
    #[inline]
    #[must_use]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Consume the image, returning its row-major pixel data.
    #[inline]
    #[must_use]
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Pixel at `(col, row)`.
    #[inline]
    #[must_use]
    pub fn get(&self, col: usize, row: usize) -> Option<&T> {
        if col < self.width && row < self.height {
            self.data.get(row * self.width + col)
        } else {
            None
        }
    }

    /// Overwrite the pixel at `(col, row)`. Returns `false` when out of range.
    pub fn set(&mut self, col: usize, row: usize, value: T) -> bool {
        if col >= self.width || row >= self.height {
            return false;
        }
        match self.data.get_mut(row * self.width + col) {
            Some(px) => {
                *px = value;
                true
            }
            None => false,
        }
    }

    /// Continuous pixel-space position of a UV coordinate.
    ///
    /// The image spans `[0, W] × [0, H]`; pixel `(c, r)` has its centre at
    /// `(c + 0.5, r + 0.5)`.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn uv_to_pixel(&self, uv: &Point2<f64>) -> Point2<f64> {
        Point2::new(uv.x * self.width as f64, (1.0 - uv.y) * self.height as f64)
    }

    /// UV coordinate of the centre of pixel `(col, row)`.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn pixel_center_uv(&self, col: usize, row: usize) -> Point2<f64> {
        Point2::new(
            (col as f64 + 0.5) / self.width as f64,
            1.0 - (row as f64 + 0.5) / self.height as f64,
        )
    }

    /// Pixel containing the UV coordinate, clamped to the image.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    // Truncation: floor of a value clamped to the image extent
    fn nearest_index(&self, uv: &Point2<f64>) -> Option<(usize, usize)> {
        if self.is_empty() || !uv.x.is_finite() || !uv.y.is_finite() {
            return None;
        }
        let p = self.uv_to_pixel(uv);
        let col = p.x.floor().clamp(0.0, (self.width - 1) as f64) as usize;
        let row = p.y.floor().clamp(0.0, (self.height - 1) as f64) as usize;
        Some((col, row))
    }
}

impl<T: Clone> Image<T> {
    /// Create an image with every pixel set to `fill`.
    #[must_use]
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            data: vec![fill; width * height],
        }
    }

    /// Nearest-pixel sample at a UV coordinate, clamped to the border.
    ///
    /// Returns `None` for an empty image or non-finite coordinates.
    #[must_use]
    pub fn sample_nearest(&self, uv: &Point2<f64>) -> Option<T> {
        let (col, row) = self.nearest_index(uv)?;
        self.get(col, row).cloned()
    }
}

impl<T: Blend + Clone> Image<T> {
    /// Bilinear sample between pixel centres at a UV coordinate, clamped to
    /// the border.
    ///
    /// Returns `None` for an empty image or non-finite coordinates.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Image, Point2};
    ///
    /// let img = Image::from_vec(2, 1, vec![0.0_f64, 10.0]).unwrap();
    /// let mid = img.sample_bilinear(&Point2::new(0.5, 0.5)).unwrap();
    /// assert!((mid - 5.0).abs() < 1e-12);
    /// ```
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    // Truncation: floor of a value clamped to the image extent
    pub fn sample_bilinear(&self, uv: &Point2<f64>) -> Option<T> {
        if self.is_empty() || !uv.x.is_finite() || !uv.y.is_finite() {
            return None;
        }
        let p = self.uv_to_pixel(uv);
        let x = (p.x - 0.5).clamp(0.0, (self.width - 1) as f64);
        let y = (p.y - 0.5).clamp(0.0, (self.height - 1) as f64);
        let c0 = x.floor() as usize;
        let r0 = y.floor() as usize;
        let c1 = (c0 + 1).min(self.width - 1);
        let r1 = (r0 + 1).min(self.height - 1);
        let tx = x - x.floor();
        let ty = y - y.floor();

        let top = T::lerp(self.get(c0, r0)?, self.get(c1, r0)?, tx);
        let bottom = T::lerp(self.get(c0, r1)?, self.get(c1, r1)?, tx);
        Some(T::lerp(&top, &bottom, ty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn from_vec_checks_length() {
        assert!(Image::from_vec(2, 2, vec![0u8; 4]).is_some());
        assert!(Image::from_vec(2, 2, vec![0u8; 3]).is_none());
    }

    #[test]
    fn uv_origin_is_bottom_left() {
        let img = Image::from_fn(4, 2, |c, r| (c, r));
        assert_eq!(img.sample_nearest(&Point2::new(0.0, 0.0)), Some((0, 1)));
        assert_eq!(img.sample_nearest(&Point2::new(1.0, 1.0)), Some((3, 0)));
        assert_eq!(img.sample_nearest(&Point2::new(0.6, 0.9)), Some((2, 0)));
    }

    #[test]
    fn nearest_clamps_out_of_range() {
        let img = Image::from_fn(3, 3, |c, r| c + 3 * r);
        assert_eq!(img.sample_nearest(&Point2::new(-5.0, 5.0)), Some(0));
        assert_eq!(img.sample_nearest(&Point2::new(5.0, -5.0)), Some(8));
        assert_eq!(img.sample_nearest(&Point2::new(f64::NAN, 0.0)), None);
    }

    #[test]
    fn pixel_center_round_trip() {
        let img = Image::new(5, 3, false);
        let uv = img.pixel_center_uv(4, 0);
        assert_relative_eq!(uv.x, 0.9, epsilon = 1e-12);
        assert_relative_eq!(uv.y, 1.0 - 0.5 / 3.0, epsilon = 1e-12);
        let p = img.uv_to_pixel(&uv);
        assert_relative_eq!(p.x, 4.5, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn bilinear_interpolates_rows() {
        // top row 0, bottom row 100
        let img = Image::from_vec(1, 2, vec![0.0_f64, 100.0]).unwrap_or_default();
        let mid = img.sample_bilinear(&Point2::new(0.5, 0.5));
        assert_relative_eq!(mid.unwrap_or(f64::NAN), 50.0);
        let top = img.sample_bilinear(&Point2::new(0.5, 1.0));
        assert_relative_eq!(top.unwrap_or(f64::NAN), 0.0);
    }

    #[test]
    fn rgba_blend_and_luminance() {
        let c = Rgba8::lerp(&Rgba8::BLACK, &Rgba8::WHITE, 0.5);
        assert_eq!(c, Rgba8::new(128, 128, 128, 255));
        assert_relative_eq!(Rgba8::new(30, 60, 90, 0).luminance(), 60.0);
    }

    #[test]
    fn empty_image_samples_nothing() {
        let img: Image<f64> = Image::new(0, 4, 0.0);
        assert!(img.is_empty());
        assert_eq!(img.sample_nearest(&Point2::new(0.5, 0.5)), None);
        assert_eq!(img.sample_bilinear(&Point2::new(0.5, 0.5)), None);
    }
}
