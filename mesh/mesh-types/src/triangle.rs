//! Triangle type and barycentric helpers.

use nalgebra::{Point2, Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A triangle with concrete vertex positions.
///
/// Winding is **counter-clockwise (CCW) when viewed from the front**
/// (normal points toward viewer).
///
/// # Example
///
/// ```
/// use mesh_types::{Triangle, Point3};
///
/// let tri = Triangle::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
///
/// let normal = tri.normal().unwrap();
/// assert!((normal.z - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle {
    /// First vertex.
    pub v0: Point3<f64>,
    /// Second vertex.
    pub v1: Point3<f64>,
    /// Third vertex.
    pub v2: Point3<f64>,
}

impl Triangle {
    /// Create a new triangle from three points.
    #[inline]
    #[must_use]
    pub const fn new(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) -> Self {
        Self { v0, v1, v2 }
    }

    /// Compute the (unnormalized) face normal via cross product.
    ///
    /// The magnitude equals twice the triangle's area, which makes the sum of
    /// these vectors over a vertex fan an area-weighted normal.
    #[inline]
    #[must_use]
    pub fn normal_unnormalized(&self) -> Vector3<f64> {
        let e1 = self.v1 - self.v0;
        let e2 = self.v2 - self.v0;
        e1.cross(&e2)
    }

    /// Compute the unit face normal.
    ///
    /// Returns `None` for degenerate triangles (zero area).
    #[must_use]
    pub fn normal(&self) -> Option<Vector3<f64>> {
        let n = self.normal_unnormalized();
        let len_sq = n.norm_squared();
        if len_sq > f64::EPSILON {
            Some(n / len_sq.sqrt())
        } else {
            None
        }
    }

    /// Evaluate the point with the given barycentric weights.
    ///
    /// Weights are not renormalized.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Triangle, Point3, Vector3};
    ///
    /// let tri = Triangle::new(
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(3.0, 0.0, 0.0),
    ///     Point3::new(0.0, 3.0, 0.0),
    /// );
    /// let centroid = tri.point_at(&Vector3::repeat(1.0 / 3.0));
    /// assert!((centroid.x - 1.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn point_at(&self, weights: &Vector3<f64>) -> Point3<f64> {
        Point3::from(
            self.v0.coords * weights.x + self.v1.coords * weights.y + self.v2.coords * weights.z,
        )
    }
}

/// Barycentric coordinates of `p` with respect to the 2D triangle `(a, b, c)`.
///
/// Returns `None` when the triangle is degenerate. The weights sum to one;
/// all three are non-negative exactly when `p` lies inside or on the boundary.
///
/// # Example
///
/// ```
/// use mesh_types::{barycentric_2d, Point2};
///
/// let w = barycentric_2d(
///     &Point2::new(0.25, 0.25),
///     &Point2::new(0.0, 0.0),
///     &Point2::new(1.0, 0.0),
///     &Point2::new(0.0, 1.0),
/// )
/// .unwrap();
/// assert!((w.x - 0.5).abs() < 1e-12);
/// assert!((w.y - 0.25).abs() < 1e-12);
/// assert!((w.z - 0.25).abs() < 1e-12);
/// ```
#[must_use]
pub fn barycentric_2d(
    p: &Point2<f64>,
    a: &Point2<f64>,
    b: &Point2<f64>,
    c: &Point2<f64>,
) -> Option<Vector3<f64>> {
    let v0 = b - a;
    let v1 = c - a;
    let v2 = p - a;
    let det = v0.x.mul_add(v1.y, -(v1.x * v0.y));
    if det.abs() <= f64::EPSILON * (v0.norm_squared() + v1.norm_squared()).max(f64::MIN_POSITIVE)
    {
        return None;
    }
    let w1 = v2.x.mul_add(v1.y, -(v1.x * v2.y)) / det;
    let w2 = v0.x.mul_add(v2.y, -(v2.x * v0.y)) / det;
    Some(Vector3::new(1.0 - w1 - w2, w1, w2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn triangle_normal() {
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
        );
        assert_relative_eq!(tri.normal_unnormalized().norm(), 4.0);
        let n = tri.normal();
        assert!(n.is_some());
        assert_relative_eq!(n.map_or(0.0, |n| n.z), 1.0);
    }

    #[test]
    fn degenerate_triangle_normal() {
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        );
        assert!(tri.normal().is_none());
    }

    #[test]
    fn point_at_vertices() {
        let tri = Triangle::new(
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(4.0, 5.0, 6.0),
            Point3::new(7.0, 8.0, 9.0),
        );
        assert_eq!(tri.point_at(&Vector3::x()), tri.v0);
        assert_eq!(tri.point_at(&Vector3::y()), tri.v1);
        assert_eq!(tri.point_at(&Vector3::z()), tri.v2);
    }

    #[test]
    fn barycentric_outside_has_negative_weight() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.0, 1.0);
        let w = barycentric_2d(&Point2::new(1.0, 1.0), &a, &b, &c);
        assert!(w.is_some_and(|w| w.x < 0.0));

        let w = barycentric_2d(&b, &a, &b, &c);
        assert!(w.is_some_and(|w| (w.y - 1.0).abs() < 1e-12));
    }

    #[test]
    fn barycentric_degenerate_is_none() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 1.0);
        let c = Point2::new(2.0, 2.0);
        assert!(barycentric_2d(&Point2::new(0.5, 0.5), &a, &b, &c).is_none());
    }
}
