//! Per-vertex normals.

use mesh_types::{Mesh, Triangle, Vector3};

/// Area-weighted unit normal of every vertex.
///
/// Each tri-equivalent of every surface adds its unnormalized face normal
/// (length twice its area) to its three corners. Vertices touched by no
/// facet, or whose contributions cancel, get the zero vector.
///
/// # Example
///
/// ```
/// use mesh_build::cube;
/// use mesh_morph::vertex_normals;
///
/// let normals = vertex_normals(&cube(false));
/// // The (1, 1, 1) corner points out along the diagonal.
/// let n = normals[7];
/// assert!((n.x - n.y).abs() < 1e-12 && (n.y - n.z).abs() < 1e-12);
/// assert!(n.x > 0.0);
/// ```
#[must_use]
pub fn vertex_normals(mesh: &Mesh) -> Vec<Vector3<f64>> {
    let mut normals = vec![Vector3::zeros(); mesh.verts.len()];

    for surf in &mesh.surfaces {
        for corners in surf.vert_tris() {
            let [Some(a), Some(b), Some(c)] = corners.map(|i| mesh.verts.get(i as usize)) else {
                continue;
            };
            let weighted = Triangle::new(*a, *b, *c).normal_unnormalized();
            for i in corners {
                normals[i as usize] += weighted;
            }
        }
    }

    for normal in &mut normals {
        let len = normal.norm();
        if len > f64::EPSILON {
            *normal /= len;
        } else {
            *normal = Vector3::zeros();
        }
    }
    normals
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mesh_build::{create_sphere, octahedron};
    use mesh_types::{Point3, Surface};

    #[test]
    fn sphere_normals_are_radial() {
        let sphere = create_sphere(2.0, 2).unwrap();
        for (p, n) in sphere.verts.iter().zip(vertex_normals(&sphere)) {
            assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-12);
            assert!(n.dot(&p.coords.normalize()) > 0.9);
        }
    }

    #[test]
    fn octahedron_normals_follow_axes() {
        let normals = vertex_normals(&octahedron(false));
        assert_relative_eq!(normals[0], Vector3::x(), epsilon = 1e-12);
        assert_relative_eq!(normals[5], -Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn isolated_vertex_has_zero_normal() {
        let mut surf = Surface::new("");
        surf.tris.push([0, 1, 2]);
        let mesh = Mesh::from_surface(
            vec![
                Point3::origin(),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(5.0, 5.0, 5.0),
            ],
            surf,
        );
        let normals = vertex_normals(&mesh);
        assert_relative_eq!(normals[0], Vector3::z());
        assert_eq!(normals[3], Vector3::zeros());
    }

    #[test]
    fn quads_contribute_both_halves() {
        let mut surf = Surface::new("");
        surf.quads.push([0, 1, 2, 3]);
        let mesh = Mesh::from_surface(
            vec![
                Point3::origin(),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            surf,
        );
        for n in vertex_normals(&mesh) {
            assert_relative_eq!(n, Vector3::z());
        }
    }
}
