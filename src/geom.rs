//! Polygon geometry helpers using nalgebra
//!
//! Centroids, Newell normals and areas for the polygonal faces the analysis
//! engine works with. All helpers return `None` instead of panicking when a
//! face references a vertex that does not exist, so they are safe to call on
//! unvalidated snapshots; the engine itself always validates first via
//! [`TopologyIndex::build`](crate::TopologyIndex::build).

use nalgebra::{Point3, Vector3};

use crate::model::{Face, Mesh};

/// Below this Newell-vector length a face is too degenerate to orient
pub(crate) const DEGENERATE_NORMAL_EPS: f64 = 1e-12;

/// Compute the unnormalized Newell vector of a face ring
///
/// The vector points along the face normal by the right-hand rule of the
/// ring's winding and its length is twice the face area. Works for any
/// planar or near-planar polygon, unlike a single cross product.
///
/// Returns `None` if the ring references an out-of-range vertex.
pub fn newell_vector(mesh: &Mesh, face: &Face) -> Option<Vector3<f64>> {
    let mut n = Vector3::zeros();
    for (a, b) in face.ring_edges() {
        let va = mesh.vertices.get(a)?;
        let vb = mesh.vertices.get(b)?;
        n.x += (va.y - vb.y) * (va.z + vb.z);
        n.y += (va.z - vb.z) * (va.x + vb.x);
        n.z += (va.x - vb.x) * (va.y + vb.y);
    }
    Some(n)
}

/// Compute the unit normal of a face ring
///
/// Returns `None` for out-of-range rings and for degenerate faces whose
/// Newell vector has (numerically) zero length — those faces cannot be
/// oriented at all.
///
/// # Example
///
/// ```
/// use meshlint::geom::face_normal;
/// use meshlint::{Face, Mesh, Vertex};
///
/// let mut mesh = Mesh::new();
/// mesh.vertices.push(Vertex::new(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::new(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::new(0.0, 1.0, 0.0));
/// let face = Face::triangle(0, 1, 2);
///
/// // Counter-clockwise seen from +Z, so the normal points up
/// let normal = face_normal(&mesh, &face).unwrap();
/// assert!((normal.z - 1.0).abs() < 1e-12);
/// ```
pub fn face_normal(mesh: &Mesh, face: &Face) -> Option<Vector3<f64>> {
    let n = newell_vector(mesh, face)?;
    let length = n.norm();
    if length < DEGENERATE_NORMAL_EPS {
        return None;
    }
    Some(n / length)
}

/// Compute the area of a face ring (half the Newell vector's length)
///
/// Returns `None` if the ring references an out-of-range vertex; a
/// degenerate face has area `0.0`.
pub fn face_area(mesh: &Mesh, face: &Face) -> Option<f64> {
    Some(newell_vector(mesh, face)?.norm() / 2.0)
}

/// Compute the centroid of a face ring (mean of its vertex positions)
pub fn face_centroid(mesh: &Mesh, face: &Face) -> Option<Point3<f64>> {
    vertex_centroid(mesh, &face.vertices)
}

/// Compute the unweighted centroid of a set of vertices
///
/// Returns `None` for an empty set or an out-of-range index.
pub fn vertex_centroid(mesh: &Mesh, vertices: &[usize]) -> Option<Point3<f64>> {
    if vertices.is_empty() {
        return None;
    }
    let mut sum = Vector3::zeros();
    for &v in vertices {
        sum += mesh.vertices.get(v)?.point().coords;
    }
    Some(Point3::from(sum / vertices.len() as f64))
}
