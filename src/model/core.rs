//! Core mesh snapshot types

use nalgebra::{Point3, Vector3};

use super::uv::UvChannelSet;

/// A vertex position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,
}

impl Vertex {
    /// Create a new vertex
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The vertex position as a nalgebra point
    pub fn point(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }
}

/// An explicit edge record between two vertices
///
/// Hosts keep edge records even when no face uses them, which is exactly the
/// case the loose-geometry detector looks for. Edges implied by face rings do
/// not need to be listed here; the topology index derives those itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Index of the first vertex
    pub v1: usize,
    /// Index of the second vertex
    pub v2: usize,
}

impl Edge {
    /// Create a new edge
    pub fn new(v1: usize, v2: usize) -> Self {
        Self { v1, v2 }
    }
}

/// A polygonal face described by an ordered vertex ring
///
/// The ring order is the face's winding and determines its normal direction.
/// Rings must have at least 3 distinct vertices; shorter or repeating rings
/// are rejected when the topology index is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    /// Ordered vertex indices forming the ring
    pub vertices: Vec<usize>,
}

impl Face {
    /// Create a face from an ordered vertex ring
    pub fn new(vertices: Vec<usize>) -> Self {
        Self { vertices }
    }

    /// Create a triangular face
    pub fn triangle(v1: usize, v2: usize, v3: usize) -> Self {
        Self {
            vertices: vec![v1, v2, v3],
        }
    }

    /// Create a quadrilateral face
    pub fn quad(v1: usize, v2: usize, v3: usize, v4: usize) -> Self {
        Self {
            vertices: vec![v1, v2, v3, v4],
        }
    }

    /// Number of vertices in the ring
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the ring is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate the ring's edges as ordered (from, to) vertex pairs
    pub fn ring_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}

/// A mesh snapshot: vertices, explicit edges and polygonal faces
///
/// Immutable for the duration of one analysis pass. The engine only ever
/// reads it; re-scanning requires the host to hand over a fresh snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// List of vertices
    pub vertices: Vec<Vertex>,
    /// List of explicit edge records
    pub edges: Vec<Edge>,
    /// List of faces
    pub faces: Vec<Face>,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a new mesh with pre-allocated capacity
    ///
    /// Useful when the host adapter knows the element counts in advance,
    /// as it avoids repeated reallocation while copying the snapshot.
    pub fn with_capacity(vertices: usize, edges: usize, faces: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            edges: Vec::with_capacity(edges),
            faces: Vec::with_capacity(faces),
        }
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

/// An object-level transform as read from the host scene graph
///
/// Analyzed, never modified. Rotation is an XYZ Euler triple in radians,
/// matching the representation hosts expose for unapplied transforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Translation component
    pub translation: Vector3<f64>,
    /// Rotation component (XYZ Euler, radians)
    pub rotation: Vector3<f64>,
    /// Per-axis scale component
    pub scale: Vector3<f64>,
}

impl Transform {
    /// Create a transform from its components
    pub fn new(translation: Vector3<f64>, rotation: Vector3<f64>, scale: Vector3<f64>) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// The identity transform: no translation, no rotation, unit scale
    pub fn identity() -> Self {
        Self {
            translation: Vector3::zeros(),
            rotation: Vector3::zeros(),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    /// Create an identity transform with the given per-axis scale
    pub fn with_scale(x: f64, y: f64, z: f64) -> Self {
        Self {
            scale: Vector3::new(x, y, z),
            ..Self::identity()
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// One object as handed over by the host adapter: mesh, transform, UV state
#[derive(Debug, Clone, PartialEq)]
pub struct MeshObject {
    /// Host-side object identifier, echoed back in every issue
    pub name: String,
    /// The mesh snapshot
    pub mesh: Mesh,
    /// The object-level transform
    pub transform: Transform,
    /// The object's UV channels
    pub uv_channels: UvChannelSet,
}

impl MeshObject {
    /// Create an object with an identity transform and no UV channels
    pub fn new(name: impl Into<String>, mesh: Mesh) -> Self {
        Self {
            name: name.into(),
            mesh,
            transform: Transform::identity(),
            uv_channels: UvChannelSet::new(),
        }
    }
}
