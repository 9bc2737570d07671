//! Adjacency structures derived from a mesh snapshot
//!
//! A [`TopologyIndex`] is built once per analysis pass and discarded with it.
//! Building it is also where the mesh snapshot is validated: every detector
//! downstream may assume face rings have at least 3 distinct, in-range
//! vertices and edge records reference existing vertices.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::model::Mesh;

/// Canonical, direction-independent key for an edge between two vertices
pub(crate) fn edge_key(a: usize, b: usize) -> (usize, usize) {
    (a.min(b), a.max(b))
}

/// Read-only vertex/edge/face adjacency for one mesh snapshot
///
/// Edges are keyed by their canonical (min, max) vertex pair, so an edge
/// implied by a face ring and an explicit edge record between the same
/// vertices count as the same edge. An edge with more than 2 incident faces
/// is non-manifold; the index records it as-is and leaves interpretation to
/// the detectors.
#[derive(Debug)]
pub struct TopologyIndex {
    edge_faces: HashMap<(usize, usize), Vec<usize>>,
    face_neighbors: Vec<Vec<usize>>,
    vertex_faces: Vec<Vec<usize>>,
    vertex_edges: Vec<Vec<usize>>,
}

impl TopologyIndex {
    /// Build the adjacency index for a mesh snapshot
    ///
    /// Fails with [`Error::MalformedMesh`] when a face ring has fewer than 3
    /// vertices, repeats a vertex, or references an out-of-range vertex, and
    /// when an explicit edge record is degenerate or out of range.
    pub fn build(mesh: &Mesh) -> Result<Self> {
        let num_vertices = mesh.vertices.len();

        for (face_idx, face) in mesh.faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(Error::degenerate_face(
                    face_idx,
                    &format!("ring has only {} vertices", face.len()),
                ));
            }
            for &v in &face.vertices {
                if v >= num_vertices {
                    return Err(Error::face_vertex_out_of_bounds(face_idx, v, num_vertices));
                }
            }
            let ring = &face.vertices;
            for i in 0..ring.len() {
                for j in (i + 1)..ring.len() {
                    if ring[i] == ring[j] {
                        return Err(Error::degenerate_face(
                            face_idx,
                            &format!("vertex {} appears more than once in the ring", ring[i]),
                        ));
                    }
                }
            }
        }

        for (edge_idx, edge) in mesh.edges.iter().enumerate() {
            if edge.v1 >= num_vertices || edge.v2 >= num_vertices {
                return Err(Error::invalid_edge(
                    edge_idx,
                    &format!(
                        "references vertices {}-{} but the mesh has {} vertices",
                        edge.v1, edge.v2, num_vertices
                    ),
                ));
            }
            if edge.v1 == edge.v2 {
                return Err(Error::invalid_edge(edge_idx, "both endpoints are the same vertex"));
            }
        }

        // Each face contributes ring-length edges; adjacent faces share them,
        // so 2 per face is a comfortable over-estimate.
        let mut edge_faces: HashMap<(usize, usize), Vec<usize>> =
            HashMap::with_capacity(mesh.faces.len() * 2);
        let mut vertex_faces = vec![Vec::new(); num_vertices];

        for (face_idx, face) in mesh.faces.iter().enumerate() {
            for &v in &face.vertices {
                vertex_faces[v].push(face_idx);
            }
            for (a, b) in face.ring_edges() {
                edge_faces.entry(edge_key(a, b)).or_default().push(face_idx);
            }
        }

        let mut vertex_edges = vec![Vec::new(); num_vertices];
        for (edge_idx, edge) in mesh.edges.iter().enumerate() {
            vertex_edges[edge.v1].push(edge_idx);
            vertex_edges[edge.v2].push(edge_idx);
        }

        let mut face_neighbors = vec![Vec::new(); mesh.faces.len()];
        for (face_idx, face) in mesh.faces.iter().enumerate() {
            let mut neighbors = Vec::new();
            for (a, b) in face.ring_edges() {
                if let Some(incident) = edge_faces.get(&edge_key(a, b)) {
                    neighbors.extend(incident.iter().copied().filter(|&f| f != face_idx));
                }
            }
            neighbors.sort_unstable();
            neighbors.dedup();
            face_neighbors[face_idx] = neighbors;
        }

        Ok(Self {
            edge_faces,
            face_neighbors,
            vertex_faces,
            vertex_edges,
        })
    }

    /// Number of faces incident to the edge between `v1` and `v2`
    ///
    /// 0 means the edge exists only as an explicit record (or not at all),
    /// 1 a boundary edge, 2 an interior manifold edge, more than 2 a
    /// non-manifold edge.
    pub fn incident_face_count(&self, v1: usize, v2: usize) -> usize {
        self.edge_faces.get(&edge_key(v1, v2)).map_or(0, Vec::len)
    }

    /// Faces incident to the edge between `v1` and `v2`, in face-index order
    pub fn faces_of_edge(&self, v1: usize, v2: usize) -> &[usize] {
        self.edge_faces
            .get(&edge_key(v1, v2))
            .map_or(&[], Vec::as_slice)
    }

    /// Faces sharing at least one edge with `face`, sorted ascending
    pub fn face_neighbors(&self, face: usize) -> &[usize] {
        &self.face_neighbors[face]
    }

    /// Faces incident to a vertex, in face-index order
    pub fn faces_of_vertex(&self, vertex: usize) -> &[usize] {
        &self.vertex_faces[vertex]
    }

    /// Explicit edge records incident to a vertex, in edge-index order
    pub fn edges_of_vertex(&self, vertex: usize) -> &[usize] {
        &self.vertex_edges[vertex]
    }
}
