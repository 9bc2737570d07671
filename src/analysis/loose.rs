//! Loose-geometry detection

use crate::issue::{ElementRef, Issue, IssueKind, Severity};
use crate::model::Mesh;
use crate::topology::TopologyIndex;

/// Find vertices and edges that are not part of any face
///
/// A vertex is loose when no face is incident to it; an explicit edge record
/// is loose when no face uses its vertex pair. The two conditions are
/// independent: an edge can exist without a face while its endpoints are
/// shared with faces elsewhere. Issues come out in ascending element index,
/// vertices before edges.
pub fn find_loose_geometry(mesh: &Mesh, topology: &TopologyIndex, object: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    for vertex_idx in 0..mesh.vertices.len() {
        if topology.faces_of_vertex(vertex_idx).is_empty() {
            issues.push(Issue::new(
                object,
                IssueKind::LooseVertex,
                Severity::Warning,
                ElementRef::Vertex(vertex_idx),
                format!("Vertex {} is not part of any face", vertex_idx),
                "Delete loose geometry or build faces from it",
            ));
        }
    }

    for (edge_idx, edge) in mesh.edges.iter().enumerate() {
        if topology.incident_face_count(edge.v1, edge.v2) == 0 {
            issues.push(Issue::new(
                object,
                IssueKind::LooseEdge,
                Severity::Warning,
                ElementRef::Edge(edge_idx),
                format!(
                    "Edge {} (vertices {}-{}) is not part of any face",
                    edge_idx, edge.v1, edge.v2
                ),
                "Delete loose geometry or build faces from it",
            ));
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Edge, Face, Vertex};

    #[test]
    fn test_free_edge_and_triangle() {
        // One triangle plus a free-floating edge: the edge itself and both of
        // its endpoints are loose.
        let mut mesh = Mesh::new();
        mesh.vertices.push(Vertex::new(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::new(1.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::new(0.0, 1.0, 0.0));
        mesh.vertices.push(Vertex::new(3.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::new(4.0, 0.0, 0.0));
        mesh.faces.push(Face::triangle(0, 1, 2));
        mesh.edges.push(Edge::new(3, 4));

        let topology = TopologyIndex::build(&mesh).unwrap();
        let issues = find_loose_geometry(&mesh, &topology, "Strut");

        assert_eq!(issues.len(), 3);
        assert_eq!(issues[0].kind, IssueKind::LooseVertex);
        assert_eq!(issues[0].element, ElementRef::Vertex(3));
        assert_eq!(issues[1].element, ElementRef::Vertex(4));
        assert_eq!(issues[2].kind, IssueKind::LooseEdge);
        assert_eq!(issues[2].element, ElementRef::Edge(0));
    }

    #[test]
    fn test_isolated_vertices_only() {
        let mut mesh = Mesh::new();
        mesh.vertices.push(Vertex::new(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::new(1.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::new(2.0, 0.0, 0.0));

        let topology = TopologyIndex::build(&mesh).unwrap();
        let issues = find_loose_geometry(&mesh, &topology, "Dust");

        assert_eq!(issues.len(), 3);
        assert!(issues.iter().all(|i| i.kind == IssueKind::LooseVertex));
        assert!(issues.iter().all(|i| i.severity == Severity::Warning));
    }

    #[test]
    fn test_edge_used_by_face_is_not_loose() {
        let mut mesh = Mesh::new();
        mesh.vertices.push(Vertex::new(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::new(1.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::new(0.0, 1.0, 0.0));
        mesh.faces.push(Face::triangle(0, 1, 2));
        // Explicit record for an edge the triangle already uses
        mesh.edges.push(Edge::new(0, 1));

        let topology = TopologyIndex::build(&mesh).unwrap();
        let issues = find_loose_geometry(&mesh, &topology, "Plate");
        assert!(issues.is_empty());
    }
}
