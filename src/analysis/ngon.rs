//! N-gon detection

use crate::issue::{ElementRef, Issue, IssueKind, Severity};
use crate::model::Mesh;

/// Find faces with more than 4 vertices
///
/// Real-time engines triangulate on import; n-gons make that triangulation
/// unpredictable, so they are flagged before export. O(faces), ascending
/// face index.
pub fn find_ngons(mesh: &Mesh, object: &str) -> Vec<Issue> {
    mesh.faces
        .iter()
        .enumerate()
        .filter(|(_, face)| face.len() > 4)
        .map(|(face_idx, face)| {
            Issue::new(
                object,
                IssueKind::Ngon,
                Severity::Warning,
                ElementRef::Face(face_idx),
                format!("Face {} has {} vertices", face_idx, face.len()),
                "Triangulate the face before export",
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Face, Vertex};

    #[test]
    fn test_pentagon_flagged_quad_and_triangle_not() {
        let mut mesh = Mesh::new();
        for i in 0..9 {
            mesh.vertices.push(Vertex::new(i as f64, 0.0, 0.0));
        }
        mesh.faces.push(Face::triangle(0, 1, 2));
        mesh.faces.push(Face::quad(0, 1, 2, 3));
        mesh.faces.push(Face::new(vec![0, 1, 2, 3, 4]));

        let issues = find_ngons(&mesh, "Panel");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].element, ElementRef::Face(2));
        assert!(issues[0].message.contains("5 vertices"));
    }
}
