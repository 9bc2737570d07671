//! Small-face detection

use crate::config::ScanConfig;
use crate::geom;
use crate::issue::{ElementRef, Issue, IssueKind, Severity};
use crate::model::Mesh;

/// Find faces whose area is below the configured threshold
///
/// Tiny slivers survive modeling sessions unnoticed and then break
/// lightmap packing and collision cooking downstream. Reported at info
/// level; ascending face index.
pub fn find_small_faces(mesh: &Mesh, config: &ScanConfig, object: &str) -> Vec<Issue> {
    let threshold = config.small_face_area();
    let mut issues = Vec::new();
    for (face_idx, face) in mesh.faces.iter().enumerate() {
        let Some(area) = geom::face_area(mesh, face) else {
            continue;
        };
        if area < threshold {
            issues.push(Issue::new(
                object,
                IssueKind::SmallFace,
                Severity::Info,
                ElementRef::Face(face_idx),
                format!("Face {} has area {:.3e}", face_idx, area),
                "Merge nearby vertices or dissolve the face",
            ));
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Face, Vertex};

    #[test]
    fn test_sliver_flagged() {
        let mut mesh = Mesh::new();
        mesh.vertices.push(Vertex::new(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::new(1.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::new(0.0, 1.0, 0.0));
        mesh.vertices.push(Vertex::new(0.5, 1e-6, 0.0));
        mesh.faces.push(Face::triangle(0, 1, 2));
        mesh.faces.push(Face::triangle(0, 1, 3));

        let issues = find_small_faces(&mesh, &ScanConfig::new(), "Shard");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].element, ElementRef::Face(1));
        assert_eq!(issues[0].severity, Severity::Info);
    }

    #[test]
    fn test_threshold_is_configurable() {
        let mut mesh = Mesh::new();
        mesh.vertices.push(Vertex::new(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::new(1.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::new(0.0, 1.0, 0.0));
        mesh.faces.push(Face::triangle(0, 1, 2));

        // Area 0.5 sits below a threshold of 1.0
        let config = ScanConfig::new().with_small_face_area(1.0);
        let issues = find_small_faces(&mesh, &config, "Shard");
        assert_eq!(issues.len(), 1);
    }
}
