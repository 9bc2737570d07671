//! Example: scanning a small scene for export problems
//!
//! Builds two objects the way a host adapter would — a crate with one
//! flipped face and an unwrapped ground plane with a stretched transform —
//! then runs a scan and prints the report grouped by severity.

use meshlint::{
    Face, Mesh, MeshObject, Scanner, Severity, Transform, UvChannel, UvChannelSet, Vertex,
};

fn build_crate() -> MeshObject {
    let mut mesh = Mesh::new();
    mesh.vertices.push(Vertex::new(0.0, 0.0, 0.0));
    mesh.vertices.push(Vertex::new(10.0, 0.0, 0.0));
    mesh.vertices.push(Vertex::new(10.0, 10.0, 0.0));
    mesh.vertices.push(Vertex::new(0.0, 10.0, 0.0));
    mesh.vertices.push(Vertex::new(0.0, 0.0, 10.0));
    mesh.vertices.push(Vertex::new(10.0, 0.0, 10.0));
    mesh.vertices.push(Vertex::new(10.0, 10.0, 10.0));
    mesh.vertices.push(Vertex::new(0.0, 10.0, 10.0));
    mesh.faces.push(Face::quad(0, 3, 2, 1));
    // Flipped on purpose: the top quad points into the box
    mesh.faces.push(Face::quad(7, 6, 5, 4));
    mesh.faces.push(Face::quad(0, 1, 5, 4));
    mesh.faces.push(Face::quad(1, 2, 6, 5));
    mesh.faces.push(Face::quad(2, 3, 7, 6));
    mesh.faces.push(Face::quad(3, 0, 4, 7));

    let mut object = MeshObject::new("Crate", mesh);
    object.uv_channels = UvChannelSet::from_channels(vec![UvChannel::full("UVMap", 6)]);
    object
}

fn build_ground() -> MeshObject {
    let mut mesh = Mesh::new();
    mesh.vertices.push(Vertex::new(-50.0, -50.0, 0.0));
    mesh.vertices.push(Vertex::new(50.0, -50.0, 0.0));
    mesh.vertices.push(Vertex::new(50.0, 50.0, 0.0));
    mesh.vertices.push(Vertex::new(-50.0, 50.0, 0.0));
    mesh.faces.push(Face::quad(0, 1, 2, 3));

    let mut object = MeshObject::new("Ground", mesh);
    object.transform = Transform::with_scale(1.0, 2.5, 1.0);
    object
}

fn main() {
    let objects = vec![build_crate(), build_ground()];

    let scanner = Scanner::new();
    let report = scanner.scan(&objects);

    println!("Scanned {} objects", report.objects.len());
    println!(
        "  {} errors, {} warnings, {} infos",
        report.error_count(),
        report.warning_count(),
        report.info_count()
    );
    println!();

    for severity in [Severity::Error, Severity::Warning, Severity::Info] {
        let issues: Vec<_> = report.issues_with_severity(severity).collect();
        if issues.is_empty() {
            continue;
        }
        println!("{}:", severity);
        for issue in issues {
            println!(
                "  [{}] {}: {}",
                issue.object,
                issue.kind.name(),
                issue.message
            );
            println!("      hint: {}", issue.hint);
        }
        println!();
    }

    if report.has_errors() {
        println!("This scene is not ready for export.");
    } else {
        println!("No blocking issues found.");
    }
}
