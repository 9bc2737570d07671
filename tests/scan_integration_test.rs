//! End-to-end scans over complete objects
//!
//! Covers the detector contracts the host relies on: exact issue counts for
//! known geometry, the fixed aggregation order, idempotent re-scans, and the
//! skip-and-report behavior for malformed objects.

use meshlint::{
    Edge, ElementRef, Face, IssueKind, Mesh, MeshObject, ScanConfig, Scanner, Severity, Transform,
    UvChannel, UvChannelSet, Vertex,
};

/// A clean unit quad with full UV coverage: scans without any issue
fn clean_object(name: &str) -> MeshObject {
    let mut mesh = Mesh::new();
    mesh.vertices.push(Vertex::new(0.0, 0.0, 0.0));
    mesh.vertices.push(Vertex::new(1.0, 0.0, 0.0));
    mesh.vertices.push(Vertex::new(1.0, 1.0, 0.0));
    mesh.vertices.push(Vertex::new(0.0, 1.0, 0.0));
    mesh.faces.push(Face::quad(0, 1, 2, 3));

    let mut object = MeshObject::new(name, mesh);
    object.uv_channels = UvChannelSet::from_channels(vec![UvChannel::full("UVMap", 1)]);
    object
}

#[test]
fn test_clean_object_has_no_issues() {
    let report = Scanner::new().scan(&[clean_object("Tile")]);
    assert_eq!(report.total_count(), 0);
    assert!(!report.has_errors());
    assert_eq!(report.objects, vec!["Tile"]);
}

#[test]
fn test_pentagon_among_triangles_yields_one_ngon() {
    // Nine consistently wound triangles in a fan, plus one pentagon
    let mut mesh = Mesh::new();
    mesh.vertices.push(Vertex::new(0.0, 0.0, 0.0));
    for i in 0..10 {
        let angle = i as f64 * 0.5;
        mesh.vertices
            .push(Vertex::new(angle.cos(), angle.sin(), 0.0));
    }
    for i in 1..10 {
        mesh.faces.push(Face::triangle(0, i, i + 1));
    }
    let base = mesh.vertices.len();
    for i in 0..5 {
        let angle = i as f64 * std::f64::consts::TAU / 5.0;
        mesh.vertices
            .push(Vertex::new(10.0 + angle.cos(), angle.sin(), 0.0));
    }
    mesh.faces
        .push(Face::new(vec![base, base + 1, base + 2, base + 3, base + 4]));

    let mut object = MeshObject::new("Fan", mesh);
    object.uv_channels = UvChannelSet::from_channels(vec![UvChannel::full("UVMap", 10)]);

    let report = Scanner::new().scan(&[object]);
    let ngons: Vec<_> = report.issues_with_kind(IssueKind::Ngon).collect();
    assert_eq!(ngons.len(), 1);
    assert_eq!(ngons[0].element, ElementRef::Face(9));
    assert_eq!(report.issues_with_kind(IssueKind::FlippedFace).count(), 0);
}

#[test]
fn test_loose_counts_match_unreferenced_elements() {
    // A triangle plus a free-floating edge: both edge endpoints and the
    // edge itself are loose, nothing else.
    let mut mesh = Mesh::new();
    mesh.vertices.push(Vertex::new(0.0, 0.0, 0.0));
    mesh.vertices.push(Vertex::new(1.0, 0.0, 0.0));
    mesh.vertices.push(Vertex::new(0.0, 1.0, 0.0));
    mesh.vertices.push(Vertex::new(5.0, 0.0, 0.0));
    mesh.vertices.push(Vertex::new(6.0, 0.0, 0.0));
    mesh.faces.push(Face::triangle(0, 1, 2));
    mesh.edges.push(Edge::new(3, 4));

    let mut object = MeshObject::new("Wire", mesh);
    object.uv_channels = UvChannelSet::from_channels(vec![UvChannel::full("UVMap", 1)]);

    let report = Scanner::new().scan(&[object]);
    assert_eq!(report.issues_with_kind(IssueKind::LooseVertex).count(), 2);
    assert_eq!(report.issues_with_kind(IssueKind::LooseEdge).count(), 1);
    assert_eq!(report.total_count(), 3);
}

#[test]
fn test_transform_audit_matrix() {
    let cases: Vec<(Transform, Vec<IssueKind>)> = vec![
        (Transform::with_scale(1.0, 1.0, 1.0), vec![]),
        (
            Transform::with_scale(1.0, 2.0, 1.0),
            vec![IssueKind::NonUniformScale],
        ),
        (
            Transform::with_scale(-1.0, 1.0, 1.0),
            vec![IssueKind::NegativeScale],
        ),
        (
            Transform::with_scale(-1.0, -1.0, 1.0),
            vec![IssueKind::NegativeScale],
        ),
        (
            Transform::with_scale(3.0, 3.0, 3.0),
            vec![IssueKind::UnappliedTransform],
        ),
    ];

    for (transform, expected) in cases {
        let mut object = clean_object("Probe");
        object.transform = transform;
        let issues = Scanner::new().scan_one(&object).expect("valid snapshot");
        let kinds: Vec<_> = issues.iter().map(|i| i.kind).collect();
        assert_eq!(kinds, expected, "transform {:?}", object.transform);
    }
}

#[test]
fn test_uv_audit_cases() {
    let mut bare = clean_object("Bare");
    bare.uv_channels = UvChannelSet::new();

    let mut crowded = clean_object("Crowded");
    crowded.uv_channels = UvChannelSet::from_channels(vec![
        UvChannel::full("UVMap", 1),
        UvChannel::full("Lightmap", 1),
        UvChannel::full("Detail", 1),
    ]);

    let report = Scanner::new().scan(&[bare, crowded]);

    let missing: Vec<_> = report.issues_with_kind(IssueKind::MissingUv).collect();
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].object, "Bare");
    assert_eq!(missing[0].severity, Severity::Error);

    let excess: Vec<_> = report.issues_with_kind(IssueKind::ExcessUvMaps).collect();
    assert_eq!(excess.len(), 1);
    assert_eq!(excess[0].object, "Crowded");
    assert!(excess[0].message.contains('3'));
}

#[test]
fn test_rescan_replaces_report_wholesale() {
    let mut object = clean_object("Crate");
    object.transform = Transform::with_scale(1.0, 2.0, 1.0);
    let scanner = Scanner::new();

    let first = scanner.scan(std::slice::from_ref(&object));
    let second = scanner.scan(std::slice::from_ref(&object));
    assert_eq!(first, second);

    // Fixing the object between scans leaves no stale issues behind
    object.transform = Transform::identity();
    let third = scanner.scan(std::slice::from_ref(&object));
    assert_eq!(third.total_count(), 0);
}

#[test]
fn test_malformed_object_does_not_poison_the_scene() {
    let mut bad_mesh = Mesh::new();
    bad_mesh.vertices.push(Vertex::new(0.0, 0.0, 0.0));
    bad_mesh.vertices.push(Vertex::new(1.0, 0.0, 0.0));
    bad_mesh.faces.push(Face::triangle(0, 1, 7));
    let bad = MeshObject::new("Corrupt", bad_mesh);

    let mut dirty = clean_object("Dirty");
    dirty.transform = Transform::with_scale(-1.0, 1.0, 1.0);

    let report = Scanner::new().scan(&[bad, dirty, clean_object("Clean")]);
    assert_eq!(report.objects.len(), 3);

    let corrupt: Vec<_> = report.issues_for_object("Corrupt").collect();
    assert_eq!(corrupt.len(), 1);
    assert_eq!(corrupt[0].kind, IssueKind::MalformedMesh);
    assert_eq!(corrupt[0].severity, Severity::Error);

    assert_eq!(report.issues_for_object("Dirty").count(), 1);
    assert_eq!(report.issues_for_object("Clean").count(), 0);
}

#[test]
fn test_small_faces_reported_and_suppressible() {
    let mut mesh = Mesh::new();
    mesh.vertices.push(Vertex::new(0.0, 0.0, 0.0));
    mesh.vertices.push(Vertex::new(1.0, 0.0, 0.0));
    mesh.vertices.push(Vertex::new(0.0, 1.0, 0.0));
    mesh.vertices.push(Vertex::new(1e-4, 1e-4, 0.0));
    mesh.faces.push(Face::triangle(0, 1, 2));
    mesh.faces.push(Face::triangle(0, 3, 1));

    let mut object = MeshObject::new("Sliver", mesh);
    object.uv_channels = UvChannelSet::from_channels(vec![UvChannel::full("UVMap", 2)]);

    let default_issues = Scanner::new().scan_one(&object).expect("valid snapshot");
    let small: Vec<_> = default_issues
        .iter()
        .filter(|i| i.kind == IssueKind::SmallFace)
        .collect();
    assert_eq!(small.len(), 1);
    assert_eq!(small[0].element, ElementRef::Face(1));
    assert_eq!(small[0].severity, Severity::Info);

    let quiet = Scanner::with_config(ScanConfig::new().with_small_face_reports(false));
    let issues = quiet.scan_one(&object).expect("valid snapshot");
    assert!(issues.iter().all(|i| i.kind != IssueKind::SmallFace));
}
