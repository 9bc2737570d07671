//! Face-orientation classification
//!
//! Orientation is judged per connected component of the face-adjacency
//! graph, because a single mesh can mix closed shells with open sheets:
//!
//! - **Closed component** (every edge borders exactly 2 faces): the
//!   component encloses a volume, so orientation is absolute. A face whose
//!   normal points toward the component's vertex centroid is flipped, no
//!   matter how its neighbors are wound.
//! - **Open component** (at least one boundary or non-manifold edge): no
//!   enclosed volume exists, so orientation is judged relative to the
//!   component's lowest-index face. Two faces sharing an edge are
//!   winding-consistent when they traverse that edge in opposite
//!   directions; the parity of that relation is propagated breadth-first
//!   from the seed, and faces that disagree with the seed are flagged.
//!
//! Known limitation of the open regime: it can only detect faces that are
//! inconsistent with each other. An open sheet whose faces all point the
//! "wrong" way is self-consistent and passes, because without an enclosing
//! volume there is no absolute reference to test against.
//!
//! Faces with a zero-length normal cannot be oriented; they are skipped and
//! reported separately at info level.

use std::collections::VecDeque;

use crate::config::ScanConfig;
use crate::geom::{self, DEGENERATE_NORMAL_EPS};
use crate::issue::{ElementRef, Issue, IssueKind, Severity};
use crate::model::{Face, Mesh};
use crate::topology::TopologyIndex;

/// Why a face was flagged as flipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlipReason {
    /// Closed regime: the normal points toward the shell's centroid
    Inward,
    /// Open regime: the winding disagrees with the component's seed face
    Inconsistent,
}

/// Classify face orientation over the whole mesh
///
/// Partitions faces into connected components (breadth-first over shared
/// edges, seeded at the lowest unvisited face index for reproducibility),
/// classifies each component as closed or open, and applies the matching
/// regime. Returns one error-level FlippedFace issue per flagged face, in
/// ascending face order, followed by info-level DegenerateFace issues for
/// faces that could not be classified (when enabled).
pub fn classify_orientation(
    mesh: &Mesh,
    topology: &TopologyIndex,
    config: &ScanConfig,
    object: &str,
) -> Vec<Issue> {
    let face_count = mesh.faces.len();
    if face_count == 0 {
        return Vec::new();
    }

    let degenerate: Vec<bool> = mesh
        .faces
        .iter()
        .map(|face| {
            geom::newell_vector(mesh, face).is_none_or(|n| n.norm() < DEGENERATE_NORMAL_EPS)
        })
        .collect();

    let mut visited = vec![false; face_count];
    // Parity relative to the current component's seed; only meaningful for
    // visited faces.
    let mut consistent = vec![true; face_count];
    let mut flipped: Vec<(usize, FlipReason)> = Vec::new();

    for seed in 0..face_count {
        if visited[seed] {
            continue;
        }

        let mut component = Vec::new();
        let mut queue = VecDeque::new();
        visited[seed] = true;
        consistent[seed] = true;
        queue.push_back(seed);

        while let Some(face_idx) = queue.pop_front() {
            component.push(face_idx);
            for &neighbor in topology.face_neighbors(face_idx) {
                if visited[neighbor] {
                    continue;
                }
                visited[neighbor] = true;
                consistent[neighbor] =
                    consistent[face_idx] == winding_consistent(mesh, face_idx, neighbor, topology);
                queue.push_back(neighbor);
            }
        }

        if is_closed_component(mesh, topology, &component) {
            flag_inward_faces(mesh, &component, &degenerate, &mut flipped);
        } else {
            flipped.extend(
                component
                    .iter()
                    .copied()
                    .filter(|&f| !consistent[f] && !degenerate[f])
                    .map(|f| (f, FlipReason::Inconsistent)),
            );
        }
    }

    flipped.sort_unstable_by_key(|&(face_idx, _)| face_idx);

    let mut issues: Vec<Issue> = flipped
        .into_iter()
        .map(|(face_idx, reason)| match reason {
            FlipReason::Inward => Issue::new(
                object,
                IssueKind::FlippedFace,
                Severity::Error,
                ElementRef::Face(face_idx),
                format!("Face {} points toward the inside of its shell", face_idx),
                "Flip the face normal",
            ),
            FlipReason::Inconsistent => Issue::new(
                object,
                IssueKind::FlippedFace,
                Severity::Error,
                ElementRef::Face(face_idx),
                format!("Face {} is wound against its neighbors", face_idx),
                "Recalculate normals so the surface winds consistently",
            ),
        })
        .collect();

    if config.report_degenerate_faces() {
        issues.extend(
            degenerate
                .iter()
                .enumerate()
                .filter(|(_, is_degenerate)| **is_degenerate)
                .map(|(face_idx, _)| {
                    Issue::new(
                        object,
                        IssueKind::DegenerateFace,
                        Severity::Info,
                        ElementRef::Face(face_idx),
                        format!(
                            "Face {} has a zero-length normal and cannot be oriented",
                            face_idx
                        ),
                        "Remove or rebuild the degenerate face",
                    )
                }),
        );
    }

    issues
}

/// Whether every edge of every face in the component borders exactly 2 faces
fn is_closed_component(mesh: &Mesh, topology: &TopologyIndex, component: &[usize]) -> bool {
    component.iter().all(|&face_idx| {
        mesh.faces[face_idx]
            .ring_edges()
            .all(|(a, b)| topology.incident_face_count(a, b) == 2)
    })
}

/// Flag faces of a closed component whose normal points toward the centroid
fn flag_inward_faces(
    mesh: &Mesh,
    component: &[usize],
    degenerate: &[bool],
    flipped: &mut Vec<(usize, FlipReason)>,
) {
    let mut component_vertices: Vec<usize> = component
        .iter()
        .flat_map(|&f| mesh.faces[f].vertices.iter().copied())
        .collect();
    component_vertices.sort_unstable();
    component_vertices.dedup();

    let Some(centroid) = geom::vertex_centroid(mesh, &component_vertices) else {
        return;
    };

    for &face_idx in component {
        if degenerate[face_idx] {
            continue;
        }
        let face = &mesh.faces[face_idx];
        let Some(normal) = geom::face_normal(mesh, face) else {
            continue;
        };
        let Some(face_center) = geom::face_centroid(mesh, face) else {
            continue;
        };
        let direction = face_center - centroid;
        // A face centered exactly on the shell centroid has no usable
        // reference direction; leave it unclassified.
        if direction.norm() < DEGENERATE_NORMAL_EPS {
            continue;
        }
        if normal.dot(&direction.normalize()) < 0.0 {
            flipped.push((face_idx, FlipReason::Inward));
        }
    }
}

/// Whether two adjacent faces wind consistently across their shared edge
///
/// Manifold-adjacent faces are consistent when each traverses the shared
/// edge in the opposite direction. When the faces share more than one edge,
/// the first shared edge in `f1`'s ring order decides.
fn winding_consistent(mesh: &Mesh, f1: usize, f2: usize, topology: &TopologyIndex) -> bool {
    for (a, b) in mesh.faces[f1].ring_edges() {
        if !topology.faces_of_edge(a, b).contains(&f2) {
            continue;
        }
        match ring_direction(&mesh.faces[f2], a, b) {
            -1 => return true,
            1 => return false,
            _ => continue,
        }
    }
    // No decidable shared edge; nothing to hold against the neighbor.
    true
}

/// Direction in which `face` traverses the edge a-b
///
/// Returns 1 for a→b, -1 for b→a, 0 when the ring does not contain the edge.
fn ring_direction(face: &Face, a: usize, b: usize) -> i8 {
    let ring = &face.vertices;
    let n = ring.len();
    for i in 0..n {
        if ring[i] == a && ring[(i + 1) % n] == b {
            return 1;
        }
        if ring[i] == b && ring[(i + 1) % n] == a {
            return -1;
        }
    }
    0
}
