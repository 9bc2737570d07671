//! # meshlint
//!
//! A pure Rust mesh analysis engine that catches export-breaking geometry
//! problems before a model leaves its authoring tool: flipped faces, n-gons,
//! loose geometry, hazardous object transforms, and missing or excessive UV
//! channels.
//!
//! The engine is host-agnostic. A 3D tool's adapter copies vertices, edges,
//! faces, the object transform and per-face UV coverage into a
//! [`MeshObject`] snapshot; the engine reads the snapshot, never mutates it,
//! and returns an ordered list of [`Issue`] records for the host UI to
//! display, filter, and map back onto its own selection state.
//!
//! ## Features
//!
//! - Pure Rust with no unsafe code
//! - Hybrid face-orientation check: absolute (centroid-based) on closed
//!   shells, relative (winding propagation) on open sheets
//! - Loose vertex/edge, n-gon, small-face and degenerate-face detection
//! - Object transform and UV channel audits
//! - Deterministic output: scanning the same snapshot twice yields the same
//!   issues in the same order
//!
//! ## Example
//!
//! ```
//! use meshlint::{Face, Mesh, MeshObject, Scanner, Vertex};
//!
//! let mut mesh = Mesh::new();
//! mesh.vertices.push(Vertex::new(0.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::new(1.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::new(0.0, 1.0, 0.0));
//! mesh.faces.push(Face::triangle(0, 1, 2));
//!
//! let object = MeshObject::new("Plate", mesh);
//! let report = Scanner::new().scan(std::slice::from_ref(&object));
//!
//! // The triangle was never unwrapped, so the scan flags the missing UVs.
//! assert_eq!(report.error_count(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod geom;
pub mod issue;
pub mod model;
pub mod topology;

pub use analysis::{scan_object, Scanner};
pub use config::ScanConfig;
pub use error::{Error, Result};
pub use issue::{Category, ElementRef, Issue, IssueKind, ScanReport, Severity};
pub use model::{Edge, Face, Mesh, MeshObject, Transform, UvChannel, UvChannelSet, Vertex};
pub use topology::TopologyIndex;
