//! Error types for mesh analysis
//!
//! All errors include error codes for categorization and enough context to
//! point the host adapter at the offending element.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! Categories:
//! - **E1xxx**: malformed input snapshots (mesh topology, UV channels)
//!
//! ## Common Error Codes
//!
//! - `E1001`: malformed mesh (dangling vertex index, degenerate face or edge)
//! - `E1002`: UV channel inconsistent with the mesh it annotates

use thiserror::Error;

/// Result type for mesh analysis operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while analyzing a mesh snapshot
///
/// An error always refers to the single object being scanned. A multi-object
/// scan never aborts on one of these: the [`Scanner`](crate::Scanner) skips
/// the object and reports the failure as an object-level issue instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Mesh topology is internally inconsistent
    ///
    /// **Error Code**: E1001
    ///
    /// **Common Causes**:
    /// - A face or edge references a vertex index that does not exist
    /// - A face ring has fewer than 3 vertices
    /// - A face ring or edge repeats a vertex
    ///
    /// **Suggestions**:
    /// - Check the host adapter's vertex/face enumeration for off-by-one errors
    /// - Run the host's mesh clean-up tools before scanning
    #[error("[E1001] Malformed mesh: {0}")]
    MalformedMesh(String),

    /// A UV channel disagrees with the mesh it annotates
    ///
    /// **Error Code**: E1002
    ///
    /// **Common Causes**:
    /// - Per-face coverage recorded for a different face count than the mesh has
    /// - The host adapter snapshotted UV data and geometry at different times
    #[error("[E1002] Invalid UV channel: {0}")]
    InvalidUvChannel(String),
}

impl Error {
    /// Create a MalformedMesh error for a face referencing an out-of-range vertex
    pub fn face_vertex_out_of_bounds(
        face_idx: usize,
        vertex_idx: usize,
        num_vertices: usize,
    ) -> Self {
        Error::MalformedMesh(format!(
            "Face {} references vertex {} but the mesh has {} vertices (valid indices: 0-{}). \
             Every face ring entry must reference an existing vertex.",
            face_idx,
            vertex_idx,
            num_vertices,
            num_vertices.saturating_sub(1)
        ))
    }

    /// Create a MalformedMesh error for a degenerate face ring
    pub fn degenerate_face(face_idx: usize, detail: &str) -> Self {
        Error::MalformedMesh(format!(
            "Face {} is degenerate: {}. \
             A face must list at least 3 distinct vertices.",
            face_idx, detail
        ))
    }

    /// Create a MalformedMesh error for an invalid explicit edge record
    pub fn invalid_edge(edge_idx: usize, detail: &str) -> Self {
        Error::MalformedMesh(format!("Edge {} is invalid: {}", edge_idx, detail))
    }

    /// Create an InvalidUvChannel error for a coverage length mismatch
    pub fn uv_coverage_mismatch(channel: &str, expected: usize, actual: usize) -> Self {
        Error::InvalidUvChannel(format!(
            "Channel '{}' records coverage for {} faces but the mesh has {}. \
             The host adapter must snapshot UV coverage and geometry together.",
            channel, actual, expected
        ))
    }
}
