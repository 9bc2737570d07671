//! The analysis engine: detectors and their orchestration
//!
//! Each detector is a pure function of the snapshot it reads; none of them
//! share state, cache results, or mutate the mesh. [`scan_object`] runs them
//! in a fixed order over one object, and [`Scanner`] sequences whole scenes,
//! skipping objects whose snapshots turn out to be malformed.
//!
//! Scanning is strictly pull-based: nothing here subscribes to host edit
//! events, and every call recomputes from scratch. How often to scan is the
//! caller's decision.

mod faces;
mod loose;
mod ngon;
mod orientation;
mod transform;
mod uv;

pub use faces::find_small_faces;
pub use loose::find_loose_geometry;
pub use ngon::find_ngons;
pub use orientation::classify_orientation;
pub use transform::audit_transform;
pub use uv::audit_uv;

use crate::config::ScanConfig;
use crate::error::Result;
use crate::issue::{ElementRef, Issue, IssueKind, ScanReport, Severity};
use crate::model::MeshObject;
use crate::topology::TopologyIndex;

/// Run every detector over one object and concatenate their findings
///
/// Detector order is fixed so repeated scans of an unmodified object return
/// identical issue lists: loose geometry, n-gons, small faces, orientation
/// (with degenerate-face reports), then the transform audit, then the UV
/// audit. Fails with [`Error`](crate::Error) when the snapshot itself is
/// malformed; no issue ever carries partial results from a failed build.
pub fn scan_object(object: &MeshObject, config: &ScanConfig) -> Result<Vec<Issue>> {
    let topology = TopologyIndex::build(&object.mesh)?;
    uv::check_channels(&object.mesh, &object.uv_channels)?;

    let mut issues = Vec::new();
    issues.extend(find_loose_geometry(&object.mesh, &topology, &object.name));
    issues.extend(find_ngons(&object.mesh, &object.name));
    if config.report_small_faces() {
        issues.extend(find_small_faces(&object.mesh, config, &object.name));
    }
    issues.extend(classify_orientation(
        &object.mesh,
        &topology,
        config,
        &object.name,
    ));
    issues.extend(audit_transform(&object.transform, config, &object.name));
    issues.extend(audit_uv(
        &object.mesh,
        &object.uv_channels,
        config,
        &object.name,
    ));
    Ok(issues)
}

/// Scans scenes one object at a time
///
/// A malformed object does not abort the scan: it is skipped, logged, and
/// reported as a single object-level issue so the host UI can still show
/// results for everything else.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    /// Create a scanner with the default configuration
    pub fn new() -> Self {
        Self {
            config: ScanConfig::new(),
        }
    }

    /// Create a scanner with a custom configuration
    pub fn with_config(config: ScanConfig) -> Self {
        Self { config }
    }

    /// The configuration this scanner applies
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan one object, propagating snapshot errors to the caller
    pub fn scan_one(&self, object: &MeshObject) -> Result<Vec<Issue>> {
        scan_object(object, &self.config)
    }

    /// Scan a sequence of objects into a fresh report
    ///
    /// Objects are processed sequentially and the report is rebuilt from
    /// scratch; nothing from a previous scan survives into this one.
    pub fn scan(&self, objects: &[MeshObject]) -> ScanReport {
        let mut report = ScanReport::new();
        for object in objects {
            report.objects.push(object.name.clone());
            match scan_object(object, &self.config) {
                Ok(issues) => report.issues.extend(issues),
                Err(err) => {
                    log::warn!("skipping object '{}': {}", object.name, err);
                    report.issues.push(Issue::new(
                        object.name.clone(),
                        IssueKind::MalformedMesh,
                        Severity::Error,
                        ElementRef::Object,
                        format!("Scan failed: {}", err),
                        "Repair the mesh data supplied by the host adapter",
                    ));
                }
            }
        }
        report
    }
}
