//! UV channel auditing

use crate::config::ScanConfig;
use crate::error::{Error, Result};
use crate::issue::{ElementRef, Issue, IssueKind, Severity};
use crate::model::{Mesh, UvChannelSet};

/// Validate that every channel's coverage matches the mesh's face count
///
/// A mismatch means the host adapter snapshotted UV data and geometry out of
/// sync; the object cannot be audited meaningfully and the scan fails.
pub(crate) fn check_channels(mesh: &Mesh, uv_channels: &UvChannelSet) -> Result<()> {
    for channel in &uv_channels.channels {
        if channel.face_coverage.len() != mesh.faces.len() {
            return Err(Error::uv_coverage_mismatch(
                &channel.name,
                mesh.faces.len(),
                channel.face_coverage.len(),
            ));
        }
    }
    Ok(())
}

/// Audit UV channel count and coverage
///
/// MissingUv (error) when there is no channel at all or the primary channel
/// leaves faces unmapped; ExcessUvMaps (warning) when the channel count
/// exceeds the configured limit. Both are object-level issues.
pub fn audit_uv(
    mesh: &Mesh,
    uv_channels: &UvChannelSet,
    config: &ScanConfig,
    object: &str,
) -> Vec<Issue> {
    let mut issues = Vec::new();

    match uv_channels.primary() {
        None => {
            issues.push(Issue::new(
                object,
                IssueKind::MissingUv,
                Severity::Error,
                ElementRef::Object,
                "No UV channel found",
                "Unwrap the mesh before export",
            ));
        }
        Some(primary) => {
            let uncovered = primary.uncovered_faces().count();
            if uncovered > 0 {
                issues.push(Issue::new(
                    object,
                    IssueKind::MissingUv,
                    Severity::Error,
                    ElementRef::Object,
                    format!(
                        "Primary UV channel '{}' leaves {} of {} faces unmapped",
                        primary.name,
                        uncovered,
                        mesh.faces.len()
                    ),
                    "Unwrap the unmapped faces before export",
                ));
            }
        }
    }

    if uv_channels.len() > config.uv_channel_limit() {
        issues.push(Issue::new(
            object,
            IssueKind::ExcessUvMaps,
            Severity::Warning,
            ElementRef::Object,
            format!(
                "{} UV channels exceed the limit of {}",
                uv_channels.len(),
                config.uv_channel_limit()
            ),
            "Remove UV channels the target pipeline does not sample",
        ));
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Face, UvChannel, Vertex};

    fn triangle_mesh() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.vertices.push(Vertex::new(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::new(1.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::new(0.0, 1.0, 0.0));
        mesh.faces.push(Face::triangle(0, 1, 2));
        mesh
    }

    #[test]
    fn test_no_channels_is_missing_uv() {
        let mesh = triangle_mesh();
        let issues = audit_uv(&mesh, &UvChannelSet::new(), &ScanConfig::new(), "Rock");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::MissingUv);
        assert_eq!(issues[0].severity, Severity::Error);
    }

    #[test]
    fn test_partial_primary_coverage_is_missing_uv() {
        let mut mesh = triangle_mesh();
        mesh.faces.push(Face::triangle(0, 2, 1));
        let set = UvChannelSet::from_channels(vec![UvChannel::new("UVMap", vec![true, false])]);
        let issues = audit_uv(&mesh, &set, &ScanConfig::new(), "Rock");
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("1 of 2 faces"));
    }

    #[test]
    fn test_excess_channels_reports_count() {
        let mesh = triangle_mesh();
        let set = UvChannelSet::from_channels(vec![
            UvChannel::full("UVMap", 1),
            UvChannel::full("Lightmap", 1),
            UvChannel::full("Decals", 1),
        ]);
        let issues = audit_uv(&mesh, &set, &ScanConfig::new(), "Rock");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::ExcessUvMaps);
        assert!(issues[0].message.contains("3 UV channels"));
    }

    #[test]
    fn test_limit_is_configurable() {
        let mesh = triangle_mesh();
        let set = UvChannelSet::from_channels(vec![
            UvChannel::full("UVMap", 1),
            UvChannel::full("Lightmap", 1),
        ]);
        let config = ScanConfig::new().with_uv_channel_limit(2);
        assert!(audit_uv(&mesh, &set, &config, "Rock").is_empty());
    }

    #[test]
    fn test_coverage_mismatch_is_an_error() {
        let mesh = triangle_mesh();
        let set = UvChannelSet::from_channels(vec![UvChannel::full("UVMap", 5)]);
        let err = check_channels(&mesh, &set).unwrap_err();
        assert!(err.to_string().contains("[E1002]"));
    }
}
