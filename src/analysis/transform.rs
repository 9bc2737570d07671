//! Object-transform auditing

use crate::config::ScanConfig;
use crate::issue::{ElementRef, Issue, IssueKind, Severity};
use crate::model::Transform;

/// Audit an object-level transform for export hazards
///
/// Three independent conditions, reported in this order:
///
/// - **NonUniformScale**: the scale component *magnitudes* differ beyond the
///   relative tolerance. Magnitudes, so a pure mirror like (-1, 1, 1) is not
///   "non-uniform" — it is covered by the negative-scale check instead.
/// - **NegativeScale**: any scale component is below zero. Downstream
///   engines disagree on how to interpret mirrored transforms, so every
///   negative axis is treated as a hazard, not just handedness-inverting
///   combinations.
/// - **UnappliedTransform**: translation or rotation deviates from identity,
///   or the scale magnitudes are uniform but not 1. Scale deviations the two
///   checks above already describe are not re-reported here.
///
/// All issues are object-level and non-destructive: the transform is only
/// read, never corrected.
pub fn audit_transform(transform: &Transform, config: &ScanConfig, object: &str) -> Vec<Issue> {
    let tolerance = config.transform_tolerance();
    let mut issues = Vec::new();

    let scale = transform.scale;
    let magnitudes = [scale.x.abs(), scale.y.abs(), scale.z.abs()];
    let max_magnitude = magnitudes.iter().cloned().fold(f64::MIN, f64::max);
    let min_magnitude = magnitudes.iter().cloned().fold(f64::MAX, f64::min);
    let non_uniform = max_magnitude > 0.0
        && (max_magnitude - min_magnitude) / max_magnitude > tolerance;

    if non_uniform {
        issues.push(Issue::new(
            object,
            IssueKind::NonUniformScale,
            Severity::Warning,
            ElementRef::Object,
            format!(
                "Scale ({:.3}, {:.3}, {:.3}) is not uniform",
                scale.x, scale.y, scale.z
            ),
            "Apply the scale or make it uniform before export",
        ));
    }

    let negative_axes: Vec<&str> = [
        (scale.x, "X"),
        (scale.y, "Y"),
        (scale.z, "Z"),
    ]
    .iter()
    .filter(|(component, _)| *component < 0.0)
    .map(|(_, axis)| *axis)
    .collect();

    if !negative_axes.is_empty() {
        issues.push(Issue::new(
            object,
            IssueKind::NegativeScale,
            Severity::Warning,
            ElementRef::Object,
            format!("Negative scale on {}", negative_axes.join(", ")),
            "Apply the scale or flip the normals it mirrors",
        ));
    }

    let translation_off = transform.translation.iter().any(|c| c.abs() > tolerance);
    let rotation_off = transform.rotation.iter().any(|c| c.abs() > tolerance);
    let uniform_scale_off = !non_uniform && (max_magnitude - 1.0).abs() > tolerance;

    if translation_off || rotation_off || uniform_scale_off {
        let mut parts = Vec::new();
        if translation_off {
            let t = transform.translation;
            parts.push(format!("translation ({:.3}, {:.3}, {:.3})", t.x, t.y, t.z));
        }
        if rotation_off {
            let r = transform.rotation;
            parts.push(format!("rotation ({:.3}, {:.3}, {:.3})", r.x, r.y, r.z));
        }
        if uniform_scale_off {
            parts.push(format!(
                "scale ({:.3}, {:.3}, {:.3})",
                scale.x, scale.y, scale.z
            ));
        }
        issues.push(Issue::new(
            object,
            IssueKind::UnappliedTransform,
            Severity::Warning,
            ElementRef::Object,
            format!("Unapplied {}", parts.join(" and ")),
            "Bake the transform into the vertex data before export",
        ));
    }

    issues
}
