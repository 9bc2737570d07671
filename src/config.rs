//! Configuration for a scan
//!
//! A [`ScanConfig`] carries the tolerances and limits the detectors use.
//! The defaults match what real-time export pipelines usually expect; hosts
//! that need different thresholds build a config once and reuse it.

/// Tolerances and limits applied by the detectors
#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    transform_tolerance: f64,
    small_face_area: f64,
    uv_channel_limit: usize,
    report_degenerate_faces: bool,
    report_small_faces: bool,
}

impl ScanConfig {
    /// Create a configuration with default thresholds
    ///
    /// Defaults: transform tolerance `1e-4`, small-face area `1e-4`,
    /// UV channel limit `1`, degenerate- and small-face reporting enabled.
    pub fn new() -> Self {
        Self {
            transform_tolerance: 1e-4,
            small_face_area: 1e-4,
            uv_channel_limit: 1,
            report_degenerate_faces: true,
            report_small_faces: true,
        }
    }

    /// Set the tolerance used for all transform-identity comparisons
    pub fn with_transform_tolerance(mut self, tolerance: f64) -> Self {
        self.transform_tolerance = tolerance;
        self
    }

    /// Set the face area below which a face is reported as small
    pub fn with_small_face_area(mut self, area: f64) -> Self {
        self.small_face_area = area;
        self
    }

    /// Set the number of UV channels above which the UV auditor reports
    pub fn with_uv_channel_limit(mut self, limit: usize) -> Self {
        self.uv_channel_limit = limit;
        self
    }

    /// Enable or disable info-level reports for unorientable faces
    pub fn with_degenerate_face_reports(mut self, enabled: bool) -> Self {
        self.report_degenerate_faces = enabled;
        self
    }

    /// Enable or disable info-level reports for tiny faces
    pub fn with_small_face_reports(mut self, enabled: bool) -> Self {
        self.report_small_faces = enabled;
        self
    }

    /// Tolerance for transform-identity comparisons
    pub fn transform_tolerance(&self) -> f64 {
        self.transform_tolerance
    }

    /// Face area threshold for small-face reports
    pub fn small_face_area(&self) -> f64 {
        self.small_face_area
    }

    /// Maximum UV channel count before the UV auditor reports
    pub fn uv_channel_limit(&self) -> usize {
        self.uv_channel_limit
    }

    /// Whether unorientable faces are reported
    pub fn report_degenerate_faces(&self) -> bool {
        self.report_degenerate_faces
    }

    /// Whether tiny faces are reported
    pub fn report_small_faces(&self) -> bool {
        self.report_small_faces
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new()
    }
}
