//! Issue and scan report types
//!
//! Every detector produces [`Issue`] records; a multi-object scan collects
//! them into a [`ScanReport`]. Both are plain data: created fresh on every
//! scan, never mutated afterwards, and wholly replaced by the next scan.

use std::fmt;

/// How serious an issue is for export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Will break or visibly corrupt the exported asset
    Error,
    /// Likely to cause problems downstream; review before export
    Warning,
    /// Worth knowing, rarely a blocker
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        };
        write!(f, "{}", name)
    }
}

/// Broad grouping of issues for UI filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// Mesh-level problems (orientation, loose elements, n-gons)
    Geometry,
    /// Object transform problems
    Transform,
    /// UV channel problems
    Uv,
}

/// The specific problem an issue describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IssueKind {
    /// A face whose winding points it the wrong way
    FlippedFace,
    /// A face with more than 4 vertices
    Ngon,
    /// A vertex not part of any face
    LooseVertex,
    /// An edge not part of any face
    LooseEdge,
    /// A face too degenerate to orient (zero-length normal)
    DegenerateFace,
    /// A face whose area is below the configured threshold
    SmallFace,
    /// Scale magnitudes differ between axes
    NonUniformScale,
    /// At least one scale component is negative
    NegativeScale,
    /// Object transform not baked into the vertex data
    UnappliedTransform,
    /// No usable primary UV channel
    MissingUv,
    /// More UV channels than the configured limit
    ExcessUvMaps,
    /// The object could not be scanned at all
    MalformedMesh,
}

impl IssueKind {
    /// The category this kind belongs to
    pub fn category(&self) -> Category {
        match self {
            IssueKind::FlippedFace
            | IssueKind::Ngon
            | IssueKind::LooseVertex
            | IssueKind::LooseEdge
            | IssueKind::DegenerateFace
            | IssueKind::SmallFace
            | IssueKind::MalformedMesh => Category::Geometry,
            IssueKind::NonUniformScale
            | IssueKind::NegativeScale
            | IssueKind::UnappliedTransform => Category::Transform,
            IssueKind::MissingUv | IssueKind::ExcessUvMaps => Category::Uv,
        }
    }

    /// A short human-readable name for UI labels
    pub fn name(&self) -> &'static str {
        match self {
            IssueKind::FlippedFace => "Flipped Face",
            IssueKind::Ngon => "N-gon",
            IssueKind::LooseVertex => "Loose Vertex",
            IssueKind::LooseEdge => "Loose Edge",
            IssueKind::DegenerateFace => "Degenerate Face",
            IssueKind::SmallFace => "Small Face",
            IssueKind::NonUniformScale => "Non-uniform Scale",
            IssueKind::NegativeScale => "Negative Scale",
            IssueKind::UnappliedTransform => "Unapplied Transform",
            IssueKind::MissingUv => "Missing UV",
            IssueKind::ExcessUvMaps => "Excess UV Maps",
            IssueKind::MalformedMesh => "Malformed Mesh",
        }
    }
}

/// The mesh element an issue points at
///
/// `Object` marks object-level issues (transform, UV, scan failures) that
/// have no single element to select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementRef {
    /// A vertex by index
    Vertex(usize),
    /// An explicit edge record by index
    Edge(usize),
    /// A face by index
    Face(usize),
    /// The whole object
    Object,
}

/// One problem found by one detector on one object
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Issue {
    /// Host-side name of the object the issue belongs to
    pub object: String,
    /// What kind of problem this is
    pub kind: IssueKind,
    /// How serious it is
    pub severity: Severity,
    /// The element the issue points at
    pub element: ElementRef,
    /// Human-readable description
    pub message: String,
    /// Short host-agnostic remediation hint
    pub hint: String,
}

impl Issue {
    /// Create a new issue
    pub fn new(
        object: impl Into<String>,
        kind: IssueKind,
        severity: Severity,
        element: ElementRef,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self {
            object: object.into(),
            kind,
            severity,
            element,
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// The category of this issue, derived from its kind
    pub fn category(&self) -> Category {
        self.kind.category()
    }
}

/// The result of one multi-object scan
///
/// Issues appear in detector order per object, objects in scan order. The
/// report is immutable; a re-scan produces a brand new one.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanReport {
    /// Names of the objects that were scanned, in scan order
    pub objects: Vec<String>,
    /// All issues found, in detector order per object
    pub issues: Vec<Issue>,
}

impl ScanReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of issues with severity [`Severity::Error`]
    pub fn error_count(&self) -> usize {
        self.count_with_severity(Severity::Error)
    }

    /// Number of issues with severity [`Severity::Warning`]
    pub fn warning_count(&self) -> usize {
        self.count_with_severity(Severity::Warning)
    }

    /// Number of issues with severity [`Severity::Info`]
    pub fn info_count(&self) -> usize {
        self.count_with_severity(Severity::Info)
    }

    /// Total number of issues
    pub fn total_count(&self) -> usize {
        self.issues.len()
    }

    /// Whether any error-level issue was found
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Issues with the given severity, in report order
    pub fn issues_with_severity(&self, severity: Severity) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |i| i.severity == severity)
    }

    /// Issues of the given kind, in report order
    pub fn issues_with_kind(&self, kind: IssueKind) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |i| i.kind == kind)
    }

    /// Issues belonging to the named object, in report order
    pub fn issues_for_object<'a>(&'a self, object: &'a str) -> impl Iterator<Item = &'a Issue> {
        self.issues.iter().filter(move |i| i.object == object)
    }

    fn count_with_severity(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}
