//! UV channel snapshot types

/// One named UV layer with per-face coverage
///
/// The engine does not look at the coordinates themselves, only at whether
/// each face carries them. `face_coverage` therefore has one entry per mesh
/// face, in face order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UvChannel {
    /// Host-side channel name
    pub name: String,
    /// For each face, whether the face has UV coordinates in this channel
    pub face_coverage: Vec<bool>,
}

impl UvChannel {
    /// Create a channel from an explicit per-face coverage list
    pub fn new(name: impl Into<String>, face_coverage: Vec<bool>) -> Self {
        Self {
            name: name.into(),
            face_coverage,
        }
    }

    /// Create a channel that covers every face of a mesh with `face_count` faces
    pub fn full(name: impl Into<String>, face_count: usize) -> Self {
        Self {
            name: name.into(),
            face_coverage: vec![true; face_count],
        }
    }

    /// Indices of faces this channel leaves without UV coordinates
    pub fn uncovered_faces(&self) -> impl Iterator<Item = usize> + '_ {
        self.face_coverage
            .iter()
            .enumerate()
            .filter(|(_, covered)| !**covered)
            .map(|(idx, _)| idx)
    }
}

/// The ordered set of UV channels attached to one mesh
///
/// The first channel is the primary channel real-time pipelines sample.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UvChannelSet {
    /// Channels in host order; index 0 is the primary channel
    pub channels: Vec<UvChannel>,
}

impl UvChannelSet {
    /// Create an empty channel set
    pub fn new() -> Self {
        Self {
            channels: Vec::new(),
        }
    }

    /// Create a channel set from a list of channels
    pub fn from_channels(channels: Vec<UvChannel>) -> Self {
        Self { channels }
    }

    /// Number of channels
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Whether the set has no channels at all
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// The primary channel, if any
    pub fn primary(&self) -> Option<&UvChannel> {
        self.channels.first()
    }
}
