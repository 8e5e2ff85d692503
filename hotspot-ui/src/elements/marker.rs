//! Feedback markers placed over the image

use crate::geometry::{self, ContainerSize, PercentPoint};

/// Why a marker is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// Placed where the user clicked
    Answer,
    /// Placed at the centre of a correct hotspot while solutions are shown
    Solution,
}

/// A marker anchored to a percentage position.
///
/// The pixel offset is half the marker's rendered size and never changes, so
/// after any resize the marker stays centred on the same percentage point.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackMarker {
    kind: MarkerKind,
    percent: PercentPoint,
    pixel_offset: [f32; 2],
    size: [f32; 2],
    correct: bool,
    /// Top-left corner in container pixels, updated on resize
    position: [f32; 2],
}

impl FeedbackMarker {
    pub fn new(kind: MarkerKind, percent: PercentPoint, size: [f32; 2], correct: bool) -> Self {
        Self {
            kind,
            percent,
            pixel_offset: [size[0] / 2.0, size[1] / 2.0],
            size,
            correct,
            position: [0.0, 0.0],
        }
    }

    /// Recompute the pixel position for the current container
    pub fn reposition(&mut self, container: ContainerSize) {
        match geometry::reposition_marker(self.percent, self.pixel_offset, container) {
            Some(position) => self.position = position,
            None => log::debug!("Marker reposition skipped: container not measured"),
        }
    }

    pub fn kind(&self) -> MarkerKind {
        self.kind
    }

    pub fn percent(&self) -> PercentPoint {
        self.percent
    }

    pub fn pixel_offset(&self) -> [f32; 2] {
        self.pixel_offset
    }

    pub fn size(&self) -> [f32; 2] {
        self.size
    }

    /// Whether the marker uses the correct-answer style
    pub fn is_correct(&self) -> bool {
        self.correct
    }

    pub fn position(&self) -> [f32; 2] {
        self.position
    }
}
