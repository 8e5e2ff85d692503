//! Renderer-agnostic snapshot of the question

use crate::elements::{Button, HotspotShape, MarkerKind};
use crate::feedback::Feedback;
use crate::geometry::{ContainerSize, PixelRect};

/// State of the background image
#[derive(Debug, Clone, PartialEq)]
pub enum ImageView {
    /// No image configured
    Missing { message: String },
    /// Image configured but not loaded yet
    Loading { path: String },
    /// Image loaded and laid out
    Loaded { path: String, width: f32, height: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct HotspotView {
    pub index: usize,
    pub shape: HotspotShape,
    pub rect: PixelRect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerView {
    pub kind: MarkerKind,
    /// Top-left corner in container pixels
    pub position: [f32; 2],
    pub size: [f32; 2],
    pub correct: bool,
}

/// Everything a renderer needs to draw the question
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionView {
    pub introduction: Option<String>,
    pub container: ContainerSize,
    pub image: ImageView,
    pub hotspots: Vec<HotspotView>,
    pub markers: Vec<MarkerView>,
    pub buttons: Vec<Button>,
    pub feedback: Option<Feedback>,
    /// Clicks are no longer accepted
    pub disabled: bool,
}

impl QuestionView {
    pub fn visible_buttons(&self) -> impl Iterator<Item = &Button> {
        self.buttons.iter().filter(|b| b.is_visible())
    }

    pub fn markers_of(&self, kind: MarkerKind) -> impl Iterator<Item = &MarkerView> {
        self.markers.iter().filter(move |m| m.kind == kind)
    }
}
