//! Clickable hotspot regions

use serde::Deserialize;

use crate::geometry::{self, ContainerSize, PixelRect};

/// Figure drawn for a hotspot. Unknown figures fall back to a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum HotspotShape {
    #[default]
    Rectangle,
    Circle,
}

impl From<&str> for HotspotShape {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "rectangle" | "rect" => Self::Rectangle,
            "circle" | "ellipse" => Self::Circle,
            _ => {
                log::warn!("Unknown hotspot shape '{}', defaulting to rectangle", s);
                Self::Rectangle
            }
        }
    }
}

impl From<String> for HotspotShape {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl HotspotShape {
    /// Class name of the figure
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
        }
    }
}

/// Author-provided hotspot, positioned as percentages of the image
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HotspotDefinition {
    #[serde(default)]
    pub shape: HotspotShape,
    /// Left edge, percent of image width
    pub x: f32,
    /// Top edge, percent of image height
    pub y: f32,
    /// Width, percent of image width
    pub width: f32,
    /// Height, percent of image height
    pub height: f32,
    #[serde(default, alias = "correct")]
    pub is_correct: bool,
    #[serde(default)]
    pub feedback_text: Option<String>,
}

/// A hotspot attached to the question, with its current pixel placement
#[derive(Debug, Clone)]
pub struct Hotspot {
    index: usize,
    definition: HotspotDefinition,
    rect: PixelRect,
}

impl Hotspot {
    pub fn new(index: usize, definition: HotspotDefinition) -> Self {
        Self {
            index,
            definition,
            rect: PixelRect::default(),
        }
    }

    /// Position in the question's hotspot list (later ones are drawn on top)
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn definition(&self) -> &HotspotDefinition {
        &self.definition
    }

    pub fn is_correct(&self) -> bool {
        self.definition.is_correct
    }

    /// Current pixel rectangle inside the container
    pub fn rect(&self) -> PixelRect {
        self.rect
    }

    /// Offset of this hotspot inside the container
    pub fn offset(&self) -> [f32; 2] {
        self.rect.origin()
    }

    /// Recompute the pixel rectangle for the current container
    pub fn place(&mut self, container: ContainerSize) {
        self.rect = geometry::place_hotspot(&self.definition, container);
    }

    /// Check if a container point falls on this hotspot's figure
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        match self.definition.shape {
            HotspotShape::Rectangle => self.rect.contains(x, y),
            HotspotShape::Circle => self.rect.ellipse_contains(x, y),
        }
    }
}
