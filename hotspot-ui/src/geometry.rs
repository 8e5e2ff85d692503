//! Geometry engine
//!
//! Hotspots and feedback markers are stored in percentage space (0-100 of the
//! container on each axis) so they survive any resize. Everything in here maps
//! between that space and the pixel space of the current container.

use serde::{Deserialize, Serialize};

use crate::elements::HotspotDefinition;

/// Size of the overlay container in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerSize {
    pub width: f32,
    pub height: f32,
}

impl ContainerSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether the container has been laid out with a usable size
    pub fn is_measurable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// A position in percentage space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PercentPoint {
    pub x: f32,
    pub y: f32,
}

impl PercentPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Pixel rectangle relative to the container's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PixelRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Top-left corner as [x, y]
    pub fn origin(&self) -> [f32; 2] {
        [self.x, self.y]
    }

    pub fn center(&self) -> [f32; 2] {
        [self.x + self.width / 2.0, self.y + self.height / 2.0]
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    /// Hit test against the ellipse inscribed in this rectangle
    pub fn ellipse_contains(&self, x: f32, y: f32) -> bool {
        if self.width <= 0.0 || self.height <= 0.0 {
            return false;
        }
        let [cx, cy] = self.center();
        let dx = (x - cx) / (self.width / 2.0);
        let dy = (y - cy) / (self.height / 2.0);
        dx * dx + dy * dy <= 1.0
    }
}

/// Compute the rendered image size for a container width.
///
/// Images narrower than the container render at natural size; wider images
/// are scaled down keeping their aspect ratio. Returns `None` while the
/// container or the image has no measurable size.
pub fn layout_image(container_width: f32, natural_width: u32, natural_height: u32) -> Option<(f32, f32)> {
    if container_width <= 0.0 || natural_width == 0 || natural_height == 0 {
        return None;
    }

    let natural_w = natural_width as f32;
    let natural_h = natural_height as f32;

    if container_width < natural_w {
        Some((container_width, container_width * natural_h / natural_w))
    } else {
        Some((natural_w, natural_h))
    }
}

/// Scale a hotspot's percentage rectangle to the container
pub fn place_hotspot(def: &HotspotDefinition, container: ContainerSize) -> PixelRect {
    let scale_x = container.width / 100.0;
    let scale_y = container.height / 100.0;

    PixelRect::new(
        def.x * scale_x,
        def.y * scale_y,
        def.width * scale_x,
        def.height * scale_y,
    )
}

/// Convert a click into a percentage position within the container.
///
/// `click_offset` is relative to the element that received the click. When
/// that element is a sub-element (a hotspot), `target_offset` is its own
/// offset inside the container.
pub fn record_click(
    click_offset: [f32; 2],
    target_offset: Option<[f32; 2]>,
    container: ContainerSize,
) -> Option<PercentPoint> {
    if !container.is_measurable() {
        return None;
    }

    let [mut x, mut y] = click_offset;
    if let Some([tx, ty]) = target_offset {
        x += tx;
        y += ty;
    }

    Some(PercentPoint::new(
        x / (container.width / 100.0),
        y / (container.height / 100.0),
    ))
}

/// Pixel position of a marker's top-left corner, centred on `percent`.
///
/// `pixel_offset` is half the marker's own size, fixed when it was created.
pub fn reposition_marker(
    percent: PercentPoint,
    pixel_offset: [f32; 2],
    container: ContainerSize,
) -> Option<[f32; 2]> {
    if container.width <= 0.0 {
        return None;
    }

    Some([
        percent.x * (container.width / 100.0) - pixel_offset[0],
        percent.y * (container.height / 100.0) - pixel_offset[1],
    ])
}

/// Centre of a hotspot's bounding box in percentage space
pub fn hotspot_center(def: &HotspotDefinition) -> PercentPoint {
    PercentPoint::new(def.x + def.width / 2.0, def.y + def.height / 2.0)
}
