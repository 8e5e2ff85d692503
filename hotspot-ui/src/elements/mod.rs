//! Elements of the hotspot question
//!
//! Hotspots and markers are laid out over the background image in percentage
//! space. Buttons are registered with the host's button bar and only carry
//! their label and visibility.

pub mod button;
pub mod hotspot;
pub mod marker;

pub use button::{Button, ButtonId};
pub use hotspot::{Hotspot, HotspotDefinition, HotspotShape};
pub use marker::{FeedbackMarker, MarkerKind};
