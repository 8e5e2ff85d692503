//! # hotspot-ui
//!
//! An image with clickable hotspot regions, answered with a single click.
//!
//! ## Features
//! - Percentage-positioned hotspots that stay aligned under any resize
//! - Responsive image layout that keeps the aspect ratio
//! - Feedback marker anchored to the click point
//! - Answer-once scoring with retry, reset and solution review
//! - Telemetry "answered" statements
//! - Renderer-agnostic view model
//!
//! ## Example
//!
//! ```no_run
//! use hotspot_ui::{
//!     Button, ButtonId, ContentData, Feedback, Host, ImageHotspotQuestion, Question,
//!     QuestionParams, XapiEvent,
//! };
//!
//! struct LogHost;
//!
//! impl Host for LogHost {
//!     fn add_button(&mut self, button: &Button) {
//!         println!("button {}", button.label());
//!     }
//!     fn set_button_visible(&mut self, id: ButtonId, visible: bool) {
//!         println!("{} visible: {}", id.as_str(), visible);
//!     }
//!     fn set_feedback(&mut self, feedback: &Feedback) {
//!         println!("{}", feedback.text);
//!     }
//!     fn remove_feedback(&mut self) {}
//!     fn trigger(&mut self, event: &XapiEvent) {
//!         println!("{}", event.verb);
//!     }
//! }
//!
//! let params: QuestionParams = serde_json::from_str(r#"{
//!     "background_image": { "path": "lake.png" },
//!     "hotspots": [{ "x": 10, "y": 10, "width": 20, "height": 20, "correct": true }]
//! }"#).unwrap();
//!
//! let mut question = ImageHotspotQuestion::new(params, 1, ContentData::default(), LogHost);
//! question.register_dom_elements();
//! question.on_image_loaded(800, 600);
//! question.on_resize(400.0);
//! question.click_at(60.0, 45.0);
//! assert_eq!(question.score(), 1);
//! ```

mod background;
pub mod elements;
pub mod feedback;
pub mod geometry;
mod host;
pub mod params;
mod question;
pub mod timer;
pub mod view;
pub mod xapi;

// Elements
pub use elements::{Button, ButtonId, FeedbackMarker, Hotspot, HotspotDefinition, HotspotShape, MarkerKind};

// Geometry
pub use geometry::{ContainerSize, PercentPoint, PixelRect};

// Host collaborators
pub use host::{Host, ScreenshotCapture, ScreenshotError};

// Background image
pub use background::{ImageDescriptor, ImageError};

// Parameters
pub use params::{BackgroundImage, Behaviour, ContentData, HotspotSettings, L10n, QuestionParams};

// Question
pub use question::{
    AttemptState, ClickOutcome, ClickTarget, IgnoreReason, ImageHotspotQuestion, Phase, Question,
    DEFAULT_DESCRIPTION, NO_IMAGE_MESSAGE, SCREENSHOT_DELAY,
};

// Feedback, view and telemetry
pub use feedback::{Feedback, PopupSettings};
pub use view::{HotspotView, ImageView, MarkerView, QuestionView};
pub use xapi::{XapiData, XapiEvent};
