//! Collaborators supplied by the host runtime

use thiserror::Error;

use crate::elements::{Button, ButtonId};
use crate::feedback::Feedback;
use crate::view::QuestionView;
use crate::xapi::XapiEvent;

#[derive(Error, Debug)]
pub enum ScreenshotError {
    #[error("Screenshot capture failed: {0}")]
    Capture(String),
    #[error("Failed to write screenshot: {0}")]
    IoError(#[from] std::io::Error),
}

/// Optional collaborator that captures the finished question
pub trait ScreenshotCapture {
    fn take_screenshot(&mut self, content_id: u32, view: &QuestionView) -> Result<(), ScreenshotError>;
}

/// Host runtime the question is embedded in.
///
/// The question owns its host and calls into it whenever the button bar,
/// feedback area or telemetry transport needs to change. Button presses come
/// back through [`crate::ImageHotspotQuestion::on_button_click`].
pub trait Host {
    /// Resolve an authored asset path for a content id
    fn asset_path(&self, path: &str, _content_id: u32) -> String {
        path.to_string()
    }

    /// Turn a raw title into display text
    fn create_title(&self, raw: &str) -> String {
        raw.to_string()
    }

    /// Register the task introduction
    fn set_introduction(&mut self, _text: &str) {}

    /// Register the question content
    fn set_content(&mut self, _view: &QuestionView) {}

    /// Register a button with the button bar
    fn add_button(&mut self, button: &Button);

    /// Show or hide a registered button
    fn set_button_visible(&mut self, id: ButtonId, visible: bool);

    /// Show feedback text and update the score bar
    fn set_feedback(&mut self, feedback: &Feedback);

    /// Clear feedback text and popup
    fn remove_feedback(&mut self);

    /// Send a telemetry event
    fn trigger(&mut self, event: &XapiEvent);

    /// Screenshot collaborator, if the host has one
    fn screenshot(&mut self) -> Option<&mut dyn ScreenshotCapture> {
        None
    }
}
