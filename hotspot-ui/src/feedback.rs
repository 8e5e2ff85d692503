//! Feedback requests handed to the host

use crate::geometry::PercentPoint;

/// How the host should present feedback as a popup
#[derive(Debug, Clone, PartialEq)]
pub struct PopupSettings {
    /// Show as a popup instead of inline text
    pub show_as_popup: bool,
    /// Label of the popup's close control
    pub close_text: String,
    /// Click position the popup points at
    pub anchor: Option<PercentPoint>,
}

/// Feedback text together with the score bar state
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub text: String,
    pub score: u32,
    pub max_score: u32,
    /// Score bar label template with `:num` and `:total` placeholders
    pub score_bar_label: String,
    pub popup: Option<PopupSettings>,
}

impl Feedback {
    pub fn new(text: impl Into<String>, score: u32, max_score: u32, score_bar_label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            score,
            max_score,
            score_bar_label: score_bar_label.into(),
            popup: None,
        }
    }

    pub fn with_popup(mut self, popup: PopupSettings) -> Self {
        self.popup = Some(popup);
        self
    }

    /// Score bar label with the placeholders filled in
    pub fn score_bar_text(&self) -> String {
        self.score_bar_label
            .replace(":num", &self.score.to_string())
            .replace(":total", &self.max_score.to_string())
    }

    pub fn is_popup(&self) -> bool {
        self.popup.as_ref().is_some_and(|p| p.show_as_popup)
    }
}
