//! Question parameters as authored in the content configuration

use serde::Deserialize;

use crate::elements::HotspotDefinition;

/// Root parameters of an image hotspot question
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionParams {
    #[serde(default)]
    pub background_image: BackgroundImage,
    #[serde(default)]
    pub hotspots: Vec<HotspotDefinition>,
    #[serde(default)]
    pub hotspot_settings: HotspotSettings,
    #[serde(default)]
    pub behaviour: Behaviour,
    /// Score bar label with `:num` and `:total` placeholders
    #[serde(default = "default_score_bar_label")]
    pub score_bar_label: String,
    /// Accessible label of the retry button
    #[serde(default = "default_a11y_retry")]
    pub a11y_retry: String,
    /// Rendered size of a feedback marker [width, height] in pixels
    #[serde(default = "default_marker_size")]
    pub marker_size: [f32; 2],
}

impl Default for QuestionParams {
    fn default() -> Self {
        Self {
            background_image: BackgroundImage::default(),
            hotspots: Vec::new(),
            hotspot_settings: HotspotSettings::default(),
            behaviour: Behaviour::default(),
            score_bar_label: default_score_bar_label(),
            a11y_retry: default_a11y_retry(),
            marker_size: default_marker_size(),
        }
    }
}

fn default_score_bar_label() -> String {
    "You got :num out of :total points".to_string()
}

fn default_a11y_retry() -> String {
    "Retry the task. Reset all responses and start the task over again.".to_string()
}

fn default_marker_size() -> [f32; 2] {
    [32.0, 32.0]
}

/// Background image settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackgroundImage {
    /// Image path, resolved through the host. Empty means no image.
    #[serde(default)]
    pub path: String,
    /// Authored width, used to reserve space before the image loads
    pub width: Option<u32>,
    /// Authored height, used to reserve space before the image loads
    pub height: Option<u32>,
}

impl BackgroundImage {
    pub fn has_path(&self) -> bool {
        !self.path.trim().is_empty()
    }

    /// Authored height/width ratio, if both were given
    pub fn authored_ratio(&self) -> Option<f32> {
        match (self.width, self.height) {
            (Some(w), Some(h)) if w > 0 => Some(h as f32 / w as f32),
            _ => None,
        }
    }
}

/// Hotspot and feedback settings
#[derive(Debug, Clone, Deserialize)]
pub struct HotspotSettings {
    /// Task introduction shown above the image
    #[serde(default)]
    pub task_description: Option<String>,
    /// Feedback when the click lands outside every hotspot
    #[serde(default)]
    pub none_selected_feedback: Option<String>,
    #[serde(default = "default_true")]
    pub show_feedback_as_popup: bool,
    #[serde(default)]
    pub l10n: L10n,
}

impl Default for HotspotSettings {
    fn default() -> Self {
        Self {
            task_description: None,
            none_selected_feedback: None,
            show_feedback_as_popup: true,
            l10n: L10n::default(),
        }
    }
}

/// Localized strings
#[derive(Debug, Clone, Deserialize)]
pub struct L10n {
    #[serde(default = "default_retry_text")]
    pub retry_text: String,
    #[serde(default = "default_close_text")]
    pub close_text: String,
    #[serde(default = "default_correct_text")]
    pub correct_text: String,
    #[serde(default = "default_show_solution_text")]
    pub show_solution_text: String,
}

impl Default for L10n {
    fn default() -> Self {
        Self {
            retry_text: default_retry_text(),
            close_text: default_close_text(),
            correct_text: default_correct_text(),
            show_solution_text: default_show_solution_text(),
        }
    }
}

fn default_retry_text() -> String {
    "Retry".to_string()
}
fn default_close_text() -> String {
    "Close".to_string()
}
fn default_correct_text() -> String {
    "Correct!".to_string()
}
fn default_show_solution_text() -> String {
    "Show solution".to_string()
}

/// Behaviour flags
#[derive(Debug, Clone, Deserialize)]
pub struct Behaviour {
    #[serde(default = "default_true")]
    pub enable_retry: bool,
    #[serde(default)]
    pub enable_solutions_button: bool,
}

impl Default for Behaviour {
    fn default() -> Self {
        Self {
            enable_retry: true,
            enable_solutions_button: false,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Content data handed over by the host next to the parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentData {
    /// Title from the content metadata
    #[serde(default)]
    pub title: Option<String>,
    /// Opaque state saved by an earlier session
    #[serde(default)]
    pub previous_state: Option<serde_json::Value>,
}
