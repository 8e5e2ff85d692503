//! Console host - logs what a page host would render

use std::path::{Path, PathBuf};

use hotspot_ui::{
    Button, ButtonId, Feedback, Host, QuestionView, ScreenshotCapture, ScreenshotError, XapiEvent,
};

use crate::render;

/// Writes an SVG snapshot of the finished question
pub struct SvgScreenshot {
    dir: PathBuf,
}

impl SvgScreenshot {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ScreenshotCapture for SvgScreenshot {
    fn take_screenshot(&mut self, content_id: u32, view: &QuestionView) -> Result<(), ScreenshotError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(format!("screenshot-{}.svg", content_id));
        std::fs::write(&path, render::render_svg(view))?;
        log::info!("Screenshot written to {}", path.display());
        Ok(())
    }
}

/// Host that stands in for a page: logs button bar and feedback changes and
/// prints telemetry statements as JSON lines.
pub struct ConsoleHost {
    assets_dir: PathBuf,
    screenshot: Option<SvgScreenshot>,
    statements: Vec<String>,
}

impl ConsoleHost {
    pub fn new(assets_dir: impl AsRef<Path>) -> Self {
        Self {
            assets_dir: assets_dir.as_ref().to_path_buf(),
            screenshot: None,
            statements: Vec::new(),
        }
    }

    pub fn with_screenshots(mut self, dir: impl Into<PathBuf>) -> Self {
        self.screenshot = Some(SvgScreenshot::new(dir));
        self
    }

    /// Telemetry statements sent so far, as JSON
    pub fn statements(&self) -> &[String] {
        &self.statements
    }
}

impl Host for ConsoleHost {
    fn asset_path(&self, path: &str, _content_id: u32) -> String {
        if path.contains("://") || Path::new(path).is_absolute() {
            return path.to_string();
        }
        self.assets_dir.join(path).to_string_lossy().into_owned()
    }

    fn create_title(&self, raw: &str) -> String {
        raw.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn set_introduction(&mut self, text: &str) {
        log::info!("Introduction: {}", text);
    }

    fn set_content(&mut self, view: &QuestionView) {
        log::info!("Content registered with {} hotspots", view.hotspots.len());
    }

    fn add_button(&mut self, button: &Button) {
        log::info!(
            "Button registered: {} '{}' (visible: {})",
            button.id().as_str(),
            button.label(),
            button.is_visible()
        );
    }

    fn set_button_visible(&mut self, id: ButtonId, visible: bool) {
        log::debug!("Button {} visible: {}", id.as_str(), visible);
    }

    fn set_feedback(&mut self, feedback: &Feedback) {
        let mode = if feedback.is_popup() { "popup" } else { "inline" };
        log::info!("Feedback ({}): '{}' - {}", mode, feedback.text, feedback.score_bar_text());
    }

    fn remove_feedback(&mut self) {
        log::info!("Feedback cleared");
    }

    fn trigger(&mut self, event: &XapiEvent) {
        match event.to_json() {
            Ok(json) => {
                println!("{}", json);
                self.statements.push(json);
            }
            Err(e) => log::error!("Failed to serialize {} event: {}", event.verb, e),
        }
    }

    fn screenshot(&mut self) -> Option<&mut dyn ScreenshotCapture> {
        self.screenshot.as_mut().map(|s| s as &mut dyn ScreenshotCapture)
    }
}
