//! Application state - a page hosting one question

use hotspot_ui::{ButtonId, ClickOutcome, ImageDescriptor, ImageHotspotQuestion, Question, QuestionView};

use crate::config::Config;
use crate::host::ConsoleHost;

/// Events the page delivers to the question
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The page was resized to this container width
    Resized(f32),
    /// Pointer click at container pixel coordinates
    Clicked(f32, f32),
    /// A button in the button bar was pressed
    ButtonClicked(ButtonId),
    /// The host asked for the solution
    ShowSolutions,
    /// The host asked for a reset
    Reset,
    /// Frame update (delta time in seconds)
    Update(f32),
}

/// Main application state
pub struct App {
    question: ImageHotspotQuestion<ConsoleHost>,
    container_width: f32,
}

impl App {
    /// Create new app from configuration
    pub fn new(config: Config, host: ConsoleHost) -> Self {
        let content = config.content.content_data();
        let question = ImageHotspotQuestion::new(config.question, config.content.id, content, host);

        Self {
            question,
            container_width: config.layout.container_width,
        }
    }

    /// Attach the question to the page and start loading its image
    pub fn start(&mut self) {
        self.question.register_dom_elements();
        self.question.on_resize(self.container_width);
        self.load_image();
    }

    /// Read the image size; a broken path leaves the loading placeholder up
    fn load_image(&mut self) {
        if !self.question.has_image() {
            return;
        }
        let path = self.question.image_path();
        match ImageDescriptor::from_path(&path) {
            Ok(image) => self.question.on_image_loaded(image.natural_width(), image.natural_height()),
            Err(e) => log::warn!("Background image {} did not load: {}", path, e),
        }
    }

    pub fn on_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Resized(width) => {
                self.container_width = width;
                self.question.on_resize(width);
            }
            AppEvent::Clicked(x, y) => match self.question.click_at(x, y) {
                ClickOutcome::Answered { correct, hotspot } => {
                    log::info!("Click at ({}, {}) answered: correct={}, hotspot={:?}", x, y, correct, hotspot);
                }
                ClickOutcome::Ignored(reason) => {
                    log::info!("Click at ({}, {}) ignored: {:?}", x, y, reason);
                }
            },
            AppEvent::ButtonClicked(id) => {
                let visible = self.question.button(id).is_some_and(|b| b.is_visible());
                if visible {
                    self.question.on_button_click(id);
                } else {
                    log::warn!("Button {} is not visible, press ignored", id.as_str());
                }
            }
            AppEvent::ShowSolutions => self.question.show_solutions(),
            AppEvent::Reset => self.question.reset_task(),
            AppEvent::Update(delta) => self.question.update(delta),
        }
    }

    pub fn question(&self) -> &ImageHotspotQuestion<ConsoleHost> {
        &self.question
    }

    pub fn view(&self) -> QuestionView {
        self.question.view()
    }
}
