//! Interaction state machine of the image hotspot question

use crate::background::ImageDescriptor;
use crate::elements::{Button, ButtonId, FeedbackMarker, Hotspot, MarkerKind};
use crate::feedback::{Feedback, PopupSettings};
use crate::geometry::{self, ContainerSize, PercentPoint};
use crate::host::Host;
use crate::params::{ContentData, QuestionParams};
use crate::timer::DeferredTask;
use crate::view::{HotspotView, ImageView, MarkerView, QuestionView};
use crate::xapi::{XapiData, XapiEvent};

/// Title and description used when the content has none
pub const DEFAULT_DESCRIPTION: &str = "Image Hotspot Question";

/// Placeholder shown when no background image is configured
pub const NO_IMAGE_MESSAGE: &str = "No background image was added!";

/// Seconds between a full score and the screenshot capture
pub const SCREENSHOT_DELAY: f32 = 1.0;

/// Feedback shown for a miss when no "none selected" text is configured
const BLANK_FEEDBACK: &str = "\u{a0}";

/// Capability interface the host controller drives the question through
pub trait Question {
    /// Register introduction, content and buttons with the host
    fn register_dom_elements(&mut self);
    fn answer_given(&self) -> bool;
    fn score(&self) -> u32;
    fn max_score(&self) -> u32;
    /// Reveal every correct hotspot and stop accepting clicks
    fn show_solutions(&mut self);
    /// Return to the freshly constructed state
    fn reset_task(&mut self);
    fn xapi_data(&self) -> XapiData;
}

/// Interaction phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for the first click
    #[default]
    Ready,
    /// A click was scored
    Answered { correct: bool },
    /// Correct hotspots are revealed; only a reset leaves this phase
    SolutionsShown,
}

/// Score and click bookkeeping for the current attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptState {
    pub score: u32,
    pub max_score: u32,
    pub answer_given: bool,
    pub disabled: bool,
    /// Mirrors the existence of the answer marker
    pub hotspot_chosen: bool,
}

impl Default for AttemptState {
    fn default() -> Self {
        Self {
            score: 0,
            max_score: 1,
            answer_given: false,
            disabled: false,
            hotspot_chosen: false,
        }
    }
}

/// Element that received a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The image itself, outside any hotspot
    Image,
    /// A hotspot by index
    Hotspot(usize),
}

/// Why a click did not register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    NoImage,
    AlreadyAnswered,
    Disabled,
    GeometryUnavailable,
    OutsideContainer,
    UnknownHotspot,
}

/// Result of a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Answered { correct: bool, hotspot: Option<usize> },
    Ignored(IgnoreReason),
}

/// An image with clickable hotspots, answered with a single click.
pub struct ImageHotspotQuestion<H: Host> {
    params: QuestionParams,
    content_id: u32,
    content: ContentData,
    host: H,
    /// Set once the background image has loaded
    image: Option<ImageDescriptor>,
    /// Width offered by the host on the last resize
    container_width: f32,
    /// Overlay container, matches the rendered image
    container: ContainerSize,
    hotspots: Vec<Hotspot>,
    marker: Option<FeedbackMarker>,
    solution_markers: Vec<FeedbackMarker>,
    attempt: AttemptState,
    phase: Phase,
    buttons: Vec<Button>,
    feedback: Option<Feedback>,
    pending_screenshot: Option<DeferredTask>,
}

impl<H: Host> ImageHotspotQuestion<H> {
    /// Create a question from its parameters. Hotspots are attached only when
    /// a background image is configured.
    pub fn new(params: QuestionParams, content_id: u32, content: ContentData, host: H) -> Self {
        let hotspots = if params.background_image.has_path() {
            params
                .hotspots
                .iter()
                .cloned()
                .enumerate()
                .map(|(index, def)| Hotspot::new(index, def))
                .collect()
        } else {
            log::warn!("Question {} has no background image, hotspots not attached", content_id);
            Vec::new()
        };

        let l10n = &params.hotspot_settings.l10n;
        let mut buttons = vec![Button::new(ButtonId::Retry, &l10n.retry_text).with_aria_label(&params.a11y_retry)];
        if params.behaviour.enable_solutions_button {
            buttons.push(Button::new(ButtonId::ShowSolution, &l10n.show_solution_text));
        }

        if content.previous_state.is_some() {
            log::debug!("Question {} received a previous state; it is kept but not applied", content_id);
        }

        Self {
            params,
            content_id,
            content,
            host,
            image: None,
            container_width: 0.0,
            container: ContainerSize::default(),
            hotspots,
            marker: None,
            solution_markers: Vec::new(),
            attempt: AttemptState::default(),
            phase: Phase::Ready,
            buttons,
            feedback: None,
            pending_screenshot: None,
        }
    }

    // -- Host lifecycle --

    /// The background image finished loading
    pub fn on_image_loaded(&mut self, natural_width: u32, natural_height: u32) {
        if !self.has_image() {
            log::warn!("Image load reported but no image is configured");
            return;
        }
        if self.image.is_some() {
            return;
        }

        let path = self.image_path();
        log::info!("Background image loaded: {} ({}x{})", path, natural_width, natural_height);
        self.image = Some(ImageDescriptor::new(path, natural_width, natural_height));
        self.resize();
    }

    /// The host resized the area the question lives in
    pub fn on_resize(&mut self, container_width: f32) {
        self.container_width = container_width;
        self.resize();
    }

    /// Frame tick, `delta` in seconds
    pub fn update(&mut self, delta: f32) {
        let due = match self.pending_screenshot.as_mut() {
            Some(task) => task.advance(delta),
            None => false,
        };
        if due {
            self.pending_screenshot = None;
            self.capture_screenshot();
        }
    }

    /// A button registered by this question was pressed
    pub fn on_button_click(&mut self, id: ButtonId) {
        log::info!("Button pressed: {}", id.as_str());
        match id {
            ButtonId::Retry => self.reset_task(),
            ButtonId::ShowSolution => self.show_solutions(),
        }
    }

    // -- Clicks --

    /// Resolve a pointer position in container pixels to the topmost hotspot
    /// under it, or the image, and register the click.
    pub fn click_at(&mut self, x: f32, y: f32) -> ClickOutcome {
        if !self.container.is_measurable() {
            return self.ignore(IgnoreReason::GeometryUnavailable);
        }
        if x < 0.0 || y < 0.0 || x > self.container.width || y > self.container.height {
            return self.ignore(IgnoreReason::OutsideContainer);
        }

        let hit = self.hotspots.iter().rev().find(|h| h.contains_point(x, y));
        match hit {
            Some(hotspot) => {
                let [hx, hy] = hotspot.offset();
                let index = hotspot.index();
                self.click(ClickTarget::Hotspot(index), [x - hx, y - hy])
            }
            None => self.click(ClickTarget::Image, [x, y]),
        }
    }

    /// Register a click at `offset` pixels inside `target`.
    ///
    /// Only the first click of an attempt is scored; later ones are ignored
    /// until the task is reset.
    pub fn click(&mut self, target: ClickTarget, offset: [f32; 2]) -> ClickOutcome {
        if !self.has_image() {
            return self.ignore(IgnoreReason::NoImage);
        }
        if self.attempt.hotspot_chosen {
            return self.ignore(IgnoreReason::AlreadyAnswered);
        }
        if self.attempt.disabled {
            return self.ignore(IgnoreReason::Disabled);
        }

        let (target_offset, hotspot) = match target {
            ClickTarget::Image => (None, None),
            ClickTarget::Hotspot(index) => match self.hotspots.get(index) {
                Some(h) => (Some(h.offset()), Some(index)),
                None => return self.ignore(IgnoreReason::UnknownHotspot),
            },
        };

        let Some(percent) = geometry::record_click(offset, target_offset, self.container) else {
            return self.ignore(IgnoreReason::GeometryUnavailable);
        };

        self.answer(percent, hotspot)
    }

    fn ignore(&self, reason: IgnoreReason) -> ClickOutcome {
        log::debug!("Click ignored: {:?}", reason);
        ClickOutcome::Ignored(reason)
    }

    fn answer(&mut self, percent: PercentPoint, hotspot: Option<usize>) -> ClickOutcome {
        let chosen = hotspot.and_then(|i| self.hotspots.get(i)).map(|h| h.definition().clone());
        let correct = chosen.as_ref().is_some_and(|def| def.is_correct);

        self.attempt.answer_given = true;
        self.attempt.disabled = true;

        let mut marker = FeedbackMarker::new(MarkerKind::Answer, percent, self.params.marker_size, correct);
        marker.reposition(self.container);
        self.marker = Some(marker);
        self.attempt.hotspot_chosen = true;
        self.phase = Phase::Answered { correct };

        log::info!(
            "Answer at ({:.1}%, {:.1}%), hotspot {:?}, correct: {}",
            percent.x, percent.y, hotspot, correct
        );

        if correct {
            self.finish_question();
        } else {
            if self.params.behaviour.enable_retry {
                self.set_button_visible(ButtonId::Retry, true);
            }
            self.set_button_visible(ButtonId::ShowSolution, true);
        }

        let settings = &self.params.hotspot_settings;
        let text = match &chosen {
            None => settings
                .none_selected_feedback
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| BLANK_FEEDBACK.to_string()),
            Some(def) => def
                .feedback_text
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| settings.l10n.correct_text.clone()),
        };

        let feedback = Feedback::new(text, self.attempt.score, self.attempt.max_score, &self.params.score_bar_label)
            .with_popup(PopupSettings {
                show_as_popup: settings.show_feedback_as_popup,
                close_text: settings.l10n.close_text.clone(),
                anchor: Some(percent),
            });
        self.host.set_feedback(&feedback);
        self.feedback = Some(feedback);

        if self.attempt.score == self.attempt.max_score {
            self.pending_screenshot = Some(DeferredTask::new(SCREENSHOT_DELAY));
        }

        let event = self.answer_event();
        self.host.trigger(&event);

        ClickOutcome::Answered { correct, hotspot }
    }

    fn finish_question(&mut self) {
        self.attempt.score = self.attempt.max_score;
        self.set_button_visible(ButtonId::Retry, false);
        self.set_button_visible(ButtonId::ShowSolution, false);
    }

    // -- Geometry --

    fn resize(&mut self) {
        self.resize_image();
        self.resize_markers();
    }

    fn resize_image(&mut self) {
        if !self.has_image() {
            return;
        }

        let size = match &self.image {
            Some(image) => {
                geometry::layout_image(self.container_width, image.natural_width(), image.natural_height())
            }
            // Reserve the authored aspect ratio until the image arrives
            None => self
                .params
                .background_image
                .authored_ratio()
                .filter(|_| self.container_width > 0.0)
                .map(|ratio| (self.container_width, self.container_width * ratio)),
        };

        let Some((width, height)) = size else {
            log::debug!("Resize skipped: container width {}", self.container_width);
            return;
        };

        self.container = ContainerSize::new(width, height);
        for hotspot in &mut self.hotspots {
            hotspot.place(self.container);
        }
        log::debug!("Container laid out at {}x{}", width, height);
    }

    fn resize_markers(&mut self) {
        if let Some(marker) = self.marker.as_mut() {
            marker.reposition(self.container);
        }
        for marker in &mut self.solution_markers {
            marker.reposition(self.container);
        }
    }

    // -- Buttons and feedback --

    fn set_button_visible(&mut self, id: ButtonId, visible: bool) {
        let Some(button) = self.buttons.iter_mut().find(|b| b.id() == id) else {
            return;
        };
        button.set_visible(visible);
        self.host.set_button_visible(id, visible);
    }

    fn capture_screenshot(&mut self) {
        let view = self.view();
        let content_id = self.content_id;
        match self.host.screenshot() {
            Some(capture) => {
                if let Err(e) = capture.take_screenshot(content_id, &view) {
                    log::warn!("Screenshot failed: {}", e);
                }
            }
            None => log::debug!("No screenshot collaborator, skipping"),
        }
    }

    // -- Telemetry --

    fn title(&self) -> String {
        let raw = self
            .content
            .title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(DEFAULT_DESCRIPTION);
        self.host.create_title(raw)
    }

    fn description(&self) -> String {
        self.params
            .hotspot_settings
            .task_description
            .clone()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string())
    }

    fn answer_event(&self) -> XapiEvent {
        XapiEvent::answered(self.attempt.score, self.attempt.max_score, self.title(), self.description())
    }

    // -- Accessors --

    pub fn has_image(&self) -> bool {
        self.params.background_image.has_path()
    }

    /// Image path resolved through the host
    pub fn image_path(&self) -> String {
        self.host.asset_path(&self.params.background_image.path, self.content_id)
    }

    pub fn image(&self) -> Option<&ImageDescriptor> {
        self.image.as_ref()
    }

    pub fn attempt(&self) -> &AttemptState {
        &self.attempt
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn container(&self) -> ContainerSize {
        self.container
    }

    pub fn hotspots(&self) -> &[Hotspot] {
        &self.hotspots
    }

    pub fn marker(&self) -> Option<&FeedbackMarker> {
        self.marker.as_ref()
    }

    pub fn solution_markers(&self) -> &[FeedbackMarker] {
        &self.solution_markers
    }

    pub fn button(&self, id: ButtonId) -> Option<&Button> {
        self.buttons.iter().find(|b| b.id() == id)
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Opaque state handed over at construction
    pub fn previous_state(&self) -> Option<&serde_json::Value> {
        self.content.previous_state.as_ref()
    }

    pub fn has_pending_screenshot(&self) -> bool {
        self.pending_screenshot.is_some()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Snapshot for rendering
    pub fn view(&self) -> QuestionView {
        let image = if !self.has_image() {
            ImageView::Missing {
                message: NO_IMAGE_MESSAGE.to_string(),
            }
        } else if self.image.is_some() && self.container.is_measurable() {
            ImageView::Loaded {
                path: self.image_path(),
                width: self.container.width,
                height: self.container.height,
            }
        } else {
            ImageView::Loading { path: self.image_path() }
        };

        let hotspots = self
            .hotspots
            .iter()
            .map(|h| HotspotView {
                index: h.index(),
                shape: h.definition().shape,
                rect: h.rect(),
            })
            .collect();

        // Solutions replace the user's own marker on screen
        let shown: Vec<&FeedbackMarker> = if self.phase == Phase::SolutionsShown {
            self.solution_markers.iter().collect()
        } else {
            self.marker.iter().collect()
        };
        let markers = shown
            .into_iter()
            .map(|m| MarkerView {
                kind: m.kind(),
                position: m.position(),
                size: m.size(),
                correct: m.is_correct(),
            })
            .collect();

        QuestionView {
            introduction: self.params.hotspot_settings.task_description.clone(),
            container: self.container,
            image,
            hotspots,
            markers,
            buttons: self.buttons.clone(),
            feedback: self.feedback.clone(),
            disabled: self.attempt.disabled,
        }
    }
}

impl<H: Host> Question for ImageHotspotQuestion<H> {
    fn register_dom_elements(&mut self) {
        if let Some(text) = self
            .params
            .hotspot_settings
            .task_description
            .clone()
            .filter(|t| !t.trim().is_empty())
        {
            self.host.set_introduction(&text);
        }

        let view = self.view();
        self.host.set_content(&view);

        for button in &self.buttons {
            self.host.add_button(button);
        }
        log::info!("Question {} registered with {} hotspots", self.content_id, self.hotspots.len());
    }

    fn answer_given(&self) -> bool {
        self.attempt.answer_given
    }

    fn score(&self) -> u32 {
        self.attempt.score
    }

    fn max_score(&self) -> u32 {
        self.attempt.max_score
    }

    fn show_solutions(&mut self) {
        self.set_button_visible(ButtonId::Retry, false);
        self.set_button_visible(ButtonId::ShowSolution, false);

        let size = self.params.marker_size;
        let container = self.container;
        self.solution_markers = self
            .hotspots
            .iter()
            .filter(|h| h.is_correct())
            .map(|h| {
                let center = geometry::hotspot_center(h.definition());
                let mut marker = FeedbackMarker::new(MarkerKind::Solution, center, size, true);
                marker.reposition(container);
                marker
            })
            .collect();

        let feedback = Feedback::new("", self.score(), self.max_score(), &self.params.score_bar_label);
        self.host.set_feedback(&feedback);
        self.feedback = Some(feedback);

        self.attempt.disabled = true;
        self.phase = Phase::SolutionsShown;
        log::info!("Showing {} solution markers", self.solution_markers.len());
    }

    fn reset_task(&mut self) {
        self.marker = None;
        self.solution_markers.clear();
        self.attempt.hotspot_chosen = false;
        self.attempt.score = 0;

        self.set_button_visible(ButtonId::Retry, false);
        self.set_button_visible(ButtonId::ShowSolution, false);

        self.feedback = None;
        self.host.remove_feedback();

        if self.pending_screenshot.take().is_some() {
            log::debug!("Pending screenshot cancelled by reset");
        }

        self.attempt.disabled = false;
        self.attempt.answer_given = false;
        self.phase = Phase::Ready;
        log::info!("Question {} reset", self.content_id);
    }

    fn xapi_data(&self) -> XapiData {
        XapiData {
            statement: self.answer_event(),
        }
    }
}
