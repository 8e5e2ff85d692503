use std::collections::HashMap;

use hotspot_ui::{
    AttemptState, Button, ButtonId, ClickOutcome, ClickTarget, ContentData, Feedback, Host, HotspotDefinition,
    HotspotShape, IgnoreReason, ImageHotspotQuestion, ImageView, MarkerKind, Phase, Question, QuestionParams,
    QuestionView, ScreenshotCapture, ScreenshotError, XapiEvent,
};

#[derive(Default)]
struct Camera {
    shots: Vec<u32>,
    fail: bool,
}

impl ScreenshotCapture for Camera {
    fn take_screenshot(&mut self, content_id: u32, _view: &QuestionView) -> Result<(), ScreenshotError> {
        if self.fail {
            return Err(ScreenshotError::Capture("no canvas".into()));
        }
        self.shots.push(content_id);
        Ok(())
    }
}

#[derive(Default)]
struct RecordingHost {
    introduction: Option<String>,
    content_registered: bool,
    buttons: Vec<Button>,
    visibility: HashMap<ButtonId, bool>,
    feedback: Option<Feedback>,
    events: Vec<XapiEvent>,
    camera: Option<Camera>,
}

impl RecordingHost {
    fn with_camera() -> Self {
        Self {
            camera: Some(Camera::default()),
            ..Default::default()
        }
    }

    fn visible(&self, id: ButtonId) -> bool {
        self.visibility.get(&id).copied().unwrap_or(false)
    }

    fn shots(&self) -> usize {
        self.camera.as_ref().map_or(0, |c| c.shots.len())
    }
}

impl Host for RecordingHost {
    fn create_title(&self, raw: &str) -> String {
        format!("[{}]", raw)
    }

    fn set_introduction(&mut self, text: &str) {
        self.introduction = Some(text.to_string());
    }

    fn set_content(&mut self, _view: &QuestionView) {
        self.content_registered = true;
    }

    fn add_button(&mut self, button: &Button) {
        self.visibility.insert(button.id(), button.is_visible());
        self.buttons.push(button.clone());
    }

    fn set_button_visible(&mut self, id: ButtonId, visible: bool) {
        self.visibility.insert(id, visible);
    }

    fn set_feedback(&mut self, feedback: &Feedback) {
        self.feedback = Some(feedback.clone());
    }

    fn remove_feedback(&mut self) {
        self.feedback = None;
    }

    fn trigger(&mut self, event: &XapiEvent) {
        self.events.push(event.clone());
    }

    fn screenshot(&mut self) -> Option<&mut dyn ScreenshotCapture> {
        self.camera.as_mut().map(|c| c as &mut dyn ScreenshotCapture)
    }
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn hotspot(x: f32, y: f32, w: f32, h: f32, correct: bool, text: Option<&str>) -> HotspotDefinition {
    HotspotDefinition {
        shape: HotspotShape::Rectangle,
        x,
        y,
        width: w,
        height: h,
        is_correct: correct,
        feedback_text: text.map(str::to_string),
    }
}

fn params() -> QuestionParams {
    let mut params = QuestionParams::default();
    params.background_image.path = "lake.png".into();
    params.hotspots = vec![
        hotspot(10.0, 10.0, 20.0, 20.0, true, None),
        hotspot(60.0, 60.0, 20.0, 20.0, false, Some("Not quite")),
    ];
    params.hotspot_settings.none_selected_feedback = Some("You missed".into());
    params.hotspot_settings.task_description = Some("Click on the lake".into());
    params
}

/// 800x600 image laid out in a 400px container (400x300)
fn loaded(params: QuestionParams, host: RecordingHost) -> ImageHotspotQuestion<RecordingHost> {
    init_logger();
    let mut question = ImageHotspotQuestion::new(params, 7, ContentData::default(), host);
    question.register_dom_elements();
    question.on_image_loaded(800, 600);
    question.on_resize(400.0);
    question
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn test_correct_click_scores() {
    let mut question = loaded(params(), RecordingHost::default());

    let outcome = question.click_at(60.0, 45.0);
    assert_eq!(outcome, ClickOutcome::Answered { correct: true, hotspot: Some(0) });
    assert_eq!(question.score(), 1);
    assert!(question.answer_given());
    assert!(!question.host().visible(ButtonId::Retry));
    assert_eq!(question.phase(), Phase::Answered { correct: true });

    let marker = question.marker().unwrap();
    assert!(marker.is_correct());
    assert!(approx(marker.percent().x, 15.0));
    assert!(approx(marker.percent().y, 15.0));

    let feedback = question.host().feedback.as_ref().unwrap();
    assert_eq!(feedback.text, "Correct!");
    assert_eq!(feedback.score_bar_text(), "You got 1 out of 1 points");
    assert!(feedback.is_popup());

    let events = &question.host().events;
    assert_eq!(events.len(), 1);
    assert!(events[0].score_result.success);
}

#[test]
fn test_miss_shows_retry_and_none_selected_text() {
    let mut question = loaded(params(), RecordingHost::default());

    let outcome = question.click_at(200.0, 20.0);
    assert_eq!(outcome, ClickOutcome::Answered { correct: false, hotspot: None });
    assert_eq!(question.score(), 0);
    assert!(question.host().visible(ButtonId::Retry));

    let feedback = question.feedback().unwrap();
    assert_eq!(feedback.text, "You missed");
    let anchor = feedback.popup.as_ref().and_then(|p| p.anchor).unwrap();
    assert!(approx(anchor.x, 50.0));
    assert!(!question.has_pending_screenshot());
}

#[test]
fn test_incorrect_hotspot_uses_its_text() {
    let mut question = loaded(params(), RecordingHost::default());

    question.click_at(250.0, 200.0);
    assert_eq!(question.score(), 0);
    assert_eq!(question.feedback().unwrap().text, "Not quite");
    assert!(!question.marker().unwrap().is_correct());
}

#[test]
fn test_retry_disabled_keeps_button_hidden() {
    let mut p = params();
    p.behaviour.enable_retry = false;
    let mut question = loaded(p, RecordingHost::default());

    question.click_at(200.0, 20.0);
    assert!(!question.host().visible(ButtonId::Retry));
}

#[test]
fn test_second_click_is_ignored() {
    let mut question = loaded(params(), RecordingHost::default());
    question.click_at(200.0, 20.0);
    let marker = question.marker().cloned();

    let outcome = question.click(ClickTarget::Hotspot(0), [5.0, 5.0]);
    assert_eq!(outcome, ClickOutcome::Ignored(IgnoreReason::AlreadyAnswered));
    assert_eq!(question.score(), 0);
    assert!(question.answer_given());
    assert_eq!(question.marker().cloned(), marker);
    assert_eq!(question.host().events.len(), 1);
}

#[test]
fn test_click_on_hotspot_adds_hotspot_offset() {
    let mut question = loaded(params(), RecordingHost::default());

    // Hotspot 0 starts at (40, 30) in a 400x300 container
    question.click(ClickTarget::Hotspot(0), [40.0, 30.0]);
    let percent = question.marker().unwrap().percent();
    assert!(approx(percent.x, 20.0));
    assert!(approx(percent.y, 20.0));
}

#[test]
fn test_marker_follows_resizes() {
    let mut question = loaded(params(), RecordingHost::default());
    question.click_at(100.0, 150.0);
    let percent = question.marker().unwrap().percent();

    for width in [800.0, 123.0, 0.0, 640.0, 400.0] {
        question.on_resize(width);
        let container = question.container();
        let marker = question.marker().unwrap();
        let [x, y] = marker.position();
        let [ox, oy] = marker.pixel_offset();
        assert!(approx((x + ox) / (container.width / 100.0), percent.x));
        assert!(approx((y + oy) / (container.height / 100.0), percent.y));
    }

    let [x, y] = question.marker().unwrap().position();
    assert!(approx(x, 100.0 - 16.0));
    assert!(approx(y, 150.0 - 16.0));
}

#[test]
fn test_show_solutions_after_miss() {
    let mut question = loaded(params(), RecordingHost::default());
    question.click_at(200.0, 20.0);

    question.show_solutions();
    assert_eq!(question.phase(), Phase::SolutionsShown);
    assert!(question.attempt().disabled);
    assert!(!question.host().visible(ButtonId::Retry));
    assert_eq!(question.score(), 0);
    assert_eq!(question.host().feedback.as_ref().unwrap().text, "");

    let view = question.view();
    let solutions: Vec<_> = view.markers_of(MarkerKind::Solution).collect();
    assert_eq!(solutions.len(), 1);
    assert_eq!(view.markers_of(MarkerKind::Answer).count(), 0);
    // Centre of hotspot 0 is (80, 60); marker is 32x32
    assert!(approx(solutions[0].position[0], 64.0));
    assert!(approx(solutions[0].position[1], 44.0));
    assert!(solutions[0].correct);

    question.show_solutions();
    assert_eq!(question.solution_markers().len(), 1);

    question.reset_task();
    assert_eq!(question.phase(), Phase::Ready);
}

#[test]
fn test_clicks_ignored_while_solutions_shown() {
    let mut question = loaded(params(), RecordingHost::default());
    question.show_solutions();

    let outcome = question.click_at(60.0, 45.0);
    assert_eq!(outcome, ClickOutcome::Ignored(IgnoreReason::Disabled));
    assert_eq!(question.score(), 0);
    assert!(!question.answer_given());
    assert!(question.host().events.is_empty());
}

#[test]
fn test_score_survives_show_solutions() {
    let mut question = loaded(params(), RecordingHost::default());
    question.click_at(60.0, 45.0);
    question.show_solutions();
    assert_eq!(question.score(), 1);
    assert_eq!(question.host().feedback.as_ref().unwrap().score, 1);
}

#[test]
fn test_reset_returns_to_fresh_state() {
    let fresh = loaded(params(), RecordingHost::default());

    let mut question = loaded(params(), RecordingHost::with_camera());
    question.click_at(60.0, 45.0);
    question.show_solutions();
    question.on_button_click(ButtonId::Retry);

    assert_eq!(question.attempt(), &AttemptState::default());
    assert_eq!(question.attempt(), fresh.attempt());
    assert_eq!(question.phase(), fresh.phase());
    assert!(question.marker().is_none());
    assert!(question.solution_markers().is_empty());
    assert!(question.feedback().is_none());
    assert!(question.host().feedback.is_none());
    assert!(!question.host().visible(ButtonId::Retry));
    assert_eq!(question.view(), fresh.view());

    // A new attempt is accepted
    let outcome = question.click_at(250.0, 200.0);
    assert_eq!(outcome, ClickOutcome::Answered { correct: false, hotspot: Some(1) });
}

#[test]
fn test_resize_before_load_is_harmless() {
    init_logger();
    let mut question = ImageHotspotQuestion::new(params(), 1, ContentData::default(), RecordingHost::default());

    question.on_resize(0.0);
    assert_eq!(question.attempt(), &AttemptState::default());
    assert!(!question.container().is_measurable());
    assert_eq!(
        question.click_at(10.0, 10.0),
        ClickOutcome::Ignored(IgnoreReason::GeometryUnavailable)
    );
    assert_eq!(
        question.click(ClickTarget::Image, [10.0, 10.0]),
        ClickOutcome::Ignored(IgnoreReason::GeometryUnavailable)
    );
    assert!(!question.answer_given());
    assert!(matches!(question.view().image, ImageView::Loading { .. }));
}

#[test]
fn test_authored_size_reserves_space_while_loading() {
    init_logger();
    let mut p = params();
    p.background_image.width = Some(800);
    p.background_image.height = Some(600);
    let mut question = ImageHotspotQuestion::new(p, 1, ContentData::default(), RecordingHost::default());

    question.on_resize(400.0);
    assert!(approx(question.container().height, 300.0));
    assert!(matches!(question.view().image, ImageView::Loading { .. }));

    question.on_image_loaded(1600, 800);
    assert!(approx(question.container().height, 200.0));
    assert!(matches!(question.view().image, ImageView::Loaded { .. }));
}

#[test]
fn test_small_image_keeps_natural_size() {
    init_logger();
    let mut question = ImageHotspotQuestion::new(params(), 1, ContentData::default(), RecordingHost::default());
    question.on_image_loaded(200, 100);
    question.on_resize(1000.0);

    assert_eq!(question.container().width, 200.0);
    assert_eq!(question.container().height, 100.0);
    assert!(approx(question.hotspots()[0].rect().x, 20.0));
}

#[test]
fn test_missing_image_degrades_to_placeholder() {
    init_logger();
    let mut p = params();
    p.background_image.path = String::new();
    let mut question = ImageHotspotQuestion::new(p, 1, ContentData::default(), RecordingHost::default());
    question.on_image_loaded(800, 600);
    question.on_resize(400.0);

    assert!(question.hotspots().is_empty());
    assert_eq!(
        question.click(ClickTarget::Image, [1.0, 1.0]),
        ClickOutcome::Ignored(IgnoreReason::NoImage)
    );
    match question.view().image {
        ImageView::Missing { message } => assert_eq!(message, "No background image was added!"),
        other => panic!("unexpected image view {:?}", other),
    }
}

#[test]
fn test_screenshot_fires_after_delay() {
    let mut question = loaded(params(), RecordingHost::with_camera());
    question.click_at(60.0, 45.0);
    assert!(question.has_pending_screenshot());

    question.update(0.5);
    assert_eq!(question.host().shots(), 0);
    question.update(0.6);
    assert_eq!(question.host().shots(), 1);
    question.update(5.0);
    assert_eq!(question.host().shots(), 1);
    assert!(!question.has_pending_screenshot());
}

#[test]
fn test_reset_cancels_pending_screenshot() {
    let mut question = loaded(params(), RecordingHost::with_camera());
    question.click_at(60.0, 45.0);
    question.reset_task();

    question.update(2.0);
    assert_eq!(question.host().shots(), 0);
}

#[test]
fn test_screenshot_failure_leaves_state_alone() {
    let mut host = RecordingHost::with_camera();
    if let Some(camera) = host.camera.as_mut() {
        camera.fail = true;
    }
    let mut question = loaded(params(), host);
    question.click_at(60.0, 45.0);
    question.update(1.5);

    assert_eq!(question.score(), 1);
    assert!(question.marker().is_some());
    assert_eq!(question.phase(), Phase::Answered { correct: true });
}

#[test]
fn test_missing_camera_is_skipped() {
    let mut question = loaded(params(), RecordingHost::default());
    question.click_at(60.0, 45.0);
    question.update(1.5);
    assert!(!question.has_pending_screenshot());
    assert_eq!(question.score(), 1);
}

#[test]
fn test_solutions_button_lifecycle() {
    let mut p = params();
    p.behaviour.enable_solutions_button = true;
    let mut question = loaded(p, RecordingHost::default());

    assert!(question.button(ButtonId::ShowSolution).is_some());
    assert!(!question.host().visible(ButtonId::ShowSolution));

    question.click_at(200.0, 20.0);
    assert!(question.host().visible(ButtonId::ShowSolution));

    question.on_button_click(ButtonId::ShowSolution);
    assert_eq!(question.phase(), Phase::SolutionsShown);
    assert!(!question.host().visible(ButtonId::ShowSolution));
}

#[test]
fn test_register_dom_elements() {
    let question = loaded(params(), RecordingHost::default());
    let host = question.host();

    assert_eq!(host.introduction.as_deref(), Some("Click on the lake"));
    assert!(host.content_registered);
    assert_eq!(host.buttons.len(), 1);
    assert_eq!(host.buttons[0].label(), "Retry");
    assert!(host.buttons[0].aria_label().unwrap().starts_with("Retry the task"));
    assert!(!host.buttons[0].is_visible());
}

#[test]
fn test_xapi_data_uses_title_and_description() {
    init_logger();
    let content = ContentData {
        title: Some("Lakes".into()),
        previous_state: Some(serde_json::json!({ "answer": 1 })),
    };
    let mut question = ImageHotspotQuestion::new(params(), 3, content, RecordingHost::default());
    question.on_image_loaded(800, 600);
    question.on_resize(400.0);
    question.click_at(60.0, 45.0);

    let data = question.xapi_data();
    let definition = &data.statement.object_definition;
    assert_eq!(definition.name["en-US"], "[Lakes]");
    assert_eq!(definition.description["en-US"], "Click on the lake");
    assert_eq!(data.statement.score_result.raw, 1);

    // Previous state is kept but does not restore anything
    assert!(question.previous_state().is_some());

    let untitled = loaded(QuestionParams::default(), RecordingHost::default());
    let definition = untitled.xapi_data().statement.object_definition;
    assert_eq!(definition.name["en-US"], "[Image Hotspot Question]");
    assert_eq!(definition.description["en-US"], "Image Hotspot Question");
}

#[test]
fn test_topmost_hotspot_wins() {
    let mut p = params();
    p.hotspots = vec![
        hotspot(0.0, 0.0, 50.0, 50.0, false, Some("Below")),
        hotspot(10.0, 10.0, 20.0, 20.0, true, Some("Above")),
    ];
    let mut question = loaded(p, RecordingHost::default());

    let outcome = question.click_at(60.0, 45.0);
    assert_eq!(outcome, ClickOutcome::Answered { correct: true, hotspot: Some(1) });
    assert_eq!(question.feedback().unwrap().text, "Above");
}

#[test]
fn test_params_from_json() {
    let params: QuestionParams = serde_json::from_str(
        r#"{
            "background_image": { "path": "map.png", "width": 640, "height": 480 },
            "hotspots": [
                { "shape": "circle", "x": 5, "y": 5, "width": 10, "height": 10, "correct": true }
            ],
            "behaviour": { "enable_solutions_button": true }
        }"#,
    )
    .unwrap();

    assert_eq!(params.hotspots[0].shape, HotspotShape::Circle);
    assert!(params.hotspots[0].is_correct);
    assert!(params.behaviour.enable_retry);
    assert!(params.behaviour.enable_solutions_button);
    assert!(params.hotspot_settings.show_feedback_as_popup);
    assert_eq!(params.hotspot_settings.l10n.correct_text, "Correct!");
    assert_eq!(params.marker_size, [32.0, 32.0]);
}
