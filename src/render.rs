//! SVG renderer for the question view

use hotspot_ui::{HotspotShape, ImageView, QuestionView};

/// Height reserved below the image for feedback and buttons
const FOOTER_HEIGHT: f32 = 64.0;
/// Size used when there is nothing to lay out yet
const PLACEHOLDER_SIZE: [f32; 2] = [320.0, 48.0];

const CORRECT_COLOR: &str = "#1f9d55";
const WRONG_COLOR: &str = "#d64545";

/// Height of the introduction line above the image
const INTRO_HEIGHT: f32 = 28.0;

/// Render the view as a standalone SVG document
pub fn render_svg(view: &QuestionView) -> String {
    let (width, height) = if view.container.is_measurable() {
        (view.container.width, view.container.height)
    } else {
        (PLACEHOLDER_SIZE[0], PLACEHOLDER_SIZE[1])
    };
    let top = if view.introduction.is_some() { INTRO_HEIGHT } else { 0.0 };

    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = width,
        h = top + height + FOOTER_HEIGHT
    );

    if let Some(text) = &view.introduction {
        line(&mut svg, format!(r#"<text class="introduction" x="8" y="20">{}</text>"#, escape(text)));
    }

    let class = if view.disabled { "image-hotspots disabled" } else { "image-hotspots" };
    line(&mut svg, format!(r#"<g class="{}" transform="translate(0 {})">"#, class, top));

    match &view.image {
        ImageView::Missing { message } => {
            line(&mut svg, format!(r#"<text x="8" y="24">{}</text>"#, escape(message)));
        }
        ImageView::Loading { .. } => {
            line(
                &mut svg,
                format!(r##"<rect class="image-loader" width="{}" height="{}" fill="#eee"/>"##, width, height),
            );
        }
        ImageView::Loaded { path, width, height } => {
            line(
                &mut svg,
                format!(
                    r#"<image class="hotspot-image" href="{}" width="{}" height="{}"/>"#,
                    escape(path),
                    width,
                    height
                ),
            );
        }
    }

    for hotspot in &view.hotspots {
        let r = hotspot.rect;
        let shape = hotspot.shape.as_str();
        let element = match hotspot.shape {
            HotspotShape::Rectangle => format!(
                r#"<rect class="image-hotspot {}" x="{}" y="{}" width="{}" height="{}" fill="none"/>"#,
                shape, r.x, r.y, r.width, r.height
            ),
            HotspotShape::Circle => {
                let [cx, cy] = r.center();
                format!(
                    r#"<ellipse class="image-hotspot {}" cx="{}" cy="{}" rx="{}" ry="{}" fill="none"/>"#,
                    shape,
                    cx,
                    cy,
                    r.width / 2.0,
                    r.height / 2.0
                )
            }
        };
        line(&mut svg, element);
    }

    for marker in &view.markers {
        let color = if marker.correct { CORRECT_COLOR } else { WRONG_COLOR };
        line(
            &mut svg,
            format!(
                r#"<ellipse class="hotspot-feedback" cx="{}" cy="{}" rx="{}" ry="{}" fill="{}"/>"#,
                marker.position[0] + marker.size[0] / 2.0,
                marker.position[1] + marker.size[1] / 2.0,
                marker.size[0] / 2.0,
                marker.size[1] / 2.0,
                color
            ),
        );
    }
    svg.push_str("  </g>\n");

    let mut y = top + height + 20.0;
    if let Some(feedback) = &view.feedback {
        line(
            &mut svg,
            format!(r#"<text class="feedback" x="8" y="{}">{}</text>"#, y, escape(&feedback.text)),
        );
        y += 20.0;
        line(
            &mut svg,
            format!(
                r#"<text class="score-bar" x="8" y="{}">{}</text>"#,
                y,
                escape(&feedback.score_bar_text())
            ),
        );
        y += 20.0;
    }

    let labels: Vec<&str> = view.visible_buttons().map(|b| b.label()).collect();
    if !labels.is_empty() {
        line(
            &mut svg,
            format!(r#"<text class="buttons" x="8" y="{}">[{}]</text>"#, y, escape(&labels.join("] ["))),
        );
    }

    svg.push_str("</svg>\n");
    svg
}

/// Append one indented element
fn line(svg: &mut String, element: String) {
    svg.push_str("  ");
    svg.push_str(&element);
    svg.push('\n');
}
