//! Scripted session actions - what a user and the page do to the question

use hotspot_ui::ButtonId;

use crate::app::AppEvent;

/// Parse a scripted event.
///
/// Accepted forms: `resize:<width>`, `click:<x>,<y>`, `press:<button-id>`,
/// `tick:<seconds>`, `solutions`, `reset`.
pub fn parse_event(s: &str) -> Result<AppEvent, String> {
    let s = s.trim();
    let (name, arg) = match s.split_once(':') {
        Some((name, arg)) => (name.trim(), Some(arg.trim())),
        None => (s, None),
    };

    match (name.to_lowercase().as_str(), arg) {
        ("resize", Some(arg)) => Ok(AppEvent::Resized(parse_number(arg)?)),
        ("click", Some(arg)) => {
            let (x, y) = arg
                .split_once(',')
                .ok_or_else(|| format!("Expected click:<x>,<y>, got '{}'", s))?;
            Ok(AppEvent::Clicked(parse_number(x)?, parse_number(y)?))
        }
        ("press", Some(arg)) => ButtonId::from_name(arg)
            .map(AppEvent::ButtonClicked)
            .ok_or_else(|| format!("Unknown button '{}'", arg)),
        ("tick", Some(arg)) => Ok(AppEvent::Update(parse_number(arg)?)),
        ("solutions", None) => Ok(AppEvent::ShowSolutions),
        ("reset", None) => Ok(AppEvent::Reset),
        _ => Err(format!("Unknown event '{}'", s)),
    }
}

fn parse_number(s: &str) -> Result<f32, String> {
    s.trim()
        .parse::<f32>()
        .map_err(|e| format!("Invalid number '{}': {}", s, e))
}
