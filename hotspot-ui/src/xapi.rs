//! Telemetry statements emitted when a question is answered

use std::collections::BTreeMap;

use serde::Serialize;

pub const VERB_ANSWERED: &str = "answered";
pub const ACTIVITY_TYPE: &str = "http://adlnet.gov/expapi/activities/cmi.interaction";
pub const INTERACTION_TYPE: &str = "choice";

const LANGUAGE: &str = "en-US";

/// Language map such as `{"en-US": "..."}`
pub type LanguageMap = BTreeMap<String, String>;

fn language_map(text: impl Into<String>) -> LanguageMap {
    let mut map = LanguageMap::new();
    map.insert(LANGUAGE.to_string(), text.into());
    map
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub raw: u32,
    pub max: u32,
    pub min: u32,
    pub scaled: f32,
    pub success: bool,
    pub completion: bool,
}

impl ScoreResult {
    pub fn new(raw: u32, max: u32) -> Self {
        let scaled = if max == 0 {
            0.0
        } else {
            ((raw as f32 / max as f32) * 10000.0).round() / 10000.0
        };

        Self {
            raw,
            max,
            min: 0,
            scaled,
            success: raw == max,
            completion: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectDefinition {
    pub name: LanguageMap,
    pub description: LanguageMap,
    pub activity_type: String,
    pub interaction_type: String,
}

impl ObjectDefinition {
    pub fn choice(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: language_map(name),
            description: language_map(description),
            activity_type: ACTIVITY_TYPE.to_string(),
            interaction_type: INTERACTION_TYPE.to_string(),
        }
    }
}

/// A telemetry event ready to be handed to the host's transport
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XapiEvent {
    pub verb: String,
    pub score_result: ScoreResult,
    pub object_definition: ObjectDefinition,
}

impl XapiEvent {
    /// Build an "answered" event for the given score
    pub fn answered(score: u32, max_score: u32, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            verb: VERB_ANSWERED.to_string(),
            score_result: ScoreResult::new(score, max_score),
            object_definition: ObjectDefinition::choice(name, description),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Statement wrapper returned to hosts that collect results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XapiData {
    pub statement: XapiEvent,
}
