use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::job::Job;
use crate::models::selector::Selector;
use crate::models::worker::Worker;

/// The full score request body: one job, one worker and an optional list
/// of selectors. `job` and `worker` stay `None` when absent so the handler
/// can reject the request; `selectors` defaults to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorePayload {
    pub job: Option<Job>,
    pub worker: Option<Worker>,
    pub selectors: Vec<Selector>,
}

impl ScorePayload {
    /// Parses a raw JSON body, matching property names case-insensitively
    /// and ignoring unknown fields.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(body)?;
        serde_json::from_value(lowercase_keys(value))
    }
}

// Property name matching is case-insensitive on the receiving side, so
// every object key is folded to lowercase before the typed deserialization
// (whose serde renames are all-lowercase) runs.
fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, nested)| (key.to_ascii_lowercase(), lowercase_keys(nested)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(lowercase_keys).collect()),
        other => other,
    }
}
