//! Submission model
//!
//! The raw record posted by the screening form. Scalar fields are kept as
//! untyped JSON so that any value the form sends is accepted and left to
//! the encoder to interpret.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Answer marking a behavioural item as present
pub const AFFIRMATIVE: &str = "1";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    #[serde(default)]
    pub age: Value,
    #[serde(default)]
    pub gender: Value,
    #[serde(default)]
    pub ethnicity: Value,
    #[serde(default)]
    pub jaundice: Value,
    #[serde(default)]
    pub autism: Value,
    #[serde(default)]
    pub country: Value,
    #[serde(default)]
    pub used_app_before: Value,
    #[serde(default)]
    pub relation: Value,

    /// Item key (`A1`..`A10`) to `"0"` / `"1"`
    pub behavioral_scores: Map<String, Value>,
}

impl SubmissionRecord {
    /// Parse a request body
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// Behavioural answer for `item`, if it was sent as a string
    pub fn answer(&self, item: &str) -> Option<&str> {
        self.behavioral_scores.get(item).and_then(Value::as_str)
    }

    /// Answers equal to `"1"` across every submitted key, model item or not
    pub fn affirmative_answers(&self) -> usize {
        self.behavioral_scores
            .values()
            .filter(|v| v.as_str() == Some(AFFIRMATIVE))
            .count()
    }
}
