//! Feature encoder
//!
//! Total mapping from a submission to model features: a field encodes to 1
//! only when it carries its sentinel string, every other value (absent,
//! empty, wrong type, unexpected text) encodes to 0.

use serde_json::Value;

use crate::models::{FeatureVector, SubmissionRecord, AFFIRMATIVE, BEHAVIORAL_ITEMS};

const MALE: &str = "m";
const YES: &str = "yes";

#[derive(Debug, Clone, Copy)]
pub struct FeatureEncoder<'a> {
    items: &'a [&'a str],
}

impl FeatureEncoder<'static> {
    /// Encoder over the ten questionnaire items
    pub fn standard() -> Self {
        Self::new(&BEHAVIORAL_ITEMS)
    }
}

impl Default for FeatureEncoder<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> FeatureEncoder<'a> {
    pub const fn new(items: &'a [&'a str]) -> Self {
        Self { items }
    }

    pub fn encode(&self, record: &SubmissionRecord) -> FeatureVector {
        let scores = self
            .items
            .iter()
            .map(|item| {
                let bit = u8::from(record.answer(item) == Some(AFFIRMATIVE));
                (item.to_string(), bit)
            })
            .collect();

        FeatureVector {
            age: numeric(&record.age),
            gender: flag(&record.gender, MALE),
            jaundice: flag(&record.jaundice, YES),
            autism: flag(&record.autism, YES),
            scores,
            raw_affirmative: record.affirmative_answers(),
        }
    }
}

fn flag(value: &Value, sentinel: &str) -> u8 {
    u8::from(value.as_str() == Some(sentinel))
}

/// Numbers pass through; numeric strings (what a form input yields) are
/// read as numbers; anything else is 0.
fn numeric(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|n| n.is_finite()).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(body: Value) -> SubmissionRecord {
        serde_json::from_value(body).unwrap()
    }

    fn all_answers(value: &str) -> Value {
        let map: serde_json::Map<String, Value> = BEHAVIORAL_ITEMS
            .iter()
            .map(|k| (k.to_string(), json!(value)))
            .collect();
        Value::Object(map)
    }

    #[test]
    fn test_each_item_encodes_only_on_one() {
        let encoder = FeatureEncoder::standard();
        for item in BEHAVIORAL_ITEMS {
            for (value, expected) in [
                (json!("1"), 1),
                (json!("0"), 0),
                (json!(""), 0),
                (json!(1), 0),
                (json!("yes"), 0),
                (Value::Null, 0),
            ] {
                let mut scores = all_answers("0");
                scores[item] = value.clone();
                let features = encoder.encode(&record(json!({ "behavioralScores": scores })));
                assert_eq!(
                    features.score(item),
                    Some(expected),
                    "{} = {:?}",
                    item,
                    value
                );
                let name = format!("{}_Score", item);
                assert_eq!(features.get(&name), Some(expected as f64));
            }
        }
    }

    #[test]
    fn test_gender_bit() {
        let encoder = FeatureEncoder::standard();
        for (gender, expected) in [
            (json!("m"), 1),
            (json!("f"), 0),
            (json!(""), 0),
            (json!("M"), 0),
            (json!(true), 0),
        ] {
            let features = encoder.encode(&record(json!({
                "gender": gender,
                "behavioralScores": {}
            })));
            assert_eq!(features.gender, expected);
        }
        let features = encoder.encode(&record(json!({ "behavioralScores": {} })));
        assert_eq!(features.gender, 0);
    }

    #[test]
    fn test_yes_no_bits() {
        let encoder = FeatureEncoder::standard();
        for (value, expected) in [(json!("yes"), 1), (json!("no"), 0), (json!(""), 0), (json!("Yes"), 0)] {
            let features = encoder.encode(&record(json!({
                "jaundice": value,
                "autism": value,
                "behavioralScores": {}
            })));
            assert_eq!(features.jaundice, expected);
            assert_eq!(features.autism, expected);
        }
    }

    #[test]
    fn test_age_passthrough() {
        let encoder = FeatureEncoder::standard();
        for (age, expected) in [
            (json!(5), 5.0),
            (json!(12.5), 12.5),
            (json!("34"), 34.0),
            (json!(""), 0.0),
            (json!("NaN"), 0.0),
            (Value::Null, 0.0),
        ] {
            let features = encoder.encode(&record(json!({ "age": age, "behavioralScores": {} })));
            assert_eq!(features.age, expected);
        }
    }

    #[test]
    fn test_fixed_item_set() {
        let encoder = FeatureEncoder::standard();
        let mut scores = all_answers("1");
        scores["A11"] = json!("1");
        let features = encoder.encode(&record(json!({ "behavioralScores": scores })));
        assert_eq!(features.scores.len(), 10);
        assert_eq!(features.affirmative_count(), 10);
        assert_eq!(features.score("A11"), None);
        assert_eq!(features.get("A11_Score"), None);
        // extra keys still count toward the raw tally
        assert_eq!(features.raw_affirmative, 11);

        // absent items still produce a zero column
        let features = encoder.encode(&record(json!({ "behavioralScores": { "A4": "1" } })));
        assert_eq!(features.scores.len(), 10);
        assert_eq!(features.score("A1"), Some(0));
        assert_eq!(features.score("A4"), Some(1));
    }

    #[test]
    fn test_custom_item_set() {
        const SHORT: [&str; 2] = ["A1", "A2"];
        let encoder = FeatureEncoder::new(&SHORT);
        let features = encoder.encode(&record(json!({ "behavioralScores": all_answers("1") })));
        assert_eq!(features.scores.len(), 2);
        assert_eq!(features.score("A3"), None);
        assert_eq!(features.raw_affirmative, 10);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let encoder = FeatureEncoder::default();
        let r = record(json!({ "age": 3, "gender": "m", "behavioralScores": all_answers("1") }));
        assert_eq!(encoder.encode(&r), encoder.encode(&r));
    }
}
