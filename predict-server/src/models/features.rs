//! Feature vector model
//!
//! Canonical numeric encoding of a submission, in the column layout the
//! classifier was trained on.

/// Behavioural questionnaire items, in model order
pub const BEHAVIORAL_ITEMS: [&str; 10] = [
    "A1", "A2", "A3", "A4", "A5",
    "A6", "A7", "A8", "A9", "A10",
];

/// Model input columns, in order
pub const MODEL_FEATURES: [&str; 14] = [
    "A1_Score", "A2_Score", "A3_Score", "A4_Score", "A5_Score",
    "A6_Score", "A7_Score", "A8_Score", "A9_Score", "A10_Score",
    "age", "gender", "jaundice", "autism",
];

/// Suffix turning an item key into its feature name (`A1` -> `A1_Score`)
pub const SCORE_SUFFIX: &str = "_Score";

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub age: f64,
    pub gender: u8,
    pub jaundice: u8,
    pub autism: u8,
    /// `(item key, bit)` in item order
    pub scores: Vec<(String, u8)>,
    /// Answers of `"1"` in the submitted map, including keys outside the
    /// model items
    pub raw_affirmative: usize,
}

impl FeatureVector {
    /// Bit for a behavioural item key
    pub fn score(&self, item: &str) -> Option<u8> {
        self.scores
            .iter()
            .find(|(key, _)| key == item)
            .map(|(_, bit)| *bit)
    }

    /// Number of model items answered "1"
    pub fn affirmative_count(&self) -> usize {
        self.scores.iter().filter(|(_, bit)| *bit == 1).count()
    }

    /// Look up a feature by model column name
    pub fn get(&self, feature: &str) -> Option<f64> {
        match feature {
            "age" => Some(self.age),
            "gender" => Some(f64::from(self.gender)),
            "jaundice" => Some(f64::from(self.jaundice)),
            "autism" => Some(f64::from(self.autism)),
            other => other
                .strip_suffix(SCORE_SUFFIX)
                .and_then(|item| self.score(item))
                .map(f64::from),
        }
    }

    /// Dense row in the given column order. Unknown columns are 0.
    pub fn to_dense(&self, columns: &[&str]) -> Vec<f64> {
        columns
            .iter()
            .map(|c| self.get(c).unwrap_or(0.0))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FeatureVector {
        FeatureVector {
            age: 5.0,
            gender: 1,
            jaundice: 0,
            autism: 1,
            scores: BEHAVIORAL_ITEMS
                .iter()
                .enumerate()
                .map(|(i, item)| (item.to_string(), (i % 2 == 0) as u8))
                .collect(),
            raw_affirmative: 5,
        }
    }

    #[test]
    fn test_model_features_cover_items() {
        for item in BEHAVIORAL_ITEMS {
            let name = format!("{}{}", item, SCORE_SUFFIX);
            assert!(MODEL_FEATURES.contains(&name.as_str()), "missing {}", name);
        }
    }

    #[test]
    fn test_dense_follows_model_order() {
        let row = sample().to_dense(&MODEL_FEATURES);
        assert_eq!(row.len(), MODEL_FEATURES.len());
        assert_eq!(&row[..10], &[1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0]);
        assert_eq!(&row[10..], &[5.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_lookup() {
        let features = sample();
        assert_eq!(features.get("A10_Score"), Some(0.0));
        assert_eq!(features.get("A11_Score"), None);
        assert_eq!(features.get("country"), None);
        assert_eq!(features.affirmative_count(), 5);
    }
}
