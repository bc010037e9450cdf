//! Scorers
//!
//! `MockScorer` is a placeholder decision rule standing in for a trained
//! classifier: positive when there is a family history of autism or when
//! at least six submitted answers are "1", always with the same confidence.
//! The tally covers the whole submitted map, not only the model items.

use crate::models::{FeatureVector, PredictionResult};

/// Affirmative answers needed for a positive placeholder decision
pub const AFFIRMATIVE_THRESHOLD: usize = 6;

/// Confidence reported by the placeholder
pub const MOCK_CONFIDENCE: f64 = 0.85;

#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error("model unavailable: {0}")]
    Unavailable(String),
}

/// Prediction backend
pub trait Scorer: Send + Sync {
    /// Name reported by the health endpoint
    fn name(&self) -> &str;

    fn score(&self, features: &FeatureVector) -> Result<PredictionResult, ScoreError>;
}

#[derive(Debug, Clone, Copy)]
pub struct MockScorer {
    pub affirmative_threshold: usize,
    pub confidence: f64,
}

impl Default for MockScorer {
    fn default() -> Self {
        Self {
            affirmative_threshold: AFFIRMATIVE_THRESHOLD,
            confidence: MOCK_CONFIDENCE,
        }
    }
}

impl Scorer for MockScorer {
    fn name(&self) -> &str {
        "mock"
    }

    fn score(&self, features: &FeatureVector) -> Result<PredictionResult, ScoreError> {
        let result = features.autism == 1
            || features.raw_affirmative >= self.affirmative_threshold;

        Ok(PredictionResult {
            result,
            probability: self.confidence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BEHAVIORAL_ITEMS;

    fn features(autism: u8, affirmative: usize) -> FeatureVector {
        FeatureVector {
            age: 5.0,
            gender: 1,
            jaundice: 0,
            autism,
            scores: BEHAVIORAL_ITEMS
                .iter()
                .enumerate()
                .map(|(i, item)| (item.to_string(), u8::from(i < affirmative)))
                .collect(),
            raw_affirmative: affirmative,
        }
    }

    #[test]
    fn test_family_history_is_positive() {
        let scorer = MockScorer::default();
        for affirmative in 0..=10 {
            let prediction = scorer.score(&features(1, affirmative)).unwrap();
            assert!(prediction.result);
        }
    }

    #[test]
    fn test_threshold_boundary() {
        let scorer = MockScorer::default();
        assert!(!scorer.score(&features(0, 5)).unwrap().result);
        assert!(scorer.score(&features(0, 6)).unwrap().result);
        assert!(scorer.score(&features(0, 10)).unwrap().result);
        assert!(!scorer.score(&features(0, 0)).unwrap().result);
    }

    #[test]
    fn test_threshold_uses_raw_tally() {
        let scorer = MockScorer::default();
        let mut input = features(0, 5);
        input.raw_affirmative = 6;
        assert!(scorer.score(&input).unwrap().result);
    }

    #[test]
    fn test_confidence_is_constant() {
        let scorer = MockScorer::default();
        for autism in 0..=1 {
            for affirmative in 0..=10 {
                let input = features(autism, affirmative);
                let first = scorer.score(&input).unwrap();
                assert_eq!(first.probability, 0.85);
                assert_eq!(first, scorer.score(&input).unwrap());
            }
        }
    }
}
