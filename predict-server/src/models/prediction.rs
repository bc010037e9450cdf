//! Prediction model

use serde::{Deserialize, Serialize};

/// Scorer output returned to the form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Decision threshold met
    pub result: bool,
    /// Confidence in [0, 1]
    pub probability: f64,
}
