//! Scoring - turns a raw submission into a prediction
//!
//! Encoding and scoring are separate steps so the placeholder scorer can be
//! swapped for a trained model without touching the encoder or the handler.

pub mod encoder;
pub mod scorer;

pub use encoder::FeatureEncoder;
pub use scorer::{MockScorer, ScoreError, Scorer};
