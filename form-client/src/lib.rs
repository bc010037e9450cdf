//! Screening Predictor - form client
//!
//! Holds the questionnaire answers, binds control updates into them and
//! submits the record to the prediction endpoint.
//!
//! ```text
//! update_field ─▶ SubmissionRecord ─▶ submit ─▶ PredictTransport ─▶ POST /functions/v1/predict
//!                                        ◀── FormState { is_loading, error, prediction }
//! ```

pub mod client;
pub mod constants;
pub mod controller;
pub mod error;
pub mod record;

pub use client::{PredictClient, PredictConfig, PredictTransport, PredictionResult};
pub use controller::{FormController, FormState};
pub use error::{ClientError, FormError};
pub use record::{Answer, Gender, SubmissionRecord, YesNo, BEHAVIORAL_ITEMS};
