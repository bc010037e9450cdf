//! Form Controller
//!
//! Owns the form state and drives a single request/response cycle per
//! submit. State sits behind a lock so a UI can keep rendering snapshots
//! while a submission is suspended on the network; the lock is never held
//! across an await point.

use parking_lot::RwLock;

use crate::client::{PredictTransport, PredictionResult};
use crate::error::FormError;
use crate::record::SubmissionRecord;

/// Everything a view needs to render the form
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub record: SubmissionRecord,
    pub is_loading: bool,
    pub error: Option<String>,
    pub prediction: Option<PredictionResult>,
}

impl FormState {
    /// Submit control is disabled while a request is in flight
    pub fn can_submit(&self) -> bool {
        !self.is_loading
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading {
            "Processing..."
        } else {
            "Get Prediction"
        }
    }
}

pub struct FormController<T> {
    state: RwLock<FormState>,
    transport: T,
}

/// Clears the loading flag however the submission ends
struct LoadingGuard<'a> {
    state: &'a RwLock<FormState>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.write().is_loading = false;
    }
}

impl<T: PredictTransport> FormController<T> {
    pub fn new(transport: T) -> Self {
        Self::with_record(transport, SubmissionRecord::default())
    }

    pub fn with_record(transport: T, record: SubmissionRecord) -> Self {
        Self {
            state: RwLock::new(FormState {
                record,
                ..Default::default()
            }),
            transport,
        }
    }

    pub fn snapshot(&self) -> FormState {
        self.state.read().clone()
    }

    pub fn record(&self) -> SubmissionRecord {
        self.state.read().record.clone()
    }

    /// Bind one control's value into the record
    pub fn update_field(&self, name: &str, value: &str) -> Result<(), FormError> {
        let mut state = self.state.write();
        let next = state.record.with_field(name, value)?;
        state.record = next;
        Ok(())
    }

    /// Send the current record and store the outcome
    ///
    /// Rejected without a network call while another submission is in
    /// flight or while a required control is empty. A previous prediction
    /// stays visible if the new submission fails.
    pub async fn submit(&self) -> Result<PredictionResult, FormError> {
        let record = {
            let mut state = self.state.write();
            if state.is_loading {
                return Err(FormError::SubmissionInFlight);
            }

            let missing = state.record.missing_fields();
            if !missing.is_empty() {
                return Err(FormError::MissingFields(missing));
            }

            state.is_loading = true;
            state.error = None;
            state.record.clone()
        };

        let guard = LoadingGuard { state: &self.state };
        let outcome = self.transport.predict(&record).await;

        let result = {
            let mut state = self.state.write();
            match outcome {
                Ok(prediction) => {
                    tracing::info!(
                        result = prediction.result,
                        probability = prediction.probability,
                        "Prediction received"
                    );
                    state.prediction = Some(prediction);
                    Ok(prediction)
                }
                Err(e) => {
                    tracing::warn!("Prediction request failed: {}", e);
                    let message = e.user_message();
                    state.error = Some(message.clone());
                    Err(FormError::Prediction(message))
                }
            }
        };

        drop(guard);
        result
    }
}
