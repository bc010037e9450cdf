//! Predict handler

use axum::{body::Bytes, extract::State, http::StatusCode, Json};

use crate::{AppError, AppResult, AppState};
use crate::middleware::auth::BearerToken;
use crate::models::{PredictionResult, SubmissionRecord, MODEL_FEATURES};

/// Encode a submitted form and score it
///
/// The body is parsed by hand rather than through the `Json` extractor so
/// that every parse failure, including a wrong content type, comes back as a
/// 400 with the parser's message.
pub async fn predict(
    State(state): State<AppState>,
    credential: BearerToken,
    body: Bytes,
) -> AppResult<Json<PredictionResult>> {
    let record = SubmissionRecord::from_slice(&body)?;
    let features = state.encoder.encode(&record);

    tracing::debug!(
        has_credential = credential.is_present(),
        affirmative = features.raw_affirmative,
        features = ?features.to_dense(&MODEL_FEATURES),
        "Encoded submission"
    );

    let prediction = state
        .scorer
        .score(&features)
        .map_err(|e| AppError::ScoringError(e.to_string()))?;

    tracing::info!(
        result = prediction.result,
        probability = prediction.probability,
        "Prediction served"
    );

    Ok(Json(prediction))
}

/// Bare OPTIONS; real CORS preflights are answered by the CORS layer
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
