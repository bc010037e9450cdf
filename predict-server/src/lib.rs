//! Screening Predictor - prediction endpoint
//!
//! Receives the raw screening form, encodes it into the model's feature
//! layout and returns a classification with a confidence score.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  POST /functions/v1/predict  ┌────────────────────────┐
//! │  Form client │ ───────────────────────────▶ │  Axum router (CORS,    │
//! │              │ ◀─────────────────────────── │  trace, compression)   │
//! └──────────────┘   { result, probability }    └───────────┬────────────┘
//!                                                            ▼
//!                                  SubmissionRecord ─▶ FeatureEncoder
//!                                                            ▼
//!                                      FeatureVector ─▶ dyn Scorer
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod scoring;

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method},
    routing::{get, post},
};
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, CorsLayer},
    trace::TraceLayer,
    compression::CompressionLayer,
};

pub use config::Config;
pub use error::{AppError, AppResult};
pub use scoring::{FeatureEncoder, MockScorer, Scorer};

/// Route of the predict function
pub const PREDICT_PATH: &str = "/functions/v1/predict";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub encoder: FeatureEncoder<'static>,
    pub scorer: Arc<dyn Scorer>,
}

impl AppState {
    pub fn new(config: Config, scorer: Arc<dyn Scorer>) -> Self {
        Self {
            config,
            encoder: FeatureEncoder::standard(),
            scorer,
        }
    }
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/health", get(handlers::health::check))
        .route(
            PREDICT_PATH,
            post(handlers::predict::predict).options(handlers::predict::preflight),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins = match &config.cors_allow_origins {
        None => AllowOrigin::any(),
        Some(list) => AllowOrigin::list(
            list.iter().filter_map(|o| HeaderValue::from_str(o).ok()),
        ),
    };

    let headers = config
        .cors_allow_headers
        .iter()
        .filter_map(|h| h.parse::<HeaderName>().ok());

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::list(headers))
}
