//! Prediction API Client
//!
//! HTTP client for the prediction endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::ClientError;
use crate::record::SubmissionRecord;

/// Prediction server configuration
#[derive(Debug, Clone)]
pub struct PredictConfig {
    pub server_url: String,
    /// Opaque bearer credential; not sent when empty
    pub api_key: String,
    pub timeout_seconds: u64,
}

impl Default for PredictConfig {
    fn default() -> Self {
        Self {
            server_url: constants::get_server_url(),
            api_key: constants::get_api_key(),
            timeout_seconds: constants::get_timeout_seconds(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub result: bool,
    pub probability: f64,
}

impl PredictionResult {
    pub fn summary(&self) -> String {
        let verdict = if self.result { "may" } else { "may not" };
        format!(
            "The model predicts that the individual {} be on the autism spectrum.",
            verdict
        )
    }

    pub fn confidence_label(&self) -> String {
        format!("Confidence: {:.2}%", self.probability * 100.0)
    }
}

/// Something that can turn a submission into a prediction
#[async_trait]
pub trait PredictTransport: Send + Sync {
    async fn predict(&self, record: &SubmissionRecord) -> Result<PredictionResult, ClientError>;
}

/// Prediction API client
pub struct PredictClient {
    config: PredictConfig,
    http_client: reqwest::Client,
}

impl PredictClient {
    pub fn new(config: PredictConfig) -> Result<Self, ClientError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ClientError::Setup(e.to_string()))?;

        Ok(Self { config, http_client })
    }

    /// Full URL of the predict function
    pub fn endpoint(&self) -> String {
        format!(
            "{}{}",
            self.config.server_url.trim_end_matches('/'),
            constants::PREDICT_PATH
        )
    }
}

#[async_trait]
impl PredictTransport for PredictClient {
    async fn predict(&self, record: &SubmissionRecord) -> Result<PredictionResult, ClientError> {
        let url = self.endpoint();

        let mut request = self.http_client.post(&url).json(record);
        if !self.config.api_key.is_empty() {
            request = request.header(AUTHORIZATION, format!("Bearer {}", self.config.api_key));
        }

        tracing::debug!("Submitting screening form to {}", url);

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if response.status().is_success() {
            response.json().await
                .map_err(|e| ClientError::Parse(e.to_string()))
        } else {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Prediction failed ({}): {}", status, body);
            Err(ClientError::Server { status, body })
        }
    }
}
