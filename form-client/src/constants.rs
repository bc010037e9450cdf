//! Central Configuration Constants
//!
//! Single source of truth for client defaults.

/// Default prediction server URL
///
/// Fallback when `PREDICT_SERVER_URL` is not set.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

/// Route of the predict function on the server
pub const PREDICT_PATH: &str = "/functions/v1/predict";

/// Default request timeout (seconds)
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Shown when the server answers with a non-success status
pub const FAILED_PREDICTION: &str = "Failed to get prediction";

/// Shown when a fault carries no message of its own
pub const GENERIC_ERROR: &str = "An error occurred";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get prediction server URL from environment or use default
pub fn get_server_url() -> String {
    std::env::var("PREDICT_SERVER_URL")
        .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string())
}

/// Get the bearer credential passed to the server (empty when unset)
pub fn get_api_key() -> String {
    std::env::var("PREDICT_API_KEY").unwrap_or_default()
}

/// Get request timeout from environment or use default
pub fn get_timeout_seconds() -> u64 {
    std::env::var("PREDICT_TIMEOUT_SECONDS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECONDS)
}
