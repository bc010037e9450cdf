//! Client errors

use crate::constants::{FAILED_PREDICTION, GENERIC_ERROR};

/// Faults talking to the prediction server
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClientError {
    #[error("{0}")]
    Setup(String),

    #[error("{0}")]
    Network(String),

    #[error("server responded with status {status}")]
    Server { status: u16, body: String },

    #[error("{0}")]
    Parse(String),
}

impl ClientError {
    /// Message shown to the person filling in the form
    pub fn user_message(&self) -> String {
        match self {
            Self::Server { .. } => FAILED_PREDICTION.to_string(),
            other => {
                let message = other.to_string();
                if message.trim().is_empty() {
                    GENERIC_ERROR.to_string()
                } else {
                    message
                }
            }
        }
    }
}

/// Form interaction errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum FormError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("invalid value {value:?} for {field}")]
    InvalidValue { field: String, value: String },

    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("a submission is already in progress")]
    SubmissionInFlight,

    /// Submission went out and failed; carries the message shown to the user
    #[error("{0}")]
    Prediction(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_errors_are_generic() {
        let err = ClientError::Server { status: 400, body: r#"{"error":"bad"}"#.into() };
        assert_eq!(err.user_message(), "Failed to get prediction");
    }

    #[test]
    fn test_fault_message_or_fallback() {
        assert_eq!(
            ClientError::Network("connection refused".into()).user_message(),
            "connection refused"
        );
        assert_eq!(ClientError::Parse(String::new()).user_message(), "An error occurred");
    }

    #[test]
    fn test_missing_fields_display() {
        let err = FormError::MissingFields(vec!["gender".into(), "A4".into()]);
        assert_eq!(err.to_string(), "missing required fields: gender, A4");
    }
}
