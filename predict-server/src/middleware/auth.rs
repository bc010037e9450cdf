//! Credential passthrough
//!
//! The predict endpoint accepts an opaque bearer token from the caller. It
//! is carried through to the handler but never validated.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::{header::AUTHORIZATION, request::Parts, HeaderMap};

/// Bearer credential presented by the caller, if any
#[derive(Debug, Clone, Default)]
pub struct BearerToken(Option<String>);

impl BearerToken {
    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }
}

/// Extract bearer token from Authorization header
fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let auth_header = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = auth_header.strip_prefix("Bearer ")?.trim();

    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(BearerToken(extract_bearer_token(&parts.headers)))
    }
}
