//! Configuration module

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Headers a browser client is allowed to send on the predict endpoint
pub const DEFAULT_CORS_ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address
    pub host: IpAddr,

    /// Server port
    pub port: u16,

    /// Environment (development, production)
    pub environment: String,

    /// Allowed CORS origins. `None` means any origin.
    pub cors_allow_origins: Option<Vec<String>>,

    /// Allowed CORS request headers
    pub cors_allow_headers: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            environment: "development".to_string(),
            cors_allow_origins: None,
            cors_allow_headers: split_list(DEFAULT_CORS_ALLOW_HEADERS),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("HOST")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(defaults.host),

            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),

            environment: env::var("ENVIRONMENT")
                .unwrap_or(defaults.environment),

            cors_allow_origins: env::var("CORS_ALLOW_ORIGIN")
                .ok()
                .and_then(|o| parse_origins(&o)),

            cors_allow_headers: env::var("CORS_ALLOW_HEADERS")
                .map(|h| split_list(&h))
                .unwrap_or(defaults.cors_allow_headers),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// `*` (or nothing) allows every origin
fn parse_origins(raw: &str) -> Option<Vec<String>> {
    let origins = split_list(raw);
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        None
    } else {
        Some(origins)
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
