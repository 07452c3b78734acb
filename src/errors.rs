// src/errors.rs
// DOCUMENTATION: Custom error types
// PURPOSE: Centralized error handling for the exporter

use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Every failure the exporter can hit, from the Places API
/// down to the final disk write
#[derive(Error, Debug)]
pub enum PlacesError {
    #[error("External API error: {0}")]
    ExternalApiError(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl PlacesError {
    /// True when the remote service answered but refused or failed the request.
    /// Transport and local failures return false.
    pub fn is_api_error(&self) -> bool {
        matches!(
            self,
            PlacesError::ExternalApiError(_) | PlacesError::RateLimitExceeded
        )
    }
}
