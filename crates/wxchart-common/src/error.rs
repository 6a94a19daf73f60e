//! Error types for chart resolution.

use thiserror::Error;

/// Result type alias using ChartError.
pub type ChartResult<T> = Result<T, ChartError>;

/// Primary error type for chart resolution.
#[derive(Debug, Error)]
pub enum ChartError {
    // === Request Errors ===
    /// Unrecognized area, extension, color or day selector. The message names
    /// the accepted values and is sent to the client as-is.
    #[error("{0}")]
    InvalidInput(String),

    // === Upstream Errors ===
    #[error("Upstream returned HTTP {status}: {body}")]
    UpstreamUnavailable { status: u16, body: String },

    #[error("Upstream unreachable: {0}")]
    UpstreamUnreachable(String),

    #[error("Malformed manifest: {0}")]
    MalformedManifest(String),

    #[error("Malformed manifest entry: {0}")]
    MalformedManifestEntry(String),

    // === Resolution Errors ===
    #[error("Could not find the latest weather map")]
    NotFound,

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ChartError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ChartError::InvalidInput(message.into())
    }

    /// Get the HTTP status code for this error.
    ///
    /// Manifest host failures pass their own status through; anything that is
    /// not a client or server error status is reported as a bad gateway.
    pub fn http_status_code(&self) -> u16 {
        match self {
            ChartError::InvalidInput(_) => 400,
            ChartError::NotFound => 404,
            ChartError::UpstreamUnavailable { status, .. } if (400..=599).contains(status) => {
                *status
            }
            ChartError::UpstreamUnavailable { .. } | ChartError::UpstreamUnreachable(_) => 502,
            ChartError::MalformedManifest(_)
            | ChartError::MalformedManifestEntry(_)
            | ChartError::Internal(_) => 500,
        }
    }

    /// Short label used for metrics and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ChartError::InvalidInput(_) => "invalid_input",
            ChartError::UpstreamUnavailable { .. } => "upstream_unavailable",
            ChartError::UpstreamUnreachable(_) => "upstream_unreachable",
            ChartError::MalformedManifest(_) => "malformed_manifest",
            ChartError::MalformedManifestEntry(_) => "malformed_manifest_entry",
            ChartError::NotFound => "not_found",
            ChartError::Internal(_) => "internal",
        }
    }

    /// Plain-text body sent to the client.
    pub fn response_body(&self) -> String {
        match self {
            ChartError::UpstreamUnavailable { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for ChartError {
    fn from(err: serde_json::Error) -> Self {
        ChartError::MalformedManifest(err.to_string())
    }
}
