// ABOUTME: Clickatell client error types covering transport, HTTP, API envelope and validation failures
// ABOUTME: Converts reqwest and serde_json errors automatically so client code can propagate with `?`

use thiserror::Error;

/// Error type for Clickatell client operations
///
/// Covers everything that can go wrong between building a request and
/// decoding Clickatell's reply. Per-recipient failures are not errors at this
/// level; they travel inside [`RecipientResult`](crate::client::RecipientResult).
#[derive(Debug, Error)]
pub enum ClickatellError {
    /// Network level failure (DNS, connect, TLS, timeout)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status without a Clickatell error envelope
    #[error("HTTP error: status {status}")]
    Http { status: u16 },

    /// Top-level error envelope returned by the API
    #[error("API error {code}: {description}")]
    Api { code: u16, description: String },

    /// Response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Message or request data rejected before sending
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Client could not be configured
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ClickatellError {
    /// HTTP status attached to the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ClickatellError::Http { status } => Some(*status),
            ClickatellError::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for Clickatell operations
pub type ClickatellResult<T> = Result<T, ClickatellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_api_error() {
        let err = ClickatellError::Api {
            code: 1,
            description: "Authentication failed".to_string(),
        };
        assert_eq!(err.to_string(), "API error 1: Authentication failed");
    }

    #[test]
    fn test_status_only_for_http_errors() {
        assert_eq!(ClickatellError::Http { status: 503 }.status(), Some(503));
        assert_eq!(ClickatellError::InvalidData("x".into()).status(), None);
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ClickatellError = json_err.into();
        assert!(matches!(err, ClickatellError::Decode(_)));
    }
}
