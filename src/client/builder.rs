// ABOUTME: Builder for the Clickatell REST client with token, scheme, host and timeout options
// ABOUTME: Validates configuration up front so a built client is always ready to send

use crate::client::default::RestClient;
use crate::client::error::{ClickatellError, ClickatellResult};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

/// Production API host
pub const DEFAULT_HOST: &str = "api.clickatell.com";

/// Request timeout applied when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Builder for [`RestClient`]
///
/// ```rust
/// use clickatell::client::ClientBuilder;
/// use std::time::Duration;
///
/// let client = ClientBuilder::new("auth-token")
///     .secure(false)
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
///
/// assert_eq!(client.endpoint(), "http://api.clickatell.com/rest/message");
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    auth_token: SecretString,
    secure: bool,
    host: String,
    timeout: Duration,
}

impl ClientBuilder {
    /// Start a builder for the given REST auth token
    pub fn new(auth_token: impl Into<String>) -> Self {
        Self::with_secret(SecretString::new(auth_token.into()))
    }

    /// Start a builder from an already wrapped token
    pub fn with_secret(auth_token: SecretString) -> Self {
        Self {
            auth_token,
            secure: true,
            host: DEFAULT_HOST.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Use HTTPS (`true`, the default) or plain HTTP
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Send to another host, optionally with a port
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client
    pub fn build(self) -> ClickatellResult<RestClient> {
        if self.auth_token.expose_secret().trim().is_empty() {
            return Err(ClickatellError::Configuration(
                "Authorization token is not set".to_string(),
            ));
        }

        let host = self.host.trim().trim_end_matches('/');
        if host.is_empty() {
            return Err(ClickatellError::Configuration("Host is empty".to_string()));
        }
        if host.contains("://") {
            return Err(ClickatellError::Configuration(format!(
                "Host must not include a scheme: {host}"
            )));
        }

        let http = reqwest::Client::builder().timeout(self.timeout).build()?;

        Ok(RestClient::new(http, self.auth_token, host.to_string(), self.secure))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClickatellApi;

    #[test]
    fn test_defaults_to_https() {
        let client = ClientBuilder::new("token").build().unwrap();
        assert!(client.is_secure());
        assert_eq!(client.endpoint(), "https://api.clickatell.com/rest/message");
    }

    #[test]
    fn test_custom_host() {
        let client = ClientBuilder::new("token")
            .host("127.0.0.1:8080/")
            .secure(false)
            .build()
            .unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:8080/rest/message");
    }

    #[test]
    fn test_empty_token_rejected() {
        let result = ClientBuilder::new("  ").build();
        assert!(matches!(result, Err(ClickatellError::Configuration(_))));
    }

    #[test]
    fn test_empty_host_rejected() {
        let result = ClientBuilder::new("token").host("").build();
        assert!(matches!(result, Err(ClickatellError::Configuration(_))));
    }

    #[test]
    fn test_host_with_scheme_rejected() {
        for host in ["http://api.clickatell.com", "https://127.0.0.1:8080"] {
            let result = ClientBuilder::new("token").host(host).build();
            assert!(matches!(result, Err(ClickatellError::Configuration(_))), "{host}");
        }
    }
}
