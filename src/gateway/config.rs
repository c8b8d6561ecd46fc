// ABOUTME: Stored configuration of the Clickatell gateway: REST auth token and the insecure toggle
// ABOUTME: Deserialises from the host's settings store and can be read from environment variables

use crate::client::builder::ClientBuilder;
use crate::client::error::{ClickatellError, ClickatellResult};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Environment variable holding the REST auth token
pub const ENV_AUTH_TOKEN: &str = "CLICKATELL_AUTH_TOKEN";

/// Environment variable enabling plain HTTP
pub const ENV_INSECURE: &str = "CLICKATELL_INSECURE";

/// Gateway configuration
///
/// ```rust
/// use clickatell::gateway::GatewayConfig;
///
/// let config: GatewayConfig = serde_json::from_str(
///     r#"{"account": {"auth_token": "secret"}, "settings": {"insecure": true}}"#,
/// ).unwrap();
///
/// assert!(config.settings.insecure);
/// assert!(config.has_auth_token());
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GatewayConfig {
    #[serde(default)]
    pub account: AccountConfig,
    #[serde(default)]
    pub settings: GatewaySettings,
}

/// Credentials for the REST API
#[derive(Debug, Clone, Deserialize)]
pub struct AccountConfig {
    #[serde(default = "empty_secret")]
    pub auth_token: SecretString,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            auth_token: empty_secret(),
        }
    }
}

/// Transport settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GatewaySettings {
    /// Send over HTTP instead of HTTPS
    #[serde(default, deserialize_with = "truthy")]
    pub insecure: bool,
}

fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Value::deserialize(deserializer).map(|value| is_truthy(&value))
}

fn empty_secret() -> SecretString {
    SecretString::new(String::new())
}

impl GatewayConfig {
    /// Configuration with the given token, sending over HTTPS
    pub fn new(auth_token: impl Into<String>) -> Self {
        Self {
            account: AccountConfig {
                auth_token: SecretString::new(auth_token.into()),
            },
            settings: GatewaySettings::default(),
        }
    }

    /// Set the insecure flag
    pub fn with_insecure(mut self, insecure: bool) -> Self {
        self.settings.insecure = insecure;
        self
    }

    /// Read configuration from `CLICKATELL_AUTH_TOKEN` and `CLICKATELL_INSECURE`
    pub fn from_env() -> ClickatellResult<Self> {
        let token = std::env::var(ENV_AUTH_TOKEN).map_err(|_| {
            ClickatellError::Configuration(format!("{ENV_AUTH_TOKEN} is not set"))
        })?;

        let insecure = std::env::var(ENV_INSECURE)
            .map(|v| is_truthy(&Value::String(v)))
            .unwrap_or(false);

        Ok(Self::new(token).with_insecure(insecure))
    }

    pub fn has_auth_token(&self) -> bool {
        !self.account.auth_token.expose_secret().trim().is_empty()
    }

    /// Client builder reflecting this configuration
    pub fn client_builder(&self) -> ClientBuilder {
        ClientBuilder::with_secret(self.account.auth_token.clone()).secure(!self.settings.insecure)
    }
}

/// Loose boolean conversion for submitted form values
///
/// Missing, null, `false`, zero, empty strings and `"0"` are false; anything
/// else is true.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
