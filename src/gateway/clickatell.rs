// ABOUTME: Clickatell implementation of the SmsGateway contract
// ABOUTME: Builds a REST client from stored configuration and turns every outcome into an SmsMessageResult

use crate::client::error::{ClickatellError, ClickatellResult};
use crate::client::error_code::ApiErrorCode;
use crate::client::traits::ClickatellApi;
use crate::client::RestClient;
use crate::gateway::config::{GatewayConfig, is_truthy};
use crate::gateway::form::{ConfigForm, FormElement, FormValues};
use crate::gateway::{GatewayDefinition, SmsGateway};
use crate::message::SmsMessage;
use crate::report::{FailureKind, SmsMessageResult, map_response};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Metadata of the Clickatell gateway
pub static CLICKATELL: GatewayDefinition = GatewayDefinition {
    id: "clickatell",
    label: "Clickatell",
    outgoing_message_max_recipients: 600,
};

/// SMS gateway backed by the Clickatell REST API
///
/// A new REST client is built from the configuration on every send, so
/// configuration changes apply to the next message without rebuilding the
/// gateway.
#[derive(Debug, Clone, Default)]
pub struct ClickatellGateway {
    configuration: GatewayConfig,
    host: Option<String>,
    timeout: Option<Duration>,
}

impl ClickatellGateway {
    pub fn new(configuration: GatewayConfig) -> Self {
        Self {
            configuration,
            host: None,
            timeout: None,
        }
    }

    /// Send to another API host (test servers, regional endpoints)
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Override the client request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn client(&self) -> ClickatellResult<RestClient> {
        let mut builder = self.configuration.client_builder();
        if let Some(host) = &self.host {
            builder = builder.host(host.clone());
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }

    /// Send `message` through `api` and map the outcome
    #[instrument(skip_all, fields(gateway = CLICKATELL.id, recipients = message.recipients.len()))]
    pub async fn send_with<A: ClickatellApi>(&self, api: &A, message: &SmsMessage) -> SmsMessageResult {
        let max = CLICKATELL.outgoing_message_max_recipients;
        if message.recipients.len() > max {
            warn!(max, "too many recipients");
            return SmsMessageResult::failure(
                FailureKind::Error,
                format!(
                    "Message has {} recipients, more than the {max} allowed",
                    message.recipients.len()
                ),
            );
        }

        match api
            .send_message(&message.recipients, &message.text, &message.extras())
            .await
        {
            Ok(entries) => {
                let result = map_response(&entries);
                info!(
                    status = ?result.status,
                    reports = result.reports.len(),
                    errors = result.error_count(),
                    "message sent"
                );
                result
            }
            Err(err) => {
                warn!(error = %err, status = ?err.status(), "send failed");
                failure_for(&err)
            }
        }
    }
}

/// Classify a client error into a whole-send failure
fn failure_for(err: &ClickatellError) -> SmsMessageResult {
    let kind = match err {
        ClickatellError::Api { code, .. } => match ApiErrorCode::try_from(*code) {
            Ok(code) if code.is_account_error() => FailureKind::AccountError,
            Ok(code) if code.is_credit_error() => FailureKind::NoCredit,
            Ok(code) if code.is_throttling() => FailureKind::ExcessiveRequests,
            _ => FailureKind::Error,
        },
        ClickatellError::Http { status: 401 | 403 } => FailureKind::AccountError,
        ClickatellError::Http { status: 429 } => FailureKind::ExcessiveRequests,
        ClickatellError::Transport(_) => FailureKind::Transport,
        ClickatellError::Configuration(_) => FailureKind::AccountError,
        _ => FailureKind::Error,
    };

    SmsMessageResult::failure(kind, err.to_string())
}

impl SmsGateway for ClickatellGateway {
    type Config = GatewayConfig;

    fn definition(&self) -> &'static GatewayDefinition {
        &CLICKATELL
    }

    fn default_configuration() -> GatewayConfig {
        GatewayConfig::default()
    }

    fn configuration(&self) -> &GatewayConfig {
        &self.configuration
    }

    fn build_configuration_form(&self) -> ConfigForm {
        let mut form = ConfigForm::new();
        form.push(FormElement::Details {
            key: "clickatell".to_string(),
            title: "Clickatell".to_string(),
            open: true,
            children: vec![
                FormElement::Textfield {
                    key: "auth_token".to_string(),
                    title: "Authorization token".to_string(),
                    default_value: self
                        .configuration
                        .account
                        .auth_token
                        .expose_secret()
                        .clone(),
                },
                FormElement::Checkbox {
                    key: "insecure".to_string(),
                    title: "Use insecure requests".to_string(),
                    description: Some("Changes default behaviour from https to http.".to_string()),
                    default_value: self.configuration.settings.insecure,
                },
            ],
        });
        form
    }

    fn submit_configuration_form(&mut self, values: &FormValues) {
        let token = match values.get("auth_token") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };
        self.configuration.account.auth_token = SecretString::new(token);
        self.configuration.settings.insecure =
            values.get("insecure").is_some_and(is_truthy);
    }

    async fn send(&self, message: &SmsMessage) -> SmsMessageResult {
        match self.client() {
            Ok(client) => self.send_with(&client, message).await,
            Err(err) => {
                warn!(error = %err, "could not build client");
                failure_for(&err)
            }
        }
    }
}
