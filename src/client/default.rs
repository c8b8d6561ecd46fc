// ABOUTME: Default Clickatell client talking to the REST API over reqwest
// ABOUTME: Posts one JSON message request per call and hands the raw reply to the wire decoder

use crate::client::error::ClickatellResult;
use crate::client::traits::ClickatellApi;
use crate::client::types::{MessageExtras, RecipientResult};
use crate::wire::{SendMessageBody, decode_response};
use bytes::Bytes;
use reqwest::header::ACCEPT;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument, warn};

/// REST API version sent in the `X-Version` header
const API_VERSION: &str = "1";

/// Path of the send message resource
const MESSAGE_PATH: &str = "/rest/message";

/// Clickatell REST client
///
/// Created through [`ClientBuilder`](crate::client::ClientBuilder). Holds no
/// per-request state, so one instance can serve any number of sends.
pub struct RestClient {
    http: reqwest::Client,
    auth_token: SecretString,
    host: String,
    secure: bool,
}

impl RestClient {
    pub(crate) fn new(
        http: reqwest::Client,
        auth_token: SecretString,
        host: String,
        secure: bool,
    ) -> Self {
        Self {
            http,
            auth_token,
            host,
            secure,
        }
    }

    /// Full URL of the send message resource
    pub fn endpoint(&self) -> String {
        let scheme = if self.secure { "https" } else { "http" };
        format!("{scheme}://{}{MESSAGE_PATH}", self.host)
    }
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("auth_token", &"[REDACTED]")
            .field("host", &self.host)
            .field("secure", &self.secure)
            .finish()
    }
}

impl ClickatellApi for RestClient {
    #[instrument(skip_all, fields(recipients = recipients.len(), secure = self.secure))]
    async fn send_message(
        &self,
        recipients: &[String],
        text: &str,
        extras: &MessageExtras,
    ) -> ClickatellResult<Vec<RecipientResult>> {
        if !self.secure {
            warn!("sending over plain HTTP");
        }

        let body = SendMessageBody::new(recipients, text, extras);

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(self.auth_token.expose_secret())
            .header("X-Version", API_VERSION)
            .header(ACCEPT, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let payload: Bytes = response.bytes().await?;
        debug!(status, bytes = payload.len(), "received response");

        decode_response(status, &payload)
    }

    fn is_secure(&self) -> bool {
        self.secure
    }
}
