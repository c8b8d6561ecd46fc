// ABOUTME: Core Clickatell client trait using native async functions
// ABOUTME: Lets the gateway send through the REST client or any stand-in with the same contract

use crate::client::error::ClickatellResult;
use crate::client::types::{MessageExtras, RecipientResult};

/// Message sending operations against Clickatell
///
/// One call submits one message body to every recipient. Implementations
/// return one [`RecipientResult`] per entry Clickatell reported, in the order
/// it reported them, and an empty `Vec` when the reply held no entries.
pub trait ClickatellApi {
    /// Send `text` to every number in `recipients`
    async fn send_message(
        &self,
        recipients: &[String],
        text: &str,
        extras: &MessageExtras,
    ) -> ClickatellResult<Vec<RecipientResult>>;

    /// Whether requests go over HTTPS
    fn is_secure(&self) -> bool;
}
