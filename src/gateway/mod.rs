// ABOUTME: Gateway plugin contract between the host messaging framework and SMS providers
// ABOUTME: Exports the SmsGateway trait, gateway metadata, configuration types and the Clickatell gateway

//! SMS Gateway Module
//!
//! A gateway is what the host messaging framework talks to. It exposes
//! static metadata, a configuration form the host renders, and a `send`
//! entry point that always produces an [`SmsMessageResult`]; provider
//! failures are reported in the result rather than returned as errors.
//!
//! ```rust,no_run
//! use clickatell::gateway::{ClickatellGateway, GatewayConfig, SmsGateway};
//! use clickatell::SmsMessage;
//!
//! # async fn example() {
//! let gateway = ClickatellGateway::new(GatewayConfig::new("auth-token"));
//!
//! let sms = SmsMessage::new(["27999000001", "27999000002"], "Hello!");
//! let result = gateway.send(&sms).await;
//!
//! for report in &result.reports {
//!     println!("{}: {:?}", report.recipient, report.status);
//! }
//! # }
//! ```

pub mod clickatell;
pub mod config;
pub mod form;

pub use self::clickatell::{CLICKATELL, ClickatellGateway};
pub use config::{AccountConfig, GatewayConfig, GatewaySettings, is_truthy};
pub use form::{ConfigForm, FormElement, FormValues};

use crate::message::SmsMessage;
use crate::report::SmsMessageResult;

/// Static description of a gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatewayDefinition {
    /// Machine name
    pub id: &'static str,
    /// Human readable name
    pub label: &'static str,
    /// Largest recipient list accepted by one send
    pub outgoing_message_max_recipients: usize,
}

/// Contract every SMS gateway implements for the host framework
pub trait SmsGateway {
    /// Stored configuration type
    type Config;

    /// Gateway metadata
    fn definition(&self) -> &'static GatewayDefinition;

    /// Configuration for a freshly added gateway
    fn default_configuration() -> Self::Config
    where
        Self: Sized;

    /// Current configuration
    fn configuration(&self) -> &Self::Config;

    /// Form for editing the configuration, prefilled with current values
    fn build_configuration_form(&self) -> ConfigForm;

    /// Store values submitted from the configuration form
    fn submit_configuration_form(&mut self, values: &FormValues);

    /// Send a message and report the outcome
    async fn send(&self, message: &SmsMessage) -> SmsMessageResult;
}
