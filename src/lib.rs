pub mod client;
pub mod gateway;
pub mod message;
pub mod report;
pub mod wire;


// Re-export the main gateway API for easy access
pub use client::{ClickatellApi, ClickatellError, ClickatellResult, ClientBuilder, RestClient};
pub use gateway::{ClickatellGateway, GatewayConfig, SmsGateway};
pub use message::{SmsMessage, SmsMessageBuilder};
pub use report::{DeliveryReport, DeliveryStatus, FailureKind, SmsMessageResult, map_response};

/// Error returned by the demo and other top-level glue.
///
/// Library operations use [`ClickatellError`]; the gateway itself never
/// returns an error and reports failures inside [`SmsMessageResult`].
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// A specialized `Result` type for top-level glue.
///
/// # Examples
///
/// ## Sending through the gateway
///
/// ```rust,no_run
/// use clickatell::{ClickatellGateway, DeliveryStatus, GatewayConfig, SmsGateway, SmsMessage};
///
/// #[tokio::main]
/// async fn main() -> clickatell::Result<()> {
///     let gateway = ClickatellGateway::new(GatewayConfig::from_env()?);
///
///     let sms = SmsMessage::new(["27999000001"], "Hello, World!");
///     let result = gateway.send(&sms).await;
///
///     if result.status == DeliveryStatus::Queued {
///         println!("Queued {} message(s)", result.reports.len());
///     }
///
///     Ok(())
/// }
/// ```
///
/// ## Scheduled delivery with a sender ID
///
/// ```rust,no_run
/// use chrono::{Duration, Utc};
/// use clickatell::{ClickatellGateway, GatewayConfig, SmsGateway, SmsMessage};
///
/// #[tokio::main]
/// async fn main() -> clickatell::Result<()> {
///     let gateway = ClickatellGateway::new(GatewayConfig::new("auth-token"));
///
///     let sms = SmsMessage::builder()
///         .to("27999000001")
///         .to("27999000002")
///         .from("Acme")
///         .text("Your appointment is in one hour")
///         .send_at(Utc::now() + Duration::hours(23))
///         .build()?;
///
///     for report in gateway.send(&sms).await.reports {
///         println!("{} -> {:?} {:?}", report.recipient, report.status, report.message_id);
///     }
///
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;
