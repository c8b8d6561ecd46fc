// ABOUTME: Clickatell client module providing the REST transport behind a small trait
// ABOUTME: Exports the client trait, builder, default implementation, error and result types

//! Clickatell Client Module
//!
//! This module talks to the Clickatell REST API:
//!
//! * **Native async traits** - `ClickatellApi` uses async fn in traits
//! * **Builder** - token, HTTPS/HTTP toggle, host and timeout in one place
//! * **Normalised results** - every response entry becomes a `RecipientResult`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clickatell::client::{ClickatellApi, ClientBuilder, MessageExtras};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ClientBuilder::new("auth-token").build()?;
//!
//! let recipients = vec!["27999000001".to_string()];
//! let results = client
//!     .send_message(&recipients, "Hello!", &MessageExtras::default())
//!     .await?;
//!
//! for result in results {
//!     println!("{:?} -> {:?}", result.destination, result.id);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Most callers should go through [`ClickatellGateway`](crate::gateway::ClickatellGateway),
//! which turns these results into delivery reports and never fails outright.

pub mod builder;
pub mod default;
pub mod error;
pub mod error_code;
pub mod traits;
pub mod types;

pub use builder::{ClientBuilder, DEFAULT_HOST, DEFAULT_TIMEOUT};
pub use default::RestClient;
pub use error::{ClickatellError, ClickatellResult};
pub use error_code::ApiErrorCode;
pub use traits::ClickatellApi;
pub use types::{MessageExtras, RecipientResult};
