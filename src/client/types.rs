// ABOUTME: Supporting types for Clickatell client operations: optional send parameters and per-recipient results
// ABOUTME: RecipientResult is the normalised shape every response entry is decoded into before report mapping

use crate::client::error_code::ApiErrorCode;
use chrono::{DateTime, Utc};

/// Optional parameters sent alongside recipients and text
///
/// Unset fields are left out of the request body entirely so Clickatell
/// applies its account defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageExtras {
    /// Sender ID or long number shown to the recipient
    pub sender: Option<String>,
    /// Deliver at this time instead of immediately
    pub scheduled_delivery_time: Option<DateTime<Utc>>,
}

impl MessageExtras {
    /// Create empty extras
    pub fn new() -> Self {
        Self::default()
    }

    /// Set sender
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Set scheduled delivery time
    pub fn with_scheduled_delivery_time(mut self, time: DateTime<Utc>) -> Self {
        self.scheduled_delivery_time = Some(time);
        self
    }

    /// True when no optional parameter is set
    pub fn is_empty(&self) -> bool {
        self.sender.is_none() && self.scheduled_delivery_time.is_none()
    }
}

/// Outcome of a send for one recipient, as reported by Clickatell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientResult {
    /// Clickatell message id (`apiMessageId`)
    pub id: Option<String>,
    /// Recipient the entry refers to
    pub destination: Option<String>,
    /// Numeric error code, when one was supplied
    pub error_code: Option<u16>,
    /// Human readable error description
    pub error: Option<String>,
}

impl RecipientResult {
    /// Entry for a message accepted for delivery
    pub fn accepted(destination: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            destination: Some(destination.into()),
            error_code: None,
            error: None,
        }
    }

    /// Entry for a message Clickatell refused
    pub fn rejected(destination: impl Into<String>, code: u16, error: impl Into<String>) -> Self {
        Self {
            id: None,
            destination: Some(destination.into()),
            error_code: Some(code),
            error: Some(error.into()),
        }
    }

    /// Whether the entry carries any error indicator
    pub fn has_error(&self) -> bool {
        self.error.is_some() || self.error_code.is_some()
    }

    /// Documented error code for diagnostics
    ///
    /// Not reliable enough to make delivery decisions with.
    pub fn known_error_code(&self) -> Option<ApiErrorCode> {
        self.error_code
            .and_then(|code| ApiErrorCode::try_from(code).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_extras_builder() {
        let time = Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap();
        let extras = MessageExtras::new()
            .with_sender("Acme")
            .with_scheduled_delivery_time(time);

        assert_eq!(extras.sender.as_deref(), Some("Acme"));
        assert_eq!(extras.scheduled_delivery_time, Some(time));
        assert!(!extras.is_empty());
        assert!(MessageExtras::default().is_empty());
    }

    #[test]
    fn test_recipient_result_error_indicator() {
        assert!(!RecipientResult::accepted("27999000001", "abc").has_error());
        assert!(RecipientResult::rejected("27999000001", 105, "Invalid destination").has_error());

        let code_only = RecipientResult {
            destination: Some("27999000001".into()),
            error_code: Some(114),
            ..Default::default()
        };
        assert!(code_only.has_error());
    }

    #[test]
    fn test_known_error_code() {
        let entry = RecipientResult::rejected("1", 105, "Invalid destination");
        assert_eq!(
            entry.known_error_code(),
            Some(ApiErrorCode::InvalidDestinationAddress)
        );
        assert_eq!(RecipientResult::rejected("1", 999, "?").known_error_code(), None);
    }
}
