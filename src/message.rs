// ABOUTME: Outgoing SMS message handed to a gateway: recipients, body, optional sender and send time
// ABOUTME: Includes a fluent builder that validates recipients and text before anything is sent

use crate::client::error::{ClickatellError, ClickatellResult};
use crate::client::types::MessageExtras;
use chrono::{DateTime, Utc};

/// Outgoing SMS message
///
/// One body sent to one or more recipients. Phone numbers are passed through
/// as given; Clickatell reports malformed numbers per recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsMessage {
    /// Destination phone numbers
    pub recipients: Vec<String>,
    /// Message text content
    pub text: String,
    /// Sender ID shown to recipients
    pub sender: Option<String>,
    /// Scheduled delivery time, immediate when unset
    pub send_time: Option<DateTime<Utc>>,
}

impl SmsMessage {
    /// Create a message for immediate delivery
    pub fn new<I, S>(recipients: I, text: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            recipients: recipients.into_iter().map(Into::into).collect(),
            text: text.into(),
            sender: None,
            send_time: None,
        }
    }

    /// Create a builder for constructing SMS messages
    pub fn builder() -> SmsMessageBuilder {
        SmsMessageBuilder::default()
    }

    /// Optional request parameters derived from this message
    pub fn extras(&self) -> MessageExtras {
        MessageExtras {
            sender: self.sender.clone(),
            scheduled_delivery_time: self.send_time,
        }
    }
}

/// Builder for constructing SMS messages with fluent API
#[derive(Debug, Default)]
pub struct SmsMessageBuilder {
    recipients: Vec<String>,
    text: Option<String>,
    sender: Option<String>,
    send_time: Option<DateTime<Utc>>,
}

impl SmsMessageBuilder {
    /// Add a recipient
    pub fn to(mut self, recipient: impl Into<String>) -> Self {
        self.recipients.push(recipient.into());
        self
    }

    /// Add several recipients
    pub fn recipients<I, S>(mut self, recipients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recipients
            .extend(recipients.into_iter().map(Into::into));
        self
    }

    /// Set message text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set sender ID
    pub fn from(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Deliver at `time` instead of immediately
    pub fn send_at(mut self, time: DateTime<Utc>) -> Self {
        self.send_time = Some(time);
        self
    }

    /// Build the SMS message
    pub fn build(self) -> ClickatellResult<SmsMessage> {
        if self.recipients.is_empty() {
            return Err(ClickatellError::InvalidData(
                "At least one recipient is required".to_string(),
            ));
        }

        if self.recipients.iter().any(|r| r.trim().is_empty()) {
            return Err(ClickatellError::InvalidData(
                "Recipient phone number cannot be empty".to_string(),
            ));
        }

        let text = self
            .text
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ClickatellError::InvalidData("Message text is required".to_string()))?;

        Ok(SmsMessage {
            recipients: self.recipients,
            text,
            sender: self.sender,
            send_time: self.send_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_message() {
        let sms = SmsMessage::new(["27999000001", "27999000002"], "Hello");
        assert_eq!(sms.recipients.len(), 2);
        assert_eq!(sms.text, "Hello");
        assert!(sms.extras().is_empty());
    }

    #[test]
    fn test_builder_with_options() {
        let time = Utc.with_ymd_and_hms(2026, 12, 24, 18, 0, 0).unwrap();
        let sms = SmsMessage::builder()
            .to("27999000001")
            .recipients(vec!["27999000002", "27999000003"])
            .text("Season's greetings")
            .from("Acme")
            .send_at(time)
            .build()
            .unwrap();

        assert_eq!(sms.recipients, vec!["27999000001", "27999000002", "27999000003"]);

        let extras = sms.extras();
        assert_eq!(extras.sender.as_deref(), Some("Acme"));
        assert_eq!(extras.scheduled_delivery_time, Some(time));
    }

    #[test]
    fn test_builder_requires_recipient() {
        let result = SmsMessage::builder().text("Hello").build();
        assert!(matches!(result, Err(ClickatellError::InvalidData(_))));
    }

    #[test]
    fn test_builder_rejects_blank_recipient() {
        let result = SmsMessage::builder().to("123").to(" ").text("Hello").build();
        assert!(matches!(result, Err(ClickatellError::InvalidData(_))));
    }

    #[test]
    fn test_builder_requires_text() {
        assert!(SmsMessage::builder().to("123").build().is_err());
        assert!(SmsMessage::builder().to("123").text("").build().is_err());
    }
}
