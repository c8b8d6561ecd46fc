// ABOUTME: Delivery result model and the mapping from Clickatell recipient entries to delivery reports
// ABOUTME: Aggregate status is Queued only when no recipient reported an error

use crate::client::types::RecipientResult;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Message shown when a send produced nothing to report on
pub const GENERIC_FAILURE_MESSAGE: &str = "The request failed for some reason.";

/// Status of a delivery report, and of a send result as a whole
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    /// Accepted by the provider for delivery
    Queued,
    /// Rejected by the provider
    Error,
}

/// Outcome for a single recipient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReport {
    pub recipient: String,
    pub message_id: Option<String>,
    pub status: DeliveryStatus,
    pub status_message: Option<String>,
}

/// Why a send failed as a whole
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Unspecified failure
    Error,
    /// Credentials rejected or account unusable
    AccountError,
    /// Account has no credit left
    NoCredit,
    /// Provider is throttling the account
    ExcessiveRequests,
    /// Provider could not be reached
    Transport,
}

/// Top-level failure of a send
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

/// Result of one send, consumed by the host's delivery report pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsMessageResult {
    /// Aggregate status
    pub status: DeliveryStatus,
    /// Set when the send failed before any recipient could be reported on
    pub failure: Option<Failure>,
    /// One report per recipient Clickatell answered for
    pub reports: Vec<DeliveryReport>,
}

impl SmsMessageResult {
    /// Result for a send that failed as a whole
    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            status: DeliveryStatus::Error,
            failure: Some(Failure {
                kind,
                message: message.into(),
            }),
            reports: Vec::new(),
        }
    }

    /// Result built from per-recipient reports
    pub fn from_reports(reports: Vec<DeliveryReport>) -> Self {
        let status = if reports.iter().any(|r| r.status == DeliveryStatus::Error) {
            DeliveryStatus::Error
        } else {
            DeliveryStatus::Queued
        };

        Self {
            status,
            failure: None,
            reports,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }

    /// Number of reports with status Error
    pub fn error_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| r.status == DeliveryStatus::Error)
            .count()
    }

    /// Report for `recipient`, if there is one
    pub fn report(&self, recipient: &str) -> Option<&DeliveryReport> {
        self.reports.iter().find(|r| r.recipient == recipient)
    }
}

/// Turn one recipient entry into a report
///
/// Entries without a destination cannot be attributed and yield `None`.
fn map_entry(entry: &RecipientResult) -> Option<DeliveryReport> {
    let Some(recipient) = entry.destination.clone() else {
        warn!(message_id = ?entry.id, "skipping response entry without destination");
        return None;
    };

    let status_message = match (&entry.error, entry.error_code) {
        (Some(message), _) => format!("Error: {message}"),
        (None, Some(code)) => format!("Error: Clickatell error code {code}"),
        (None, None) => {
            return Some(DeliveryReport {
                recipient,
                message_id: entry.id.clone(),
                status: DeliveryStatus::Queued,
                status_message: None,
            });
        }
    };

    // The code is logged only; the description is what gets reported.
    debug!(
        %recipient,
        code = ?entry.error_code,
        known = ?entry.known_error_code(),
        "recipient rejected"
    );

    Some(DeliveryReport {
        recipient,
        message_id: entry.id.clone(),
        status: DeliveryStatus::Error,
        status_message: Some(status_message),
    })
}

/// Map Clickatell's per-recipient entries to a send result
///
/// An empty response means nothing was sent, and yields a generic failure.
pub fn map_response(entries: &[RecipientResult]) -> SmsMessageResult {
    if entries.is_empty() {
        warn!("empty response from Clickatell");
        return SmsMessageResult::failure(FailureKind::Error, GENERIC_FAILURE_MESSAGE);
    }

    let reports: Vec<DeliveryReport> = entries.iter().filter_map(map_entry).collect();
    let result = SmsMessageResult::from_reports(reports);

    debug!(
        entries = entries.len(),
        reports = result.reports.len(),
        errors = result.error_count(),
        "mapped response"
    );

    result
}
