// ABOUTME: JSON shapes exchanged with the Clickatell REST message endpoint
// ABOUTME: Encodes send requests and decodes response envelopes into RecipientResult entries

use crate::client::error::{ClickatellError, ClickatellResult};
use crate::client::types::{MessageExtras, RecipientResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Format Clickatell expects for `scheduledDeliveryTime`
pub const SCHEDULE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Body of `POST /rest/message`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageBody<'a> {
    pub to: &'a [String],
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_delivery_time: Option<String>,
}

impl<'a> SendMessageBody<'a> {
    pub fn new(recipients: &'a [String], text: &'a str, extras: &'a MessageExtras) -> Self {
        Self {
            to: recipients,
            text,
            from: extras.sender.as_deref(),
            scheduled_delivery_time: extras.scheduled_delivery_time.map(format_schedule),
        }
    }
}

/// Render a delivery time the way the API accepts it
pub fn format_schedule(time: DateTime<Utc>) -> String {
    time.format(SCHEDULE_FORMAT).to_string()
}

#[derive(Debug, Deserialize)]
struct Envelope {
    data: Option<Data>,
    error: Option<ErrorField>,
}

#[derive(Debug, Deserialize)]
struct Data {
    message: Option<Vec<MessageEntry>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageEntry {
    accepted: Option<bool>,
    to: Option<String>,
    api_message_id: Option<String>,
    error: Option<ErrorField>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorField {
    Detailed(ErrorBody),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: Option<Code>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Code {
    Number(u64),
    Text(String),
}

impl Code {
    fn value(&self) -> Option<u16> {
        match self {
            Code::Number(n) => u16::try_from(*n).ok(),
            Code::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl ErrorField {
    fn code(&self) -> Option<u16> {
        match self {
            ErrorField::Detailed(body) => body.code.as_ref().and_then(Code::value),
            ErrorField::Text(_) => None,
        }
    }

    fn description(&self) -> Option<String> {
        let text = match self {
            ErrorField::Detailed(body) => body.description.as_deref()?,
            ErrorField::Text(text) => text.as_str(),
        };
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<MessageEntry> for RecipientResult {
    fn from(entry: MessageEntry) -> Self {
        let error_code = entry.error.as_ref().and_then(ErrorField::code);
        let mut error = entry.error.as_ref().and_then(ErrorField::description);

        // An explicit rejection without detail still counts as an error
        if error.is_none() && error_code.is_none() && entry.accepted == Some(false) {
            error = Some("Message was not accepted".to_string());
        }

        RecipientResult {
            id: non_empty(entry.api_message_id),
            destination: non_empty(entry.to),
            error_code,
            error,
        }
    }
}

/// `null`, `false`, `[]`, `""` and `{}` carry no message entries
fn is_empty_reply(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Decode the reply to a send request
///
/// A top-level error envelope wins over the HTTP status. A successful reply
/// without message entries decodes to an empty `Vec`.
pub fn decode_response(status: u16, body: &[u8]) -> ClickatellResult<Vec<RecipientResult>> {
    let success = (200..300).contains(&status);

    if body.iter().all(u8::is_ascii_whitespace) {
        return if success {
            Ok(Vec::new())
        } else {
            Err(ClickatellError::Http { status })
        };
    }

    let envelope = match serde_json::from_slice::<Value>(body) {
        Ok(value) if is_empty_reply(&value) => None,
        Ok(value) => Some(Envelope::deserialize(value)),
        Err(e) => Some(Err(e)),
    };

    let envelope: Envelope = match envelope {
        None if success => return Ok(Vec::new()),
        None => return Err(ClickatellError::Http { status }),
        Some(Ok(envelope)) => envelope,
        Some(Err(_)) if !success => return Err(ClickatellError::Http { status }),
        Some(Err(e)) => return Err(ClickatellError::Decode(e)),
    };

    if let Some(error) = envelope.error {
        return Err(ClickatellError::Api {
            code: error.code().unwrap_or_default(),
            description: error
                .description()
                .unwrap_or_else(|| "Unknown error".to_string()),
        });
    }

    if !success {
        return Err(ClickatellError::Http { status });
    }

    Ok(envelope
        .data
        .and_then(|data| data.message)
        .into_iter()
        .flatten()
        .map(RecipientResult::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_body_omits_unset_extras() {
        let to = vec!["27999000001".to_string()];
        let extras = MessageExtras::default();
        let body = serde_json::to_value(SendMessageBody::new(&to, "hello", &extras)).unwrap();

        assert_eq!(body, json!({"to": ["27999000001"], "text": "hello"}));
    }

    #[test]
    fn test_body_with_extras() {
        let to = vec!["27999000001".to_string(), "27999000002".to_string()];
        let time = Utc.with_ymd_and_hms(2026, 10, 17, 9, 5, 0).unwrap();
        let extras = MessageExtras::new()
            .with_sender("Acme")
            .with_scheduled_delivery_time(time);
        let body = serde_json::to_value(SendMessageBody::new(&to, "hi", &extras)).unwrap();

        assert_eq!(
            body,
            json!({
                "to": ["27999000001", "27999000002"],
                "text": "hi",
                "from": "Acme",
                "scheduledDeliveryTime": "2026-10-17T09:05:00Z"
            })
        );
    }

    #[test]
    fn test_decode_accepted_and_rejected_entries() {
        let body = json!({
            "data": {
                "message": [
                    {"accepted": true, "to": "27999000001", "apiMessageId": "a1"},
                    {
                        "accepted": false,
                        "to": "27999000002",
                        "apiMessageId": "",
                        "error": {"code": "105", "description": "Invalid Destination Address", "documentation": "http://"}
                    }
                ]
            }
        });
        let results = decode_response(202, body.to_string().as_bytes()).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0], RecipientResult::accepted("27999000001", "a1"));
        assert_eq!(results[1].id, None);
        assert_eq!(results[1].destination.as_deref(), Some("27999000002"));
        assert_eq!(results[1].error_code, Some(105));
        assert_eq!(results[1].error.as_deref(), Some("Invalid Destination Address"));
    }

    #[test]
    fn test_decode_numeric_code_and_plain_error() {
        let body = json!({
            "data": {
                "message": [
                    {"to": "1", "error": {"code": 114}},
                    {"to": "2", "error": "Cannot route message"}
                ]
            }
        });
        let results = decode_response(200, body.to_string().as_bytes()).unwrap();

        assert_eq!(results[0].error_code, Some(114));
        assert_eq!(results[0].error, None);
        assert_eq!(results[1].error_code, None);
        assert_eq!(results[1].error.as_deref(), Some("Cannot route message"));
    }

    #[test]
    fn test_decode_unaccepted_without_detail() {
        let body = json!({"data": {"message": [{"accepted": false, "to": "1"}]}});
        let results = decode_response(202, body.to_string().as_bytes()).unwrap();

        assert!(results[0].has_error());
    }

    #[test]
    fn test_decode_missing_destination() {
        let body = json!({"data": {"message": [{"accepted": true, "apiMessageId": "x"}]}});
        let results = decode_response(202, body.to_string().as_bytes()).unwrap();

        assert_eq!(results[0].destination, None);
    }

    #[test]
    fn test_decode_empty_bodies() {
        assert!(decode_response(202, b"").unwrap().is_empty());
        assert!(decode_response(202, b"{}").unwrap().is_empty());
        assert!(decode_response(202, br#"{"data": {}}"#).unwrap().is_empty());
        assert!(decode_response(202, br#"{"data": {"message": []}}"#).unwrap().is_empty());
        assert!(decode_response(202, br#"{"data": null}"#).unwrap().is_empty());
        assert!(decode_response(202, br#"{"data": {"message": null}}"#).unwrap().is_empty());
        assert!(decode_response(202, b"null").unwrap().is_empty());
        assert!(decode_response(202, b"[]").unwrap().is_empty());
        assert!(decode_response(200, b"false").unwrap().is_empty());
    }

    #[test]
    fn test_decode_empty_json_on_failure_status() {
        assert!(matches!(
            decode_response(500, b"null"),
            Err(ClickatellError::Http { status: 500 })
        ));
        assert!(matches!(
            decode_response(404, b"{}"),
            Err(ClickatellError::Http { status: 404 })
        ));
    }

    #[test]
    fn test_decode_error_envelope() {
        let body = json!({"error": {"code": "001", "description": "Authentication failed"}});
        let err = decode_response(401, body.to_string().as_bytes()).unwrap_err();

        match err {
            ClickatellError::Api { code, description } => {
                assert_eq!(code, 1);
                assert_eq!(description, "Authentication failed");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_http_failures() {
        assert!(matches!(
            decode_response(500, b""),
            Err(ClickatellError::Http { status: 500 })
        ));
        assert!(matches!(
            decode_response(502, b"<html>Bad Gateway</html>"),
            Err(ClickatellError::Http { status: 502 })
        ));
        assert!(matches!(
            decode_response(200, b"<html>"),
            Err(ClickatellError::Decode(_))
        ));
    }
}
