//! Outbound send payloads and the aggregated delivery outcome.

use serde::{Deserialize, Serialize};

/// One email to be transmitted by the Email Gateway.
///
/// Field names match the provider's `POST /emails` wire format, so this
/// type serializes directly into the request body. Two instances exist per
/// submission (admin notification, then client acknowledgment); each is
/// handed to the gateway client and dropped once the call returns.
#[derive(Debug, Clone, Serialize)]
pub struct EmailSendRequest {
    /// Sender as a `Display Name <address>` pair.
    pub from: String,
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Complete HTML document body.
    pub html: String,
    /// Address a mail-client reply goes to.
    pub reply_to: String,
}

/// Provider acknowledgment of one accepted email.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailSendResult {
    /// Provider-assigned message identifier.
    pub id: String,
}

/// Aggregate result of both sends for one submission.
///
/// Exists only when both sends succeeded; a failed send surfaces as an
/// error instead, so a partial outcome is unrepresentable. If the admin
/// send fails the client send is never attempted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DeliveryOutcome {
    /// Result of the admin notification (sent first).
    #[serde(rename = "adminEmail")]
    pub admin_email: EmailSendResult,
    /// Result of the client acknowledgment (sent second).
    #[serde(rename = "clientEmail")]
    pub client_email: EmailSendResult,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_send_request_wire_format() {
        let request = EmailSendRequest {
            from: "Jane Operator <send@example.com>".to_owned(),
            to: "hello@example.com".to_owned(),
            subject: "New Message from Ada".to_owned(),
            html: "<html></html>".to_owned(),
            reply_to: "ada@example.com".to_owned(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["from"], "Jane Operator <send@example.com>");
        assert_eq!(value["reply_to"], "ada@example.com");
        assert_eq!(
            value.as_object().unwrap().len(),
            5,
            "wire format carries exactly from/to/subject/html/reply_to"
        );
    }

    #[test]
    fn test_outcome_serializes_camel_case() {
        let outcome = DeliveryOutcome {
            admin_email: EmailSendResult {
                id: "msg_1".to_owned(),
            },
            client_email: EmailSendResult {
                id: "msg_2".to_owned(),
            },
        };

        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["adminEmail"]["id"], "msg_1");
        assert_eq!(value["clientEmail"]["id"], "msg_2");
    }

    #[test]
    fn test_send_result_parses_provider_body() {
        let result: EmailSendResult =
            serde_json::from_str(r#"{"id":"msg_1","object":"email"}"#).unwrap();
        assert_eq!(result.id, "msg_1");
    }
}
