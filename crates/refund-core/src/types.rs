use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// A meetup subgroup and where its refund requests are delivered.
///
/// Fixed at deployment time. The wire format matches what the form page
/// expects (`channelId`, `contactId`); TOML files may use snake_case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    /// Display name shown in the dropdown and in the Slack message.
    pub name: String,
    /// Slack channel ID the request is posted to.
    #[serde(alias = "channel_id")]
    pub channel_id: String,
    /// Slack handle of the organiser who processes refunds.
    #[serde(default, alias = "contact_id", skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
}

impl Group {
    pub fn new(id: &str, name: &str, channel_id: &str, contact_id: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            channel_id: channel_id.to_string(),
            contact_id: contact_id.map(String::from),
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// A refund submission as posted by the form. Lives for one request only.
///
/// Every field defaults to empty so a missing key surfaces as a validation
/// error instead of a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RefundRequest {
    pub subgroup: String,
    pub name: String,
    pub bank_name: String,
    pub account_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl RefundRequest {
    /// Parse a raw JSON body. Anything that isn't a JSON object is rejected.
    pub fn from_json(body: &[u8]) -> Result<Self, ValidationError> {
        serde_json::from_slice(body).map_err(|_| ValidationError::InvalidBody)
    }
}

/// Output of the validator: trimmed fields plus the resolved group.
/// `memo` is `None` when the applicant left it empty or blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub group: Group,
    pub name: String,
    pub bank_name: String,
    /// As entered (trimmed), separators kept for readability.
    pub account_number: String,
    pub memo: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_camel_case_wire_names() {
        let body = br#"{"subgroup":"kiro","name":"Kim","bankName":"KB","accountNumber":"1-2","memo":"hi"}"#;
        let req = RefundRequest::from_json(body).unwrap();
        assert_eq!(req.subgroup, "kiro");
        assert_eq!(req.bank_name, "KB");
        assert_eq!(req.account_number, "1-2");
        assert_eq!(req.memo.as_deref(), Some("hi"));
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let req = RefundRequest::from_json(br#"{"subgroup":"kiro"}"#).unwrap();
        assert_eq!(req.name, "");
        assert_eq!(req.memo, None);
    }

    #[test]
    fn malformed_json_is_invalid_body() {
        assert_eq!(
            RefundRequest::from_json(b"name=Kim").unwrap_err(),
            ValidationError::InvalidBody
        );
        assert_eq!(
            RefundRequest::from_json(b"[1,2]").unwrap_err(),
            ValidationError::InvalidBody
        );
    }

    #[test]
    fn group_serializes_with_wire_names() {
        let g = Group::new("sandbox", "Sandbox 소모임", "C07HZRYBNRG", Some("nalbam"));
        let v = serde_json::to_value(&g).unwrap();
        assert_eq!(v["channelId"], "C07HZRYBNRG");
        assert_eq!(v["contactId"], "nalbam");

        let g = Group::new("x", "X", "C1", None);
        let v = serde_json::to_value(&g).unwrap();
        assert!(v.get("contactId").is_none());
    }

    #[test]
    fn group_display_names_and_id() {
        let g = Group::new("kiro", "Kiro 소모임", "C0A4R4LLEBH", None);
        assert_eq!(g.to_string(), "Kiro 소모임 (kiro)");
    }

    #[test]
    fn group_accepts_snake_case_aliases() {
        let g: Group =
            serde_json::from_str(r#"{"id":"a","name":"A","channel_id":"C1","contact_id":"bob"}"#)
                .unwrap();
        assert_eq!(g.channel_id, "C1");
        assert_eq!(g.contact_id.as_deref(), Some("bob"));
    }
}
