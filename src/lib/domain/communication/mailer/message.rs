//! Email message

use serde::Serialize;

use super::errors::MissingField;

/// Which recipient list an address is added to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecipientKind {
    /// Primary recipients
    To,

    /// Carbon-copy recipients
    Cc,

    /// Blind carbon-copy recipients
    Bcc,
}

/// Email message state accumulated by the builder.
///
/// Addresses are stored already formatted for the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Message {
    /// The sender
    pub from: Option<String>,

    /// The reply-to address
    pub reply_to: Option<String>,

    /// Primary recipients, in insertion order
    pub to: Vec<String>,

    /// Carbon-copy recipients, in insertion order
    pub cc: Vec<String>,

    /// Blind carbon-copy recipients, in insertion order
    pub bcc: Vec<String>,

    /// The subject
    pub subject: Option<String>,

    /// The plain text body
    pub text_body: Option<String>,

    /// The HTML body
    pub html_body: Option<String>,

    /// Provider-side tags
    pub tags: Vec<String>,
}

/// JSON body of a send request, using the provider's field names
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Payload<'a> {
    /// Sender
    pub from: &'a str,

    /// Comma-joined primary recipients
    pub to: String,

    /// Comma-joined carbon-copy recipients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<String>,

    /// Comma-joined blind carbon-copy recipients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<String>,

    /// Subject
    pub subject: &'a str,

    /// Comma-joined tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// HTML body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_body: Option<&'a str>,

    /// Plain text body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_body: Option<&'a str>,

    /// Reply-to address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<&'a str>,
}

impl Message {
    /// Returns the recipient list for `kind`
    pub fn recipients(&self, kind: RecipientKind) -> &[String] {
        match kind {
            RecipientKind::To => &self.to,
            RecipientKind::Cc => &self.cc,
            RecipientKind::Bcc => &self.bcc,
        }
    }

    pub(crate) fn recipients_mut(&mut self, kind: RecipientKind) -> &mut Vec<String> {
        match kind {
            RecipientKind::To => &mut self.to,
            RecipientKind::Cc => &mut self.cc,
            RecipientKind::Bcc => &mut self.bcc,
        }
    }

    /// Checks the required fields in order: sender, recipients, subject, body.
    pub fn validate(&self) -> Result<(), MissingField> {
        if present(&self.from).is_none() {
            return Err(MissingField::From);
        }

        if self.to.is_empty() {
            return Err(MissingField::To);
        }

        if present(&self.subject).is_none() {
            return Err(MissingField::Subject);
        }

        if present(&self.text_body).is_none() && present(&self.html_body).is_none() {
            return Err(MissingField::Body);
        }

        Ok(())
    }

    /// Returns `true` if [`Message::validate`] would succeed
    pub fn is_sendable(&self) -> bool {
        self.validate().is_ok()
    }

    /// Builds the wire payload, validating first
    pub fn payload(&self) -> Result<Payload<'_>, MissingField> {
        self.validate()?;

        Ok(Payload {
            from: present(&self.from).unwrap_or_default(),
            to: self.to.join(","),
            cc: joined(&self.cc),
            bcc: joined(&self.bcc),
            subject: present(&self.subject).unwrap_or_default(),
            tag: joined(&self.tags),
            html_body: present(&self.html_body),
            text_body: present(&self.text_body),
            reply_to: present(&self.reply_to),
        })
    }
}

// Empty strings count as unset.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

fn joined(values: &[String]) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(values.join(","))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use serde_json::Value;
    use testresult::TestResult;

    use super::*;

    fn sendable() -> Message {
        Message {
            from: Some("Sender <sender@example.com>".to_string()),
            to: vec!["alice@example.com".to_string()],
            subject: Some("Hello".to_string()),
            text_body: Some("Hi there".to_string()),
            ..Default::default()
        }
    }

    fn wire_keys(payload: &Payload<'_>) -> Result<BTreeSet<String>, serde_json::Error> {
        let value: Value = serde_json::from_slice(&serde_json::to_vec(payload)?)?;

        Ok(value
            .as_object()
            .map(|object| object.keys().cloned().collect())
            .unwrap_or_default())
    }

    #[test]
    fn test_validation_order() {
        let mut message = Message::default();
        assert_eq!(message.validate(), Err(MissingField::From));

        message.from = Some("sender@example.com".to_string());
        assert_eq!(message.validate(), Err(MissingField::To));

        message.to.push("alice@example.com".to_string());
        assert_eq!(message.validate(), Err(MissingField::Subject));

        message.subject = Some("Hello".to_string());
        assert_eq!(message.validate(), Err(MissingField::Body));

        message.html_body = Some("<p>Hi</p>".to_string());
        assert_eq!(message.validate(), Ok(()));
    }

    #[test]
    fn test_empty_strings_are_unset() {
        let message = Message {
            subject: Some(String::new()),
            ..sendable()
        };

        assert_eq!(message.validate(), Err(MissingField::Subject));

        let message = Message {
            text_body: Some(String::new()),
            html_body: Some(String::new()),
            ..sendable()
        };

        assert!(!message.is_sendable());
    }

    #[test]
    fn test_minimal_payload_has_only_required_keys() -> TestResult {
        let message = sendable();
        let payload = message.payload()?;

        let expected: BTreeSet<String> = ["From", "To", "Subject", "TextBody"]
            .into_iter()
            .map(String::from)
            .collect();

        assert_eq!(wire_keys(&payload)?, expected);

        Ok(())
    }

    #[test]
    fn test_full_payload_has_every_key() -> TestResult {
        let message = Message {
            reply_to: Some("replies@example.com".to_string()),
            cc: vec!["carol@example.com".to_string()],
            bcc: vec!["dave@example.com".to_string()],
            html_body: Some("<p>Hi there</p>".to_string()),
            tags: vec!["welcome".to_string()],
            ..sendable()
        };
        let payload = message.payload()?;

        let expected: BTreeSet<String> = [
            "From", "To", "Cc", "Bcc", "Subject", "Tag", "HtmlBody", "TextBody", "ReplyTo",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        assert_eq!(wire_keys(&payload)?, expected);

        Ok(())
    }

    #[test]
    fn test_cc_serializes_cc_list() -> TestResult {
        let message = Message {
            to: vec!["alice@example.com".to_string()],
            cc: vec!["carol@example.com".to_string(), "Eve <eve@example.com>".to_string()],
            ..sendable()
        };

        let payload = message.payload()?;

        assert_eq!(payload.to, "alice@example.com");
        assert_eq!(
            payload.cc.as_deref(),
            Some("carol@example.com,Eve <eve@example.com>")
        );

        Ok(())
    }

    #[test]
    fn test_recipients_by_kind() {
        let mut message = Message::default();

        message.recipients_mut(RecipientKind::Bcc).push("x@example.com".to_string());

        assert!(message.recipients(RecipientKind::To).is_empty());
        assert!(message.recipients(RecipientKind::Cc).is_empty());
        assert_eq!(message.recipients(RecipientKind::Bcc), ["x@example.com"]);
    }
}
