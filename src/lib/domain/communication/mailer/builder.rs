//! Message builder

use std::fmt;

use tracing::debug;

use crate::domain::communication::mailbox::Mailbox;

use super::{
    default_endpoint, MailerError, Message, OutboundRequest, Payload, RecipientKind, Transport,
    APPLICATION_JSON, SERVER_TOKEN_HEADER,
};

/// Accumulates a message through chained setters and sends it with one POST.
///
/// Setters return `&mut Self`, so a builder can be kept and sent more than
/// once; state is never reset by [`MessageBuilder::send`].
pub struct MessageBuilder<T>
where
    T: Transport,
{
    api_key: String,
    endpoint: String,
    message: Message,
    transport: T,
}

impl<T> MessageBuilder<T>
where
    T: Transport,
{
    /// Create a builder that dispatches through `transport`.
    ///
    /// When `endpoint` is `None` or empty, the provider endpoint is used
    /// with the scheme selected by `use_secure`.
    pub fn with_transport(
        api_key: impl Into<String>,
        endpoint: Option<&str>,
        use_secure: bool,
        transport: T,
    ) -> Self {
        let endpoint = match endpoint {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => default_endpoint(use_secure),
        };

        Self {
            api_key: api_key.into(),
            endpoint,
            message: Message::default(),
            transport,
        }
    }

    /// The URL messages are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The accumulated message
    pub fn as_message(&self) -> &Message {
        &self.message
    }

    /// Set the sender, replacing any previous one
    pub fn from(&mut self, sender: impl Into<Mailbox>) -> &mut Self {
        self.message.from = Some(sender.into().to_string());
        self
    }

    /// Set the reply-to address, replacing any previous one
    pub fn reply_to(&mut self, mailbox: impl Into<Mailbox>) -> &mut Self {
        self.message.reply_to = Some(mailbox.into().to_string());
        self
    }

    /// Append a primary recipient
    pub fn to(&mut self, recipient: impl Into<Mailbox>) -> &mut Self {
        let recipient: Mailbox = recipient.into();
        self.add_recipients(RecipientKind::To, [recipient])
    }

    /// Append a carbon-copy recipient
    pub fn cc(&mut self, recipient: impl Into<Mailbox>) -> &mut Self {
        let recipient: Mailbox = recipient.into();
        self.add_recipients(RecipientKind::Cc, [recipient])
    }

    /// Append a blind carbon-copy recipient
    pub fn bcc(&mut self, recipient: impl Into<Mailbox>) -> &mut Self {
        let recipient: Mailbox = recipient.into();
        self.add_recipients(RecipientKind::Bcc, [recipient])
    }

    /// Append several primary recipients.
    ///
    /// Each entry carries its own display name.
    pub fn to_all<I, M>(&mut self, recipients: I) -> &mut Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Mailbox>,
    {
        self.add_recipients(RecipientKind::To, recipients.into_iter().map(Into::into))
    }

    /// Append several carbon-copy recipients
    pub fn cc_all<I, M>(&mut self, recipients: I) -> &mut Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Mailbox>,
    {
        self.add_recipients(RecipientKind::Cc, recipients.into_iter().map(Into::into))
    }

    /// Append several blind carbon-copy recipients
    pub fn bcc_all<I, M>(&mut self, recipients: I) -> &mut Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Mailbox>,
    {
        self.add_recipients(RecipientKind::Bcc, recipients.into_iter().map(Into::into))
    }

    fn add_recipients(
        &mut self,
        kind: RecipientKind,
        recipients: impl IntoIterator<Item = Mailbox>,
    ) -> &mut Self {
        self.message
            .recipients_mut(kind)
            .extend(recipients.into_iter().map(|mailbox| mailbox.to_string()));
        self
    }

    /// Set the subject
    pub fn subject(&mut self, text: impl Into<String>) -> &mut Self {
        self.message.subject = Some(text.into());
        self
    }

    /// Set the HTML body when `is_html` is true, otherwise the text body.
    ///
    /// The two bodies are independent; each call only replaces one of them.
    pub fn message(&mut self, body: impl Into<String>, is_html: bool) -> &mut Self {
        if is_html {
            self.message.html_body = Some(body.into());
        } else {
            self.message.text_body = Some(body.into());
        }
        self
    }

    /// Set the HTML body
    pub fn html_body(&mut self, body: impl Into<String>) -> &mut Self {
        self.message(body, true)
    }

    /// Set the plain text body
    pub fn text_body(&mut self, body: impl Into<String>) -> &mut Self {
        self.message(body, false)
    }

    /// Append a single tag
    pub fn tag(&mut self, name: impl Into<String>) -> &mut Self {
        self.message.tags.push(name.into());
        self
    }

    /// Replace all tags with `names`
    pub fn tags<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.message.tags = names.into_iter().map(Into::into).collect();
        self
    }

    /// The JSON object that [`MessageBuilder::send`] would post
    pub fn payload(&self) -> Result<Payload<'_>, MailerError> {
        Ok(self.message.payload()?)
    }

    /// Builds the request without sending it
    pub fn request(&self) -> Result<OutboundRequest, MailerError> {
        let body = serde_json::to_vec(&self.payload()?)?;

        Ok(OutboundRequest {
            url: self.endpoint.clone(),
            headers: vec![
                ("Accept", APPLICATION_JSON.to_string()),
                ("Content-Type", APPLICATION_JSON.to_string()),
                (SERVER_TOKEN_HEADER, self.api_key.clone()),
            ],
            body,
        })
    }

    /// Send the message, reporting why it failed.
    ///
    /// Nothing is posted if the message is not sendable.
    pub fn try_send(&self) -> Result<(), MailerError> {
        let request = self.request()?;

        debug!(endpoint = %self.endpoint, "posting message");

        let response = self.transport.post(&request)?;

        if !response.is_success() {
            debug!(status = response.status, "provider rejected message");

            return Err(MailerError::UnsuccessfulStatus {
                status: response.status,
                body: response.body,
            });
        }

        debug!(status = response.status, "message accepted");

        Ok(())
    }

    /// Send the message.
    ///
    /// Returns `true` only when the provider answered with a 2xx status.
    /// Use [`MessageBuilder::try_send`] to find out why a send failed.
    pub fn send(&self) -> bool {
        match self.try_send() {
            Ok(()) => true,
            Err(e) => {
                debug!("message not sent: {}", e);
                false
            }
        }
    }
}

impl<T> fmt::Debug for MessageBuilder<T>
where
    T: Transport,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageBuilder")
            .field("api_key", &"[redacted]")
            .field("endpoint", &self.endpoint)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
