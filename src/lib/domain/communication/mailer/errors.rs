//! Mailer errors

use thiserror::Error;

/// A required message field that was not set
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum MissingField {
    /// No sender
    #[error("sender is not set")]
    From,

    /// No `To` recipients
    #[error("message has no recipients")]
    To,

    /// No subject
    #[error("subject is not set")]
    Subject,

    /// Neither an HTML nor a text body
    #[error("message has no body")]
    Body,
}

/// Mailer errors
#[derive(Debug, Error)]
pub enum MailerError {
    /// The message is missing a required field
    #[error("message is not sendable: {0}")]
    Validation(#[from] MissingField),

    /// The message could not be encoded as JSON
    #[error("could not serialize message")]
    Serialization(#[from] serde_json::Error),

    /// The request did not complete
    #[error("transport error: {0}")]
    Transport(anyhow::Error),

    /// The provider answered with a non-2xx status
    #[error("provider returned status {status}")]
    UnsuccessfulStatus {
        /// The HTTP status code
        status: u16,

        /// The raw response body
        body: String,
    },
}

impl From<anyhow::Error> for MailerError {
    fn from(err: anyhow::Error) -> Self {
        MailerError::Transport(err)
    }
}
