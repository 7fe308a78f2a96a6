//! Message builder and dispatch

mod builder;
mod errors;
mod message;
mod transport;

pub use builder::MessageBuilder;
pub use errors::{MailerError, MissingField};
pub use message::{Message, Payload, RecipientKind};
pub use transport::{InboundResponse, OutboundRequest, Transport};


/// Host and path of the provider's send endpoint, without the scheme
pub const ENDPOINT_HOST_PATH: &str = "://api.postmarkapp.com/email";

/// Header carrying the server API token
pub const SERVER_TOKEN_HEADER: &str = "X-Postmark-Server-Token";

pub(crate) const APPLICATION_JSON: &str = "application/json";

/// Returns the provider endpoint using `https` or `http`
pub fn default_endpoint(use_secure: bool) -> String {
    let scheme = if use_secure { "https" } else { "http" };

    format!("{}{}", scheme, ENDPOINT_HOST_PATH)
}
