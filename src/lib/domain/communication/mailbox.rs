//! Mailbox

use std::fmt;

/// An email address with an optional display name.
///
/// No syntax checking is performed on the address; the provider is the
/// authority on what it accepts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Mailbox {
    /// The email address
    pub email: String,

    /// The display name, if any
    pub name: Option<String>,
}

impl Mailbox {
    /// Create a mailbox with no display name
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Formats as `Name <email>` when a non-empty name is present, otherwise as
/// the bare address.
impl fmt::Display for Mailbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => write!(f, "{} <{}>", name, self.email),
            _ => write!(f, "{}", self.email),
        }
    }
}

impl From<&str> for Mailbox {
    fn from(email: &str) -> Self {
        Self::new(email)
    }
}

impl From<String> for Mailbox {
    fn from(email: String) -> Self {
        Self::new(email)
    }
}

impl From<&String> for Mailbox {
    fn from(email: &String) -> Self {
        Self::new(email.as_str())
    }
}

impl<E, N> From<(E, N)> for Mailbox
where
    E: Into<String>,
    N: Into<String>,
{
    fn from((email, name): (E, N)) -> Self {
        Self::new(email).with_name(name)
    }
}

impl From<Mailbox> for String {
    fn from(mailbox: Mailbox) -> Self {
        mailbox.to_string()
    }
}
