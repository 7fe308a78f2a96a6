//! HTTP transport seam

#[cfg(test)]
use mockall::mock;

/// A fully prepared POST request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundRequest {
    /// The target URL
    pub url: String,

    /// Header names and values, in the order they are sent
    pub headers: Vec<(&'static str, String)>,

    /// The encoded request body
    pub body: Vec<u8>,
}

impl OutboundRequest {
    /// Returns the value of the first header named `name`, ignoring case
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// The parts of a response the mailer looks at
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InboundResponse {
    /// The HTTP status code
    pub status: u16,

    /// The raw response body
    pub body: String,
}

impl InboundResponse {
    /// Returns `true` for 2xx statuses
    pub fn is_success(&self) -> bool {
        self.status / 100 == 2
    }
}

/// Performs a single blocking POST.
///
/// Connection handling, TLS and timeouts are the implementation's concern.
/// An `Err` means no response was received.
pub trait Transport: Send + Sync + 'static {
    /// Send `request` and return the provider's response
    fn post(&self, request: &OutboundRequest) -> anyhow::Result<InboundResponse>;
}

#[cfg(test)]
mock! {
    pub Transport {}

    impl Transport for Transport {
        fn post(&self, request: &OutboundRequest) -> anyhow::Result<InboundResponse>;
    }
}
