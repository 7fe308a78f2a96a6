//! Postmark email service implementation

use anyhow::Result;
use clap::Parser;
use reqwest::blocking::Client;
use tracing::debug;

use crate::domain::communication::mailer::{
    InboundResponse, MessageBuilder, OutboundRequest, Transport,
};

/// Postmark configuration
#[derive(Clone, Default, Debug, Parser)]
pub struct PostmarkConfig {
    /// The Postmark server API token
    #[clap(long, env = "POSTMARK_SERVER_TOKEN", default_value = "", hide_env_values = true)]
    pub server_token: String,

    /// Override the send endpoint URL
    #[clap(long, env = "POSTMARK_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Use HTTPS for the default endpoint
    #[clap(
        long,
        env = "POSTMARK_USE_SECURE",
        default_value = "true",
        action = clap::ArgAction::Set
    )]
    pub use_secure: bool,
}

/// A [`MessageBuilder`] that posts through [`ReqwestTransport`]
pub type PostmarkMessageBuilder = MessageBuilder<ReqwestTransport>;

impl MessageBuilder<ReqwestTransport> {
    /// Create a builder for the production HTTPS endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_options(api_key, None, true)
    }

    /// Create a builder with an optional endpoint override.
    ///
    /// When `endpoint` is `None` or empty, the provider endpoint is used
    /// with the scheme selected by `use_secure`.
    pub fn with_options(
        api_key: impl Into<String>,
        endpoint: Option<&str>,
        use_secure: bool,
    ) -> Self {
        Self::with_transport(api_key, endpoint, use_secure, ReqwestTransport::new())
    }

    /// Create a builder from [`PostmarkConfig`]
    pub fn from_config(config: &PostmarkConfig) -> Self {
        Self::with_options(
            config.server_token.as_str(),
            config.endpoint.as_deref(),
            config.use_secure,
        )
    }
}

/// Blocking HTTP transport backed by `reqwest`
#[derive(Debug, Default, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with the default client settings
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Create a transport around an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn post(&self, request: &OutboundRequest) -> Result<InboundResponse> {
        let mut req = self.client.post(&request.url).body(request.body.clone());

        for (name, value) in &request.headers {
            req = req.header(*name, value);
        }

        let resp = req.send()?;
        let status = resp.status().as_u16();
        let body = resp.text().unwrap_or_else(|e| {
            debug!(status, "could not read response body: {}", e);
            String::new()
        });

        Ok(InboundResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_to_secure_endpoint() {
        let config = PostmarkConfig::parse_from(["postmark", "--server-token", "token"]);

        assert_eq!(config.server_token, "token");
        assert!(config.use_secure);
        assert!(config.endpoint.is_none());
    }

    #[test]
    fn test_config_can_disable_https() {
        let config = PostmarkConfig::parse_from(["postmark", "--use-secure", "false"]);

        assert!(!config.use_secure);
    }

    #[test]
    fn test_builder_from_config_uses_endpoint_override() {
        let config = PostmarkConfig {
            server_token: "token".to_string(),
            endpoint: Some("http://localhost:9000/email".to_string()),
            use_secure: true,
        };

        let builder = PostmarkMessageBuilder::from_config(&config);

        assert_eq!(builder.endpoint(), "http://localhost:9000/email");
    }

    #[test]
    fn test_new_builder_targets_production_https() {
        let builder = PostmarkMessageBuilder::new("token");

        assert_eq!(builder.endpoint(), "https://api.postmarkapp.com/email");
    }

    #[test]
    fn test_with_options_selects_scheme() {
        let insecure = PostmarkMessageBuilder::with_options("token", None, false);
        let custom =
            PostmarkMessageBuilder::with_options("token", Some("http://mail.test/email"), true);

        assert_eq!(insecure.endpoint(), "http://api.postmarkapp.com/email");
        assert_eq!(custom.endpoint(), "http://mail.test/email");
    }
}
