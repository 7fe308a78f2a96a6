#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Client library for sending transactional email through the Postmark API.
//!
//! ```no_run
//! use postmark_mailer::infrastructure::email::postmark::PostmarkMessageBuilder;
//!
//! let sent = PostmarkMessageBuilder::new("server-token")
//!     .from(("noreply@example.com", "Example"))
//!     .to("alice@example.com")
//!     .subject("Welcome")
//!     .html_body("<p>Hello!</p>")
//!     .send();
//! ```

pub mod domain;
pub mod infrastructure;
