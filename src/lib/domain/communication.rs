//! Outbound email composition and dispatch

pub mod mailbox;
pub mod mailer;
