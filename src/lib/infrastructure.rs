//! Implementations backed by external services

pub mod email;
