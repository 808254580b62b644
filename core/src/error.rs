//! Error types for the hero API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the hero does not exist" from "the server returned an unexpected status."
//! All other non-2xx responses land in `Http` with the raw status code and
//! body for debugging. `Transport` covers everything below the status line:
//! connect failures, timeouts, broken reads.

use thiserror::Error;

/// Errors produced while building, executing, or parsing a request.
///
/// These never reach `HeroService` callers; the service logs them and
/// substitutes the operation's fallback value.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 — the requested hero does not exist.
    #[error("hero not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never completed: connect failure, timeout, or a broken
    /// body read.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}
