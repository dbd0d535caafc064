//! # Transport Errors
//!
//! This module defines the single failure category surfaced by remote
//! collection operations. Network failures, timeouts, decode failures, and
//! non-2xx responses all collapse into [`TransportError`]; callers and the
//! store treat every variant uniformly and never branch on it. The variants
//! exist for diagnostics only.

use reqwest::StatusCode;

/// Opaque failure covering every way a remote collection call can go wrong.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Connection, timeout, or body-decode failure from the HTTP client.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// The remote answered with a non-2xx status.
    #[error("server responded {status} for {url}")]
    Status { status: StatusCode, url: String },
    /// A create result carried no id, so it cannot be mirrored locally.
    #[error("create response carried no id ({0})")]
    MissingId(String),
}
