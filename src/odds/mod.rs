//! Client side of the remote odds engine.
//!
//! The engine lives behind a single JSON endpoint. This module owns the wire
//! types, the blocking [`Transport`] that talks to it, the non-blocking
//! [`OddsService`] the UI submits through, and the formatting of replies.

pub mod format;
pub(crate) mod service;
pub(crate) mod transport;
pub(crate) mod wire;

pub use service::{OddsService, Reply, ThreadedOddsService};
pub use transport::{decode_reply, HttpTransport, Transport, DEFAULT_ENDPOINT};
pub use wire::{HeroOdds, Meta, OddsRequest, OddsResponse, OpponentOdds, DEFAULT_TRIALS};

/// Failures talking to the odds engine.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OddsError {
    /// Could not reach the engine or read its reply.
    #[error("transport error: {0}")]
    Transport(String),
    /// The reply was not the JSON we expected.
    #[error("malformed reply: {0}")]
    Decode(String),
    /// The engine answered with a non-success status.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
}

impl OddsError {
    /// The line shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            OddsError::Server { message, .. } => format!("Error: {message}"),
            OddsError::Transport(_) | OddsError::Decode(_) => "Error connecting to server.".to_string(),
        }
    }
}
