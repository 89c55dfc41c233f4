//! Error types for the feed server

use std::net::SocketAddr;

use thiserror::Error;

/// Result type for feed operations
pub type FeedResult<T> = Result<T, FeedError>;

/// Everything that can go wrong while configuring, starting or streaming
#[derive(Debug, Error)]
pub enum FeedError {
    /// The listen address could not be parsed
    #[error("invalid listen address '{addr}': {reason}")]
    InvalidAddress { addr: String, reason: String },

    /// A push interval of zero would spin the send loop
    #[error("push interval must be greater than zero")]
    ZeroInterval,

    /// The HTTP listener could not be bound
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP server stopped with an I/O error
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),

    /// A report could not be encoded as JSON
    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),

    /// Writing a frame to the client failed
    #[error("failed to write to client: {0}")]
    Write(#[source] axum::Error),
}
