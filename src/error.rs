//! Error handling for the bridge transport.
//!
//! Routing itself is infallible (every invalid input resolves to a prompt);
//! errors only arise at the transport seam.

use thiserror::Error;

/// Errors on the bridge connection.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("bridge i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("bridge line error: {0}")]
    Line(#[from] tokio_util::codec::LinesCodecError),

    #[error("bridge frame error: {0}")]
    Frame(#[from] serde_json::Error),

    #[error("bridge handshake failed: expected ready, got {0}")]
    Handshake(String),

    #[error("bridge closed the connection")]
    Closed,
}
