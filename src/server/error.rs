//! Error types for the HTTP server.
//!
//! A 405 response is deliberately absent here: an unsupported method is a
//! successful branch of dispatch, not an error.

use std::net::SocketAddr;

use thiserror::Error;

use crate::parser::Error as ParserError;

/// Errors that can occur during HTTP server operation.
#[derive(Debug, Error)]
pub enum Error {
    /// The listening socket could not be established. Fatal, no retry.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    /// Error parsing an HTTP request.
    #[error("Parse error: {0}")]
    Parse(#[from] ParserError),

    /// I/O error on an accepted connection.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
