//! Server configuration.

use std::net::{Ipv4Addr, SocketAddr};

/// The port the server listens on.
pub const DEFAULT_PORT: u16 = 3000;

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// The maximum number of concurrent connections.
    pub max_connections: usize,
    /// The read buffer size.
    pub read_buffer_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            // All interfaces, fixed port
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            max_connections: 1024,
            read_buffer_size: 8192,
        }
    }
}
