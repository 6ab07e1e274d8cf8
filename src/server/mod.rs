//! HTTP server implementation for methodik.
//!
//! A listener that accepts connections, parses the request head, and
//! answers through a fixed method-dispatch handler.

mod config;
mod dispatch;
mod error;
mod http_server;
mod response;

// Re-export public items
pub use config::{ServerConfig, DEFAULT_PORT};
pub use dispatch::{dispatch, GET_BODY, METHOD_NOT_ALLOWED_BODY, POST_BODY};
pub use error::Error;
pub use http_server::HttpServer;
pub use response::{HttpResponse, StatusCode};
