//! HTTP parser module.
//!
//! Parses the request head (request line and headers) of an incoming HTTP
//! request. The server only ever consumes the method; path and headers are
//! carried for logging and protocol validation.

mod error;
mod method;
mod request;
mod version;

// Re-export public items
pub use error::Error;
pub use method::Method;
pub use request::HttpRequest;
pub use version::HttpVersion;

// Re-export the parse_request function
pub use request::parse_request;

#[cfg(test)]
mod tests;
