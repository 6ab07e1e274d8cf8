//! A minimal HTTP server that dispatches on the request method.
//!
//! The whole behavior fits in one sentence: GET requests get one fixed
//! plaintext message, POST requests get another, and every other method
//! gets a 405. There is no routing, no body parsing, and no state between
//! requests.
//!
//! # Responses
//!
//! | Method    | Status | Body                     |
//! |-----------|--------|--------------------------|
//! | GET       | 200    | `This is a GET request`  |
//! | POST      | 200    | `This is a POST request` |
//! | any other | 405    | `Method not allowed`     |
//!
//! # Examples
//!
//! ```no_run
//! use methodik::{HttpServer, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), methodik::ServerError> {
//!     let server = HttpServer::new(ServerConfig::default());
//!     server.start().await
//! }
//! ```
//!
//! The dispatch function itself is pure and can be used directly:
//!
//! ```
//! use methodik::{dispatch, Method, StatusCode};
//!
//! let response = dispatch(Method::DELETE);
//! assert_eq!(response.status, StatusCode::MethodNotAllowed);
//! ```

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use parser::{parse_request, Error as ParserError, HttpRequest, HttpVersion, Method};
pub use server::{
    dispatch, Error as ServerError, HttpResponse, HttpServer, ServerConfig, StatusCode,
    DEFAULT_PORT,
};
