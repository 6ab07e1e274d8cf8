//! Method dispatch: the request handler.

use crate::parser::Method;
use crate::server::response::{HttpResponse, StatusCode};

/// Response body for GET requests.
pub const GET_BODY: &str = "This is a GET request";
/// Response body for POST requests.
pub const POST_BODY: &str = "This is a POST request";
/// Response body for every other method.
pub const METHOD_NOT_ALLOWED_BODY: &str = "Method not allowed";

/// Map a request method to its fixed response.
///
/// This is the entire behavior of the server: a pure, total function from
/// method to response. GET and POST answer 200 with their own plaintext
/// body, everything else answers 405. Path, headers, and body of the
/// request play no part.
pub fn dispatch(method: Method) -> HttpResponse {
    match method {
        Method::GET => HttpResponse::new(StatusCode::Ok)
            .with_content_type("text/plain")
            .with_body_string(GET_BODY),
        Method::POST => HttpResponse::new(StatusCode::Ok)
            .with_content_type("text/plain")
            .with_body_string(POST_BODY),
        _ => HttpResponse::new(StatusCode::MethodNotAllowed)
            .with_content_type("text/plain")
            .with_body_string(METHOD_NOT_ALLOWED_BODY),
    }
}
