//! Tests for the HTTP parser.

use std::collections::HashMap;

use crate::parser::{parse_request, Error, HttpRequest, HttpVersion, Method};

#[test]
fn test_parse_simple_get_request() {
    let request = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let result = parse_request(request).unwrap();
    assert_eq!(result.method, Method::GET);
    assert_eq!(result.path, "/index.html");
    assert_eq!(result.version, HttpVersion::Http11);
    assert_eq!(result.headers.get("Host").unwrap(), "example.com");
}

#[test]
fn test_parse_request_with_multiple_headers() {
    let request =
        b"GET /index.html HTTP/1.1\r\nHost: example.com\r\nUser-Agent: test\r\nAccept: */*\r\n\r\n";
    let result = parse_request(request).unwrap();
    assert_eq!(result.method, Method::GET);
    assert_eq!(result.headers.get("Host").unwrap(), "example.com");
    assert_eq!(result.headers.get("User-Agent").unwrap(), "test");
    assert_eq!(result.headers.get("Accept").unwrap(), "*/*");
}

#[test]
fn test_case_insensitive_headers() {
    let request = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let result = parse_request(request).unwrap();
    assert!(result.has_header("host"));
    assert!(result.has_header("HOST"));
    assert!(result.has_header("Host"));
}

#[test]
fn test_missing_host_header() {
    let request = b"GET /index.html HTTP/1.1\r\n\r\n";
    let result = parse_request(request);
    assert!(matches!(result, Err(Error::MissingHeader(ref h)) if h == "Host"));
}

#[test]
fn test_invalid_method() {
    let request = b"BREW /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let result = parse_request(request);
    assert!(matches!(result, Err(Error::InvalidMethod(ref m)) if m == "BREW"));
}

#[test]
fn test_invalid_http_version() {
    let request = b"GET /index.html HTTP/9.9\r\nHost: example.com\r\n\r\n";
    let result = parse_request(request);
    assert!(matches!(result, Err(Error::InvalidVersion(ref v)) if v == "HTTP/9.9"));
}

#[test]
fn test_invalid_header_format() {
    let request = b"GET /index.html HTTP/1.1\r\nInvalidHeader\r\n\r\n";
    let result = parse_request(request);
    assert!(matches!(result, Err(Error::InvalidHeaderFormat)));
}

#[test]
fn test_empty_request() {
    let request = b"";
    let result = parse_request(request);
    assert!(matches!(result, Err(Error::EmptyRequest)));
}

#[test]
fn test_incomplete_request_line() {
    let request = b"GET\r\n";
    let result = parse_request(request);
    assert!(matches!(result, Err(Error::MalformedRequestLine(_))));
}

#[test]
fn test_all_methods() {
    let methods = vec![
        ("GET", Method::GET),
        ("POST", Method::POST),
        ("PUT", Method::PUT),
        ("DELETE", Method::DELETE),
        ("HEAD", Method::HEAD),
        ("OPTIONS", Method::OPTIONS),
        ("PATCH", Method::PATCH),
        ("TRACE", Method::TRACE),
        ("CONNECT", Method::CONNECT),
    ];

    for (token, expected_method) in methods {
        let request = format!("{token} / HTTP/1.1\r\nHost: example.com\r\n\r\n");
        let result = parse_request(request.as_bytes()).unwrap();
        assert_eq!(result.method, expected_method);
    }
}

#[test]
fn test_headers_with_multiple_colons() {
    let request =
        b"GET /index.html HTTP/1.1\r\nHost: example.com\r\nX-Test: value:with:colons\r\n\r\n";
    let result = parse_request(request).unwrap();
    assert_eq!(result.headers.get("X-Test").unwrap(), "value:with:colons");
}

#[test]
fn test_http10_without_host() {
    // HTTP/1.0 doesn't require a Host header
    let request = b"GET /index.html HTTP/1.0\r\n\r\n";
    let result = parse_request(request).unwrap();
    assert_eq!(result.method, Method::GET);
    assert_eq!(result.version, HttpVersion::Http10);
    assert!(result.headers.is_empty());
}

#[test]
fn test_method_display() {
    assert_eq!(Method::GET.to_string(), "GET");
    assert_eq!(Method::POST.to_string(), "POST");
    assert_eq!(Method::DELETE.to_string(), "DELETE");
    assert_eq!(Method::CONNECT.to_string(), "CONNECT");
}

#[test]
fn test_http_version_display() {
    assert_eq!(HttpVersion::Http10.to_string(), "HTTP/1.0");
    assert_eq!(HttpVersion::Http11.to_string(), "HTTP/1.1");
}

#[test]
fn test_headers_with_trailing_whitespace() {
    let request = b"GET /index.html HTTP/1.1\r\nHost: example.com  \r\nUser-Agent:  test  \r\n\r\n";
    let result = parse_request(request).unwrap();
    assert_eq!(result.headers.get("Host").unwrap(), "example.com");
    assert_eq!(result.headers.get("User-Agent").unwrap(), "test");
}

#[test]
fn test_empty_path() {
    let request = b"GET  HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let result = parse_request(request);
    assert!(matches!(result, Err(Error::MalformedRequestLine(_))));
}

#[test]
fn test_path_is_kept_verbatim() {
    // The server ignores the path, but the parser still reports it as sent.
    let request = b"GET /anything/at/all?x=1 HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let result = parse_request(request).unwrap();
    assert_eq!(result.path, "/anything/at/all?x=1");
}

#[test]
fn test_malformed_utf8_in_request() {
    let request = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\nX-Test: \xFF\xFF\xFF\r\n\r\n";
    let result = parse_request(request);
    assert!(matches!(result, Err(Error::MalformedRequestLine(ref s)) if s == "Invalid UTF-8"));
}

#[test]
fn test_empty_header_value() {
    let request = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\nX-Empty:\r\n\r\n";
    let result = parse_request(request).unwrap();
    assert_eq!(result.headers.get("X-Empty").unwrap(), "");
}

#[test]
fn test_duplicate_headers() {
    let request =
        b"GET /index.html HTTP/1.1\r\nHost: example.com\r\nX-Test: value1\r\nX-Test: value2\r\n\r\n";
    let result = parse_request(request).unwrap();
    // The second value should overwrite the first
    assert_eq!(result.headers.get("X-Test").unwrap(), "value2");
}

#[test]
fn test_http_request_header_lookup() {
    let mut headers = HashMap::new();
    headers.insert("Host".to_string(), "example.com".to_string());

    let request = HttpRequest::new(
        Method::GET,
        "/index.html".to_string(),
        HttpVersion::Http11,
        headers,
    );

    assert_eq!(request.get_header("Host").unwrap(), "example.com");
    assert_eq!(request.get_header("host").unwrap(), "example.com");
    assert!(request.get_header("X-Test").is_none());
    assert!(request.has_header("HOST"));
    assert!(!request.has_header("X-Test"));
}

#[test]
fn test_request_body_is_ignored() {
    // A POST with a body parses fine; the body bytes are simply not consumed.
    let request = b"POST /submit HTTP/1.1\r\n\
        Host: example.com\r\n\
        Content-Type: text/plain\r\n\
        Content-Length: 5\r\n\
        \r\n\
        hello";
    let result = parse_request(request).unwrap();
    assert_eq!(result.method, Method::POST);
    assert_eq!(result.headers.get("Content-Length").unwrap(), "5");
}

#[test]
fn test_binary_body_is_not_decoded() {
    // Only the head is text; arbitrary body bytes must not fail parsing.
    let mut request = b"POST /upload HTTP/1.1\r\n\
        Host: example.com\r\n\
        Content-Length: 4\r\n\
        \r\n"
        .to_vec();
    request.extend_from_slice(&[0xFF, 0xFE, 0x00, 0x01]);

    let result = parse_request(&request).unwrap();
    assert_eq!(result.method, Method::POST);
    assert_eq!(result.headers.get("Content-Length").unwrap(), "4");
}
