use beacon::http::parser::{parse_request_head, ParseError};
use beacon::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let (parsed, consumed) = parse_request_head(req).unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path, "/");
    assert_eq!(parsed.headers.get("host").unwrap(), "example.com");
    assert_eq!(consumed, req.len());
}

#[test]
fn test_header_names_are_lowercased() {
    let req = b"GET / HTTP/1.1\r\nUser-Agent: curl/8.0\r\nACCEPT-ENCODING: gzip\r\n\r\n";
    let (parsed, _) = parse_request_head(req).unwrap();

    assert_eq!(parsed.header("user-agent"), Some("curl/8.0"));
    assert_eq!(parsed.header("accept-encoding"), Some("gzip"));
    assert!(!parsed.headers.contains_key("User-Agent"));
}

#[test]
fn test_header_values_are_trimmed() {
    let req = b"GET / HTTP/1.1\r\nHost:   spaced.example.com  \r\n\r\n";
    let (parsed, _) = parse_request_head(req).unwrap();

    assert_eq!(parsed.header("host"), Some("spaced.example.com"));
}

#[test]
fn test_consumed_excludes_body_bytes() {
    let req = b"POST /files/a.txt HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello";
    let (parsed, consumed) = parse_request_head(req).unwrap();

    assert_eq!(parsed.method, Method::POST);
    assert_eq!(parsed.content_length(), 5);
    assert_eq!(consumed, req.len() - 5);
}

#[test]
fn test_partial_head_is_incomplete() {
    assert_eq!(
        parse_request_head(b"GET / HTTP/1.1\r\nHost: exa"),
        Err(ParseError::Incomplete)
    );
    assert_eq!(parse_request_head(b""), Err(ParseError::Incomplete));
    // Request line complete but the terminating blank line has not arrived.
    assert_eq!(
        parse_request_head(b"GET / HTTP/1.1\r\n"),
        Err(ParseError::Incomplete)
    );
}

#[test]
fn test_request_line_with_too_few_tokens_is_malformed() {
    assert_eq!(
        parse_request_head(b"GET /\r\n\r\n"),
        Err(ParseError::MalformedRequestLine)
    );
    assert_eq!(
        parse_request_head(b"GET\r\n\r\n"),
        Err(ParseError::MalformedRequestLine)
    );
}

#[test]
fn test_request_line_with_too_many_tokens_is_malformed() {
    assert_eq!(
        parse_request_head(b"GET / HTTP/1.1 extra\r\n\r\n"),
        Err(ParseError::MalformedRequestLine)
    );
}

#[test]
fn test_malformed_request_line_detected_before_full_head() {
    // The verdict comes as soon as the request line is readable.
    assert_eq!(
        parse_request_head(b"garbage\r\nHost: exa"),
        Err(ParseError::MalformedRequestLine)
    );
}

#[test]
fn test_unknown_method_token_is_not_a_parse_error() {
    let req = b"PATCH / HTTP/1.1\r\n\r\n";
    let (parsed, _) = parse_request_head(req).unwrap();

    assert_eq!(parsed.method, Method::Other("PATCH".to_string()));
}

#[test]
fn test_duplicate_header_last_occurrence_wins() {
    let req = b"GET / HTTP/1.1\r\nX-Token: first\r\nX-Token: second\r\n\r\n";
    let (parsed, _) = parse_request_head(req).unwrap();

    assert_eq!(parsed.header("x-token"), Some("second"));
}

#[test]
fn test_header_line_without_colon_is_skipped() {
    let req = b"GET / HTTP/1.1\r\nthis line has no colon\r\nHost: example.com\r\n\r\n";
    let (parsed, consumed) = parse_request_head(req).unwrap();

    assert_eq!(parsed.header("host"), Some("example.com"));
    assert_eq!(parsed.headers.len(), 1);
    assert_eq!(consumed, req.len());
}

#[test]
fn test_leading_blank_lines_are_consumed() {
    let req = b"\r\n\r\nGET /echo/hi HTTP/1.1\r\n\r\n";
    let (parsed, consumed) = parse_request_head(req).unwrap();

    assert_eq!(parsed.path, "/echo/hi");
    assert_eq!(consumed, req.len());
}

#[test]
fn test_non_utf8_head_is_fatal() {
    let req = b"GET /\xff\xfe HTTP/1.1\r\n\r\n";
    assert_eq!(parse_request_head(req), Err(ParseError::InvalidUtf8));
}
