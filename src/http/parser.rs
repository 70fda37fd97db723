use crate::http::request::{Method, Request};
use std::collections::HashMap;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The buffer does not yet hold a complete head; read more and retry.
    Incomplete,
    /// The request line did not split into exactly method, path, version.
    MalformedRequestLine,
    /// The head contained bytes that are not valid UTF-8.
    InvalidUtf8,
}

/// Parses one request head (request line + headers) from the front of the
/// buffer.
///
/// On success returns the parsed head and the number of bytes it consumed,
/// so the caller can drain exactly that much and leave any body bytes in
/// place for the body reader. Blank lines ahead of the request line are
/// consumed and skipped (some clients send a stray CRLF after a previous
/// request's body).
///
/// `Incomplete` means more bytes are needed; every other error is fatal
/// for this message. A malformed request line is reported as soon as the
/// line itself is available, without waiting for the rest of the head.
/// Header lines with no colon are skipped with a warning rather than
/// rejected; when the same header name appears twice, the last occurrence
/// wins.
pub fn parse_request_head(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    let mut cursor = 0;

    // Stray blank lines before the request line.
    while buf[cursor..].starts_with(b"\r\n") {
        cursor += 2;
    }

    // Request line
    let line_end = find_crlf(&buf[cursor..]).ok_or(ParseError::Incomplete)? + cursor;
    let request_line =
        std::str::from_utf8(&buf[cursor..line_end]).map_err(|_| ParseError::InvalidUtf8)?;

    let mut tokens = request_line.split(' ');
    let method_token = tokens.next().ok_or(ParseError::MalformedRequestLine)?;
    let path = tokens.next().ok_or(ParseError::MalformedRequestLine)?;
    let _version = tokens.next().ok_or(ParseError::MalformedRequestLine)?;
    if tokens.next().is_some() {
        return Err(ParseError::MalformedRequestLine);
    }

    // Headers
    let mut headers = HashMap::new();
    cursor = line_end + 2;

    loop {
        let end = find_crlf(&buf[cursor..]).ok_or(ParseError::Incomplete)? + cursor;
        if end == cursor {
            // Bare CRLF: end of head.
            cursor = end + 2;
            break;
        }

        let line = std::str::from_utf8(&buf[cursor..end]).map_err(|_| ParseError::InvalidUtf8)?;
        match line.split_once(':') {
            Some((name, value)) => {
                headers.insert(name.trim().to_lowercase(), value.trim().to_string());
            }
            None => {
                tracing::warn!(line = %line, "skipping header line with no colon");
            }
        }
        cursor = end + 2;
    }

    let request = Request {
        method: Method::from_token(method_token),
        path: path.to_string(),
        headers,
    };

    Ok((request, cursor))
}

fn find_crlf(buf: &[u8]) -> Option<usize> {
    buf.windows(2).position(|w| w == b"\r\n")
}
