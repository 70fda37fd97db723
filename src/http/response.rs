/// HTTP status codes supported by the server.
///
/// The full set of status lines this server ever emits:
/// - `Ok` (200): Request successful
/// - `Created` (201): Resource created successfully
/// - `BadRequest` (400): Malformed request
/// - `NotFound` (404): Resource not found
/// - `MethodNotAllowed` (405): HTTP method not supported
/// - `InternalServerError` (500): Server error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use beacon::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use beacon::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// A complete HTTP response ready to be serialized.
///
/// Headers are typed slots rather than a free-form map, so the writer can
/// emit them in a fixed order (Content-Type, Content-Length,
/// Content-Encoding, Connection) and Content-Length can never drift from
/// the body: it is derived from `body.len()` at serialization time, after
/// any encoding transform has already been applied to the body.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Emitted as `Content-Type` when present
    pub content_type: Option<&'static str>,
    /// Emitted as `Content-Encoding` when present (gzip)
    pub content_encoding: Option<&'static str>,
    /// When set, the serialized response carries `Connection: close`
    pub close: bool,
    /// Response body as bytes
    pub body: Vec<u8>,
}

impl Response {
    /// A response with the given status, no body, and no Content-Type.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: None,
            content_encoding: None,
            close: false,
            body: Vec::new(),
        }
    }

    /// A 200 OK response with a `text/plain` body.
    pub fn text(body: impl Into<Vec<u8>>) -> Self {
        Self {
            content_type: Some("text/plain"),
            body: body.into(),
            ..Self::new(StatusCode::Ok)
        }
    }

    /// A 200 OK response with an `application/octet-stream` body.
    pub fn octet_stream(body: Vec<u8>) -> Self {
        Self {
            content_type: Some("application/octet-stream"),
            body,
            ..Self::new(StatusCode::Ok)
        }
    }

    /// Creates a 201 Created response with an empty body.
    pub fn created() -> Self {
        Self::new(StatusCode::Created)
    }

    /// Creates a 400 Bad Request response.
    pub fn bad_request() -> Self {
        Self::new(StatusCode::BadRequest)
    }

    /// Creates a 404 Not Found response.
    pub fn not_found() -> Self {
        Self::new(StatusCode::NotFound)
    }

    /// Creates a 405 Method Not Allowed response.
    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::MethodNotAllowed)
    }

    /// Creates a 500 Internal Server Error response.
    pub fn internal_error() -> Self {
        Self::new(StatusCode::InternalServerError)
    }
}
