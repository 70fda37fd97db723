use std::collections::HashMap;

/// HTTP request methods.
///
/// The server routes GET and POST. Every other token on the request line
/// parses fine but is rejected with 405 Method Not Allowed at dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// Any other request-line token, kept for logging.
    Other(String),
}

impl Method {
    /// Parses an HTTP method token from the request line.
    ///
    /// Unrecognized tokens are not a parse error; they are carried as
    /// [`Method::Other`] so routing can answer 405 while still honoring
    /// the request's connection semantics.
    ///
    /// # Example
    ///
    /// ```
    /// # use beacon::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Method::GET);
    /// assert_eq!(Method::from_token("PATCH"), Method::Other("PATCH".to_string()));
    /// ```
    pub fn from_token(token: &str) -> Self {
        match token {
            "GET" => Method::GET,
            "POST" => Method::POST,
            other => Method::Other(other.to_string()),
        }
    }
}

/// A parsed HTTP request head: request line plus headers.
///
/// Header names are lowercased at parse time; when the same name appears
/// more than once the last occurrence wins. The path is kept raw, exactly
/// as it appeared on the wire (no URL decoding, no normalization).
///
/// The body is deliberately not part of the head. Dispatch never looks at
/// it; the file-upload handler pulls exactly `content_length()` bytes
/// through the body reader when it needs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method (GET, POST, or an unsupported token)
    pub method: Method,
    /// The raw request path (e.g., "/echo/hello")
    pub path: String,
    /// Request headers, keyed by lowercased name
    pub headers: HashMap<String, String>,
}

/// Builder for constructing Request values, mainly in tests.
pub struct RequestBuilder {
    method: Method,
    path: String,
    headers: HashMap<String, String>,
}

impl RequestBuilder {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HashMap::new(),
        }
    }

    /// Adds a header, lowercasing the name the way the parser does.
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_lowercase(), value.into());
        self
    }

    pub fn build(self) -> Request {
        Request {
            method: self.method,
            path: self.path,
            headers: self.headers,
        }
    }
}

impl Request {
    /// Retrieves a header value by its lowercased name.
    ///
    /// Names are stored lowercased, so lookups must use lowercase too
    /// (e.g. `"user-agent"`, not `"User-Agent"`).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|v| v.as_str())
    }

    /// The declared Content-Length, or 0 if the header is missing or not
    /// a valid number.
    pub fn content_length(&self) -> usize {
        self.header("content-length")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    /// Whether the client asked for the connection to be closed after this
    /// response (`Connection: close`, case-insensitive). HTTP/1.1 defaults
    /// to keep-alive.
    pub fn wants_close(&self) -> bool {
        self.header("connection")
            .map(|v| v.eq_ignore_ascii_case("close"))
            .unwrap_or(false)
    }

    /// Whether the client advertised gzip support: the Accept-Encoding
    /// value, split on commas with each token trimmed, contains the exact
    /// token `gzip`.
    pub fn accepts_gzip(&self) -> bool {
        self.header("accept-encoding")
            .map(|v| v.split(',').any(|token| token.trim() == "gzip"))
            .unwrap_or(false)
    }
}
