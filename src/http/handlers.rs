//! Request handlers.
//!
//! Echo and user-agent are pure functions from the request head to a
//! response. The file handlers go through the [`FileStore`] collaborator
//! and nothing else; the connection loop reads the upload body before
//! calling [`file_post`], so no handler touches the socket.

use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};
use crate::store::{FileStore, StoreError};

/// `GET /`: an empty 200.
pub fn root() -> Response {
    Response::new(StatusCode::Ok)
}

/// `GET /echo/<msg>`: the path remainder, verbatim.
///
/// When the client's Accept-Encoding includes the token `gzip`, the body
/// is gzip-compressed and Content-Encoding is set; Content-Length then
/// reflects the compressed length (the writer derives it from the final
/// body). Encoder failure degrades to 500.
pub fn echo(req: &Request) -> Response {
    let Some(msg) = req.path.strip_prefix("/echo/") else {
        // Unreachable through the router; kept so the handler stands alone.
        return Response::bad_request();
    };

    if !req.accepts_gzip() {
        return Response::text(msg);
    }

    match gzip_encode(msg.as_bytes()) {
        Ok(compressed) => {
            let mut resp = Response::text(compressed);
            resp.content_encoding = Some("gzip");
            resp
        }
        Err(e) => {
            tracing::error!(error = %e, "gzip encoding failed");
            Response::internal_error()
        }
    }
}

/// `GET /user-agent`: reflects the User-Agent header, or an empty body
/// if the client sent none.
pub fn user_agent(req: &Request) -> Response {
    Response::text(req.header("user-agent").unwrap_or(""))
}

/// `GET /files/<name>`: the file's raw bytes as `application/octet-stream`.
///
/// An empty or traversal-attempting filename looks the same to the client
/// as a missing file: 404.
pub async fn file_get(store: &FileStore, name: &str) -> Response {
    match store.read(name).await {
        Ok(contents) => Response::octet_stream(contents),
        Err(StoreError::InvalidName) | Err(StoreError::NotFound) => Response::not_found(),
        Err(StoreError::Io(e)) => {
            tracing::error!(name = %name, error = %e, "file read failed");
            Response::internal_error()
        }
    }
}

/// `POST /files/<name>`: writes the body to the store, overwriting any
/// existing file. Empty and traversal-attempting filenames are the
/// client's fault: 400.
pub async fn file_post(store: &FileStore, name: &str, body: &[u8]) -> Response {
    match store.write(name, body).await {
        Ok(()) => Response::created(),
        Err(StoreError::InvalidName) => Response::bad_request(),
        Err(e) => {
            tracing::error!(name = %name, error = ?e, "file write failed");
            Response::internal_error()
        }
    }
}

fn gzip_encode(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}
