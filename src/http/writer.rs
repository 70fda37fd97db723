//! Response serialization and transmission.
//!
//! Headers go out in a fixed order: Content-Type, Content-Length,
//! Content-Encoding, Connection. Content-Length is computed here from the
//! final body, so it is always the byte length on the wire even after a
//! gzip transform. The body is appended verbatim; compressed output is
//! opaque bytes and is never re-escaped.

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Serializes a response to wire bytes: status line, headers, blank line,
/// body.
pub fn serialize_response(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::with_capacity(128 + resp.body.len());

    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    if let Some(content_type) = resp.content_type {
        buf.extend_from_slice(format!("Content-Type: {}\r\n", content_type).as_bytes());
    }
    buf.extend_from_slice(format!("Content-Length: {}\r\n", resp.body.len()).as_bytes());
    if let Some(encoding) = resp.content_encoding {
        buf.extend_from_slice(format!("Content-Encoding: {}\r\n", encoding).as_bytes());
    }
    if resp.close {
        buf.extend_from_slice(b"Connection: close\r\n");
    }

    buf.extend_from_slice(b"\r\n");
    buf.extend_from_slice(&resp.body);

    buf
}

/// Writes one serialized response, handling partial writes.
pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    /// Pushes the remaining bytes to the stream. The write deadline is the
    /// caller's job; the connection wraps this call in a timeout.
    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        Ok(())
    }
}
