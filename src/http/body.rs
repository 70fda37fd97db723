//! Content-length-bounded body reading.
//!
//! The parser stops at the end of the head, so any body bytes that arrived
//! with it are still sitting in the connection buffer, with the remainder
//! on the socket. This module drains both in that order.

use std::time::Duration;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::time::timeout;

/// Upper bound on a single read from the source.
const CHUNK_SIZE: usize = 1024;

/// Reads the request body into `out`: exactly `declared_len` bytes, or
/// fewer if the source ends or fails first. A short read is final; callers
/// never retry.
///
/// Bytes already in `buffered` (read along with the head) are drained
/// first; the rest comes off the source in bounded chunks. With no declared
/// length the body is whatever a single best-effort probe yields,
/// an accepted limit of this server, since doing better would require
/// chunked transfer-encoding.
///
/// `out` belongs to the caller, so a body cut short by the session's read
/// deadline still keeps the bytes collected before the cutoff.
pub async fn read_body<R>(
    source: &mut R,
    buffered: &mut BytesMut,
    declared_len: usize,
    out: &mut Vec<u8>,
) where
    R: AsyncRead + Unpin,
{
    if declared_len == 0 {
        // Single attempt: leftover buffered bytes, or whatever is
        // immediately readable on the socket.
        if !buffered.is_empty() {
            let take = buffered.len().min(CHUNK_SIZE);
            out.extend_from_slice(&buffered.split_to(take));
        } else {
            let mut chunk = [0u8; CHUNK_SIZE];
            if let Ok(Ok(n)) = timeout(Duration::ZERO, source.read(&mut chunk)).await {
                out.extend_from_slice(&chunk[..n]);
            }
        }
        return;
    }

    let from_buffer = buffered.len().min(declared_len);
    out.extend_from_slice(&buffered.split_to(from_buffer));

    let mut chunk = [0u8; CHUNK_SIZE];
    while out.len() < declared_len {
        let want = (declared_len - out.len()).min(CHUNK_SIZE);
        match source.read(&mut chunk[..want]).await {
            Ok(0) => break,
            Ok(n) => out.extend_from_slice(&chunk[..n]),
            Err(e) => {
                tracing::debug!(error = %e, "body read failed, keeping partial body");
                break;
            }
        }
    }
}
