//! One accepted connection, driven to completion.
//!
//! The connection owns the socket and a carry-over read buffer: bytes
//! that arrive with one request's head but belong to its body (or to the
//! next request) stay in the buffer between iterations. The state machine
//! runs decode, dispatch, encode, write until a close condition, then the
//! socket drops exactly once with the `Connection`.

use std::time::Duration;

use bytes::BytesMut;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::http::body;
use crate::http::handlers;
use crate::http::parser::{parse_request_head, ParseError};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::router::{self, Route};
use crate::http::writer::ResponseWriter;
use crate::store::FileStore;

/// Per-operation read deadline: covers one head read or one body read,
/// not the whole connection.
const READ_DEADLINE: Duration = Duration::from_secs(10);
/// Per-operation write deadline for one serialized response.
const WRITE_DEADLINE: Duration = Duration::from_secs(10);

pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    store: FileStore,
    state: ConnectionState,
    read_deadline: Duration,
    write_deadline: Duration,
}

pub enum ConnectionState {
    /// Waiting for (the rest of) a request head.
    AwaitingRequest,
    /// Head parsed; handler about to run and the response to be written.
    Dispatched(Request),
    /// Response on the wire; decide between keep-alive and close.
    ResponseSent { close: bool },
    /// Terminal. Dropping the connection closes the socket.
    Closed,
}

/// Outcome of waiting for a request head.
enum HeadRead {
    /// A complete, well-formed head.
    Request(Request),
    /// Fatally malformed head; owed a 400 before closing.
    Malformed,
    /// EOF, read error, or deadline expiry; close with nothing written.
    Disconnect,
}

impl Connection {
    pub fn new(stream: TcpStream, store: FileStore) -> Self {
        Self::with_deadlines(stream, store, READ_DEADLINE, WRITE_DEADLINE)
    }

    /// Same connection with explicit deadlines; tests shrink them to keep
    /// the idle-timeout cases fast.
    pub fn with_deadlines(
        stream: TcpStream,
        store: FileStore,
        read_deadline: Duration,
        write_deadline: Duration,
    ) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            store,
            state: ConnectionState::AwaitingRequest,
            read_deadline,
            write_deadline,
        }
    }

    /// Drives the connection until it closes. All failures end here: a
    /// malformed head earns a 400, transport trouble just closes the
    /// socket, and handler errors have already been mapped to HTTP error
    /// responses by the time they reach the writer.
    pub async fn run(&mut self) {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::AwaitingRequest => {
                    self.state = match self.read_head().await {
                        HeadRead::Request(req) => ConnectionState::Dispatched(req),
                        HeadRead::Malformed => {
                            self.reject_malformed().await;
                            ConnectionState::Closed
                        }
                        HeadRead::Disconnect => ConnectionState::Closed,
                    };
                }

                ConnectionState::Dispatched(req) => {
                    tracing::info!(method = ?req.method, path = %req.path, "request");

                    let close = req.wants_close();
                    let mut response = self.dispatch(&req).await;
                    response.close = close;

                    tracing::debug!(status = response.status.as_u16(), "response");
                    self.state = match self.write_response(&response).await {
                        Ok(()) => ConnectionState::ResponseSent { close },
                        Err(()) => ConnectionState::Closed,
                    };
                }

                ConnectionState::ResponseSent { close } => {
                    self.state = if close {
                        ConnectionState::Closed
                    } else {
                        ConnectionState::AwaitingRequest
                    };
                }

                ConnectionState::Closed => break,
            }
        }
    }

    /// Accumulates socket reads into the buffer until a full head parses,
    /// draining exactly the head's bytes on success so body bytes stay put.
    async fn read_head(&mut self) -> HeadRead {
        loop {
            match parse_request_head(&self.buffer) {
                Ok((request, consumed)) => {
                    let _ = self.buffer.split_to(consumed);
                    return HeadRead::Request(request);
                }
                Err(ParseError::Incomplete) => {}
                Err(e) => {
                    tracing::warn!(error = ?e, "malformed request head");
                    return HeadRead::Malformed;
                }
            }

            match timeout(self.read_deadline, self.stream.read_buf(&mut self.buffer)).await {
                Ok(Ok(0)) => return HeadRead::Disconnect,
                Ok(Ok(_)) => {}
                Ok(Err(e)) => {
                    tracing::debug!(error = %e, "read failed");
                    return HeadRead::Disconnect;
                }
                Err(_) => {
                    tracing::debug!("read deadline expired");
                    return HeadRead::Disconnect;
                }
            }
        }
    }

    /// Routes the request and runs its handler. Only the file-upload arm
    /// reads a body, and only here, after dispatch has already picked the
    /// handler.
    async fn dispatch(&mut self, req: &Request) -> Response {
        match router::route(req) {
            Route::Root => handlers::root(),
            Route::Echo(_) => handlers::echo(req),
            Route::UserAgent => handlers::user_agent(req),
            Route::FileGet(name) => handlers::file_get(&self.store, name).await,
            Route::FilePost(name) => {
                let declared = req.content_length();
                // Grows with the bytes that actually arrive; the declared
                // length is client-controlled and may not fit in memory.
                let mut upload = Vec::new();
                let read =
                    body::read_body(&mut self.stream, &mut self.buffer, declared, &mut upload);
                if timeout(self.read_deadline, read).await.is_err() {
                    tracing::debug!("read deadline expired mid-body, keeping partial body");
                }
                handlers::file_post(&self.store, name, &upload).await
            }
            Route::UnknownPath => Response::not_found(),
            Route::UnknownMethod => Response::method_not_allowed(),
        }
    }

    async fn write_response(&mut self, response: &Response) -> Result<(), ()> {
        let mut writer = ResponseWriter::new(response);
        match timeout(self.write_deadline, writer.write_to_stream(&mut self.stream)).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => {
                tracing::debug!(error = %e, "write failed");
                Err(())
            }
            Err(_) => {
                tracing::debug!("write deadline expired");
                Err(())
            }
        }
    }

    /// Best-effort `400 Bad Request` with `Connection: close`; the
    /// connection closes regardless of whether the write lands.
    async fn reject_malformed(&mut self) {
        let mut response = Response::bad_request();
        response.close = true;
        let _ = self.write_response(&response).await;
    }
}
