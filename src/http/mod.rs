//! HTTP protocol implementation.
//!
//! A hand-rolled HTTP/1.1 layer over raw TCP with keep-alive support; no
//! HTTP library anywhere in the stack.
//!
//! # Architecture
//!
//! - **`connection`**: the per-connection state machine driving decode,
//!   dispatch, encode, write
//! - **`parser`**: incremental request-head decoding from a byte buffer
//! - **`request`**: parsed request head and negotiation helpers
//! - **`response`**: response representation with typed header slots
//! - **`writer`**: response serialization and partial-write handling
//! - **`body`**: content-length-bounded body reading
//! - **`router`**: pure (method, path) to handler mapping
//! - **`handlers`**: echo, user-agent reflection, file download/upload
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────────┐
//!        │ AwaitingRequest │ ← Accumulate reads until a head parses
//!        └────────┬────────┘
//!                 │ Head parsed           (malformed → 400 → Closed)
//!                 ▼
//!        ┌─────────────────┐
//!        │   Dispatched    │ ← Route, run handler, write response
//!        └────────┬────────┘
//!                 │ Response written      (write failure → Closed)
//!                 ▼
//!        ┌─────────────────┐
//!        │  ResponseSent   │
//!        └────────┬────────┘
//!                 ├─ Keep-Alive → AwaitingRequest (same connection)
//!                 └─ Close → Closed
//! ```
//!
//! Read and write deadlines are per-operation; expiry on either side
//! closes the connection.

pub mod body;
pub mod connection;
pub mod handlers;
pub mod parser;
pub mod request;
pub mod response;
pub mod router;
pub mod writer;
