//! Beacon - minimal HTTP/1.1 file server over raw TCP
//!
//! Core library: wire codec, connection state machine, routing, handlers,
//! and the file-store collaborator.

pub mod config;
pub mod http;
pub mod server;
pub mod store;
