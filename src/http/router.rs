//! Maps (method, path) to a handler.
//!
//! Routing is a pure function of the request head. It never looks at the
//! body; the file-upload arm reads its body later, through the body
//! reader. Unsupported methods are rejected before the path is examined,
//! so `PATCH /echo/x` answers 405, not 404.

use crate::http::request::{Method, Request};

/// Where a request is headed.
///
/// The borrowed strings are path remainders: the echo message after
/// `/echo/`, or the filename after `/files/`, both raw (not URL-decoded).
#[derive(Debug, PartialEq, Eq)]
pub enum Route<'a> {
    /// `GET /`: empty 200.
    Root,
    /// `GET /echo/<msg>`.
    Echo(&'a str),
    /// `GET /user-agent`.
    UserAgent,
    /// `GET /files/<name>`.
    FileGet(&'a str),
    /// `POST /files/<name>`.
    FilePost(&'a str),
    /// Known method, no matching path; answered 404.
    UnknownPath,
    /// Method other than GET or POST; answered 405.
    UnknownMethod,
}

/// Resolves the request to a route.
pub fn route(req: &Request) -> Route<'_> {
    match req.method {
        Method::GET => match req.path.as_str() {
            "/" => Route::Root,
            "/user-agent" => Route::UserAgent,
            path => {
                if let Some(msg) = path.strip_prefix("/echo/") {
                    Route::Echo(msg)
                } else if let Some(name) = path.strip_prefix("/files/") {
                    Route::FileGet(name)
                } else {
                    Route::UnknownPath
                }
            }
        },
        Method::POST => match req.path.strip_prefix("/files/") {
            Some(name) => Route::FilePost(name),
            None => Route::UnknownPath,
        },
        Method::Other(_) => Route::UnknownMethod,
    }
}
