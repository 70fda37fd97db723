use beacon::http::request::{Method, RequestBuilder};
use beacon::http::router::{route, Route};

fn get(path: &str) -> beacon::http::request::Request {
    RequestBuilder::new(Method::GET, path).build()
}

fn post(path: &str) -> beacon::http::request::Request {
    RequestBuilder::new(Method::POST, path).build()
}

#[test]
fn test_get_root() {
    assert_eq!(route(&get("/")), Route::Root);
}

#[test]
fn test_get_echo_keeps_raw_remainder() {
    assert_eq!(route(&get("/echo/hello")), Route::Echo("hello"));
    // Not URL-decoded, not normalized; slashes stay in the message.
    assert_eq!(route(&get("/echo/a%20b/c")), Route::Echo("a%20b/c"));
    assert_eq!(route(&get("/echo/")), Route::Echo(""));
}

#[test]
fn test_get_user_agent_is_exact_match() {
    assert_eq!(route(&get("/user-agent")), Route::UserAgent);
    assert_eq!(route(&get("/user-agent/extra")), Route::UnknownPath);
}

#[test]
fn test_files_routes_extract_the_filename() {
    assert_eq!(route(&get("/files/data.txt")), Route::FileGet("data.txt"));
    assert_eq!(route(&post("/files/up.bin")), Route::FilePost("up.bin"));
    // Empty remainder still routes; the handler decides 404 vs 400.
    assert_eq!(route(&get("/files/")), Route::FileGet(""));
    assert_eq!(route(&post("/files/")), Route::FilePost(""));
}

#[test]
fn test_prefix_match_requires_the_trailing_slash() {
    assert_eq!(route(&get("/echo")), Route::UnknownPath);
    assert_eq!(route(&get("/files")), Route::UnknownPath);
}

#[test]
fn test_unknown_paths() {
    assert_eq!(route(&get("/nope")), Route::UnknownPath);
    assert_eq!(route(&post("/")), Route::UnknownPath);
    assert_eq!(route(&post("/echo/hi")), Route::UnknownPath);
}

#[test]
fn test_unsupported_method_wins_over_path() {
    let req = RequestBuilder::new(Method::Other("PATCH".to_string()), "/echo/hi").build();
    assert_eq!(route(&req), Route::UnknownMethod);

    let req = RequestBuilder::new(Method::Other("HEAD".to_string()), "/").build();
    assert_eq!(route(&req), Route::UnknownMethod);
}
