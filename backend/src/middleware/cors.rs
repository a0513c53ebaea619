//! Permissive CORS headers applied to every response.
//!
//! The browser client is served from a different origin, so every response
//! advertises the allowed origin, headers, and methods. Preflight `OPTIONS`
//! requests are answered by [`crate::inbound::http::preflight`].

use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;

/// Value of `Access-Control-Allow-Origin`.
pub const ALLOW_ORIGIN: &str = "*";
/// Value of `Access-Control-Allow-Headers`.
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";
/// Value of `Access-Control-Allow-Methods`.
pub const ALLOW_METHODS: &str = "GET,POST,PATCH,DELETE,OPTIONS";

/// Build the middleware adding the CORS headers.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::middleware::cors_headers;
///
/// let _app = App::new().wrap(cors_headers());
/// ```
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN))
        .add((header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS))
        .add((header::ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS))
}
