//! Request middleware.
//!
//! Purpose: cross-cutting request lifecycle concerns. `Trace` correlates log
//! lines for a request; `cors_headers` applies the permissive CORS policy the
//! browser client relies on.

pub mod cors;
pub mod trace;

pub use cors::cors_headers;
pub use trace::Trace;
