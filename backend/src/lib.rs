//! Trivia question bank backend.
//!
//! The domain owns pagination, search, category filtering, and quiz
//! sampling; HTTP and storage live in adapters around it.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
