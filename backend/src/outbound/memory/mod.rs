//! In-memory store adapters.
//!
//! Used when no database URL is configured and by the HTTP integration
//! tests. Queries reuse the domain filters so both adapters share the same
//! matching rules as the SQL implementation.

mod category_store;
mod question_store;

pub use category_store::{InMemoryCategoryStore, SEED_CATEGORIES};
pub use question_store::InMemoryQuestionStore;
