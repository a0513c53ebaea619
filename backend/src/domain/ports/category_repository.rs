//! Driven port for the read-only category table.

use async_trait::async_trait;

use crate::domain::Category;

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading categories.
    pub enum CategoryRepositoryError {
        /// Store connection could not be established.
        Connection { message: String } =>
            "category store connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "category store query failed: {message}",
    }
}

/// Port for listing categories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Every category, ordered by identifier ascending. An empty table yields
    /// an empty vector rather than an error.
    async fn all(&self) -> Result<Vec<Category>, CategoryRepositoryError>;
}
