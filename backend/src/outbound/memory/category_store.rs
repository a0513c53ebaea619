//! Fixed category table.

use async_trait::async_trait;

use crate::domain::ports::{CategoryRepository, CategoryRepositoryError};
use crate::domain::{Category, CategoryId};

/// Canonical categories, identifiers `1..=6` in this order.
pub const SEED_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Read-only category store held in memory.
#[derive(Debug, Clone)]
pub struct InMemoryCategoryStore {
    categories: Vec<Category>,
}

impl InMemoryCategoryStore {
    /// Store holding the given categories, sorted by identifier.
    pub fn new(mut categories: Vec<Category>) -> Self {
        categories.sort_by_key(|category| category.id);
        Self { categories }
    }

    /// Store holding [`SEED_CATEGORIES`].
    pub fn seeded() -> Self {
        let categories = SEED_CATEGORIES
            .iter()
            .zip(1..)
            .map(|(kind, id)| Category {
                id: CategoryId::new(id),
                kind: (*kind).to_owned(),
            })
            .collect();
        Self::new(categories)
    }
}

impl Default for InMemoryCategoryStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryStore {
    async fn all(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        Ok(self.categories.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn seeded_store_lists_six_categories_in_order() {
        let listed = InMemoryCategoryStore::seeded().all().await.expect("categories");
        let names: Vec<&str> = listed.iter().map(|c| c.kind.as_str()).collect();
        assert_eq!(names, SEED_CATEGORIES);
        assert_eq!(listed[5].id, CategoryId::new(6));
    }

    #[rstest]
    #[tokio::test]
    async fn empty_store_is_not_an_error() {
        let listed = InMemoryCategoryStore::new(Vec::new())
            .all()
            .await
            .expect("empty list");
        assert!(listed.is_empty());
    }
}
