//! Question store backed by an ordered map.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{QuestionRepository, QuestionRepositoryError};
use crate::domain::{
    CategoryId, NewQuestion, Question, QuestionId, filter_by_category, search_by_text,
};

#[derive(Debug, Default)]
struct State {
    rows: BTreeMap<QuestionId, Question>,
    last_id: i32,
}

/// Thread-safe in-memory question store.
///
/// Identifiers are assigned sequentially and never reused, matching a serial
/// primary key. When `known_categories` is set, inserts referencing any other
/// category fail with a constraint error.
#[derive(Debug, Default)]
pub struct InMemoryQuestionStore {
    state: Mutex<State>,
    known_categories: Option<Vec<CategoryId>>,
}

impl InMemoryQuestionStore {
    /// Empty store accepting any category.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only accept inserts into the given categories.
    pub fn with_known_categories(mut self, categories: impl IntoIterator<Item = CategoryId>) -> Self {
        self.known_categories = Some(categories.into_iter().collect());
        self
    }

    /// Store pre-populated with `questions`, assigning identifiers in order.
    pub fn with_questions(self, questions: impl IntoIterator<Item = NewQuestion>) -> Self {
        if let Ok(mut state) = self.state.lock() {
            for draft in questions {
                state.last_id += 1;
                let id = QuestionId::new(state.last_id);
                state.rows.insert(id, draft.with_id(id));
            }
        }
        self
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, QuestionRepositoryError> {
        self.state
            .lock()
            .map_err(|_| QuestionRepositoryError::connection("question store lock poisoned"))
    }

    fn snapshot(&self) -> Result<Vec<Question>, QuestionRepositoryError> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionStore {
    async fn all(&self) -> Result<Vec<Question>, QuestionRepositoryError> {
        self.snapshot()
    }

    async fn count(&self) -> Result<usize, QuestionRepositoryError> {
        Ok(self.lock()?.rows.len())
    }

    async fn get(&self, id: QuestionId) -> Result<Option<Question>, QuestionRepositoryError> {
        Ok(self.lock()?.rows.get(&id).cloned())
    }

    async fn insert(&self, question: NewQuestion) -> Result<Question, QuestionRepositoryError> {
        if let Some(known) = &self.known_categories {
            if !known.contains(&question.category) {
                return Err(QuestionRepositoryError::constraint(format!(
                    "category {} does not exist",
                    question.category
                )));
            }
        }

        let mut state = self.lock()?;
        let next = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| QuestionRepositoryError::constraint("question identifiers exhausted"))?;
        state.last_id = next;
        let stored = question.with_id(QuestionId::new(next));
        state.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: QuestionId) -> Result<bool, QuestionRepositoryError> {
        Ok(self.lock()?.rows.remove(&id).is_some())
    }

    async fn find_by_text_substring(
        &self,
        term: &str,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        Ok(search_by_text(term, &self.snapshot()?))
    }

    async fn find_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        Ok(filter_by_category(category, &self.snapshot()?))
    }
}
