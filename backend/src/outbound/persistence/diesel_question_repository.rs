//! PostgreSQL-backed `QuestionRepository` implementation using Diesel ORM.
//!
//! Every read is ordered by `id` ascending. Substring search uses `ILIKE`
//! with `%`, `_`, and `\` escaped so the term always matches literally.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{QuestionRepository, QuestionRepositoryError};
use crate::domain::{CategoryId, NewQuestion, Question, QuestionId};

use super::error_mapping::DieselFailure;
use super::models::{NewQuestionRow, QuestionRow};
use super::pool::DbPool;
use super::schema::questions;

/// Diesel-backed implementation of the `QuestionRepository` port.
#[derive(Clone)]
pub struct DieselQuestionRepository {
    pool: DbPool,
}

impl DieselQuestionRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_error(error: impl Into<DieselFailure>) -> QuestionRepositoryError {
    QuestionRepositoryError::from(error.into())
}

fn to_domain(row: QuestionRow) -> Result<Question, QuestionRepositoryError> {
    let id = row.id;
    Question::try_from(row).map_err(|err| {
        warn!(id, error = %err, "stored question failed validation");
        QuestionRepositoryError::query(format!("question {id} is corrupt: {err}"))
    })
}

fn to_domain_all(rows: Vec<QuestionRow>) -> Result<Vec<Question>, QuestionRepositoryError> {
    rows.into_iter().map(to_domain).collect()
}

/// Build an `ILIKE` pattern matching `term` anywhere in the text.
pub(crate) fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl QuestionRepository for DieselQuestionRepository {
    async fn all(&self) -> Result<Vec<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_error)?;
        let rows = questions::table
            .order(questions::id.asc())
            .select(QuestionRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_error)?;
        to_domain_all(rows)
    }

    async fn count(&self) -> Result<usize, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_error)?;
        let total: i64 = questions::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_error)?;
        usize::try_from(total)
            .map_err(|_| QuestionRepositoryError::query(format!("invalid row count {total}")))
    }

    async fn get(&self, id: QuestionId) -> Result<Option<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_error)?;
        let row = questions::table
            .find(id.get())
            .select(QuestionRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_error)?;
        row.map(to_domain).transpose()
    }

    async fn insert(&self, question: NewQuestion) -> Result<Question, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_error)?;
        let row = diesel::insert_into(questions::table)
            .values(NewQuestionRow::from(&question))
            .returning(QuestionRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_error)?;
        to_domain(row)
    }

    async fn delete(&self, id: QuestionId) -> Result<bool, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_error)?;
        let removed = diesel::delete(questions::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_error)?;
        Ok(removed > 0)
    }

    async fn find_by_text_substring(
        &self,
        term: &str,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_error)?;
        let rows = questions::table
            .filter(questions::question.ilike(contains_pattern(term)))
            .order(questions::id.asc())
            .select(QuestionRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_error)?;
        to_domain_all(rows)
    }

    async fn find_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_error)?;
        let rows = questions::table
            .filter(questions::category.eq(category.get()))
            .order(questions::id.asc())
            .select(QuestionRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_error)?;
        to_domain_all(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("cat", "%cat%")]
    #[case("", "%%")]
    #[case("100%", "%100\\%%")]
    #[case("snake_case", "%snake\\_case%")]
    #[case("a\\b", "%a\\\\b%")]
    fn pattern_escapes_wildcards(#[case] term: &str, #[case] expected: &str) {
        assert_eq!(contains_pattern(term), expected);
    }

    #[rstest]
    fn corrupt_rows_surface_as_query_errors() {
        let row = QuestionRow {
            id: 3,
            question: String::new(),
            answer: "x".to_owned(),
            difficulty: 1,
            category: 1,
        };
        assert!(matches!(
            to_domain(row),
            Err(QuestionRepositoryError::Query { .. })
        ));
    }
}
