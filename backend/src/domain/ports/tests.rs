//! Port-level contracts: error wording and mock wiring.

use super::*;
use crate::domain::{Category, CategoryId};
use actix_rt::System;
use rstest::rstest;

#[rstest]
#[case(
    QuestionRepositoryError::connection("refused"),
    "question store connection failed: refused"
)]
#[case(
    QuestionRepositoryError::query("syntax"),
    "question store query failed: syntax"
)]
#[case(
    QuestionRepositoryError::constraint("unknown category"),
    "question store rejected the write: unknown category"
)]
fn question_repository_errors_render_context(
    #[case] error: QuestionRepositoryError,
    #[case] expected: &str,
) {
    assert_eq!(error.to_string(), expected);
}

#[rstest]
fn category_repository_errors_render_context() {
    assert_eq!(
        CategoryRepositoryError::query("bad row").to_string(),
        "category store query failed: bad row"
    );
}

#[rstest]
fn category_mock_returns_configured_rows() {
    let mut repo = MockCategoryRepository::new();
    repo.expect_all().times(1).return_once(|| {
        Ok(vec![Category {
            id: CategoryId::new(1),
            kind: "Science".to_owned(),
        }])
    });

    System::new().block_on(async move {
        let categories = repo.all().await.expect("categories load");
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].kind, "Science");
    });
}
