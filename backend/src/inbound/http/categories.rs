//! Category endpoints.
//!
//! ```text
//! GET /categories
//! GET /categories/{id}/questions?page=N
//! ```

use actix_web::{HttpResponse, get, web};

use crate::domain::CategoryId;
use crate::domain::ports::CategoryQuestionsRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::{CategoriesResponse, QuestionPageResponse};
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::PageQuery;

/// List every category as an identifier to name map.
#[utoipa::path(
    get,
    path = "/categories",
    tags = ["categories"],
    responses(
        (status = 200, description = "All categories", body = CategoriesResponse),
        (status = 500, description = "Category store failure", body = ErrorEnvelope)
    )
)]
#[get("/categories")]
pub async fn list_categories(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let categories = state.questions.list_categories().await?;
    Ok(HttpResponse::Ok().json(CategoriesResponse::new(&categories)))
}

/// Page through the questions filed under one category.
///
/// `total_questions` counts the whole bank, not just this category.
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    tags = ["categories"],
    params(
        ("id" = i32, Path, description = "Category identifier"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Questions in the category", body = QuestionPageResponse),
        (status = 400, description = "Invalid page", body = ErrorEnvelope),
        (status = 404, description = "Category has no questions", body = ErrorEnvelope),
        (status = 500, description = "Question store failure", body = ErrorEnvelope)
    )
)]
#[get("/categories/{id}/questions")]
pub async fn questions_by_category(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    query: web::Query<PageQuery>,
) -> ApiResult<HttpResponse> {
    let request = CategoryQuestionsRequest {
        category: CategoryId::new(path.into_inner()),
        page: query.page()?,
    };
    let page = state.questions.questions_by_category(request).await?;
    Ok(HttpResponse::Ok().json(QuestionPageResponse::new(
        &page.questions,
        page.total_questions,
    )))
}
