//! Question endpoints.
//!
//! ```text
//! GET    /questions?page=N
//! DELETE /questions/{id}
//! POST   /add
//! POST   /questions/search?page=N
//! ```

use actix_web::{HttpResponse, delete, get, post, web};

use crate::domain::QuestionId;
use crate::domain::ports::{AddQuestionRequest, SearchQuestionsRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::{
    AddQuestionBody, CreatedResponse, DeletedResponse, QuestionListResponse,
    QuestionPageResponse, QuestionView, SearchBody,
};
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::PageQuery;

/// Page through the whole bank, with the category map attached.
#[utoipa::path(
    get,
    path = "/questions",
    tags = ["questions"],
    params(PageQuery),
    responses(
        (status = 200, description = "One page of questions", body = QuestionListResponse),
        (status = 400, description = "Invalid page", body = ErrorEnvelope),
        (status = 404, description = "Page is empty", body = ErrorEnvelope),
        (status = 500, description = "Store failure", body = ErrorEnvelope)
    )
)]
#[get("/questions")]
pub async fn list_questions(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
) -> ApiResult<HttpResponse> {
    let listing = state.questions.list_questions(query.page()?).await?;
    Ok(HttpResponse::Ok().json(QuestionListResponse::new(
        &listing.questions,
        &listing.categories,
        listing.total_questions,
    )))
}

/// Delete a question by identifier.
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    tags = ["questions"],
    params(("id" = i32, Path, description = "Question identifier")),
    responses(
        (status = 200, description = "Question deleted", body = DeletedResponse),
        (status = 404, description = "No such question", body = ErrorEnvelope),
        (status = 422, description = "Store rejected the delete", body = ErrorEnvelope)
    )
)]
#[delete("/questions/{id}")]
pub async fn delete_question(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let deleted = state
        .commands
        .delete_question(QuestionId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(DeletedResponse {
        success: true,
        deleted: deleted.get(),
    }))
}

/// Create a question. All four fields are required.
#[utoipa::path(
    post,
    path = "/add",
    tags = ["questions"],
    request_body = AddQuestionBody,
    responses(
        (status = 200, description = "Question stored", body = CreatedResponse),
        (status = 422, description = "Missing or invalid fields, or store rejection", body = ErrorEnvelope)
    )
)]
#[post("/add")]
pub async fn add_question(
    state: web::Data<HttpState>,
    payload: web::Json<AddQuestionBody>,
) -> ApiResult<HttpResponse> {
    let request = AddQuestionRequest::from(payload.into_inner());
    let stored = state.commands.add_question(request).await?;
    Ok(HttpResponse::Ok().json(CreatedResponse {
        success: true,
        question: QuestionView::from(&stored),
    }))
}

/// Search question text case-insensitively.
#[utoipa::path(
    post,
    path = "/questions/search",
    tags = ["questions"],
    params(PageQuery),
    request_body = SearchBody,
    responses(
        (status = 200, description = "Matching questions", body = QuestionPageResponse),
        (status = 400, description = "Invalid page", body = ErrorEnvelope),
        (status = 404, description = "No matches on this page", body = ErrorEnvelope),
        (status = 422, description = "Malformed body", body = ErrorEnvelope)
    )
)]
#[post("/questions/search")]
pub async fn search_questions(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
    payload: web::Json<SearchBody>,
) -> ApiResult<HttpResponse> {
    let request = SearchQuestionsRequest {
        term: payload.into_inner().search_term.unwrap_or_default(),
        page: query.page()?,
    };
    let found = state.questions.search_questions(request).await?;
    Ok(HttpResponse::Ok().json(QuestionPageResponse::new(
        &found.questions,
        found.total_questions,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Error;
    use crate::domain::ports::{
        MockQuestionCommand, MockQuestionQuery, QuestionListing, QuestionPage,
    };
    use crate::inbound::http::test_utils::{init_app, sample_question};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use mockall::predicate::eq;
    use pagination::PageNumber;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[actix_web::test]
    async fn list_defaults_to_first_page() {
        let mut query = MockQuestionQuery::new();
        query
            .expect_list_questions()
            .with(eq(PageNumber::FIRST))
            .return_once(|_| {
                Ok(QuestionListing {
                    questions: vec![sample_question(1, 1)],
                    total_questions: 1,
                    categories: Vec::new(),
                })
            });
        let app = init_app!(query, MockQuestionCommand::new());

        let body: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/questions").to_request(),
        )
        .await;
        assert_eq!(body["success"], true);
        assert_eq!(body["current_category"], Value::Null);
        assert_eq!(body["total_questions"], 1);
        assert_eq!(body["categories"], json!({}));
    }

    #[rstest]
    #[actix_web::test]
    async fn empty_page_is_404_envelope() {
        let mut query = MockQuestionQuery::new();
        query
            .expect_list_questions()
            .return_once(|_| Err(Error::not_found("no questions on page 9")));
        let app = init_app!(query, MockQuestionCommand::new());

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/questions?page=9").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(
            body,
            json!({"success": false, "error": 404, "message": "Sorry not found"})
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn delete_reports_removed_id() {
        let mut command = MockQuestionCommand::new();
        command
            .expect_delete_question()
            .with(eq(QuestionId::new(5)))
            .return_once(Ok);
        let app = init_app!(MockQuestionQuery::new(), command);

        let body: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::delete().uri("/questions/5").to_request(),
        )
        .await;
        assert_eq!(body, json!({"success": true, "deleted": 5}));
    }

    #[rstest]
    #[actix_web::test]
    async fn add_converts_string_fields() {
        let mut command = MockQuestionCommand::new();
        command
            .expect_add_question()
            .withf(|request| request.difficulty == Some(2) && request.category == Some(3))
            .return_once(|_| Ok(sample_question(24, 3)));
        let app = init_app!(MockQuestionQuery::new(), command);

        let req = test::TestRequest::post()
            .uri("/add")
            .set_json(json!({
                "question": "Sample question 24",
                "answer": "Sample answer 24",
                "difficulty": "2",
                "category": "3"
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["question"]["id"], 24);
        assert_eq!(body["question"]["difficulty"], 3);
    }

    #[rstest]
    #[actix_web::test]
    async fn malformed_json_is_unprocessable() {
        let mut command = MockQuestionCommand::new();
        command.expect_add_question().never();
        let app = init_app!(MockQuestionQuery::new(), command);

        let req = test::TestRequest::post()
            .uri("/add")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[rstest]
    #[actix_web::test]
    async fn search_without_term_matches_everything() {
        let mut query = MockQuestionQuery::new();
        query
            .expect_search_questions()
            .withf(|request| request.term.is_empty() && request.page.get() == 2)
            .return_once(|_| {
                Ok(QuestionPage {
                    questions: vec![sample_question(11, 2)],
                    total_questions: 11,
                })
            });
        let app = init_app!(query, MockQuestionCommand::new());

        let req = test::TestRequest::post()
            .uri("/questions/search?page=2")
            .set_json(json!({}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["total_questions"], 11);
        assert_eq!(body["questions"].as_array().map(Vec::len), Some(1));
    }

    #[rstest]
    #[actix_web::test]
    async fn unknown_routes_use_envelope() {
        let app = init_app!(MockQuestionQuery::new(), MockQuestionCommand::new());
        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/nowhere").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "Sorry not found");
    }

    #[rstest]
    #[actix_web::test]
    async fn preflight_is_answered() {
        let app = init_app!(MockQuestionQuery::new(), MockQuestionCommand::new());
        let res = test::call_service(
            &app,
            test::TestRequest::default()
                .method(actix_web::http::Method::OPTIONS)
                .uri("/questions")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
    }
}
