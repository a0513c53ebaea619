//! Wiring of stores into the question service and HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use backend::domain::QuestionService;
use backend::domain::ports::{CategoryRepository, QuestionRepository};
use backend::inbound::http::state::HttpState;
use backend::outbound::memory::{InMemoryCategoryStore, InMemoryQuestionStore};
use backend::outbound::persistence::{DieselCategoryRepository, DieselQuestionRepository};

use super::ServerConfig;

fn service_state<Q, C>(questions: Q, categories: C) -> HttpState
where
    Q: QuestionRepository + 'static,
    C: CategoryRepository + 'static,
{
    let service = QuestionService::new(Arc::new(questions), Arc::new(categories));
    HttpState::from_service(Arc::new(service))
}

/// In-memory stores seeded with the canonical categories.
pub(crate) fn in_memory_state() -> HttpState {
    let categories = InMemoryCategoryStore::seeded();
    let known = (1..=6).map(backend::domain::CategoryId::new);
    service_state(
        InMemoryQuestionStore::new().with_known_categories(known),
        categories,
    )
}

/// Build handler state from the configured backing store.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!(store = "postgres", "question store configured");
            service_state(
                DieselQuestionRepository::new(pool.clone()),
                DieselCategoryRepository::new(pool.clone()),
            )
        }
        None => {
            info!(store = "memory", "question store configured");
            in_memory_state()
        }
    };
    web::Data::new(state)
}
