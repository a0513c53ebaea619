//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use crate::domain::ports::{MockQuestionCommand, MockQuestionQuery};
use crate::domain::{AnswerText, CategoryId, Difficulty, Question, QuestionId, QuestionText};
use crate::inbound::http::state::HttpState;

/// Sample question with predictable text.
pub fn sample_question(id: i32, category: i32) -> Question {
    Question {
        id: QuestionId::new(id),
        question: QuestionText::new(format!("Sample question {id}")).expect("question text"),
        answer: AnswerText::new(format!("Sample answer {id}")).expect("answer text"),
        difficulty: Difficulty::new(3).expect("difficulty"),
        category: CategoryId::new(category),
    }
}

/// State over mocked ports.
pub fn mocked_state(query: MockQuestionQuery, command: MockQuestionCommand) -> HttpState {
    HttpState::new(Arc::new(query), Arc::new(command))
}

/// Initialise the routed service over mocked ports.
macro_rules! init_app {
    ($query:expr, $command:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new(
                    $crate::inbound::http::test_utils::mocked_state($query, $command),
                ))
                .configure($crate::inbound::http::configure)
                .default_service(actix_web::web::to($crate::inbound::http::not_found)),
        )
        .await
    };
}

pub(crate) use init_app;
