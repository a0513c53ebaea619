//! Question bank use cases.
//!
//! `QuestionService` implements the driving ports on top of the question and
//! category stores. Store failures are logged here and reclassified per
//! operation; raw store errors never reach adapters.

use std::fmt::Display;
use std::sync::Arc;

use async_trait::async_trait;
use pagination::{PageNumber, paginate};
use serde_json::json;
use tracing::{debug, error};

use crate::domain::ports::{
    AddQuestionRequest, CategoryQuestionsRequest, CategoryRepository, PlayQuizRequest,
    QuestionCommand, QuestionListing, QuestionPage, QuestionQuery, QuestionRepository,
    SearchQuestionsRequest,
};
use crate::domain::{
    Category, CategorySelector, Error, Question, QuestionId, QuizDraw, QuizSampler,
};

/// How a store failure surfaces for a given operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StoreFailure {
    NotFound,
    Unprocessable,
    Internal,
}

impl StoreFailure {
    fn classify(self, operation: &'static str, cause: &impl Display) -> Error {
        error!(operation, error = %cause, "question store call failed");
        let message = format!("{operation} failed: {cause}");
        match self {
            Self::NotFound => Error::not_found(message),
            Self::Unprocessable => Error::unprocessable(message),
            Self::Internal => Error::internal(message),
        }
    }
}

/// Question service implementing [`QuestionQuery`] and [`QuestionCommand`].
#[derive(Clone)]
pub struct QuestionService<Q, C> {
    questions: Arc<Q>,
    categories: Arc<C>,
}

impl<Q, C> QuestionService<Q, C> {
    /// Create a new service over the given stores.
    pub fn new(questions: Arc<Q>, categories: Arc<C>) -> Self {
        Self {
            questions,
            categories,
        }
    }
}

impl<Q, C> QuestionService<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    async fn load_categories(&self) -> Result<Vec<Category>, Error> {
        self.categories
            .all()
            .await
            .map_err(|err| StoreFailure::Internal.classify("list categories", &err))
    }

    async fn quiz_pool(&self, selector: CategorySelector) -> Result<Vec<Question>, Error> {
        let pool = match selector {
            CategorySelector::All => self.questions.all().await,
            CategorySelector::Only(category) => self.questions.find_by_category(category).await,
        };
        pool.map_err(|err| StoreFailure::NotFound.classify("load quiz pool", &err))
    }

    fn page_of(items: &[Question], page: PageNumber) -> Vec<Question> {
        paginate(items, page).to_vec()
    }
}

#[async_trait]
impl<Q, C> QuestionQuery for QuestionService<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    async fn list_categories(&self) -> Result<Vec<Category>, Error> {
        self.load_categories().await
    }

    async fn list_questions(&self, page: PageNumber) -> Result<QuestionListing, Error> {
        let all = self
            .questions
            .all()
            .await
            .map_err(|err| StoreFailure::Internal.classify("list questions", &err))?;

        let questions = Self::page_of(&all, page);
        if questions.is_empty() {
            return Err(Error::not_found(format!("no questions on page {page}")));
        }

        let categories = self.load_categories().await?;
        Ok(QuestionListing {
            questions,
            total_questions: all.len(),
            categories,
        })
    }

    async fn search_questions(
        &self,
        request: SearchQuestionsRequest,
    ) -> Result<QuestionPage, Error> {
        let SearchQuestionsRequest { term, page } = request;
        let matched = self
            .questions
            .find_by_text_substring(&term)
            .await
            .map_err(|err| StoreFailure::NotFound.classify("search questions", &err))?;

        let questions = Self::page_of(&matched, page);
        if questions.is_empty() {
            return Err(Error::not_found(format!(
                "no questions matching `{term}` on page {page}"
            )));
        }

        Ok(QuestionPage {
            questions,
            total_questions: matched.len(),
        })
    }

    async fn questions_by_category(
        &self,
        request: CategoryQuestionsRequest,
    ) -> Result<QuestionPage, Error> {
        let CategoryQuestionsRequest { category, page } = request;
        let filtered = self
            .questions
            .find_by_category(category)
            .await
            .map_err(|err| StoreFailure::Internal.classify("list category questions", &err))?;

        if filtered.is_empty() {
            return Err(Error::not_found(format!(
                "category {category} has no questions"
            )));
        }

        // Reports the size of the whole bank, not of the category.
        let total_questions = self
            .questions
            .count()
            .await
            .map_err(|err| StoreFailure::Internal.classify("count questions", &err))?;

        Ok(QuestionPage {
            questions: Self::page_of(&filtered, page),
            total_questions,
        })
    }

    async fn play_quiz(&self, request: PlayQuizRequest) -> Result<QuizDraw, Error> {
        let PlayQuizRequest {
            previous_questions,
            quiz_category,
        } = request;

        let raw_category = quiz_category.ok_or_else(|| {
            Error::unprocessable("quiz_category is required").with_details(json!({
                "violations": [{ "field": "quiz_category", "code": "missing_field" }]
            }))
        })?;
        let selector = CategorySelector::from_raw(raw_category).map_err(|err| {
            Error::unprocessable(err.to_string()).with_details(json!({
                "violations": [{ "field": "quiz_category", "code": err.code() }]
            }))
        })?;

        let pool = self.quiz_pool(selector).await?;
        let draw = QuizSampler::sample(&pool, &previous_questions, &mut rand::thread_rng());
        debug!(
            ?selector,
            pool = pool.len(),
            seen = previous_questions.len(),
            exhausted = matches!(draw, QuizDraw::Exhausted),
            "quiz draw"
        );
        Ok(draw)
    }
}

#[async_trait]
impl<Q, C> QuestionCommand for QuestionService<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    async fn add_question(&self, request: AddQuestionRequest) -> Result<Question, Error> {
        let draft = request.validate().map_err(|violations| {
            Error::unprocessable("question payload failed validation")
                .with_details(json!({ "violations": violations }))
        })?;

        self.questions
            .insert(draft)
            .await
            .map_err(|err| StoreFailure::Unprocessable.classify("insert question", &err))
    }

    async fn delete_question(&self, id: QuestionId) -> Result<QuestionId, Error> {
        let existing = self
            .questions
            .get(id)
            .await
            .map_err(|err| StoreFailure::Unprocessable.classify("load question", &err))?;
        if existing.is_none() {
            return Err(Error::not_found(format!("question {id} does not exist")));
        }

        let removed = self
            .questions
            .delete(id)
            .await
            .map_err(|err| StoreFailure::Unprocessable.classify("delete question", &err))?;
        if !removed {
            return Err(Error::not_found(format!("question {id} was already deleted")));
        }
        Ok(id)
    }
}

#[cfg(test)]
#[path = "question_service_tests.rs"]
mod tests;
