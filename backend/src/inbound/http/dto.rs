//! Request and response bodies for the question endpoints.
//!
//! Field names follow the browser client: `searchTerm` is camelCase while the
//! quiz body uses snake_case. Numeric identifiers may arrive as JSON numbers
//! or numeric strings.

use std::collections::HashSet;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

use crate::domain::ports::{AddQuestionRequest, PlayQuizRequest};
use crate::domain::{Category, Question, QuestionId, QuizDraw};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawInteger {
    Number(i64),
    Text(String),
}

/// Integer accepted as a JSON number or a numeric string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(try_from = "RawInteger")]
#[schema(value_type = i64)]
pub struct LenientInt(pub i64);

impl TryFrom<RawInteger> for LenientInt {
    type Error = String;

    fn try_from(raw: RawInteger) -> Result<Self, Self::Error> {
        match raw {
            RawInteger::Number(value) => Ok(Self(value)),
            RawInteger::Text(text) => text
                .trim()
                .parse()
                .map(Self)
                .map_err(|_| format!("`{text}` is not an integer")),
        }
    }
}

/// Body of `POST /add`. Absent and `null` fields are reported as missing.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct AddQuestionBody {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub difficulty: Option<LenientInt>,
    #[serde(default)]
    pub category: Option<LenientInt>,
}

impl From<AddQuestionBody> for AddQuestionRequest {
    fn from(body: AddQuestionBody) -> Self {
        Self {
            question: body.question,
            answer: body.answer,
            difficulty: body.difficulty.map(|value| value.0),
            category: body.category.map(|value| value.0),
        }
    }
}

/// Body of `POST /questions/search`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchBody {
    /// Case-insensitive substring; absent matches every question.
    #[serde(default)]
    pub search_term: Option<String>,
}

/// Category selector sent by the quiz client.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuizCategoryBody {
    /// Category identifier; `0` plays across every category.
    #[serde(default)]
    pub id: Option<LenientInt>,
    /// Display name echoed by the client; ignored.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Body of `POST /quizzes`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct QuizBody {
    #[serde(default)]
    pub previous_questions: Vec<LenientInt>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategoryBody>,
}

impl From<QuizBody> for PlayQuizRequest {
    fn from(body: QuizBody) -> Self {
        // Identifiers outside the i32 range cannot belong to a stored question.
        let previous_questions: HashSet<QuestionId> = body
            .previous_questions
            .into_iter()
            .filter_map(|value| i32::try_from(value.0).ok())
            .map(QuestionId::new)
            .collect();
        Self {
            previous_questions,
            quiz_category: body
                .quiz_category
                .and_then(|category| category.id)
                .map(|id| id.0),
        }
    }
}

/// Question as rendered to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct QuestionView {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub difficulty: u8,
    pub category: i32,
}

impl From<&Question> for QuestionView {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id.get(),
            question: question.question.as_ref().to_owned(),
            answer: question.answer.as_ref().to_owned(),
            difficulty: question.difficulty.get(),
            category: question.category.get(),
        }
    }
}

fn views(questions: &[Question]) -> Vec<QuestionView> {
    questions.iter().map(QuestionView::from).collect()
}

/// Categories rendered as a JSON object keyed by stringified identifier,
/// emitted in identifier order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryMap(Vec<(i32, String)>);

impl From<&[Category]> for CategoryMap {
    fn from(categories: &[Category]) -> Self {
        let mut entries: Vec<(i32, String)> = categories
            .iter()
            .map(|category| (category.id.get(), category.kind.clone()))
            .collect();
        entries.sort_by_key(|(id, _)| *id);
        Self(entries)
    }
}

impl Serialize for CategoryMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (id, kind) in &self.0 {
            map.serialize_entry(&id.to_string(), kind)?;
        }
        map.end()
    }
}

/// Response of `GET /categories`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoriesResponse {
    pub success: bool,
    #[schema(value_type = std::collections::HashMap<String, String>)]
    pub categories: CategoryMap,
}

impl CategoriesResponse {
    pub fn new(categories: &[Category]) -> Self {
        Self {
            success: true,
            categories: CategoryMap::from(categories),
        }
    }
}

/// Response of `GET /questions`.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<QuestionView>,
    #[schema(value_type = std::collections::HashMap<String, String>)]
    pub categories: CategoryMap,
    /// Always `null`; kept for client compatibility.
    pub current_category: Option<i32>,
    pub total_questions: usize,
}

impl QuestionListResponse {
    pub fn new(questions: &[Question], categories: &[Category], total_questions: usize) -> Self {
        Self {
            success: true,
            questions: views(questions),
            categories: CategoryMap::from(categories),
            current_category: None,
            total_questions,
        }
    }
}

/// Response of search and by-category listings.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<QuestionView>,
    pub total_questions: usize,
}

impl QuestionPageResponse {
    pub fn new(questions: &[Question], total_questions: usize) -> Self {
        Self {
            success: true,
            questions: views(questions),
            total_questions,
        }
    }
}

/// Response of `DELETE /questions/{id}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i32,
}

/// Response of `POST /add`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    pub success: bool,
    pub question: QuestionView,
}

/// Drawn question, or `false` once the pool is exhausted.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum QuizQuestion {
    Drawn(QuestionView),
    Exhausted(bool),
}

/// Response of `POST /quizzes`.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuizResponse {
    pub success: bool,
    pub question: QuizQuestion,
}

impl From<QuizDraw> for QuizResponse {
    fn from(draw: QuizDraw) -> Self {
        let question = match draw {
            QuizDraw::Question(question) => QuizQuestion::Drawn(QuestionView::from(&question)),
            QuizDraw::Exhausted => QuizQuestion::Exhausted(false),
        };
        Self {
            success: true,
            question,
        }
    }
}
