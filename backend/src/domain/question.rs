//! Trivia question and category entities.
//!
//! Identifiers are thin integer newtypes matching the store's serial keys.
//! Text and difficulty fields are validated on construction so a
//! [`NewQuestion`] can only exist once every field has been checked.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lowest accepted difficulty rating.
pub const DIFFICULTY_MIN: u8 = 1;
/// Highest accepted difficulty rating.
pub const DIFFICULTY_MAX: u8 = 5;

/// Validation errors returned when constructing question fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionValidationError {
    EmptyQuestion,
    EmptyAnswer,
    DifficultyOutOfRange { value: i64 },
    InvalidCategory { value: i64 },
}

impl QuestionValidationError {
    /// Stable code used in validation details.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyQuestion | Self::EmptyAnswer => "empty_text",
            Self::DifficultyOutOfRange { .. } => "difficulty_out_of_range",
            Self::InvalidCategory { .. } => "invalid_category",
        }
    }
}

impl fmt::Display for QuestionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyQuestion => write!(f, "question text must not be empty"),
            Self::EmptyAnswer => write!(f, "answer text must not be empty"),
            Self::DifficultyOutOfRange { value } => write!(
                f,
                "difficulty must be between {DIFFICULTY_MIN} and {DIFFICULTY_MAX}, got {value}"
            ),
            Self::InvalidCategory { value } => {
                write!(f, "category must be a positive identifier, got {value}")
            }
        }
    }
}

impl std::error::Error for QuestionValidationError {}

/// Store-assigned question identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(i32);

impl QuestionId {
    /// Wrap a raw identifier.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category identifier as stored alongside each question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(i32);

impl CategoryId {
    /// Wrap a raw identifier.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Validate a client-supplied category reference for a new question.
    pub fn for_question(value: i64) -> Result<Self, QuestionValidationError> {
        i32::try_from(value)
            .ok()
            .filter(|id| *id > 0)
            .map(Self)
            .ok_or(QuestionValidationError::InvalidCategory { value })
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Difficulty rating in `DIFFICULTY_MIN..=DIFFICULTY_MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    /// Validate a difficulty rating.
    pub fn new(value: i64) -> Result<Self, QuestionValidationError> {
        u8::try_from(value)
            .ok()
            .filter(|rating| (DIFFICULTY_MIN..=DIFFICULTY_MAX).contains(rating))
            .map(Self)
            .ok_or(QuestionValidationError::DifficultyOutOfRange { value })
    }

    /// Access the raw rating.
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Difficulty {
    type Error = QuestionValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Difficulty> for u8 {
    fn from(value: Difficulty) -> Self {
        value.0
    }
}

/// Non-empty question prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuestionText(String);

impl QuestionText {
    /// Validate and wrap question text.
    pub fn new(text: impl Into<String>) -> Result<Self, QuestionValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionValidationError::EmptyQuestion);
        }
        Ok(Self(text))
    }
}

impl AsRef<str> for QuestionText {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for QuestionText {
    type Error = QuestionValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<QuestionText> for String {
    fn from(value: QuestionText) -> Self {
        value.0
    }
}

/// Non-empty answer text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AnswerText(String);

impl AnswerText {
    /// Validate and wrap answer text.
    pub fn new(text: impl Into<String>) -> Result<Self, QuestionValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionValidationError::EmptyAnswer);
        }
        Ok(Self(text))
    }
}

impl AsRef<str> for AnswerText {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for AnswerText {
    type Error = QuestionValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AnswerText> for String {
    fn from(value: AnswerText) -> Self {
        value.0
    }
}

/// Validated question awaiting insertion; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: QuestionText,
    pub answer: AnswerText,
    pub difficulty: Difficulty,
    pub category: CategoryId,
}

impl NewQuestion {
    /// Attach the identifier assigned by the store.
    pub fn with_id(self, id: QuestionId) -> Question {
        let Self {
            question,
            answer,
            difficulty,
            category,
        } = self;
        Question {
            id,
            question,
            answer,
            difficulty,
            category,
        }
    }
}

/// Stored trivia question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: QuestionText,
    pub answer: AnswerText,
    pub difficulty: Difficulty,
    pub category: CategoryId,
}

/// Question category, owned by the seeding process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// Display name, stored in the `type` column.
    pub kind: String,
}

/// Quiz pool selector; identifier `0` stands for every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySelector {
    All,
    Only(CategoryId),
}

impl CategorySelector {
    /// Raw identifier reserved for "all categories".
    pub const ALL_ID: i64 = 0;

    /// Interpret a raw quiz category identifier.
    ///
    /// Identifiers outside the `i32` range cannot match any stored category,
    /// so they are reported back to the caller as an error.
    pub fn from_raw(value: i64) -> Result<Self, QuestionValidationError> {
        if value == Self::ALL_ID {
            return Ok(Self::All);
        }
        i32::try_from(value)
            .map(|id| Self::Only(CategoryId::new(id)))
            .map_err(|_| QuestionValidationError::InvalidCategory { value })
    }
}

#[cfg(test)]
mod tests {
    //! Validation coverage for question fields.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(5)]
    fn difficulty_accepts_bounded_ratings(#[case] value: i64) {
        let difficulty = Difficulty::new(value).expect("valid difficulty");
        assert_eq!(i64::from(difficulty.get()), value);
    }

    #[rstest]
    #[case(0)]
    #[case(6)]
    #[case(-1)]
    #[case(300)]
    fn difficulty_rejects_out_of_range(#[case] value: i64) {
        assert_eq!(
            Difficulty::new(value),
            Err(QuestionValidationError::DifficultyOutOfRange { value })
        );
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn question_text_rejects_blank(#[case] raw: &str) {
        assert_eq!(
            QuestionText::new(raw),
            Err(QuestionValidationError::EmptyQuestion)
        );
        assert_eq!(AnswerText::new(raw), Err(QuestionValidationError::EmptyAnswer));
    }

    #[rstest]
    fn category_for_question_requires_positive_id() {
        assert_eq!(CategoryId::for_question(4), Ok(CategoryId::new(4)));
        assert!(CategoryId::for_question(0).is_err());
        assert!(CategoryId::for_question(i64::MAX).is_err());
    }

    #[rstest]
    #[case(0, CategorySelector::All)]
    #[case(3, CategorySelector::Only(CategoryId::new(3)))]
    fn selector_treats_zero_as_all(#[case] raw: i64, #[case] expected: CategorySelector) {
        assert_eq!(CategorySelector::from_raw(raw), Ok(expected));
    }

    #[rstest]
    fn with_id_preserves_fields() {
        let draft = NewQuestion {
            question: QuestionText::new("Who painted the Mona Lisa?").expect("text"),
            answer: AnswerText::new("Leonardo da Vinci").expect("answer"),
            difficulty: Difficulty::new(2).expect("difficulty"),
            category: CategoryId::new(2),
        };

        let stored = draft.clone().with_id(QuestionId::new(9));
        assert_eq!(stored.id, QuestionId::new(9));
        assert_eq!(stored.question, draft.question);
        assert_eq!(stored.answer, draft.answer);
        assert_eq!(stored.difficulty, draft.difficulty);
        assert_eq!(stored.category, draft.category);
    }
}
