//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly.

diesel::table! {
    /// Question categories, seeded by migrations and never written at runtime.
    categories (id) {
        id -> Int4,
        /// Display name; the column is called `type`.
        #[sql_name = "type"]
        kind -> Text,
    }
}

diesel::table! {
    /// Trivia questions.
    questions (id) {
        id -> Int4,
        question -> Text,
        answer -> Text,
        /// Rating in `1..=5`, enforced by a check constraint.
        difficulty -> Int4,
        /// Foreign key to `categories.id`.
        category -> Int4,
    }
}

diesel::joinable!(questions -> categories (category));
diesel::allow_tables_to_appear_in_same_query!(categories, questions);
