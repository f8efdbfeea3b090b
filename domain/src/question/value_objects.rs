//! Identifier value objects for the question model.
//!
//! - [`QuestionId`] - Unique identifier for a question
//! - [`ChoiceId`] - Unique identifier for a choice within a question
//!
//! Both are generated from a random UUID v4, so no counter or registry is
//! shared between instances.

use serde::{Deserialize, Serialize};

/// Unique identifier for a question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(String);

impl QuestionId {
    /// Creates a QuestionId from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a new random QuestionId.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<T: Into<String>> From<T> for QuestionId {
    fn from(s: T) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a choice.
///
/// Callers may build a ChoiceId from any string (e.g. a submitted form
/// value); lookups with an id that matches no choice are rejected by the
/// owning [`Question`](super::entities::Question).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChoiceId(String);

impl ChoiceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a new random ChoiceId.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<T: Into<String>> From<T> for ChoiceId {
    fn from(s: T) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
