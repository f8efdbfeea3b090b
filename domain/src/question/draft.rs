//! Construction parameters for a [`Question`].
//!
//! An embedding application can deserialize a draft from its own config or
//! request format and turn it into a validated Question:
//!
//! ```
//! use quiz_domain::{Question, QuestionDraft};
//!
//! let draft: QuestionDraft = serde_json::from_str(r#"{ "title": "Pick two", "max_selections": 2 }"#).unwrap();
//! let question = Question::try_from(draft).unwrap();
//! assert_eq!(question.points(), 1);
//! assert_eq!(question.max_selections(), 2);
//! ```

use super::entities::Question;
use super::validation::{DEFAULT_MAX_SELECTIONS, DEFAULT_POINTS};
use crate::core::error::{Result, ValidationError};
use serde::{Deserialize, Serialize};

/// Unvalidated Question parameters with defaults for everything but the title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionDraft {
    pub title: String,
    /// Points awarded for a correct answer (1-100)
    pub points: u32,
    /// How many choices may be selected at once (>= 1)
    pub max_selections: usize,
}

impl Default for QuestionDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            points: DEFAULT_POINTS,
            max_selections: DEFAULT_MAX_SELECTIONS,
        }
    }
}

impl QuestionDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_points(mut self, points: u32) -> Self {
        self.points = points;
        self
    }

    pub fn with_max_selections(mut self, max_selections: usize) -> Self {
        self.max_selections = max_selections;
        self
    }

    /// Validate the draft and create the Question
    pub fn build(self) -> Result<Question> {
        Question::with_options(self.title, self.points, self.max_selections)
    }
}

impl TryFrom<QuestionDraft> for Question {
    type Error = ValidationError;

    fn try_from(draft: QuestionDraft) -> Result<Self> {
        draft.build()
    }
}
