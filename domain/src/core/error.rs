//! Domain error types

use crate::question::value_objects::ChoiceId;
use thiserror::Error;

/// Raised when an input violates a Question or Choice invariant.
///
/// A rejected operation never leaves partial state behind: every mutating
/// method validates its whole input before touching the Question.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title cannot be longer than {max} characters")]
    TitleTooLong { max: usize },

    #[error("Points must be between {min} and {max}")]
    PointsOutOfRange { min: u32, max: u32 },

    #[error("Max selections must be at least {min}")]
    InvalidMaxSelections { min: usize },

    #[error("Text cannot be empty")]
    EmptyText,

    #[error("Text cannot be longer than {max} characters")]
    TextTooLong { max: usize },

    #[error("Invalid choice ID")]
    InvalidChoiceId(ChoiceId),

    #[error("Cannot select more than {max} choices")]
    TooManySelections { max: usize },
}

impl ValidationError {
    /// Check if this error was caused by an id that matches no choice
    pub fn is_invalid_choice_id(&self) -> bool {
        matches!(self, ValidationError::InvalidChoiceId(_))
    }

    /// Check if this error was caused by exceeding `max_selections`
    pub fn is_too_many_selections(&self) -> bool {
        matches!(self, ValidationError::TooManySelections { .. })
    }
}

/// Result type for Question and Choice operations.
pub type Result<T> = std::result::Result<T, ValidationError>;
