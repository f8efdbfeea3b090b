//! Field rules for questions and choices.
//!
//! Lengths are counted in characters (Unicode scalar values), not bytes.
//! Emptiness is checked on the trimmed input, length on the input as given.

use crate::core::error::{Result, ValidationError};

/// Maximum title length, in characters.
pub const MAX_TITLE_LEN: usize = 200;
/// Maximum choice text length, in characters.
pub const MAX_TEXT_LEN: usize = 100;
/// Lowest accepted point value.
pub const MIN_POINTS: u32 = 1;
/// Highest accepted point value.
pub const MAX_POINTS: u32 = 100;
/// Lowest accepted `max_selections`.
pub const MIN_SELECTIONS: usize = 1;

pub const DEFAULT_POINTS: u32 = 1;
pub const DEFAULT_MAX_SELECTIONS: usize = 1;

pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::TitleTooLong { max: MAX_TITLE_LEN });
    }
    Ok(())
}

pub fn validate_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyText);
    }
    if text.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TextTooLong { max: MAX_TEXT_LEN });
    }
    Ok(())
}

pub fn validate_points(points: u32) -> Result<()> {
    if !(MIN_POINTS..=MAX_POINTS).contains(&points) {
        return Err(ValidationError::PointsOutOfRange {
            min: MIN_POINTS,
            max: MAX_POINTS,
        });
    }
    Ok(())
}

pub fn validate_max_selections(max_selections: usize) -> Result<()> {
    if max_selections < MIN_SELECTIONS {
        return Err(ValidationError::InvalidMaxSelections {
            min: MIN_SELECTIONS,
        });
    }
    Ok(())
}
