//! Domain model for quiz questions
//!
//! This crate contains the Question entity, its answer Choices and the rules
//! that guard them. It performs no I/O and has no dependencies on persistence
//! or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Question**: a titled prompt worth 1-100 points, owning an ordered list
//!   of Choices and a cap on how many may be selected at once
//! - **Choice**: an answer option with text and a correctness flag, only
//!   reachable through its Question
//! - **Selection**: a set of Choice ids checked against the correct ones by
//!   exact set equality
//!
//! Every rejected input surfaces as a [`ValidationError`] and leaves the
//! Question untouched.

pub mod core;
pub mod question;

// Re-export commonly used types
pub use crate::core::error::{Result, ValidationError};
pub use question::{
    draft::QuestionDraft,
    entities::{Choice, Question},
    value_objects::{ChoiceId, QuestionId},
};
