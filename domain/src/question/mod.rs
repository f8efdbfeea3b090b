//! Question domain - quiz questions and their answer choices.
//!
//! - [`entities`] - [`Question`](entities::Question) and [`Choice`](entities::Choice)
//! - [`value_objects`] - [`QuestionId`](value_objects::QuestionId) and [`ChoiceId`](value_objects::ChoiceId)
//! - [`draft`] - deserializable construction parameters
//! - [`validation`] - field limits and checks

pub mod draft;
pub mod entities;
pub mod validation;
pub mod value_objects;
