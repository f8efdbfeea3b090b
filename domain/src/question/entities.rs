//! Question and Choice entities.
//!
//! A [`Question`] exclusively owns its [`Choice`]s. Choices are only ever
//! created, edited and removed through the Question, and callers only get
//! borrows of them, so no Choice outlives its removal.

use super::draft::QuestionDraft;
use super::validation::{
    validate_max_selections, validate_points, validate_text, validate_title,
};
use super::value_objects::{ChoiceId, QuestionId};
use crate::core::error::{Result, ValidationError};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// An answer option belonging to a [`Question`] (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    id: ChoiceId,
    text: String,
    is_correct: bool,
}

impl Choice {
    pub fn id(&self) -> &ChoiceId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}

/// A quiz question with an ordered list of answer choices (Entity)
///
/// # Example
///
/// ```
/// use quiz_domain::Question;
///
/// let mut question = Question::with_options("Which are primes?", 5, 2).unwrap();
/// let four = question.add_choice("4", false).unwrap().id().clone();
/// let five = question.add_choice("5", true).unwrap().id().clone();
/// let seven = question.add_choice("7", true).unwrap().id().clone();
///
/// assert!(question.correct_selected_choices(&[seven.clone(), five.clone()]).unwrap());
/// assert!(!question.correct_selected_choices(&[four, five.clone()]).unwrap());
/// assert_eq!(question.score(&[five, seven]).unwrap(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: QuestionId,
    title: String,
    points: u32,
    max_selections: usize,
    choices: Vec<Choice>,
}

impl Question {
    /// Create a question worth 1 point that accepts a single selection
    pub fn new(title: impl Into<String>) -> Result<Self> {
        QuestionDraft::new(title).build()
    }

    /// Create a question with explicit points and selection limit
    pub fn with_options(
        title: impl Into<String>,
        points: u32,
        max_selections: usize,
    ) -> Result<Self> {
        let title = title.into();
        validate_title(&title)?;
        validate_points(points)?;
        validate_max_selections(max_selections)?;

        let question = Self {
            id: QuestionId::generate(),
            title,
            points,
            max_selections,
            choices: Vec::new(),
        };
        debug!(
            "Question {} created (points: {}, max_selections: {})",
            question.id, points, max_selections
        );
        Ok(question)
    }

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn max_selections(&self) -> usize {
        self.max_selections
    }

    /// Choices in insertion order
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Look up a choice by id
    pub fn choice(&self, id: &ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|c| &c.id == id)
    }

    /// Append a new choice and return it.
    pub fn add_choice(&mut self, text: impl Into<String>, is_correct: bool) -> Result<&Choice> {
        let text = text.into();
        if let Err(e) = validate_text(&text) {
            debug!("Rejected choice for question {}: {}", self.id, e);
            return Err(e);
        }

        let mut id = ChoiceId::generate();
        while self.choice(&id).is_some() {
            id = ChoiceId::generate();
        }

        debug!("Adding choice {} to question {}", id, self.id);
        let index = self.choices.len();
        self.choices.push(Choice {
            id,
            text,
            is_correct,
        });
        Ok(&self.choices[index])
    }

    /// Remove the choice with the given id, keeping the order of the rest.
    pub fn remove_choice_by_id(&mut self, id: &ChoiceId) -> Result<Choice> {
        let Some(index) = self.choices.iter().position(|c| &c.id == id) else {
            debug!("Cannot remove unknown choice {} from question {}", id, self.id);
            return Err(ValidationError::InvalidChoiceId(id.clone()));
        };
        debug!("Removing choice {} from question {}", id, self.id);
        Ok(self.choices.remove(index))
    }

    pub fn remove_all_choices(&mut self) {
        debug!(
            "Removing all {} choices from question {}",
            self.choices.len(),
            self.id
        );
        self.choices.clear();
    }

    /// Replace the text of an existing choice.
    pub fn set_choice_text(&mut self, id: &ChoiceId, text: impl Into<String>) -> Result<()> {
        let text = text.into();
        self.ensure_known([id])?;
        validate_text(&text)?;

        if let Some(choice) = self.choices.iter_mut().find(|c| &c.id == id) {
            choice.text = text;
            debug!("Updated text of choice {} in question {}", id, self.id);
        }
        Ok(())
    }

    /// Mark exactly the given choices as correct and every other choice as
    /// incorrect.
    ///
    /// If any id is unknown, no flag is changed.
    pub fn set_correct_choices(&mut self, ids: &[ChoiceId]) -> Result<()> {
        self.ensure_known(ids)?;

        let correct: HashSet<&ChoiceId> = ids.iter().collect();
        for choice in &mut self.choices {
            choice.is_correct = correct.contains(&choice.id);
        }
        debug!(
            "Question {} now has {} correct choice(s)",
            self.id,
            correct.len()
        );
        Ok(())
    }

    /// Check a selection against the correct choices.
    ///
    /// Returns `true` only when the selected ids are exactly the ids of the
    /// correct choices, in any order. Duplicate ids count as one selection.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::InvalidChoiceId`] if any id matches no choice
    /// - [`ValidationError::TooManySelections`] if more than `max_selections`
    ///   distinct ids are selected
    pub fn correct_selected_choices(&self, selected: &[ChoiceId]) -> Result<bool> {
        self.ensure_known(selected)?;

        let selected: HashSet<&ChoiceId> = selected.iter().collect();
        if selected.len() > self.max_selections {
            debug!(
                "Question {}: {} choices selected, at most {} allowed",
                self.id,
                selected.len(),
                self.max_selections
            );
            return Err(ValidationError::TooManySelections {
                max: self.max_selections,
            });
        }

        Ok(selected == self.correct_ids())
    }

    /// Points earned by a selection: all of them on an exact match, none
    /// otherwise.
    pub fn score(&self, selected: &[ChoiceId]) -> Result<u32> {
        if self.correct_selected_choices(selected)? {
            Ok(self.points)
        } else {
            Ok(0)
        }
    }

    /// Ids of all choices currently marked correct
    pub fn find_correct_choice_ids(&self) -> HashSet<ChoiceId> {
        self.correct_ids().into_iter().cloned().collect()
    }

    /// Ids of all choices, in insertion order
    pub fn list_choice_ids(&self) -> Vec<ChoiceId> {
        self.choices.iter().map(|c| c.id.clone()).collect()
    }

    fn correct_ids(&self) -> HashSet<&ChoiceId> {
        self.choices
            .iter()
            .filter(|c| c.is_correct)
            .map(|c| &c.id)
            .collect()
    }

    fn ensure_known<'a>(&self, ids: impl IntoIterator<Item = &'a ChoiceId>) -> Result<()> {
        for id in ids {
            if self.choice(id).is_none() {
                debug!("Unknown choice {} for question {}", id, self.id);
                return Err(ValidationError::InvalidChoiceId(id.clone()));
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}
