//! Core concepts shared across the crate.
//!
//! - [`error::ValidationError`] — the single error type for rejected inputs

pub mod error;
