//! Data models for the RSVP wizard.
//!
//! This module contains the core domain models: the [`AnswerRecord`] holding
//! every questionnaire response, the [`AnswerField`] selector used by the
//! record's single mutation entry point, and the [`StepId`] identifiers with
//! the fixed [`STEP_SEQUENCE`] traversal table.
//!
//! Display implementations for these models live in [`crate::display`] to
//! keep presentation concerns out of the data structures.

pub mod answers;
pub mod step;


pub use answers::{AnswerField, AnswerRecord, MAX_ATTENDEES, MIN_ATTENDEES};
pub use step::{position_of, StepId, STEP_SEQUENCE};
