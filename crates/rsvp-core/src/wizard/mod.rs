//! The wizard navigation controller.
//!
//! This module provides the main [`Wizard`] interface: the conditional
//! multi-step form state machine that owns the answer record, the current
//! step position, and the submission handshake.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Navigation    │    │   Validation    │    │    Gateway      │
//! │ (nav: go_next,  │───▶│ (validate: per- │    │ (submit: one    │
//! │  go_back)       │    │  step rules)    │    │  delivery call) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!    Position moves        Forward gating        Terminal handshake
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Wizard`] instances
//! - [`validate`]: Pure per-step validity rules
//! - [`nav`]: Forward/backward navigation and the single branch rule
//! - `submit`: The terminal submission handshake
//!
//! ## State machine
//!
//! States are every position in [`STEP_SEQUENCE`], plus Submitting while
//! the one gateway call is in flight. Terminal outcomes are
//! [`nav::Retreat::Exited`] (backing out of position 0) and
//! [`nav::Advance::Submitted`] (forward from the last position). The wizard
//! has no success state of its own: it yields the frozen record to the
//! caller and is done.
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use rsvp_core::{AnswerField, NullGateway, StepId, WizardBuilder};
//! use rsvp_core::wizard::nav::Advance;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut wizard = WizardBuilder::new()
//!     .with_gateway(Arc::new(NullGateway))
//!     .build()?;
//!
//! assert_eq!(wizard.current_step(), StepId::Intro);
//!
//! // Intro needs no answer, so forward navigation is allowed.
//! assert!(matches!(wizard.go_next().await?, Advance::Moved));
//! assert_eq!(wizard.current_step(), StepId::Travel);
//!
//! // Travel is unanswered: blocked until an option is chosen.
//! assert!(matches!(wizard.go_next().await?, Advance::Blocked));
//! wizard.set_answer(AnswerField::Travel, "Train");
//! assert!(matches!(wizard.go_next().await?, Advance::Moved));
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crate::{
    gateway::SubmissionGateway,
    models::{AnswerField, AnswerRecord, StepId, STEP_SEQUENCE},
};

// Module declarations
pub mod builder;
pub mod nav;
mod submit;
pub mod validate;

#[cfg(test)]
mod tests;

// Re-export the main types
pub use builder::WizardBuilder;
pub use nav::{Advance, Retreat};

/// The multi-step form state machine.
///
/// Owns the single mutable [`AnswerRecord`], the current position into
/// [`STEP_SEQUENCE`], and the `is_submitting` re-entrancy guard. All
/// mutation happens through discrete single-threaded events: answer edits
/// via [`Wizard::set_answer`], position moves via `go_next`/`go_back`.
pub struct Wizard {
    pub(crate) answers: AnswerRecord,
    pub(crate) position: usize,
    pub(crate) is_submitting: bool,
    pub(crate) gateway: Arc<dyn SubmissionGateway>,
}

impl std::fmt::Debug for Wizard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wizard")
            .field("answers", &self.answers)
            .field("position", &self.position)
            .field("is_submitting", &self.is_submitting)
            .finish_non_exhaustive()
    }
}

impl Wizard {
    /// The logical step at the current position.
    pub fn current_step(&self) -> StepId {
        STEP_SEQUENCE[self.position]
    }

    /// The current position in the step sequence table.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The answer record as collected so far.
    pub fn answers(&self) -> &AnswerRecord {
        &self.answers
    }

    /// Whether the single submission call is currently in flight.
    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Records an answer. The record applies per-field input filtering;
    /// navigation state is untouched.
    pub fn set_answer(&mut self, field: AnswerField, value: &str) {
        self.answers.set(field, value);
    }

    /// Whether the current step allows forward navigation.
    ///
    /// The front-end uses this to disable, never hide, the forward control.
    pub fn is_current_step_valid(&self) -> bool {
        validate::is_step_valid(self.current_step(), &self.answers)
    }
}
