//! Core library for the RSVP wizard.
//!
//! This crate provides the step-sequencing and validation engine for a
//! multi-step RSVP questionnaire: the answer record, the fixed step
//! sequence table, per-step validation rules, the single conditional
//! branch rule, the navigation controller, and the best-effort submission
//! gateway.
//!
//! The presentational surface is an external collaborator. It renders the
//! current step, feeds answers in through [`Wizard::set_answer`], and asks
//! the controller to move via [`Wizard::go_next`] / [`Wizard::go_back`].
//! The controller answers with outcome values, so the caller owns every
//! screen transition: [`Advance::Submitted`] carries the final frozen
//! record exactly once, and [`Retreat::Exited`] tells the caller to leave
//! the wizard.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use rsvp_core::{Advance, AnswerField, NullGateway, WizardBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut wizard = WizardBuilder::new()
//!     .with_gateway(Arc::new(NullGateway))
//!     .build()?;
//!
//! // Walk forward, answering as we go.
//! wizard.go_next().await?; // past the intro
//! wizard.set_answer(AnswerField::Travel, "Train");
//! match wizard.go_next().await? {
//!     Advance::Moved => {}
//!     Advance::Blocked => unreachable!("travel was answered"),
//!     Advance::Submitted { .. } => unreachable!("not at the last step"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod gateway;
pub mod models;
pub mod wizard;

// Re-export commonly used types
pub use display::AnswerSummary;
pub use error::{Result, RsvpError};
pub use gateway::{NullGateway, SubmissionGateway, WebhookGateway};
pub use models::{
    position_of, AnswerField, AnswerRecord, StepId, MAX_ATTENDEES, MIN_ATTENDEES, STEP_SEQUENCE,
};
pub use wizard::{validate::is_step_valid, Advance, Retreat, Wizard, WizardBuilder};
