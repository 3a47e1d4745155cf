//! Forward and backward navigation, including the single branch rule.
//!
//! The branch rule is deliberately a pure function of the current answer
//! record, re-derived on every call, rather than a navigation history
//! stack: one conditional skip does not justify history-dependent state.
//! If more branches ever appear, generalize to a directed graph over
//! logical steps with edge predicates that stay pure functions of the
//! record.

use crate::{
    error::Result,
    models::{position_of, StepId, STEP_SEQUENCE},
};

use super::Wizard;

/// Answer prefix on the post-wedding step that skips the return-plan step.
const DECLINE_PREFIX: &str = "No";

/// Outcome of a forward navigation request.
#[derive(Debug)]
pub enum Advance {
    /// The position moved to a later step.
    Moved,
    /// Forward navigation refused: the current step is invalid, or a
    /// submission is already in flight. The front-end keeps the control
    /// disabled, nothing else happens.
    Blocked,
    /// The terminal step confirmed: the frozen record was handed to the
    /// gateway exactly once. Returned regardless of delivery outcome.
    Submitted {
        /// The final, frozen answer record.
        answers: crate::models::AnswerRecord,
        /// Whether the gateway reported transport success.
        delivered: bool,
    },
}

/// Outcome of a backward navigation request.
#[derive(Debug, PartialEq, Eq)]
pub enum Retreat {
    /// The position moved to an earlier step.
    Moved,
    /// Back was pressed at the first position: the caller leaves the
    /// wizard and decides what to show instead.
    Exited,
}

impl Wizard {
    /// Whether the post-wedding answer declines the trip, which skips the
    /// return-plan step in both directions.
    fn declines_post_wedding(&self) -> bool {
        self.answers.post_wedding.starts_with(DECLINE_PREFIX)
    }

    /// Advances to the next step.
    ///
    /// Refused while a submission is in flight or while the current step is
    /// invalid. At the post-wedding step with a declining answer, jumps
    /// straight to the contact step. At the last position, runs the
    /// submission handshake instead of moving.
    ///
    /// # Errors
    ///
    /// Returns `RsvpError::Configuration` only if the runtime fails to join
    /// the delivery task; gateway failures are swallowed by design and
    /// reported through [`Advance::Submitted`].
    pub async fn go_next(&mut self) -> Result<Advance> {
        if self.is_submitting || !self.is_current_step_valid() {
            return Ok(Advance::Blocked);
        }

        if self.current_step() == StepId::PostWedding && self.declines_post_wedding() {
            self.position = position_of(StepId::Contact);
            return Ok(Advance::Moved);
        }

        if self.position + 1 == STEP_SEQUENCE.len() {
            return self.submit().await;
        }

        self.position += 1;
        Ok(Advance::Moved)
    }

    /// Retreats to the previous step.
    ///
    /// From the contact step with a declining post-wedding answer, returns
    /// to the post-wedding step; the skipped return-plan step was never
    /// visited and is not revisited. At the first position, signals the
    /// caller to exit the wizard. Never mutates the answer record.
    pub fn go_back(&mut self) -> Retreat {
        if self.current_step() == StepId::Contact && self.declines_post_wedding() {
            self.position = position_of(StepId::PostWedding);
            return Retreat::Moved;
        }

        if self.position == 0 {
            return Retreat::Exited;
        }

        self.position -= 1;
        Retreat::Moved
    }
}
