//! Per-step validity rules.

use crate::models::{AnswerRecord, StepId};

/// Minimum number of phone digits for a valid contact step.
pub const MIN_PHONE_DIGITS: usize = 6;

/// Decides whether forward navigation is allowed from a logical step.
///
/// Pure predicate over the answer record, no side effects:
///
/// - Intro: always valid, no answer required.
/// - Single-choice steps: valid iff the backing field is non-empty.
/// - Contact: valid iff the name is non-empty, the phone holds at least
///   [`MIN_PHONE_DIGITS`] digits, and the attendee count is non-empty. The
///   country code is never validated; any value, including the "other"
///   sentinel, is accepted.
pub fn is_step_valid(step: StepId, answers: &AnswerRecord) -> bool {
    match step {
        StepId::Intro => true,
        StepId::NubianNight => !answers.nubian_night.is_empty(),
        StepId::Wedding => !answers.wedding.is_empty(),
        StepId::Travel => !answers.travel.is_empty(),
        StepId::Accommodation => !answers.accommodation.is_empty(),
        StepId::PostWedding => !answers.post_wedding.is_empty(),
        StepId::ReturnPlan => !answers.return_plan.is_empty(),
        StepId::Contact => {
            !answers.name.is_empty()
                && answers.phone.len() >= MIN_PHONE_DIGITS
                && !answers.attendees.is_empty()
        }
    }
}
