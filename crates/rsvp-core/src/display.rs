//! Display wrapper types for formatting the answer record.
//!
//! Presentation logic is kept out of the domain models: the record and the
//! step identifiers stay plain data, and wrapper types here format the same
//! data for different contexts (the pre-submission recap, the completion
//! echo, step headings in the front-end).

use std::fmt;

use crate::models::{AnswerRecord, StepId};

/// Placeholder for fields the guest left empty.
const EMPTY_FIELD: &str = "-";

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = match self {
            StepId::Intro => "Welcome",
            StepId::NubianNight => "Nubian Night",
            StepId::Wedding => "The Ceremony",
            StepId::Travel => "Getting There",
            StepId::Accommodation => "Staying Together",
            StepId::PostWedding => "Post Wedding",
            StepId::ReturnPlan => "The Journey Home",
            StepId::Contact => "Contact Details",
        };
        write!(f, "{title}")
    }
}

/// Markdown recap of a collected answer record.
///
/// Shown before final confirmation and echoed after completion.
pub struct AnswerSummary<'a>(pub &'a AnswerRecord);

impl AnswerSummary<'_> {
    fn field(value: &str) -> &str {
        if value.is_empty() { EMPTY_FIELD } else { value }
    }
}

impl fmt::Display for AnswerSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let answers = self.0;
        writeln!(f, "# Your answers")?;
        writeln!(f)?;
        writeln!(f, "- **Travel**: {}", Self::field(&answers.travel))?;
        writeln!(
            f,
            "- **Accommodation**: {}",
            Self::field(&answers.accommodation)
        )?;
        writeln!(
            f,
            "- **Nubian Night**: {}",
            Self::field(&answers.nubian_night)
        )?;
        writeln!(f, "- **The Ceremony**: {}", Self::field(&answers.wedding))?;
        writeln!(
            f,
            "- **Post Wedding**: {}",
            Self::field(&answers.post_wedding)
        )?;
        writeln!(
            f,
            "- **Return Plan**: {}",
            Self::field(&answers.return_plan)
        )?;
        writeln!(f, "- **Name**: {}", Self::field(&answers.name))?;
        writeln!(
            f,
            "- **Phone**: {} {}",
            Self::field(&answers.country_code),
            Self::field(&answers.phone)
        )?;
        writeln!(f, "- **Attendees**: {}", Self::field(&answers.attendees))?;
        writeln!(f, "- **Notes**: {}", Self::field(&answers.notes))
    }
}
