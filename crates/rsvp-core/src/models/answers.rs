//! Answer record definition and its single mutation entry point.

use serde::{Deserialize, Serialize};

use super::StepId;

/// Lower bound for the attendee count field.
pub const MIN_ATTENDEES: i64 = 1;

/// Upper bound for the attendee count field.
pub const MAX_ATTENDEES: i64 = 10;

/// The single mutable record of all questionnaire responses.
///
/// Every field is string-valued (the attendee count is numeric-as-string).
/// Fields start empty and are only ever widened via [`AnswerRecord::set`];
/// nothing is validated here beyond the two input filters on `phone` and
/// `attendees`. Step validity is checked separately by the navigation
/// controller.
///
/// Wire names are camelCase to match the webhook payload the backend
/// expects (`nubianNight`, `postWedding`, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct AnswerRecord {
    /// Pre-wedding party attendance choice
    pub nubian_night: String,

    /// Ceremony attendance choice
    pub wedding: String,

    /// Travel mode choice
    pub travel: String,

    /// Shared accommodation choice
    pub accommodation: String,

    /// Post-wedding trip attendance choice
    pub post_wedding: String,

    /// Return plan choice; stays empty when the post-wedding trip is declined
    pub return_plan: String,

    /// Contact name
    pub name: String,

    /// Phone country code; any value is accepted, including the "other" sentinel
    pub country_code: String,

    /// Phone number, decimal digits only
    pub phone: String,

    /// Total attendee count, an integer string in [1,10] or empty
    pub attendees: String,

    /// Free-text notes
    pub notes: String,
}

/// Selector for the fields of an [`AnswerRecord`].
///
/// Used by the record's single setter so that per-field input filtering has
/// exactly one home.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerField {
    NubianNight,
    Wedding,
    Travel,
    Accommodation,
    PostWedding,
    ReturnPlan,
    Name,
    CountryCode,
    Phone,
    Attendees,
    Notes,
}

impl AnswerRecord {
    /// Sets a field from raw user input, applying the field's input filter.
    ///
    /// - `Phone`: non-digit characters are dropped at the point of entry.
    /// - `Attendees`: empty input clears the field; non-numeric input leaves
    ///   the field unchanged; numeric input is clamped to [1,10].
    /// - Every other field stores the value verbatim.
    pub fn set(&mut self, field: AnswerField, value: &str) {
        match field {
            AnswerField::NubianNight => self.nubian_night = value.to_string(),
            AnswerField::Wedding => self.wedding = value.to_string(),
            AnswerField::Travel => self.travel = value.to_string(),
            AnswerField::Accommodation => self.accommodation = value.to_string(),
            AnswerField::PostWedding => self.post_wedding = value.to_string(),
            AnswerField::ReturnPlan => self.return_plan = value.to_string(),
            AnswerField::Name => self.name = value.to_string(),
            AnswerField::CountryCode => self.country_code = value.to_string(),
            AnswerField::Notes => self.notes = value.to_string(),
            AnswerField::Phone => {
                self.phone = value.chars().filter(char::is_ascii_digit).collect();
            }
            AnswerField::Attendees => {
                if value.is_empty() {
                    self.attendees.clear();
                } else if let Ok(n) = value.trim().parse::<i64>() {
                    let clamped = n.clamp(MIN_ATTENDEES, MAX_ATTENDEES);
                    self.attendees = clamped.to_string();
                }
            }
        }
    }

    /// Returns the current value of a field.
    pub fn get(&self, field: AnswerField) -> &str {
        match field {
            AnswerField::NubianNight => &self.nubian_night,
            AnswerField::Wedding => &self.wedding,
            AnswerField::Travel => &self.travel,
            AnswerField::Accommodation => &self.accommodation,
            AnswerField::PostWedding => &self.post_wedding,
            AnswerField::ReturnPlan => &self.return_plan,
            AnswerField::Name => &self.name,
            AnswerField::CountryCode => &self.country_code,
            AnswerField::Phone => &self.phone,
            AnswerField::Attendees => &self.attendees,
            AnswerField::Notes => &self.notes,
        }
    }

    /// Maps a single-choice step to the field holding its answer.
    ///
    /// Returns `None` for the Intro and Contact steps, which have no single
    /// backing field.
    pub fn choice_field(step: StepId) -> Option<AnswerField> {
        match step {
            StepId::NubianNight => Some(AnswerField::NubianNight),
            StepId::Wedding => Some(AnswerField::Wedding),
            StepId::Travel => Some(AnswerField::Travel),
            StepId::Accommodation => Some(AnswerField::Accommodation),
            StepId::PostWedding => Some(AnswerField::PostWedding),
            StepId::ReturnPlan => Some(AnswerField::ReturnPlan),
            StepId::Intro | StepId::Contact => None,
        }
    }
}
