//! Logical step identifiers and the fixed traversal table.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of the logical wizard steps.
///
/// A logical step is a stable identifier for a question topic, decoupled
/// from its position in the displayed sequence. Product requirements have
/// reordered the sequence without renaming steps, so everything keyed by
/// meaning (validation, branching, screen copy) uses `StepId` while back /
/// next arithmetic uses positions in [`STEP_SEQUENCE`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    /// Welcome text, no answer required
    Intro,

    /// Pre-wedding party attendance
    NubianNight,

    /// Ceremony attendance
    Wedding,

    /// Travel mode
    Travel,

    /// Shared accommodation
    Accommodation,

    /// Post-wedding trip attendance
    PostWedding,

    /// Return plan, skipped when the post-wedding trip is declined
    ReturnPlan,

    /// Contact details, always the final step
    Contact,
}

/// The fixed, ordered traversal table. This is the only legal step order.
///
/// Intro is a pseudo-step at position 0; Contact is always last. The
/// question steps sit in display order, which deliberately differs from
/// declaration order above.
pub const STEP_SEQUENCE: [StepId; 8] = [
    StepId::Intro,
    StepId::Travel,
    StepId::Accommodation,
    StepId::NubianNight,
    StepId::Wedding,
    StepId::PostWedding,
    StepId::ReturnPlan,
    StepId::Contact,
];

/// Returns the position of a logical step in [`STEP_SEQUENCE`].
pub fn position_of(step: StepId) -> usize {
    // The table contains every variant exactly once, so the lookup cannot
    // miss.
    STEP_SEQUENCE
        .iter()
        .position(|s| *s == step)
        .unwrap_or_default()
}

impl FromStr for StepId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "intro" => Ok(StepId::Intro),
            "nubian_night" | "nubiannight" => Ok(StepId::NubianNight),
            "wedding" => Ok(StepId::Wedding),
            "travel" => Ok(StepId::Travel),
            "accommodation" => Ok(StepId::Accommodation),
            "post_wedding" | "postwedding" => Ok(StepId::PostWedding),
            "return_plan" | "returnplan" => Ok(StepId::ReturnPlan),
            "contact" => Ok(StepId::Contact),
            _ => Err(format!("Invalid step id: {s}")),
        }
    }
}

impl StepId {
    /// Convert to the stable string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepId::Intro => "intro",
            StepId::NubianNight => "nubian_night",
            StepId::Wedding => "wedding",
            StepId::Travel => "travel",
            StepId::Accommodation => "accommodation",
            StepId::PostWedding => "post_wedding",
            StepId::ReturnPlan => "return_plan",
            StepId::Contact => "contact",
        }
    }
}
