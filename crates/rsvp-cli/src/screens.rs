//! Per-step screen copy and prompt content.
//!
//! Everything the guest reads lives here, keyed by the logical step id so
//! the copy follows a step wherever the sequence table puts it.

use rsvp_core::StepId;

/// A selectable answer: the label the guest sees and the value stored in
/// the answer record. They differ on purpose ("Yes, I’m dancing already"
/// stores "Yes").
pub struct ChoiceOption {
    pub label: &'static str,
    pub value: &'static str,
}

/// Static screen content for one wizard step.
pub struct StepScreen {
    pub date: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub question: &'static str,
    pub options: &'static [ChoiceOption],
}

impl StepScreen {
    /// Assembles the header shown above the prompt as markdown.
    pub fn markdown(&self, position: usize, total: usize) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n", self.title));
        if !self.date.is_empty() {
            out.push_str(&format!("*{}*\n", self.date));
        }
        if !self.subtitle.is_empty() {
            out.push_str(&format!("**{}**\n", self.subtitle));
        }
        out.push('\n');
        out.push_str(&format!("{}\n", self.description));
        if position > 0 {
            out.push_str(&format!("\nStep {position} of {total}\n"));
        }
        out
    }
}

/// Screen content for a logical step.
pub fn screen(step: StepId) -> StepScreen {
    match step {
        StepId::Intro => StepScreen {
            date: "",
            title: "Welcome",
            subtitle: "",
            description: "You’ve seen a glimpse of what’s to come, now let’s shape \
                your journey.\n\nWe’re planning three unforgettable days by the Nile:\n\n\
                - A **Nubian night** on March 20, where music, color, and joy fill the air.\n\
                - A **classic wedding** on March 21, elegant and full of meaning.\n\
                - And on March 22, a **relaxed farewell** to unwind and explore Aswan \
                a little more.\n\n\
                *To help us plan your travel, stay, and experience, just answer a few \
                quick questions below.*",
            question: "Ready?",
            options: &[],
        },
        StepId::Travel => StepScreen {
            date: "Getting There",
            title: "Travel",
            subtitle: "",
            description: "We’re organizing group travel, so you don’t miss the laughter \
                on the way or the stories en route.",
            question: "How would you like to travel to Aswan?",
            options: &[
                ChoiceOption {
                    label: "By plane – quick and easy",
                    value: "Plane",
                },
                ChoiceOption {
                    label: "By train – scenic and relaxed",
                    value: "Train",
                },
            ],
        },
        StepId::Accommodation => StepScreen {
            date: "Staying Together",
            title: "Accommodation",
            subtitle: "",
            description: "One roof. One vibe. One long sleepover.",
            question: "We’re booking a hotel for everyone to stay together. Want to be \
                part of it?",
            options: &[
                ChoiceOption {
                    label: "Yes, book me in",
                    value: "Yes",
                },
                ChoiceOption {
                    label: "No thanks, I’ll arrange my own stay",
                    value: "No",
                },
            ],
        },
        StepId::NubianNight => StepScreen {
            date: "March 20",
            title: "Nubian Night",
            subtitle: "The Day Before",
            description: "Drums, colors, dancing under the stars. A barefoot balady \
                celebration.",
            question: "Will you join the pre-wedding party, 7ena Balady?",
            options: &[
                ChoiceOption {
                    label: "Yes, I’m dancing already",
                    value: "Yes",
                },
                ChoiceOption {
                    label: "Not sure yet",
                    value: "Not sure",
                },
            ],
        },
        StepId::Wedding => StepScreen {
            date: "March 21",
            title: "The Ceremony",
            subtitle: "The Big Day",
            description: "The Nile. The vows. The people. The moment.",
            question: "Will you attend the wedding in Aswan?",
            options: &[
                ChoiceOption {
                    label: "Absolutely – I’ll be there",
                    value: "Yes",
                },
                ChoiceOption {
                    label: "Of course – wouldn’t miss it",
                    value: "Of course",
                },
            ],
        },
        StepId::PostWedding => StepScreen {
            date: "March 22",
            title: "Post Wedding",
            subtitle: "The Day After",
            description: "Temples, boats, and sunsets after the “I do.”",
            question: "Will you join the post-wedding Aswan trip?",
            options: &[
                ChoiceOption {
                    label: "Yes, I’m in",
                    value: "Yes, I’m in",
                },
                ChoiceOption {
                    label: "No – have to head back",
                    value: "No — have to head back",
                },
            ],
        },
        StepId::ReturnPlan => StepScreen {
            date: "The Journey Home",
            title: "Return Plan",
            subtitle: "",
            description: "If you’re joining the post-wedding trip:",
            question: "How would you like to return?",
            options: &[
                ChoiceOption {
                    label: "I’ll return with the group on the 22nd",
                    value: "Group Return",
                },
                ChoiceOption {
                    label: "I’ll continue exploring on my own",
                    value: "Own Return",
                },
            ],
        },
        StepId::Contact => StepScreen {
            date: "Final Step",
            title: "Contact Details",
            subtitle: "",
            description: "Just so we can stay connected. Our lovely friend Nourhan will \
                be in touch to confirm the details and help with any arrangements you \
                might need.",
            question: "",
            options: &[],
        },
    }
}

/// Country codes offered on the contact step, default first. "other" is a
/// sentinel that is accepted as-is.
pub const COUNTRY_CODES: &[&str] = &[
    "+20", "+971", "+966", "+965", "+974", "+44", "+1", "+33", "+49", "+39", "other",
];

/// Stands in for the hero video of the original invitation.
pub const WELCOME: &str = "\
# Sarah & Kholi

*Three days by the Nile, March 20–22*

You are warmly invited to the wedding weekend in Aswan.
";

pub const THANK_YOU: &str = "\
# Thank You

*See you by the Nile*

**Sarah & Kholi**
";
