//! Application controller: the view-state machine around the wizard.
//!
//! The surrounding screens form an explicit finite state machine,
//! [`View`], owned here by a single controller: Welcome stands in for the
//! hero video of the original invitation, the wizard collects the
//! answers, and ThankYou closes the session. Backing out of the first
//! wizard step returns to Welcome; the collected answers survive the
//! round trip so a guest can resume where they left off.

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use dialoguer::{
    theme::{ColorfulTheme, SimpleTheme, Theme},
    Input, Select,
};
use log::{info, warn};
use rsvp_core::{
    is_step_valid, Advance, AnswerField, AnswerRecord, AnswerSummary, Retreat, StepId,
    SubmissionGateway, Wizard, WizardBuilder, STEP_SEQUENCE,
};

use crate::renderer::TerminalRenderer;
use crate::screens;

const BACK_LABEL: &str = "Back";

/// The screens surrounding the wizard.
enum View {
    Welcome,
    Wizard,
    ThankYou,
}

/// How one wizard session ended.
enum WizardOutcome {
    /// Terminal submission ran; the frozen record came back with the
    /// delivery flag.
    Completed {
        answers: AnswerRecord,
        delivered: bool,
    },
    /// The guest backed out at the first step; answers are kept for
    /// resume.
    Exited(AnswerRecord),
}

/// Outcome of the contact screen prompts.
enum ContactOutcome {
    Submitted {
        answers: AnswerRecord,
        delivered: bool,
    },
    Back,
}

pub struct App {
    gateway: Arc<dyn SubmissionGateway>,
    renderer: TerminalRenderer,
    theme: Box<dyn Theme>,
    skip_welcome: bool,
    /// Answers collected so far; survives wizard exits within the session.
    answers: AnswerRecord,
}

impl App {
    pub fn new(
        gateway: Arc<dyn SubmissionGateway>,
        renderer: TerminalRenderer,
        skip_welcome: bool,
    ) -> Self {
        let theme: Box<dyn Theme> = if renderer.is_rich() {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        };

        // Same seed as the original form: default country code, one guest.
        let mut answers = AnswerRecord::default();
        answers.set(AnswerField::CountryCode, "+20");
        answers.set(AnswerField::Attendees, "1");

        Self {
            gateway,
            renderer,
            theme,
            skip_welcome,
            answers,
        }
    }

    /// Runs the view-state machine to completion.
    pub async fn run(mut self) -> Result<()> {
        let mut view = if self.skip_welcome {
            View::Wizard
        } else {
            View::Welcome
        };

        loop {
            view = match view {
                View::Welcome => {
                    if self.show_welcome()? {
                        View::Wizard
                    } else {
                        return Ok(());
                    }
                }
                View::Wizard => match self.run_wizard().await? {
                    WizardOutcome::Completed { answers, delivered } => {
                        self.answers = answers;
                        if delivered {
                            info!("submission delivered");
                        } else {
                            info!("submission captured locally, delivery failed");
                        }
                        View::ThankYou
                    }
                    WizardOutcome::Exited(answers) => {
                        self.answers = answers;
                        View::Welcome
                    }
                },
                View::ThankYou => {
                    self.renderer.clear();
                    self.renderer.render(screens::THANK_YOU)?;
                    return Ok(());
                }
            };
        }
    }

    /// Shows the welcome screen. Returns false when the guest leaves.
    fn show_welcome(&self) -> Result<bool> {
        self.renderer.clear();
        self.renderer.render(screens::WELCOME)?;
        let choice = Select::with_theme(self.theme.as_ref())
            .with_prompt("Shall we?")
            .items(&["Begin the RSVP", "Maybe later"])
            .default(0)
            .interact()?;
        Ok(choice == 0)
    }

    /// Runs one wizard session from the first step.
    async fn run_wizard(&mut self) -> Result<WizardOutcome> {
        let mut wizard = WizardBuilder::new()
            .with_initial_answers(self.answers.clone())
            .with_gateway(Arc::clone(&self.gateway))
            .build()
            .context("Failed to initialize wizard")?;

        loop {
            self.renderer.clear();
            let step = wizard.current_step();
            let screen = screens::screen(step);
            self.renderer
                .render(&screen.markdown(wizard.position(), STEP_SEQUENCE.len() - 1))?;

            match step {
                StepId::Intro => {
                    let choice = Select::with_theme(self.theme.as_ref())
                        .with_prompt(screen.question)
                        .items(&["Next", BACK_LABEL])
                        .default(0)
                        .interact()?;
                    if choice == 0 {
                        wizard.go_next().await.context("Navigation failed")?;
                    } else if wizard.go_back() == Retreat::Exited {
                        return Ok(WizardOutcome::Exited(wizard.answers().clone()));
                    }
                }
                StepId::Contact => match self.contact_screen(&mut wizard).await? {
                    ContactOutcome::Submitted { answers, delivered } => {
                        return Ok(WizardOutcome::Completed { answers, delivered });
                    }
                    ContactOutcome::Back => {
                        // go_back already moved; re-derives the skip when
                        // the post-wedding trip was declined.
                    }
                },
                _ => self.choice_screen(&mut wizard, step, &screen).await?,
            }
        }
    }

    /// Prompts a single-choice step and advances on selection.
    async fn choice_screen(
        &self,
        wizard: &mut Wizard,
        step: StepId,
        screen: &screens::StepScreen,
    ) -> Result<()> {
        let mut labels: Vec<&str> = screen.options.iter().map(|o| o.label).collect();
        labels.push(BACK_LABEL);

        // Pre-select the previously chosen option on revisit.
        let field = AnswerRecord::choice_field(step);
        let default = field
            .and_then(|f| {
                let current = wizard.answers().get(f);
                screen.options.iter().position(|o| o.value == current)
            })
            .unwrap_or(0);

        let choice = Select::with_theme(self.theme.as_ref())
            .with_prompt(screen.question)
            .items(&labels)
            .default(default)
            .interact()?;

        if choice == screen.options.len() {
            // The back entry is always last.
            let _ = wizard.go_back();
            return Ok(());
        }

        if let Some(field) = field {
            wizard.set_answer(field, screen.options[choice].value);
        }
        wizard.go_next().await.context("Navigation failed")?;
        Ok(())
    }

    /// Prompts the contact fields, shows the recap, and submits.
    async fn contact_screen(&self, wizard: &mut Wizard) -> Result<ContactOutcome> {
        loop {
            let name: String = Input::with_theme(self.theme.as_ref())
                .with_prompt("Name")
                .with_initial_text(wizard.answers().name.clone())
                .allow_empty(true)
                .interact_text()?;
            wizard.set_answer(AnswerField::Name, name.trim());

            let current_code = wizard.answers().country_code.clone();
            let code_default = screens::COUNTRY_CODES
                .iter()
                .position(|c| *c == current_code)
                .unwrap_or(0);
            let code_choice = Select::with_theme(self.theme.as_ref())
                .with_prompt("Country code")
                .items(screens::COUNTRY_CODES)
                .default(code_default)
                .interact()?;
            wizard.set_answer(AnswerField::CountryCode, screens::COUNTRY_CODES[code_choice]);

            let phone: String = Input::with_theme(self.theme.as_ref())
                .with_prompt("Phone (digits only)")
                .with_initial_text(wizard.answers().phone.clone())
                .allow_empty(true)
                .interact_text()?;
            wizard.set_answer(AnswerField::Phone, &phone);

            let attendees: String = Input::with_theme(self.theme.as_ref())
                .with_prompt("Total attendees (1-10)")
                .with_initial_text(wizard.answers().attendees.clone())
                .allow_empty(true)
                .interact_text()?;
            wizard.set_answer(AnswerField::Attendees, &attendees);

            let notes: String = Input::with_theme(self.theme.as_ref())
                .with_prompt("Optional notes")
                .with_initial_text(wizard.answers().notes.clone())
                .allow_empty(true)
                .interact_text()?;
            wizard.set_answer(AnswerField::Notes, &notes);

            self.renderer.render("\n")?;
            self.renderer
                .render(&AnswerSummary(wizard.answers()).to_string())?;

            if !wizard.is_current_step_valid() {
                // The forward control stays disabled, never hidden.
                self.renderer.render(
                    "*A name, a phone number with at least 6 digits, and an \
                     attendee count are needed before submitting.*\n",
                )?;
                let choice = Select::with_theme(self.theme.as_ref())
                    .with_prompt("What next?")
                    .items(&["Edit details", BACK_LABEL])
                    .default(0)
                    .interact()?;
                if choice == 1 {
                    let _ = wizard.go_back();
                    return Ok(ContactOutcome::Back);
                }
                continue;
            }

            let choice = Select::with_theme(self.theme.as_ref())
                .with_prompt("Ready to send?")
                .items(&["Submit", "Edit details", BACK_LABEL])
                .default(0)
                .interact()?;
            match choice {
                0 => {
                    self.renderer.render("Submitting...\n")?;
                    match wizard.go_next().await.context("Submission failed")? {
                        Advance::Submitted { answers, delivered } => {
                            return Ok(ContactOutcome::Submitted { answers, delivered });
                        }
                        // The step was just validated and nothing else is
                        // in flight.
                        Advance::Moved | Advance::Blocked => continue,
                    }
                }
                1 => continue,
                _ => {
                    let _ = wizard.go_back();
                    return Ok(ContactOutcome::Back);
                }
            }
        }
    }
}

/// Delivers a completed answers file without running the wizard.
///
/// The file holds one answer record in the webhook's camelCase JSON shape.
/// The contact rules still gate submission; delivery failure is logged and
/// swallowed, matching the interactive flow.
pub async fn submit_answers_file(
    path: &Path,
    gateway: Arc<dyn SubmissionGateway>,
    renderer: &TerminalRenderer,
) -> Result<()> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers file '{}'", path.display()))?;
    let answers: AnswerRecord =
        serde_json::from_str(&raw).context("Failed to parse answers file")?;

    if !is_step_valid(StepId::Contact, &answers) {
        bail!(
            "answers file is incomplete: a name, a phone number with at least \
             6 digits, and an attendee count are required"
        );
    }

    let frozen = answers.clone();
    let delivery = tokio::task::spawn_blocking(move || gateway.deliver(&frozen))
        .await
        .context("Delivery task failed")?;
    match delivery {
        Ok(()) => info!("answer record delivered"),
        Err(err) => warn!("delivery failed, answers were still captured: {err}"),
    }

    renderer.render(&AnswerSummary(&answers).to_string())?;
    renderer.render(screens::THANK_YOU)?;
    Ok(())
}
