//! Builder for creating and configuring Wizard instances.

use std::sync::Arc;

use super::Wizard;
use crate::{
    error::{Result, RsvpError},
    gateway::SubmissionGateway,
    models::AnswerRecord,
};

/// Builder for creating and configuring [`Wizard`] instances.
#[derive(Default)]
pub struct WizardBuilder {
    initial_answers: Option<AnswerRecord>,
    gateway: Option<Arc<dyn SubmissionGateway>>,
}

impl WizardBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the wizard with previously collected answers.
    ///
    /// Enables resume-in-session behavior: a guest who backs out of the
    /// wizard and re-enters finds their earlier answers intact.
    pub fn with_initial_answers(mut self, answers: AnswerRecord) -> Self {
        self.initial_answers = Some(answers);
        self
    }

    /// Sets the delivery gateway used on final confirmation. Required.
    pub fn with_gateway(mut self, gateway: Arc<dyn SubmissionGateway>) -> Self {
        self.gateway = Some(gateway);
        self
    }

    /// Builds the configured wizard, starting at the first step position.
    ///
    /// # Errors
    ///
    /// Returns `RsvpError::Configuration` if no gateway was provided.
    pub fn build(self) -> Result<Wizard> {
        let gateway = self
            .gateway
            .ok_or_else(|| RsvpError::configuration("no submission gateway configured"))?;

        Ok(Wizard {
            answers: self.initial_answers.unwrap_or_default(),
            position: 0,
            is_submitting: false,
            gateway,
        })
    }
}
