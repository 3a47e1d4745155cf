//! The terminal submission handshake.

use std::sync::Arc;

use log::{info, warn};
use tokio::task;

use crate::error::{Result, RsvpError};

use super::{nav::Advance, Wizard};

impl Wizard {
    /// Runs the one submission of the wizard's lifetime.
    ///
    /// Sets the `is_submitting` guard, hands a frozen clone of the record
    /// to the gateway on the blocking pool, and awaits the single result.
    /// Delivery failure is logged and swallowed: the captured answers are
    /// the authoritative record, and the guest experience proceeds to the
    /// thank-you state either way. No retry, no backoff, no persistence of
    /// unsent submissions.
    pub(super) async fn submit(&mut self) -> Result<Advance> {
        self.is_submitting = true;

        let gateway = Arc::clone(&self.gateway);
        let frozen = self.answers.clone();
        let outcome = task::spawn_blocking(move || {
            let result = gateway.deliver(&frozen);
            (frozen, result)
        })
        .await
        .map_err(|e| RsvpError::configuration(format!("Task join error: {e}")));

        self.is_submitting = false;
        let (answers, delivery) = outcome?;

        let delivered = match delivery {
            Ok(()) => {
                info!("answer record delivered");
                true
            }
            Err(err) => {
                warn!("answer record delivery failed, proceeding anyway: {err}");
                false
            }
        };

        Ok(Advance::Submitted { answers, delivered })
    }
}
