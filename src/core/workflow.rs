use crate::core::validator;
use crate::domain::model::{Banner, FormState, Severity, SubmissionOutcome};
use crate::domain::ports::RegistrationApi;
use chrono::{Datelike, Utc};

/// What one submit-button activation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Validation rejected the form; per-field errors were recorded on the
    /// state and no network call was made.
    Rejected,
    /// The payload was sent; the outcome drove the banner.
    Completed(SubmissionOutcome),
}

/// Drives one submission attempt over an exclusively borrowed `FormState`:
/// Idle -> Validating -> (Idle-with-errors | Submitting -> Idle-reset |
/// Idle-with-banner). Holding `&mut FormState` for the whole attempt means a
/// second submit against the same form cannot start while one is
/// outstanding.
pub struct RegistrationWorkflow<A: RegistrationApi> {
    api: A,
}

impl<A: RegistrationApi> RegistrationWorkflow<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn submit(&self, state: &mut FormState) -> SubmitAttempt {
        // Feedback from the previous attempt never survives into a new one.
        state.clear_feedback();

        let current_year = Utc::now().year();
        let payload = match validator::validate(&state.input, current_year) {
            Ok(payload) => payload,
            Err(errors) => {
                tracing::debug!("Validation rejected {} field(s)", errors.len());
                state.errors = errors;
                return SubmitAttempt::Rejected;
            }
        };

        let outcome = self.api.create_user(&payload).await;
        match &outcome {
            SubmissionOutcome::Success(message) => {
                tracing::info!("Registration accepted: {}", message);
                state.input.clear();
                state.banner = Some(Banner {
                    message: message.clone(),
                    severity: Severity::Success,
                });
            }
            SubmissionOutcome::Failure(message) => {
                // Entered values are kept so the user can correct and resubmit.
                tracing::warn!("Registration failed: {}", message);
                state.banner = Some(Banner {
                    message: message.clone(),
                    severity: Severity::Danger,
                });
            }
        }
        SubmitAttempt::Completed(outcome)
    }
}
