use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw form fields exactly as entered on the rendering surface.
///
/// Every field is a string until validation; day/month/year stay separate
/// until a fully valid form composes them into `date_of_birth`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

impl FormInput {
    /// Resets every field to empty, as after a successful submission.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// The eight form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    ContactNumber,
    Day,
    Month,
    Year,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::FullName => "full_name",
            Field::ContactNumber => "contact_number",
            Field::Day => "day",
            Field::Month => "month",
            Field::Year => "year",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm_password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One rejected field with its fixed, user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Banner severity, mirroring the rendering surface's success|danger variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Danger,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Success => f.write_str("success"),
            Severity::Danger => f.write_str("danger"),
        }
    }
}

/// Top-level status message shown after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub message: String,
    pub severity: Severity,
}

/// Per-session form state: the entered values plus the feedback from the
/// last attempt. Owned by whoever drives the workflow; never global.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub input: FormInput,
    pub errors: Vec<FieldError>,
    pub banner: Option<Banner>,
}

impl FormState {
    pub fn new(input: FormInput) -> Self {
        Self {
            input,
            errors: Vec::new(),
            banner: None,
        }
    }

    /// Clears the feedback from the previous attempt. Runs at the start of
    /// every submit so stale messages never survive into a new attempt.
    pub fn clear_feedback(&mut self) {
        self.errors.clear();
        self.banner = None;
    }

    pub fn error_for(&self, field: Field) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }
}

/// The subset of the form actually transmitted. `confirm_password` and the
/// raw day/month/year never leave the process; `date_of_birth` is the
/// zero-padded ISO composition of the three.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationPayload {
    pub full_name: String,
    pub contact_number: String,
    pub date_of_birth: String,
    pub email: String,
    pub password: String,
}

/// Result of one submission, driving the banner only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success(String),
    Failure(String),
}

impl SubmissionOutcome {
    pub fn message(&self) -> &str {
        match self {
            SubmissionOutcome::Success(message) | SubmissionOutcome::Failure(message) => message,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            SubmissionOutcome::Success(_) => Severity::Success,
            SubmissionOutcome::Failure(_) => Severity::Danger,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_resets_every_field() {
        let mut input = FormInput {
            full_name: "Jane Doe".to_string(),
            password: "Abcdef12".to_string(),
            ..Default::default()
        };
        input.clear();
        assert!(input.is_empty());
    }

    #[test]
    fn clear_feedback_drops_errors_and_banner() {
        let mut state = FormState::new(FormInput::default());
        state.errors.push(FieldError {
            field: Field::Email,
            message: "Email is required",
        });
        state.banner = Some(Banner {
            message: "An error occurred".to_string(),
            severity: Severity::Danger,
        });

        state.clear_feedback();

        assert!(state.errors.is_empty());
        assert!(state.banner.is_none());
    }

    #[test]
    fn outcome_maps_to_banner_severity() {
        assert_eq!(
            SubmissionOutcome::Success("ok".to_string()).severity(),
            Severity::Success
        );
        assert_eq!(
            SubmissionOutcome::Failure("no".to_string()).severity(),
            Severity::Danger
        );
    }
}
