pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::submitter::Submitter;
pub use crate::core::workflow::{RegistrationWorkflow, SubmitAttempt};
pub use domain::model::{
    Banner, Field, FieldError, FormInput, FormState, RegistrationPayload, Severity,
    SubmissionOutcome,
};
pub use domain::ports::{ConfigProvider, RegistrationApi};
pub use utils::error::{FormError, Result};
