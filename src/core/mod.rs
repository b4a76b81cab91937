pub mod submitter;
pub mod validator;
pub mod workflow;

pub use crate::domain::model::{FormInput, FormState, RegistrationPayload, SubmissionOutcome};
pub use crate::domain::ports::{ConfigProvider, RegistrationApi};
pub use crate::utils::error::Result;
