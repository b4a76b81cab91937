use crate::domain::model::{RegistrationPayload, SubmissionOutcome};
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
}

/// Outbound user-creation API. Transport problems are folded into
/// `SubmissionOutcome::Failure`, so callers never see a transport error type.
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    async fn create_user(&self, payload: &RegistrationPayload) -> SubmissionOutcome;
}
