use crate::domain::model::{RegistrationPayload, SubmissionOutcome};
use crate::domain::ports::{ConfigProvider, RegistrationApi};
use reqwest::Client;
use serde::Deserialize;

/// Fallback banner text when the server gives no usable `description`, or
/// the request never completes at all.
pub const GENERIC_ERROR: &str = "An error occurred";

#[derive(Debug, Deserialize)]
struct ApiResponse {
    description: Option<String>,
}

/// One-shot HTTP submitter for a fully validated registration.
///
/// Exactly one POST per call, no retry, no timeout. Every failure mode
/// (4xx, 5xx, unreadable body, transport error) collapses into
/// `SubmissionOutcome::Failure` with the server's description when one
/// could be read.
pub struct Submitter<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> Submitter<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> RegistrationApi for Submitter<C> {
    async fn create_user(&self, payload: &RegistrationPayload) -> SubmissionOutcome {
        tracing::debug!("Posting registration to: {}", self.config.api_endpoint());

        let response = match self
            .client
            .post(self.config.api_endpoint())
            .json(payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Registration request did not complete: {}", e);
                return SubmissionOutcome::Failure(GENERIC_ERROR.to_string());
            }
        };

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let description = match response.text().await {
            Ok(body) => serde_json::from_str::<ApiResponse>(&body)
                .ok()
                .and_then(|r| r.description),
            Err(_) => None,
        };

        if status.is_success() {
            SubmissionOutcome::Success(description.unwrap_or_default())
        } else {
            SubmissionOutcome::Failure(description.unwrap_or_else(|| GENERIC_ERROR.to_string()))
        }
    }
}
