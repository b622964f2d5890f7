use crate::api::types::{CheckReport, SendResponse, ValidateResponse};
use crate::config::BackendConfig;
use crate::error::FormError;
use serde_json::json;

/// Thin client over the two backend endpoints. One attempt per call, no
/// retry, no explicit timeout; whatever reqwest defaults to applies.
#[derive(Clone)]
pub struct BackendClient {
    config: BackendConfig,
}

impl BackendClient {
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }

    pub async fn validate(&self, emails: &[String]) -> Result<CheckReport, FormError> {
        let client = reqwest::Client::builder()
            .cookie_store(self.config.credentialed_validation)
            .build()
            .map_err(|e| FormError::Transport(e.to_string()))?;

        let payload = json!({ "emails": emails });
        let response = client
            .post(&self.config.validate_endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| FormError::Transport(e.to_string()))?;

        let body: ValidateResponse = response
            .json()
            .await
            .map_err(|e| FormError::Transport(e.to_string()))?;

        interpret_validate(body)
    }

    pub async fn send(
        &self,
        emails: &[String],
        subject: &str,
        message: &str,
    ) -> Result<(), FormError> {
        let payload = json!({
            "emails": emails,
            "subject": subject,
            "message": message,
        });

        let client = reqwest::Client::new();
        let response = client
            .post(&self.config.send_endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| FormError::Transport(e.to_string()))?;

        let body: SendResponse = response
            .json()
            .await
            .map_err(|e| FormError::Transport(e.to_string()))?;

        interpret_send(body)
    }
}

fn interpret_validate(body: ValidateResponse) -> Result<CheckReport, FormError> {
    if !body.success {
        return Err(FormError::BackendRejected(
            body.error.unwrap_or_else(|| "Unknown backend error".to_string()),
        ));
    }

    let results = body.results.unwrap_or_default();
    let (valid, total) = match body.summary {
        Some(summary) => (summary.valid, summary.total),
        None => {
            let valid = results.iter().filter(|r| r.is_valid()).count();
            (valid, results.len())
        }
    };

    Ok(CheckReport {
        results,
        valid,
        total,
    })
}

fn interpret_send(body: SendResponse) -> Result<(), FormError> {
    if body.success {
        Ok(())
    } else {
        Err(FormError::BackendRejected(
            body.error.unwrap_or_else(|| "Unknown backend error".to_string()),
        ))
    }
}
