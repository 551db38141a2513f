use async_trait::async_trait;
use reqwest::Client;
use risk_service_interface::types::validation_request::ValidationRequest;
use risk_service_interface::types::validation_verdict::ValidationVerdict;
use risk_service_interface::RiskValidator;
use tracing::warn;

/// Risk service reached over HTTP. Never retries: a failed call is a refusal.
#[derive(Debug, Clone)]
pub struct HttpRiskValidator {
    client: Client,
    url: String,
}

impl HttpRiskValidator {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Any status outside 2xx or a body that is not a verdict is a service error
pub fn verdict_from_response(status_code: u16, body: &str) -> ValidationVerdict {
    if !(200..300).contains(&status_code) {
        warn!(status_code, "risk service returned error status");
        return ValidationVerdict::service_error();
    }

    serde_json::from_str::<ValidationVerdict>(body).unwrap_or_else(|err| {
        warn!(%err, "malformed risk service response");
        ValidationVerdict::service_error()
    })
}

#[async_trait]
impl RiskValidator for HttpRiskValidator {
    async fn validate(&self, request: &ValidationRequest) -> ValidationVerdict {
        let response = match self.client.post(&self.url).json(request).send().await {
            Ok(response) => response,
            Err(err) => {
                warn!(url = %self.url, %err, "risk service unreachable");
                return ValidationVerdict::service_error();
            }
        };

        let status_code = response.status().as_u16();
        match response.text().await {
            Ok(body) => verdict_from_response(status_code, &body),
            Err(err) => {
                warn!(%err, "failed to read risk service response");
                ValidationVerdict::service_error()
            }
        }
    }
}
