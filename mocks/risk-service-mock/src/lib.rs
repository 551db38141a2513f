
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use risk_service_interface::types::validation_request::ValidationRequest;
use risk_service_interface::types::validation_verdict::ValidationVerdict;
use risk_service_interface::RiskValidator;
use tokio::sync::Semaphore;

#[derive(Debug, Clone)]
enum Behaviour {
    Respond(ValidationVerdict),
    Hang,
}

/// Risk service answering what the test scripted. Approves everything by default.
#[derive(Debug)]
pub struct RiskServiceMock {
    behaviour: Mutex<Behaviour>,
    delay: Mutex<Option<Duration>>,
    /// Every validation waits for a permit when set
    gate: Option<Semaphore>,
    requests: Mutex<Vec<ValidationRequest>>,
}

impl Default for RiskServiceMock {
    fn default() -> Self {
        Self {
            behaviour: Mutex::new(Behaviour::Respond(ValidationVerdict::valid())),
            delay: Mutex::new(None),
            gate: None,
            requests: Mutex::default(),
        }
    }
}

impl RiskServiceMock {
    pub fn approving() -> Self {
        Self::default()
    }

    pub fn rejecting(reason: &str) -> Self {
        let mock = Self::default();
        mock.reject(reason);
        mock
    }

    /// Holds every validation until [`Self::release`] is called
    pub fn gated() -> Self {
        Self {
            gate: Some(Semaphore::new(0)),
            ..Self::default()
        }
    }

    pub fn approve(&self) {
        *self.behaviour.lock() = Behaviour::Respond(ValidationVerdict::valid());
    }

    pub fn approve_with_warnings(&self, warnings: &[&str]) {
        let warnings = warnings.iter().map(|w| (*w).to_owned()).collect();
        *self.behaviour.lock() =
            Behaviour::Respond(ValidationVerdict::valid_with_warnings(warnings));
    }

    pub fn reject(&self, reason: &str) {
        *self.behaviour.lock() = Behaviour::Respond(ValidationVerdict::rejected(reason));
    }

    pub fn respond(&self, verdict: ValidationVerdict) {
        *self.behaviour.lock() = Behaviour::Respond(verdict);
    }

    /// Never answers
    pub fn hang(&self) {
        *self.behaviour.lock() = Behaviour::Hang;
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock() = Some(delay);
    }

    /// Lets one gated validation through
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    pub fn requests(&self) -> Vec<ValidationRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl RiskValidator for RiskServiceMock {
    async fn validate(&self, request: &ValidationRequest) -> ValidationVerdict {
        self.requests.lock().push(request.clone());

        if let Some(gate) = &self.gate {
            match gate.acquire().await {
                Ok(permit) => permit.forget(),
                Err(_) => return ValidationVerdict::service_error(),
            }
        }

        let delay = *self.delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let behaviour = self.behaviour.lock().clone();
        match behaviour {
            Behaviour::Respond(verdict) => verdict,
            Behaviour::Hang => std::future::pending().await,
        }
    }
}
