use async_trait::async_trait;
use types::validation_request::ValidationRequest;
use types::validation_verdict::ValidationVerdict;

pub mod types;

/// Reason reported when the service could not be reached or answered garbage
pub const VALIDATION_SERVICE_ERROR: &str = "validation service error";

/// Backend re-validation of a debt changing action.
///
/// The verdict is authoritative: a refusal may reflect rules the client does not know about.
/// Implementations never fail, any transport problem is reported as an invalid verdict
/// with [`VALIDATION_SERVICE_ERROR`].
#[async_trait]
pub trait RiskValidator: Send + Sync {
    async fn validate(&self, request: &ValidationRequest) -> ValidationVerdict;
}
