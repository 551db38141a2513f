//! Risk engine for collateralized lending positions.
//!
//! Pure calculations ([`methods`]) turn ledger balances and prices into positions,
//! health factors and stress projections. [`orchestrator::TransactionOrchestrator`]
//! gates debt changing actions behind a risk service before they reach the ledger.

pub mod clients;
pub mod config;
pub mod error;
mod event;
pub mod methods;
pub mod orchestrator;
pub mod policy;
#[cfg(test)]
mod tests;
pub mod types;

pub use clients::http_risk_validator::HttpRiskValidator;
pub use config::{ConfigError, EngineConfig};
pub use error::{Error, ErrorCategory, ErrorKind};
pub use orchestrator::action::{ActionReceipt, ActionRequest};
pub use orchestrator::state::ActionState;
pub use orchestrator::TransactionOrchestrator;
pub use policy::policy_validator::PolicyRiskValidator;
