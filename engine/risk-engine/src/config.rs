use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::policy::limits::TransactionTier;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Smallest accepted repayment, USD
    pub min_repay_usd: f64,
    /// Bound of every network call made by the orchestrator
    pub request_timeout_ms: u64,
    /// Pool contract the allowance is granted to
    pub pool_address: String,
    pub risk_service: RiskServiceConfig,
    pub policy: PolicyConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RiskServiceConfig {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyConfig {
    pub tier: TransactionTier,
    /// Borrows projected below this health factor are refused
    pub critical_health_factor: f64,
    /// Borrows projected below this health factor get a warning
    pub min_health_factor: f64,
    pub max_actions_per_minute: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_repay_usd: 0.01,
            request_timeout_ms: 30_000,
            pool_address: String::new(),
            risk_service: RiskServiceConfig::default(),
            policy: PolicyConfig::default(),
        }
    }
}

impl Default for RiskServiceConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8000/api/defi/validate".into(),
        }
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            tier: TransactionTier::Starter,
            critical_health_factor: 1.05,
            min_health_factor: 1.1,
            max_actions_per_minute: 10,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;

        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_repay_usd.is_finite() || self.min_repay_usd < 0.0 {
            return Err(ConfigError::Invalid("min_repay_usd must be finite and non negative"));
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::Invalid("request_timeout_ms must be positive"));
        }
        let policy = &self.policy;
        if !(policy.critical_health_factor.is_finite() && policy.min_health_factor.is_finite()) {
            return Err(ConfigError::Invalid("policy health factors must be finite"));
        }
        if policy.critical_health_factor > policy.min_health_factor {
            return Err(ConfigError::Invalid(
                "critical_health_factor must not exceed min_health_factor",
            ));
        }

        Ok(())
    }
}
