use ledger_interface::types::rate_mode::RateMode;
use serde::Serialize;

use super::risk_inputs::RiskInputs;
use super::risk_metrics::RiskMetrics;
use super::risk_tier::RiskTier;
use crate::methods::risk_metrics::risk_metrics;

/// User exposure to one reserve. Derived on every aggregation pass, never a source of truth.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub reserve_symbol: String,
    /// Quantity of the underlying enabled as collateral
    pub collateral_amount: f64,
    pub collateral_value_usd: f64,
    pub debt_value_usd: f64,
    pub loan_to_value: f64,
    pub liquidation_threshold: f64,
    pub debt_mode: Option<RateMode>,
    #[serde(serialize_with = "crate::types::health_factor::serialize")]
    pub health_factor: f64,
    pub wallet_balance_usd: Option<f64>,
    /// Value of every supply row of the reserve, collateral or not
    pub a_token_balance_usd: Option<f64>,
}

impl Position {
    pub fn risk_inputs(&self) -> RiskInputs {
        RiskInputs {
            collateral_value_usd: self.collateral_value_usd,
            debt_value_usd: self.debt_value_usd,
            loan_to_value: self.loan_to_value,
            liquidation_threshold: self.liquidation_threshold,
        }
    }

    pub fn metrics(&self) -> RiskMetrics {
        risk_metrics(&self.risk_inputs())
    }

    pub fn tier(&self) -> RiskTier {
        RiskTier::from_health_factor(self.health_factor)
    }
}
