use serde::Serialize;

use super::risk_inputs::RiskInputs;
use super::risk_tier::RiskTier;

/// Cross reserve view of an account. LTV and threshold are weighted by collateral value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub collateral_value_usd: f64,
    pub debt_value_usd: f64,
    pub weighted_loan_to_value: f64,
    pub weighted_liquidation_threshold: f64,
    pub borrow_capacity_usd: f64,
    pub available_to_borrow_usd: f64,
    pub ltv_percent: f64,
    #[serde(serialize_with = "crate::types::health_factor::serialize")]
    pub health_factor: f64,
    pub tier: RiskTier,
}

impl AccountSummary {
    pub fn risk_inputs(&self) -> RiskInputs {
        RiskInputs {
            collateral_value_usd: self.collateral_value_usd,
            debt_value_usd: self.debt_value_usd,
            loan_to_value: self.weighted_loan_to_value,
            liquidation_threshold: self.weighted_liquidation_threshold,
        }
    }
}
