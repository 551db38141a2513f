use common::{FixedI128, SECONDS_IN_DAY};
use serde::{Deserialize, Serialize};

use super::risk_tier::RiskTier;

/// Where the repaid funds come from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FundingSource {
    #[default]
    Wallet,
    /// Yield bearing receipt of the same reserve
    Receipt,
}

/// Debt state a repayment is checked and allocated against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepayTerms {
    pub outstanding_debt: f64,
    pub annual_rate: f64,
    pub days_elapsed: f64,
    pub funding_source: FundingSource,
    /// Balance of the funding source, unchecked when unknown
    pub available_balance: Option<f64>,
    /// USD per unit of the underlying, the USD repay floor is unchecked when unknown
    #[serde(default)]
    pub price_usd: Option<f64>,
}

impl RepayTerms {
    /// Elapsed days between the last on-ledger accrual and `now`, both in seconds
    pub fn days_elapsed_since(last_accrual_timestamp: u64, now: u64) -> f64 {
        now.saturating_sub(last_accrual_timestamp) as f64 / SECONDS_IN_DAY as f64
    }

    /// USD value of `amount` units of the underlying, None without a usable price
    pub fn value_usd(&self, amount: f64) -> Option<f64> {
        self.price_usd
            .filter(|price| price.is_finite() && *price > 0.0)
            .map(|price| amount * price)
    }
}

/// Interest first split of a repayment; `interest_portion + principal_portion` is the repaid amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepaymentAllocation {
    pub accrued_interest: FixedI128,
    pub interest_portion: FixedI128,
    pub principal_portion: FixedI128,
}

impl RepaymentAllocation {
    pub fn repay_amount(&self) -> Option<FixedI128> {
        self.interest_portion.checked_add(self.principal_portion)
    }
}

/// Risk metrics before and after a repayment, for display before committing
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepayPreview {
    pub repay_amount_usd: f64,
    pub debt_value_usd_after: f64,
    #[serde(serialize_with = "crate::types::health_factor::serialize")]
    pub health_factor_before: f64,
    #[serde(serialize_with = "crate::types::health_factor::serialize")]
    pub health_factor_after: f64,
    pub ltv_percent_before: f64,
    pub ltv_percent_after: f64,
    pub tier_before: RiskTier,
    pub tier_after: RiskTier,
}
