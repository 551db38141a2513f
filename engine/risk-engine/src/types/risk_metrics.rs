use serde::Serialize;

use super::risk_tier::RiskTier;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskMetrics {
    /// `f64::INFINITY` when there is no debt
    #[serde(serialize_with = "crate::types::health_factor::serialize")]
    pub health_factor: f64,
    pub ltv_percent: f64,
    pub borrow_capacity_usd: f64,
    pub available_to_borrow_usd: f64,
    pub tier: RiskTier,
}
