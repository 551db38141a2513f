use serde::Serialize;

use super::risk_tier::RiskTier;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StressResult {
    pub shock_fraction: f64,
    pub stressed_collateral_usd: f64,
    pub debt_value_usd: f64,
    pub cap_usd: f64,
    pub ltv_percent: f64,
    #[serde(serialize_with = "crate::types::health_factor::serialize")]
    pub health_factor: f64,
    pub headroom_usd: f64,
    pub tier: RiskTier,
}
