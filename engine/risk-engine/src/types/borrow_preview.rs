use serde::Serialize;

use super::risk_metrics::RiskMetrics;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowPreview {
    pub borrow_amount_usd: f64,
    pub debt_value_usd_after: f64,
    pub before: RiskMetrics,
    pub after: RiskMetrics,
}
