use serde::{Deserialize, Serialize};

/// Reserve parameters as reported by the pool, in protocol units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReserveConfiguration {
    pub symbol: String,
    /// Underlying token decimals
    pub decimals: u32,
    /// Loan to value, 1% - 100, 100% - 10_000
    pub ltv: u32,
    /// Liquidation threshold, 1% - 100, 100% - 10_000
    pub liquidation_threshold: u32,
    /// Annualized rates as fixed values with 10e9 denominator
    pub variable_borrow_rate: i128,
    pub stable_borrow_rate: i128,
    /// Timestamp of the last index update, seconds
    pub last_update_timestamp: u64,
    pub is_active: bool,
    pub borrowing_enabled: bool,
}
