use serde::{Deserialize, Serialize};

use super::rate_mode::RateMode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyBalance {
    pub symbol: String,
    /// Receipt token balance in raw units
    pub balance: i128,
    pub decimals: u32,
    pub used_as_collateral: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtBalance {
    pub symbol: String,
    /// Debt token balance in raw units
    pub balance: i128,
    pub decimals: u32,
    pub rate_mode: RateMode,
    /// Rate at open as fixed value with 10e9 denominator
    pub rate_at_open: Option<i128>,
}

/// Underlying token held by the wallet itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalance {
    pub symbol: String,
    pub balance: i128,
    pub decimals: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBalances {
    pub supplies: Vec<SupplyBalance>,
    pub debts: Vec<DebtBalance>,
    #[serde(default)]
    pub wallet: Vec<WalletBalance>,
}
