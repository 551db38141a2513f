use ledger_interface::types::rate_mode::RateMode;
use serde::{Deserialize, Serialize};

/// Outstanding debt, amount in human units of the underlying
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Borrow {
    pub symbol: String,
    pub amount: f64,
    #[serde(default)]
    pub rate_mode: RateMode,
    #[serde(default)]
    pub apy_at_open: Option<f64>,
}

impl Borrow {
    pub fn new(symbol: impl Into<String>, amount: f64, rate_mode: RateMode) -> Self {
        Self {
            symbol: symbol.into(),
            amount,
            rate_mode,
            apy_at_open: None,
        }
    }
}
