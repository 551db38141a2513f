use serde::{Deserialize, Serialize};

/// Collateral deposit, quantity in human units of the underlying
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supply {
    pub symbol: String,
    pub quantity: f64,
    pub used_as_collateral: bool,
}

impl Supply {
    pub fn new(symbol: impl Into<String>, quantity: f64, used_as_collateral: bool) -> Self {
        Self {
            symbol: symbol.into(),
            quantity,
            used_as_collateral,
        }
    }
}
