use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceData {
    /// USD per unit of the asset
    pub price: f64,
    /// Seconds since epoch the price was reported at
    pub timestamp: u64,
}
