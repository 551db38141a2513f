use std::collections::{BTreeMap, HashMap};

use types::price_data::PriceData;

pub mod types;

/// Price lookup by reserve symbol. Prices may be stale, freshness is not checked here.
pub trait PriceFeed: Send + Sync {
    /// Get the most recent price for an asset
    fn last_price(&self, symbol: &str) -> Option<PriceData>;

    /// Get the most recent USD price for an asset
    fn price_usd(&self, symbol: &str) -> Option<f64> {
        self.last_price(symbol).map(|data| data.price)
    }
}

impl PriceFeed for HashMap<String, f64> {
    fn last_price(&self, symbol: &str) -> Option<PriceData> {
        self.get(symbol).map(|price| PriceData {
            price: *price,
            timestamp: 0,
        })
    }
}

impl PriceFeed for BTreeMap<String, f64> {
    fn last_price(&self, symbol: &str) -> Option<PriceData> {
        self.get(symbol).map(|price| PriceData {
            price: *price,
            timestamp: 0,
        })
    }
}
