use std::collections::HashMap;

use parking_lot::RwLock;
use price_feed_interface::types::price_data::PriceData;

#[derive(Debug, Default)]
pub struct Storage {
    prices: RwLock<HashMap<String, PriceData>>,
}

impl Storage {
    pub fn write_price(&self, symbol: &str, price: PriceData) {
        self.prices.write().insert(symbol.to_owned(), price);
    }

    pub fn read_price(&self, symbol: &str) -> Option<PriceData> {
        self.prices.read().get(symbol).copied()
    }

    pub fn remove_price(&self, symbol: &str) -> Option<PriceData> {
        self.prices.write().remove(symbol)
    }
}
