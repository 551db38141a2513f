mod storage;

use price_feed_interface::types::price_data::PriceData;
use price_feed_interface::PriceFeed;

use crate::storage::Storage;

/// Price feed with prices set by the test
#[derive(Debug, Default)]
pub struct PriceFeedMock {
    storage: Storage,
}

impl PriceFeedMock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_price(self, symbol: &str, price: f64) -> Self {
        self.set_price(symbol, price);
        self
    }

    pub fn set_price(&self, symbol: &str, price: f64) {
        self.set_price_at(symbol, price, 0);
    }

    pub fn set_price_at(&self, symbol: &str, price: f64, timestamp: u64) {
        self.storage
            .write_price(symbol, PriceData { price, timestamp });
    }

    pub fn remove_price(&self, symbol: &str) {
        self.storage.remove_price(symbol);
    }
}

impl PriceFeed for PriceFeedMock {
    fn last_price(&self, symbol: &str) -> Option<PriceData> {
        self.storage.read_price(symbol)
    }
}
