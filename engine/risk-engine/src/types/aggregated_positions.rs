use serde::Serialize;

use super::position::Position;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedPositions {
    /// One position per touched symbol, sorted by symbol
    pub positions: Vec<Position>,
    /// Symbols with a nonzero balance and no price, valued at zero
    pub missing_prices: Vec<String>,
    /// Symbols without reserve parameters, carried with zero LTV and threshold
    pub missing_reserves: Vec<String>,
}

impl AggregatedPositions {
    pub fn get(&self, symbol: &str) -> Option<&Position> {
        self.positions
            .iter()
            .find(|position| position.reserve_symbol == symbol)
    }

    pub fn is_complete(&self) -> bool {
        self.missing_prices.is_empty() && self.missing_reserves.is_empty()
    }
}
