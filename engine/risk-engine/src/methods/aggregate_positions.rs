use std::collections::{BTreeMap, BTreeSet, HashMap};

use ledger_interface::types::rate_mode::RateMode;
use price_feed_interface::PriceFeed;

use super::risk_metrics::health_factor;
use super::utils::non_negative;
use crate::event;
use crate::types::aggregated_positions::AggregatedPositions;
use crate::types::borrow::Borrow;
use crate::types::position::Position;
use crate::types::reserve::Reserve;
use crate::types::supply::Supply;

#[derive(Default)]
struct ReserveTotals {
    collateral_amount: f64,
    collateral_value_usd: f64,
    supplied_value_usd: f64,
    has_supply: bool,
    debt_value_usd: f64,
    debt_mode: Option<RateMode>,
}

/// Groups supply and borrow rows by reserve into one position per touched symbol.
///
/// Rows are only ever added, so stale or duplicated rows can not drive a total negative.
/// A symbol without a price is valued at zero and reported in `missing_prices`.
pub fn aggregate_positions<P: PriceFeed + ?Sized>(
    reserves: &[Reserve],
    supplies: &[Supply],
    borrows: &[Borrow],
    prices: &P,
    wallet_balances: Option<&HashMap<String, f64>>,
) -> AggregatedPositions {
    let mut missing_prices = BTreeSet::new();
    let mut value_usd = |symbol: &str, quantity: f64| -> f64 {
        if quantity == 0.0 {
            return 0.0;
        }

        match prices
            .price_usd(symbol)
            .filter(|price| price.is_finite() && *price >= 0.0)
        {
            Some(price) => quantity * price,
            None => {
                missing_prices.insert(symbol.to_owned());
                0.0
            }
        }
    };

    let mut totals: BTreeMap<&str, ReserveTotals> = BTreeMap::new();

    for supply in supplies {
        let quantity = non_negative(supply.quantity);
        let value = value_usd(&supply.symbol, quantity);
        let entry = totals.entry(supply.symbol.as_str()).or_default();

        entry.has_supply = true;
        entry.supplied_value_usd += value;
        if supply.used_as_collateral {
            entry.collateral_amount += quantity;
            entry.collateral_value_usd += value;
        }
    }

    for borrow in borrows {
        let value = value_usd(&borrow.symbol, non_negative(borrow.amount));
        let entry = totals.entry(borrow.symbol.as_str()).or_default();

        entry.debt_value_usd += value;
        entry.debt_mode.get_or_insert(borrow.rate_mode);
    }

    let mut reserves_by_symbol: HashMap<&str, &Reserve> = HashMap::new();
    for reserve in reserves {
        reserves_by_symbol.entry(reserve.symbol.as_str()).or_insert(reserve);
    }

    let mut missing_reserves = Vec::new();
    let mut positions = Vec::with_capacity(totals.len());

    for (symbol, totals) in totals {
        let (loan_to_value, liquidation_threshold) = match reserves_by_symbol.get(symbol) {
            Some(reserve) => (reserve.loan_to_value, reserve.liquidation_threshold),
            None => {
                event::missing_reserve(symbol);
                missing_reserves.push(symbol.to_owned());
                (0.0, 0.0)
            }
        };

        let wallet_balance_usd = wallet_balances
            .and_then(|balances| balances.get(symbol))
            .map(|quantity| value_usd(symbol, non_negative(*quantity)));

        positions.push(Position {
            reserve_symbol: symbol.to_owned(),
            collateral_amount: totals.collateral_amount,
            collateral_value_usd: totals.collateral_value_usd,
            debt_value_usd: totals.debt_value_usd,
            loan_to_value,
            liquidation_threshold,
            debt_mode: totals.debt_mode,
            health_factor: health_factor(
                totals.collateral_value_usd,
                totals.debt_value_usd,
                liquidation_threshold,
            ),
            wallet_balance_usd,
            a_token_balance_usd: totals.has_supply.then_some(totals.supplied_value_usd),
        });
    }

    for symbol in &missing_prices {
        event::missing_price(symbol);
    }

    AggregatedPositions {
        positions,
        missing_prices: missing_prices.into_iter().collect(),
        missing_reserves,
    }
}
