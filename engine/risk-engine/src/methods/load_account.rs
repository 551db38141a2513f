use std::collections::{BTreeSet, HashMap};

use common::FixedI128;
use ledger_interface::types::error::LedgerError;
use ledger_interface::types::rate_mode::RateMode;
use ledger_interface::LedgerReader;
use price_feed_interface::PriceFeed;

use super::aggregate_positions::aggregate_positions;
use crate::error::Error;
use crate::types::aggregated_positions::AggregatedPositions;
use crate::types::borrow::Borrow;
use crate::types::repayment::{FundingSource, RepayTerms};
use crate::types::reserve::Reserve;
use crate::types::supply::Supply;

/// Account state read from the ledger and converted to human units
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedAccount {
    pub reserves: Vec<Reserve>,
    pub supplies: Vec<Supply>,
    pub borrows: Vec<Borrow>,
    pub wallet_balances: HashMap<String, f64>,
}

impl LoadedAccount {
    pub fn aggregate<P: PriceFeed + ?Sized>(&self, prices: &P) -> AggregatedPositions {
        aggregate_positions(
            &self.reserves,
            &self.supplies,
            &self.borrows,
            prices,
            Some(&self.wallet_balances),
        )
    }
}

fn human_units(balance: i128, decimals: u32) -> Result<f64, Error> {
    FixedI128::from_units(balance, decimals)
        .map(FixedI128::to_f64)
        .ok_or(Error::Ledger(LedgerError::MathOverflow))
}

pub async fn load_account(reader: &dyn LedgerReader, owner: &str) -> Result<LoadedAccount, Error> {
    let balances = reader.account(owner).await?;

    let symbols: BTreeSet<&str> = balances
        .supplies
        .iter()
        .map(|supply| supply.symbol.as_str())
        .chain(balances.debts.iter().map(|debt| debt.symbol.as_str()))
        .collect();

    let mut reserves = Vec::with_capacity(symbols.len());
    for symbol in symbols {
        let config = reader.reserve(symbol).await?;
        reserves.push(Reserve::from_configuration(&config)?);
    }

    let supplies = balances
        .supplies
        .iter()
        .map(|supply| {
            Ok(Supply::new(
                supply.symbol.clone(),
                human_units(supply.balance, supply.decimals)?,
                supply.used_as_collateral,
            ))
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let borrows = balances
        .debts
        .iter()
        .map(|debt| {
            let mut borrow = Borrow::new(
                debt.symbol.clone(),
                human_units(debt.balance, debt.decimals)?,
                debt.rate_mode,
            );
            borrow.apy_at_open = debt
                .rate_at_open
                .map(|rate| FixedI128::from_inner(rate).to_f64());
            Ok(borrow)
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let mut wallet_balances = HashMap::with_capacity(balances.wallet.len());
    for balance in &balances.wallet {
        *wallet_balances.entry(balance.symbol.clone()).or_insert(0.0) +=
            human_units(balance.balance, balance.decimals)?;
    }

    Ok(LoadedAccount {
        reserves,
        supplies,
        borrows,
        wallet_balances,
    })
}

/// Builds repayment terms for the `rate_mode` debt of `symbol`.
///
/// Elapsed days run from the reserve's last index update to `now` (seconds).
/// Amounts are in units of the underlying, valued with the feed's price of `symbol`.
pub async fn load_repay_terms(
    reader: &dyn LedgerReader,
    prices: &dyn PriceFeed,
    owner: &str,
    symbol: &str,
    rate_mode: RateMode,
    funding_source: FundingSource,
    now: u64,
) -> Result<RepayTerms, Error> {
    let config = reader.reserve(symbol).await?;
    let reserve = Reserve::from_configuration(&config)?;
    let balances = reader.account(owner).await?;

    let mut outstanding_debt = 0.0;
    for debt in balances
        .debts
        .iter()
        .filter(|debt| debt.symbol == symbol && debt.rate_mode == rate_mode)
    {
        outstanding_debt += human_units(debt.balance, debt.decimals)?;
    }

    let mut available_balance = None;
    match funding_source {
        FundingSource::Wallet => {
            for balance in balances.wallet.iter().filter(|b| b.symbol == symbol) {
                *available_balance.get_or_insert(0.0) +=
                    human_units(balance.balance, balance.decimals)?;
            }
        }
        FundingSource::Receipt => {
            for supply in balances.supplies.iter().filter(|s| s.symbol == symbol) {
                *available_balance.get_or_insert(0.0) +=
                    human_units(supply.balance, supply.decimals)?;
            }
        }
    }

    Ok(RepayTerms {
        outstanding_debt,
        annual_rate: reserve.borrow_rate(rate_mode),
        days_elapsed: RepayTerms::days_elapsed_since(config.last_update_timestamp, now),
        funding_source,
        available_balance,
        price_usd: prices.price_usd(symbol),
    })
}
