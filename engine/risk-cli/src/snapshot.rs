use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use ledger_interface::types::rate_mode::RateMode;
use risk_engine::methods::aggregate_positions::aggregate_positions;
use risk_engine::types::aggregated_positions::AggregatedPositions;
use risk_engine::types::borrow::Borrow;
use risk_engine::types::repayment::{FundingSource, RepayTerms};
use risk_engine::types::reserve::Reserve;
use risk_engine::types::supply::Supply;
use serde::Deserialize;

/// Account state exported from the app, amounts in units of the underlying
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub reserves: Vec<Reserve>,
    #[serde(default)]
    pub supplies: Vec<Supply>,
    #[serde(default)]
    pub borrows: Vec<Borrow>,
    pub prices: HashMap<String, f64>,
    #[serde(default)]
    pub wallet_balances: HashMap<String, f64>,
}

impl Snapshot {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse snapshot {}", path.display()))
    }

    pub fn aggregate(&self) -> AggregatedPositions {
        aggregate_positions(
            &self.reserves,
            &self.supplies,
            &self.borrows,
            &self.prices,
            Some(&self.wallet_balances),
        )
    }

    pub fn price(&self, symbol: &str) -> Result<f64> {
        self.prices
            .get(symbol)
            .copied()
            .with_context(|| format!("no price for {symbol}"))
    }

    /// Terms of the `rate_mode` debt of `symbol`, balance taken from the funding source
    pub fn repay_terms(
        &self,
        symbol: &str,
        rate_mode: RateMode,
        funding_source: FundingSource,
        days_elapsed: f64,
    ) -> Result<RepayTerms> {
        let reserve = self
            .reserves
            .iter()
            .find(|reserve| reserve.symbol == symbol)
            .with_context(|| format!("unknown reserve {symbol}"))?;

        let outstanding_debt = self
            .borrows
            .iter()
            .filter(|borrow| borrow.symbol == symbol && borrow.rate_mode == rate_mode)
            .map(|borrow| borrow.amount.max(0.0))
            .sum();

        let available_balance = match funding_source {
            FundingSource::Wallet => self.wallet_balances.get(symbol).copied(),
            FundingSource::Receipt => {
                let rows: Vec<f64> = self
                    .supplies
                    .iter()
                    .filter(|supply| supply.symbol == symbol)
                    .map(|supply| supply.quantity.max(0.0))
                    .collect();
                (!rows.is_empty()).then(|| rows.iter().sum())
            }
        };

        Ok(RepayTerms {
            outstanding_debt,
            annual_rate: reserve.borrow_rate(rate_mode),
            days_elapsed,
            funding_source,
            available_balance,
            price_usd: self.prices.get(symbol).copied(),
        })
    }
}
