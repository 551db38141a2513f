use std::time::Duration;

use ledger_interface::types::rate_mode::RateMode;
use ledger_interface::types::tx_hash::TxHash;
use risk_service_interface::types::action_type::ActionType;
use serde::Serialize;

use crate::types::repayment::{FundingSource, RepayTerms};

/// Serialization key of the orchestrator, one in-flight action per key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionKey {
    pub wallet: String,
    pub symbol: String,
}

impl ActionKey {
    pub fn new(wallet: &str, symbol: &str) -> Self {
        Self {
            wallet: wallet.to_ascii_lowercase(),
            symbol: symbol.to_owned(),
        }
    }
}

/// Debt changing action requested by the user, amount in units of the underlying
#[derive(Debug, Clone, PartialEq)]
pub struct ActionRequest {
    pub action_type: ActionType,
    pub reserve_symbol: String,
    pub amount: f64,
    pub wallet_address: String,
    pub rate_mode: RateMode,
    pub funding_source: FundingSource,
    /// Checked locally before any network call when present
    pub repay_terms: Option<RepayTerms>,
    /// Overrides the configured bound of each network call
    pub timeout: Option<Duration>,
}

impl ActionRequest {
    fn new(action_type: ActionType, wallet: &str, symbol: &str, amount: f64) -> Self {
        Self {
            action_type,
            reserve_symbol: symbol.to_owned(),
            amount,
            wallet_address: wallet.to_owned(),
            rate_mode: RateMode::default(),
            funding_source: FundingSource::default(),
            repay_terms: None,
            timeout: None,
        }
    }

    pub fn deposit(wallet: &str, symbol: &str, amount: f64) -> Self {
        Self::new(ActionType::Deposit, wallet, symbol, amount)
    }

    pub fn borrow(wallet: &str, symbol: &str, amount: f64, rate_mode: RateMode) -> Self {
        Self {
            rate_mode,
            ..Self::new(ActionType::Borrow, wallet, symbol, amount)
        }
    }

    pub fn repay(wallet: &str, symbol: &str, amount: f64, terms: RepayTerms) -> Self {
        Self {
            funding_source: terms.funding_source,
            repay_terms: Some(terms),
            ..Self::new(ActionType::Repay, wallet, symbol, amount)
        }
    }

    pub fn with_rate_mode(mut self, rate_mode: RateMode) -> Self {
        self.rate_mode = rate_mode;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn key(&self) -> ActionKey {
        ActionKey::new(&self.wallet_address, &self.reserve_symbol)
    }

    /// Deposit and borrow go through the allowance check, repay does not
    pub fn requires_allowance(&self) -> bool {
        matches!(self.action_type, ActionType::Deposit | ActionType::Borrow)
    }
}

/// Outcome of a confirmed action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionReceipt {
    pub action_type: ActionType,
    pub reserve_symbol: String,
    pub tx_hash: TxHash,
    pub approval_tx: Option<TxHash>,
    /// Non blocking remarks of the risk service
    pub warnings: Vec<String>,
}
