use serde::{Deserialize, Serialize};

use super::rate_mode::RateMode;

/// Pool call submitted through the wallet, amounts in raw units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "camelCase")]
pub enum LedgerCall {
    Approve {
        symbol: String,
        spender: String,
        amount: i128,
    },
    Deposit {
        symbol: String,
        amount: i128,
        on_behalf_of: String,
    },
    Borrow {
        symbol: String,
        amount: i128,
        rate_mode: RateMode,
        on_behalf_of: String,
    },
    Repay {
        symbol: String,
        amount: i128,
        rate_mode: RateMode,
        on_behalf_of: String,
        /// Repay with receipt tokens instead of wallet funds
        with_receipt: bool,
    },
}

impl LedgerCall {
    pub fn symbol(&self) -> &str {
        match self {
            LedgerCall::Approve { symbol, .. }
            | LedgerCall::Deposit { symbol, .. }
            | LedgerCall::Borrow { symbol, .. }
            | LedgerCall::Repay { symbol, .. } => symbol,
        }
    }

    pub fn method(&self) -> &'static str {
        match self {
            LedgerCall::Approve { .. } => "approve",
            LedgerCall::Deposit { .. } => "deposit",
            LedgerCall::Borrow { .. } => "borrow",
            LedgerCall::Repay { .. } => "repay",
        }
    }
}
