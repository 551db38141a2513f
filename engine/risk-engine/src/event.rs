use ledger_interface::types::tx_hash::TxHash;
use risk_service_interface::types::action_type::ActionType;
use tracing::{debug, info, warn};

use crate::error::Error;
use crate::orchestrator::action::ActionKey;
use crate::orchestrator::state::ActionState;

pub(crate) fn state_changed(key: &ActionKey, from: ActionState, to: ActionState) {
    debug!(wallet = %key.wallet, reserve = %key.symbol, %from, %to, "action state changed");
}

pub(crate) fn busy(key: &ActionKey) {
    warn!(wallet = %key.wallet, reserve = %key.symbol, "action rejected, reserve is busy");
}

pub(crate) fn validation_rejected(key: &ActionKey, action: ActionType, reason: &str) {
    warn!(wallet = %key.wallet, reserve = %key.symbol, %action, reason, "risk service rejected action");
}

pub(crate) fn approval_submitted(key: &ActionKey, tx: &TxHash) {
    info!(wallet = %key.wallet, reserve = %key.symbol, %tx, "approval submitted");
}

pub(crate) fn confirmed(key: &ActionKey, action: ActionType, tx: &TxHash) {
    info!(wallet = %key.wallet, reserve = %key.symbol, %action, %tx, "action submitted");
}

pub(crate) fn failed(key: &ActionKey, action: ActionType, error: &Error) {
    warn!(wallet = %key.wallet, reserve = %key.symbol, %action, kind = %error.kind(), %error, "action failed");
}

pub(crate) fn missing_price(symbol: &str) {
    warn!(reserve = symbol, "no price for reserve, valued at zero");
}

pub(crate) fn missing_reserve(symbol: &str) {
    warn!(reserve = symbol, "no reserve parameters, risk limits set to zero");
}
