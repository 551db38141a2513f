use std::collections::HashMap;
use std::time::Duration;

use ledger_interface::types::account_balances::AccountBalances;
use ledger_interface::types::error::LedgerError;
use ledger_interface::types::ledger_call::LedgerCall;
use ledger_interface::types::reserve_configuration::ReserveConfiguration;
use ledger_interface::types::tx_hash::TxHash;

/// `(owner, symbol, spender)`
pub type AllowanceKey = (String, String, String);

#[derive(Debug, Default)]
pub struct State {
    pub reserves: HashMap<String, ReserveConfiguration>,
    pub accounts: HashMap<String, AccountBalances>,
    pub allowances: HashMap<AllowanceKey, i128>,
    /// Method name to the error it fails with
    pub failures: HashMap<&'static str, LedgerError>,
    pub confirmation_failure: Option<LedgerError>,
    pub submit_delay: Option<Duration>,
    pub read_delay: Option<Duration>,
    pub submitted: Vec<(String, LedgerCall)>,
    pub confirmed: Vec<TxHash>,
    pub next_tx: u64,
}

impl State {
    pub fn check(&self, method: &str) -> Result<(), LedgerError> {
        match self.failures.get(method) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    pub fn next_tx_hash(&mut self) -> TxHash {
        self.next_tx += 1;
        TxHash(format!("0x{:064x}", self.next_tx))
    }
}

pub fn owner_key(owner: &str) -> String {
    owner.to_ascii_lowercase()
}
