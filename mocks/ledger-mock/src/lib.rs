mod storage;

use std::time::Duration;

use async_trait::async_trait;
use ledger_interface::types::account_balances::AccountBalances;
use ledger_interface::types::error::LedgerError;
use ledger_interface::types::ledger_call::LedgerCall;
use ledger_interface::types::reserve_configuration::ReserveConfiguration;
use ledger_interface::types::tx_hash::TxHash;
use ledger_interface::{LedgerReader, LedgerWriter};
use parking_lot::Mutex;

use crate::storage::{owner_key, State};

/// Reserve configuration with 5% variable and 7% stable rates, active and borrowable
pub fn reserve_configuration(
    symbol: &str,
    decimals: u32,
    ltv: u32,
    liquidation_threshold: u32,
) -> ReserveConfiguration {
    ReserveConfiguration {
        symbol: symbol.to_owned(),
        decimals,
        ltv,
        liquidation_threshold,
        variable_borrow_rate: 50_000_000,
        stable_borrow_rate: 70_000_000,
        last_update_timestamp: 0,
        is_active: true,
        borrowing_enabled: true,
    }
}

/// Ledger kept in memory. Approvals update allowances, other calls only get recorded.
#[derive(Debug, Default)]
pub struct LedgerMock {
    state: Mutex<State>,
}

impl LedgerMock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reserve(self, config: ReserveConfiguration) -> Self {
        self.set_reserve(config);
        self
    }

    pub fn set_reserve(&self, config: ReserveConfiguration) {
        self.state
            .lock()
            .reserves
            .insert(config.symbol.clone(), config);
    }

    pub fn set_account(&self, owner: &str, balances: AccountBalances) {
        self.state.lock().accounts.insert(owner_key(owner), balances);
    }

    pub fn set_allowance(&self, owner: &str, symbol: &str, spender: &str, amount: i128) {
        self.state.lock().allowances.insert(
            (owner_key(owner), symbol.to_owned(), spender.to_owned()),
            amount,
        );
    }

    /// Makes every later call of `method` fail, `"approve"`, `"reserve"`, `"account"` and so on
    pub fn fail_method(&self, method: &'static str, error: LedgerError) {
        self.state.lock().failures.insert(method, error);
    }

    pub fn fail_confirmation(&self, error: LedgerError) {
        self.state.lock().confirmation_failure = Some(error);
    }

    pub fn clear_failures(&self) {
        let mut state = self.state.lock();
        state.failures.clear();
        state.confirmation_failure = None;
    }

    /// Delays every submission, paused test time advances through it
    pub fn set_submit_delay(&self, delay: Duration) {
        self.state.lock().submit_delay = Some(delay);
    }

    /// Delays reserve and account reads, the lock is not held while waiting
    pub fn set_read_delay(&self, delay: Duration) {
        self.state.lock().read_delay = Some(delay);
    }

    async fn read_latency(&self) {
        let delay = self.state.lock().read_delay;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    pub fn submitted(&self) -> Vec<(String, LedgerCall)> {
        self.state.lock().submitted.clone()
    }

    pub fn confirmed(&self) -> Vec<TxHash> {
        self.state.lock().confirmed.clone()
    }
}

#[async_trait]
impl LedgerReader for LedgerMock {
    async fn reserve(&self, symbol: &str) -> Result<ReserveConfiguration, LedgerError> {
        self.read_latency().await;
        let state = self.state.lock();
        state.check("reserve")?;

        state
            .reserves
            .get(symbol)
            .cloned()
            .ok_or_else(|| LedgerError::UnknownReserve(symbol.to_owned()))
    }

    async fn account(&self, owner: &str) -> Result<AccountBalances, LedgerError> {
        self.read_latency().await;
        let state = self.state.lock();
        state.check("account")?;

        Ok(state
            .accounts
            .get(&owner_key(owner))
            .cloned()
            .unwrap_or_default())
    }

    async fn allowance(
        &self,
        owner: &str,
        symbol: &str,
        spender: &str,
    ) -> Result<i128, LedgerError> {
        let state = self.state.lock();
        state.check("allowance")?;

        let key = (owner_key(owner), symbol.to_owned(), spender.to_owned());
        Ok(state.allowances.get(&key).copied().unwrap_or(0))
    }
}

#[async_trait]
impl LedgerWriter for LedgerMock {
    async fn submit(&self, from: &str, call: LedgerCall) -> Result<TxHash, LedgerError> {
        let delay = self.state.lock().submit_delay;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let mut state = self.state.lock();
        state.check(call.method())?;

        if let LedgerCall::Approve {
            symbol,
            spender,
            amount,
        } = &call
        {
            state
                .allowances
                .insert((owner_key(from), symbol.clone(), spender.clone()), *amount);
        }

        state.submitted.push((from.to_owned(), call));

        Ok(state.next_tx_hash())
    }

    async fn wait_for_confirmation(&self, tx: &TxHash) -> Result<(), LedgerError> {
        let mut state = self.state.lock();
        if let Some(error) = state.confirmation_failure.clone() {
            return Err(error);
        }

        state.confirmed.push(tx.clone());

        Ok(())
    }
}
