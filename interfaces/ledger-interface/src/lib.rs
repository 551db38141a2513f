use async_trait::async_trait;
use types::account_balances::AccountBalances;
use types::error::LedgerError;
use types::ledger_call::LedgerCall;
use types::reserve_configuration::ReserveConfiguration;
use types::tx_hash::TxHash;

pub mod types;

/// Read side of the lending pool ledger
#[async_trait]
pub trait LedgerReader: Send + Sync {
    /// Returns risk and rate parameters of the reserve
    async fn reserve(&self, symbol: &str) -> Result<ReserveConfiguration, LedgerError>;

    /// Returns raw supply and borrow balances of the account
    async fn account(&self, owner: &str) -> Result<AccountBalances, LedgerError>;

    /// Returns current allowance of `owner` towards `spender` for the reserve underlying token
    async fn allowance(&self, owner: &str, symbol: &str, spender: &str)
        -> Result<i128, LedgerError>;
}

/// Write side of the lending pool ledger. Signing happens behind this trait.
#[async_trait]
pub trait LedgerWriter: Send + Sync {
    /// Signs and submits the call on behalf of `from`
    async fn submit(&self, from: &str, call: LedgerCall) -> Result<TxHash, LedgerError>;

    /// Resolves once the transaction is included, fails when it reverted
    async fn wait_for_confirmation(&self, tx: &TxHash) -> Result<(), LedgerError>;
}
