pub mod account_balances;
pub mod error;
pub mod ledger_call;
pub mod rate_mode;
pub mod reserve_configuration;
pub mod tx_hash;
