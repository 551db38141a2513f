pub mod account_summary;
pub mod aggregate_positions;
pub mod load_account;
pub mod preview_borrow;
pub mod repay;
pub mod risk_metrics;
pub mod stress_test;
pub mod utils;
