pub mod account_summary;
pub mod aggregated_positions;
pub mod borrow;
pub mod borrow_preview;
pub mod health_factor;
pub mod position;
pub mod repayment;
pub mod reserve;
pub mod risk_inputs;
pub mod risk_metrics;
pub mod risk_tier;
pub mod stress_result;
pub mod stress_scenario;
pub mod supply;
