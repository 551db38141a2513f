
mod orchestrator;
mod reserve;
mod risk_metrics;
