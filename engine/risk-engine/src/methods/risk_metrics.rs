use super::utils::non_negative;
use crate::types::risk_inputs::RiskInputs;
use crate::types::risk_metrics::RiskMetrics;
use crate::types::risk_tier::RiskTier;

/// `collateral * threshold / debt`, infinite without debt
pub fn health_factor(
    collateral_value_usd: f64,
    debt_value_usd: f64,
    liquidation_threshold: f64,
) -> f64 {
    let debt = non_negative(debt_value_usd);
    if debt > 0.0 {
        non_negative(collateral_value_usd) * non_negative(liquidation_threshold) / debt
    } else {
        f64::INFINITY
    }
}

/// Debt as percent of collateral, zero without collateral
pub fn ltv_percent(debt_value_usd: f64, collateral_value_usd: f64) -> f64 {
    let collateral = non_negative(collateral_value_usd);
    if collateral > 0.0 {
        non_negative(debt_value_usd) / collateral * 100.0
    } else {
        0.0
    }
}

pub fn borrow_capacity_usd(collateral_value_usd: f64, loan_to_value: f64) -> f64 {
    non_negative(collateral_value_usd) * non_negative(loan_to_value)
}

pub fn available_to_borrow_usd(borrow_capacity_usd: f64, debt_value_usd: f64) -> f64 {
    (non_negative(borrow_capacity_usd) - non_negative(debt_value_usd)).max(0.0)
}

pub fn risk_metrics(inputs: &RiskInputs) -> RiskMetrics {
    let health_factor = health_factor(
        inputs.collateral_value_usd,
        inputs.debt_value_usd,
        inputs.liquidation_threshold,
    );
    let borrow_capacity_usd = borrow_capacity_usd(inputs.collateral_value_usd, inputs.loan_to_value);

    RiskMetrics {
        health_factor,
        ltv_percent: ltv_percent(inputs.debt_value_usd, inputs.collateral_value_usd),
        borrow_capacity_usd,
        available_to_borrow_usd: available_to_borrow_usd(
            borrow_capacity_usd,
            inputs.debt_value_usd,
        ),
        tier: RiskTier::from_health_factor(health_factor),
    }
}
