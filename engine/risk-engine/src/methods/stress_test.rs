use super::risk_metrics::{borrow_capacity_usd, health_factor, ltv_percent};
use super::utils::non_negative;
use crate::error::Error;
use crate::types::risk_inputs::RiskInputs;
use crate::types::risk_tier::RiskTier;
use crate::types::stress_result::StressResult;
use crate::types::stress_scenario::StressScenario;

/// Keeps stressed collateral strictly positive under the deepest shock
pub const STRESSED_COLLATERAL_FLOOR_USD: f64 = 0.01;

pub const DEFAULT_SHOCKS: [f64; 3] = [-0.2, -0.3, -0.5];

/// Projects metrics under a collateral shock. Debt is held fixed, nothing is mutated.
pub fn simulate_stress(inputs: &RiskInputs, scenario: StressScenario) -> StressResult {
    let shock_fraction = scenario.shock_fraction();
    let stressed_collateral_usd = (non_negative(inputs.collateral_value_usd)
        * (1.0 + shock_fraction))
        .max(STRESSED_COLLATERAL_FLOOR_USD);
    let debt_value_usd = non_negative(inputs.debt_value_usd);

    let cap_usd = borrow_capacity_usd(stressed_collateral_usd, inputs.loan_to_value);
    let health_factor = health_factor(
        stressed_collateral_usd,
        debt_value_usd,
        inputs.liquidation_threshold,
    );

    StressResult {
        shock_fraction,
        stressed_collateral_usd,
        debt_value_usd,
        cap_usd,
        ltv_percent: ltv_percent(debt_value_usd, stressed_collateral_usd),
        health_factor,
        headroom_usd: (cap_usd - debt_value_usd).max(0.0),
        tier: RiskTier::from_health_factor(health_factor),
    }
}

/// Runs every shock against the same inputs, fails on the first out of range shock
pub fn stress_test(inputs: &RiskInputs, shocks: &[f64]) -> Result<Vec<StressResult>, Error> {
    shocks
        .iter()
        .map(|shock| StressScenario::new(*shock).map(|scenario| simulate_stress(inputs, scenario)))
        .collect()
}
