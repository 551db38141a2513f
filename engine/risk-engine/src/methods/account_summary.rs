use super::risk_metrics::{
    available_to_borrow_usd, borrow_capacity_usd, health_factor, ltv_percent,
};
use super::stress_test::stress_test;
use super::utils::non_negative;
use crate::error::Error;
use crate::types::account_summary::AccountSummary;
use crate::types::position::Position;
use crate::types::risk_tier::RiskTier;
use crate::types::stress_result::StressResult;

pub fn account_summary(positions: &[Position]) -> AccountSummary {
    let mut collateral_value_usd = 0.0;
    let mut debt_value_usd = 0.0;
    let mut ltv_weighted_sum = 0.0;
    let mut threshold_weighted_sum = 0.0;

    for position in positions {
        let collateral = non_negative(position.collateral_value_usd);

        collateral_value_usd += collateral;
        debt_value_usd += non_negative(position.debt_value_usd);
        ltv_weighted_sum += collateral * non_negative(position.loan_to_value);
        threshold_weighted_sum += collateral * non_negative(position.liquidation_threshold);
    }

    let (weighted_loan_to_value, weighted_liquidation_threshold) = if collateral_value_usd > 0.0 {
        (
            ltv_weighted_sum / collateral_value_usd,
            threshold_weighted_sum / collateral_value_usd,
        )
    } else {
        (0.0, 0.0)
    };

    let borrow_capacity_usd = borrow_capacity_usd(collateral_value_usd, weighted_loan_to_value);
    let health_factor = health_factor(
        collateral_value_usd,
        debt_value_usd,
        weighted_liquidation_threshold,
    );

    AccountSummary {
        collateral_value_usd,
        debt_value_usd,
        weighted_loan_to_value,
        weighted_liquidation_threshold,
        borrow_capacity_usd,
        available_to_borrow_usd: available_to_borrow_usd(borrow_capacity_usd, debt_value_usd),
        ltv_percent: ltv_percent(debt_value_usd, collateral_value_usd),
        health_factor,
        tier: RiskTier::from_health_factor(health_factor),
    }
}

pub fn stress_test_account(
    summary: &AccountSummary,
    shocks: &[f64],
) -> Result<Vec<StressResult>, Error> {
    stress_test(&summary.risk_inputs(), shocks)
}
