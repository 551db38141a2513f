use common::{FixedI128, DAYS_IN_YEAR};

use super::risk_metrics::{health_factor, ltv_percent};
use super::utils::non_negative;
use super::utils::validation::{
    require_finite_positive_amount, require_gte_minimum, require_lte_balance, require_lte_debt,
};
use crate::error::Error;
use crate::types::repayment::{RepayPreview, RepayTerms, RepaymentAllocation};
use crate::types::risk_inputs::RiskInputs;
use crate::types::risk_tier::RiskTier;

/// Simple, non compounding interest: `principal * rate / 365 * days`. Never negative.
pub fn accrued_interest(
    principal_outstanding: f64,
    annual_rate: f64,
    days_elapsed: f64,
) -> Result<FixedI128, Error> {
    let principal =
        FixedI128::from_f64(non_negative(principal_outstanding)).ok_or(Error::MathOverflow)?;
    let rate = FixedI128::from_f64(non_negative(annual_rate)).ok_or(Error::MathOverflow)?;
    let days = FixedI128::from_f64(non_negative(days_elapsed)).ok_or(Error::MathOverflow)?;

    principal
        .checked_mul(rate)
        .and_then(|interest| interest.checked_mul(days))
        .and_then(|interest| interest.div_inner(DAYS_IN_YEAR))
        .ok_or(Error::MathOverflow)
}

/// Checks run in order and stop at the first failure. Passing changes nothing.
///
/// `amount` is in units of the underlying; it is valued with the terms' price
/// before being held against the USD floor.
pub fn validate_repay(terms: &RepayTerms, amount: f64, min_repay_usd: f64) -> Result<(), Error> {
    require_finite_positive_amount(amount)?;
    if let Some(amount_usd) = terms.value_usd(amount) {
        require_gte_minimum(amount_usd, min_repay_usd)?;
    }
    require_lte_debt(amount, terms.outstanding_debt)?;
    if let Some(available) = terms.available_balance {
        require_lte_balance(amount, available)?;
    }

    Ok(())
}

/// Splits the repayment interest first
pub fn allocate_repayment(terms: &RepayTerms, amount: f64) -> Result<RepaymentAllocation, Error> {
    require_finite_positive_amount(amount)?;

    let repay_amount = FixedI128::from_f64(amount).ok_or(Error::MathOverflow)?;
    let accrued_interest = accrued_interest(
        terms.outstanding_debt,
        terms.annual_rate,
        terms.days_elapsed,
    )?;

    let interest_portion = repay_amount.min(accrued_interest.max(FixedI128::ZERO));
    let principal_portion = repay_amount
        .checked_sub(interest_portion)
        .ok_or(Error::MathOverflow)?
        .max(FixedI128::ZERO);

    Ok(RepaymentAllocation {
        accrued_interest,
        interest_portion,
        principal_portion,
    })
}

pub fn plan_repayment(
    terms: &RepayTerms,
    amount: f64,
    min_repay_usd: f64,
) -> Result<RepaymentAllocation, Error> {
    validate_repay(terms, amount, min_repay_usd)?;
    allocate_repayment(terms, amount)
}

/// Metrics after the whole amount, interest and principal alike, leaves the debt figure
pub fn preview_repay(inputs: &RiskInputs, repay_amount_usd: f64) -> RepayPreview {
    let repay_amount_usd = non_negative(repay_amount_usd);
    let debt_before = non_negative(inputs.debt_value_usd);
    let debt_value_usd_after = (debt_before - repay_amount_usd).max(0.0);

    let health_factor_before = health_factor(
        inputs.collateral_value_usd,
        debt_before,
        inputs.liquidation_threshold,
    );
    let health_factor_after = health_factor(
        inputs.collateral_value_usd,
        debt_value_usd_after,
        inputs.liquidation_threshold,
    );

    RepayPreview {
        repay_amount_usd,
        debt_value_usd_after,
        health_factor_before,
        health_factor_after,
        ltv_percent_before: ltv_percent(debt_before, inputs.collateral_value_usd),
        ltv_percent_after: ltv_percent(debt_value_usd_after, inputs.collateral_value_usd),
        tier_before: RiskTier::from_health_factor(health_factor_before),
        tier_after: RiskTier::from_health_factor(health_factor_after),
    }
}
