use proptest::prelude::*;

use crate::methods::risk_metrics::*;
use crate::tests::sut::{assert_close, inputs};
use crate::types::risk_tier::RiskTier;

#[test]
fn should_be_infinite_without_debt() {
    for collateral in [0.0, 1.0, 10_000.0, f64::NAN] {
        let metrics = risk_metrics(&inputs(collateral, 0.0, 0.8, 0.85));

        assert_eq!(metrics.health_factor, f64::INFINITY);
        assert_eq!(metrics.tier, RiskTier::Safe);
    }
}

#[test]
fn should_write_infinite_health_factor_as_string() {
    let debt_free = serde_json::to_value(risk_metrics(&inputs(1_000.0, 0.0, 0.75, 0.8))).unwrap();
    assert_eq!(debt_free["healthFactor"], "Infinity");
    assert_eq!(debt_free["tier"], "SAFE");

    let indebted = serde_json::to_value(risk_metrics(&inputs(1_000.0, 400.0, 0.75, 0.8))).unwrap();
    assert_eq!(indebted["healthFactor"], 2.0);
}

#[test]
fn should_calculate_position_metrics() {
    let metrics = risk_metrics(&inputs(10_000.0, 6_000.0, 0.75, 0.8));

    assert_close(metrics.health_factor, 8_000.0 / 6_000.0);
    assert_eq!(metrics.tier, RiskTier::Warn);
    assert_close(metrics.ltv_percent, 60.0);
    assert_close(metrics.borrow_capacity_usd, 7_500.0);
    assert_close(metrics.available_to_borrow_usd, 1_500.0);
}

#[test]
fn should_not_go_below_zero_available_to_borrow() {
    assert_eq!(available_to_borrow_usd(7_500.0, 9_000.0), 0.0);
    assert_eq!(
        risk_metrics(&inputs(1_000.0, 2_000.0, 0.5, 0.6)).available_to_borrow_usd,
        0.0
    );
}

#[test]
fn should_guard_every_denominator() {
    assert_eq!(ltv_percent(500.0, 0.0), 0.0);
    assert_eq!(health_factor(1_000.0, 0.0, 0.8), f64::INFINITY);
    assert_eq!(health_factor(0.0, 100.0, 0.8), 0.0);
}

#[test]
fn should_treat_invalid_inputs_as_zero() {
    assert_eq!(ltv_percent(f64::NAN, 1_000.0), 0.0);
    assert_eq!(ltv_percent(-10.0, 1_000.0), 0.0);
    assert_eq!(health_factor(f64::NAN, 100.0, 0.8), 0.0);
    assert_eq!(health_factor(1_000.0, f64::NAN, 0.8), f64::INFINITY);
    assert_eq!(borrow_capacity_usd(-1_000.0, 0.8), 0.0);
    assert_eq!(borrow_capacity_usd(f64::INFINITY, 0.8), 0.0);

    let metrics = risk_metrics(&inputs(f64::NAN, f64::NAN, f64::NAN, f64::NAN));
    assert!(!metrics.ltv_percent.is_nan());
    assert!(!metrics.borrow_capacity_usd.is_nan());
    assert_eq!(metrics.tier, RiskTier::Safe);
}

proptest! {
    #[test]
    fn should_move_ltv_and_health_factor_in_opposite_directions(
        collateral in 1.0f64..1e9,
        threshold in 0.01f64..0.99,
        debt in 1.0f64..1e9,
        extra in 0.01f64..1e9,
    ) {
        let more_debt = debt + extra;

        prop_assert!(ltv_percent(more_debt, collateral) >= ltv_percent(debt, collateral));
        prop_assert!(
            health_factor(collateral, more_debt, threshold)
                <= health_factor(collateral, debt, threshold)
        );
    }
}
