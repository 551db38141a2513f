use serde::{Deserialize, Serialize};

/// Smallest deposit, borrow or repay accepted, USD
pub const MIN_AMOUNT_USD: f64 = 0.01;
/// Largest single repayment accepted, USD
pub const MAX_REPAY_USD: f64 = 100_000.0;
/// Share of the daily limit after which a warning is attached
pub const DAILY_WARNING_FRACTION: f64 = 0.8;
/// Share of the per transaction limit after which a deposit is flagged as large
pub const LARGE_DEPOSIT_FRACTION: f64 = 0.5;
/// Projected health factors below this get a monitoring warning
pub const LOW_HEALTH_FACTOR: f64 = 1.5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionTier {
    #[default]
    Starter,
    Growth,
    Premium,
}

/// USD limits of a tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierLimits {
    pub label: &'static str,
    pub per_tx_limit_usd: f64,
    pub daily_limit_usd: f64,
    pub max_borrow_usd: f64,
}

const STARTER: TierLimits = TierLimits {
    label: "Starter",
    per_tx_limit_usd: 100.0,
    daily_limit_usd: 500.0,
    max_borrow_usd: 50.0,
};

const GROWTH: TierLimits = TierLimits {
    label: "Growth",
    per_tx_limit_usd: 1_000.0,
    daily_limit_usd: 5_000.0,
    max_borrow_usd: 500.0,
};

const PREMIUM: TierLimits = TierLimits {
    label: "Premium",
    per_tx_limit_usd: 10_000.0,
    daily_limit_usd: 50_000.0,
    max_borrow_usd: 5_000.0,
};

impl TransactionTier {
    pub fn limits(self) -> TierLimits {
        match self {
            TransactionTier::Starter => STARTER,
            TransactionTier::Growth => GROWTH,
            TransactionTier::Premium => PREMIUM,
        }
    }
}

/// Whole dollars with thousands separators, `1234.6` is `1,235`
pub fn format_usd(amount: f64) -> String {
    let rounded = format!("{:.0}", amount.abs());
    let mut grouped = String::with_capacity(rounded.len() + rounded.len() / 3);

    for (i, digit) in rounded.chars().enumerate() {
        if i > 0 && (rounded.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if amount < 0.0 && rounded != "0" {
        format!("-{grouped}")
    } else {
        grouped
    }
}
