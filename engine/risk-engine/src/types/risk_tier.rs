use std::fmt;

use serde::{Deserialize, Serialize};

/// Risk classification of a health factor, ordered from the most dangerous to the safest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    Liquidate,
    AtRisk,
    TopUp,
    Warn,
    Safe,
}

/// `(lower bound exclusive, tier)` scanned top down, anything at or below the last bound liquidates
pub const TIER_LADDER: [(f64, RiskTier); 4] = [
    (1.5, RiskTier::Safe),
    (1.2, RiskTier::Warn),
    (1.05, RiskTier::TopUp),
    (1.0, RiskTier::AtRisk),
];

impl RiskTier {
    pub fn from_health_factor(health_factor: f64) -> Self {
        classify(&TIER_LADDER, health_factor)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskTier::Liquidate => "LIQUIDATE",
            RiskTier::AtRisk => "AT_RISK",
            RiskTier::TopUp => "TOP_UP",
            RiskTier::Warn => "WARN",
            RiskTier::Safe => "SAFE",
        }
    }
}

/// Ladder must be sorted by descending bound
pub fn classify(ladder: &[(f64, RiskTier)], health_factor: f64) -> RiskTier {
    if !health_factor.is_finite() {
        return RiskTier::Safe;
    }

    ladder
        .iter()
        .find(|(bound, _)| health_factor > *bound)
        .map(|(_, tier)| *tier)
        .unwrap_or(RiskTier::Liquidate)
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
