use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Hypothetical move of collateral value, debt is held fixed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ScenarioParams")]
pub struct StressScenario {
    shock_fraction: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScenarioParams {
    shock_fraction: f64,
}

impl TryFrom<ScenarioParams> for StressScenario {
    type Error = Error;

    fn try_from(params: ScenarioParams) -> Result<Self, Self::Error> {
        Self::new(params.shock_fraction)
    }
}

impl StressScenario {
    pub const MIN_SHOCK: f64 = -0.5;
    pub const MAX_SHOCK: f64 = 0.2;

    pub fn new(shock_fraction: f64) -> Result<Self, Error> {
        if !(Self::MIN_SHOCK..=Self::MAX_SHOCK).contains(&shock_fraction) {
            return Err(Error::ShockOutOfRange(shock_fraction));
        }

        Ok(Self { shock_fraction })
    }

    pub fn shock_fraction(&self) -> f64 {
        self.shock_fraction
    }
}
