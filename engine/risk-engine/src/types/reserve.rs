use common::FixedI128;
use ledger_interface::types::error::LedgerError;
use ledger_interface::types::rate_mode::RateMode;
use ledger_interface::types::reserve_configuration::ReserveConfiguration;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Protocol parameters of one asset, fractions and annualized decimal rates.
/// Immutable for a refresh cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ReserveParams")]
pub struct Reserve {
    pub symbol: String,
    pub loan_to_value: f64,
    pub liquidation_threshold: f64,
    pub variable_borrow_rate: f64,
    pub stable_borrow_rate: f64,
}

/// Unchecked wire form, deserialized reserves pass through [`Reserve::new`]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReserveParams {
    symbol: String,
    loan_to_value: f64,
    liquidation_threshold: f64,
    variable_borrow_rate: f64,
    stable_borrow_rate: f64,
}

impl TryFrom<ReserveParams> for Reserve {
    type Error = Error;

    fn try_from(params: ReserveParams) -> Result<Self, Self::Error> {
        Self::new(
            params.symbol,
            params.loan_to_value,
            params.liquidation_threshold,
            params.variable_borrow_rate,
            params.stable_borrow_rate,
        )
    }
}

impl Reserve {
    pub fn new(
        symbol: impl Into<String>,
        loan_to_value: f64,
        liquidation_threshold: f64,
        variable_borrow_rate: f64,
        stable_borrow_rate: f64,
    ) -> Result<Self, Error> {
        let reserve = Self {
            symbol: symbol.into(),
            loan_to_value,
            liquidation_threshold,
            variable_borrow_rate,
            stable_borrow_rate,
        };
        reserve.validate()?;

        Ok(reserve)
    }

    /// Converts pool units: basis points into fractions, fixed rates into decimals
    pub fn from_configuration(config: &ReserveConfiguration) -> Result<Self, Error> {
        let loan_to_value =
            FixedI128::from_percentage(config.ltv).ok_or(LedgerError::MathOverflow)?;
        let liquidation_threshold = FixedI128::from_percentage(config.liquidation_threshold)
            .ok_or(LedgerError::MathOverflow)?;

        Self::new(
            config.symbol.clone(),
            loan_to_value.to_f64(),
            liquidation_threshold.to_f64(),
            FixedI128::from_inner(config.variable_borrow_rate).to_f64(),
            FixedI128::from_inner(config.stable_borrow_rate).to_f64(),
        )
    }

    pub fn validate(&self) -> Result<(), Error> {
        let invalid = |reason: &'static str| Error::InvalidReserve {
            symbol: self.symbol.clone(),
            reason,
        };

        if !(self.loan_to_value > 0.0 && self.loan_to_value < 1.0) {
            return Err(invalid("loan to value must be within (0, 1)"));
        }
        if !(self.liquidation_threshold > 0.0 && self.liquidation_threshold < 1.0) {
            return Err(invalid("liquidation threshold must be within (0, 1)"));
        }
        if self.liquidation_threshold < self.loan_to_value {
            return Err(invalid("liquidation threshold is below loan to value"));
        }
        let rates = [self.variable_borrow_rate, self.stable_borrow_rate];
        if rates.iter().any(|rate| !rate.is_finite() || *rate < 0.0) {
            return Err(invalid("borrow rates must be finite and non negative"));
        }

        Ok(())
    }

    pub fn borrow_rate(&self, mode: RateMode) -> f64 {
        match mode {
            RateMode::Variable => self.variable_borrow_rate,
            RateMode::Stable => self.stable_borrow_rate,
        }
    }
}
