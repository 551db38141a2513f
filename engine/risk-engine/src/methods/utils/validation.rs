use crate::error::Error;

pub fn require_finite_positive_amount(amount: f64) -> Result<(), Error> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidAmount)
    }
}

/// Both sides in USD
pub fn require_gte_minimum(amount_usd: f64, minimum_usd: f64) -> Result<(), Error> {
    if amount_usd >= minimum_usd {
        Ok(())
    } else {
        Err(Error::BelowMinimum {
            amount_usd,
            minimum_usd,
        })
    }
}

pub fn require_lte_debt(amount: f64, debt: f64) -> Result<(), Error> {
    if amount <= debt {
        Ok(())
    } else {
        Err(Error::ExceedsDebt { debt })
    }
}

pub fn require_lte_balance(amount: f64, available: f64) -> Result<(), Error> {
    if amount <= available {
        Ok(())
    } else {
        Err(Error::InsufficientBalance { available })
    }
}
