use std::fmt;

use ledger_interface::types::error::LedgerError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("amount must be a finite positive number")]
    InvalidAmount,

    #[error("repayment of ${amount_usd} is below the minimum of ${minimum_usd}")]
    BelowMinimum { amount_usd: f64, minimum_usd: f64 },

    #[error("amount exceeds the outstanding debt of {debt}")]
    ExceedsDebt { debt: f64 },

    #[error("amount exceeds the available balance of {available}")]
    InsufficientBalance { available: f64 },

    #[error("rejected by risk service: {0}")]
    ValidationRejected(String),

    #[error("timed out")]
    Timeout,

    #[error("approval failed: {0}")]
    ApprovalFailed(String),

    #[error("submission failed: {0}")]
    SubmissionFailed(String),

    #[error("another action is in flight for this reserve")]
    Busy,

    #[error("cancelled while validating")]
    Cancelled,

    #[error("shock {0} is outside of [-0.5, 0.2]")]
    ShockOutOfRange(f64),

    #[error("math overflow")]
    MathOverflow,

    #[error("invalid reserve {symbol}: {reason}")]
    InvalidReserve { symbol: String, reason: &'static str },

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidAmount,
    BelowMinimum,
    ExceedsDebt,
    InsufficientBalance,
    ValidationRejected,
    Timeout,
    ApprovalFailed,
    SubmissionFailed,
    Busy,
    Cancelled,
    ShockOutOfRange,
    MathOverflow,
    InvalidReserve,
    Ledger,
}

/// Who has to act on an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Input was wrong, fix it and retry. Never reaches the network.
    Local,
    /// The risk service said no or did not answer in time
    Backend,
    /// The ledger failed the request, it has to be initiated again
    Ledger,
    /// Wait for the in-flight action to finish
    Concurrency,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidAmount => ErrorKind::InvalidAmount,
            Error::BelowMinimum { .. } => ErrorKind::BelowMinimum,
            Error::ExceedsDebt { .. } => ErrorKind::ExceedsDebt,
            Error::InsufficientBalance { .. } => ErrorKind::InsufficientBalance,
            Error::ValidationRejected(_) => ErrorKind::ValidationRejected,
            Error::Timeout => ErrorKind::Timeout,
            Error::ApprovalFailed(_) => ErrorKind::ApprovalFailed,
            Error::SubmissionFailed(_) => ErrorKind::SubmissionFailed,
            Error::Busy => ErrorKind::Busy,
            Error::Cancelled => ErrorKind::Cancelled,
            Error::ShockOutOfRange(_) => ErrorKind::ShockOutOfRange,
            Error::MathOverflow => ErrorKind::MathOverflow,
            Error::InvalidReserve { .. } => ErrorKind::InvalidReserve,
            Error::Ledger(_) => ErrorKind::Ledger,
        }
    }
}

impl ErrorKind {
    pub fn category(self) -> ErrorCategory {
        match self {
            ErrorKind::InvalidAmount
            | ErrorKind::BelowMinimum
            | ErrorKind::ExceedsDebt
            | ErrorKind::InsufficientBalance
            | ErrorKind::ShockOutOfRange
            | ErrorKind::MathOverflow
            | ErrorKind::Cancelled => ErrorCategory::Local,
            ErrorKind::ValidationRejected | ErrorKind::Timeout => ErrorCategory::Backend,
            ErrorKind::ApprovalFailed
            | ErrorKind::SubmissionFailed
            | ErrorKind::InvalidReserve
            | ErrorKind::Ledger => ErrorCategory::Ledger,
            ErrorKind::Busy => ErrorCategory::Concurrency,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidAmount => "INVALID_AMOUNT",
            ErrorKind::BelowMinimum => "BELOW_MINIMUM",
            ErrorKind::ExceedsDebt => "EXCEEDS_DEBT",
            ErrorKind::InsufficientBalance => "INSUFFICIENT_BALANCE",
            ErrorKind::ValidationRejected => "VALIDATION_REJECTED",
            ErrorKind::Timeout => "TIMEOUT",
            ErrorKind::ApprovalFailed => "APPROVAL_FAILED",
            ErrorKind::SubmissionFailed => "SUBMISSION_FAILED",
            ErrorKind::Busy => "BUSY",
            ErrorKind::Cancelled => "CANCELLED",
            ErrorKind::ShockOutOfRange => "SHOCK_OUT_OF_RANGE",
            ErrorKind::MathOverflow => "MATH_OVERFLOW",
            ErrorKind::InvalidReserve => "INVALID_RESERVE",
            ErrorKind::Ledger => "LEDGER",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
