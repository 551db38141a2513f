mod fixedi128;

pub use fixedi128::*;

/// Percent representation, 1% - 100, 100% - 10_000
pub const PERCENTAGE_FACTOR: u32 = 10_000;

/// Days in year used for simple interest accrual
pub const DAYS_IN_YEAR: u32 = 365;

/// Seconds in a day
pub const SECONDS_IN_DAY: u64 = 24 * 60 * 60;
