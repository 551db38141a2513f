use soroban_fixed_point_math::FixedPoint;

use crate::PERCENTAGE_FACTOR;

/// Signed fixed point value over i128 with 9 decimal places.
///
/// Ledger amounts, basis points and fixed rates are all normalised into it, and
/// repayment splits are computed in it so that the parts always sum to the whole.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct FixedI128(i128);

impl FixedI128 {
    pub const DENOMINATOR: i128 = 1_000_000_000;
    pub const ZERO: FixedI128 = FixedI128(0);
    pub const ONE: FixedI128 = FixedI128(Self::DENOMINATOR);

    pub const fn into_inner(self) -> i128 {
        self.0
    }

    /// Wraps a value already scaled by [`Self::DENOMINATOR`], e.g. a ledger rate
    pub fn from_inner<T: Into<i128>>(inner: T) -> FixedI128 {
        FixedI128(inner.into())
    }

    pub fn from_int<T: Into<i128>>(value: T) -> Option<FixedI128> {
        Self::DENOMINATOR.checked_mul(value.into()).map(FixedI128)
    }

    /// `nom / denom`, rounded towards zero
    pub fn from_rational<N: Into<i128>, D: Into<i128>>(nom: N, denom: D) -> Option<FixedI128> {
        Self::DENOMINATOR
            .checked_mul(nom.into())?
            .checked_div(denom.into())
            .map(FixedI128)
    }

    /// Basis points into a fraction, `7_500` is 0.75
    pub fn from_percentage<T: Into<i128>>(percentage: T) -> Option<FixedI128> {
        Self::from_rational(percentage, PERCENTAGE_FACTOR)
    }

    /// Raw token units into the human amount, `1_500_000` with 6 decimals is 1.5
    pub fn from_units<T: Into<i128>>(amount: T, decimals: u32) -> Option<FixedI128> {
        Self::from_rational(amount, 10i128.checked_pow(decimals)?)
    }

    /// Nearest representable value. None for NaN, infinities and out of range values.
    pub fn from_f64(value: f64) -> Option<FixedI128> {
        if !value.is_finite() {
            return None;
        }

        let scaled = (value * Self::DENOMINATOR as f64).round();
        if scaled.abs() >= i128::MAX as f64 {
            return None;
        }

        Some(FixedI128(scaled as i128))
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::DENOMINATOR as f64
    }

    /// Raw token units for `decimals`, truncating extra digits
    pub fn to_precision(self, decimals: u32) -> Option<i128> {
        self.0
            .checked_mul(10i128.checked_pow(decimals)?)?
            .checked_div(Self::DENOMINATOR)
    }

    /// Product rounded down
    pub fn checked_mul(self, other: FixedI128) -> Option<FixedI128> {
        self.0
            .fixed_mul_floor(other.0, Self::DENOMINATOR)
            .map(FixedI128)
    }

    pub fn checked_add(self, other: FixedI128) -> Option<FixedI128> {
        self.0.checked_add(other.0).map(FixedI128)
    }

    pub fn checked_sub(self, other: FixedI128) -> Option<FixedI128> {
        self.0.checked_sub(other.0).map(FixedI128)
    }

    /// Divides by a plain integer, e.g. days in year
    pub fn div_inner<T: Into<i128>>(self, divisor: T) -> Option<FixedI128> {
        self.0.checked_div(divisor.into()).map(FixedI128)
    }

    pub fn is_negative(self) -> bool {
        self.0.is_negative()
    }
}
