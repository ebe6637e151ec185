use std::fmt;
use std::hash::Hash;
use std::ops::{Add, Sub};
use std::str::FromStr;

use rust_decimal::Decimal;

use super::error::DomainError;

/// Trait representing an exact monetary amount
pub trait AmountType:
    Copy
    + Ord
    + Hash
    + Add<Output = Self>
    + Sub<Output = Self>
    + Default
    + fmt::Display
    + Send
    + Sync
    + fmt::Debug
{
    /// Parse from decimal string (e.g., "1000.12345"), never rounding
    fn from_decimal_str(s: &str) -> Result<Self, DomainError>;

    /// Render as a plain decimal string, keeping the scale
    fn to_decimal_string(&self) -> String;

    /// Checked addition, returns None on overflow
    fn checked_add(&self, other: Self) -> Option<Self>;

    /// Checked subtraction, returns None on overflow
    fn checked_sub(&self, other: Self) -> Option<Self>;

    /// Zero value
    fn zero() -> Self;

    /// Number of digits after the decimal point
    fn scale(&self) -> u32;

    /// Strictly below zero
    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }
}

/// Exact decimal amount backed by a 96-bit mantissa and a scale of up to 28 digits.
///
/// Arithmetic keeps the larger scale of its operands, so `1000.12345 - 100`
/// renders as `900.12345` and `2500 - 925` as `1575`. Equality and ordering
/// are numeric (`1.50 == 1.5`); compare [`AmountType::scale`] as well to tell
/// the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// Wrap an existing decimal
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Underlying decimal value
    pub fn decimal(&self) -> Decimal {
        self.0
    }
}

impl AmountType for Amount {
    fn from_decimal_str(s: &str) -> Result<Self, DomainError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DomainError::InvalidAmount);
        }

        // from_str_exact errors instead of rounding excess precision away
        Decimal::from_str_exact(s)
            .map(Self)
            .map_err(|_| DomainError::InvalidAmount)
    }

    fn to_decimal_string(&self) -> String {
        self.0.to_string()
    }

    fn checked_add(&self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    fn checked_sub(&self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    fn scale(&self) -> u32 {
        self.0.scale()
    }
}

impl FromStr for Amount {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal_str(s)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}
