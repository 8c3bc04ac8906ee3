use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ValueError};

/// Arbitrary-precision integer.
///
/// Stored as a sign plus normalized decimal digits: no leading zeros, and zero
/// is never negative. Two `BigInt`s are equal iff they denote the same integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    negative: bool,
    digits: String,
}

impl BigInt {
    /// The integer zero.
    pub fn zero() -> Self {
        Self {
            negative: false,
            digits: "0".to_string(),
        }
    }

    /// Returns true if the integer is below zero.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns true if the integer is zero.
    pub fn is_zero(&self) -> bool {
        self.digits == "0"
    }

    /// Decimal digits of the magnitude, without sign.
    pub fn magnitude_digits(&self) -> &str {
        &self.digits
    }

    /// Converts to `i64` when the integer fits.
    pub fn to_i64(&self) -> Option<i64> {
        self.to_string().parse().ok()
    }

    /// Converts to `u64` when the integer fits.
    pub fn to_u64(&self) -> Option<u64> {
        if self.negative {
            return None;
        }
        self.digits.parse().ok()
    }

    fn from_parts(negative: bool, digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            return Self::zero();
        }
        Self {
            negative,
            digits: trimmed.to_string(),
        }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl FromStr for BigInt {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self> {
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValueError::InvalidBigInt(s.to_string()));
        }

        Ok(Self::from_parts(negative, digits))
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.digits)
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {$(
        impl From<$ty> for BigInt {
            fn from(value: $ty) -> Self {
                Self::from_parts(value < 0, &value.unsigned_abs().to_string())
            }
        }
    )*};
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {$(
        impl From<$ty> for BigInt {
            fn from(value: $ty) -> Self {
                Self::from_parts(false, &value.to_string())
            }
        }
    )*};
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_normalizes_digits() {
        let value: BigInt = "-000123".parse().unwrap();
        assert!(value.is_negative());
        assert_eq!(value.magnitude_digits(), "123");
        assert_eq!(value.to_string(), "-123");
    }

    #[test]
    fn negative_zero_is_zero() {
        let value: BigInt = "-0".parse().unwrap();
        assert!(value.is_zero());
        assert!(!value.is_negative());
        assert_eq!(value, BigInt::zero());
    }

    #[test]
    fn rejects_non_digit_text() {
        for text in ["", "-", "+", "12a", "1.5", " 1"] {
            assert!(
                matches!(text.parse::<BigInt>(), Err(ValueError::InvalidBigInt(_))),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn from_primitive_integers() {
        assert_eq!(BigInt::from(i64::MIN).to_string(), i64::MIN.to_string());
        assert_eq!(BigInt::from(u128::MAX).to_string(), u128::MAX.to_string());
        assert_eq!(BigInt::from(0u8), BigInt::zero());
    }

    #[test]
    fn narrowing_conversions() {
        let big: BigInt = "123456789012345678901234567890".parse().unwrap();
        assert_eq!(big.to_i64(), None);
        assert_eq!(big.to_u64(), None);

        assert_eq!(BigInt::from(-5i32).to_i64(), Some(-5));
        assert_eq!(BigInt::from(-5i32).to_u64(), None);
        assert_eq!(BigInt::from(u64::MAX).to_u64(), Some(u64::MAX));
    }
}
