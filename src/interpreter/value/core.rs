use std::fmt;

use astro_float::{BigFloat, Consts, Radix, RoundingMode};

use crate::interpreter::value::format::friendly;

/// Significand precision, in bits, of every stored or computed value.
pub const PRECISION: usize = 256;

/// Rounding applied by every operation: to nearest, ties to even.
pub const ROUNDING: RoundingMode = RoundingMode::ToEven;

/// Coarse classification of a [`Number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    /// Not a number, the result of every soft evaluation failure.
    Nan,
    /// Positive or negative infinity.
    Infinite,
    /// Positive or negative zero.
    Zero,
    /// Any other value.
    Finite,
}

/// An arbitrary-precision number with a fixed 256-bit significand.
///
/// NaN compares unequal to everything, itself included, exactly like a
/// floating-point NaN.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub struct Number(BigFloat);

impl Number {
    /// Not a number.
    #[must_use]
    pub fn nan() -> Self {
        Self(BigFloat::nan(None))
    }

    /// Positive zero.
    #[must_use]
    pub fn zero() -> Self {
        Self(BigFloat::new(PRECISION))
    }

    /// Converts an integer exactly.
    ///
    /// # Example
    /// ```
    /// use arbcalc::interpreter::value::core::Number;
    ///
    /// assert!(Number::from_i64(-4).is_negative());
    /// assert_eq!(Number::from_i64(0), Number::zero());
    /// ```
    #[must_use]
    pub fn from_i64(value: i64) -> Self {
        Self(BigFloat::from_i64(value, PRECISION))
    }

    /// Parses a decimal literal such as `12`, `-0.5` or `3,25`.
    ///
    /// A `,` is read as a decimal point and a trailing separator (`7.`) is
    /// allowed. Anything that is not a plain decimal (empty text, several
    /// separators, exponents, letters) gives NaN rather than an error.
    ///
    /// # Parameters
    /// - `text`: The literal, optionally preceded by `-`.
    /// - `consts`: Constants cache used by the decimal conversion.
    #[must_use]
    pub fn parse_decimal(text: &str, consts: &mut Consts) -> Self {
        let Some(normalized) = normalize_decimal(text) else {
            return Self::nan();
        };
        Self(BigFloat::parse(&normalized, Radix::Dec, PRECISION, ROUNDING, consts))
    }

    /// Returns the classification of the value.
    #[must_use]
    pub fn classify(&self) -> Class {
        if self.0.is_nan() {
            Class::Nan
        } else if self.0.is_inf() {
            Class::Infinite
        } else if self.0.is_zero() {
            Class::Zero
        } else {
            Class::Finite
        }
    }

    /// Returns `true` for NaN.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.0.is_nan()
    }

    /// Returns `true` for either infinity.
    #[must_use]
    pub fn is_infinite(&self) -> bool {
        self.0.is_inf()
    }

    /// Returns `true` for positive or negative zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if the sign is negative and the value is not NaN.
    ///
    /// Negative zero counts as negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        !self.0.is_nan() && self.0.is_negative()
    }

    /// Returns `true` if `self` and `other` differ by at most `epsilon`.
    ///
    /// Always `false` when any operand is NaN.
    #[must_use]
    pub fn is_close(&self, other: &Self, epsilon: &Self) -> bool {
        let difference = self.0.sub(&other.0, PRECISION, ROUNDING).abs();
        !difference.is_nan() && difference <= epsilon.0
    }

    /// Borrows the underlying big float.
    #[must_use]
    pub const fn as_big_float(&self) -> &BigFloat {
        &self.0
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<BigFloat> for Number {
    fn from(value: BigFloat) -> Self {
        Self(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&friendly(self))
    }
}

/// Checks that `text` is `-?digits([.,]digits?)?` and rewrites `,` to `.`.
fn normalize_decimal(text: &str) -> Option<String> {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (integer, fraction) = match unsigned.find(['.', ',']) {
        Some(at) => (&unsigned[..at], Some(&unsigned[at + 1..])),
        None => (unsigned, None),
    };

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if integer.is_empty() || !all_digits(integer) || !fraction.is_none_or(all_digits) {
        return None;
    }

    let mut normalized = String::with_capacity(text.len() + 1);
    if unsigned.len() != text.len() {
        normalized.push('-');
    }
    normalized.push_str(integer);
    if let Some(fraction) = fraction
       && !fraction.is_empty()
    {
        normalized.push('.');
        normalized.push_str(fraction);
    }
    Some(normalized)
}
