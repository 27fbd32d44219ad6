use crate::interpreter::value::core::{Class, Number};

/// Significant digits kept in fixed notation when the value is below one.
pub const DISPLAY_DIGITS: usize = 10;
/// Smallest decimal exponent still shown in fixed notation.
pub const MIN_FIXED_EXPONENT: i64 = -3;
/// Largest decimal exponent still shown in fixed notation.
pub const MAX_FIXED_EXPONENT: i64 = 6;

/// A finite decimal `0.d1 d2 d3 ... × 10^exponent`.
///
/// `digits` has no leading or trailing zeros; it is empty for zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decimal {
    /// Sign of the value.
    pub negative: bool,
    /// Significant digits, most significant first, each in `0..=9`.
    pub digits:   Vec<u8>,
    /// Decimal exponent with the point placed before the first digit.
    pub exponent: i64,
}

impl Decimal {
    /// Reads a decimal string such as `-12.5`, `0.001` or `1.25e+3`.
    ///
    /// # Returns
    /// `None` if `text` is not a plain or exponent-form decimal.
    ///
    /// # Example
    /// ```
    /// use arbcalc::interpreter::value::format::Decimal;
    ///
    /// let decimal = Decimal::parse("-0.0125e+2").unwrap();
    /// assert!(decimal.negative);
    /// assert_eq!(decimal.digits, [1, 2, 5]);
    /// assert_eq!(decimal.exponent, 1);
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let (negative, unsigned) = match text.as_bytes().first()? {
            b'-' => (true, &text[1..]),
            b'+' => (false, &text[1..]),
            _ => (false, text),
        };

        let (mantissa, shift) = match unsigned.find(['e', 'E']) {
            Some(at) => (&unsigned[..at], unsigned[at + 1..].parse::<i64>().ok()?),
            None => (unsigned, 0),
        };
        let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if integer.is_empty() && fraction.is_empty() {
            return None;
        }

        let mut digits = Vec::with_capacity(integer.len() + fraction.len());
        for byte in integer.bytes().chain(fraction.bytes()) {
            if !byte.is_ascii_digit() {
                return None;
            }
            digits.push(byte - b'0');
        }

        let mut exponent = i64::try_from(integer.len()).ok()?.checked_add(shift)?;
        let leading = digits.iter().take_while(|&&d| d == 0).count();
        digits.drain(..leading);
        if digits.is_empty() {
            return Some(Self { negative,
                               digits,
                               exponent: 0 });
        }
        exponent -= i64::try_from(leading).ok()?;
        while digits.last() == Some(&0) {
            digits.pop();
        }

        Some(Self { negative,
                    digits,
                    exponent })
    }

    /// Returns `true` if every digit is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Renders in the friendly notation described on [`friendly`].
    #[must_use]
    pub fn render(&self) -> String {
        if self.is_zero() {
            return format!("{}0.{}", sign(self.negative), "0".repeat(DISPLAY_DIGITS));
        }
        if (MIN_FIXED_EXPONENT..=MAX_FIXED_EXPONENT).contains(&self.exponent) {
            self.render_fixed()
        } else {
            self.render_scientific()
        }
    }

    fn render_fixed(&self) -> String {
        let fraction_digits = (DISPLAY_DIGITS as i64 - self.exponent).clamp(0, DISPLAY_DIGITS as i64);
        let keep = usize::try_from(self.exponent + fraction_digits).unwrap_or(0);
        let (kept, carried) = round_half_up(&self.digits, keep);
        let exponent = self.exponent + i64::from(carried);

        let mut out = String::from(sign(self.negative));
        if exponent > 0 {
            let split = usize::try_from(exponent).unwrap_or(0).min(kept.len());
            push_digits(&mut out, &kept[..split]);
            if split < kept.len() {
                out.push('.');
                push_digits(&mut out, &kept[split..]);
            }
        } else {
            out.push_str("0.");
            out.push_str(&"0".repeat(usize::try_from(-exponent).unwrap_or(0)));
            push_digits(&mut out, &kept);
        }
        out
    }

    fn render_scientific(&self) -> String {
        let (mut kept, carried) = round_half_up(&self.digits, DISPLAY_DIGITS + 1);
        kept.truncate(DISPLAY_DIGITS + 1);
        let exponent = self.exponent + i64::from(carried) - 1;

        let mut out = String::from(sign(self.negative));
        push_digits(&mut out, &kept[..1]);
        out.push('.');
        push_digits(&mut out, &kept[1..]);
        out.push_str(&format!("e{}{:02}", if exponent < 0 { '-' } else { '+' }, exponent.abs()));
        out
    }
}

/// Formats a number for display.
///
/// - NaN prints as `NaN`, infinities as `Infinity` and `-Infinity`.
/// - Values whose decimal exponent lies in `-3..=6` use fixed notation with
///   `clamp(10 - exponent, 0, 10)` fractional digits.
/// - Everything else uses scientific notation with ten fractional digits,
///   such as `1.2345678900e+07`.
///
/// Digits are rounded half up on the decimal expansion.
#[must_use]
pub fn friendly(number: &Number) -> String {
    match number.classify() {
        Class::Nan => "NaN".to_string(),
        Class::Infinite if number.is_negative() => "-Infinity".to_string(),
        Class::Infinite => "Infinity".to_string(),
        Class::Zero | Class::Finite => {
            let text = number.as_big_float().to_string();
            Decimal::parse(&text).map_or(text, |decimal| decimal.render())
        },
    }
}

/// Rounds `digits` to `keep` digits, padding with zeros when shorter.
///
/// Returns the kept digits and whether rounding carried into a new leading
/// digit, in which case one extra digit (`1` followed by zeros) is returned.
fn round_half_up(digits: &[u8], keep: usize) -> (Vec<u8>, bool) {
    let mut kept: Vec<u8> = digits.iter().copied().take(keep).collect();
    kept.resize(keep, 0);

    if digits.get(keep).is_some_and(|&d| d >= 5) {
        for digit in kept.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                return (kept, false);
            }
        }
        kept.insert(0, 1);
        return (kept, true);
    }
    (kept, false)
}

fn push_digits(out: &mut String, digits: &[u8]) {
    out.extend(digits.iter().map(|&d| char::from(b'0' + d)));
}

const fn sign(negative: bool) -> &'static str {
    if negative { "-" } else { "" }
}
