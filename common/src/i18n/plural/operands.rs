//! CLDR plural operands.
//!
//! A count is reduced to the operands that CLDR plural formulas are written
//! in terms of. Counts come from integers or from decimal strings such as
//! `"1.50"`, whose visible fraction digits matter (`1` and `1.0` pluralise
//! differently in English).

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::i18n::I18nError;

/// Fraction digits beyond this count cannot be held in a `u64`.
const MAX_FRACTION_DIGITS: usize = 18;

/// Plural operands for a single count.
///
/// The operands describe the absolute value, since CLDR rules ignore the
/// sign. The count as supplied, sign included, is kept for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Operands {
    /// Integer digits of the count.
    pub i: u64,
    /// Number of visible fraction digits, with trailing zeros.
    pub v: usize,
    /// Number of visible fraction digits, without trailing zeros.
    pub w: usize,
    /// Visible fraction digits, with trailing zeros.
    pub f: u64,
    /// Visible fraction digits, without trailing zeros.
    pub t: u64,
    source: String,
}

impl Operands {
    /// Whether the count is an integer equal to `value` (`n = value`).
    #[must_use]
    pub const fn n_is(&self, value: u64) -> bool {
        self.t == 0 && self.i == value
    }

    /// Whether the count is an integer within `range` (`n = a..b`).
    #[must_use]
    pub fn n_in(&self, range: RangeInclusive<u64>) -> bool {
        self.t == 0 && range.contains(&self.i)
    }

    /// Whether the count is an integer whose remainder modulo `modulus`
    /// lies within `range` (`n % m = a..b`).
    #[must_use]
    pub fn n_mod_in(&self, modulus: u64, range: RangeInclusive<u64>) -> bool {
        self.t == 0 && range.contains(&(self.i % modulus))
    }

    /// The count as it was supplied, sign included.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    fn from_integer(value: u64) -> Self {
        Self {
            i: value,
            v: 0,
            w: 0,
            f: 0,
            t: 0,
            source: value.to_string(),
        }
    }
}

impl fmt::Display for Operands {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.source)
    }
}

macro_rules! operands_from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Operands {
            fn from(value: $ty) -> Self {
                Self::from_integer(u64::from(value))
            }
        })*
    };
}

macro_rules! operands_from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Operands {
            fn from(value: $ty) -> Self {
                Self {
                    source: value.to_string(),
                    ..Self::from_integer(u64::from(value.unsigned_abs()))
                }
            }
        })*
    };
}

operands_from_unsigned!(u8, u16, u32, u64);
operands_from_signed!(i8, i16, i32, i64);

impl From<usize> for Operands {
    fn from(value: usize) -> Self {
        Self::from_integer(value as u64)
    }
}

impl FromStr for Operands {
    type Err = I18nError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| I18nError::InvalidPluralCount {
            count: raw.to_owned(),
            reason: reason.to_owned(),
        };

        let trimmed = raw.trim();
        let unsigned = trimmed
            .strip_prefix('-')
            .or_else(|| trimmed.strip_prefix('+'))
            .unwrap_or(trimmed);
        let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        if integer.is_empty() || !integer.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(invalid("expected decimal digits before the fraction"));
        }
        if unsigned.contains('.') && fraction.is_empty() {
            return Err(invalid("expected digits after the decimal point"));
        }
        if !fraction.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(invalid("expected decimal digits in the fraction"));
        }
        if fraction.len() > MAX_FRACTION_DIGITS {
            return Err(invalid("too many fraction digits"));
        }

        let i = integer
            .parse::<u64>()
            .map_err(|_| invalid("integer part out of range"))?;
        let trimmed_fraction = fraction.trim_end_matches('0');
        let f = parse_digits(fraction);
        let t = parse_digits(trimmed_fraction);

        Ok(Self {
            i,
            v: fraction.len(),
            w: trimmed_fraction.len(),
            f,
            t,
            source: trimmed.to_owned(),
        })
    }
}

fn parse_digits(digits: &str) -> u64 {
    digits.bytes().fold(0, |accumulator, byte| {
        accumulator * 10 + u64::from(byte - b'0')
    })
}
