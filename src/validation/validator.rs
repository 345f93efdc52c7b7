// ============================================================================
// Validator
// Guards both conversion directions: integer coercion and numeral grammar
// ============================================================================

use super::errors::{ConversionResult, InvalidInputError, InvalidInputReason};
use crate::domain::table::{MAX_VALUE, MIN_VALUE};
use crate::domain::EncodeInput;
use rust_decimal::prelude::ToPrimitive;
use std::fmt;

// ============================================================================
// Validated Values
// ============================================================================

/// An integer proven to lie in 1-4999.
///
/// Only the validator constructs these; encoders accept nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValidInteger(u16);

impl ValidInteger {
    #[inline]
    pub fn get(self) -> u16 {
        self.0
    }
}

impl From<ValidInteger> for u16 {
    fn from(value: ValidInteger) -> Self {
        value.0
    }
}

impl fmt::Display for ValidInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A string proven to match the canonical numeral grammar.
///
/// Only the validator constructs these; decoders accept nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidNumeral<'a>(&'a str);

impl<'a> ValidNumeral<'a> {
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Numeral bytes, all within `MDCLXVI`
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for ValidNumeral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

// ============================================================================
// Integer Validation
// ============================================================================

/// Coerce an integer-like value and check it lies in 1-4999.
pub fn validate_integer(input: impl Into<EncodeInput>) -> ConversionResult<ValidInteger> {
    let input = input.into();
    coerce(&input)
        .and_then(|value| {
            if (i128::from(MIN_VALUE)..=i128::from(MAX_VALUE)).contains(&value) {
                // In range, so the narrowing is lossless
                Ok(ValidInteger(value as u16))
            } else {
                Err(InvalidInputReason::OutOfRange)
            }
        })
        .map_err(|reason| InvalidInputError::new(input.to_string(), reason))
}

pub fn is_valid_integer(input: impl Into<EncodeInput>) -> bool {
    validate_integer(input).is_ok()
}

fn coerce(input: &EncodeInput) -> Result<i128, InvalidInputReason> {
    match input {
        EncodeInput::Integer(value) => Ok(*value),
        EncodeInput::Float(value) => {
            if !value.is_finite() {
                Err(InvalidInputReason::NonNumeric)
            } else if value.fract() != 0.0 {
                Err(InvalidInputReason::Fractional)
            } else {
                // Saturates far outside the accepted range
                Ok(*value as i128)
            }
        },
        EncodeInput::Decimal(value) => {
            if !value.fract().is_zero() {
                Err(InvalidInputReason::Fractional)
            } else {
                value.trunc().to_i128().ok_or(InvalidInputReason::OutOfRange)
            }
        },
        EncodeInput::Text(text) => text
            .trim()
            .parse::<i128>()
            .map_err(|_| InvalidInputReason::NonNumeric),
    }
}

// ============================================================================
// Numeral Validation
// ============================================================================

/// One decimal position of the grammar: `one`, `five` and the next `ten`.
struct Decade {
    one: u8,
    five: u8,
    ten: u8,
}

/// Hundreds, tens, ones. Thousands are a bare run of up to four `M`.
const DECADES: [Decade; 3] = [
    Decade { one: b'C', five: b'D', ten: b'M' },
    Decade { one: b'X', five: b'L', ten: b'C' },
    Decade { one: b'I', five: b'V', ten: b'X' },
];

impl Decade {
    /// Consume `one ten | one five | five? one{0,3}` starting at `pos`.
    fn scan(&self, bytes: &[u8], pos: usize) -> usize {
        match (bytes.get(pos), bytes.get(pos + 1)) {
            (Some(&first), Some(&second))
                if first == self.one && (second == self.ten || second == self.five) =>
            {
                pos + 2
            },
            (Some(&first), _) if first == self.five => scan_run(bytes, pos + 1, self.one, 3),
            _ => scan_run(bytes, pos, self.one, 3),
        }
    }
}

/// Consume up to `max` repetitions of `symbol` starting at `pos`.
fn scan_run(bytes: &[u8], pos: usize, symbol: u8, max: usize) -> usize {
    let run = bytes[pos.min(bytes.len())..]
        .iter()
        .take(max)
        .take_while(|&&b| b == symbol)
        .count();
    pos + run
}

/// Whether `numeral` is the canonical form of some value in 1-4999.
///
/// Every decade uses strictly smaller symbols than the one before it, so a
/// single greedy pass decides the grammar without backtracking.
pub fn is_valid_numeral(numeral: &str) -> bool {
    let bytes = numeral.as_bytes();
    if bytes.is_empty() {
        return false;
    }

    let pos = DECADES
        .iter()
        .fold(scan_run(bytes, 0, b'M', 4), |pos, decade| decade.scan(bytes, pos));

    pos == bytes.len()
}

/// Check `numeral` against the grammar, rejecting the empty string.
pub fn validate_numeral(numeral: &str) -> ConversionResult<ValidNumeral<'_>> {
    if numeral.is_empty() {
        return Err(InvalidInputError::new(
            format!("{:?}", numeral),
            InvalidInputReason::Empty,
        ));
    }

    if !is_valid_numeral(numeral) {
        return Err(InvalidInputError::new(
            format!("{:?}", numeral),
            InvalidInputReason::InvalidNumeral,
        ));
    }

    Ok(ValidNumeral(numeral))
}
