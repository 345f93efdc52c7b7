// ============================================================================
// Conversion Errors
// The single error kind raised for rejected encode/decode input
// ============================================================================

use std::fmt;

/// Why an input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidInputReason {
    /// Value cannot be read as an integer
    NonNumeric,
    /// Value has a non-zero fractional part
    Fractional,
    /// Integer outside 1-4999
    OutOfRange,
    /// Numeral string is empty
    Empty,
    /// String does not match the canonical numeral grammar
    InvalidNumeral,
}

impl fmt::Display for InvalidInputReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInputReason::NonNumeric => {
                write!(f, "input must be in integer representation")
            },
            InvalidInputReason::Fractional => {
                write!(f, "input must not have a fractional part")
            },
            InvalidInputReason::OutOfRange => {
                write!(f, "input must be an integer in the range 1-4999")
            },
            InvalidInputReason::Empty => write!(f, "input must be a non-empty string"),
            InvalidInputReason::InvalidNumeral => write!(
                f,
                "input is not a valid Roman numeral in the range 1-4999"
            ),
        }
    }
}

/// Input rejected by `encode` or `decode`.
///
/// Carries the offending input, rendered as text, and the reason.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InvalidInputError {
    input: String,
    reason: InvalidInputReason,
}

impl InvalidInputError {
    pub fn new(input: impl Into<String>, reason: InvalidInputReason) -> Self {
        Self {
            input: input.into(),
            reason,
        }
    }

    /// The rejected input
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn reason(&self) -> InvalidInputReason {
        self.reason
    }

    /// Human-readable explanation
    pub fn message(&self) -> String {
        self.reason.to_string()
    }
}

impl fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid input {}: {}", self.input, self.reason)
    }
}

impl std::error::Error for InvalidInputError {}

/// Result type alias for conversion operations
pub type ConversionResult<T> = Result<T, InvalidInputError>;
