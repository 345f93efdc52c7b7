// ============================================================================
// Encode Input
// "Integer-like" values accepted by the encoder before coercion
// ============================================================================

use rust_decimal::Decimal;
use std::fmt;

/// A value handed to `encode` before it has been coerced to an integer.
///
/// Conversions exist for every primitive integer, both float widths,
/// [`Decimal`], `&str` and `String`, so callers can write `encode(1994)`,
/// `encode(1.5)` or `encode("55")` and let the validator decide.
#[derive(Debug, Clone, PartialEq)]
pub enum EncodeInput {
    /// Exact integer
    Integer(i128),
    /// Binary floating point, must carry no fractional part
    Float(f64),
    /// Decimal, must carry no fractional part
    Decimal(Decimal),
    /// Textual integer such as `"55"`
    Text(String),
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for EncodeInput {
                fn from(value: $ty) -> Self {
                    EncodeInput::Integer(i128::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<isize> for EncodeInput {
    fn from(value: isize) -> Self {
        // isize is at most 64 bits on every supported target
        EncodeInput::Integer(value as i128)
    }
}

impl From<usize> for EncodeInput {
    fn from(value: usize) -> Self {
        EncodeInput::Integer(value as i128)
    }
}

impl From<f64> for EncodeInput {
    fn from(value: f64) -> Self {
        EncodeInput::Float(value)
    }
}

impl From<f32> for EncodeInput {
    fn from(value: f32) -> Self {
        EncodeInput::Float(f64::from(value))
    }
}

impl From<Decimal> for EncodeInput {
    fn from(value: Decimal) -> Self {
        EncodeInput::Decimal(value)
    }
}

impl From<&str> for EncodeInput {
    fn from(value: &str) -> Self {
        EncodeInput::Text(value.to_string())
    }
}

impl From<String> for EncodeInput {
    fn from(value: String) -> Self {
        EncodeInput::Text(value)
    }
}

impl From<&String> for EncodeInput {
    fn from(value: &String) -> Self {
        EncodeInput::Text(value.clone())
    }
}

impl fmt::Display for EncodeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeInput::Integer(value) => write!(f, "{}", value),
            EncodeInput::Float(value) => write!(f, "{}", value),
            EncodeInput::Decimal(value) => write!(f, "{}", value),
            EncodeInput::Text(value) => write!(f, "{:?}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_conversions() {
        assert_eq!(EncodeInput::from(5u8), EncodeInput::Integer(5));
        assert_eq!(EncodeInput::from(-1i32), EncodeInput::Integer(-1));
        assert_eq!(
            EncodeInput::from(u64::MAX),
            EncodeInput::Integer(u64::MAX as i128)
        );
        assert_eq!(EncodeInput::from(42usize), EncodeInput::Integer(42));
    }

    #[test]
    fn test_other_conversions() {
        assert_eq!(EncodeInput::from(1.5f32), EncodeInput::Float(1.5));
        assert_eq!(
            EncodeInput::from(Decimal::new(15, 1)),
            EncodeInput::Decimal(Decimal::new(15, 1))
        );
        assert_eq!(EncodeInput::from("55"), EncodeInput::Text("55".to_string()));
    }

    #[test]
    fn test_display_quotes_text_only() {
        assert_eq!(EncodeInput::Integer(5000).to_string(), "5000");
        assert_eq!(EncodeInput::Float(1.5).to_string(), "1.5");
        assert_eq!(EncodeInput::Text("V".to_string()).to_string(), "\"V\"");
    }
}
