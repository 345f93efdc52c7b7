// ============================================================================
// Greedy Encoder
// Canonical integer-to-numeral algorithm
// ============================================================================

use crate::domain::table::{MAX_NUMERAL_LEN, NUMERAL_TABLE};
use crate::interfaces::NumeralEncoder;
use crate::validation::ValidInteger;
use arrayvec::ArrayString;

/// Greedy subtraction over the extended numeral table
///
/// Walks the table from `M` down to `I`, emitting each symbol while the
/// remainder still covers its value.
///
/// # Example
/// ```text
/// 1994: M (994) CM (94) XC (4) IV (0) -> MCMXCIV
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyEncoder;

impl GreedyEncoder {
    pub const fn new() -> Self {
        Self
    }

    /// Encode into a stack buffer without allocating.
    pub fn encode_to_buffer(&self, value: ValidInteger) -> ArrayString<MAX_NUMERAL_LEN> {
        let mut numeral = ArrayString::new();
        let mut remaining = value.get();

        for (symbol, symbol_value) in NUMERAL_TABLE {
            while remaining >= symbol_value {
                numeral.push_str(symbol);
                remaining -= symbol_value;
            }
        }

        numeral
    }
}

impl NumeralEncoder for GreedyEncoder {
    fn encode(&self, value: ValidInteger) -> String {
        self.encode_to_buffer(value).to_string()
    }

    fn name(&self) -> &str {
        "Greedy"
    }

    fn description(&self) -> &str {
        "repeated subtraction over the extended numeral table"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_integer;

    fn encode(n: u16) -> String {
        GreedyEncoder::new().encode(validate_integer(n).unwrap())
    }

    #[test]
    fn test_subtractive_pairs() {
        assert_eq!(encode(4), "IV");
        assert_eq!(encode(9), "IX");
        assert_eq!(encode(40), "XL");
        assert_eq!(encode(90), "XC");
        assert_eq!(encode(400), "CD");
        assert_eq!(encode(900), "CM");
    }

    #[test]
    fn test_longest_numeral_fits_buffer() {
        let numeral = GreedyEncoder::new().encode_to_buffer(validate_integer(4888).unwrap());
        assert_eq!(numeral.as_str(), "MMMMDCCCLXXXVIII");
        assert_eq!(numeral.len(), MAX_NUMERAL_LEN);
    }

    #[test]
    fn test_upper_bound() {
        assert_eq!(encode(4999), "MMMMCMXCIX");
    }
}
