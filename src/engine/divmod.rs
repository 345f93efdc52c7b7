// ============================================================================
// Divmod Encoder
// ============================================================================

use crate::domain::table::{MAX_NUMERAL_LEN, NUMERAL_TABLE};
use crate::interfaces::NumeralEncoder;
use crate::validation::ValidInteger;
use arrayvec::ArrayString;

/// Quotient/remainder encoding
///
/// Emits each table symbol `remaining / value` times in one step and stops
/// as soon as nothing remains, so small values skip most of the table.
#[derive(Debug, Clone, Copy, Default)]
pub struct DivmodEncoder;

impl DivmodEncoder {
    pub const fn new() -> Self {
        Self
    }
}

impl NumeralEncoder for DivmodEncoder {
    fn encode(&self, value: ValidInteger) -> String {
        let mut numeral = ArrayString::<MAX_NUMERAL_LEN>::new();
        let mut remaining = value.get();

        for (symbol, symbol_value) in NUMERAL_TABLE {
            let factor = remaining / symbol_value;
            remaining %= symbol_value;

            for _ in 0..factor {
                numeral.push_str(symbol);
            }

            if remaining == 0 {
                break;
            }
        }

        numeral.to_string()
    }

    fn name(&self) -> &str {
        "Divmod"
    }

    fn description(&self) -> &str {
        "quotient and remainder per table entry with early exit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_integer;

    #[test]
    fn test_divmod_known_values() {
        let encoder = DivmodEncoder::new();
        let encode = |n: u16| encoder.encode(validate_integer(n).unwrap());

        assert_eq!(encode(1), "I");
        assert_eq!(encode(1000), "M");
        assert_eq!(encode(3888), "MMMDCCCLXXXVIII");
        assert_eq!(encode(1994), "MCMXCIV");
    }
}
