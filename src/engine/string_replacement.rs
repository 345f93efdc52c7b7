// ============================================================================
// String Replacement Encoder
// ============================================================================

use crate::interfaces::NumeralEncoder;
use crate::validation::ValidInteger;

/// Ordered rewrite rules, applied once each, left to right
const REWRITES: [(&str, &str); 12] = [
    ("IIIII", "V"),
    ("IIII", "IV"),
    ("VV", "X"),
    ("VIV", "IX"),
    ("XXXXX", "L"),
    ("XXXX", "XL"),
    ("LL", "C"),
    ("LXL", "XC"),
    ("CCCCC", "D"),
    ("CCCC", "CD"),
    ("DD", "M"),
    ("DCD", "CM"),
];

/// Unary collapse encoding
///
/// Starts from `n` copies of `I` and folds them into larger symbols one
/// rewrite at a time. Allocates a string of length `n`, so it is the
/// slowest encoder; it exists as a comparison baseline.
///
/// # Example
/// ```text
/// 9: IIIIIIIII -> VIIII -> VIV -> IX
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StringReplacementEncoder;

impl StringReplacementEncoder {
    pub const fn new() -> Self {
        Self
    }
}

impl NumeralEncoder for StringReplacementEncoder {
    fn encode(&self, value: ValidInteger) -> String {
        REWRITES.iter().fold(
            "I".repeat(usize::from(value.get())),
            |numeral, &(from, to)| numeral.replace(from, to),
        )
    }

    fn name(&self) -> &str {
        "StringReplacement"
    }

    fn description(&self) -> &str {
        "unary string of I collapsed by ordered replacements"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_integer;

    #[test]
    fn test_rewrite_chain() {
        let encoder = StringReplacementEncoder::new();
        let encode = |n: u16| encoder.encode(validate_integer(n).unwrap());

        assert_eq!(encode(4), "IV");
        assert_eq!(encode(9), "IX");
        assert_eq!(encode(49), "XLIX");
        assert_eq!(encode(94), "XCIV");
        assert_eq!(encode(4999), "MMMMCMXCIX");
    }
}
