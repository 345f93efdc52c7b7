// ============================================================================
// Subtraction Decoder
// ============================================================================

use crate::domain::table::basic_value;
use crate::interfaces::NumeralDecoder;
use crate::validation::ValidNumeral;

/// Running-total decoding
///
/// Adds every symbol; when a symbol is larger than its predecessor, the
/// predecessor was added but should have been subtracted, so twice its
/// value is taken back.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubtractionDecoder;

impl SubtractionDecoder {
    pub const fn new() -> Self {
        Self
    }
}

impl NumeralDecoder for SubtractionDecoder {
    fn decode(&self, numeral: ValidNumeral<'_>) -> u16 {
        let mut total: u16 = 0;
        let mut previous: Option<u16> = None;

        for &symbol in numeral.as_bytes() {
            let value = basic_value(symbol);
            total += value;

            // total >= previous + value here, so this never underflows
            if let Some(prev) = previous.filter(|&prev| prev < value) {
                total -= 2 * prev;
            }

            previous = Some(value);
        }

        total
    }

    fn name(&self) -> &str {
        "Subtraction"
    }

    fn description(&self) -> &str {
        "running total with double subtraction over the basic symbol map"
    }
}
