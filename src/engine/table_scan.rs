// ============================================================================
// Table Scan Decoder
// ============================================================================

use crate::domain::table::NUMERAL_TABLE;
use crate::interfaces::NumeralDecoder;
use crate::validation::ValidNumeral;

/// Prefix scan over the extended numeral table
///
/// Mirror image of the greedy encoder: strips each table symbol from the
/// front of the numeral for as long as it repeats.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableScanDecoder;

impl TableScanDecoder {
    pub const fn new() -> Self {
        Self
    }
}

impl NumeralDecoder for TableScanDecoder {
    fn decode(&self, numeral: ValidNumeral<'_>) -> u16 {
        let mut rest = numeral.as_str();
        let mut total = 0;

        for (symbol, value) in NUMERAL_TABLE {
            while let Some(tail) = rest.strip_prefix(symbol) {
                total += value;
                rest = tail;
            }
        }

        total
    }

    fn name(&self) -> &str {
        "TableScan"
    }

    fn description(&self) -> &str {
        "prefix matching against the extended numeral table"
    }
}
