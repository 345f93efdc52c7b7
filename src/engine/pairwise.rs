// ============================================================================
// Pairwise Decoder
// Canonical numeral-to-integer algorithm
// ============================================================================

use crate::domain::table::{basic_value, MAX_NUMERAL_LEN};
use crate::interfaces::NumeralDecoder;
use crate::validation::ValidNumeral;
use smallvec::SmallVec;

/// Adjacent-pair decoding over the basic symbol map
///
/// Each symbol counts positively unless the symbol after it is larger,
/// in which case it counts negatively. The last symbol always counts
/// positively.
///
/// # Example
/// ```text
/// MDIX: M D -> +1000, D I -> +500, I X -> -1, then +X (10) = 1509
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PairwiseDecoder;

impl PairwiseDecoder {
    pub const fn new() -> Self {
        Self
    }
}

impl NumeralDecoder for PairwiseDecoder {
    fn decode(&self, numeral: ValidNumeral<'_>) -> u16 {
        let values: SmallVec<[u16; MAX_NUMERAL_LEN]> =
            numeral.as_bytes().iter().map(|&b| basic_value(b)).collect();

        let body: i32 = values
            .windows(2)
            .map(|pair| {
                let left = i32::from(pair[0]);
                if pair[0] >= pair[1] {
                    left
                } else {
                    -left
                }
            })
            .sum();
        let last = values.last().map_or(0, |&v| i32::from(v));

        // Grammar guarantees a total in 1-4999
        (body + last) as u16
    }

    fn name(&self) -> &str {
        "Pairwise"
    }

    fn description(&self) -> &str {
        "adjacent symbol pairs compared over the basic symbol map"
    }
}
