// ============================================================================
// Numeral Decoder Interface
// Defines the contract for pluggable numeral-to-integer algorithms
// ============================================================================

use crate::validation::ValidNumeral;

/// Strategy pattern interface for decoding algorithms
/// Implementations: Pairwise (canonical), Subtraction, TableScan
pub trait NumeralDecoder: Send + Sync {
    /// Compute the value of an already validated numeral
    ///
    /// # Arguments
    /// * `numeral` - String matching the canonical grammar
    ///
    /// # Returns
    /// The value in 1-4999
    fn decode(&self, numeral: ValidNumeral<'_>) -> u16;

    /// Get the algorithm name for logging/benchmarks
    fn name(&self) -> &str;

    /// One-line summary of how the algorithm works
    fn description(&self) -> &str {
        ""
    }
}
