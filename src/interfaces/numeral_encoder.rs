// ============================================================================
// Numeral Encoder Interface
// Defines the contract for pluggable integer-to-numeral algorithms
// ============================================================================

use crate::validation::ValidInteger;

/// Strategy pattern interface for encoding algorithms
/// Implementations: Greedy (canonical), Divmod, StringReplacement
pub trait NumeralEncoder: Send + Sync {
    /// Produce the canonical numeral for an already validated integer
    ///
    /// # Arguments
    /// * `value` - Integer in 1-4999, as proven by the validator
    ///
    /// # Returns
    /// The canonical Roman numeral
    fn encode(&self, value: ValidInteger) -> String;

    /// Get the algorithm name for logging/benchmarks
    fn name(&self) -> &str;

    /// One-line summary of how the algorithm works
    fn description(&self) -> &str {
        ""
    }
}
