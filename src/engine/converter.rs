// ============================================================================
// Roman Converter
// Validation-first conversion through pluggable algorithms
// ============================================================================

use crate::domain::EncodeInput;
use crate::engine::{GreedyEncoder, PairwiseDecoder};
use crate::interfaces::{NumeralDecoder, NumeralEncoder};
use crate::validation::{validate_integer, validate_numeral, ConversionResult};

/// Converter with pluggable encoding and decoding algorithms
///
/// Both directions validate first and only then run the selected
/// algorithm; a rejected input never reaches the arithmetic. The converter
/// holds no mutable state and can be shared freely between threads.
pub struct RomanConverter {
    /// Integer to numeral strategy
    encoder: Box<dyn NumeralEncoder>,

    /// Numeral to integer strategy
    decoder: Box<dyn NumeralDecoder>,
}

impl RomanConverter {
    /// Create a new converter
    pub fn new(encoder: Box<dyn NumeralEncoder>, decoder: Box<dyn NumeralDecoder>) -> Self {
        Self { encoder, decoder }
    }

    /// Encode an integer-like value as a canonical Roman numeral
    ///
    /// # Errors
    /// `InvalidInputError` for non-numeric or fractional input, or for
    /// values outside 1-4999.
    pub fn encode(&self, value: impl Into<EncodeInput>) -> ConversionResult<String> {
        let value = validate_integer(value)?;
        Ok(self.encoder.encode(value))
    }

    /// Decode a canonical Roman numeral
    ///
    /// # Errors
    /// `InvalidInputError` for the empty string or anything that is not a
    /// canonical numeral of a value in 1-4999.
    pub fn decode(&self, numeral: &str) -> ConversionResult<u16> {
        let numeral = validate_numeral(numeral)?;
        Ok(self.decoder.decode(numeral))
    }

    pub fn encoder_name(&self) -> &str {
        self.encoder.name()
    }

    pub fn decoder_name(&self) -> &str {
        self.decoder.name()
    }
}

impl Default for RomanConverter {
    fn default() -> Self {
        Self::new(Box::new(GreedyEncoder::new()), Box::new(PairwiseDecoder::new()))
    }
}

impl std::fmt::Debug for RomanConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RomanConverter")
            .field("encoder", &self.encoder.name())
            .field("decoder", &self.decoder.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{DivmodEncoder, TableScanDecoder};
    use crate::validation::InvalidInputReason;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_default_converter() {
        let converter = RomanConverter::default();
        assert_eq!(converter.encoder_name(), "Greedy");
        assert_eq!(converter.decoder_name(), "Pairwise");
        assert_eq!(converter.encode(1994).unwrap(), "MCMXCIV");
        assert_eq!(converter.decode("MCMXCIV").unwrap(), 1994);
    }

    #[test]
    fn test_rejects_before_computing() {
        let converter = RomanConverter::default();

        // Arithmetically 4, but not canonical
        let err = converter.decode("IIII").unwrap_err();
        assert_eq!(err.reason(), InvalidInputReason::InvalidNumeral);

        let err = converter.encode(5000).unwrap_err();
        assert_eq!(err.reason(), InvalidInputReason::OutOfRange);
    }

    #[test]
    fn test_custom_algorithms() {
        let converter = RomanConverter::new(
            Box::new(DivmodEncoder::new()),
            Box::new(TableScanDecoder::new()),
        );
        assert_eq!(converter.encode("55").unwrap(), "LV");
        assert_eq!(converter.decode("LV").unwrap(), 55);
        assert_eq!(
            format!("{:?}", converter),
            "RomanConverter { encoder: \"Divmod\", decoder: \"TableScan\" }"
        );
    }

    #[test]
    fn test_shared_between_threads() {
        let converter = Arc::new(RomanConverter::default());

        let handles: Vec<_> = (0..4u16)
            .map(|t| {
                let converter = Arc::clone(&converter);
                thread::spawn(move || {
                    for n in (1 + t..=4999).step_by(4) {
                        let numeral = converter.encode(n).unwrap();
                        assert_eq!(converter.decode(&numeral).unwrap(), n);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
