// ============================================================================
// Roman Converter Library
// Roman numeral <-> integer conversion with pluggable algorithms
// ============================================================================

//! # Roman Converter
//!
//! Conversion between Roman numerals and integers in the range 1-4999.
//!
//! ## Features
//!
//! - **Validation first**: both directions reject bad input before any arithmetic
//! - **Canonical output**: `encode` only produces, and `decode` only accepts,
//!   the classical subtractive forms (`IV`, `IX`, `XL`, `XC`, `CD`, `CM`)
//! - **Pluggable algorithms** (Greedy, Divmod, StringReplacement encoders;
//!   Pairwise, Subtraction, TableScan decoders) for side-by-side benchmarking
//! - **No shared mutable state**: tables are constants, every call is pure
//!
//! ## Example
//!
//! ```rust
//! use roman_converter::{decode, encode};
//!
//! assert_eq!(encode(1994).unwrap(), "MCMXCIV");
//! assert_eq!(encode("55").unwrap(), "LV");
//! assert_eq!(decode("MMMCMXCIX").unwrap(), 3999);
//!
//! assert!(encode(1.5).is_err());
//! assert!(decode("IIII").is_err());
//! ```
//!
//! Picking other algorithms:
//!
//! ```rust
//! use roman_converter::prelude::*;
//!
//! let converter = ConverterBuilder::new()
//!     .divmod_encoding()
//!     .table_scan_decoding()
//!     .build();
//!
//! assert_eq!(converter.encode(2024).unwrap(), "MMXXIV");
//! assert_eq!(converter.decode("MMXXIV").unwrap(), 2024);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod validation;

use domain::EncodeInput;
use engine::{GreedyEncoder, PairwiseDecoder};
use interfaces::{NumeralDecoder, NumeralEncoder};
use validation::{validate_integer, validate_numeral, ConversionResult};

/// Encode an integer-like value as a canonical Roman numeral.
///
/// Uses the greedy algorithm. Accepts any integer type, floats and
/// decimals without a fractional part, and textual integers.
///
/// # Errors
/// `InvalidInputError` for non-numeric or fractional input, or for values
/// outside 1-4999.
pub fn encode(value: impl Into<EncodeInput>) -> ConversionResult<String> {
    let value = validate_integer(value)?;
    Ok(GreedyEncoder::new().encode(value))
}

/// Decode a canonical Roman numeral to its value.
///
/// Uses the pairwise algorithm.
///
/// # Errors
/// `InvalidInputError` for the empty string or any string that is not the
/// canonical numeral of a value in 1-4999.
pub fn decode(numeral: &str) -> ConversionResult<u16> {
    let numeral = validate_numeral(numeral)?;
    Ok(PairwiseDecoder::new().decode(numeral))
}

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        ConverterConfig, DecoderAlgorithm, EncodeInput, EncoderAlgorithm, MAX_VALUE, MIN_VALUE,
    };
    pub use crate::engine::{
        create_decoder, create_encoder, create_from_config, ConverterBuilder, DivmodEncoder,
        GreedyEncoder, PairwiseDecoder, RomanConverter, StringReplacementEncoder,
        SubtractionDecoder, TableScanDecoder,
    };
    pub use crate::interfaces::{NumeralDecoder, NumeralEncoder};
    pub use crate::validation::{
        is_valid_integer, is_valid_numeral, validate_integer, validate_numeral,
        ConversionResult, InvalidInputError, InvalidInputReason, ValidInteger, ValidNumeral,
    };
    pub use crate::{decode, encode};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use proptest::prelude::*;
    use quickcheck::quickcheck;

    const KNOWN_VALUES: [(u16, &str); 56] = [
        (1, "I"),
        (2, "II"),
        (3, "III"),
        (4, "IV"),
        (5, "V"),
        (6, "VI"),
        (7, "VII"),
        (8, "VIII"),
        (9, "IX"),
        (10, "X"),
        (50, "L"),
        (100, "C"),
        (500, "D"),
        (1000, "M"),
        (31, "XXXI"),
        (148, "CXLVIII"),
        (294, "CCXCIV"),
        (312, "CCCXII"),
        (421, "CDXXI"),
        (528, "DXXVIII"),
        (621, "DCXXI"),
        (782, "DCCLXXXII"),
        (870, "DCCCLXX"),
        (941, "CMXLI"),
        (1043, "MXLIII"),
        (1110, "MCX"),
        (1226, "MCCXXVI"),
        (1301, "MCCCI"),
        (1485, "MCDLXXXV"),
        (1509, "MDIX"),
        (1607, "MDCVII"),
        (1754, "MDCCLIV"),
        (1832, "MDCCCXXXII"),
        (1993, "MCMXCIII"),
        (2074, "MMLXXIV"),
        (2152, "MMCLII"),
        (2212, "MMCCXII"),
        (2343, "MMCCCXLIII"),
        (2499, "MMCDXCIX"),
        (2574, "MMDLXXIV"),
        (2646, "MMDCXLVI"),
        (2723, "MMDCCXXIII"),
        (2892, "MMDCCCXCII"),
        (2975, "MMCMLXXV"),
        (3051, "MMMLI"),
        (3185, "MMMCLXXXV"),
        (3250, "MMMCCL"),
        (3313, "MMMCCCXIII"),
        (3408, "MMMCDVIII"),
        (3501, "MMMDI"),
        (3610, "MMMDCX"),
        (3743, "MMMDCCXLIII"),
        (3844, "MMMDCCCXLIV"),
        (3888, "MMMDCCCLXXXVIII"),
        (3940, "MMMCMXL"),
        (3999, "MMMCMXCIX"),
    ];

    #[test]
    fn test_encode_known_values() {
        for (value, numeral) in KNOWN_VALUES {
            assert_eq!(encode(value).unwrap(), numeral);
        }
        assert_eq!(encode(40).unwrap(), "XL");
        assert_eq!(encode(90).unwrap(), "XC");
        assert_eq!(encode(400).unwrap(), "CD");
        assert_eq!(encode(900).unwrap(), "CM");
        assert_eq!(encode(1994).unwrap(), "MCMXCIV");
    }

    #[test]
    fn test_decode_known_values() {
        for (value, numeral) in KNOWN_VALUES {
            assert_eq!(decode(numeral).unwrap(), value);
        }
        assert_eq!(decode("MCMXCIV").unwrap(), 1994);
    }

    #[test]
    fn test_text_input() {
        assert_eq!(encode("55").unwrap(), "LV");
        assert_eq!(encode(String::from("4999")).unwrap(), "MMMMCMXCIX");
    }

    #[test]
    fn test_rejected_encode_inputs() {
        assert_eq!(encode(0).unwrap_err().reason(), InvalidInputReason::OutOfRange);
        assert_eq!(encode(-1).unwrap_err().reason(), InvalidInputReason::OutOfRange);
        assert_eq!(encode(5000).unwrap_err().reason(), InvalidInputReason::OutOfRange);
        assert_eq!(encode(1.5).unwrap_err().reason(), InvalidInputReason::Fractional);
        assert_eq!(encode("V").unwrap_err().reason(), InvalidInputReason::NonNumeric);
        assert_eq!(encode("").unwrap_err().reason(), InvalidInputReason::NonNumeric);
    }

    #[test]
    fn test_rejected_decode_inputs() {
        assert_eq!(decode("").unwrap_err().reason(), InvalidInputReason::Empty);
        for numeral in ["MMMMM", "DD", "CCCC", "VIV", "XLXL", "vi", "IIII"] {
            let err = decode(numeral).unwrap_err();
            assert_eq!(err.reason(), InvalidInputReason::InvalidNumeral);
            assert_eq!(err.input(), format!("{:?}", numeral));
        }
    }

    #[test]
    fn test_round_trip_full_range() {
        for n in MIN_VALUE..=MAX_VALUE {
            let numeral = encode(n).unwrap();
            assert!(is_valid_numeral(&numeral), "{} -> {}", n, numeral);
            assert_eq!(decode(&numeral).unwrap(), n);
        }
    }

    #[test]
    fn test_all_algorithms_agree() {
        let numerals: Vec<String> = (MIN_VALUE..=MAX_VALUE)
            .map(|n| encode(n).unwrap())
            .collect();

        for algo in EncoderAlgorithm::ALL {
            let converter = ConverterBuilder::new().encoder(algo).build();
            for (n, numeral) in (MIN_VALUE..=MAX_VALUE).zip(&numerals) {
                assert_eq!(&converter.encode(n).unwrap(), numeral, "{}", algo);
            }
        }

        for algo in DecoderAlgorithm::ALL {
            let converter = ConverterBuilder::new().decoder(algo).build();
            for (n, numeral) in (MIN_VALUE..=MAX_VALUE).zip(&numerals) {
                assert_eq!(converter.decode(numeral).unwrap(), n, "{}", algo);
            }
        }
    }

    #[test]
    fn test_encoders_agree_quickcheck() {
        fn encoders_agree(n: u16) -> bool {
            let value = validate_integer(n % MAX_VALUE + 1).unwrap();
            let expected = GreedyEncoder::new().encode(value);
            DivmodEncoder::new().encode(value) == expected
                && StringReplacementEncoder::new().encode(value) == expected
        }
        quickcheck(encoders_agree as fn(u16) -> bool);
    }

    proptest! {
        #[test]
        fn prop_accepted_numerals_are_canonical(s in "[MDCLXVI]{1,16}") {
            if let Ok(value) = decode(&s) {
                prop_assert_eq!(encode(value).unwrap(), s);
            }
        }

        #[test]
        fn prop_decoders_agree(n in MIN_VALUE..=MAX_VALUE) {
            let numeral = encode(n).unwrap();
            let valid = validate_numeral(&numeral).unwrap();
            prop_assert_eq!(SubtractionDecoder::new().decode(valid), n);
            prop_assert_eq!(TableScanDecoder::new().decode(valid), n);
            prop_assert_eq!(PairwiseDecoder::new().decode(valid), n);
        }
    }
}
