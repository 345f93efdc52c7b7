// ============================================================================
// Validation Module
// Input guards and the error type shared by both conversion directions
// ============================================================================
//
// This module provides:
// - InvalidInputError: the single rejection error, with its reason
// - validate_integer / validate_numeral: guards run before any arithmetic
// - ValidInteger / ValidNumeral: proofs that a value passed its guard

mod errors;
mod validator;

pub use errors::{ConversionResult, InvalidInputError, InvalidInputReason};
pub use validator::{
    is_valid_integer, is_valid_numeral, validate_integer, validate_numeral, ValidInteger,
    ValidNumeral,
};
