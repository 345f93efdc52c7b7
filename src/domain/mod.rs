// ============================================================================
// Domain Models Module
// Numeral tables, encoder input and converter configuration
// ============================================================================

pub mod config;
pub mod input;
pub mod table;

pub use config::{ConverterConfig, DecoderAlgorithm, EncoderAlgorithm};
pub use input::EncodeInput;
pub use table::{BASIC_SYMBOLS, MAX_NUMERAL_LEN, MAX_VALUE, MIN_VALUE, NUMERAL_TABLE};
