// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod numeral_decoder;
mod numeral_encoder;

pub use numeral_decoder::NumeralDecoder;
pub use numeral_encoder::NumeralEncoder;
