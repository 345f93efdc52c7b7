// ============================================================================
// Engine Module
// Conversion algorithms and the converter that dispatches to them
// ============================================================================

mod converter;
mod divmod;
mod greedy;
mod pairwise;
mod string_replacement;
mod subtraction;
mod table_scan;

pub mod factory;

pub use converter::RomanConverter;
pub use divmod::DivmodEncoder;
pub use factory::{create_decoder, create_encoder, create_from_config, ConverterBuilder};
pub use greedy::GreedyEncoder;
pub use pairwise::PairwiseDecoder;
pub use string_replacement::StringReplacementEncoder;
pub use subtraction::SubtractionDecoder;
pub use table_scan::TableScanDecoder;
