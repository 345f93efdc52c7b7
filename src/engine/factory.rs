// ============================================================================
// Converter Factory
// Creates converters and individual algorithms from configuration
// ============================================================================

use crate::domain::config::{ConverterConfig, DecoderAlgorithm, EncoderAlgorithm};
use crate::engine::{
    DivmodEncoder, GreedyEncoder, PairwiseDecoder, RomanConverter, StringReplacementEncoder,
    SubtractionDecoder, TableScanDecoder,
};
use crate::interfaces::{NumeralDecoder, NumeralEncoder};

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a converter from configuration
///
/// # Example
/// ```
/// use roman_converter::prelude::*;
///
/// let config = ConverterConfig::subtraction_based();
/// let converter = create_from_config(&config);
/// assert_eq!(converter.encode(1994).unwrap(), "MCMXCIV");
/// assert_eq!(converter.decoder_name(), "Subtraction");
/// ```
pub fn create_from_config(config: &ConverterConfig) -> RomanConverter {
    let converter = RomanConverter::new(
        create_encoder(config.encoder),
        create_decoder(config.decoder),
    );

    tracing::debug!(
        encoder = converter.encoder_name(),
        decoder = converter.decoder_name(),
        "Created roman converter"
    );

    converter
}

/// Creates the encoding algorithm for the given type
pub fn create_encoder(algo_type: EncoderAlgorithm) -> Box<dyn NumeralEncoder> {
    match algo_type {
        EncoderAlgorithm::Greedy => Box::new(GreedyEncoder::new()),
        EncoderAlgorithm::Divmod => Box::new(DivmodEncoder::new()),
        EncoderAlgorithm::StringReplacement => Box::new(StringReplacementEncoder::new()),
    }
}

/// Creates the decoding algorithm for the given type
pub fn create_decoder(algo_type: DecoderAlgorithm) -> Box<dyn NumeralDecoder> {
    match algo_type {
        DecoderAlgorithm::Pairwise => Box::new(PairwiseDecoder::new()),
        DecoderAlgorithm::Subtraction => Box::new(SubtractionDecoder::new()),
        DecoderAlgorithm::TableScan => Box::new(TableScanDecoder::new()),
    }
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating converters with fluent API
///
/// # Example
/// ```
/// use roman_converter::prelude::*;
///
/// let converter = ConverterBuilder::new()
///     .string_replacement_encoding()
///     .table_scan_decoding()
///     .build();
///
/// assert_eq!(converter.encode(9).unwrap(), "IX");
/// assert_eq!(converter.decode("IX").unwrap(), 9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConverterBuilder {
    config: ConverterConfig,
}

impl ConverterBuilder {
    /// Create a builder with the canonical algorithms selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: ConverterConfig) -> Self {
        Self { config }
    }

    // ========================================================================
    // Encoder Configuration
    // ========================================================================

    pub fn encoder(mut self, encoder: EncoderAlgorithm) -> Self {
        self.config.encoder = encoder;
        self
    }

    /// Greedy subtraction encoding (default)
    pub fn greedy_encoding(self) -> Self {
        self.encoder(EncoderAlgorithm::Greedy)
    }

    pub fn divmod_encoding(self) -> Self {
        self.encoder(EncoderAlgorithm::Divmod)
    }

    pub fn string_replacement_encoding(self) -> Self {
        self.encoder(EncoderAlgorithm::StringReplacement)
    }

    // ========================================================================
    // Decoder Configuration
    // ========================================================================

    pub fn decoder(mut self, decoder: DecoderAlgorithm) -> Self {
        self.config.decoder = decoder;
        self
    }

    /// Adjacent-pair decoding (default)
    pub fn pairwise_decoding(self) -> Self {
        self.decoder(DecoderAlgorithm::Pairwise)
    }

    pub fn subtraction_decoding(self) -> Self {
        self.decoder(DecoderAlgorithm::Subtraction)
    }

    pub fn table_scan_decoding(self) -> Self {
        self.decoder(DecoderAlgorithm::TableScan)
    }

    // ========================================================================
    // Build
    // ========================================================================

    pub fn build(self) -> RomanConverter {
        create_from_config(&self.config)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &ConverterConfig {
        &self.config
    }
}
