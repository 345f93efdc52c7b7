// ============================================================================
// Converter Configuration
// Selects the encoding and decoding algorithms used by a converter
// ============================================================================

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Encoder Algorithm Type
// ============================================================================

/// Defines the integer-to-numeral algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum EncoderAlgorithm {
    /// Greedy subtraction over the numeral table (canonical)
    #[default]
    Greedy,

    /// Quotient/remainder per table entry, stops once the remainder is zero
    Divmod,

    /// Unary string of `I`s collapsed by ordered replacements
    StringReplacement,
}

impl EncoderAlgorithm {
    /// Every encoder, in the order comparison harnesses report them
    pub const ALL: [EncoderAlgorithm; 3] = [
        EncoderAlgorithm::Greedy,
        EncoderAlgorithm::Divmod,
        EncoderAlgorithm::StringReplacement,
    ];

    /// Configuration name (as accepted by `FromStr`)
    pub fn as_str(&self) -> &'static str {
        match self {
            EncoderAlgorithm::Greedy => "greedy",
            EncoderAlgorithm::Divmod => "divmod",
            EncoderAlgorithm::StringReplacement => "string-replacement",
        }
    }
}

impl fmt::Display for EncoderAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncoderAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EncoderAlgorithm::ALL
            .into_iter()
            .find(|algo| algo.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown encoder algorithm: {}", s))
    }
}

// ============================================================================
// Decoder Algorithm Type
// ============================================================================

/// Defines the numeral-to-integer algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DecoderAlgorithm {
    /// Adjacent-pair comparison (canonical)
    #[default]
    Pairwise,

    /// Running total with a double-subtraction correction
    Subtraction,

    /// Prefix scan over the full numeral table
    TableScan,
}

impl DecoderAlgorithm {
    /// Every decoder, in the order comparison harnesses report them
    pub const ALL: [DecoderAlgorithm; 3] = [
        DecoderAlgorithm::Pairwise,
        DecoderAlgorithm::Subtraction,
        DecoderAlgorithm::TableScan,
    ];

    /// Configuration name (as accepted by `FromStr`)
    pub fn as_str(&self) -> &'static str {
        match self {
            DecoderAlgorithm::Pairwise => "pairwise",
            DecoderAlgorithm::Subtraction => "subtraction",
            DecoderAlgorithm::TableScan => "table-scan",
        }
    }
}

impl fmt::Display for DecoderAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecoderAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DecoderAlgorithm::ALL
            .into_iter()
            .find(|algo| algo.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown decoder algorithm: {}", s))
    }
}

// ============================================================================
// Complete Converter Configuration
// ============================================================================

/// Configuration for creating a [`RomanConverter`](crate::engine::RomanConverter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConverterConfig {
    /// Integer to numeral algorithm
    #[cfg_attr(feature = "serde", serde(default))]
    pub encoder: EncoderAlgorithm,

    /// Numeral to integer algorithm
    #[cfg_attr(feature = "serde", serde(default))]
    pub decoder: DecoderAlgorithm,
}

impl ConverterConfig {
    /// Create a new configuration
    pub fn new(encoder: EncoderAlgorithm, decoder: DecoderAlgorithm) -> Self {
        Self { encoder, decoder }
    }

    /// Builder method: Set the encoder algorithm
    pub fn with_encoder(mut self, encoder: EncoderAlgorithm) -> Self {
        self.encoder = encoder;
        self
    }

    /// Builder method: Set the decoder algorithm
    pub fn with_decoder(mut self, decoder: DecoderAlgorithm) -> Self {
        self.decoder = decoder;
        self
    }

    /// Serialize to JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    /// Parse from JSON; missing fields fall back to the canonical algorithms
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid converter config: {}", e))
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ConverterConfig {
    /// Greedy encoding, pairwise decoding
    pub fn canonical() -> Self {
        Self::new(EncoderAlgorithm::Greedy, DecoderAlgorithm::Pairwise)
    }

    /// Divmod encoding, subtraction-loop decoding
    pub fn subtraction_based() -> Self {
        Self::new(EncoderAlgorithm::Divmod, DecoderAlgorithm::Subtraction)
    }
}
