// ============================================================================
// Basic Usage Example
// ============================================================================

use roman_converter::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Roman Converter Example ===\n");

    // Canonical algorithms through the free functions
    println!("Encoding...");
    for value in [1, 4, 9, 14, 40, 90, 400, 900, 1994, 3999, 4999] {
        match encode(value) {
            Ok(numeral) => println!("  {:>4} -> {}", value, numeral),
            Err(err) => println!("  {:>4} -> error: {}", value, err),
        }
    }

    println!("\nDecoding...");
    for numeral in ["I", "XIX", "LIV", "DCCLXXII", "MCCCXXIV", "MMMMCMXCIX"] {
        match decode(numeral) {
            Ok(value) => println!("  {:>10} -> {}", numeral, value),
            Err(err) => println!("  {:>10} -> error: {}", numeral, err),
        }
    }

    // Rejected input never reaches the arithmetic
    println!("\n=== Rejected Input ===");
    for input in [EncodeInput::from(0), 1.5.into(), 5000.into(), "V".into()] {
        if let Err(err) = encode(input) {
            println!("  encode: {}", err);
        }
    }
    for numeral in ["", "IIII", "VIV", "vi"] {
        if let Err(err) = decode(numeral) {
            println!("  decode: {}", err);
        }
    }

    // Every algorithm pairing agrees
    println!("\n=== Algorithm Pairings ===");
    for encoder in EncoderAlgorithm::ALL {
        for decoder in DecoderAlgorithm::ALL {
            let converter = create_from_config(&ConverterConfig::new(encoder, decoder));
            let numeral = converter.encode(2888).unwrap_or_default();
            let value = converter.decode(&numeral).unwrap_or_default();
            println!(
                "  {:<18} / {:<12} 2888 -> {} -> {}",
                converter.encoder_name(),
                converter.decoder_name(),
                numeral,
                value
            );
        }
    }
}
