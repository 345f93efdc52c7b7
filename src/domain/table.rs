// ============================================================================
// Numeral Tables
// Immutable symbol/value tables shared by every conversion algorithm
// ============================================================================

/// Smallest value representable by a canonical numeral
pub const MIN_VALUE: u16 = 1;

/// Largest value representable by a canonical numeral (`MMMMCMXCIX`)
pub const MAX_VALUE: u16 = 4999;

/// Length of the longest canonical numeral (`MMMMDCCCLXXXVIII` = 4888)
pub const MAX_NUMERAL_LEN: usize = 16;

/// Extended numeral table: every canonical form, strictly descending by value.
///
/// The greedy encoder and the table-scan decoder both depend on this order.
pub const NUMERAL_TABLE: [(&str, u16); 13] = [
    ("M", 1000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

/// Basic symbol map: single-letter symbols only
pub const BASIC_SYMBOLS: [(u8, u16); 7] = [
    (b'M', 1000),
    (b'D', 500),
    (b'C', 100),
    (b'L', 50),
    (b'X', 10),
    (b'V', 5),
    (b'I', 1),
];

/// Look up the value of a single-letter symbol.
#[inline]
pub const fn symbol_value(symbol: u8) -> Option<u16> {
    match symbol {
        b'M' => Some(1000),
        b'D' => Some(500),
        b'C' => Some(100),
        b'L' => Some(50),
        b'X' => Some(10),
        b'V' => Some(5),
        b'I' => Some(1),
        _ => None,
    }
}

/// Value of a symbol that is already known to be one of `MDCLXVI`.
///
/// Returns 0 for anything else; validated numerals never contain such bytes.
#[inline]
pub(crate) const fn basic_value(symbol: u8) -> u16 {
    match symbol_value(symbol) {
        Some(value) => value,
        None => 0,
    }
}
