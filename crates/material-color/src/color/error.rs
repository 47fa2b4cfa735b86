//! Error type for hex color parsing.

use thiserror::Error;

/// Error returned when parsing a hex color string.
///
/// Parsing accepts `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA` (the `#` is
/// optional, case-insensitive, surrounding whitespace ignored).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Nothing left after trimming whitespace and `#`.
    #[error("empty color string")]
    Empty,

    /// Hex string has a digit count other than 3, 4, 6 or 8.
    #[error("invalid hex color length {0} (expected 3, 4, 6, or 8 digits)")]
    InvalidLength(usize),

    /// A character that is not a hexadecimal digit.
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}
