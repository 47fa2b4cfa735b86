//! Errors raised by the generation pipeline.

use thiserror::Error;

use crate::cancel::Cancelled;
use crate::color::ParseColorError;

/// Why [`SchemeGenerator::generate`](super::SchemeGenerator::generate)
/// produced no scheme.
///
/// No variant carries partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// A hex source could not be parsed.
    #[error("invalid hex color: {0}")]
    InvalidHex(#[from] ParseColorError),

    /// The source held no opaque pixels.
    #[error("source contains no opaque pixels")]
    EmptySource,

    /// The caller's cancellation token was set.
    #[error("generation cancelled")]
    Cancelled,
}

impl GenerateError {
    /// Machine-readable tag for this error.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidHex(_) => "invalid_hex",
            Self::EmptySource => "empty_source",
            Self::Cancelled => "cancelled",
        }
    }
}

impl From<Cancelled> for GenerateError {
    fn from(_: Cancelled) -> Self {
        Self::Cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(
            GenerateError::from(ParseColorError::Empty).kind(),
            "invalid_hex"
        );
        assert_eq!(GenerateError::EmptySource.kind(), "empty_source");
        assert_eq!(GenerateError::from(Cancelled).kind(), "cancelled");
    }

    #[test]
    fn test_messages_include_cause() {
        let err = GenerateError::from(ParseColorError::InvalidLength(5));
        assert_eq!(
            err.to_string(),
            "invalid hex color: invalid hex color length 5 (expected 3, 4, 6, or 8 digits)"
        );
    }
}
