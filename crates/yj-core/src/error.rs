//! Error types for the divination core.

use crate::hexagram::Pattern;

/// Errors that can occur while building or resolving a reading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum YiError {
    /// A six-line pattern has no entry in the hexagram table.
    ///
    /// This is an internal-consistency failure of the table data, never a
    /// user-facing condition.
    #[error("hexagram table has no entry for pattern {0}")]
    PatternNotFound(Pattern),

    /// A reading was resolved with the wrong number of lines.
    #[error("a reading needs exactly 6 lines, got {got}")]
    IncompleteReading {
        /// How many lines were supplied.
        got: usize,
    },

    /// A numeric line value outside {6, 7, 8, 9}.
    #[error("invalid line value: {0} (expected 6, 7, 8 or 9)")]
    InvalidLineValue(u8),

    /// A bit pattern wider than six lines.
    #[error("invalid hexagram pattern: {0} (expected 0-63)")]
    InvalidPattern(u8),

    /// Two table entries share the same bit pattern.
    #[error("hexagram table has duplicate pattern {0}")]
    DuplicatePattern(Pattern),

    /// Two table entries share the same King Wen number, or a number is out of range.
    #[error("hexagram table has duplicate or out-of-range number {0}")]
    DuplicateNumber(u8),

    /// A lookup by number or name matched nothing.
    #[error("unknown hexagram: {0}")]
    UnknownHexagram(String),
}

/// Convenience result type for core operations.
pub type YiResult<T> = Result<T, YiError>;
