//! Error types for codec operations

use thiserror::Error;

/// Error type for codec operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("alphabet too small: {0} < 2")]
    AlphabetTooSmall(usize),
    #[error("duplicate symbol {0:?} at {1} and {2}")]
    DuplicateSymbol(char, usize, usize), // symbol, first position, repeated position
    #[error("unknown alphabet id: {0}")]
    UnknownAlphabet(u32),
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),
    #[error("invalid symbol {0:?} at {1}")]
    InvalidSymbol(char, usize), // symbol, position
    #[error("checksum mismatch")]
    ChecksumMismatch,
}
