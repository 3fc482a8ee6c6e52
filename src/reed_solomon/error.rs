//! Error types for Reed-Solomon operations

use thiserror::Error;

/// Why a corrupted codeword could not be repaired
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UncorrectableKind {
    /// The error locator has a higher degree than the code can correct
    #[error("locator implies {errors} errors but at most {capacity} can be corrected")]
    TooManyErrors { errors: usize, capacity: usize },

    /// Chien search found a different number of roots than the locator degree
    #[error("locator of degree {expected} has {found} roots in the field")]
    LocatorRootMismatch { expected: usize, found: usize },

    /// A locator root points past the end of the received codeword
    #[error("locator root at exponent {exponent} is outside a {len}-symbol codeword")]
    RootOutOfRange { exponent: usize, len: usize },

    /// Forney denominator vanished at a located position
    #[error("locator derivative is zero at position {position}")]
    SingularDerivative { position: usize },

    /// Syndromes were still nonzero after applying the correction
    #[error("corrected codeword failed syndrome re-verification")]
    VerificationFailed,
}

/// Errors that can occur while encoding or decoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsError {
    /// Parity count, codeword length or codec settings are out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Message plus parity does not fit in one codeword
    #[error("Message of {len} bytes with {nsym} parity symbols exceeds the {max}-byte limit")]
    MessageTooLong { len: usize, nsym: usize, max: usize },

    /// Field division or inversion by zero
    #[error("Division by zero in GF(2^8)")]
    DivisionByZero,

    /// Malformed polynomial operand
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Errors were detected but cannot be corrected
    #[error("Uncorrectable codeword: {0}")]
    Uncorrectable(UncorrectableKind),
}

impl RsError {
    /// True when decoding detected corruption beyond the code's capacity
    pub fn is_uncorrectable(&self) -> bool {
        matches!(self, RsError::Uncorrectable(_))
    }
}

impl From<UncorrectableKind> for RsError {
    fn from(kind: UncorrectableKind) -> Self {
        RsError::Uncorrectable(kind)
    }
}

pub type RsResult<T> = Result<T, RsError>;
