//! Error types for the classicrypt library.

use thiserror::Error;

/// Result alias used by every fallible cipher operation.
pub type Result<T> = std::result::Result<T, CipherError>;

/// Errors produced by the classicrypt library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Hill key matrix is not 2x2.
    #[error("Hill key matrix must be 2x2, got {rows}x{cols}")]
    InvalidKeyShape { rows: usize, cols: usize },

    /// Hill key determinant has no inverse modulo 26.
    #[error("Hill key matrix is not invertible modulo 26 (determinant {determinant})")]
    NonInvertibleKey { determinant: i64 },

    /// Input length is not a multiple of the required block size.
    #[error("Input length {length} is not a multiple of {multiple}")]
    InvalidInputLength { length: usize, multiple: usize },

    /// Key cannot drive the cipher (empty key, zero rails).
    #[error("Invalid key: {reason}")]
    InvalidKey { reason: &'static str },

    /// `value` shares a factor with `modulus`.
    #[error("{value} has no multiplicative inverse modulo {modulus}")]
    NoInverseExists { value: i64, modulus: i64 },
}
