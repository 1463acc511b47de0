//! Ancillary ciphers: character shifts and transpositions.
//!
//! These are stateless transforms. Caesar keeps non-letters in place;
//! Vigenere and Row-Column strip them before processing.

pub mod caesar;
pub mod rail_fence;
pub mod row_column;
pub mod vigenere;
