//! Shared helpers: alphabet normalization and modular arithmetic.

pub mod alphabet;
pub mod modular;
