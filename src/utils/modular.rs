//! Modular arithmetic over small moduli.
//!
//! Used by the Hill cipher to reduce matrix products and invert the key
//! determinant modulo 26.

use crate::error::{CipherError, Result};

/// Modulus of the letter alphabet.
pub const MODULUS: i64 = 26;

/// Reduces `x` into `[0, 25]`, including negative `x`.
///
/// # Examples
///
/// ```
/// use classicrypt::utils::modular::canonical_mod26;
///
/// assert_eq!(canonical_mod26(27), 1);
/// assert_eq!(canonical_mod26(-1), 25);
/// ```
pub fn canonical_mod26(x: i64) -> i64 {
    x.rem_euclid(MODULUS)
}

/// Reduces `x` into `[0, m - 1]` for a positive modulus `m`.
pub fn canonical_mod(x: i64, m: i64) -> i64 {
    x.rem_euclid(m)
}

/// Greatest common divisor of `|a|` and `|b|`.
///
/// Works on magnitudes as `u64`, so `i64::MIN` is handled.
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Computes the multiplicative inverse of `a` modulo `m`.
///
/// Uses the extended Euclidean algorithm. The result is the unique
/// `x` in `[1, m - 1]` with `(a * x) mod m == 1`.
///
/// # Errors
/// Returns [`CipherError::NoInverseExists`] when `gcd(a, m) != 1` or `m < 2`.
///
/// # Examples
///
/// ```
/// use classicrypt::utils::modular::mod_inverse;
///
/// assert_eq!(mod_inverse(7, 26).unwrap(), 15);
/// assert!(mod_inverse(2, 26).is_err());
/// ```
pub fn mod_inverse(a: i64, m: i64) -> Result<i64> {
    let no_inverse = CipherError::NoInverseExists { value: a, modulus: m };
    if m < 2 {
        return Err(no_inverse);
    }

    let (mut old_r, mut r) = (canonical_mod(a, m), m);
    let (mut old_s, mut s) = (1i64, 0i64);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }

    if old_r != 1 {
        return Err(no_inverse);
    }
    Ok(canonical_mod(old_s, m))
}
