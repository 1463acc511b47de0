//! Hill cipher with a 2x2 key matrix modulo 26.
//!
//! Plaintext is processed in letter pairs `(p1, p2)`:
//!
//! ```text
//! c1 = (k00 * p1 + k01 * p2) mod 26
//! c2 = (k10 * p1 + k11 * p2) mod 26
//! ```
//!
//! Decryption applies the same transform with the inverse key matrix,
//! recomputed on every call from the determinant's inverse modulo 26.

use tracing::{debug, trace};

use crate::error::{CipherError, Result};
use crate::utils::alphabet::{letter_value, letters_only, value_letter, FILLER};
use crate::utils::modular::{canonical_mod26, mod_inverse, MODULUS};

/// Dimension of the supported key matrix.
const DIM: usize = 2;

/// 2x2 Hill key matrix with entries reduced modulo 26.
///
/// Invertibility is not checked here; it is validated when decrypting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyMatrix {
    entries: [[i64; DIM]; DIM],
}

impl KeyMatrix {
    /// Creates a key matrix, reducing every entry into `[0, 25]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::hill::KeyMatrix;
    ///
    /// let key = KeyMatrix::new([[3, 3], [2, 5]]);
    /// assert_eq!(key.determinant(), 9);
    /// assert_eq!(KeyMatrix::new([[29, -1], [0, 1]]).entries(), [[3, 25], [0, 1]]);
    /// ```
    pub fn new(entries: [[i64; DIM]; DIM]) -> Self {
        let mut reduced = entries;
        for row in reduced.iter_mut() {
            for value in row.iter_mut() {
                *value = canonical_mod26(*value);
            }
        }
        KeyMatrix { entries: reduced }
    }

    /// Builds a key matrix from rows of arbitrary shape.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKeyShape`] unless there are exactly two
    /// rows of exactly two entries each.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::hill::KeyMatrix;
    ///
    /// assert!(KeyMatrix::from_rows(&[vec![3, 3], vec![2, 5]]).is_ok());
    /// assert!(KeyMatrix::from_rows(&[[1, 2, 3]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self> {
        let bad_row = rows.iter().map(|row| row.as_ref()).find(|row| row.len() != DIM);
        if rows.len() != DIM || bad_row.is_some() {
            let cols = bad_row
                .or_else(|| rows.first().map(|row| row.as_ref()))
                .map_or(0, <[i64]>::len);
            debug!(rows = rows.len(), cols, "rejecting Hill key of wrong shape");
            return Err(CipherError::InvalidKeyShape {
                rows: rows.len(),
                cols,
            });
        }

        let row0 = rows[0].as_ref();
        let row1 = rows[1].as_ref();
        Ok(Self::new([[row0[0], row0[1]], [row1[0], row1[1]]]))
    }

    /// Returns the reduced entries.
    pub fn entries(&self) -> [[i64; DIM]; DIM] {
        self.entries
    }

    /// Returns `(k00 * k11 - k01 * k10) mod 26` in `[0, 25]`.
    pub fn determinant(&self) -> i64 {
        let [[a, b], [c, d]] = self.entries;
        canonical_mod26(a * d - b * c)
    }

    /// Returns `true` if the determinant is coprime with 26.
    pub fn is_invertible(&self) -> bool {
        mod_inverse(self.determinant(), MODULUS).is_ok()
    }

    /// Computes the inverse key matrix modulo 26.
    ///
    /// # Errors
    /// Returns [`CipherError::NonInvertibleKey`] if the determinant has no
    /// inverse modulo 26.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::hill::KeyMatrix;
    ///
    /// let inv = KeyMatrix::new([[3, 3], [2, 5]]).inverse().unwrap();
    /// assert_eq!(inv.entries(), [[15, 17], [20, 9]]);
    /// assert!(KeyMatrix::new([[2, 4], [6, 8]]).inverse().is_err());
    /// ```
    pub fn inverse(&self) -> Result<KeyMatrix> {
        let determinant = self.determinant();
        let det_inv = mod_inverse(determinant, MODULUS)
            .map_err(|_| CipherError::NonInvertibleKey { determinant })?;

        let [[a, b], [c, d]] = self.entries;
        trace!(determinant, det_inv, "computed Hill inverse key matrix");
        Ok(KeyMatrix::new([
            [det_inv * d, -det_inv * b],
            [-det_inv * c, det_inv * a],
        ]))
    }

    /// Multiplies the matrix by the column vector `(x, y)` modulo 26.
    pub fn apply(&self, x: i64, y: i64) -> (i64, i64) {
        let [[a, b], [c, d]] = self.entries;
        (canonical_mod26(a * x + b * y), canonical_mod26(c * x + d * y))
    }

    /// Transforms uppercase letter pairs; `letters` must have even length.
    fn transform(&self, letters: &str) -> String {
        let values: Vec<i64> = letters.chars().filter_map(letter_value).collect();
        let mut out = String::with_capacity(values.len());
        for pair in values.chunks_exact(2) {
            let (x, y) = self.apply(pair[0], pair[1]);
            out.push(value_letter(x));
            out.push(value_letter(y));
        }
        out
    }
}

/// Encrypts `text` with the 2x2 Hill cipher.
///
/// The text is reduced to uppercase letters and padded with `X` to even length.
///
/// # Errors
/// Returns [`CipherError::InvalidKeyShape`] if `key` is not 2x2.
///
/// # Examples
///
/// ```
/// use classicrypt::hill::hill_encrypt;
///
/// assert_eq!(hill_encrypt("HELP", &[[3, 3], [2, 5]]).unwrap(), "HIAT");
/// ```
pub fn hill_encrypt<R: AsRef<[i64]>>(text: &str, key: &[R]) -> Result<String> {
    let key = KeyMatrix::from_rows(key)?;
    let mut letters = letters_only(text);
    if !letters.len().is_multiple_of(2) {
        letters.push(FILLER);
    }
    Ok(key.transform(&letters))
}

/// Decrypts 2x2 Hill ciphertext.
///
/// The ciphertext is reduced to uppercase letters before its length is
/// checked. Padding added by encryption is not removed.
///
/// # Errors
/// - [`CipherError::InvalidKeyShape`] if `key` is not 2x2.
/// - [`CipherError::NonInvertibleKey`] if the key has no inverse modulo 26.
/// - [`CipherError::InvalidInputLength`] if the ciphertext has odd length.
///
/// # Examples
///
/// ```
/// use classicrypt::hill::hill_decrypt;
///
/// assert_eq!(hill_decrypt("HIAT", &[[3, 3], [2, 5]]).unwrap(), "HELP");
/// assert!(hill_decrypt("HIAT", &[[2, 4], [6, 8]]).is_err());
/// ```
pub fn hill_decrypt<R: AsRef<[i64]>>(text: &str, key: &[R]) -> Result<String> {
    let key = KeyMatrix::from_rows(key)?;
    let inverse = key.inverse().inspect_err(|err| {
        debug!(%err, "rejecting Hill key");
    })?;

    let letters = letters_only(text);
    if !letters.len().is_multiple_of(2) {
        debug!(length = letters.len(), "rejecting odd-length Hill ciphertext");
        return Err(CipherError::InvalidInputLength {
            length: letters.len(),
            multiple: 2,
        });
    }
    Ok(inverse.transform(&letters))
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [[i64; 2]; 2] = [[3, 3], [2, 5]];

    #[test]
    fn test_new_reduces_entries() {
        let key = KeyMatrix::new([[26, 27], [-1, -27]]);
        assert_eq!(key.entries(), [[0, 1], [25, 25]]);
    }

    #[test]
    fn test_from_rows_shapes() {
        assert_eq!(
            KeyMatrix::from_rows(&KEY).unwrap(),
            KeyMatrix::new(KEY)
        );
        assert_eq!(
            KeyMatrix::from_rows(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]),
            Err(CipherError::InvalidKeyShape { rows: 3, cols: 3 })
        );
        assert_eq!(
            KeyMatrix::from_rows(&[vec![1, 2], vec![3]]),
            Err(CipherError::InvalidKeyShape { rows: 2, cols: 1 })
        );
        assert_eq!(
            KeyMatrix::from_rows::<Vec<i64>>(&[]),
            Err(CipherError::InvalidKeyShape { rows: 0, cols: 0 })
        );
    }

    #[test]
    fn test_determinant() {
        assert_eq!(KeyMatrix::new(KEY).determinant(), 9);
        // 1*1 - 2*3 = -5 -> 21
        assert_eq!(KeyMatrix::new([[1, 2], [3, 1]]).determinant(), 21);
    }

    #[test]
    fn test_inverse_is_inverse() {
        let key = KeyMatrix::new(KEY);
        let inv = key.inverse().unwrap();
        for x in 0..26 {
            for y in 0..26 {
                let (cx, cy) = key.apply(x, y);
                assert_eq!(inv.apply(cx, cy), (x, y));
            }
        }
    }

    #[test]
    fn test_non_invertible_keys() {
        // det = 0
        assert_eq!(
            KeyMatrix::new([[1, 2], [2, 4]]).inverse(),
            Err(CipherError::NonInvertibleKey { determinant: 0 })
        );
        // det = 13
        assert_eq!(
            KeyMatrix::new([[13, 0], [0, 1]]).inverse(),
            Err(CipherError::NonInvertibleKey { determinant: 13 })
        );
        assert!(!KeyMatrix::new([[2, 0], [0, 1]]).is_invertible());
        assert!(KeyMatrix::new(KEY).is_invertible());
    }

    #[test]
    fn test_encrypt_known_vectors() {
        assert_eq!(hill_encrypt("HELP", &KEY).unwrap(), "HIAT");
        assert_eq!(hill_encrypt("act", &KEY).unwrap(), "GKWX");
        assert_eq!(hill_encrypt("short example", &KEY).unwrap(), "XTPJRGRUDVTQ");
        assert_eq!(hill_encrypt("", &KEY).unwrap(), "");
    }

    #[test]
    fn test_encrypt_rejects_bad_shape() {
        assert_eq!(
            hill_encrypt("HELP", &[[1, 2, 3]]),
            Err(CipherError::InvalidKeyShape { rows: 1, cols: 3 })
        );
    }

    #[test]
    fn test_decrypt_known_vectors() {
        assert_eq!(hill_decrypt("HIAT", &KEY).unwrap(), "HELP");
        assert_eq!(hill_decrypt("GKWX", &KEY).unwrap(), "ACTX");
        assert_eq!(hill_decrypt("hi at", &KEY).unwrap(), "HELP");
    }

    #[test]
    fn test_decrypt_errors() {
        assert_eq!(
            hill_decrypt("HIA", &KEY),
            Err(CipherError::InvalidInputLength {
                length: 3,
                multiple: 2
            })
        );
        assert_eq!(
            hill_decrypt("HIAT", &[[2, 4], [6, 8]]),
            Err(CipherError::NonInvertibleKey { determinant: 18 })
        );
        assert!(matches!(
            hill_decrypt("HIAT", &[vec![1]]),
            Err(CipherError::InvalidKeyShape { .. })
        ));
    }
}
