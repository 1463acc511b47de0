//! Row-Column (columnar) transposition.
//!
//! Letters are written row by row into a grid as wide as the key, padded
//! with `X`, then read column by column in the alphabetical order of the
//! key characters. Equal key characters keep their original order.

use tracing::debug;

use crate::error::{CipherError, Result};
use crate::utils::alphabet::{letters_only, FILLER};

/// Column indices in reading order: stable sort by key character.
fn column_order(key: &str) -> Result<Vec<usize>> {
    let key: Vec<char> = key.chars().collect();
    if key.is_empty() {
        debug!("rejecting empty Row-Column key");
        return Err(CipherError::InvalidKey {
            reason: "Row-Column key must not be empty",
        });
    }
    let mut order: Vec<usize> = (0..key.len()).collect();
    order.sort_by_key(|&i| key[i]);
    Ok(order)
}

/// Encrypts `text` under `key`.
///
/// The text is reduced to uppercase letters and padded with `X` to fill
/// `ceil(len / key_len)` rows.
///
/// # Errors
/// Returns [`CipherError::InvalidKey`] if `key` is empty.
///
/// # Examples
///
/// ```
/// use classicrypt::simple::row_column::row_column_encrypt;
///
/// assert_eq!(
///     row_column_encrypt("WEAREDISCOVEREDFLEEATONCE", "ZEBRA").unwrap(),
///     "EODAEASRENEIELORCEECWDVFT"
/// );
/// ```
pub fn row_column_encrypt(text: &str, key: &str) -> Result<String> {
    let order = column_order(key)?;
    let cols = order.len();

    let mut grid: Vec<char> = letters_only(text).chars().collect();
    let rows = grid.len().div_ceil(cols);
    grid.resize(rows * cols, FILLER);

    let mut out = String::with_capacity(grid.len());
    for col in order {
        for row in 0..rows {
            out.push(grid[row * cols + col]);
        }
    }
    Ok(out)
}

/// Decrypts Row-Column ciphertext under `key`.
///
/// Every `X` is removed from the result, including any that belonged to the
/// original message, not only the padding.
///
/// # Errors
/// - [`CipherError::InvalidKey`] if `key` is empty.
/// - [`CipherError::InvalidInputLength`] if the ciphertext letter count is
///   not a multiple of the key length.
///
/// # Examples
///
/// ```
/// use classicrypt::simple::row_column::row_column_decrypt;
///
/// assert_eq!(
///     row_column_decrypt("EODAEASRENEIELORCEECWDVFT", "ZEBRA").unwrap(),
///     "WEAREDISCOVEREDFLEEATONCE"
/// );
/// ```
pub fn row_column_decrypt(text: &str, key: &str) -> Result<String> {
    let order = column_order(key)?;
    let cols = order.len();

    let cipher: Vec<char> = letters_only(text).chars().collect();
    if !cipher.len().is_multiple_of(cols) {
        debug!(length = cipher.len(), cols, "rejecting ragged Row-Column ciphertext");
        return Err(CipherError::InvalidInputLength {
            length: cipher.len(),
            multiple: cols,
        });
    }
    let rows = cipher.len() / cols;

    let mut grid = vec![FILLER; cipher.len()];
    for (col, run) in order.into_iter().zip(cipher.chunks(rows.max(1))) {
        for (row, &c) in run.iter().enumerate() {
            grid[row * cols + col] = c;
        }
    }

    Ok(grid.into_iter().filter(|&c| c != FILLER).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_order_stable() {
        assert_eq!(column_order("ZEBRA").unwrap(), vec![4, 2, 1, 3, 0]);
        assert_eq!(column_order("ABA").unwrap(), vec![0, 2, 1]);
        assert_eq!(column_order("AAA").unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(
            row_column_encrypt("WEAREDISCOVEREDFLEEATONCE", "ZEBRA").unwrap(),
            "EODAEASRENEIELORCEECWDVFT"
        );
        assert_eq!(row_column_encrypt("HELLO WORLD", "KEY").unwrap(), "EORXHLODLWLX");
        assert_eq!(row_column_encrypt("ATTACKATDAWN", "ABA").unwrap(), "AAAATKDNTCTW");
    }

    #[test]
    fn test_decrypt_strips_padding() {
        assert_eq!(row_column_decrypt("EORXHLODLWLX", "KEY").unwrap(), "HELLOWORLD");
    }

    #[test]
    fn test_decrypt_strips_every_x() {
        let cipher = row_column_encrypt("XRAYBOX", "KEY").unwrap();
        assert_eq!(row_column_decrypt(&cipher, "KEY").unwrap(), "RAYBO");
    }

    #[test]
    fn test_roundtrip_without_x() {
        let plain = "THEQUICKBROWNFOGJUMPSOVERTHELAZYDOG";
        for key in ["A", "KEY", "ZEBRA", "CRYPTOGRAPHY", "SECRETKEYS"] {
            let cipher = row_column_encrypt(plain, key).unwrap();
            assert_eq!(row_column_decrypt(&cipher, key).unwrap(), plain);
        }
    }

    #[test]
    fn test_empty_key_rejected() {
        assert_eq!(
            row_column_encrypt("HELLO", ""),
            Err(CipherError::InvalidKey {
                reason: "Row-Column key must not be empty"
            })
        );
        assert!(row_column_decrypt("HELLO", "").is_err());
    }

    #[test]
    fn test_decrypt_ragged_length() {
        assert_eq!(
            row_column_decrypt("ABCDE", "KEY"),
            Err(CipherError::InvalidInputLength {
                length: 5,
                multiple: 3
            })
        );
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(row_column_encrypt("", "KEY").unwrap(), "");
        assert_eq!(row_column_decrypt("", "KEY").unwrap(), "");
    }
}
