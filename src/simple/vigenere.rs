//! Vigenere polyalphabetic cipher.
//!
//! Both text and key are reduced to uppercase letters before processing,
//! so spacing and punctuation are not preserved.

use tracing::debug;

use crate::error::{CipherError, Result};
use crate::utils::alphabet::{letter_value, letters_only, shift_letter};

/// Reduces `key` to its letter values, rejecting keys without letters.
fn key_stream(key: &str) -> Result<Vec<i64>> {
    let values: Vec<i64> = letters_only(key).chars().filter_map(letter_value).collect();
    if values.is_empty() {
        debug!("rejecting Vigenere key without letters");
        return Err(CipherError::InvalidKey {
            reason: "Vigenere key must contain at least one letter",
        });
    }
    Ok(values)
}

/// Shifts each letter by the matching key letter, times `direction`.
fn apply(text: &str, key: &str, direction: i64) -> Result<String> {
    let stream = key_stream(key)?;
    Ok(letters_only(text)
        .chars()
        .zip(stream.iter().cycle())
        .map(|(c, &k)| shift_letter(c, direction * k))
        .collect())
}

/// Encrypts `text` under `key`.
///
/// # Errors
/// Returns [`CipherError::InvalidKey`] if `key` has no letters.
///
/// # Examples
///
/// ```
/// use classicrypt::simple::vigenere::vigenere_encrypt;
///
/// assert_eq!(vigenere_encrypt("HELLO WORLD", "KEY").unwrap(), "RIJVSUYVJN");
/// ```
pub fn vigenere_encrypt(text: &str, key: &str) -> Result<String> {
    apply(text, key, 1)
}

/// Decrypts `text` under `key`.
///
/// # Errors
/// Returns [`CipherError::InvalidKey`] if `key` has no letters.
///
/// # Examples
///
/// ```
/// use classicrypt::simple::vigenere::vigenere_decrypt;
///
/// assert_eq!(vigenere_decrypt("RIJVSUYVJN", "KEY").unwrap(), "HELLOWORLD");
/// ```
pub fn vigenere_decrypt(text: &str, key: &str) -> Result<String> {
    apply(text, key, -1)
}
