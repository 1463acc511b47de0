//! Caesar shift cipher.

use crate::utils::alphabet::shift_letter;

/// Shifts every letter of `text` forward by `shift mod 26` positions.
///
/// The text is uppercased first; non-letters pass through unchanged.
/// Negative shifts move backwards.
///
/// # Examples
///
/// ```
/// use classicrypt::simple::caesar::caesar_encrypt;
///
/// assert_eq!(caesar_encrypt("HELLO WORLD", 3), "KHOOR ZRUOG");
/// ```
pub fn caesar_encrypt(text: &str, shift: i64) -> String {
    text.chars()
        .map(|c| shift_letter(c.to_ascii_uppercase(), shift))
        .collect()
}

/// Reverses [`caesar_encrypt`] by shifting with `-shift`.
///
/// # Examples
///
/// ```
/// use classicrypt::simple::caesar::caesar_decrypt;
///
/// assert_eq!(caesar_decrypt("KHOOR ZRUOG", 3), "HELLO WORLD");
/// ```
pub fn caesar_decrypt(text: &str, shift: i64) -> String {
    // Reduce first so that `i64::MIN` cannot overflow on negation.
    caesar_encrypt(text, -shift.rem_euclid(26))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_known_vector() {
        assert_eq!(caesar_encrypt("HELLO WORLD", 3), "KHOOR ZRUOG");
    }

    #[test]
    fn test_uppercases_and_keeps_punctuation() {
        assert_eq!(caesar_encrypt("Hello, World!", -1), "GDKKN, VNQKC!");
    }

    #[test]
    fn test_shift_wraps() {
        assert_eq!(caesar_encrypt("XYZ", 3), "ABC");
        assert_eq!(caesar_encrypt("ABC", 29), "DEF");
        assert_eq!(caesar_encrypt("ABC", 26), "ABC");
        assert_eq!(caesar_encrypt("ABC", -27), "ZAB");
    }

    #[test]
    fn test_decrypt_inverts_encrypt() {
        for shift in [-52, -3, 0, 1, 13, 25, 26, 1000, i64::MAX, i64::MIN] {
            let cipher = caesar_encrypt("THE QUICK BROWN FOX", shift);
            assert_eq!(caesar_decrypt(&cipher, shift), "THE QUICK BROWN FOX");
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(caesar_encrypt("", 5), "");
        assert_eq!(caesar_decrypt("", 5), "");
    }
}
