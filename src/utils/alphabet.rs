//! Alphabet normalization shared by every cipher.
//!
//! All ciphers in this crate operate on the 26 uppercase letters `A..=Z`.
//! Letters are mapped to values `0..=25` with `A = 0`.

/// Number of letters in the working alphabet.
pub const ALPHABET_LEN: i64 = 26;

/// Filler letter used for Playfair digraph splitting and block padding.
pub const FILLER: char = 'X';

/// Strips every character that is not an ASCII letter and uppercases the rest.
///
/// Idempotent: normalizing already-normalized text yields the same text.
///
/// # Examples
///
/// ```
/// use classicrypt::utils::alphabet::letters_only;
///
/// assert_eq!(letters_only("Hello, World!"), "HELLOWORLD");
/// assert_eq!(letters_only("HELLOWORLD"), "HELLOWORLD");
/// ```
pub fn letters_only(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Normalizes text for Playfair: letters only, uppercased, `J` merged into `I`.
///
/// # Examples
///
/// ```
/// use classicrypt::utils::alphabet::playfair_letters;
///
/// assert_eq!(playfair_letters("jump, jive"), "IUMPIIVE");
/// ```
pub fn playfair_letters(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| match c.to_ascii_uppercase() {
            'J' => 'I',
            upper => upper,
        })
        .collect()
}

/// Returns the 0-based alphabet value of an uppercase letter.
///
/// # Returns
/// `Some(0..=25)` for `'A'..='Z'`, `None` for anything else.
pub fn letter_value(c: char) -> Option<i64> {
    if c.is_ascii_uppercase() {
        Some(i64::from(c as u8 - b'A'))
    } else {
        None
    }
}

/// Returns the uppercase letter for a value, reduced modulo 26 first.
pub fn value_letter(value: i64) -> char {
    (b'A' + value.rem_euclid(ALPHABET_LEN) as u8) as char
}

/// Shifts an uppercase letter by `shift` positions around the alphabet.
///
/// Non-letters are returned unchanged.
pub(crate) fn shift_letter(c: char, shift: i64) -> char {
    match letter_value(c) {
        Some(value) => value_letter(value + shift.rem_euclid(ALPHABET_LEN)),
        None => c,
    }
}
