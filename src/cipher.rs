//! Common interface over every cipher in the crate.
//!
//! Each cipher is a small immutable value holding its key. Derived key
//! material (the Playfair square, the Hill inverse matrix) is still built
//! inside each call, so one value can be shared freely across threads.

use crate::error::Result;
use crate::hill::{hill_decrypt, hill_encrypt, KeyMatrix};
use crate::playfair::{playfair_decrypt, playfair_encrypt};
use crate::simple::caesar::{caesar_decrypt, caesar_encrypt};
use crate::simple::rail_fence::{rail_fence_decrypt, rail_fence_encrypt};
use crate::simple::row_column::{row_column_decrypt, row_column_encrypt};
use crate::simple::vigenere::{vigenere_decrypt, vigenere_encrypt};

/// A keyed classical cipher.
///
/// # Examples
///
/// ```
/// use classicrypt::{ClassicalCipher, Playfair};
///
/// let cipher = Playfair::new("MONARCHY");
/// let sealed = cipher.encrypt("HELLO").unwrap();
/// assert_eq!(sealed, "CFSUPM");
/// assert_eq!(cipher.decrypt(&sealed).unwrap(), "HELXLO");
/// ```
pub trait ClassicalCipher: Send + Sync {
    /// Short human-readable cipher name.
    fn name(&self) -> &'static str;

    /// Encrypts `text`.
    fn encrypt(&self, text: &str) -> Result<String>;

    /// Decrypts `text`.
    fn decrypt(&self, text: &str) -> Result<String>;
}

/// Caesar shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Caesar {
    /// Positions to shift forward; negative shifts move backwards.
    pub shift: i64,
}

impl Caesar {
    /// Creates a Caesar cipher shifting by `shift`.
    pub fn new(shift: i64) -> Self {
        Caesar { shift }
    }
}

impl ClassicalCipher for Caesar {
    fn name(&self) -> &'static str {
        "Caesar"
    }

    fn encrypt(&self, text: &str) -> Result<String> {
        Ok(caesar_encrypt(text, self.shift))
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        Ok(caesar_decrypt(text, self.shift))
    }
}

/// Vigenere with a repeating keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vigenere {
    /// The keyword; only its letters are used.
    pub key: String,
}

impl Vigenere {
    /// Creates a Vigenere cipher keyed by `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Vigenere { key: key.into() }
    }
}

impl ClassicalCipher for Vigenere {
    fn name(&self) -> &'static str {
        "Vigenere"
    }

    fn encrypt(&self, text: &str) -> Result<String> {
        vigenere_encrypt(text, &self.key)
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        vigenere_decrypt(text, &self.key)
    }
}

/// Playfair with a keyword; the key square is rebuilt on each call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Playfair {
    /// The keyword; its letters seed the key square.
    pub key: String,
}

impl Playfair {
    /// Creates a Playfair cipher keyed by `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Playfair { key: key.into() }
    }
}

impl ClassicalCipher for Playfair {
    fn name(&self) -> &'static str {
        "Playfair"
    }

    fn encrypt(&self, text: &str) -> Result<String> {
        Ok(playfair_encrypt(text, &self.key))
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        playfair_decrypt(text, &self.key)
    }
}

/// 2x2 Hill cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hill {
    /// 2x2 key; invertibility is checked when decrypting.
    pub key: KeyMatrix,
}

impl Hill {
    /// Creates a Hill cipher with `key`.
    pub fn new(key: KeyMatrix) -> Self {
        Hill { key }
    }
}

impl ClassicalCipher for Hill {
    fn name(&self) -> &'static str {
        "Hill"
    }

    fn encrypt(&self, text: &str) -> Result<String> {
        hill_encrypt(text, &self.key.entries())
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        hill_decrypt(text, &self.key.entries())
    }
}

/// Rail Fence over a fixed number of rails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RailFence {
    /// Number of rails; zero is rejected when encrypting or decrypting.
    pub rails: usize,
}

impl RailFence {
    /// Creates a Rail Fence cipher over `rails` rails.
    pub fn new(rails: usize) -> Self {
        RailFence { rails }
    }
}

impl ClassicalCipher for RailFence {
    fn name(&self) -> &'static str {
        "Rail Fence"
    }

    fn encrypt(&self, text: &str) -> Result<String> {
        rail_fence_encrypt(text, self.rails)
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        rail_fence_decrypt(text, self.rails)
    }
}

/// Row-Column transposition with a keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowColumn {
    /// The keyword; its characters order the columns.
    pub key: String,
}

impl RowColumn {
    /// Creates a Row-Column cipher keyed by `key`.
    pub fn new(key: impl Into<String>) -> Self {
        RowColumn { key: key.into() }
    }
}

impl ClassicalCipher for RowColumn {
    fn name(&self) -> &'static str {
        "Row-Column"
    }

    fn encrypt(&self, text: &str) -> Result<String> {
        row_column_encrypt(text, &self.key)
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        row_column_decrypt(text, &self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CipherError;

    fn all_ciphers() -> Vec<Box<dyn ClassicalCipher>> {
        vec![
            Box::new(Caesar::new(3)),
            Box::new(Vigenere::new("KEY")),
            Box::new(Playfair::new("MONARCHY")),
            Box::new(Hill::new(KeyMatrix::new([[3, 3], [2, 5]]))),
            Box::new(RailFence::new(3)),
            Box::new(RowColumn::new("ZEBRA")),
        ]
    }

    #[test]
    fn test_names_unique() {
        let mut names: Vec<&str> = all_ciphers().iter().map(|c| c.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn test_trait_matches_free_functions() {
        let plain = "WEAREDISCOVEREDFLEEATONCE";
        assert_eq!(Caesar::new(3).encrypt(plain).unwrap(), caesar_encrypt(plain, 3));
        assert_eq!(
            RailFence::new(3).encrypt(plain).unwrap(),
            "WECRLTEERDSOEEFEAOCAIVDEN"
        );
        assert_eq!(
            RowColumn::new("ZEBRA").encrypt(plain).unwrap(),
            "EODAEASRENEIELORCEECWDVFT"
        );
        assert_eq!(
            Hill::new(KeyMatrix::new([[3, 3], [2, 5]])).encrypt("HELP").unwrap(),
            "HIAT"
        );
    }

    #[test]
    fn test_roundtrip_letters_without_fillers() {
        // Even length, no X, no J.
        let plain = "WEAREDISCOVEREDFLEEATONCE";
        let plain = &plain[..plain.len() - 1];
        for cipher in all_ciphers() {
            let sealed = cipher.encrypt(plain).unwrap();
            let opened = cipher.decrypt(&sealed).unwrap();
            if cipher.name() == "Playfair" {
                assert_eq!(opened, crate::playfair::prepare_plaintext(plain));
            } else {
                assert_eq!(opened, plain, "{}", cipher.name());
            }
        }
    }

    #[test]
    fn test_rail_fence_oversized_rails_through_trait() {
        let fence = RailFence::new(usize::MAX);
        assert_eq!(fence.encrypt("HI").unwrap(), "HI");
        assert_eq!(fence.decrypt("HI").unwrap(), "HI");
    }

    #[test]
    fn test_hill_non_invertible_through_trait() {
        let hill = Hill::new(KeyMatrix::new([[2, 4], [6, 8]]));
        assert!(hill.encrypt("HELP").is_ok());
        assert!(matches!(
            hill.decrypt("HIAT"),
            Err(CipherError::NonInvertibleKey { .. })
        ));
    }
}
