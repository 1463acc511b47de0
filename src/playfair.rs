//! Playfair: digraph substitution over a 5x5 key square.
//!
//! The key square holds the 25 letters `A..=Z` without `J` (merged into `I`).
//! It is derived from the keyword on every call and threaded explicitly into
//! the digraph rules, so calls with different keys never share state.
//!
//! # Digraph rules
//!
//! ```text
//! same row      -> letter to the right (encrypt) / left (decrypt), wrapping
//! same column   -> letter below (encrypt) / above (decrypt), wrapping
//! rectangle     -> keep own row, take the other letter's column
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::error::{CipherError, Result};
use crate::utils::alphabet::{playfair_letters, FILLER};

/// Side length of the key square.
pub const GRID_SIZE: usize = 5;

/// Letters used to complete the key square, in fill order.
const SQUARE_ALPHABET: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// An ordered pair of letters processed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Digraph(pub char, pub char);

/// Row/column coordinate of a letter inside the key square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    row: usize,
    col: usize,
}

/// 5x5 grid of the 25 letters `A..=Z` minus `J`, each exactly once.
///
/// Built deterministically from a keyword: first the distinct letters of the
/// keyword in order of first appearance, then the remaining letters in
/// alphabetical order. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeySquare {
    grid: [[char; GRID_SIZE]; GRID_SIZE],
}

impl KeySquare {
    /// Builds the key square for `key`.
    ///
    /// The key is normalized first (letters only, uppercase, `J` -> `I`).
    /// Any key, including an empty one, yields a full square.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::playfair::KeySquare;
    ///
    /// let square = KeySquare::new("MONARCHY");
    /// assert_eq!(square.row_string(0), "MONAR");
    /// assert_eq!(square.row_string(1), "CHYBD");
    /// ```
    pub fn new(key: &str) -> Self {
        let mut grid = [[' '; GRID_SIZE]; GRID_SIZE];
        let mut placed = [false; 26];
        let mut filled = 0usize;

        for c in playfair_letters(key).chars().chain(SQUARE_ALPHABET.chars()) {
            let index = (c as u8 - b'A') as usize;
            if placed[index] {
                continue;
            }
            placed[index] = true;
            grid[filled / GRID_SIZE][filled % GRID_SIZE] = c;
            filled += 1;
        }

        trace!(key_len = key.len(), filled, "built Playfair key square");
        KeySquare { grid }
    }

    /// Returns the grid rows, top to bottom.
    pub fn rows(&self) -> &[[char; GRID_SIZE]; GRID_SIZE] {
        &self.grid
    }

    /// Returns row `row` as a string, wrapping like [`letter_at`](Self::letter_at).
    pub fn row_string(&self, row: usize) -> String {
        self.grid[row % GRID_SIZE].iter().collect()
    }

    /// Returns the letter at `(row, col)`, wrapping both coordinates.
    pub fn letter_at(&self, row: usize, col: usize) -> char {
        self.grid[row % GRID_SIZE][col % GRID_SIZE]
    }

    /// Returns `(row, col)` of `letter`, or `None` for `J` and non-letters.
    pub fn position(&self, letter: char) -> Option<(usize, usize)> {
        self.cell(letter).map(|cell| (cell.row, cell.col))
    }

    fn cell(&self, letter: char) -> Option<Cell> {
        self.grid.iter().enumerate().find_map(|(row, cells)| {
            cells
                .iter()
                .position(|&c| c == letter)
                .map(|col| Cell { row, col })
        })
    }

    /// Encrypts one digraph.
    ///
    /// Returns `None` if either letter is not in the square.
    pub fn encrypt_digraph(&self, digraph: Digraph) -> Option<Digraph> {
        self.substitute(digraph, 1)
    }

    /// Decrypts one digraph, mirroring [`encrypt_digraph`](Self::encrypt_digraph).
    ///
    /// Returns `None` if either letter is not in the square.
    pub fn decrypt_digraph(&self, digraph: Digraph) -> Option<Digraph> {
        self.substitute(digraph, GRID_SIZE - 1)
    }

    /// Applies the digraph rules with `step` = 1 (encrypt) or 4 (decrypt).
    fn substitute(&self, digraph: Digraph, step: usize) -> Option<Digraph> {
        let a = self.cell(digraph.0)?;
        let b = self.cell(digraph.1)?;

        let out = if a.row == b.row {
            Digraph(
                self.letter_at(a.row, a.col + step),
                self.letter_at(b.row, b.col + step),
            )
        } else if a.col == b.col {
            Digraph(
                self.letter_at(a.row + step, a.col),
                self.letter_at(b.row + step, b.col),
            )
        } else {
            Digraph(self.letter_at(a.row, b.col), self.letter_at(b.row, a.col))
        };
        Some(out)
    }
}

impl fmt::Display for KeySquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.grid.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, c) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

/// Prepares plaintext for Playfair encryption.
///
/// Normalizes the text, inserts `X` between every pair of adjacent identical
/// letters (always `X`, even when the doubled letter is itself `X`), and
/// appends a trailing `X` if the result has odd length.
///
/// # Examples
///
/// ```
/// use classicrypt::playfair::prepare_plaintext;
///
/// assert_eq!(prepare_plaintext("hello"), "HELXLO");
/// assert_eq!(prepare_plaintext("balloon"), "BALXLOXONX");
/// ```
pub fn prepare_plaintext(text: &str) -> String {
    let letters: Vec<char> = playfair_letters(text).chars().collect();
    let mut prepared = String::with_capacity(letters.len() * 2);
    for (i, &c) in letters.iter().enumerate() {
        prepared.push(c);
        if letters.get(i + 1) == Some(&c) {
            prepared.push(FILLER);
        }
    }
    if !prepared.len().is_multiple_of(2) {
        prepared.push(FILLER);
    }
    prepared
}

/// Splits digraph-aligned letters into [`Digraph`]s.
fn digraphs(letters: &str) -> impl Iterator<Item = Digraph> + '_ {
    let bytes = letters.as_bytes();
    bytes
        .chunks_exact(2)
        .map(|pair| Digraph(pair[0] as char, pair[1] as char))
}

/// Encrypts `text` with the Playfair cipher under `key`.
///
/// Empty plaintext yields empty ciphertext.
///
/// # Examples
///
/// ```
/// use classicrypt::playfair::playfair_encrypt;
///
/// assert_eq!(playfair_encrypt("HELLO", "MONARCHY"), "CFSUPM");
/// ```
pub fn playfair_encrypt(text: &str, key: &str) -> String {
    let square = KeySquare::new(key);
    let prepared = prepare_plaintext(text);

    let mut out = String::with_capacity(prepared.len());
    // Prepared text holds only square letters, so every lookup succeeds.
    for digraph in digraphs(&prepared).filter_map(|d| square.encrypt_digraph(d)) {
        out.push(digraph.0);
        out.push(digraph.1);
    }
    out
}

/// Decrypts Playfair ciphertext under `key`.
///
/// The ciphertext is normalized (letters only, uppercase, `J` -> `I`) but
/// filler letters are not removed from the result.
///
/// # Errors
/// Returns [`CipherError::InvalidInputLength`] if the normalized ciphertext
/// has odd length.
///
/// # Examples
///
/// ```
/// use classicrypt::playfair::playfair_decrypt;
///
/// assert_eq!(playfair_decrypt("CFSUPM", "MONARCHY").unwrap(), "HELXLO");
/// assert!(playfair_decrypt("CFS", "MONARCHY").is_err());
/// ```
pub fn playfair_decrypt(text: &str, key: &str) -> Result<String> {
    let letters = playfair_letters(text);
    if !letters.len().is_multiple_of(2) {
        debug!(length = letters.len(), "rejecting odd-length Playfair ciphertext");
        return Err(CipherError::InvalidInputLength {
            length: letters.len(),
            multiple: 2,
        });
    }

    let square = KeySquare::new(key);
    let mut out = String::with_capacity(letters.len());
    for digraph in digraphs(&letters).filter_map(|d| square.decrypt_digraph(d)) {
        out.push(digraph.0);
        out.push(digraph.1);
    }
    Ok(out)
}
