//! Classical substitution and transposition ciphers.
//!
//! A toolkit of textbook ciphers for cryptography exercises. The matrix
//! ciphers are the core of the crate:
//!
//! - **Playfair**: digraph substitution through a 5x5 key square derived
//!   from a keyword ([`playfair`]).
//! - **Hill**: 2x2 linear transform modulo 26 with modular matrix
//!   inversion for decryption ([`hill`]).
//!
//! Alongside them sit the simple ciphers in [`simple`]: Caesar, Vigenere,
//! Rail Fence and Row-Column transposition.
//!
//! # Architecture
//!
//! ```text
//! utils::alphabet   (letter normalization, J -> I merge)
//! utils::modular    (canonical mod 26, modular inverse)
//!     ↓
//! playfair          (KeySquare built per call -> digraph rules)
//! hill              (KeyMatrix -> inverse KeyMatrix per decrypt)
//! simple::*         (Caesar, Vigenere, Rail Fence, Row-Column)
//!     ↓
//! cipher            (ClassicalCipher trait over keyed values)
//! ```
//!
//! Every operation is a pure function of its input and key. Nothing is
//! cached between calls, so concurrent calls with different keys never
//! interfere.
//!
//! This is a teaching reference, not a secure cipher suite.
//!
//! # Examples
//!
//! ```
//! use classicrypt::{hill_decrypt, hill_encrypt, playfair_encrypt};
//!
//! assert_eq!(playfair_encrypt("HELLO", "MONARCHY"), "CFSUPM");
//!
//! let key = [[3, 3], [2, 5]];
//! let sealed = hill_encrypt("HELP", &key).unwrap();
//! assert_eq!(hill_decrypt(&sealed, &key).unwrap(), "HELP");
//! ```
//!
//! Through the common trait:
//!
//! ```
//! use classicrypt::{ClassicalCipher, RailFence};
//!
//! let fence = RailFence::new(3);
//! let sealed = fence.encrypt("WEAREDISCOVEREDFLEEATONCE").unwrap();
//! assert_eq!(sealed, "WECRLTEERDSOEEFEAOCAIVDEN");
//! ```

#![deny(clippy::all)]

pub mod cipher;
pub mod error;
pub mod hill;
pub mod playfair;
pub mod simple;
pub mod utils;

pub use cipher::{Caesar, ClassicalCipher, Hill, Playfair, RailFence, RowColumn, Vigenere};
pub use error::{CipherError, Result};
pub use hill::{hill_decrypt, hill_encrypt, KeyMatrix};
pub use playfair::{playfair_decrypt, playfair_encrypt, Digraph, KeySquare};
pub use simple::caesar::{caesar_decrypt, caesar_encrypt};
pub use simple::rail_fence::{rail_fence_decrypt, rail_fence_encrypt};
pub use simple::row_column::{row_column_decrypt, row_column_encrypt};
pub use simple::vigenere::{vigenere_decrypt, vigenere_encrypt};
pub use utils::modular::{canonical_mod26, mod_inverse};
