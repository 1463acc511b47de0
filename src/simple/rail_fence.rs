//! Rail Fence zigzag transposition.
//!
//! Characters are written diagonally down and up across `rails` rows,
//! bouncing at the first and last rail, then read off rail by rail:
//!
//! ```text
//! W . . . E . . . C      rails = 3
//! . E . R . D . S . ...
//! . . A . . . I . . .
//! ```
//!
//! Every character is transposed, including spaces and punctuation.

use tracing::debug;

use crate::error::{CipherError, Result};

/// Returns the rail index of each of `len` positions in zigzag order.
fn zigzag(len: usize, rails: usize) -> Vec<usize> {
    let mut pattern = Vec::with_capacity(len);
    if rails == 1 {
        pattern.resize(len, 0);
        return pattern;
    }

    let mut row = 0usize;
    let mut down = true;
    for _ in 0..len {
        pattern.push(row);
        if down {
            row += 1;
        } else {
            row -= 1;
        }
        if row == 0 || row == rails - 1 {
            down = !down;
        }
    }
    pattern
}

fn check_rails(rails: usize) -> Result<()> {
    if rails == 0 {
        debug!("rejecting Rail Fence with zero rails");
        return Err(CipherError::InvalidKey {
            reason: "Rail Fence needs at least one rail",
        });
    }
    Ok(())
}

/// Encrypts `text` across `rails` rails.
///
/// One rail is the identity transform.
///
/// # Errors
/// Returns [`CipherError::InvalidKey`] if `rails == 0`.
///
/// # Examples
///
/// ```
/// use classicrypt::simple::rail_fence::rail_fence_encrypt;
///
/// assert_eq!(
///     rail_fence_encrypt("WEAREDISCOVEREDFLEEATONCE", 3).unwrap(),
///     "WECRLTEERDSOEEFEAOCAIVDEN"
/// );
/// ```
pub fn rail_fence_encrypt(text: &str, rails: usize) -> Result<String> {
    check_rails(rails)?;
    let chars: Vec<char> = text.chars().collect();
    // Past the text length the zigzag never bounces back.
    let rails = rails.min(chars.len().max(1));
    let pattern = zigzag(chars.len(), rails);

    let mut fence: Vec<String> = vec![String::new(); rails];
    for (&c, &rail) in chars.iter().zip(&pattern) {
        fence[rail].push(c);
    }
    Ok(fence.concat())
}

/// Decrypts Rail Fence ciphertext produced with `rails` rails.
///
/// Rail lengths are recovered by replaying the zigzag over the ciphertext
/// length, then characters are read back in zigzag order.
///
/// # Errors
/// Returns [`CipherError::InvalidKey`] if `rails == 0`.
///
/// # Examples
///
/// ```
/// use classicrypt::simple::rail_fence::rail_fence_decrypt;
///
/// assert_eq!(
///     rail_fence_decrypt("WECRLTEERDSOEEFEAOCAIVDEN", 3).unwrap(),
///     "WEAREDISCOVEREDFLEEATONCE"
/// );
/// ```
pub fn rail_fence_decrypt(text: &str, rails: usize) -> Result<String> {
    check_rails(rails)?;
    let chars: Vec<char> = text.chars().collect();
    // Past the text length the zigzag never bounces back.
    let rails = rails.min(chars.len().max(1));
    let pattern = zigzag(chars.len(), rails);

    let mut lengths = vec![0usize; rails];
    for &rail in &pattern {
        lengths[rail] += 1;
    }

    // Start offset of each rail inside the ciphertext.
    let mut cursors = Vec::with_capacity(rails);
    let mut offset = 0usize;
    for len in lengths {
        cursors.push(offset);
        offset += len;
    }

    let mut out = String::with_capacity(text.len());
    for rail in pattern {
        out.push(chars[cursors[rail]]);
        cursors[rail] += 1;
    }
    Ok(out)
}
