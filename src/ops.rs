//! The operation boundary any front end talks to.
//!
//! Inputs arrive as plain strings (`0`/`1` bit strings for blocks and keys)
//! and are fully validated here before the core runs; outputs are plain
//! strings and integers, ready for whatever transport the caller uses.

use bit_seq::BitVector;

use crate::error::SdesError;
use crate::tables::{BLOCK_WIDTH, KEY_WIDTH};
use crate::{cipher, search, text};

/// Parses a bit string of exactly `width` characters.
fn parse_bits(s: &str, width: usize) -> Result<BitVector, SdesError> {
    let actual = s.chars().count();
    if actual != width {
        return Err(SdesError::InvalidLength {
            expected: width,
            actual,
        });
    }
    Ok(s.parse::<BitVector>()?)
}

fn parse_block(s: &str) -> Result<BitVector, SdesError> {
    parse_bits(s, BLOCK_WIDTH)
}

fn parse_key(s: &str) -> Result<BitVector, SdesError> {
    parse_bits(s, KEY_WIDTH)
}

/// Encrypts an 8-char plaintext bit string under a 10-char key bit string.
pub fn encrypt_block(plaintext: &str, key: &str) -> Result<String, SdesError> {
    let ciphertext = cipher::encrypt_block(parse_block(plaintext)?, parse_key(key)?)?;
    Ok(ciphertext.to_string())
}

/// Decrypts an 8-char ciphertext bit string under a 10-char key bit string.
pub fn decrypt_block(ciphertext: &str, key: &str) -> Result<String, SdesError> {
    let plaintext = cipher::decrypt_block(parse_block(ciphertext)?, parse_key(key)?)?;
    Ok(plaintext.to_string())
}

/// Encrypts a non-empty string character by character.
pub fn encrypt_text_direct(text: &str, key: &str) -> Result<String, SdesError> {
    text::encrypt_text(text, parse_key(key)?)
}

/// Decrypts a non-empty string character by character.
pub fn decrypt_text_direct(text: &str, key: &str) -> Result<String, SdesError> {
    text::decrypt_text(text, parse_key(key)?)
}

/// What [`bruteforce`] reports back: the matching keys in ascending decimal
/// order, the same keys as 10-char bit strings, and the wall-clock seconds
/// the search took.
#[derive(Debug, Clone, PartialEq)]
pub struct BruteForceReport {
    pub count: usize,
    pub keys: Vec<u16>,
    pub binary_keys: Vec<String>,
    pub elapsed_seconds: f64,
}

/// Runs the exhaustive key search for one known plaintext/ciphertext pair.
pub fn bruteforce(
    plaintext: &str,
    ciphertext: &str,
    workers: usize,
) -> Result<BruteForceReport, SdesError> {
    let outcome = search::search(parse_block(plaintext)?, parse_block(ciphertext)?, workers)?;
    let binary_keys = outcome
        .keys
        .iter()
        .map(|key| format!("{:0width$b}", key, width = KEY_WIDTH))
        .collect();
    Ok(BruteForceReport {
        count: outcome.keys.len(),
        keys: outcome.keys,
        binary_keys,
        elapsed_seconds: outcome.elapsed.as_secs_f64(),
    })
}
