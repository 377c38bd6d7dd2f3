//! Per-character text encryption.
//!
//! Each character's code point is enciphered as an independent 8-bit block,
//! ECB-fashion; identical characters map to identical ciphertext characters.
//! That weakness is the point of the exercise and is deliberately kept.

use bit_seq::BitVector;

use crate::cipher::{decrypt_block, encrypt_block};
use crate::error::SdesError;
use crate::tables::BLOCK_WIDTH;

fn transform(
    text: &str,
    key: BitVector,
    block_fn: fn(BitVector, BitVector) -> Result<BitVector, SdesError>,
) -> Result<String, SdesError> {
    if text.is_empty() {
        return Err(SdesError::EmptyInput);
    }
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        let code = ch as u32;
        if code > u8::MAX as u32 {
            return Err(SdesError::CharOutOfRange { ch, code });
        }
        let block = BitVector::from_uint(code as u16, BLOCK_WIDTH)?;
        // every 8-bit result is a valid code point, so the output always
        // has as many characters as the input
        out.push(char::from(block_fn(block, key)?.to_uint() as u8));
    }
    Ok(out)
}

/// Encrypts `text` character by character. Fails on empty input and on any
/// character whose code point does not fit in 8 bits.
pub fn encrypt_text(text: &str, key: BitVector) -> Result<String, SdesError> {
    transform(text, key, encrypt_block)
}

/// Inverse of [`encrypt_text`] under the same key.
pub fn decrypt_text(text: &str, key: BitVector) -> Result<String, SdesError> {
    transform(text, key, decrypt_block)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> BitVector {
        s.parse().unwrap()
    }

    #[test]
    fn text_round_trip() {
        let k = key("1010000010");
        let text = "attack at dawn";
        let ciphertext = encrypt_text(text, k).unwrap();
        assert_eq!(ciphertext.chars().count(), text.chars().count());
        assert_eq!(decrypt_text(&ciphertext, k).unwrap(), text);
    }

    #[test]
    fn round_trip_covers_every_code_point() {
        let k = key("0111010001");
        let all: String = (0u8..=u8::MAX).map(char::from).collect();
        let ciphertext = encrypt_text(&all, k).unwrap();
        assert_eq!(decrypt_text(&ciphertext, k).unwrap(), all);
    }

    #[test]
    fn identical_characters_encrypt_identically() {
        // the ECB weakness, preserved on purpose
        let ciphertext = encrypt_text("aaaa", key("1010000010")).unwrap();
        let first = ciphertext.chars().next().unwrap();
        assert!(ciphertext.chars().all(|c| c == first));
    }

    #[test]
    fn empty_text_is_rejected() {
        assert_eq!(
            encrypt_text("", key("1010000010")),
            Err(SdesError::EmptyInput)
        );
        assert_eq!(
            decrypt_text("", key("1010000010")),
            Err(SdesError::EmptyInput)
        );
    }

    #[test]
    fn wide_characters_are_rejected() {
        let err = encrypt_text("π", key("1010000010")).unwrap_err();
        assert_eq!(
            err,
            SdesError::CharOutOfRange {
                ch: 'π',
                code: 0x3C0
            }
        );
    }
}
