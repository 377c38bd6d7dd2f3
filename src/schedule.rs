//! Subkey derivation from the 10-bit master key.

use bit_seq::BitVector;

use crate::error::SdesError;
use crate::tables::{KEY_WIDTH, P10, P8};

/// The two 8-bit round subkeys. Encryption applies `k1` then `k2`;
/// decryption applies them in reverse, which is what makes the Feistel
/// network self-inverting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subkeys {
    pub k1: BitVector,
    pub k2: BitVector,
}

/// Derives `(K1, K2)` from a 10-bit key.
///
/// P10, split into 5-bit halves, rotate each half left by one and compress
/// with P8 for K1; rotate the already-shifted halves by two more (a
/// cumulative shift of three) and compress again for K2. Pure and
/// deterministic; recomputed on every cipher invocation.
pub fn derive_subkeys(key: BitVector) -> Result<Subkeys, SdesError> {
    if key.width() != KEY_WIDTH {
        return Err(SdesError::InvalidLength {
            expected: KEY_WIDTH,
            actual: key.width(),
        });
    }
    let permuted = P10.apply(key)?;
    let (left, right) = permuted.split(5)?;
    let (left, right) = (left.rotate_left(1), right.rotate_left(1));
    let k1 = P8.apply(left.concat(right)?)?;
    let (left, right) = (left.rotate_left(2), right.rotate_left(2));
    let k2 = P8.apply(left.concat(right)?)?;
    Ok(Subkeys { k1, k2 })
}
