//! The two-round Feistel cipher core.

use bit_seq::BitVector;

use crate::error::SdesError;
use crate::round::round_fn;
use crate::schedule::{derive_subkeys, Subkeys};
use crate::tables::{BLOCK_WIDTH, FP, IP};

fn check_block(block: BitVector) -> Result<(), SdesError> {
    if block.width() != BLOCK_WIDTH {
        return Err(SdesError::InvalidLength {
            expected: BLOCK_WIDTH,
            actual: block.width(),
        });
    }
    Ok(())
}

/// One full Feistel walk: IP, a round keyed with `first`, a half swap, a
/// round keyed with `second`, then the final permutation. Encryption and
/// decryption differ only in the order the two subkeys are fed in.
fn feistel(block: BitVector, first: BitVector, second: BitVector) -> Result<BitVector, SdesError> {
    let (l0, r0) = IP.apply(block)?.split(4)?;
    let l1 = l0.xor(round_fn(r0, first)?)?;
    // swap: the untouched right half leads into round two
    let (l, r) = (r0, l1);
    let l2 = l.xor(round_fn(r, second)?)?;
    Ok(FP.apply(l2.concat(r)?)?)
}

/// Encrypts one 8-bit block under a 10-bit key.
pub fn encrypt_block(plaintext: BitVector, key: BitVector) -> Result<BitVector, SdesError> {
    check_block(plaintext)?;
    let Subkeys { k1, k2 } = derive_subkeys(key)?;
    feistel(plaintext, k1, k2)
}

/// Decrypts one 8-bit block under a 10-bit key.
///
/// Identical to [`encrypt_block`] except the subkeys are applied in reverse
/// order, so `decrypt_block(encrypt_block(p, k), k) == p` holds for every
/// block and every key.
pub fn decrypt_block(ciphertext: BitVector, key: BitVector) -> Result<BitVector, SdesError> {
    check_block(ciphertext)?;
    let Subkeys { k1, k2 } = derive_subkeys(key)?;
    feistel(ciphertext, k2, k1)
}
