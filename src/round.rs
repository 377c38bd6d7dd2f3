//! The keyed round function `F` at the heart of each Feistel round.

use bit_seq::BitVector;

use crate::error::SdesError;
use crate::tables::{EP, P4, S0, S1};

/// 4-to-2-bit substitution through one S-box.
///
/// For input bits `b1 b2 b3 b4`, the row index is `b1 b4` and the column
/// index is `b2 b3`. This outer-bits-row / inner-bits-column convention is
/// load-bearing; swapping it produces a different (and wrong) cipher.
fn substitute(input: BitVector, sbox: &[[u8; 4]; 4]) -> Result<BitVector, SdesError> {
    let row = (input.bit(1) << 1 | input.bit(4)) as usize;
    let col = (input.bit(2) << 1 | input.bit(3)) as usize;
    Ok(BitVector::from_uint(sbox[row][col] as u16, 2)?)
}

/// `F(r, k)`: expand the 4-bit half to 8 bits, mix in the subkey, substitute
/// each half through its S-box and shuffle the 4-bit result with P4.
pub fn round_fn(r: BitVector, subkey: BitVector) -> Result<BitVector, SdesError> {
    if r.width() != 4 {
        return Err(SdesError::InvalidLength {
            expected: 4,
            actual: r.width(),
        });
    }
    if subkey.width() != 8 {
        return Err(SdesError::InvalidLength {
            expected: 8,
            actual: subkey.width(),
        });
    }
    let mixed = EP.apply(r)?.xor(subkey)?;
    let (left, right) = mixed.split(4)?;
    let substituted = substitute(left, &S0)?.concat(substitute(right, &S1)?)?;
    Ok(P4.apply(substituted)?)
}
