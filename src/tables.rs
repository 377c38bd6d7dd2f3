//! The fixed S-DES permutation and substitution tables.
//!
//! Values follow the textbook definition of the cipher. They are the whole
//! of the algorithm's "secret sauce" and must not be edited: a single changed
//! entry silently breaks the encrypt/decrypt round trip or the published
//! test vectors.

use bit_seq::Permutation;

/// Size of one cipher block, in bits.
pub const BLOCK_WIDTH: usize = 8;
/// Size of the master key, in bits.
pub const KEY_WIDTH: usize = 10;
/// Number of distinct keys, `2^KEY_WIDTH`.
pub const KEY_SPACE: u16 = 1 << KEY_WIDTH;

/// Initial permutation of the 10-bit master key.
pub const P10: Permutation = Permutation::new(10, &[3, 5, 2, 7, 4, 10, 1, 9, 8, 6]);
/// Compresses a shifted 10-bit key into an 8-bit subkey.
pub const P8: Permutation = Permutation::new(10, &[6, 3, 7, 4, 8, 5, 10, 9]);
/// Initial permutation of the plaintext block.
pub const IP: Permutation = Permutation::new(8, &[2, 6, 3, 1, 4, 8, 5, 7]);
/// Final permutation, the inverse of [`IP`].
pub const FP: Permutation = Permutation::new(8, &[4, 1, 3, 5, 7, 2, 8, 6]);
/// Expands the 4-bit right half to 8 bits inside the round function.
pub const EP: Permutation = Permutation::new(4, &[4, 1, 2, 3, 2, 3, 4, 1]);
/// Shuffles the combined S-box output.
pub const P4: Permutation = Permutation::new(4, &[2, 4, 3, 1]);

/// First substitution box. Row and column indexing is defined in
/// [`crate::round`].
pub const S0: [[u8; 4]; 4] = [[1, 0, 3, 2], [3, 2, 1, 0], [0, 2, 1, 3], [3, 1, 3, 2]];
/// Second substitution box.
pub const S1: [[u8; 4]; 4] = [[0, 1, 2, 3], [2, 0, 1, 3], [3, 0, 1, 0], [2, 1, 0, 3]];
