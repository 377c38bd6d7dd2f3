//! Fixed-width bit vectors and table-driven permutations.
//!
//! A [`BitVector`] is a small value type: an unsigned integer payload plus an
//! explicit bit-width tag. Positions are 1-indexed wherever a permutation
//! table refers to them, matching the usual way cipher permutation tables are
//! written down.

mod bit_vector;
mod permutation;

pub use bit_vector::{BitVector, MAX_WIDTH};
pub use permutation::Permutation;

use thiserror::Error;

/// Errors produced when constructing or combining bit vectors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitSeqError {
    #[error("expected a {expected}-bit vector, got {actual} bits")]
    WidthMismatch { expected: usize, actual: usize },
    #[error("value {value} does not fit into {width} bits")]
    ValueOutOfRange { value: u16, width: usize },
    #[error("bit vector width must be between 1 and {MAX_WIDTH}, got {0}")]
    UnsupportedWidth(usize),
    #[error("bit strings may only contain '0' or '1', found {found:?}")]
    InvalidAlphabet { found: char },
    #[error("cannot split a {width}-bit vector at position {at}")]
    SplitOutOfBounds { width: usize, at: usize },
}
