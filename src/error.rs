use bit_seq::BitSeqError;
use thiserror::Error;

/// Errors produced at the boundary of any cipher operation.
///
/// All of these are deterministic input-validity failures detected before or
/// while an operation runs; none are transient and none leave a partial
/// result behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SdesError {
    #[error("expected a {expected}-bit input, got {actual} bits")]
    InvalidLength { expected: usize, actual: usize },
    #[error(transparent)]
    BitSeq(#[from] BitSeqError),
    #[error("input text must not be empty")]
    EmptyInput,
    #[error("character {ch:?} (code point {code}) does not fit into an 8-bit block")]
    CharOutOfRange { ch: char, code: u32 },
    #[error("a key search worker failed before finishing its range")]
    SearchFailed,
}
