//! Random test inputs for the cipher crate's tests and benches.

pub use rand::random;

/// A uniformly random 10-bit key value.
pub fn random_key() -> u16 {
    rand::random::<u16>() & 0x3FF
}

/// A uniformly random 8-bit block value.
pub fn random_block() -> u8 {
    rand::random()
}

/// A random string of `len` characters with code points in `0..=255`,
/// i.e. exactly the alphabet the text codec accepts.
pub fn random_latin1_text(len: usize) -> String {
    (0..len).map(|_| char::from(rand::random::<u8>())).collect()
}
