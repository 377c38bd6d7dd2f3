//! S-DES: a simplified, deliberately breakable block cipher, plus the tool
//! that breaks it.
//!
//! The cipher is a two-round Feistel network over 8-bit blocks with a
//! 10-bit key. The key space is small enough to search exhaustively in
//! milliseconds, which is exactly what [`search`] does, in parallel. None
//! of this is secure and none of it is meant to be; it is a teaching
//! cipher.
//!
//! Basic usage:
//!
//! ```
//! // string-boundary operations validate everything for you
//! let ciphertext = sdes::ops::encrypt_block("10010111", "1010000010").unwrap();
//! assert_eq!(ciphertext, "00111000");
//!
//! // recover every key consistent with a known pair
//! let report = sdes::ops::bruteforce("10010111", &ciphertext, 4).unwrap();
//! assert!(report.keys.contains(&0b1010000010));
//! ```

pub mod cipher;
pub mod error;
pub mod ops;
pub mod round;
pub mod schedule;
pub mod search;
pub mod tables;
pub mod text;

pub use bit_seq;
pub use bit_seq::BitVector;

pub use cipher::{decrypt_block, encrypt_block};
pub use error::SdesError;
pub use search::{search, search_pairs, SearchOutcome};
pub use text::{decrypt_text, encrypt_text};
