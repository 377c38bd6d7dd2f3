//! Exhaustive key recovery over the 1024-key space.
//!
//! The key space is cut into contiguous, disjoint ranges, one per worker.
//! Each worker scans its range against the known pairs and returns a local
//! match list; nothing is shared while the scan runs. After every worker has
//! joined, the local lists are merged and sorted, so the reported key order
//! never depends on thread scheduling.

use std::ops::Range;
use std::thread;
use std::time::{Duration, Instant};

use bit_seq::BitVector;
use itertools::Itertools;

use crate::cipher::encrypt_block;
use crate::error::SdesError;
use crate::tables::{BLOCK_WIDTH, KEY_SPACE, KEY_WIDTH};

/// The outcome of an exhaustive search: every matching key, ascending, plus
/// the wall-clock time from dispatch to collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub keys: Vec<u16>,
    pub elapsed: Duration,
}

/// Recovers all keys mapping `plaintext` to `ciphertext`.
///
/// The substitution boxes are not bijective, so several keys can explain one
/// pair; the full list is returned, not just the first hit. `workers` is
/// clamped to at least one; counts beyond the key-space size simply leave
/// the excess workers with empty ranges.
pub fn search(
    plaintext: BitVector,
    ciphertext: BitVector,
    workers: usize,
) -> Result<SearchOutcome, SdesError> {
    search_pairs(&[(plaintext, ciphertext)], workers)
}

/// Like [`search`], but a key must explain every given
/// (plaintext, ciphertext) pair at once. More pairs cut the candidate set
/// down fast.
pub fn search_pairs(
    pairs: &[(BitVector, BitVector)],
    workers: usize,
) -> Result<SearchOutcome, SdesError> {
    if pairs.is_empty() {
        return Err(SdesError::EmptyInput);
    }
    for &(plaintext, ciphertext) in pairs {
        for block in [plaintext, ciphertext] {
            if block.width() != BLOCK_WIDTH {
                return Err(SdesError::InvalidLength {
                    expected: BLOCK_WIDTH,
                    actual: block.width(),
                });
            }
        }
    }
    let workers = workers.max(1);
    let started = Instant::now();
    let matched = thread::scope(|scope| {
        let handles: Vec<_> = partition(KEY_SPACE, workers)
            .filter(|range| !range.is_empty())
            .map(|range| scope.spawn(move || scan_range(range, pairs)))
            .collect();
        let mut matched = Vec::new();
        for handle in handles {
            // a worker that died mid-range fails the whole search; a partial
            // key list must never be reported as the answer
            matched.extend(handle.join().map_err(|_| SdesError::SearchFailed)??);
        }
        Ok::<_, SdesError>(matched)
    })?;
    let keys = matched.into_iter().sorted_unstable().collect();
    Ok(SearchOutcome {
        keys,
        elapsed: started.elapsed(),
    })
}

/// Contiguous ranges covering `0..space` exactly once; the first
/// `space % workers` ranges carry one extra key.
fn partition(space: u16, workers: usize) -> impl Iterator<Item = Range<u16>> {
    let space = space as usize;
    let base = space / workers;
    let extra = space % workers;
    (0..workers).scan(0usize, move |start, i| {
        let len = base + usize::from(i < extra);
        let range = *start as u16..(*start + len) as u16;
        *start += len;
        Some(range)
    })
}

fn scan_range(
    range: Range<u16>,
    pairs: &[(BitVector, BitVector)],
) -> Result<Vec<u16>, SdesError> {
    let mut matched = Vec::new();
    'keys: for key_value in range {
        let key = BitVector::from_uint(key_value, KEY_WIDTH)?;
        for &(plaintext, ciphertext) in pairs {
            if encrypt_block(plaintext, key)? != ciphertext {
                continue 'keys;
            }
        }
        matched.push(key_value);
    }
    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(s: &str) -> BitVector {
        s.parse().unwrap()
    }

    #[test]
    fn partition_is_disjoint_and_exhaustive() {
        for workers in [1usize, 2, 3, 7, 64, 1024, 5000] {
            let ranges: Vec<_> = partition(KEY_SPACE, workers).collect();
            assert_eq!(ranges.len(), workers);
            let mut covered = 0u32;
            let mut next = 0u16;
            for range in ranges {
                assert_eq!(range.start, next, "gap or overlap at {} workers", workers);
                next = range.end;
                covered += range.len() as u32;
            }
            assert_eq!(next, KEY_SPACE);
            assert_eq!(covered, KEY_SPACE as u32);
        }
    }

    #[test]
    fn finds_the_planted_key() {
        let key = bits("1010000010");
        let plaintext = bits("10010111");
        let ciphertext = encrypt_block(plaintext, key).unwrap();
        let outcome = search(plaintext, ciphertext, 4).unwrap();
        assert!(outcome.keys.contains(&0b1010000010));
    }

    #[test]
    fn result_is_strictly_ascending_and_bounded() {
        let outcome = search(bits("00000000"), bits("11110000"), 8).unwrap();
        assert!(!outcome.keys.is_empty());
        assert!(outcome.keys.len() <= KEY_SPACE as usize);
        assert!(outcome.keys.windows(2).all(|w| w[0] < w[1]));
        assert!(outcome.keys.contains(&0));
    }

    #[test]
    fn key_set_is_invariant_under_worker_count() {
        let plaintext = bits("01100101");
        let ciphertext = encrypt_block(plaintext, bits("0011001100")).unwrap();
        let baseline = search(plaintext, ciphertext, 1).unwrap().keys;
        for workers in [0usize, 7, 1024, 5000] {
            assert_eq!(
                search(plaintext, ciphertext, workers).unwrap().keys,
                baseline,
                "workers={} changed the key set",
                workers
            );
        }
    }

    #[test]
    fn extra_pairs_only_shrink_the_candidate_set() {
        let key = bits("0101010101");
        let p1 = bits("10010111");
        let p2 = bits("00101101");
        let c1 = encrypt_block(p1, key).unwrap();
        let c2 = encrypt_block(p2, key).unwrap();
        let single = search_pairs(&[(p1, c1)], 4).unwrap().keys;
        let both = search_pairs(&[(p1, c1), (p2, c2)], 4).unwrap().keys;
        assert!(both.contains(&0b0101010101));
        assert!(both.len() <= single.len());
        assert!(both.iter().all(|k| single.contains(k)));
    }

    #[test]
    fn empty_pair_list_is_rejected() {
        assert_eq!(search_pairs(&[], 4), Err(SdesError::EmptyInput));
    }

    #[test]
    fn malformed_blocks_are_rejected() {
        assert!(matches!(
            search(bits("0000"), bits("11110000"), 4),
            Err(SdesError::InvalidLength { expected: 8, .. })
        ));
    }
}
