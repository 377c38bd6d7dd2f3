use std::fmt;
use std::str::FromStr;

use crate::BitSeqError;

/// Widest vector the `u16` payload can hold.
pub const MAX_WIDTH: usize = 16;

/// An ordered, fixed-length sequence of bits.
///
/// Bits are stored MSB-first in an unsigned integer, so the vector `1011` has
/// bit 1 set, bit 2 clear, and so on. The width is part of the value: two
/// vectors with equal payloads but different widths are different values and
/// refuse to be combined.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitVector {
    value: u16,
    width: u8,
}

impl BitVector {
    /// Builds a vector of the given width from an unsigned integer.
    pub fn from_uint(value: u16, width: usize) -> Result<Self, BitSeqError> {
        if width == 0 || width > MAX_WIDTH {
            return Err(BitSeqError::UnsupportedWidth(width));
        }
        if width < MAX_WIDTH && value >> width != 0 {
            return Err(BitSeqError::ValueOutOfRange { value, width });
        }
        Ok(Self {
            value,
            width: width as u8,
        })
    }

    /// The unsigned-integer reading of this vector.
    pub fn to_uint(self) -> u16 {
        self.value
    }

    pub fn width(self) -> usize {
        self.width as usize
    }

    /// Value of the bit at 1-indexed position `pos` (0 or 1).
    ///
    /// Panics if `pos` is outside `1..=width`; permutation tables are
    /// validated against the input width before they ever index a vector.
    pub fn bit(self, pos: usize) -> u16 {
        assert!(
            pos >= 1 && pos <= self.width(),
            "bit position {} out of range for a {}-bit vector",
            pos,
            self.width
        );
        (self.value >> (self.width() - pos)) & 1
    }

    /// Bitwise XOR of two equal-width vectors.
    pub fn xor(self, other: Self) -> Result<Self, BitSeqError> {
        if self.width != other.width {
            return Err(BitSeqError::WidthMismatch {
                expected: self.width(),
                actual: other.width(),
            });
        }
        Ok(Self {
            value: self.value ^ other.value,
            width: self.width,
        })
    }

    /// Rotates left by `n` positions, wrapping around the vector width.
    pub fn rotate_left(self, n: usize) -> Self {
        let width = self.width();
        let n = n % width;
        if n == 0 {
            return self;
        }
        let mask = if width == MAX_WIDTH {
            u16::MAX
        } else {
            (1u16 << width) - 1
        };
        let value = ((self.value << n) | (self.value >> (width - n))) & mask;
        Self {
            value,
            width: self.width,
        }
    }

    /// Splits into the first `k` bits and the remaining `width - k` bits.
    pub fn split(self, k: usize) -> Result<(Self, Self), BitSeqError> {
        if k == 0 || k >= self.width() {
            return Err(BitSeqError::SplitOutOfBounds {
                width: self.width(),
                at: k,
            });
        }
        let rest = self.width() - k;
        let left = Self {
            value: self.value >> rest,
            width: k as u8,
        };
        let right = Self {
            value: self.value & ((1u16 << rest) - 1),
            width: rest as u8,
        };
        Ok((left, right))
    }

    /// Joins two vectors, `self` becoming the leading bits.
    pub fn concat(self, other: Self) -> Result<Self, BitSeqError> {
        let width = self.width() + other.width();
        if width > MAX_WIDTH {
            return Err(BitSeqError::UnsupportedWidth(width));
        }
        Ok(Self {
            value: self.value << other.width() | other.value,
            width: width as u8,
        })
    }
}

impl FromStr for BitVector {
    type Err = BitSeqError;

    /// Parses a `0`/`1` string, MSB first. The string length becomes the
    /// vector width.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let width = s.chars().count();
        if width == 0 || width > MAX_WIDTH {
            return Err(BitSeqError::UnsupportedWidth(width));
        }
        let mut value = 0u16;
        for ch in s.chars() {
            value = value << 1
                | match ch {
                    '0' => 0,
                    '1' => 1,
                    found => return Err(BitSeqError::InvalidAlphabet { found }),
                };
        }
        Ok(Self {
            value,
            width: width as u8,
        })
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.value, width = self.width())
    }
}

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitVector({})", self)
    }
}
