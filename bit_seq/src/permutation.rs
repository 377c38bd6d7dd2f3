use crate::{BitSeqError, BitVector, MAX_WIDTH};

/// An immutable 1-indexed permutation table with a declared input width.
///
/// Output position `i` takes the value of the input at `table[i]`. The table
/// may repeat or drop source positions, so one type covers straight
/// permutations, expansions and compressions alike. Entries are validated at
/// construction; `const` tables that violate the contract fail to compile.
#[derive(Clone, Copy, Debug)]
pub struct Permutation {
    input_width: usize,
    table: &'static [u8],
}

impl Permutation {
    pub const fn new(input_width: usize, table: &'static [u8]) -> Self {
        assert!(
            input_width >= 1 && input_width <= MAX_WIDTH,
            "permutation input width must be between 1 and 16"
        );
        assert!(
            !table.is_empty() && table.len() <= MAX_WIDTH,
            "permutation table length must be between 1 and 16"
        );
        let mut i = 0;
        while i < table.len() {
            assert!(
                table[i] >= 1 && table[i] as usize <= input_width,
                "permutation entries must be 1-indexed positions within the input width"
            );
            i += 1;
        }
        Self { input_width, table }
    }

    pub fn input_width(&self) -> usize {
        self.input_width
    }

    /// Width of the vectors this permutation produces.
    pub fn output_width(&self) -> usize {
        self.table.len()
    }

    /// Applies the table to `input`, producing a fresh vector.
    pub fn apply(&self, input: BitVector) -> Result<BitVector, BitSeqError> {
        if input.width() != self.input_width {
            return Err(BitSeqError::WidthMismatch {
                expected: self.input_width,
                actual: input.width(),
            });
        }
        let mut value = 0u16;
        for &src in self.table {
            value = value << 1 | input.bit(src as usize);
        }
        BitVector::from_uint(value, self.table.len())
    }
}
