//! A square bitboard whose side length is chosen at runtime.
//!
//! The type is `no_std` friendly and avoids heap allocations. Boards are
//! represented as a `size×size` grid packed into an unsigned integer `T`,
//! so the largest usable side is `floor(sqrt(T::BITS))`.

use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BitBoardError {
    /// Requested board size N*N exceeds capacity of `T::BITS`.
    #[error("SizeTooLarge: {n}x{n} board exceeds T::BITS={capacity}")]
    SizeTooLarge { n: usize, capacity: usize },
    /// Row or column index is out of bounds [0..N).
    #[error("IndexOutOfBounds: row={row}, col={col}")]
    IndexOutOfBounds { row: usize, col: usize },
}

/// A `size×size` bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    size: usize,
}

impl<T> BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of bits available in the backing integer.
    pub const CAPACITY: usize = mem::size_of::<T>() * 8;

    /// Fallible constructor: returns `Err(SizeTooLarge)` if size*size > T::BITS.
    pub fn try_new(size: usize) -> Result<Self, BitBoardError> {
        match size.checked_mul(size) {
            Some(cells) if cells <= Self::CAPACITY => Ok(BitBoard {
                bits: T::zero(),
                size,
            }),
            _ => Err(BitBoardError::SizeTooLarge {
                n: size,
                capacity: Self::CAPACITY,
            }),
        }
    }

    /// Side length of the board.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        let idx = self.index(row, col)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Sets the bit at (row, col) to 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let idx = self.index(row, col)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Clears all bits to `0`.
    #[inline]
    pub fn clear_all(&mut self) {
        self.bits = T::zero();
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, BitBoardError> {
        if row >= self.size || col >= self.size {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(row * self.size + col)
        }
    }

    /// Iterator over the set bits of the board, in row-major order.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<'_, T> {
        SetBits {
            board: self,
            idx: 0,
        }
    }
}

impl<T> fmt::Debug for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}>:", self.size)?;
        for r in 0..self.size {
            for c in 0..self.size {
                let bit = if self.get(r, c).unwrap_or(false) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set bits of a bitboard.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T>,
    idx: usize,
}

impl<T> Iterator for SetBits<'_, T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let n = self.board.size;
        while self.idx < n * n {
            let idx = self.idx;
            self.idx += 1;
            if ((self.board.bits >> idx) & T::one()) != T::zero() {
                return Some((idx / n, idx % n));
            }
        }
        None
    }
}
