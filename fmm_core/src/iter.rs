//! Row-major enumeration of every cell index in an N-dimensional box.

use core::iter::FusedIterator;

use crate::types::{checked_linear_size, GridIndex, GridSize};

/// Odometer over all indices in `[0, size[0]) x ... x [0, size[N-1])`.
///
/// The last axis varies fastest. The iterator starts on the all-zero index, which is a
/// valid position, and is not restartable: once [`advance`](Self::advance) has returned
/// `false` it keeps returning `false`.
///
/// # Example
/// ```
/// use fmm_core::iter::IndexIterator;
///
/// let mut iter = IndexIterator::new([2, 2]);
/// let mut seen = vec![iter.index()];
/// while iter.advance() {
///     seen.push(iter.index());
/// }
/// assert_eq!(seen, vec![[0, 0], [0, 1], [1, 0], [1, 1]]);
/// ```
#[derive(Debug, Clone)]
pub struct IndexIterator<const N: usize> {
    size: GridSize<N>,
    index: GridIndex<N>,
    exhausted: bool,
}

impl<const N: usize> IndexIterator<N> {
    /// Create an iterator positioned on the all-zero index.
    ///
    /// Every axis size must be at least 1.
    pub fn new(size: GridSize<N>) -> Self {
        debug_assert!(size.iter().all(|&s| s >= 1), "zero axis in {:?}", size);
        Self {
            size,
            index: [0; N],
            exhausted: false,
        }
    }

    /// The current index.
    #[inline]
    pub fn index(&self) -> GridIndex<N> {
        self.index
    }

    /// Whether every index has been produced.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Step to the next index.
    ///
    /// Returns `false` once the last index has been passed; the iterator is then exhausted.
    pub fn advance(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        for axis in (0..N).rev() {
            if (self.index[axis] as usize) + 1 < self.size[axis] {
                self.index[axis] += 1;
                return true;
            }
            self.index[axis] = 0;
        }
        self.exhausted = true;
        false
    }
}

/// `Iterator` adapter yielding every index of a grid in row-major order.
#[derive(Debug, Clone)]
pub struct Indices<const N: usize> {
    inner: IndexIterator<N>,
    started: bool,
    remaining: usize,
}

impl<const N: usize> Iterator for Indices<N> {
    type Item = GridIndex<N>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        if self.started {
            let advanced = self.inner.advance();
            debug_assert!(advanced, "index iterator ended before its count");
        } else {
            self.started = true;
        }
        self.remaining -= 1;
        Some(self.inner.index())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<const N: usize> ExactSizeIterator for Indices<N> {}

impl<const N: usize> FusedIterator for Indices<N> {}

/// All indices of a grid of the given size, last axis fastest.
///
/// ```
/// use fmm_core::iter::indices;
///
/// assert_eq!(indices([3, 4]).count(), 12);
/// ```
pub fn indices<const N: usize>(size: GridSize<N>) -> Indices<N> {
    Indices {
        inner: IndexIterator::new(size),
        started: false,
        remaining: checked_linear_size(&size).unwrap_or(usize::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_row_major_order_3d() {
        let all: Vec<_> = indices([2, 2, 3]).collect();
        assert_eq!(all.len(), 12);
        assert_eq!(all[0], [0, 0, 0]);
        assert_eq!(all[1], [0, 0, 1]);
        assert_eq!(all[2], [0, 0, 2]);
        assert_eq!(all[3], [0, 1, 0]);
        assert_eq!(all[6], [1, 0, 0]);
        assert_eq!(all[11], [1, 1, 2]);
    }

    #[test]
    fn test_exhaustion_is_terminal() {
        let mut iter = IndexIterator::new([2]);
        assert!(iter.advance());
        assert_eq!(iter.index(), [1]);
        assert!(!iter.advance());
        assert!(iter.is_exhausted());
        assert!(!iter.advance());
        assert!(!iter.advance());
    }

    #[test]
    fn test_single_cell_grid() {
        let mut iter = IndexIterator::new([1, 1, 1]);
        assert_eq!(iter.index(), [0, 0, 0]);
        assert!(!iter.advance());
        assert_eq!(indices([1, 1, 1]).count(), 1);
    }

    #[test]
    fn test_adapter_matches_manual_advance() {
        let size = [3, 1, 2];
        let mut manual = Vec::new();
        let mut iter = IndexIterator::new(size);
        manual.push(iter.index());
        while iter.advance() {
            manual.push(iter.index());
        }
        let adapted: Vec<_> = indices(size).collect();
        assert_eq!(manual, adapted);
    }

    #[test]
    fn test_adapter_fused_after_end() {
        let mut it = indices([1, 2]);
        assert_eq!(it.next(), Some([0, 0]));
        assert_eq!(it.next(), Some([0, 1]));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_adapter_exact_size() {
        let mut it = indices([2, 3, 2]);
        assert_eq!(it.len(), 12);
        assert_eq!(it.size_hint(), (12, Some(12)));
        it.next();
        it.next();
        assert_eq!(it.len(), 10);
        let rest: Vec<_> = it.by_ref().collect();
        assert_eq!(rest.len(), 10);
        assert_eq!(it.len(), 0);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_adapter_is_fused() {
        fn assert_fused<I: FusedIterator>(_: &I) {}
        let mut it = indices([2]);
        assert_fused(&it);
        assert_eq!(it.by_ref().count(), 2);
        for _ in 0..3 {
            assert_eq!(it.next(), None);
        }
    }

}
