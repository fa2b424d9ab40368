//! Strided N-dimensional addressing over flat, caller-owned buffers.
//!
//! A [`GridShape`] validates the axis sizes once and derives the strides. The views borrow
//! a buffer for their lifetime and never allocate, resize or free it.
//!
//! Memory layout: the first axis is contiguous, i.e. the linear offset of `index` is
//! `index[0] + index[1] * size[0] + index[2] * size[0] * size[1] + ...`.

use crate::error::{FmmCoreError, Result};
use crate::types::{checked_linear_size, GridIndex, GridSize};

/// Validated axis sizes plus the derived strides of an N-dimensional grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape<const N: usize> {
    size: GridSize<N>,
    /// `strides[i] = size[0] * ... * size[i - 1]`, so `strides[0]` is always 1.
    strides: [usize; N],
    len: usize,
}

impl<const N: usize> GridShape<N> {
    /// Create a shape from per-axis cell counts.
    ///
    /// # Errors
    /// * `ZeroAxisSize` if any axis has no cells
    /// * `GridTooLarge` if an axis cannot be addressed by an `i32` index or the total
    ///   cell count overflows `usize`
    pub fn new(size: GridSize<N>) -> Result<Self> {
        for (axis, &s) in size.iter().enumerate() {
            if s == 0 {
                return Err(FmmCoreError::ZeroAxisSize { axis });
            }
            if s > i32::MAX as usize {
                return Err(FmmCoreError::GridTooLarge);
            }
        }
        let len = checked_linear_size(&size).ok_or(FmmCoreError::GridTooLarge)?;

        let mut strides = [1usize; N];
        for i in 1..N {
            strides[i] = strides[i - 1] * size[i - 1];
        }

        Ok(Self { size, strides, len })
    }

    /// Cells per axis.
    #[inline]
    pub fn size(&self) -> GridSize<N> {
        self.size
    }

    /// The `N - 1` derived strides for axes `1..N`.
    #[inline]
    pub fn strides(&self) -> &[usize] {
        self.strides.get(1..).unwrap_or(&[])
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; every axis holds at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `index` lies inside the grid along `axis`.
    #[inline]
    pub fn contains_along(&self, index: &GridIndex<N>, axis: usize) -> bool {
        0 <= index[axis] && (index[axis] as usize) < self.size[axis]
    }

    /// Whether every component of `index` lies inside the grid.
    #[inline]
    pub fn contains(&self, index: &GridIndex<N>) -> bool {
        (0..N).all(|axis| self.contains_along(index, axis))
    }

    /// Linear offset of `index` into the flat buffer.
    ///
    /// No range checking outside debug builds. An out-of-range index is a caller bug.
    #[inline]
    pub fn linear_index(&self, index: &GridIndex<N>) -> usize {
        debug_assert!(
            self.contains(index),
            "index {:?} outside grid {:?}",
            index,
            self.size
        );
        index
            .iter()
            .zip(self.strides.iter())
            .map(|(&i, &stride)| i as usize * stride)
            .sum()
    }

    fn check_buffer(&self, got: usize) -> Result<()> {
        if got != self.len {
            return Err(FmmCoreError::GridBufferMismatch {
                expected: self.len,
                got,
            });
        }
        Ok(())
    }
}

/// Read-only N-dimensional view over a borrowed buffer.
#[derive(Debug, Clone, Copy)]
pub struct GridView<'a, T, const N: usize> {
    shape: GridShape<N>,
    cells: &'a [T],
}

impl<'a, T, const N: usize> GridView<'a, T, N> {
    /// Create a view over `cells`, which must hold exactly one element per grid cell.
    pub fn new(size: GridSize<N>, cells: &'a [T]) -> Result<Self> {
        Self::with_shape(GridShape::new(size)?, cells)
    }

    /// Create a view from an already validated shape.
    pub fn with_shape(shape: GridShape<N>, cells: &'a [T]) -> Result<Self> {
        shape.check_buffer(cells.len())?;
        Ok(Self { shape, cells })
    }

    /// The grid shape.
    #[inline]
    pub fn shape(&self) -> &GridShape<N> {
        &self.shape
    }

    /// Cells per axis.
    #[inline]
    pub fn size(&self) -> GridSize<N> {
        self.shape.size
    }

    /// The cell at `index`. No range checking outside debug builds.
    #[inline]
    pub fn cell(&self, index: &GridIndex<N>) -> &'a T {
        &self.cells[self.shape.linear_index(index)]
    }

    /// The underlying buffer.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.cells
    }
}

/// Mutable N-dimensional view over a borrowed buffer.
#[derive(Debug)]
pub struct GridViewMut<'a, T, const N: usize> {
    shape: GridShape<N>,
    cells: &'a mut [T],
}

impl<'a, T, const N: usize> GridViewMut<'a, T, N> {
    /// Create a mutable view over `cells`, which must hold exactly one element per grid cell.
    pub fn new(size: GridSize<N>, cells: &'a mut [T]) -> Result<Self> {
        Self::with_shape(GridShape::new(size)?, cells)
    }

    /// Create a mutable view from an already validated shape.
    pub fn with_shape(shape: GridShape<N>, cells: &'a mut [T]) -> Result<Self> {
        shape.check_buffer(cells.len())?;
        Ok(Self { shape, cells })
    }

    /// The grid shape.
    #[inline]
    pub fn shape(&self) -> &GridShape<N> {
        &self.shape
    }

    /// Cells per axis.
    #[inline]
    pub fn size(&self) -> GridSize<N> {
        self.shape.size
    }

    /// The cell at `index`. No range checking outside debug builds.
    #[inline]
    pub fn cell(&self, index: &GridIndex<N>) -> &T {
        &self.cells[self.shape.linear_index(index)]
    }

    /// Mutable reference to the cell at `index`. No range checking outside debug builds.
    #[inline]
    pub fn cell_mut(&mut self, index: &GridIndex<N>) -> &mut T {
        let i = self.shape.linear_index(index);
        &mut self.cells[i]
    }

    /// Reborrow as a read-only view.
    #[inline]
    pub fn as_view(&self) -> GridView<'_, T, N> {
        GridView {
            shape: self.shape,
            cells: &self.cells[..],
        }
    }
}
