//! One-sided, upwind-style finite-difference gradients of a scalar grid field.
//!
//! For each axis the smaller of the two face neighbors is selected, so the difference
//! always looks "upstream" towards the seeded boundary of a distance field.

use alloc::vec;
use alloc::vec::Vec;

use num_traits::Float;

use crate::error::Result;
use crate::grid::{GridShape, GridView, GridViewMut};
use crate::iter::IndexIterator;
use crate::neighborhood::{offset_index, NeighborhoodOffsets};
use crate::types::{GridIndex, GridSize};

/// Gradient of `grid` at `index`.
///
/// Component `i` is `(cell(index) - m) / dx[i]`, where `m` is the minimum of the in-bounds
/// neighbors along axis `i`. An out-of-bounds neighbor contributes `T::max_value()`, i.e.
/// it never wins the minimum.
///
/// # Note
/// An axis with a single cell has no in-bounds neighbor and yields a meaningless component.
/// Such grids are not supported.
pub fn gradient<T: Float, const N: usize>(
    grid: &GridView<'_, T, N>,
    index: &GridIndex<N>,
    dx: &[T; N],
    offsets: &NeighborhoodOffsets<N>,
) -> [T; N] {
    let shape = grid.shape();
    let value = *grid.cell(index);

    let mut grad = [T::zero(); N];
    for (i, g) in grad.iter_mut().enumerate() {
        let pos_index = offset_index(index, &offsets.positive(i));
        let neg_index = offset_index(index, &offsets.negative(i));

        let mut min_value = T::max_value();
        if shape.contains_along(&pos_index, i) {
            min_value = *grid.cell(&pos_index);
        }
        if shape.contains_along(&neg_index, i) {
            let neg = *grid.cell(&neg_index);
            if neg < min_value {
                min_value = neg;
            }
        }
        *g = (value - min_value) / dx[i];
    }
    grad
}

/// Gradient at every cell of a scalar field.
///
/// The returned buffer uses the same layout as `distance_buffer`.
///
/// # Errors
/// `GridBufferMismatch` if `distance_buffer` does not hold one value per grid cell, or a
/// shape error if `grid_size` is invalid.
pub fn distance_gradients<T: Float, const N: usize>(
    distance_buffer: &[T],
    grid_size: GridSize<N>,
    voxel_size: &[T; N],
) -> Result<Vec<[T; N]>> {
    let shape = GridShape::new(grid_size)?;
    let distance_grid = GridView::with_shape(shape, distance_buffer)?;

    let mut grad_buffer = vec![[T::zero(); N]; shape.len()];
    let mut grad_grid = GridViewMut::with_shape(shape, &mut grad_buffer)?;

    let offsets = NeighborhoodOffsets::<N>::new();
    let mut iter = IndexIterator::new(grid_size);
    loop {
        let index = iter.index();
        *grad_grid.cell_mut(&index) = gradient(&distance_grid, &index, voxel_size, &offsets);
        if !iter.advance() {
            break;
        }
    }
    Ok(grad_buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FmmCoreError;
    use crate::types::linear_size;

    #[test]
    fn test_constant_field_has_zero_gradient() {
        let size = [4, 3];
        let buffer = vec![2.5f64; linear_size(&size)];
        let grads = distance_gradients(&buffer, size, &[0.1, 0.1]).unwrap();
        assert_eq!(grads.len(), 12);
        for g in grads {
            assert_eq!(g, [0.0, 0.0]);
        }
    }

    #[test]
    fn test_linear_field_upwind_difference() {
        // f = x along the contiguous axis, unit spacing.
        let size = [5, 2];
        let mut buffer = vec![0.0f32; 10];
        {
            let mut grid = GridViewMut::new(size, &mut buffer).unwrap();
            for x in 0..5 {
                for y in 0..2 {
                    *grid.cell_mut(&[x, y]) = x as f32;
                }
            }
        }
        let grid = GridView::new(size, &buffer).unwrap();
        let offsets = NeighborhoodOffsets::new();

        // Interior: min neighbor is x - 1.
        let g = gradient(&grid, &[2, 0], &[1.0, 1.0], &offsets);
        assert_eq!(g, [1.0, 0.0]);

        // Low boundary: only the +x neighbor exists, so the difference is negative.
        let g = gradient(&grid, &[0, 1], &[1.0, 1.0], &offsets);
        assert_eq!(g, [-1.0, 0.0]);

        // High boundary: only the -x neighbor exists.
        let g = gradient(&grid, &[4, 1], &[1.0, 1.0], &offsets);
        assert_eq!(g, [1.0, 0.0]);
    }

    #[test]
    fn test_spacing_scales_components() {
        let size = [3, 3];
        let buffer: Vec<f64> = (0..9).map(|i| (i / 3) as f64).collect();
        let grid = GridView::new(size, &buffer).unwrap();
        let g = gradient(&grid, &[1, 1], &[0.5, 0.25], &NeighborhoodOffsets::new());
        assert_eq!(g, [0.0, 4.0]);
    }

    #[test]
    fn test_gradients_cover_all_three_axes() {
        // f = z on a 3x3x3 grid; every cell must receive a gradient.
        let size = [3, 3, 3];
        let buffer: Vec<f64> = (0..27).map(|i| (i / 9) as f64).collect();
        let grads = distance_gradients(&buffer, size, &[1.0, 1.0, 1.0]).unwrap();
        let shape = GridShape::new(size).unwrap();
        let g = grads[shape.linear_index(&[1, 1, 2])];
        assert_eq!(g, [0.0, 0.0, 1.0]);
        let g = grads[shape.linear_index(&[2, 0, 0])];
        assert_eq!(g, [0.0, 0.0, -1.0]);
    }

    #[test]
    fn test_buffer_size_mismatch() {
        let buffer = vec![0.0f32; 5];
        let err = distance_gradients(&buffer, [2, 3], &[1.0, 1.0]).unwrap_err();
        assert_eq!(
            err,
            FmmCoreError::GridBufferMismatch {
                expected: 6,
                got: 5
            }
        );
    }
}
