//! Whole-grid scalar buffers derived from seeds and solver output.

use alloc::vec;
use alloc::vec::Vec;

use num_traits::Float;

use crate::error::{FmmCoreError, Result};
use crate::grid::{GridShape, GridViewMut};
use crate::types::{GridIndex, GridSize};

/// Grid buffer holding the frozen distances at their cells and NaN everywhere else.
///
/// Later entries win if an index appears more than once.
///
/// # Errors
/// * `FrozenLengthMismatch` if `frozen_indices` and `frozen_distances` differ in length
/// * a shape error if `grid_size` is invalid
pub fn input_buffer<T: Float, const N: usize>(
    grid_size: GridSize<N>,
    frozen_indices: &[GridIndex<N>],
    frozen_distances: &[T],
) -> Result<Vec<T>> {
    if frozen_indices.len() != frozen_distances.len() {
        return Err(FmmCoreError::FrozenLengthMismatch {
            indices: frozen_indices.len(),
            distances: frozen_distances.len(),
        });
    }

    let shape = GridShape::new(grid_size)?;
    let mut buffer = vec![T::nan(); shape.len()];
    let mut grid = GridViewMut::with_shape(shape, &mut buffer)?;
    for (index, &d) in frozen_indices.iter().zip(frozen_distances.iter()) {
        *grid.cell_mut(index) = d;
    }
    Ok(buffer)
}

/// Elementwise `computed - ground_truth` over a whole grid.
///
/// # Errors
/// * `GridBufferMismatch` if `computed` does not hold one value per grid cell
/// * `DistanceBufferMismatch` if the two buffers differ in length
pub fn error_buffer<T: Float, const N: usize>(
    grid_size: GridSize<N>,
    computed: &[T],
    ground_truth: &[T],
) -> Result<Vec<T>> {
    let shape = GridShape::new(grid_size)?;
    if computed.len() != shape.len() {
        return Err(FmmCoreError::GridBufferMismatch {
            expected: shape.len(),
            got: computed.len(),
        });
    }
    if computed.len() != ground_truth.len() {
        return Err(FmmCoreError::DistanceBufferMismatch {
            computed: computed.len(),
            ground_truth: ground_truth.len(),
        });
    }

    Ok(computed
        .iter()
        .zip(ground_truth.iter())
        .map(|(&d, &d_gt)| d - d_gt)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_buffer_marks_frozen_cells() {
        let buffer = input_buffer([3, 2], &[[1, 0], [2, 1]], &[0.25f32, -0.5]).unwrap();
        assert_eq!(buffer.len(), 6);
        assert_eq!(buffer[1], 0.25);
        assert_eq!(buffer[5], -0.5);
        let nan_count = buffer.iter().filter(|v| v.is_nan()).count();
        assert_eq!(nan_count, 4);
    }

    #[test]
    fn test_input_buffer_without_seeds_is_all_nan() {
        let buffer = input_buffer::<f64, 3>([2, 2, 2], &[], &[]).unwrap();
        assert!(buffer.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_input_buffer_length_mismatch() {
        let err = input_buffer([3, 2], &[[0, 0]], &[1.0f64, 2.0]).unwrap_err();
        assert_eq!(
            err,
            FmmCoreError::FrozenLengthMismatch {
                indices: 1,
                distances: 2
            }
        );
    }

    #[test]
    fn test_error_buffer_of_identical_buffers_is_zero() {
        let x = vec![0.5f64, -1.25, 3.0, 1e-9];
        let err = error_buffer([2, 2], &x, &x).unwrap();
        assert_eq!(err, vec![0.0; 4]);
    }

    #[test]
    fn test_error_buffer_sign_convention() {
        let err = error_buffer([2], &[1.0f32, 2.0], &[0.5, 2.5]).unwrap();
        assert_eq!(err, vec![0.5, -0.5]);
    }

    #[test]
    fn test_error_buffer_mismatches() {
        assert_eq!(
            error_buffer([2, 2], &[0.0f64; 3], &[0.0; 3]),
            Err(FmmCoreError::GridBufferMismatch {
                expected: 4,
                got: 3
            })
        );
        assert_eq!(
            error_buffer([2, 2], &[0.0f64; 4], &[0.0; 5]),
            Err(FmmCoreError::DistanceBufferMismatch {
                computed: 4,
                ground_truth: 5
            })
        );
    }
}
