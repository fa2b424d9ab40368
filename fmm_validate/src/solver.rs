//! The distance-solver contract and a brute-force reference implementation.

use fmm_core::{
    cell_center, distance, indices, FmmCoreError, GridIndex, GridShape, GridSize,
};
use num_traits::Float;

use crate::error::{Result, ValidateError};

/// An Eikonal solver computing a distance field from frozen seed cells.
///
/// Implementations must return one value per grid cell, in the grid buffer layout of
/// [`fmm_core::GridShape`] (first axis contiguous).
pub trait DistanceSolver {
    /// Unsigned arrival times from the frozen cells.
    fn unsigned_distance<T: Float, const N: usize>(
        &self,
        grid_size: GridSize<N>,
        voxel_size: &[T; N],
        speed: T,
        frozen_indices: &[GridIndex<N>],
        frozen_distances: &[T],
    ) -> Result<Vec<T>>;

    /// Signed arrival times from the frozen cells; `frozen_normals` point to the positive side.
    fn signed_distance<T: Float, const N: usize>(
        &self,
        grid_size: GridSize<N>,
        voxel_size: &[T; N],
        speed: T,
        frozen_indices: &[GridIndex<N>],
        frozen_distances: &[T],
        frozen_normals: &[[T; N]],
    ) -> Result<Vec<T>>;
}

impl<S: DistanceSolver + ?Sized> DistanceSolver for &S {
    fn unsigned_distance<T: Float, const N: usize>(
        &self,
        grid_size: GridSize<N>,
        voxel_size: &[T; N],
        speed: T,
        frozen_indices: &[GridIndex<N>],
        frozen_distances: &[T],
    ) -> Result<Vec<T>> {
        (**self).unsigned_distance(grid_size, voxel_size, speed, frozen_indices, frozen_distances)
    }

    fn signed_distance<T: Float, const N: usize>(
        &self,
        grid_size: GridSize<N>,
        voxel_size: &[T; N],
        speed: T,
        frozen_indices: &[GridIndex<N>],
        frozen_distances: &[T],
        frozen_normals: &[[T; N]],
    ) -> Result<Vec<T>> {
        (**self).signed_distance(
            grid_size,
            voxel_size,
            speed,
            frozen_indices,
            frozen_distances,
            frozen_normals,
        )
    }
}

/// Exact straight-line propagation from every seed.
///
/// Each cell gets `min_k(|d_k| + ‖x − x_k‖ / speed)` over the seeds `k`, measured between
/// cell centers. Frozen cells keep their value verbatim. In the signed variant the sign is
/// taken from the half-space of the nearest seed's normal.
///
/// Runs in `O(cells × seeds)`; meant for small grids and tests, not production use.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceSolver;

impl BruteForceSolver {
    fn solve<T: Float, const N: usize>(
        grid_size: GridSize<N>,
        voxel_size: &[T; N],
        speed: T,
        frozen_indices: &[GridIndex<N>],
        frozen_distances: &[T],
        frozen_normals: Option<&[[T; N]]>,
    ) -> Result<Vec<T>> {
        if frozen_indices.len() != frozen_distances.len() {
            return Err(FmmCoreError::FrozenLengthMismatch {
                indices: frozen_indices.len(),
                distances: frozen_distances.len(),
            }
            .into());
        }
        if let Some(normals) = frozen_normals {
            if normals.len() != frozen_indices.len() {
                return Err(FmmCoreError::NormalLengthMismatch {
                    indices: frozen_indices.len(),
                    normals: normals.len(),
                }
                .into());
            }
        }
        if frozen_indices.is_empty() {
            return Err(ValidateError::solver("at least one frozen cell is required"));
        }
        if speed.is_nan() || speed <= T::zero() {
            return Err(ValidateError::solver("speed must be positive"));
        }

        let shape = GridShape::new(grid_size)?;
        if let Some(bad) = frozen_indices.iter().find(|i| !shape.contains(i)) {
            return Err(ValidateError::solver(format!(
                "frozen index {:?} outside grid {:?}",
                bad, grid_size
            )));
        }

        log::debug!(
            "brute-force solve: {} cells, {} seeds, signed={}",
            shape.len(),
            frozen_indices.len(),
            frozen_normals.is_some()
        );

        let seed_centers: Vec<[T; N]> = frozen_indices
            .iter()
            .map(|i| cell_center(i, voxel_size))
            .collect();

        let mut out = vec![T::zero(); shape.len()];
        for index in indices(grid_size) {
            let x = cell_center(&index, voxel_size);

            let mut arrival = T::max_value();
            let mut nearest = 0;
            let mut nearest_dist = T::max_value();
            for (k, (seed, &d)) in seed_centers.iter().zip(frozen_distances).enumerate() {
                let r = distance(&x, seed);
                let t = d.abs() + r / speed;
                if t < arrival {
                    arrival = t;
                }
                if r < nearest_dist {
                    nearest_dist = r;
                    nearest = k;
                }
            }

            let value = match frozen_normals {
                Some(normals) => {
                    let n = &normals[nearest];
                    let seed = &seed_centers[nearest];
                    let side = (0..N).fold(T::zero(), |acc, j| acc + (x[j] - seed[j]) * n[j]);
                    let negative = if side == T::zero() {
                        frozen_distances[nearest] < T::zero()
                    } else {
                        side < T::zero()
                    };
                    if negative {
                        -arrival
                    } else {
                        arrival
                    }
                }
                None => arrival,
            };
            out[shape.linear_index(&index)] = value;
        }

        for (index, &d) in frozen_indices.iter().zip(frozen_distances) {
            out[shape.linear_index(index)] = d;
        }
        Ok(out)
    }
}

impl DistanceSolver for BruteForceSolver {
    fn unsigned_distance<T: Float, const N: usize>(
        &self,
        grid_size: GridSize<N>,
        voxel_size: &[T; N],
        speed: T,
        frozen_indices: &[GridIndex<N>],
        frozen_distances: &[T],
    ) -> Result<Vec<T>> {
        Self::solve(
            grid_size,
            voxel_size,
            speed,
            frozen_indices,
            frozen_distances,
            None,
        )
    }

    fn signed_distance<T: Float, const N: usize>(
        &self,
        grid_size: GridSize<N>,
        voxel_size: &[T; N],
        speed: T,
        frozen_indices: &[GridIndex<N>],
        frozen_distances: &[T],
        frozen_normals: &[[T; N]],
    ) -> Result<Vec<T>> {
        Self::solve(
            grid_size,
            voxel_size,
            speed,
            frozen_indices,
            frozen_distances,
            Some(frozen_normals),
        )
    }
}
