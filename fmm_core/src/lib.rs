//! # fmm_core
//!
//! Pure N-dimensional grid math for validating fast-marching distance solvers.
//!
//! This crate builds synthetic test cases for Eikonal-style solvers and measures how well
//! a solver's output matches them. It never calls a solver itself; see `fmm_validate` for
//! the end-to-end harness.
//!
//! ## Features
//!
//! - **no_std compatible**: only needs `alloc`
//! - **Generic dimension**: every algorithm is written once for `const N: usize`
//! - **Generic precision**: any `num_traits::Float` scalar, typically `f32` or `f64`
//! - **Borrowed grid views**: strided addressing over caller-owned buffers, no copies
//!
//! ## Feature Flags
//!
//! - `std` (default): `std::error::Error` for [`FmmCoreError`] and std float math;
//!   without it, float math goes through `libm`
//!
//! ## Modules
//!
//! - [`types`]: Index/size aliases and small vector helpers
//! - [`grid`]: [`GridShape`], [`GridView`], [`GridViewMut`]
//! - [`iter`]: Row-major [`IndexIterator`] over every cell
//! - [`neighborhood`]: The 2N face-neighbor offsets
//! - [`gradient`]: One-sided upwind gradients
//! - [`hypersphere`]: Frozen seeds, normals and ground truth for a sphere
//! - [`buffers`]: Seed input buffers and error buffers
//! - [`stats`]: Min/max/mean/std-dev summaries
//! - [`error`]: Error types
//!
//! ## Usage
//!
//! ```
//! use fmm_core::prelude::*;
//!
//! let generator = HyperSphereGenerator::new(
//!     HyperSphere::new([0.5f64, 0.5], 0.25),
//!     [20, 20],
//!     [0.05, 0.05],
//!     UnsignedDistance,
//! )
//! .unwrap();
//! let frozen = generator.generate(GeneratorOutputs::SEEDS_ONLY.with_ground_truth());
//! assert!(!frozen.is_empty());
//!
//! let truth = frozen.ground_truth.unwrap();
//! let summary = stats(&truth);
//! assert!(summary.min >= 0.0);
//! ```

#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod buffers;
pub mod error;
pub mod gradient;
pub mod grid;
pub mod hypersphere;
pub mod iter;
pub mod neighborhood;
pub mod stats;
pub mod types;

/// Prelude module for convenient imports.
///
/// Provides the most commonly used types and functions.
pub mod prelude {
    pub use crate::buffers::{error_buffer, input_buffer};
    pub use crate::error::FmmCoreError;
    pub use crate::gradient::{distance_gradients, gradient};
    pub use crate::grid::{GridShape, GridView, GridViewMut};
    pub use crate::hypersphere::{
        cell_center, cell_corners, DistanceOp, FrozenCells, GeneratorOutputs, HyperSphere,
        HyperSphereGenerator, SignedDistance, UnsignedDistance,
    };
    pub use crate::iter::{indices, IndexIterator};
    pub use crate::neighborhood::NeighborhoodOffsets;
    pub use crate::stats::{stats, Stats};
    pub use crate::types::{GridIndex, GridSize};
}

// Re-export everything at crate root for convenience
pub use buffers::{error_buffer, input_buffer};
pub use error::{FmmCoreError, Result};
pub use gradient::{distance_gradients, gradient};
pub use grid::{GridShape, GridView, GridViewMut};
pub use hypersphere::{
    cell_center, cell_corner, cell_corners, corner_count, CornerClassification, DistanceOp,
    FrozenCells, GeneratorOutputs, HyperSphere, HyperSphereGenerator, SignedDistance,
    UnsignedDistance,
};
pub use iter::{indices, IndexIterator, Indices};
pub use neighborhood::NeighborhoodOffsets;
pub use stats::{stats, Stats};
pub use types::{
    distance, filled, linear_size, magnitude, normalized, sub, GridIndex, GridSize,
};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use alloc::vec::Vec;

    /// Exact unsigned distance to a circle, sampled at cell centers.
    fn analytic_field(size: GridSize<2>, voxel: [f64; 2], sphere: HyperSphere<f64, 2>) -> Vec<f64> {
        let generator = HyperSphereGenerator::new(sphere, size, voxel, UnsignedDistance).unwrap();
        generator
            .generate(GeneratorOutputs::SEEDS_ONLY.with_ground_truth())
            .ground_truth
            .unwrap()
    }

    #[test]
    fn test_analytic_field_has_unit_gradient_away_from_surface() {
        let size = [40, 40];
        let voxel = [0.025, 0.025];
        let sphere = HyperSphere::new([0.5, 0.5], 0.25);
        let field = analytic_field(size, voxel, sphere);

        let grads = distance_gradients(&field, size, &voxel).unwrap();
        let shape = GridShape::new(size).unwrap();

        // Far outside the circle along a diagonal the upwind gradient magnitude is ~1.
        let g = grads[shape.linear_index(&[36, 36])];
        let mag = magnitude(&g);
        assert!((mag - 1.0).abs() < 0.1, "gradient magnitude {}", mag);
    }

    #[test]
    fn test_unsigned_is_abs_of_signed() {
        let sphere = HyperSphere::new([0.5f64, 0.5, 0.5], 0.25);
        let size = [12, 12, 12];
        let voxel = [1.0 / 12.0; 3];
        let outputs = GeneratorOutputs::SEEDS_ONLY.with_ground_truth();

        let signed = HyperSphereGenerator::new(sphere, size, voxel, SignedDistance)
            .unwrap()
            .generate(outputs);
        let unsigned = HyperSphereGenerator::new(sphere, size, voxel, UnsignedDistance)
            .unwrap()
            .generate(outputs);

        assert_eq!(signed.indices, unsigned.indices);
        let s = signed.ground_truth.unwrap();
        let u = unsigned.ground_truth.unwrap();
        for (s, u) in s.iter().zip(u.iter()) {
            assert_eq!(s.abs(), *u);
        }
    }

    #[test]
    fn test_input_buffer_roundtrips_frozen_values() {
        let sphere = HyperSphere::new([0.5f32, 0.5], 0.3);
        let size = [16, 16];
        let voxel = [1.0 / 16.0; 2];
        let frozen = HyperSphereGenerator::new(sphere, size, voxel, SignedDistance)
            .unwrap()
            .generate(GeneratorOutputs::SEEDS_ONLY);

        let input = input_buffer(size, &frozen.indices, &frozen.distances).unwrap();
        let view = GridView::new(size, &input).unwrap();
        for (index, &d) in frozen.indices.iter().zip(frozen.distances.iter()) {
            assert_eq!(*view.cell(index), d);
        }
        let marked = input.iter().filter(|v| !v.is_nan()).count();
        assert_eq!(marked, frozen.len());
    }
}
