//! Hypersphere test-case configuration.

use fmm_core::types::scalar_from_f64;
use fmm_core::{filled, GridShape, GridSize};
use num_traits::Float;

use crate::error::{Result, ValidateError};

/// Cells per axis of the default test grid.
pub const DEFAULT_CELLS_PER_AXIS: usize = 100;

/// Parameters of one hypersphere test case (immutable after construction).
///
/// The defaults describe a sphere of radius 0.25 centered in the unit box, sampled by
/// 100 cells per axis of size 0.01, with unit propagation speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HyperSphereConfig<T, const N: usize> {
    /// Sphere center in world units.
    pub center: [T; N],
    /// Sphere radius in world units.
    pub radius: T,
    /// Cells per axis.
    pub grid_size: GridSize<N>,
    /// Cell size per axis in world units.
    pub voxel_size: [T; N],
    /// Propagation speed passed to the solver.
    pub speed: T,
}

impl<T: Float, const N: usize> HyperSphereConfig<T, N> {
    /// Create a configuration.
    pub fn new(
        center: [T; N],
        radius: T,
        grid_size: GridSize<N>,
        voxel_size: [T; N],
        speed: T,
    ) -> Self {
        Self {
            center,
            radius,
            grid_size,
            voxel_size,
            speed,
        }
    }

    /// A unit-box configuration with `cells` cells per axis.
    ///
    /// Center, radius and speed keep their defaults; the voxel size becomes `1 / cells`.
    pub fn unit_box(cells: usize) -> Self {
        let voxel = T::one() / scalar_from_f64::<T>(cells as f64);
        Self {
            grid_size: [cells; N],
            voxel_size: filled(voxel),
            ..Self::default()
        }
    }

    /// Replace the sphere.
    pub fn with_sphere(mut self, center: [T; N], radius: T) -> Self {
        self.center = center;
        self.radius = radius;
        self
    }

    /// Replace the grid resolution.
    pub fn with_grid(mut self, grid_size: GridSize<N>, voxel_size: [T; N]) -> Self {
        self.grid_size = grid_size;
        self.voxel_size = voxel_size;
        self
    }

    /// Replace the propagation speed.
    pub fn with_speed(mut self, speed: T) -> Self {
        self.speed = speed;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        GridShape::new(self.grid_size)?;
        if self.radius.is_nan() || self.radius <= T::zero() {
            return Err(invalid("radius must be positive"));
        }
        if !self.voxel_size.iter().all(|&v| v > T::zero() && v.is_finite()) {
            return Err(invalid("voxel sizes must be positive and finite"));
        }
        if self.speed.is_nan() || self.speed <= T::zero() || !self.speed.is_finite() {
            return Err(invalid("speed must be positive and finite"));
        }
        if !self.center.iter().all(|c| c.is_finite()) {
            return Err(invalid("center must be finite"));
        }
        Ok(())
    }
}

impl<T: Float, const N: usize> Default for HyperSphereConfig<T, N> {
    fn default() -> Self {
        Self {
            center: filled(scalar_from_f64(0.5)),
            radius: scalar_from_f64(0.25),
            grid_size: [DEFAULT_CELLS_PER_AXIS; N],
            voxel_size: filled(scalar_from_f64(0.01)),
            speed: T::one(),
        }
    }
}

fn invalid(message: &str) -> ValidateError {
    ValidateError::InvalidConfig {
        message: message.to_string(),
    }
}
