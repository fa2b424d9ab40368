//! End-to-end assembly of solver accuracy statistics for one hypersphere test case.
//!
//! Each entry point runs the same pipeline:
//!
//! ```text
//! HyperSphereGenerator ──► input buffer
//!        │
//!        ▼
//!  DistanceSolver ──► distance buffer ──► gradients ──► |∇u| ──► stats
//!                                    └──► error vs ground truth ──► stats
//! ```

use fmm_core::{
    distance_gradients, error_buffer, input_buffer, linear_size, magnitude, stats, DistanceOp,
    FrozenCells, GeneratorOutputs, HyperSphere, HyperSphereGenerator, SignedDistance,
    UnsignedDistance,
};
use num_traits::Float;

use crate::config::HyperSphereConfig;
use crate::error::{Result, ValidateError};
use crate::results::{DistanceValueStats, GradientMagnitudeStats};
use crate::solver::DistanceSolver;

/// Runs hypersphere test cases through a solver and summarizes the output.
///
/// The assembler owns an immutable configuration; every call builds fresh buffers and
/// returns a new aggregate, so repeated calls give identical results for a deterministic
/// solver.
///
/// # Example
/// ```
/// use fmm_validate::{BruteForceSolver, HyperSphereConfig, StatsAssembler};
///
/// let config = HyperSphereConfig::<f64, 2>::unit_box(16);
/// let assembler = StatsAssembler::with_config(config, BruteForceSolver).unwrap();
/// let result = assembler.unsigned_distance_value_stats().unwrap();
/// assert_eq!(result.grid_size(), [16, 16]);
/// assert!(result.max_error() >= result.min_error());
/// ```
#[derive(Debug, Clone)]
pub struct StatsAssembler<T, const N: usize, S> {
    config: HyperSphereConfig<T, N>,
    solver: S,
}

impl<T: Float, const N: usize, S: DistanceSolver> StatsAssembler<T, N, S> {
    /// Create an assembler with the default configuration.
    pub fn new(solver: S) -> Self {
        Self {
            config: HyperSphereConfig::default(),
            solver,
        }
    }

    /// Create an assembler with a custom configuration.
    ///
    /// # Errors
    /// `InvalidConfig` or a core shape error if the configuration is rejected.
    pub fn with_config(config: HyperSphereConfig<T, N>, solver: S) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, solver })
    }

    /// The test-case configuration.
    pub fn config(&self) -> &HyperSphereConfig<T, N> {
        &self.config
    }

    /// The solver under test.
    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// Gradient magnitude statistics of the unsigned solver output.
    pub fn unsigned_gradient_magnitude_stats(&self) -> Result<GradientMagnitudeStats<T, N>> {
        self.gradient_magnitude_stats(UnsignedDistance, GeneratorOutputs::SEEDS_ONLY)
    }

    /// Gradient magnitude statistics of the signed solver output.
    pub fn signed_gradient_magnitude_stats(&self) -> Result<GradientMagnitudeStats<T, N>> {
        self.gradient_magnitude_stats(SignedDistance, GeneratorOutputs::SEEDS_ONLY.with_normals())
    }

    /// Error statistics of the unsigned solver output against the analytic distance.
    pub fn unsigned_distance_value_stats(&self) -> Result<DistanceValueStats<T, N>> {
        self.distance_value_stats(
            UnsignedDistance,
            GeneratorOutputs::SEEDS_ONLY.with_ground_truth(),
        )
    }

    /// Error statistics of the signed solver output against the analytic signed distance.
    pub fn signed_distance_value_stats(&self) -> Result<DistanceValueStats<T, N>> {
        self.distance_value_stats(
            SignedDistance,
            GeneratorOutputs::SEEDS_ONLY.with_normals().with_ground_truth(),
        )
    }

    fn gradient_magnitude_stats<D: DistanceOp<T, N>>(
        &self,
        distance_op: D,
        outputs: GeneratorOutputs,
    ) -> Result<GradientMagnitudeStats<T, N>> {
        let grid_size = self.config.grid_size;
        let frozen = self.generate(distance_op, outputs)?;
        let input = input_buffer(grid_size, &frozen.indices, &frozen.distances)?;
        let distances = self.solve(&frozen)?;

        let gradients = distance_gradients(&distances, grid_size, &self.config.voxel_size)?;
        let magnitudes: Vec<T> = gradients.iter().map(magnitude).collect();
        let summary = stats(&magnitudes);

        log::info!(
            "gradient magnitude stats {:?}: min = {:.6}, max = {:.6}, avg = {:.6}, std_dev = {:.6}",
            grid_size,
            summary.min,
            summary.max,
            summary.avg,
            summary.std_dev
        );
        Ok(GradientMagnitudeStats::new(
            summary, grid_size, input, distances, gradients,
        ))
    }

    fn distance_value_stats<D: DistanceOp<T, N>>(
        &self,
        distance_op: D,
        outputs: GeneratorOutputs,
    ) -> Result<DistanceValueStats<T, N>> {
        let grid_size = self.config.grid_size;
        let frozen = self.generate(distance_op, outputs)?;
        let input = input_buffer(grid_size, &frozen.indices, &frozen.distances)?;
        let distances = self.solve(&frozen)?;

        let ground_truth = frozen.ground_truth.unwrap_or_default();
        let errors = error_buffer(grid_size, &distances, &ground_truth)?;
        let summary = stats(&errors);

        log::info!(
            "distance value stats {:?}: min error = {:.6}, max error = {:.6}, avg error = {:.6}, std_dev error = {:.6}",
            grid_size,
            summary.min,
            summary.max,
            summary.avg,
            summary.std_dev
        );
        Ok(DistanceValueStats::new(
            summary,
            grid_size,
            input,
            distances,
            ground_truth,
            errors,
        ))
    }

    fn generate<D: DistanceOp<T, N>>(
        &self,
        distance_op: D,
        outputs: GeneratorOutputs,
    ) -> Result<FrozenCells<T, N>> {
        let config = &self.config;
        let generator = HyperSphereGenerator::new(
            HyperSphere::new(config.center, config.radius),
            config.grid_size,
            config.voxel_size,
            distance_op,
        )?;
        let frozen = generator.generate(outputs);

        if frozen.is_empty() {
            log::warn!(
                "hypersphere does not cross any cell of grid {:?}",
                config.grid_size
            );
        } else {
            log::debug!(
                "generated {} frozen cells on grid {:?}",
                frozen.len(),
                config.grid_size
            );
        }
        Ok(frozen)
    }

    fn solve(&self, frozen: &FrozenCells<T, N>) -> Result<Vec<T>> {
        let config = &self.config;
        let distances = match &frozen.normals {
            Some(normals) => self.solver.signed_distance(
                config.grid_size,
                &config.voxel_size,
                config.speed,
                &frozen.indices,
                &frozen.distances,
                normals,
            )?,
            None => self.solver.unsigned_distance(
                config.grid_size,
                &config.voxel_size,
                config.speed,
                &frozen.indices,
                &frozen.distances,
            )?,
        };

        let expected = linear_size(&config.grid_size);
        if distances.len() != expected {
            return Err(ValidateError::SolverOutputMismatch {
                expected,
                got: distances.len(),
            });
        }
        Ok(distances)
    }
}

/// Gradient magnitude statistics of the unsigned solver output, default configuration.
pub fn unsigned_gradient_magnitude_stats<T: Float, const N: usize, S: DistanceSolver>(
    solver: &S,
) -> Result<GradientMagnitudeStats<T, N>> {
    StatsAssembler::new(solver).unsigned_gradient_magnitude_stats()
}

/// Gradient magnitude statistics of the signed solver output, default configuration.
pub fn signed_gradient_magnitude_stats<T: Float, const N: usize, S: DistanceSolver>(
    solver: &S,
) -> Result<GradientMagnitudeStats<T, N>> {
    StatsAssembler::new(solver).signed_gradient_magnitude_stats()
}

/// Unsigned distance error statistics, default configuration.
pub fn unsigned_distance_value_stats<T: Float, const N: usize, S: DistanceSolver>(
    solver: &S,
) -> Result<DistanceValueStats<T, N>> {
    StatsAssembler::new(solver).unsigned_distance_value_stats()
}

/// Signed distance error statistics, default configuration.
pub fn signed_distance_value_stats<T: Float, const N: usize, S: DistanceSolver>(
    solver: &S,
) -> Result<DistanceValueStats<T, N>> {
    StatsAssembler::new(solver).signed_distance_value_stats()
}
