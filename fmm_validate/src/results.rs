//! Immutable result aggregates produced by the stats assembler.

use fmm_core::{GridSize, Stats};

/// Gradient magnitude statistics of one solved test case.
///
/// A well-behaved Eikonal solution has unit gradient magnitude (times the inverse speed)
/// almost everywhere, so `min`/`max`/`avg` close to one and a small `std_dev`.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientMagnitudeStats<T, const N: usize> {
    stats: Stats,
    grid_size: GridSize<N>,
    input_buffer: Vec<T>,
    distance_buffer: Vec<T>,
    gradient_buffer: Vec<[T; N]>,
}

impl<T, const N: usize> GradientMagnitudeStats<T, N> {
    pub(crate) fn new(
        stats: Stats,
        grid_size: GridSize<N>,
        input_buffer: Vec<T>,
        distance_buffer: Vec<T>,
        gradient_buffer: Vec<[T; N]>,
    ) -> Self {
        Self {
            stats,
            grid_size,
            input_buffer,
            distance_buffer,
            gradient_buffer,
        }
    }

    /// Smallest gradient magnitude.
    pub fn min(&self) -> f64 {
        self.stats.min
    }

    /// Largest gradient magnitude.
    pub fn max(&self) -> f64 {
        self.stats.max
    }

    /// Mean gradient magnitude.
    pub fn avg(&self) -> f64 {
        self.stats.avg
    }

    /// Population standard deviation of the gradient magnitudes.
    pub fn std_dev(&self) -> f64 {
        self.stats.std_dev
    }

    /// All summary statistics.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Cells per axis.
    pub fn grid_size(&self) -> GridSize<N> {
        self.grid_size
    }

    /// Seed buffer handed to the solver; NaN outside frozen cells.
    pub fn input_buffer(&self) -> &[T] {
        &self.input_buffer
    }

    /// Solver output.
    pub fn distance_buffer(&self) -> &[T] {
        &self.distance_buffer
    }

    /// Per-cell gradient of the solver output.
    pub fn gradient_buffer(&self) -> &[[T; N]] {
        &self.gradient_buffer
    }
}

/// Error statistics of a solved test case against the analytic ground truth.
///
/// Errors are `computed − ground_truth` per cell.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceValueStats<T, const N: usize> {
    stats: Stats,
    grid_size: GridSize<N>,
    input_buffer: Vec<T>,
    distance_buffer: Vec<T>,
    ground_truth_buffer: Vec<T>,
    error_buffer: Vec<T>,
}

impl<T, const N: usize> DistanceValueStats<T, N> {
    pub(crate) fn new(
        stats: Stats,
        grid_size: GridSize<N>,
        input_buffer: Vec<T>,
        distance_buffer: Vec<T>,
        ground_truth_buffer: Vec<T>,
        error_buffer: Vec<T>,
    ) -> Self {
        Self {
            stats,
            grid_size,
            input_buffer,
            distance_buffer,
            ground_truth_buffer,
            error_buffer,
        }
    }

    /// Smallest signed error.
    pub fn min_error(&self) -> f64 {
        self.stats.min
    }

    /// Largest signed error.
    pub fn max_error(&self) -> f64 {
        self.stats.max
    }

    /// Mean error.
    pub fn avg_error(&self) -> f64 {
        self.stats.avg
    }

    /// Population standard deviation of the errors.
    pub fn std_dev_error(&self) -> f64 {
        self.stats.std_dev
    }

    /// All summary statistics of the error buffer.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Cells per axis.
    pub fn grid_size(&self) -> GridSize<N> {
        self.grid_size
    }

    /// Seed buffer handed to the solver; NaN outside frozen cells.
    pub fn input_buffer(&self) -> &[T] {
        &self.input_buffer
    }

    /// Solver output.
    pub fn distance_buffer(&self) -> &[T] {
        &self.distance_buffer
    }

    /// Analytic distance at every cell center.
    pub fn ground_truth_buffer(&self) -> &[T] {
        &self.ground_truth_buffer
    }

    /// `computed − ground_truth` per cell.
    pub fn error_buffer(&self) -> &[T] {
        &self.error_buffer
    }
}
