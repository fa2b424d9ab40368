//! Analytic hypersphere test cases: frozen seed cells, seed normals and ground truth.
//!
//! A cell is frozen when the sphere boundary passes through it, which is detected by
//! classifying its `2^N` corners as inside or outside the sphere. The value attached to a
//! cell is always evaluated at the cell center through a [`DistanceOp`] strategy, so the
//! signed and unsigned test cases share one generator.

use alloc::vec::Vec;

use num_traits::Float;

use crate::error::{FmmCoreError, Result};
use crate::grid::GridShape;
use crate::iter::IndexIterator;
use crate::types::{
    distance, normalized, scalar_from_f64, scalar_from_i32, sub, GridIndex, GridSize,
};

/// Strategy computing the reference value of a point relative to a sphere.
pub trait DistanceOp<T, const N: usize> {
    /// Value of `point` with respect to the sphere `(center, radius)`.
    fn evaluate(&self, center: &[T; N], radius: T, point: &[T; N]) -> T;
}

/// `|‖point − center‖ − radius|`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnsignedDistance;

/// `‖point − center‖ − radius`, negative inside the sphere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignedDistance;

impl<T: Float, const N: usize> DistanceOp<T, N> for UnsignedDistance {
    #[inline]
    fn evaluate(&self, center: &[T; N], radius: T, point: &[T; N]) -> T {
        (distance(center, point) - radius).abs()
    }
}

impl<T: Float, const N: usize> DistanceOp<T, N> for SignedDistance {
    #[inline]
    fn evaluate(&self, center: &[T; N], radius: T, point: &[T; N]) -> T {
        distance(center, point) - radius
    }
}

impl<T, const N: usize, F> DistanceOp<T, N> for F
where
    F: Fn(&[T; N], T, &[T; N]) -> T,
{
    #[inline]
    fn evaluate(&self, center: &[T; N], radius: T, point: &[T; N]) -> T {
        self(center, radius, point)
    }
}

/// Number of corners of an N-dimensional cell.
#[inline]
pub const fn corner_count<const N: usize>() -> usize {
    1 << N
}

/// World position of corner `k` of the cell at `index`.
///
/// Bit `j` of `k` selects the low (0) or high (1) face along axis `j`.
#[inline]
pub fn cell_corner<T: Float, const N: usize>(
    index: &GridIndex<N>,
    voxel_size: &[T; N],
    k: usize,
) -> [T; N] {
    let mut corner = [T::zero(); N];
    for (j, c) in corner.iter_mut().enumerate() {
        let bit = ((k >> j) & 1) as i32;
        *c = scalar_from_i32::<T>(index[j] + bit) * voxel_size[j];
    }
    corner
}

/// All `2^N` corners of the cell at `index`, ordered by corner number.
pub fn cell_corners<T: Float, const N: usize>(
    index: &GridIndex<N>,
    voxel_size: &[T; N],
) -> impl Iterator<Item = [T; N]> {
    let index = *index;
    let voxel_size = *voxel_size;
    (0..corner_count::<N>()).map(move |k| cell_corner(&index, &voxel_size, k))
}

/// World position of the center of the cell at `index`.
#[inline]
pub fn cell_center<T: Float, const N: usize>(index: &GridIndex<N>, voxel_size: &[T; N]) -> [T; N] {
    let half = scalar_from_f64::<T>(0.5);
    let mut center = [T::zero(); N];
    for (j, c) in center.iter_mut().enumerate() {
        *c = (scalar_from_i32::<T>(index[j]) + half) * voxel_size[j];
    }
    center
}

/// An analytic N-dimensional sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HyperSphere<T, const N: usize> {
    /// Center point in world units.
    pub center: [T; N],
    /// Radius in world units.
    pub radius: T,
}

impl<T: Float, const N: usize> HyperSphere<T, N> {
    /// Create a new sphere.
    #[inline]
    pub const fn new(center: [T; N], radius: T) -> Self {
        Self { center, radius }
    }

    /// Whether `point` lies strictly inside the sphere.
    #[inline]
    pub fn contains(&self, point: &[T; N]) -> bool {
        distance(&self.center, point) < self.radius
    }
}

/// Inside/outside tally of a cell's corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerClassification {
    /// Corners strictly inside the sphere.
    pub inside: usize,
    /// Corners on or outside the sphere.
    pub outside: usize,
}

impl CornerClassification {
    /// Whether the sphere boundary passes through the cell.
    #[inline]
    pub fn straddles(&self) -> bool {
        self.inside > 0 && self.outside > 0
    }
}

/// Which optional outputs a generator run should produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorOutputs {
    /// Produce one unit normal per frozen cell.
    pub normals: bool,
    /// Produce the analytic value of every grid cell.
    pub ground_truth: bool,
}

impl GeneratorOutputs {
    /// Frozen indices and distances only.
    pub const SEEDS_ONLY: Self = Self {
        normals: false,
        ground_truth: false,
    };

    /// Also request seed normals.
    #[inline]
    pub const fn with_normals(mut self) -> Self {
        self.normals = true;
        self
    }

    /// Also request the full ground-truth buffer.
    #[inline]
    pub const fn with_ground_truth(mut self) -> Self {
        self.ground_truth = true;
        self
    }
}

/// Output of the hypersphere generator.
///
/// `indices`, `distances` and (when present) `normals` are parallel lists.
#[derive(Debug, Clone, PartialEq)]
pub struct FrozenCells<T, const N: usize> {
    /// Frozen cell indices, in grid enumeration order.
    pub indices: Vec<GridIndex<N>>,
    /// Value of each frozen cell.
    pub distances: Vec<T>,
    /// Unit vector from the sphere center towards each frozen cell center.
    pub normals: Option<Vec<[T; N]>>,
    /// Analytic value of every grid cell, in grid buffer layout.
    pub ground_truth: Option<Vec<T>>,
}

impl<T, const N: usize> FrozenCells<T, N> {
    /// Empty sinks for the requested outputs.
    pub fn for_outputs(outputs: GeneratorOutputs) -> Self {
        Self {
            indices: Vec::new(),
            distances: Vec::new(),
            normals: outputs.normals.then(Vec::new),
            ground_truth: outputs.ground_truth.then(Vec::new),
        }
    }

    /// Number of frozen cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether no cell was frozen.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Check that the parallel lists agree in length.
    ///
    /// # Errors
    /// * `FrozenLengthMismatch` if indices and distances differ
    /// * `NormalLengthMismatch` if normals are present and differ from indices
    pub fn validate(&self) -> Result<()> {
        if self.indices.len() != self.distances.len() {
            return Err(FmmCoreError::FrozenLengthMismatch {
                indices: self.indices.len(),
                distances: self.distances.len(),
            });
        }
        if let Some(normals) = &self.normals {
            if normals.len() != self.indices.len() {
                return Err(FmmCoreError::NormalLengthMismatch {
                    indices: self.indices.len(),
                    normals: normals.len(),
                });
            }
        }
        Ok(())
    }
}

/// Generates frozen seed cells and ground truth for a sphere on a regular grid.
///
/// # Example
/// ```
/// use fmm_core::hypersphere::{GeneratorOutputs, HyperSphere, HyperSphereGenerator, SignedDistance};
///
/// let generator = HyperSphereGenerator::new(
///     HyperSphere::new([2.0f64, 2.0], 1.5),
///     [4, 4],
///     [1.0, 1.0],
///     SignedDistance,
/// )
/// .unwrap();
/// let frozen = generator.generate(GeneratorOutputs::SEEDS_ONLY.with_normals());
/// assert_eq!(frozen.len(), 12);
/// assert_eq!(frozen.normals.map(|n| n.len()), Some(12));
/// ```
#[derive(Debug, Clone)]
pub struct HyperSphereGenerator<T, const N: usize, D> {
    sphere: HyperSphere<T, N>,
    shape: GridShape<N>,
    voxel_size: [T; N],
    distance_op: D,
}

impl<T: Float, const N: usize, D: DistanceOp<T, N>> HyperSphereGenerator<T, N, D> {
    /// Create a generator.
    ///
    /// # Errors
    /// A shape error if `grid_size` has a zero axis or is too large to address.
    pub fn new(
        sphere: HyperSphere<T, N>,
        grid_size: GridSize<N>,
        voxel_size: [T; N],
        distance_op: D,
    ) -> Result<Self> {
        debug_assert!(N < usize::BITS as usize, "too many dimensions for corner masks");
        Ok(Self {
            sphere,
            shape: GridShape::new(grid_size)?,
            voxel_size,
            distance_op,
        })
    }

    /// The sphere being sampled.
    #[inline]
    pub fn sphere(&self) -> &HyperSphere<T, N> {
        &self.sphere
    }

    /// The grid shape.
    #[inline]
    pub fn shape(&self) -> &GridShape<N> {
        &self.shape
    }

    /// Count the corners of the cell at `index` inside and outside the sphere.
    pub fn classify(&self, index: &GridIndex<N>) -> CornerClassification {
        let inside = cell_corners(index, &self.voxel_size)
            .filter(|corner| self.sphere.contains(corner))
            .count();
        CornerClassification {
            inside,
            outside: corner_count::<N>() - inside,
        }
    }

    /// Reference value at the center of the cell at `index`.
    #[inline]
    pub fn value_at(&self, index: &GridIndex<N>) -> T {
        let center = cell_center(index, &self.voxel_size);
        self.distance_op
            .evaluate(&self.sphere.center, self.sphere.radius, &center)
    }

    /// Run the generator into fresh sinks.
    pub fn generate(&self, outputs: GeneratorOutputs) -> FrozenCells<T, N> {
        let mut frozen = FrozenCells::for_outputs(outputs);
        self.fill(&mut frozen);
        frozen
    }

    /// Append frozen cells to caller-supplied sinks.
    ///
    /// Existing entries are kept. A present ground-truth buffer is resized to the grid cell
    /// count and every cell is overwritten.
    ///
    /// # Errors
    /// A length-mismatch error if the sinks are not parallel before the run.
    pub fn generate_into(&self, frozen: &mut FrozenCells<T, N>) -> Result<()> {
        frozen.validate()?;
        self.fill(frozen);
        Ok(())
    }

    fn fill(&self, frozen: &mut FrozenCells<T, N>) {
        let mut ground_truth = frozen.ground_truth.as_mut().map(|buffer| {
            buffer.resize(self.shape.len(), T::zero());
            buffer
        });

        let mut iter = IndexIterator::new(self.shape.size());
        loop {
            let index = iter.index();
            let center = cell_center(&index, &self.voxel_size);
            let value = self
                .distance_op
                .evaluate(&self.sphere.center, self.sphere.radius, &center);

            if self.classify(&index).straddles() {
                frozen.indices.push(index);
                frozen.distances.push(value);
                if let Some(normals) = frozen.normals.as_mut() {
                    normals.push(normalized(&sub(&center, &self.sphere.center)));
                }
            }

            if let Some(buffer) = ground_truth.as_mut() {
                let i = self.shape.linear_index(&index);
                buffer[i] = value;
            }

            if !iter.advance() {
                break;
            }
        }
    }
}
