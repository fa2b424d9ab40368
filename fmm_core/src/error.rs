//! Error types for fmm_core operations.
//!
//! Every variant is a contract violation detected at the point of use. Nothing here is
//! recoverable inside the crate; callers decide how to report it.

use core::fmt;

/// Error types that can occur during fmm_core operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FmmCoreError {
    /// A grid axis was declared with zero cells.
    ZeroAxisSize {
        /// The offending axis.
        axis: usize,
    },
    /// A scalar or vector field does not hold one element per grid cell.
    GridBufferMismatch {
        /// Number of cells implied by the grid size.
        expected: usize,
        /// Length of the supplied buffer.
        got: usize,
    },
    /// Frozen indices and frozen distances have different lengths.
    FrozenLengthMismatch {
        /// Number of frozen indices.
        indices: usize,
        /// Number of frozen distances.
        distances: usize,
    },
    /// Frozen normals do not pair up with frozen indices.
    NormalLengthMismatch {
        /// Number of frozen indices.
        indices: usize,
        /// Number of frozen normals.
        normals: usize,
    },
    /// Computed and ground-truth distance buffers have different lengths.
    DistanceBufferMismatch {
        /// Length of the computed buffer.
        computed: usize,
        /// Length of the ground-truth buffer.
        ground_truth: usize,
    },
    /// The product of the axis sizes does not fit in `usize`.
    GridTooLarge,
}

impl fmt::Display for FmmCoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FmmCoreError::ZeroAxisSize { axis } => {
                write!(f, "grid axis {} has zero cells", axis)
            }
            FmmCoreError::GridBufferMismatch { expected, got } => {
                write!(
                    f,
                    "grid/buffer size mismatch: expected {} cells, got {}",
                    expected, got
                )
            }
            FmmCoreError::FrozenLengthMismatch { indices, distances } => {
                write!(
                    f,
                    "indices/distances size mismatch: {} indices, {} distances",
                    indices, distances
                )
            }
            FmmCoreError::NormalLengthMismatch { indices, normals } => {
                write!(
                    f,
                    "indices/normals size mismatch: {} indices, {} normals",
                    indices, normals
                )
            }
            FmmCoreError::DistanceBufferMismatch {
                computed,
                ground_truth,
            } => {
                write!(
                    f,
                    "distance buffers size mismatch: computed {}, ground truth {}",
                    computed, ground_truth
                )
            }
            FmmCoreError::GridTooLarge => write!(f, "grid cell count overflows usize"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FmmCoreError {}

/// Result type alias for fmm_core operations.
pub type Result<T> = core::result::Result<T, FmmCoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "std")]
    #[test]
    fn test_error_display() {
        use std::format;

        let err = FmmCoreError::ZeroAxisSize { axis: 2 };
        assert_eq!(format!("{}", err), "grid axis 2 has zero cells");

        let err = FmmCoreError::GridBufferMismatch {
            expected: 16,
            got: 15,
        };
        assert_eq!(
            format!("{}", err),
            "grid/buffer size mismatch: expected 16 cells, got 15"
        );

        let err = FmmCoreError::FrozenLengthMismatch {
            indices: 3,
            distances: 2,
        };
        assert_eq!(
            format!("{}", err),
            "indices/distances size mismatch: 3 indices, 2 distances"
        );

        let err = FmmCoreError::DistanceBufferMismatch {
            computed: 4,
            ground_truth: 5,
        };
        assert!(format!("{}", err).starts_with("distance buffers size mismatch"));
    }

    #[test]
    fn test_error_equality() {
        let err1 = FmmCoreError::ZeroAxisSize { axis: 0 };
        let err2 = FmmCoreError::ZeroAxisSize { axis: 0 };
        let err3 = FmmCoreError::ZeroAxisSize { axis: 1 };

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
        assert_ne!(err1, FmmCoreError::GridTooLarge);
    }
}
