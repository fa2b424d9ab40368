//! # fmm_validate
//!
//! Accuracy statistics for fast-marching distance solvers on hypersphere test cases.
//!
//! This crate drives a [`DistanceSolver`] with frozen seeds produced by
//! [`fmm_core::HyperSphereGenerator`] and summarizes how well its output behaves:
//!
//! - **Gradient magnitude stats**: an Eikonal solution with unit speed has `|∇u| ≈ 1`
//! - **Distance value stats**: signed error of the output against the analytic distance
//!
//! ## Quick Start
//!
//! ```
//! use fmm_validate::{BruteForceSolver, HyperSphereConfig, StatsAssembler};
//!
//! let config = HyperSphereConfig::<f32, 2>::unit_box(20);
//! let assembler = StatsAssembler::with_config(config, BruteForceSolver).unwrap();
//!
//! let gradients = assembler.signed_gradient_magnitude_stats().unwrap();
//! println!("{}", gradients);
//! assert!(gradients.avg() > 0.5 && gradients.avg() < 1.5);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! fmm_core (pure math, no_std)
//!     │
//!     ▼
//! fmm_validate ──► DistanceSolver (external)
//!     │
//!     ▼
//! GradientMagnitudeStats / DistanceValueStats
//! ```
//!
//! Solvers are plugged in through the [`DistanceSolver`] trait; [`BruteForceSolver`] is an
//! exact but slow reference implementation.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assembler;
pub mod config;
pub mod error;
pub mod report;
pub mod results;
pub mod solver;

pub use assembler::{
    signed_distance_value_stats, signed_gradient_magnitude_stats, unsigned_distance_value_stats,
    unsigned_gradient_magnitude_stats, StatsAssembler,
};
pub use config::{HyperSphereConfig, DEFAULT_CELLS_PER_AXIS};
pub use error::{Result, ValidateError};
pub use results::{DistanceValueStats, GradientMagnitudeStats};
pub use solver::{BruteForceSolver, DistanceSolver};
