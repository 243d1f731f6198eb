#![forbid(unsafe_code)]
//! poisson_sampling: Poisson-disk (blue-noise) point sampling over 2D rectangles.
//!
//! Modules:
//! - geometry: the [`Rect`](geometry::Rect) region type
//! - sampler: configuration, the sampling loop and run statistics
//! - radius: closed-form radius estimate for a target point count
//! - sampling: the [`PositionSampling`](sampling::PositionSampling) strategy seam
//! - random: uniform draws derived from any `RngCore`
//!
//! The spatial grid and active frontier are internal to a sampling run.
pub mod error;
mod frontier;
pub mod geometry;
mod grid;
pub mod radius;
pub mod random;
pub mod sampler;
pub mod sampling;

/// Convenient re-exports for common types. Import with `use poisson_sampling::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geometry::Rect;
    pub use crate::radius::approximate_radius;
    pub use crate::sampler::{
        sample, sample_with_threshold, PoissonDiskSampler, SampleRun, SampleStats, SamplerConfig,
        DEFAULT_REJECTION_THRESHOLD,
    };
    pub use crate::sampling::{PoissonDiskSampling, PositionSampling};
}
