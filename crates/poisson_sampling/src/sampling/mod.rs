//! Strategy seam for plugging the sampler into generic placement code.
//!
//! A [`PositionSampling`] strategy proposes positions inside a domain of the given
//! extent centered on the origin.
use mint::Vector2;
use rand::RngCore;

pub mod poisson_disk;

pub use poisson_disk::PoissonDiskSampling;

/// Trait for position sampling.
pub trait PositionSampling: Send + Sync {
    fn generate(&self, domain_extent: Vector2<f32>, rng: &mut dyn RngCore) -> Vec<Vector2<f32>>;
}
