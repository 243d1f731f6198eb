//! Poisson disk position sampling strategy.
use glam::Vec2;
use mint::Vector2;
use rand::RngCore;
use tracing::warn;

use crate::geometry::Rect;
use crate::sampler::{PoissonDiskSampler, SamplerConfig, DEFAULT_REJECTION_THRESHOLD};
use crate::sampling::PositionSampling;

/// Poisson disk sampling strategy over a centered domain.
#[derive(Debug, Clone)]
pub struct PoissonDiskSampling {
    /// Minimum distance between samples in world units.
    pub radius: f32,
    /// Candidate draws around an active point before it is retired.
    pub rejection_threshold: usize,
}

impl PoissonDiskSampling {
    /// Create a new PoissonDiskSampling with specified radius.
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            rejection_threshold: DEFAULT_REJECTION_THRESHOLD,
        }
    }

    /// Sets the rejection threshold.
    pub fn with_rejection_threshold(mut self, rejection_threshold: usize) -> Self {
        self.rejection_threshold = rejection_threshold;
        self
    }
}

impl PositionSampling for PoissonDiskSampling {
    fn generate(&self, domain_extent: Vector2<f32>, rng: &mut dyn RngCore) -> Vec<Vector2<f32>> {
        let region = Rect::centered(Vec2::from(domain_extent));
        let config = SamplerConfig::new(self.radius, region)
            .with_rejection_threshold(self.rejection_threshold);

        match PoissonDiskSampler::try_new(config) {
            Ok(sampler) => sampler.sample(rng).into_iter().map(Into::into).collect(),
            Err(err) => {
                warn!("Poisson disk sampling skipped: {}.", err);
                Vec::new()
            }
        }
    }
}
