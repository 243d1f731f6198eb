use glam::Vec2;
use poisson_sampling::prelude::*;
use poisson_sampling_examples::{init_tracing, render_points_to_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let region = Rect::new(Vec2::new(-500.0, -500.0), Vec2::new(1000.0, 1000.0));
    let sampler = PoissonDiskSampler::try_new(SamplerConfig::new(12.0, region))?;
    let mut rng = StdRng::seed_from_u64(42);

    let run = sampler.sample_with_stats(&mut rng);
    tracing::info!(
        "Sampled {} points ({} candidates, {} rejected).",
        run.points.len(),
        run.stats.candidates_evaluated,
        run.stats.candidates_rejected,
    );

    let config = RenderConfig::new((1000, 1000), region).with_dot([20, 60, 20], 3);
    render_points_to_png(&run.points, &config, "stipple-basic.png")?;
    Ok(())
}
