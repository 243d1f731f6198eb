use glam::Vec2;
use poisson_sampling::prelude::*;
use poisson_sampling_examples::{init_tracing, render_points_to_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let extent = Vec2::new(400.0, 400.0);
    let region = Rect::centered(extent);

    for threshold in [1, 5, 30] {
        let strategy = PoissonDiskSampling::new(8.0).with_rejection_threshold(threshold);
        let mut rng = StdRng::seed_from_u64(7);
        let points: Vec<Vec2> = strategy
            .generate(extent.into(), &mut rng)
            .into_iter()
            .map(Vec2::from)
            .collect();

        let config = RenderConfig::new((800, 800), region).with_dot([120, 40, 40], 3);
        render_points_to_png(
            &points,
            &config,
            format!("strategy-threshold-{threshold}.png"),
        )?;
    }
    Ok(())
}
