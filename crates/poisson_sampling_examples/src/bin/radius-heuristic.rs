use glam::Vec2;
use poisson_sampling::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const TARGETS: [usize; 6] = [10, 50, 100, 500, 1_000, 5_000];
const RUNS: u64 = 5;

fn main() -> anyhow::Result<()> {
    poisson_sampling_examples::init_tracing();

    for size in [Vec2::new(100.0, 100.0), Vec2::new(400.0, 100.0)] {
        for &target in &TARGETS {
            let radius = approximate_radius(target, size)?;

            let mut total = 0;
            for seed in 0..RUNS {
                let mut rng = StdRng::seed_from_u64(seed);
                total += sample(radius, size, &mut rng)?.len();
            }
            let mean = total as f32 / RUNS as f32;

            tracing::info!(
                "region {}x{} | target {:>5} | radius {:>8.3} | mean count {:>8.1} | ratio {:.2}",
                size.x,
                size.y,
                target,
                radius,
                mean,
                mean / target as f32,
            );
        }
    }
    Ok(())
}
