//! PNG rendering of sampled points and tracing setup shared by the example binaries.
use std::path::Path;

use anyhow::Context;
use glam::Vec2;
use image::{Rgb, RgbImage};
use poisson_sampling::geometry::Rect;
use tracing_subscriber::EnvFilter;

/// Installs a formatting subscriber. `RUST_LOG` overrides the default `info` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Ignore the error when a subscriber is already installed.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// How points are drawn into an image.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output image size in pixels.
    pub image_size: (u32, u32),
    /// World-space region mapped onto the whole image.
    pub region: Rect,
    /// Background color.
    pub background: [u8; 3],
    /// Dot color.
    pub dot_color: [u8; 3],
    /// Dot radius in pixels.
    pub dot_radius: i32,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), region: impl Into<Rect>) -> Self {
        Self {
            image_size,
            region: region.into(),
            background: [245, 240, 230],
            dot_color: [30, 30, 30],
            dot_radius: 2,
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_dot(mut self, color: [u8; 3], radius: i32) -> Self {
        self.dot_color = color;
        self.dot_radius = radius;
        self
    }

    fn to_pixel(&self, p: Vec2) -> (i32, i32) {
        let (w, h) = self.image_size;
        let t = (p - self.region.origin) / self.region.size;
        ((t.x * w as f32) as i32, (t.y * h as f32) as i32)
    }
}

/// Draws every point as a filled disc and writes the image to `path`.
pub fn render_points_to_png(
    points: &[Vec2],
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (w, h) = config.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(config.background));
    let r = config.dot_radius;

    for &p in points {
        let (cx, cy) = config.to_pixel(p);
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy > r * r {
                    continue;
                }
                let (x, y) = (cx + dx, cy + dy);
                if x >= 0 && y >= 0 && (x as u32) < w && (y as u32) < h {
                    img.put_pixel(x as u32, y as u32, Rgb(config.dot_color));
                }
            }
        }
    }

    let path = path.as_ref();
    img.save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!("Wrote {} points to {}.", points.len(), path.display());
    Ok(())
}
