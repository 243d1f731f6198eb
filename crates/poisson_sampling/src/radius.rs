//! Radius estimate for a target point count.
//!
//! The estimate is an empirical power-law fit of how many points a full sampling run
//! produces in a 100×100 region, scaled linearly with the region's `width + height`.
//! It is not derived from the sampling loop; actual counts vary from run to run.
use crate::error::{Error, Result};
use crate::geometry::Rect;

/// Side length of the square region the fit was measured on.
const REFERENCE_EXTENT: f32 = 100.0;
const FIT_EXPONENT: f32 = -0.562;
const FIT_SCALE: f32 = 105.0;

/// Returns a radius that yields roughly `point_count` points when sampling `region`.
///
/// ```
/// use glam::Vec2;
/// use poisson_sampling::radius::approximate_radius;
///
/// let r = approximate_radius(100, Vec2::new(100.0, 100.0)).unwrap();
/// assert!(r > 7.0 && r < 9.0);
/// ```
pub fn approximate_radius(point_count: usize, region: impl Into<Rect>) -> Result<f32> {
    if point_count == 0 {
        return Err(Error::InvalidConfig("point_count must be > 0".into()));
    }
    let region = region.into();
    region.validate()?;

    let square_factor = (region.width() + region.height()) / (2.0 * REFERENCE_EXTENT);
    Ok((point_count as f32).powf(FIT_EXPONENT) * FIT_SCALE * square_factor)
}
