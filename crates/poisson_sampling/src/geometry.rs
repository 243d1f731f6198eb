//! Region type for sampling.
//!
//! Points and sizes are plain [`glam::Vec2`] values. A [`Rect`] pairs an origin with a
//! size; a bare size converts into a rect anchored at the origin.
use glam::Vec2;
use mint::Vector2;

use crate::error::{Error, Result};

/// Axis-aligned rectangle given by its minimum corner and its size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Minimum corner in world units.
    pub origin: Vec2,
    /// Width (`x`) and height (`y`) in world units.
    pub size: Vec2,
}

impl Rect {
    /// Creates a rectangle from its minimum corner and size.
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Creates a rectangle of the given size anchored at `(0, 0)`.
    pub fn from_size(size: Vec2) -> Self {
        Self {
            origin: Vec2::ZERO,
            size,
        }
    }

    /// Creates a rectangle of the given extent centered on `(0, 0)`.
    pub fn centered(extent: Vec2) -> Self {
        Self {
            origin: -extent * 0.5,
            size: extent,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Maximum corner (exclusive).
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }

    /// Half-open containment: the near edges are inside, the far edges are not.
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.origin.x && point.y >= self.origin.y && point.x < max.x && point.y < max.y
    }

    /// Checks that the rectangle has a finite origin and a finite, positive size.
    pub fn validate(&self) -> Result<()> {
        if !self.origin.is_finite() {
            return Err(Error::InvalidConfig("region origin must be finite".into()));
        }
        if !self.size.is_finite() || self.size.x <= 0.0 || self.size.y <= 0.0 {
            return Err(Error::InvalidConfig(
                "region size must be finite and > 0 in both components".into(),
            ));
        }
        let max = self.max();
        if !max.is_finite() || max.x <= self.origin.x || max.y <= self.origin.y {
            return Err(Error::InvalidConfig(
                "region size vanishes at this origin in f32".into(),
            ));
        }
        Ok(())
    }
}

impl From<Vec2> for Rect {
    fn from(size: Vec2) -> Self {
        Rect::from_size(size)
    }
}

impl From<Vector2<f32>> for Rect {
    fn from(size: Vector2<f32>) -> Self {
        Rect::from_size(Vec2::from(size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_converts_to_zero_origin_rect() {
        let rect: Rect = Vec2::new(4.0, 3.0).into();
        assert_eq!(rect.origin, Vec2::ZERO);
        assert_eq!(rect.width(), 4.0);
        assert_eq!(rect.height(), 3.0);

        let from_mint: Rect = Vector2 { x: 4.0, y: 3.0 }.into();
        assert_eq!(from_mint, rect);
    }

    #[test]
    fn centered_rect_spans_both_sides_of_origin() {
        let rect = Rect::centered(Vec2::new(10.0, 4.0));
        assert_eq!(rect.origin, Vec2::new(-5.0, -2.0));
        assert_eq!(rect.max(), Vec2::new(5.0, 2.0));
    }

    #[test]
    fn contains_is_half_open() {
        let rect = Rect::new(Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0));
        assert!(rect.contains(Vec2::new(1.0, 1.0)));
        assert!(rect.contains(Vec2::new(2.5, 1.5)));
        assert!(!rect.contains(Vec2::new(3.0, 1.5)));
        assert!(!rect.contains(Vec2::new(1.5, 3.0)));
        assert!(!rect.contains(Vec2::new(0.999, 1.5)));
    }

    #[test]
    fn validate_rejects_degenerate_regions() {
        assert!(Rect::from_size(Vec2::new(1.0, 1.0)).validate().is_ok());
        assert!(Rect::from_size(Vec2::new(0.0, 1.0)).validate().is_err());
        assert!(Rect::from_size(Vec2::new(1.0, -2.0)).validate().is_err());
        assert!(Rect::from_size(Vec2::new(f32::INFINITY, 1.0))
            .validate()
            .is_err());
        assert!(Rect::new(Vec2::new(f32::NAN, 0.0), Vec2::ONE)
            .validate()
            .is_err());
        // One unit is below f32 resolution at 1e8.
        assert!(Rect::new(Vec2::new(1e8, 0.0), Vec2::ONE)
            .validate()
            .is_err());
        assert!(Rect::new(Vec2::new(f32::MAX, 0.0), Vec2::new(f32::MAX, 1.0))
            .validate()
            .is_err());
        assert!(Rect::new(Vec2::new(1e5, 1e5), Vec2::new(60.0, 60.0))
            .validate()
            .is_ok());
    }
}
