//! Uniform draws on top of any [`RngCore`].
//!
//! The sampler only needs three primitives from its random source: a float in
//! `[0, 1)`, a float in a closed range and an index into a non-empty collection.
//! Each one consumes exactly one `next_u32` so seeded runs stay reproducible.
use rand::RngCore;

const MANTISSA_BITS: u32 = 24;
const MANTISSA_SCALE: f32 = 1.0 / (1u32 << MANTISSA_BITS) as f32;
const MANTISSA_MAX: f32 = ((1u32 << MANTISSA_BITS) - 1) as f32;

/// Generate a random float in the range [0, 1).
#[inline]
pub fn rand01<R: RngCore + ?Sized>(rng: &mut R) -> f32 {
    // Only the top 24 bits fit in an f32 mantissa; keeping them avoids rounding up to 1.0.
    (rng.next_u32() >> (32 - MANTISSA_BITS)) as f32 * MANTISSA_SCALE
}

/// Generate a random float in the closed range `[min, max]`.
#[inline]
pub fn rand_range<R: RngCore + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    let t = (rng.next_u32() >> (32 - MANTISSA_BITS)) as f32 / MANTISSA_MAX;
    (min + t * (max - min)).clamp(min.min(max), max.max(min))
}

/// Pick a uniformly random index in `0..len`.
///
/// `len` must be non-zero.
#[inline]
pub fn rand_index<R: RngCore + ?Sized>(rng: &mut R, len: usize) -> usize {
    debug_assert!(len > 0, "rand_index called with an empty range");
    debug_assert!(len as u64 <= u32::MAX as u64 + 1, "range too large for a u32 draw");
    ((rng.next_u32() as u64 * len as u64) >> 32) as usize
}

/// Compute the next smaller representable float value.
///
/// Returns a value that is strictly less than the input, useful for
/// keeping coordinates strictly inside a half-open bound.
#[inline]
pub fn next_down(val: f32) -> f32 {
    if val.is_nan() {
        return f32::NAN;
    }

    if val == f32::NEG_INFINITY {
        return f32::NEG_INFINITY;
    }

    if val == f32::INFINITY {
        return f32::MAX;
    }

    if val == 0.0 {
        return -f32::from_bits(1);
    }

    let bits = val.to_bits();
    if val > 0.0 {
        f32::from_bits(bits - 1)
    } else {
        f32::from_bits(bits + 1)
    }
}
