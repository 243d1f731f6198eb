//! Poisson-disk sampler: configuration, run state and the accept/reject loop.
//!
//! A run seeds one uniformly random point, then repeatedly picks a random member of
//! the active frontier and draws up to `rejection_threshold` candidates in the annulus
//! `[radius, 2 * radius]` around it. The first candidate that lies inside the region and
//! keeps at least `radius` to every accepted point is accepted; if none does, the
//! frontier member is retired. The run ends when the frontier is empty.
//!
//! Points are generated and tested directly in the region's coordinate frame, so the
//! distance and containment checks apply to the exact values that are returned.
use std::f32::consts::TAU;

use glam::Vec2;
use rand::RngCore;
use tracing::debug;

use crate::error::{Error, Result};
use crate::frontier::ActiveFrontier;
use crate::geometry::Rect;
use crate::grid::{cell_size_for, SpatialGrid, MAX_GRID_CELLS};
use crate::random::{next_down, rand01, rand_range};

/// Candidate draws per frontier pick before the pick is retired.
pub const DEFAULT_REJECTION_THRESHOLD: usize = 30;

/// Configuration for a Poisson-disk sampling run.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplerConfig {
    /// Minimum distance between any two output points, in world units.
    pub radius: f32,
    /// Region to fill. Output points are expressed in its coordinate frame.
    pub region: Rect,
    /// Candidate draws around a frontier point before it is retired.
    pub rejection_threshold: usize,
}

impl SamplerConfig {
    /// Creates a new [`SamplerConfig`] with the default rejection threshold.
    pub fn new(radius: f32, region: impl Into<Rect>) -> Self {
        Self {
            radius,
            region: region.into(),
            rejection_threshold: DEFAULT_REJECTION_THRESHOLD,
        }
    }

    /// Sets the rejection threshold.
    pub fn with_rejection_threshold(mut self, rejection_threshold: usize) -> Self {
        self.rejection_threshold = rejection_threshold;
        self
    }

    /// Sets the region.
    pub fn with_region(mut self, region: impl Into<Rect>) -> Self {
        self.region = region.into();
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        self.grid_dimensions().map(|_| ())
    }

    /// Validates the configuration and returns the background grid's `(cols, rows)`.
    fn grid_dimensions(&self) -> Result<(usize, usize)> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(Error::InvalidConfig(
                "radius must be finite and > 0".into(),
            ));
        }
        if self.rejection_threshold == 0 {
            return Err(Error::InvalidConfig(
                "rejection_threshold must be > 0".into(),
            ));
        }
        self.region.validate()?;

        SpatialGrid::dimensions_for(cell_size_for(self.radius), self.region.size).ok_or_else(|| {
            Error::InvalidConfig(format!(
                "radius {} is too small for a {}x{} region (grid would exceed {} cells)",
                self.radius,
                self.region.width(),
                self.region.height(),
                MAX_GRID_CELLS,
            ))
        })
    }
}

/// Counters collected during one sampling run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SampleStats {
    /// Candidate points drawn around frontier points.
    pub candidates_evaluated: usize,
    /// Candidates rejected for leaving the region or crowding an accepted point.
    pub candidates_rejected: usize,
    /// Frontier points retired after exhausting their draws.
    pub frontier_evictions: usize,
    /// Largest number of simultaneously active points.
    pub peak_frontier_len: usize,
}

/// Output of [`PoissonDiskSampler::sample_with_stats`].
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct SampleRun {
    /// Accepted points in acceptance order, in the region's coordinate frame.
    pub points: Vec<Vec2>,
    /// Counters for the run.
    pub stats: SampleStats,
}

/// Validated sampler. Each call to [`sample`](Self::sample) is an independent run.
#[derive(Debug, Clone)]
pub struct PoissonDiskSampler {
    config: SamplerConfig,
    grid_dims: (usize, usize),
}

impl PoissonDiskSampler {
    pub fn try_new(config: SamplerConfig) -> Result<Self> {
        let grid_dims = config.grid_dimensions()?;
        Ok(Self { config, grid_dims })
    }

    /// Creates a sampler from a configuration known to be valid.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`SamplerConfig::validate`]; use [`Self::try_new`] for
    /// untrusted input.
    pub fn new(config: SamplerConfig) -> Self {
        match Self::try_new(config) {
            Ok(sampler) => sampler,
            Err(err) => panic!("PoissonDiskSampler::new: {err}"),
        }
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Runs the sampler, returning the accepted points.
    pub fn sample<R: RngCore + ?Sized>(&self, rng: &mut R) -> Vec<Vec2> {
        self.sample_with_stats(rng).points
    }

    /// Runs the sampler, returning the accepted points together with run counters.
    pub fn sample_with_stats<R: RngCore + ?Sized>(&self, rng: &mut R) -> SampleRun {
        let region = self.config.region;
        let mut state = SamplerState::new(self.config.radius, region, self.grid_dims);
        debug!(
            "Poisson disk run: radius {} | region {}x{} | grid {:?} | cell size {}.",
            self.config.radius,
            region.width(),
            region.height(),
            state.grid.dimensions(),
            state.grid.cell_size(),
        );

        state.seed(rng);
        state.grow(rng, self.config.rejection_threshold);

        let run = state.finish();
        debug!(
            "Poisson disk run finished: {} points | {} candidates | {} rejected | peak frontier {}.",
            run.points.len(),
            run.stats.candidates_evaluated,
            run.stats.candidates_rejected,
            run.stats.peak_frontier_len,
        );
        run
    }
}

/// Samples `region` with minimum distance `radius` and the default rejection threshold.
///
/// `region` may be a size (`Vec2`, anchored at the origin) or a [`Rect`].
pub fn sample<R: RngCore + ?Sized>(
    radius: f32,
    region: impl Into<Rect>,
    rng: &mut R,
) -> Result<Vec<Vec2>> {
    sample_with_threshold(radius, region, DEFAULT_REJECTION_THRESHOLD, rng)
}

/// Like [`sample`], with an explicit rejection threshold.
pub fn sample_with_threshold<R: RngCore + ?Sized>(
    radius: f32,
    region: impl Into<Rect>,
    rejection_threshold: usize,
    rng: &mut R,
) -> Result<Vec<Vec2>> {
    let config = SamplerConfig::new(radius, region).with_rejection_threshold(rejection_threshold);
    Ok(PoissonDiskSampler::try_new(config)?.sample(rng))
}

/// Draws a point at a uniform distance in `[min_distance, max_distance]` and a
/// uniform angle around `center`.
fn random_point_around<R: RngCore + ?Sized>(
    rng: &mut R,
    center: Vec2,
    min_distance: f32,
    max_distance: f32,
) -> Vec2 {
    let distance = rand_range(rng, min_distance, max_distance);
    let angle = TAU * rand01(rng);
    center + Vec2::from_angle(angle) * distance
}

/// Grid, frontier and point store of a single run.
///
/// The grid is keyed relative to the region origin; stored points are in the
/// region's own frame.
struct SamplerState {
    radius: f32,
    radius_squared: f32,
    region: Rect,
    grid: SpatialGrid,
    frontier: ActiveFrontier,
    points: Vec<Vec2>,
    stats: SampleStats,
}

impl SamplerState {
    fn new(radius: f32, region: Rect, grid_dims: (usize, usize)) -> Self {
        Self {
            radius,
            radius_squared: radius * radius,
            region,
            grid: SpatialGrid::new(region.origin, cell_size_for(radius), grid_dims),
            frontier: ActiveFrontier::new(),
            points: Vec::new(),
            stats: SampleStats::default(),
        }
    }

    fn is_valid(&self, candidate: Vec2) -> bool {
        if !self.region.contains(candidate) {
            return false;
        }

        // Equal distance is allowed; only strictly closer neighbors reject.
        self.grid
            .neighbors(candidate)
            .all(|idx| candidate.distance_squared(self.points[idx]) >= self.radius_squared)
    }

    fn add_point(&mut self, point: Vec2) {
        let idx = self.points.len();
        self.points.push(point);
        self.grid.insert(point, idx);
        self.frontier.push(idx);
        self.stats.peak_frontier_len = self.stats.peak_frontier_len.max(self.frontier.len());
    }

    fn seed<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        let min = self.region.origin;
        let max = self.region.max();
        let x = (min.x + self.region.width() * rand01(rng)).clamp(min.x, next_down(max.x));
        let y = (min.y + self.region.height() * rand01(rng)).clamp(min.y, next_down(max.y));
        self.add_point(Vec2::new(x, y));
    }

    fn try_spawn_around<R: RngCore + ?Sized>(
        &mut self,
        rng: &mut R,
        center: Vec2,
        attempts: usize,
    ) -> Option<Vec2> {
        for _ in 0..attempts {
            let candidate = random_point_around(rng, center, self.radius, 2.0 * self.radius);
            self.stats.candidates_evaluated += 1;
            if self.is_valid(candidate) {
                return Some(candidate);
            }
            self.stats.candidates_rejected += 1;
        }
        None
    }

    fn grow<R: RngCore + ?Sized>(&mut self, rng: &mut R, rejection_threshold: usize) {
        while let Some((slot, idx)) = self.frontier.pick(rng) {
            let center = self.points[idx];
            match self.try_spawn_around(rng, center, rejection_threshold) {
                Some(candidate) => self.add_point(candidate),
                None => {
                    self.frontier.evict(slot);
                    self.stats.frontier_evictions += 1;
                }
            }
        }
    }

    fn finish(self) -> SampleRun {
        debug_assert!(self.frontier.is_empty());
        SampleRun {
            points: self.points,
            stats: self.stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::random::tests::FixedRng;

    fn pairwise_min_distance(points: &[Vec2]) -> f32 {
        let mut min = f32::MAX;
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                min = min.min(points[i].distance(points[j]));
            }
        }
        min
    }

    fn state(radius: f32, region: impl Into<Rect>) -> SamplerState {
        let config = SamplerConfig::new(radius, region);
        let dims = config.grid_dimensions().expect("valid config");
        SamplerState::new(radius, config.region, dims)
    }

    #[test]
    fn config_defaults_and_builders() {
        let config = SamplerConfig::new(2.0, Vec2::new(10.0, 5.0));
        assert_eq!(config.rejection_threshold, DEFAULT_REJECTION_THRESHOLD);
        assert_eq!(config.region, Rect::from_size(Vec2::new(10.0, 5.0)));

        let rect = Rect::new(Vec2::new(3.0, 4.0), Vec2::new(1.0, 1.0));
        let config = config.with_rejection_threshold(5).with_region(rect);
        assert_eq!(config.rejection_threshold, 5);
        assert_eq!(config.region, rect);
    }

    #[test]
    fn validate_rejects_bad_inputs() {
        let size = Vec2::new(10.0, 10.0);
        assert!(SamplerConfig::new(1.0, size).validate().is_ok());
        assert!(SamplerConfig::new(0.0, size).validate().is_err());
        assert!(SamplerConfig::new(-1.0, size).validate().is_err());
        assert!(SamplerConfig::new(f32::NAN, size).validate().is_err());
        assert!(SamplerConfig::new(1.0, Vec2::new(0.0, 10.0))
            .validate()
            .is_err());
        assert!(SamplerConfig::new(1.0, size)
            .with_rejection_threshold(0)
            .validate()
            .is_err());

        let err = PoissonDiskSampler::try_new(SamplerConfig::new(0.0, size)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn validate_rejects_radius_too_small_for_grid() {
        let unit = Vec2::new(1.0, 1.0);
        for radius in [1e-20, 1e-5] {
            let err = SamplerConfig::new(radius, unit).validate().unwrap_err();
            assert!(matches!(err, Error::InvalidConfig(_)), "radius {radius}");
        }
        assert!(SamplerConfig::new(1e-2, unit).validate().is_ok());

        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            sample(1e-20, unit, &mut rng),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn validate_rejects_non_finite_region() {
        let origin_nan = Rect::new(Vec2::new(f32::NAN, 0.0), Vec2::new(10.0, 10.0));
        let size_inf = Rect::new(Vec2::ZERO, Vec2::new(f32::INFINITY, 10.0));
        assert!(SamplerConfig::new(1.0, origin_nan).validate().is_err());
        assert!(SamplerConfig::new(1.0, size_inf).validate().is_err());
    }

    #[test]
    #[should_panic(expected = "region origin must be finite")]
    fn new_panics_on_non_finite_origin() {
        let region = Rect::new(Vec2::new(f32::INFINITY, 0.0), Vec2::new(10.0, 10.0));
        let _ = PoissonDiskSampler::new(SamplerConfig::new(1.0, region));
    }

    #[test]
    #[should_panic(expected = "too small")]
    fn new_panics_when_grid_would_be_too_large() {
        let _ = PoissonDiskSampler::new(SamplerConfig::new(1e-20, Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn random_point_around_stays_in_annulus() {
        let mut rng = StdRng::seed_from_u64(5);
        let center = Vec2::new(3.0, -2.0);
        for _ in 0..500 {
            let p = random_point_around(&mut rng, center, 1.0, 2.0);
            let d = p.distance(center);
            assert!((1.0 - 1e-5..=2.0 + 1e-5).contains(&d), "distance {d}");
        }
    }

    #[test]
    fn random_point_around_uses_radius_then_angle() {
        // Zero draws: minimum distance, angle 0.
        let mut rng = FixedRng { value: 0 };
        let p = random_point_around(&mut rng, Vec2::new(1.0, 1.0), 2.0, 4.0);
        assert!((p - Vec2::new(3.0, 1.0)).length() < 1e-6);
    }

    #[test]
    fn is_valid_rejects_close_neighbors_and_out_of_bounds() {
        let mut state = state(1.0, Vec2::new(4.0, 4.0));
        state.add_point(Vec2::new(2.0, 2.0));

        assert!(!state.is_valid(Vec2::new(2.5, 2.0)));
        assert!(state.is_valid(Vec2::new(3.5, 3.5)));
        assert!(!state.is_valid(Vec2::new(-0.1, 1.0)));
        assert!(!state.is_valid(Vec2::new(4.0, 1.0)));
        assert!(!state.is_valid(Vec2::new(1.0, 4.0)));
        assert!(state.is_valid(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn is_valid_accepts_exact_radius() {
        let mut state = state(1.0, Vec2::new(4.0, 4.0));
        state.add_point(Vec2::new(1.0, 1.0));
        assert!(state.is_valid(Vec2::new(2.0, 1.0)));
        assert!(state.is_valid(Vec2::new(1.0, 2.0)));
    }

    #[test]
    fn add_point_updates_store_grid_and_frontier() {
        let mut state = state(1.0, Vec2::new(4.0, 4.0));
        state.add_point(Vec2::new(0.5, 0.5));
        state.add_point(Vec2::new(3.0, 3.0));

        assert_eq!(state.points.len(), 2);
        assert_eq!(state.frontier.len(), 2);
        assert_eq!(state.stats.peak_frontier_len, 2);
        let cell = state.grid.cell_index(Vec2::new(3.0, 3.0));
        assert_eq!(state.grid.get(cell), Some(1));
    }

    #[test]
    fn seed_stays_inside_half_open_region() {
        let mut state = state(1.0, Vec2::new(4.0, 2.0));
        let mut rng = FixedRng { value: u32::MAX };
        state.seed(&mut rng);
        let p = state.points[0];
        assert!(p.x < 4.0 && p.y < 2.0);
        assert!(p.x >= 0.0 && p.y >= 0.0);
    }

    #[test]
    fn seed_is_placed_inside_an_offset_region() {
        let region = Rect::new(Vec2::new(1e5, -1e5), Vec2::new(60.0, 60.0));
        for value in [0, u32::MAX / 2, u32::MAX] {
            let mut state = state(1.0, region);
            state.seed(&mut FixedRng { value });
            assert!(region.contains(state.points[0]), "{}", state.points[0]);
        }
    }

    #[test]
    fn is_valid_checks_offset_region_in_its_own_frame() {
        let region = Rect::new(Vec2::new(100.0, -50.0), Vec2::new(4.0, 4.0));
        let mut state = state(1.0, region);
        state.add_point(Vec2::new(102.0, -48.0));

        assert!(!state.is_valid(Vec2::new(102.5, -48.0)));
        assert!(state.is_valid(Vec2::new(103.0, -48.0)));
        assert!(state.is_valid(Vec2::new(100.0, -50.0)));
        assert!(!state.is_valid(Vec2::new(104.0, -48.0)));
        assert!(!state.is_valid(Vec2::new(101.0, -50.5)));
    }

    #[test]
    fn every_frontier_point_is_evicted_exactly_once() {
        let sampler = PoissonDiskSampler::try_new(SamplerConfig::new(1.0, Vec2::new(10.0, 10.0)))
            .expect("valid config");
        let mut rng = StdRng::seed_from_u64(11);
        let run = sampler.sample_with_stats(&mut rng);

        assert_eq!(run.stats.frontier_evictions, run.points.len());
        assert!(run.stats.peak_frontier_len >= 1);
        assert!(run.stats.peak_frontier_len <= run.points.len());
        assert_eq!(
            run.stats.candidates_evaluated - run.stats.candidates_rejected,
            run.points.len() - 1
        );
    }

    #[test]
    fn generated_points_respect_radius_and_bounds() {
        let mut rng = StdRng::seed_from_u64(123);
        let points = sample(0.3, Vec2::new(1.0, 1.0), &mut rng).expect("valid input");

        assert!(!points.is_empty());
        for p in &points {
            assert!(p.x >= 0.0 && p.x < 1.0);
            assert!(p.y >= 0.0 && p.y < 1.0);
        }
        if points.len() > 1 {
            assert!(pairwise_min_distance(&points) >= 0.3);
        }
    }

    #[test]
    fn output_is_in_the_region_frame() {
        let rect = Rect::new(Vec2::new(100.0, -50.0), Vec2::new(20.0, 10.0));
        let mut rng = StdRng::seed_from_u64(3);
        let points = sample(2.0, rect, &mut rng).expect("valid input");

        assert!(points.len() > 1);
        assert!(points.iter().all(|p| rect.contains(*p)));
        assert!(pairwise_min_distance(&points) >= 2.0);
    }

    #[test]
    fn single_threshold_still_terminates() {
        let mut rng = StdRng::seed_from_u64(9);
        let points =
            sample_with_threshold(1.0, Vec2::new(20.0, 20.0), 1, &mut rng).expect("valid input");
        assert!(!points.is_empty());
        assert!(pairwise_min_distance(&points) >= 1.0);
    }

    #[test]
    fn sampler_is_usable_through_dyn_rng() {
        let sampler = PoissonDiskSampler::new(SamplerConfig::new(2.0, Vec2::new(10.0, 10.0)));
        let mut rng = StdRng::seed_from_u64(1);
        let dyn_rng: &mut dyn RngCore = &mut rng;
        assert!(!sampler.sample(dyn_rng).is_empty());
    }
}
