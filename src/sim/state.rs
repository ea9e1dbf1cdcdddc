//! Simulation state: surface dimensions and the point field

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::consts::MAX_POINT_COUNT;

/// Logical surface size plus device pixel ratio
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurfaceSize {
    /// Logical width (CSS px)
    pub width: f32,
    /// Logical height (CSS px)
    pub height: f32,
    /// Device pixel ratio (backing px per logical px)
    pub scale: f32,
}

impl SurfaceSize {
    pub fn new(width: f32, height: f32, scale: f32) -> Self {
        // Browsers may report 0 for devicePixelRatio in odd embeddings
        let scale = if scale > 0.0 && scale.is_finite() { scale } else { 1.0 };
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            scale,
        }
    }

    /// Backing-store size in physical pixels
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.scale).round() as u32,
            (self.height * self.scale).round() as u32,
        )
    }

    #[inline]
    pub fn logical(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

/// A moving dot
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub pos: Vec2,
    /// Logical px per frame
    pub vel: Vec2,
    /// Index into the palette
    pub color: usize,
}

impl Point {
    pub fn new(pos: Vec2, vel: Vec2, color: usize) -> Self {
        Self { pos, vel, color }
    }
}

/// Serializable view of a field (points and bounds, no RNG state)
#[derive(Debug, Serialize)]
pub struct FieldSnapshot<'a> {
    pub size: SurfaceSize,
    pub points: &'a [Point],
}

/// The full set of points and the bounds they move within
#[derive(Debug, Clone)]
pub struct Field {
    pub points: Vec<Point>,
    pub size: SurfaceSize,
    rng: Pcg32,
}

impl Field {
    /// Create an empty field; call [`Field::seed`] to populate it
    pub fn new(size: SurfaceSize, seed: u64) -> Self {
        Self {
            points: Vec::new(),
            size,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Populate `count` points with random positions and velocities.
    ///
    /// Colors are assigned round-robin over `palette_len` entries. Does
    /// nothing if the field already holds points.
    pub fn seed(&mut self, count: usize, palette_len: usize, max_speed: f32) {
        if !self.points.is_empty() {
            return;
        }
        let palette_len = palette_len.max(1);
        self.points.reserve(count.min(MAX_POINT_COUNT));
        for i in 0..count {
            let pos = Vec2::new(
                self.rng.random::<f32>() * self.size.width,
                self.rng.random::<f32>() * self.size.height,
            );
            // Uniform in [-max_speed, max_speed)
            let vel = Vec2::new(
                (self.rng.random::<f32>() - 0.5) * 2.0 * max_speed,
                (self.rng.random::<f32>() - 0.5) * 2.0 * max_speed,
            );
            self.points.push(Point::new(pos, vel, i % palette_len));
        }
        log::debug!("Seeded {} points over {}x{}", count, self.size.width, self.size.height);
    }

    /// Update the bounds; points are left where they are
    pub fn set_size(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    pub fn snapshot(&self) -> FieldSnapshot<'_> {
        FieldSnapshot {
            size: self.size,
            points: &self.points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
