//! Random terrain generation
//!
//! Produces a piecewise-linear height profile spanning the arena width,
//! plus two closing points so the same point list doubles as a filled
//! polygon outline for rendering hosts. The closing points are never
//! collision-tested.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Parameters for terrain generation (whole pixels, matching the step
/// granularity of the profile)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TerrainConfig {
    /// Minimum horizontal distance between profile points
    pub min_step: i32,
    /// Maximum horizontal distance between profile points
    pub max_step: i32,
    /// Minimum height of a point above the arena floor
    pub min_height_offset: i32,
    /// Maximum height of a point above the arena floor
    pub max_height_offset: i32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            min_step: TERRAIN_MIN_STEP,
            max_step: TERRAIN_MAX_STEP,
            min_height_offset: TERRAIN_MIN_HEIGHT_OFFSET,
            max_height_offset: TERRAIN_MAX_HEIGHT_OFFSET,
        }
    }
}

/// Immutable piecewise-linear terrain profile
///
/// The point list is the walkable polyline in ascending x, then two
/// closing points `(width, height)` and `(0, height)` that complete the
/// polygon along the arena floor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainProfile {
    points: Vec<Vec2>,
    width: f32,
    height: f32,
}

impl TerrainProfile {
    /// Generate a random profile covering `[0, width]` with no x-gaps.
    ///
    /// Deterministic: the same seed and config always produce the same
    /// point sequence.
    pub fn generate(width: f32, height: f32, config: &TerrainConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut points = Vec::new();

        let mut x = 0.0_f32;
        while x <= width {
            let offset =
                rng.random_range(config.min_height_offset..=config.max_height_offset) as f32;
            points.push(Vec2::new(x, height - offset));
            x += rng.random_range(config.min_step..=config.max_step) as f32;
        }

        // The loop can stop short of the right edge; extend the last height
        // so the walkable span reaches x = width.
        if let Some(last) = points.last().copied()
            && last.x < width
        {
            points.push(Vec2::new(width, last.y));
        }

        // Close the polygon along the floor (rendering only).
        points.push(Vec2::new(width, height));
        points.push(Vec2::new(0.0, height));

        Self {
            points,
            width,
            height,
        }
    }

    /// Build a profile from an explicit walkable polyline; the closing
    /// points are appended. For hosts that bring their own terrain.
    pub fn from_walkable(mut points: Vec<Vec2>, width: f32, height: f32) -> Self {
        points.push(Vec2::new(width, height));
        points.push(Vec2::new(0.0, height));
        Self {
            points,
            width,
            height,
        }
    }

    /// Full polygon outline, including the two closing points.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Points of the walkable polyline (closing points excluded).
    pub fn walkable_points(&self) -> &[Vec2] {
        &self.points[..self.points.len() - 2]
    }

    /// Walkable segments in ascending index order.
    pub fn walkable_segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.walkable_points().windows(2).map(|w| (w[0], w[1]))
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

/// Terrain height at `x` along the segment `p1 -> p2`, by linear
/// interpolation. A vertical segment has no single height; `p1.y` is used,
/// which also avoids the division by zero.
#[inline]
pub fn height_on_segment(p1: Vec2, p2: Vec2, x: f32) -> f32 {
    if p2.x == p1.x {
        p1.y
    } else {
        p1.y + (p2.y - p1.y) / (p2.x - p1.x) * (x - p1.x)
    }
}
